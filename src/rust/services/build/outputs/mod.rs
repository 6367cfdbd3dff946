// Parent `services` module controls `cli` gating; avoid duplicating crate-level cfg here.
pub mod logs;
pub mod target;

pub use logs::LogWriter;
pub use target::OutputTarget;
