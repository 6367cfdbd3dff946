pub mod fs;

// CLI-specific modules (terminal output, config files, build pipeline)
#[cfg(feature = "cli")]
pub mod platform;

#[cfg(feature = "cli")]
pub mod services;

#[cfg(feature = "cli")]
pub mod tools;
