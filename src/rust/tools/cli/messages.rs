//! User-facing messages shared by the commands.

/// No source given on the command line or in the project config.
pub const SOURCE_UNDEFINED: &str = "Please specify the source file or directory to compile from.";
