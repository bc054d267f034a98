pub mod analyze;
pub mod assist;
pub mod serve;
pub mod snippet;

/// Result type shared by every command
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
