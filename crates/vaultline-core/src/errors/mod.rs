use std::error::Error;

/// Base trait for all vaultline errors
pub trait VaultlineError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input or local setup rather than
    /// a fault in the host environment
    fn is_user_error(&self) -> bool {
        false
    }
}
