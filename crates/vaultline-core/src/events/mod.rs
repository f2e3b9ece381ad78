use tracing::{error, info, warn};

use crate::errors::VaultlineError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn VaultlineError) {
    // User errors (missing workspace, bad JSON) are actionable locally and
    // do not indicate a fault in vaultline itself.
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error_occurred",
            error = %error,
            error_code = error.error_code()
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code()
        );
    }
}
