pub mod backup;
pub mod checkin;
pub mod checkout;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod master;
pub mod photos;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Admin gate: a plain shared-secret comparison, applied to the commands
/// that expose the full log. An empty configured password disables the
/// gate. Not an authentication boundary.
pub fn ensure_admin(cfg: &Config, password: &Option<String>) -> AppResult<()> {
    if cfg.admin_password.is_empty() {
        return Ok(());
    }

    match password {
        Some(given) if given == &cfg.admin_password => Ok(()),
        _ => Err(AppError::AccessDenied),
    }
}
