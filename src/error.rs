//! Process-level errors.
//!
//! Request handling has no failure path: bad input only changes which
//! defaults apply. What can fail is startup (configuration) and serving
//! (binding the listen address).

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
