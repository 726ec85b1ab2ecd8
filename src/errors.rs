use thiserror::Error;

use crate::channel::ChannelError;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bridge channel error: {0}")]
    Channel(#[from] ChannelError),
}

pub type AppResult<T> = Result<T, AppError>;
