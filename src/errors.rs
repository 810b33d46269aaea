use thiserror::Error;

/// Application-level errors. API failures never reach this level; they are
/// handled where they land (dialog messages, panel logging).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
