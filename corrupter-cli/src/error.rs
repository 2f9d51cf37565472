use data_error::CorrupterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Corrupter(#[from] CorrupterError),
}
