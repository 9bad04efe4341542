use eligo_core::model::InvalidInputError;
use eligo_core::SolveError;
use thiserror::Error;

use crate::instance::InstanceParseError;

pub(crate) type EligoResult<T> = Result<T, EligoError>;

#[derive(Error, Debug)]
pub(crate) enum EligoError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance file could not be parsed, more details: {0}")]
    InvalidInstance(#[from] InstanceParseError),
    #[error("The instance is not a valid problem: {0}")]
    InvalidInput(#[from] InvalidInputError),
    #[error("Failed to solve the instance: {0}")]
    Solve(#[from] SolveError),
}
