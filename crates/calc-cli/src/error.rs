//! Error types for the calculator front end

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Eval(#[from] calc_eval::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
