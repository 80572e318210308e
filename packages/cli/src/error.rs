use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
