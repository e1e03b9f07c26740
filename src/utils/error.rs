use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Console write failed: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
