use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Validation errors
    #[error("Invalid passcode: {0}")]
    InvalidPasscode(String),

    // Hardware errors surfaced through the session loop
    #[error("Hardware error: {0}")]
    Hardware(String),
}

pub type Result<T> = std::result::Result<T, Error>;
