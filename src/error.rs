use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Mail delivery failed: {0}")]
    Mail(String),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal server error")]
    Internal,
}
