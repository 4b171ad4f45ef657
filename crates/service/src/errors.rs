use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Carries the missing key; the message stays fixed so it can be shown to clients.
    #[error("key doesn't exist")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(key: &str) -> Self {
        Self::NotFound(key.to_string())
    }
}
