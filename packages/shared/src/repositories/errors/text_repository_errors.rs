#[derive(Debug)]
pub enum TextRepositoryError {
    Http(String),
    Status(u16),
    Deserialization(String),
}

impl std::fmt::Display for TextRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextRepositoryError::Http(msg) => write!(f, "HTTP error: {}", msg),
            TextRepositoryError::Status(code) => {
                write!(f, "Text provider responded with status {}", code)
            }
            TextRepositoryError::Deserialization(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for TextRepositoryError {}
