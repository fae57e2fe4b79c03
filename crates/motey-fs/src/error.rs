#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid file extension `{0}`")]
    InvalidFileExtension(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("missing configuration :: {0}")]
    MissingConfig(String),
}

impl Error {
    pub fn missing_config(msg: String) -> Self {
        Self::MissingConfig(msg)
    }

    /// True if the error comes from a filesystem entry that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<motey_core::types::ExtensionError> for Error {
    fn from(value: motey_core::types::ExtensionError) -> Self {
        match value {
            motey_core::types::ExtensionError::Unsupported(ext) => Self::InvalidFileExtension(ext),
        }
    }
}
