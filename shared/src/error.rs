#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudioError {
    #[error("Missing input: {0}")]
    MissingInput(&'static str),
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
