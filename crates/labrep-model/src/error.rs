use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown template: {0} (expected one-col or two-col)")]
    UnknownTemplate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
