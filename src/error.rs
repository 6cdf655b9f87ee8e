//! Error types for the bidi-style converter

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("\"flowDirection\" must either be \"rtl\" or \"ltr\", you are trying to pass \"{value}\"")]
    InvalidDirection { value: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    pub fn invalid_direction(value: impl Into<String>) -> Self {
        Self::InvalidDirection {
            value: value.into(),
        }
    }
}
