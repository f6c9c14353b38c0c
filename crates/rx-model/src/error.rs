use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("cost '{value}' is not a number")]
    MalformedCost { value: String },
    #[error("cost '{value}' does not fit in an integer total")]
    CostOutOfRange { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
