use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConverterError {
    #[error("Converter for this type already exists: {0}")]
    DuplicateConverter(String),

    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

pub type Result<T> = std::result::Result<T, ConverterError>;

impl From<roxmltree::Error> for ConverterError {
    fn from(err: roxmltree::Error) -> Self {
        Self::InvalidXml(err.to_string())
    }
}

impl From<chrono::ParseError> for ConverterError {
    fn from(err: chrono::ParseError) -> Self {
        Self::ConversionError(err.to_string())
    }
}
