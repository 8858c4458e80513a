pub mod error;
pub mod types;
pub mod value;

pub use error::{ConverterError, Result};
pub use types::{TypeKey, XSD_NAMESPACE};
pub use value::Value;
