//! Everything needed to register converters and build engine options.

pub use crate::converter::{
    DateTimeTypeConverter, DateTypeConverter, TypeConverter, TypeConverterCollection,
};
pub use crate::core::{ConverterError, Result, TypeKey, Value};
pub use crate::options::{EngineOptions, SoapVersion, TypeMapEntry};
