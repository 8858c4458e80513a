// ============================================================================
// soapconv: type converters for SOAP engines
// ============================================================================

//! Registry of XML type converters and the engine options that own it.
//!
//! ```
//! use soapconv::{DateTimeTypeConverter, DateTypeConverter, EngineOptions};
//!
//! # fn main() -> soapconv::Result<()> {
//! let options = EngineOptions::new("service.wsdl")
//!     .add_type_converter(DateTimeTypeConverter::new())?
//!     .add_type_converter(DateTypeConverter::new())?;
//!
//! for entry in options.type_map() {
//!     println!("{}:{}", entry.type_ns(), entry.type_name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod converter;
pub mod options;
pub mod prelude;

pub use crate::core::{ConverterError, Result, TypeKey, Value, XSD_NAMESPACE};
pub use converter::{
    DateTimeTypeConverter, DateTypeConverter, TypeConverter, TypeConverterCollection,
};
pub use options::{EngineOptions, SoapVersion, TypeMapEntry};
