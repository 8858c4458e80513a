pub mod type_map;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::converter::{TypeConverter, TypeConverterCollection};
use crate::core::Result;

pub use type_map::{TypeMapEntry, build_type_map};

/// SOAP protocol version spoken by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SoapVersion {
    #[serde(rename = "1.1")]
    #[default]
    Soap11,
    #[serde(rename = "1.2")]
    Soap12,
}

/// SOAP engine configuration
///
/// Owns the type converters the engine resolves XML types with.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// WSDL location (URL or file path)
    pub wsdl: String,

    /// Protocol version
    pub soap_version: SoapVersion,

    /// Engine feature flags, passed through untouched
    pub features: u32,

    /// Registered type converters
    type_converters: TypeConverterCollection,
}

impl EngineOptions {
    /// Create options for a WSDL with no type converters
    pub fn new(wsdl: &str) -> Self {
        Self {
            wsdl: wsdl.to_string(),
            soap_version: SoapVersion::default(),
            features: 0,
            type_converters: TypeConverterCollection::new(),
        }
    }

    /// Set the SOAP version
    pub fn soap_version(mut self, version: SoapVersion) -> Self {
        self.soap_version = version;
        self
    }

    /// Set feature flags
    pub fn features(mut self, features: u32) -> Self {
        self.features = features;
        self
    }

    /// Replace the type converters
    pub fn with_type_converters(mut self, converters: TypeConverterCollection) -> Self {
        debug!(count = converters.len(), "type converters replaced");
        self.type_converters = converters;
        self
    }

    /// Register a converter; fails if its type is already taken
    pub fn add_type_converter<C: TypeConverter + 'static>(mut self, converter: C) -> Result<Self> {
        self.type_converters.add(converter)?;
        Ok(self)
    }

    /// Register or overwrite a converter
    pub fn set_type_converter<C: TypeConverter + 'static>(mut self, converter: C) -> Self {
        self.type_converters.set(converter);
        self
    }

    pub fn type_converters(&self) -> &TypeConverterCollection {
        &self.type_converters
    }

    pub fn type_converters_mut(&mut self) -> &mut TypeConverterCollection {
        &mut self.type_converters
    }

    /// Type map handed to the engine
    pub fn type_map(&self) -> Vec<TypeMapEntry> {
        build_type_map(&self.type_converters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{DateTimeTypeConverter, DateTypeConverter};

    #[test]
    fn test_defaults() {
        let options = EngineOptions::new("service.wsdl");
        assert_eq!(options.wsdl, "service.wsdl");
        assert_eq!(options.soap_version, SoapVersion::Soap11);
        assert_eq!(options.features, 0);
        assert!(options.type_converters().is_empty());
        assert!(options.type_map().is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let options = EngineOptions::new("http://example.com/service?wsdl")
            .soap_version(SoapVersion::Soap12)
            .features(3)
            .add_type_converter(DateTimeTypeConverter::new())
            .unwrap()
            .set_type_converter(DateTypeConverter::new());

        assert_eq!(options.soap_version, SoapVersion::Soap12);
        assert_eq!(options.features, 3);
        assert_eq!(options.type_converters().len(), 2);
    }

    #[test]
    fn test_add_duplicate_converter_fails() {
        let result = EngineOptions::new("service.wsdl")
            .add_type_converter(DateTypeConverter::new())
            .and_then(|options| options.add_type_converter(DateTypeConverter::new()));
        assert!(result.is_err());
    }
}
