use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Values;
use tracing::debug;

use super::TypeConverter;
use crate::core::{ConverterError, Result, TypeKey};

/// Registry of type converters, at most one per `namespace:name` key
///
/// Iteration follows the order in which each key was first inserted.
/// Overwriting a key with [`set`](Self::set) replaces the converter in place.
///
/// Not synchronized: share it across threads only behind a lock.
#[derive(Clone, Default)]
pub struct TypeConverterCollection {
    converters: IndexMap<String, Arc<dyn TypeConverter>>,
}

impl TypeConverterCollection {
    pub fn new() -> Self {
        Self {
            converters: IndexMap::new(),
        }
    }

    /// Build a collection from an initial list, rejecting duplicate keys
    pub fn with_converters<I>(converters: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn TypeConverter>>,
    {
        let mut collection = Self::new();
        for converter in converters {
            collection.add_shared(converter)?;
        }
        Ok(collection)
    }

    /// Add a converter; fails if one is already registered for its type
    pub fn add<C: TypeConverter + 'static>(&mut self, converter: C) -> Result<&mut Self> {
        self.add_shared(Arc::new(converter))
    }

    pub fn add_shared(&mut self, converter: Arc<dyn TypeConverter>) -> Result<&mut Self> {
        if self.has(converter.as_ref()) {
            return Err(ConverterError::DuplicateConverter(Self::key_of(
                converter.as_ref(),
            )));
        }

        Ok(self.set_shared(converter))
    }

    /// Add or overwrite the converter for its type
    pub fn set<C: TypeConverter + 'static>(&mut self, converter: C) -> &mut Self {
        self.set_shared(Arc::new(converter))
    }

    pub fn set_shared(&mut self, converter: Arc<dyn TypeConverter>) -> &mut Self {
        let key = Self::key_of(converter.as_ref());
        if self.converters.insert(key.clone(), converter).is_some() {
            debug!(key = %key, "type converter overwritten");
        } else {
            debug!(key = %key, "type converter registered");
        }
        self
    }

    /// Is a converter registered for the same type as `converter`?
    ///
    /// Only namespace and name are compared, never the converter itself.
    pub fn has(&self, converter: &dyn TypeConverter) -> bool {
        self.converters.contains_key(&Self::key_of(converter))
    }

    pub fn contains_type(&self, namespace: &str, name: &str) -> bool {
        self.converters
            .contains_key(&TypeKey::derive(namespace, name))
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<&Arc<dyn TypeConverter>> {
        self.converters.get(&TypeKey::derive(namespace, name))
    }

    pub fn iter(&self) -> Values<'_, String, Arc<dyn TypeConverter>> {
        self.converters.values()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.converters.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    fn key_of(converter: &dyn TypeConverter) -> String {
        TypeKey::derive(converter.type_namespace(), converter.type_name())
    }
}

impl<'a> IntoIterator for &'a TypeConverterCollection {
    type Item = &'a Arc<dyn TypeConverter>;
    type IntoIter = Values<'a, String, Arc<dyn TypeConverter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for TypeConverterCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.converters.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    struct Named {
        namespace: &'static str,
        name: &'static str,
        tag: &'static str,
    }

    impl Named {
        fn new(namespace: &'static str, name: &'static str, tag: &'static str) -> Self {
            Self { namespace, name, tag }
        }
    }

    impl TypeConverter for Named {
        fn type_namespace(&self) -> &str {
            self.namespace
        }

        fn type_name(&self) -> &str {
            self.name
        }

        fn convert_xml_to_value(&self, _xml: &str) -> Result<Value> {
            Ok(Value::Text(self.tag.to_string()))
        }

        fn convert_value_to_xml(&self, _value: &Value) -> Result<String> {
            Ok(format!("<{0}>{1}</{0}>", self.name, self.tag))
        }
    }

    fn tag_of(converter: &Arc<dyn TypeConverter>) -> Value {
        converter.convert_xml_to_value("").unwrap()
    }

    #[test]
    fn test_add_rejects_duplicate_without_mutation() {
        let mut collection = TypeConverterCollection::new();
        collection.add(Named::new("urn:x", "Foo", "first")).unwrap();

        let err = collection
            .add(Named::new("urn:x", "Foo", "second"))
            .unwrap_err();
        assert_eq!(err, ConverterError::DuplicateConverter("urn:x:Foo".into()));
        assert!(err.to_string().starts_with("Converter for this type already exists"));

        assert_eq!(collection.len(), 1);
        let stored = collection.get("urn:x", "Foo").unwrap();
        assert_eq!(tag_of(stored), Value::Text("first".into()));
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut collection = TypeConverterCollection::new();
        collection
            .add(Named::new("urn:x", "Foo", "foo"))
            .unwrap()
            .add(Named::new("urn:x", "Bar", "bar"))
            .unwrap();

        collection.set(Named::new("urn:x", "Foo", "replaced"));

        assert_eq!(collection.keys(), vec!["urn:x:Foo", "urn:x:Bar"]);
        let tags: Vec<Value> = collection.iter().map(tag_of).collect();
        assert_eq!(
            tags,
            vec![Value::Text("replaced".into()), Value::Text("bar".into())]
        );
    }

    #[test]
    fn test_has_compares_key_only() {
        let mut collection = TypeConverterCollection::new();
        let probe = Named::new("urn:x", "Foo", "probe");
        assert!(!collection.has(&probe));

        collection.set(Named::new("urn:x", "Foo", "stored"));
        assert!(collection.has(&probe));
        assert!(!collection.has(&Named::new("urn:y", "Foo", "probe")));
    }

    #[test]
    fn test_aliased_keys_collide() {
        let mut collection = TypeConverterCollection::new();
        collection.add(Named::new("urn:x", "Foo", "a")).unwrap();
        assert!(collection.add(Named::new("urn", "x:Foo", "b")).is_err());
    }

    #[test]
    fn test_debug_lists_keys() {
        let mut collection = TypeConverterCollection::new();
        collection.set(Named::new("urn:x", "Foo", "a"));
        assert_eq!(format!("{:?}", collection), r#"{"urn:x:Foo"}"#);
    }
}
