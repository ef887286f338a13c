//! The carrier behind every FHIR primitive field.
//!
//! On the wire a primitive is split in two: the value lives under the field
//! name and the element id / extensions live under the `_field` sibling.
//! `Element<V>` is the fused in-memory form; the codec splits it back out on
//! emission. Any of the three parts may be absent, but an element with all
//! three absent is never stored (the field is simply `None`).

use crate::r5::Extension;

/// A FHIR primitive element: optional value plus optional id and extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<V> {
    /// Element id from the `_field` sibling.
    pub id: Option<std::string::String>,
    /// Extensions from the `_field` sibling.
    pub extension: Option<Vec<Extension>>,
    /// The primitive value itself.
    pub value: Option<V>,
}

impl<V> Element<V> {
    /// An element carrying only a value.
    pub fn new(value: V) -> Self {
        Self {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    /// An element with no value, only id and/or extensions.
    pub fn from_parts(
        id: Option<std::string::String>,
        extension: Option<Vec<Extension>>,
        value: Option<V>,
    ) -> Self {
        Self {
            id,
            extension,
            value,
        }
    }

    /// True when value, id and extensions are all absent.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.id.is_none()
            && self.extension.as_ref().is_none_or(|ext| ext.is_empty())
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

impl<V> Default for Element<V> {
    fn default() -> Self {
        Self {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V> From<V> for Element<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Element<std::string::String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let element: Element<bool> = Element::default();
        assert!(element.is_empty());
        assert_eq!(element.value(), None);
    }

    #[test]
    fn value_only_construction() {
        let element = Element::new(true);
        assert!(!element.is_empty());
        assert_eq!(element.value(), Some(&true));
        assert!(element.id.is_none());
    }

    #[test]
    fn string_elements_from_str() {
        let element: Element<String> = "official".into();
        assert_eq!(element.value.as_deref(), Some("official"));
    }
}
