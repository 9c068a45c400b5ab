//! Element tree
//!
//! Complex datatypes, backbone elements and resource bodies are all [`Node`]s:
//! a record keyed by JSON property name. Choice elements are stored under
//! their concrete key (`valueQuantity`), so a node mirrors the JSON it was
//! read from and the codec can check it against a shape in both directions.

use crate::primitive::{Decimal, Primitive, PrimitiveValue};
use crate::resource::{AnyResource, Resource};
use std::collections::BTreeMap;

/// Id and extensions carried by every element, including primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub extension: Vec<Node>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_extension(mut self, extension: Node) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.extension.is_empty()
    }
}

/// A property value inside a [`Node`].
///
/// Equality is structural: a single value equals a one-item list.
#[derive(Debug, Clone)]
pub enum Value {
    Primitive(Primitive),
    Node(Node),
    Resource(Box<AnyResource>),
    List(Vec<Value>),
}

impl Value {
    /// Short name used in type mismatch messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Primitive(p) => p.value.as_ref().map_or("primitive", PrimitiveValue::kind_name),
            Value::Node(_) => "object",
            Value::Resource(_) => "resource",
            Value::List(_) => "array",
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_resource(&self) -> Option<&AnyResource> {
        match self {
            Value::Resource(r) => Some(&**r),
            _ => None,
        }
    }

    /// The items of a list, or the value itself as a one-element slice.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            single => std::slice::from_ref(single),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => a == b,
            (Value::List(items), single) | (single, Value::List(items)) => {
                matches!(items.as_slice(), [item] if item == single)
            }
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::Node(a), Value::Node(b)) => a == b,
            (Value::Resource(a), Value::Resource(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Value::Primitive(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(value)
    }
}

impl From<AnyResource> for Value {
    fn from(value: AnyResource) -> Self {
        Value::Resource(Box::new(value))
    }
}

impl From<Resource> for Value {
    fn from(value: Resource) -> Self {
        Value::Resource(Box::new(AnyResource::Known(value)))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

macro_rules! value_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Primitive(Primitive::new(value))
                }
            }
        )*
    };
}

value_from_primitive!(bool, i32, i64, Decimal, &str, String, PrimitiveValue);

/// A complex value: datatype, backbone element, or resource body.
///
/// A key holding an empty list compares equal to a missing key.
#[derive(Debug, Clone, Default)]
pub struct Node {
    fields: BTreeMap<String, Value>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        fn absent(value: &Value) -> bool {
            matches!(value, Value::List(items) if items.is_empty())
        }
        self.fields.iter().all(|(key, value)| match other.fields.get(key) {
            Some(theirs) => value == theirs,
            None => absent(value),
        }) && other
            .fields
            .iter()
            .all(|(key, value)| self.fields.contains_key(key) || absent(value))
    }
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an extension with a single `value[x]`, e.g.
    /// `Node::extension(url, "valueString", "x")`.
    pub fn extension(url: &str, value_key: &str, value: impl Into<Value>) -> Self {
        Node::new().with("url", url).with(value_key, value)
    }

    /// Builds an extension that holds nested extensions instead of a value.
    pub fn complex_extension(url: &str, children: Vec<Node>) -> Self {
        Node::new().with("url", url).with(
            "extension",
            Value::List(children.into_iter().map(Value::Node).collect()),
        )
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.to_string(), value.into())
    }

    /// Appends to a repeating property, turning a single value into a list.
    pub fn push(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.fields.remove(key) {
            None => {
                self.fields.insert(key.to_string(), Value::List(vec![value]));
            }
            Some(Value::List(mut items)) => {
                items.push(value);
                self.fields.insert(key.to_string(), Value::List(items));
            }
            Some(single) => {
                self.fields
                    .insert(key.to_string(), Value::List(vec![single, value]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn primitive(&self, key: &str) -> Option<&Primitive> {
        self.get(key).and_then(Value::as_primitive)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.primitive(key).and_then(Primitive::as_str)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.primitive(key).and_then(Primitive::as_bool)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.primitive(key).and_then(Primitive::as_integer)
    }

    pub fn decimal(&self, key: &str) -> Option<&Decimal> {
        self.primitive(key).and_then(Primitive::as_decimal)
    }

    pub fn node(&self, key: &str) -> Option<&Node> {
        self.get(key).and_then(Value::as_node)
    }

    pub fn node_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.get_mut(key).and_then(Value::as_node_mut)
    }

    pub fn resource(&self, key: &str) -> Option<&AnyResource> {
        self.get(key).and_then(Value::as_resource)
    }

    /// All values of a property; empty when absent.
    pub fn list(&self, key: &str) -> &[Value] {
        self.get(key).map_or(&[][..], Value::as_slice)
    }

    pub fn nodes<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Node> + 'a {
        self.list(key).iter().filter_map(Value::as_node)
    }

    pub fn add_extension(&mut self, extension: Node) {
        self.push("extension", extension);
    }

    pub fn extensions(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes("extension")
    }

    pub fn add_modifier_extension(&mut self, extension: Node) {
        self.push("modifierExtension", extension);
    }

    pub fn modifier_extensions(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes("modifierExtension")
    }

    /// First extension with the given url.
    pub fn extension_by_url(&self, url: &str) -> Option<&Node> {
        self.extensions().find(|e| e.str("url") == Some(url))
    }
}

impl FromIterator<(String, Value)> for Node {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Node {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_promotes_single_value() {
        let mut node = Node::new().with("given", "Peter");
        node.push("given", "James");
        assert_eq!(node.list("given").len(), 2);
        assert_eq!(node.list("given")[1].as_primitive().unwrap().as_str(), Some("James"));
    }

    #[test]
    fn equality_ignores_list_and_absence_forms() {
        let single = Node::new().with("given", "Jane");
        let listed = Node::new().with("given", vec![Value::from("Jane")]);
        assert_eq!(single, listed);
        assert_ne!(
            single,
            Node::new().with("given", vec![Value::from("Jane"), Value::from("Jo")])
        );

        let empty = Node::new().with("family", "Doe").with("given", Vec::<Value>::new());
        assert_eq!(empty, Node::new().with("family", "Doe"));
        assert_eq!(Node::new().with("family", "Doe"), empty);
        assert_ne!(Node::new().with("family", "Doe"), Node::new());
    }

    #[test]
    fn list_of_missing_key_is_empty() {
        let node = Node::new();
        assert!(node.list("identifier").is_empty());
        assert_eq!(Node::new().with("a", true).list("a").len(), 1);
    }

    #[test]
    fn extensions_keep_order() {
        let mut node = Node::new();
        node.add_extension(Node::extension("http://a", "valueString", "one"));
        node.add_extension(Node::extension("http://b", "valueBoolean", true));
        node.add_modifier_extension(Node::extension("http://m", "valueCode", "x"));

        let urls: Vec<_> = node.extensions().filter_map(|e| e.str("url")).collect();
        assert_eq!(urls, vec!["http://a", "http://b"]);
        assert_eq!(node.modifier_extensions().count(), 1);
        assert_eq!(
            node.extension_by_url("http://b").and_then(|e| e.bool("valueBoolean")),
            Some(true)
        );
    }

    #[test]
    fn complex_extension_nests_children() {
        let ext = Node::complex_extension(
            "http://example.org/race",
            vec![Node::extension("text", "valueString", "Mixed")],
        );
        assert_eq!(ext.extensions().count(), 1);
        assert!(ext.get("valueString").is_none());
    }

    #[test]
    fn element_emptiness() {
        assert!(Element::new().is_empty());
        assert!(!Element::new().with_id("a").is_empty());
    }
}
