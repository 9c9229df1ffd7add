//! Structured-document boundary.
//!
//! A [`DocumentCodec`] turns records into a document value and applies a
//! document value back onto a record. The scan itself is format independent:
//! codecs only describe their values as [`Node`]s and hand the members to
//! [`apply_members`].

use serde::Serialize;
use tb_core::{DeserializationError, Result};

/// Hook invoked once per member name the target does not recognise.
pub type UnknownKeyCallback<'a> = Option<&'a mut dyn FnMut(&str)>;

/// Borrowed, format-independent view of a document value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Str(&'a str),
    Bool(bool),
    Number(f64),
    /// Any other value; carries a description for error messages.
    Other(&'static str),
}

impl Node<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Str(_) => "a string",
            Node::Bool(_) => "a boolean",
            Node::Number(_) => "a number",
            Node::Other(name) => *name,
        }
    }
}

/// A record that accepts document members one at a time.
pub trait MemberSink {
    /// Apply a single member. Returns `Ok(false)` when `key` is not one of
    /// the record's fields.
    fn apply_member(&mut self, key: &str, value: Node<'_>) -> Result<bool, DeserializationError>;
}

/// Scan `members` in order, applying each to `target`.
///
/// Stops at the first error; members applied before it stay applied.
pub fn apply_members<'a, T, I>(
    target: &mut T,
    members: I,
    mut unknown_key: UnknownKeyCallback<'_>,
) -> Result<(), DeserializationError>
where
    T: MemberSink + ?Sized,
    I: IntoIterator<Item = (Node<'a>, Node<'a>)>,
{
    for (name, value) in members {
        let Node::Str(key) = name else {
            return Err(DeserializationError::member_name_not_string(name.type_name()));
        };

        if !target.apply_member(key, value)? {
            if let Some(callback) = unknown_key.as_deref_mut() {
                callback(key);
            }
        }
    }

    Ok(())
}

/// One structured-document format.
pub trait DocumentCodec {
    type Document;

    /// Build a document from a record's serde representation.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Self::Document>;

    /// Apply `document` onto `target`; the root must be an object.
    fn decode_into<T: MemberSink + ?Sized>(
        &self,
        document: &Self::Document,
        target: &mut T,
        unknown_key: UnknownKeyCallback<'_>,
    ) -> Result<(), DeserializationError>;

    /// Parse document text.
    fn parse(&self, text: &str) -> Result<Self::Document>;

    /// Render a document as text.
    fn render(&self, document: &Self::Document) -> Result<String>;
}

#[cfg(feature = "json")]
pub use self::json::JsonCodec;
#[cfg(feature = "toml")]
pub use self::toml_codec::TomlCodec;

#[cfg(feature = "json")]
mod json {
    use super::{apply_members, DocumentCodec, MemberSink, Node, UnknownKeyCallback};
    use serde::Serialize;
    use serde_json::Value;
    use tb_core::{DeserializationError, Result, TbError};

    /// JSON documents (`serde_json::Value`).
    #[derive(Debug, Clone, Copy, Default)]
    pub struct JsonCodec;

    fn node(value: &Value) -> Node<'_> {
        match value {
            Value::String(s) => Node::Str(s),
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Node::Other("a number"), Node::Number),
            Value::Null => Node::Other("null"),
            Value::Array(_) => Node::Other("an array"),
            Value::Object(_) => Node::Other("an object"),
        }
    }

    impl DocumentCodec for JsonCodec {
        type Document = Value;

        fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value> {
            serde_json::to_value(value).map_err(|e| TbError::Config(format!("JSON encode error: {e}")))
        }

        fn decode_into<T: MemberSink + ?Sized>(
            &self,
            document: &Value,
            target: &mut T,
            unknown_key: UnknownKeyCallback<'_>,
        ) -> Result<(), DeserializationError> {
            let Value::Object(members) = document else {
                return Err(DeserializationError::root_not_object(node(document).type_name()));
            };

            let members = members.iter().map(|(k, v)| (Node::Str(k), node(v)));
            apply_members(target, members, unknown_key)
        }

        fn parse(&self, text: &str) -> Result<Value> {
            serde_json::from_str(text).map_err(|e| TbError::Config(format!("JSON parse error: {e}")))
        }

        fn render(&self, document: &Value) -> Result<String> {
            serde_json::to_string_pretty(document)
                .map_err(|e| TbError::Config(format!("JSON encode error: {e}")))
        }
    }
}

#[cfg(feature = "toml")]
mod toml_codec {
    use super::{apply_members, DocumentCodec, MemberSink, Node, UnknownKeyCallback};
    use serde::Serialize;
    use tb_core::{DeserializationError, Result, TbError};
    use toml::Value;

    /// TOML documents (`toml::Value`).
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TomlCodec;

    fn node(value: &Value) -> Node<'_> {
        match value {
            Value::String(s) => Node::Str(s),
            Value::Boolean(b) => Node::Bool(*b),
            Value::Integer(i) => Node::Number(*i as f64),
            Value::Float(f) => Node::Number(*f),
            Value::Datetime(_) => Node::Other("a datetime"),
            Value::Array(_) => Node::Other("an array"),
            Value::Table(_) => Node::Other("an object"),
        }
    }

    impl DocumentCodec for TomlCodec {
        type Document = Value;

        fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value> {
            Value::try_from(value).map_err(|e| TbError::Config(format!("TOML encode error: {e}")))
        }

        fn decode_into<T: MemberSink + ?Sized>(
            &self,
            document: &Value,
            target: &mut T,
            unknown_key: UnknownKeyCallback<'_>,
        ) -> Result<(), DeserializationError> {
            let Value::Table(members) = document else {
                return Err(DeserializationError::root_not_object(node(document).type_name()));
            };

            let members = members.iter().map(|(k, v)| (Node::Str(k), node(v)));
            apply_members(target, members, unknown_key)
        }

        fn parse(&self, text: &str) -> Result<Value> {
            toml::from_str::<toml::Table>(text)
                .map(Value::Table)
                .map_err(|e| TbError::Config(format!("TOML parse error: {e}")))
        }

        fn render(&self, document: &Value) -> Result<String> {
            toml::to_string(document).map_err(|e| TbError::Config(format!("TOML encode error: {e}")))
        }
    }
}
