use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum TbError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Deserialization(#[from] DeserializationError),

    #[error("watcher error: {0}")]
    Watch(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Raised when a structured document cannot be applied to an appearance record.
///
/// Unknown keys and an out-of-range blur radius are not errors and never
/// produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeserializationError {
    /// The document does not have the expected shape (root is not an object,
    /// or a member name is not a string).
    #[error("{what} must be {expected}, found {found}")]
    Format {
        what:     &'static str,
        expected: &'static str,
        found:    &'static str,
    },

    /// A recognized key holds a value of the wrong type.
    #[error("{key} must be {expected}, found {found}")]
    Type {
        key:      String,
        expected: &'static str,
        found:    &'static str,
    },

    /// A string value could not be parsed into its target domain.
    #[error("Found invalid string \"{value}\" while deserializing {key}")]
    Value { key: String, value: String },
}

impl DeserializationError {
    /// The root value of a document is not an object.
    pub fn root_not_object(found: &'static str) -> Self {
        Self::Format {
            what:     "root node",
            expected: "an object",
            found,
        }
    }

    /// A member name inside an object is not a string.
    pub fn member_name_not_string(found: &'static str) -> Self {
        Self::Format {
            what:     "member name",
            expected: "a string",
            found,
        }
    }
}

pub type Result<T, E = TbError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_error_message() {
        let err = DeserializationError::root_not_object("an array");
        assert_eq!(err.to_string(), "root node must be an object, found an array");
    }

    #[test]
    fn member_name_error_message() {
        let err = DeserializationError::member_name_not_string("a number");
        assert!(err.to_string().starts_with("member name must be a string"));
    }

    #[test]
    fn value_error_embeds_key_and_value() {
        let err = DeserializationError::Value {
            key:   "color".into(),
            value: "not-a-color".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not-a-color"));
        assert!(msg.contains("color"));
    }

    #[test]
    fn wraps_into_top_level_error() {
        let err: TbError = DeserializationError::root_not_object("null").into();
        assert!(matches!(err, TbError::Deserialization(_)));
    }
}
