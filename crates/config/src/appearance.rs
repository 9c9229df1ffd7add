use crate::codec::{MemberSink, Node};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tb_core::{Accent, DeserializationError};
use tb_theme::Color;

/// Upper bound for the blur radius; larger values are rejected by the
/// compositor's blur effect.
pub const MAX_BLUR_RADIUS: f32 = 750.0;

pub(crate) const ACCENT_KEY: &str = "accent";
pub(crate) const COLOR_KEY: &str = "color";
pub(crate) const SHOW_PEEK_KEY: &str = "show_peek";
pub(crate) const SHOW_LINE_KEY: &str = "show_line";
pub(crate) const RADIUS_KEY: &str = "blur_radius";

/// Visual appearance of the taskbar.
///
/// Deserialization only touches the fields present in the document, so a
/// record can be layered over its defaults (or over a previous value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskbarAppearance {
    pub accent:      Accent,
    pub color:       Color,
    pub show_peek:   bool,
    pub show_line:   bool,
    pub blur_radius: f32,
}

impl Default for TaskbarAppearance {
    fn default() -> Self {
        Self {
            accent:      Accent::Normal,
            color:       Color::TRANSPARENT,
            show_peek:   true,
            show_line:   true,
            blur_radius: 9.0,
        }
    }
}

impl TaskbarAppearance {
    /// Build a record from trusted values. No validation or clamping happens here.
    pub const fn new(
        accent: Accent,
        color: Color,
        show_peek: bool,
        show_line: bool,
        blur_radius: f32,
    ) -> Self {
        Self {
            accent,
            color,
            show_peek,
            show_line,
            blur_radius,
        }
    }

    /// Write the five fields, in document order, into an open struct.
    pub(crate) fn serialize_fields<S: SerializeStruct>(&self, state: &mut S) -> Result<(), S::Error> {
        state.serialize_field(ACCENT_KEY, self.accent.token())?;
        state.serialize_field(COLOR_KEY, &self.color.to_string())?;
        state.serialize_field(SHOW_PEEK_KEY, &self.show_peek)?;
        state.serialize_field(SHOW_LINE_KEY, &self.show_line)?;
        state.serialize_field(RADIUS_KEY, &widen_radius(self.blur_radius))
    }
}

/// Widen through the shortest decimal form so `749.9` is written as `749.9`
/// rather than `749.9000244140625`; reading it back yields the same `f32`.
fn widen_radius(radius: f32) -> f64 {
    radius.to_string().parse().unwrap_or(f64::from(radius))
}

impl Serialize for TaskbarAppearance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TaskbarAppearance", 5)?;
        self.serialize_fields(&mut state)?;
        state.end()
    }
}

impl MemberSink for TaskbarAppearance {
    fn apply_member(&mut self, key: &str, value: Node<'_>) -> Result<bool, DeserializationError> {
        match key {
            ACCENT_KEY => {
                let token = expect_str(key, value)?;
                self.accent = Accent::from_token(token).ok_or_else(|| invalid_string(key, token))?;
            }
            COLOR_KEY => {
                let raw = expect_str(key, value)?;
                self.color = raw.parse().map_err(|_| invalid_string(key, raw))?;
            }
            SHOW_PEEK_KEY => self.show_peek = expect_bool(key, value)?,
            SHOW_LINE_KEY => self.show_line = expect_bool(key, value)?,
            RADIUS_KEY => {
                self.blur_radius = expect_number(key, value)? as f32;

                // Direct2D's gaussian blur does not go any higher.
                if self.blur_radius > MAX_BLUR_RADIUS {
                    self.blur_radius = MAX_BLUR_RADIUS;
                }
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

fn type_error(key: &str, expected: &'static str, value: Node<'_>) -> DeserializationError {
    DeserializationError::Type {
        key: key.to_owned(),
        expected,
        found: value.type_name(),
    }
}

fn invalid_string(key: &str, value: &str) -> DeserializationError {
    DeserializationError::Value {
        key:   key.to_owned(),
        value: value.to_owned(),
    }
}

pub(crate) fn expect_str<'a>(key: &str, value: Node<'a>) -> Result<&'a str, DeserializationError> {
    match value {
        Node::Str(s) => Ok(s),
        other => Err(type_error(key, "a string", other)),
    }
}

pub(crate) fn expect_bool(key: &str, value: Node<'_>) -> Result<bool, DeserializationError> {
    match value {
        Node::Bool(b) => Ok(b),
        other => Err(type_error(key, "a boolean", other)),
    }
}

pub(crate) fn expect_number(key: &str, value: Node<'_>) -> Result<f64, DeserializationError> {
    match value {
        Node::Number(n) => Ok(n),
        other => Err(type_error(key, "a number", other)),
    }
}
