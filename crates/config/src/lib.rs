//! Taskbar appearance configuration.
//!
//! The record types ([`TaskbarAppearance`], [`OptionalTaskbarAppearance`])
//! know nothing about document formats; the `json` and `toml` features add
//! [`DocumentCodec`]s for them, the `interop` feature adds the bridge to
//! the UI object model and `watch` adds [`ConfigWatcher`].

pub mod appearance;
pub mod codec;
#[cfg(feature = "interop")]
pub mod interop;
pub mod optional;
#[cfg(all(feature = "watch", any(feature = "json", feature = "toml")))]
pub mod watcher;

pub use appearance::{TaskbarAppearance, MAX_BLUR_RADIUS};
pub use codec::{apply_members, DocumentCodec, MemberSink, Node, UnknownKeyCallback};
#[cfg(feature = "json")]
pub use codec::JsonCodec;
#[cfg(feature = "toml")]
pub use codec::TomlCodec;
#[cfg(feature = "interop")]
pub use interop::{AccentState, AppearanceModel, InteropConverter, TaskbarAppearanceModel};
pub use optional::OptionalTaskbarAppearance;
#[cfg(all(feature = "watch", any(feature = "json", feature = "toml")))]
pub use watcher::ConfigWatcher;

pub use tb_core::{Accent, DeserializationError, Result, TbError};
pub use tb_theme::Color;

use std::path::PathBuf;
#[cfg(any(feature = "json", feature = "toml"))]
use std::path::Path;

/// Text format of a settings document.
#[cfg(any(feature = "json", feature = "toml"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[cfg(feature = "json")]
    Json,
    #[cfg(feature = "toml")]
    Toml,
}

#[cfg(any(feature = "json", feature = "toml"))]
impl Default for Format {
    fn default() -> Self {
        #[cfg(feature = "json")]
        return Self::Json;
        #[cfg(not(feature = "json"))]
        return Self::Toml;
    }
}

#[cfg(any(feature = "json", feature = "toml"))]
impl Format {
    /// Pick a format from a file extension, falling back to the default.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "toml")]
            Some("toml") => Self::Toml,
            #[cfg(feature = "json")]
            Some("json") => Self::Json,
            _ => Self::default(),
        }
    }
}

/// Parse `text` and apply it over the default appearance.
///
/// Every unknown key is passed to `unknown_key`. On error nothing of the
/// partially applied document is returned.
#[cfg(any(feature = "json", feature = "toml"))]
pub fn load_document(
    text: &str,
    format: Format,
    unknown_key: UnknownKeyCallback<'_>,
) -> Result<TaskbarAppearance> {
    fn decode<C: DocumentCodec>(
        codec: C,
        text: &str,
        unknown_key: UnknownKeyCallback<'_>,
    ) -> Result<TaskbarAppearance> {
        let document = codec.parse(text)?;
        let mut appearance = TaskbarAppearance::default();
        codec.decode_into(&document, &mut appearance, unknown_key)?;
        Ok(appearance)
    }

    match format {
        #[cfg(feature = "json")]
        Format::Json => decode(JsonCodec, text, unknown_key),
        #[cfg(feature = "toml")]
        Format::Toml => decode(TomlCodec, text, unknown_key),
    }
}

/// Render an appearance as a document in `format`.
#[cfg(any(feature = "json", feature = "toml"))]
pub fn render<T: serde::Serialize + ?Sized>(value: &T, format: Format) -> Result<String> {
    match format {
        #[cfg(feature = "json")]
        Format::Json => JsonCodec.render(&JsonCodec.encode(value)?),
        #[cfg(feature = "toml")]
        Format::Toml => TomlCodec.render(&TomlCodec.encode(value)?),
    }
}

/// Load the appearance from a settings file.  Returns
/// `TaskbarAppearance::default()` if the file is missing or invalid so the
/// taskbar always has a sensible look.
#[cfg(any(feature = "json", feature = "toml"))]
pub fn load(path: impl AsRef<Path>) -> TaskbarAppearance {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Settings file not found at '{}'; using defaults.",
            path.display()
        );
        return TaskbarAppearance::default();
    }

    match try_load(path) {
        Ok(appearance) => appearance,
        Err(e) => {
            tracing::error!("Invalid settings in '{}': {e}; using defaults.", path.display());
            TaskbarAppearance::default()
        }
    }
}

/// Like [`load`], but reports every failure instead of falling back.
#[cfg(any(feature = "json", feature = "toml"))]
pub fn try_load(path: impl AsRef<Path>) -> Result<TaskbarAppearance> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| TbError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let mut warn_unknown = |key: &str| {
        tracing::warn!("Unknown key '{key}' in '{}'; ignoring.", path.display());
    };
    load_document(&raw, Format::from_path(path), Some(&mut warn_unknown))
}

/// Return the default settings path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("tb").join("settings.json")
}

#[cfg(all(test, feature = "json"))]
mod json_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn json_rendering_round_trips() {
        let original = TaskbarAppearance::new(Accent::Opaque, Color::BLACK, true, false, 0.0);
        let text = render(&original, Format::Json).unwrap();
        assert_eq!(load_document(&text, Format::Json, None).unwrap(), original);
    }

    #[test]
    fn blur_radius_renders_in_shortest_form() {
        let appearance = TaskbarAppearance::new(Accent::Normal, Color::TRANSPARENT, true, true, 749.9);
        let text = render(&appearance, Format::Json).unwrap();

        assert!(text.contains("\"blur_radius\": 749.9\n"), "{text}");
        assert_eq!(load_document(&text, Format::Json, None).unwrap(), appearance);
    }

    #[test]
    fn parse_error_is_a_config_error() {
        let err = load_document("{ not json", Format::Json, None).unwrap_err();
        assert!(matches!(err, TbError::Config(_)));
    }

    #[test]
    fn deserialization_error_is_surfaced() {
        let err = load_document("[]", Format::Json, None).unwrap_err();
        assert!(matches!(err, TbError::Deserialization(DeserializationError::Format { .. })));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(dir.path().join("nope.json")), TaskbarAppearance::default());
    }

    #[test]
    fn invalid_file_yields_defaults_without_partial_fields() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "accent": "acrylic", "color": "nope" }}"#).unwrap();

        assert!(try_load(file.path()).is_err());
        assert_eq!(load(file.path()), TaskbarAppearance::default());
    }

    #[test]
    fn loads_valid_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "accent": "acrylic", "future_key": 1 }}"#).unwrap();

        assert_eq!(load(file.path()).accent, Accent::Acrylic);
    }
}

#[cfg(all(test, feature = "toml"))]
mod toml_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn loads_toml_document() {
        let text = r##"
accent = "blur"
color = "#10203040"
blur_radius = 1200
show_line = false
"##;
        let appearance = load_document(text, Format::Toml, None).unwrap();

        assert_eq!(
            appearance,
            TaskbarAppearance::new(Accent::Blur, Color::new(0x10, 0x20, 0x30, 0x40), true, false, 750.0)
        );
    }

    #[test]
    fn toml_rendering_round_trips() {
        let original = TaskbarAppearance::new(Accent::Clear, Color::WHITE, false, true, 3.5);
        let text = render(&original, Format::Toml).unwrap();
        assert_eq!(load_document(&text, Format::Toml, None).unwrap(), original);
    }

    fn rendered_keys<T: serde::Serialize>(value: &T) -> Vec<String> {
        render(value, Format::Toml)
            .unwrap()
            .lines()
            .filter_map(|line| line.split_once(" = "))
            .map(|(key, _)| key.to_owned())
            .collect()
    }

    #[test]
    fn toml_keeps_field_order() {
        assert_eq!(
            rendered_keys(&TaskbarAppearance::default()),
            ["accent", "color", "show_peek", "show_line", "blur_radius"]
        );
        assert_eq!(
            rendered_keys(&OptionalTaskbarAppearance::default()),
            ["enabled", "accent", "color", "show_peek", "show_line", "blur_radius"]
        );
    }

    #[test]
    fn toml_blur_radius_renders_in_shortest_form() {
        let appearance = TaskbarAppearance::new(Accent::Normal, Color::TRANSPARENT, true, true, 749.9);
        let text = render(&appearance, Format::Toml).unwrap();

        assert!(text.contains("blur_radius = 749.9\n"), "{text}");
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, r#"accent = "opaque""#).unwrap();

        assert_eq!(Format::from_path(file.path()), Format::Toml);
        assert_eq!(load(file.path()).accent, Accent::Opaque);
    }
}
