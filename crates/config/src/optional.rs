use crate::appearance::{expect_bool, TaskbarAppearance};
use crate::codec::{MemberSink, Node};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ops::{Deref, DerefMut};
use tb_core::DeserializationError;

const ENABLED_KEY: &str = "enabled";

/// An appearance that only applies while `enabled` is set, e.g. the look used
/// while a window is maximised or the start menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptionalTaskbarAppearance {
    pub enabled:    bool,
    pub appearance: TaskbarAppearance,
}

impl OptionalTaskbarAppearance {
    pub const fn new(enabled: bool, appearance: TaskbarAppearance) -> Self {
        Self { enabled, appearance }
    }

    /// The appearance to use, if this override is active.
    pub fn active(&self) -> Option<&TaskbarAppearance> {
        self.enabled.then_some(&self.appearance)
    }
}

impl Deref for OptionalTaskbarAppearance {
    type Target = TaskbarAppearance;

    fn deref(&self) -> &Self::Target {
        &self.appearance
    }
}

impl DerefMut for OptionalTaskbarAppearance {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.appearance
    }
}

impl Serialize for OptionalTaskbarAppearance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OptionalTaskbarAppearance", 6)?;
        state.serialize_field(ENABLED_KEY, &self.enabled)?;
        self.appearance.serialize_fields(&mut state)?;
        state.end()
    }
}

impl MemberSink for OptionalTaskbarAppearance {
    fn apply_member(&mut self, key: &str, value: Node<'_>) -> Result<bool, DeserializationError> {
        if key == ENABLED_KEY {
            self.enabled = expect_bool(key, value)?;
            Ok(true)
        } else {
            self.appearance.apply_member(key, value)
        }
    }
}
