//! Bridge between [`TaskbarAppearance`] and the UI layer's object model.
//!
//! The UI model carries its own accent enumeration, [`AccentState`]. Its
//! discriminants are kept identical to [`Accent`]'s so conversions between
//! the two never fail.

use crate::appearance::TaskbarAppearance;
use tb_core::Accent;
use tb_theme::Color;

/// Accent state as exposed by the UI object model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum AccentState {
    #[default]
    Normal  = 0,
    Opaque  = 1,
    Clear   = 2,
    Blur    = 3,
    Acrylic = 4,
}

impl From<Accent> for AccentState {
    fn from(accent: Accent) -> Self {
        match accent {
            Accent::Normal => Self::Normal,
            Accent::Opaque => Self::Opaque,
            Accent::Clear => Self::Clear,
            Accent::Blur => Self::Blur,
            Accent::Acrylic => Self::Acrylic,
        }
    }
}

impl From<AccentState> for Accent {
    fn from(state: AccentState) -> Self {
        match state {
            AccentState::Normal => Self::Normal,
            AccentState::Opaque => Self::Opaque,
            AccentState::Clear => Self::Clear,
            AccentState::Blur => Self::Blur,
            AccentState::Acrylic => Self::Acrylic,
        }
    }
}

/// An object from the UI model exposing the five appearance properties.
pub trait AppearanceModel {
    fn accent(&self) -> AccentState;
    fn color(&self) -> Color;
    fn show_peek(&self) -> bool;
    fn show_line(&self) -> bool;
    fn blur_radius(&self) -> f32;

    /// Construct a model object from the five values, in property order.
    fn from_parts(
        accent: AccentState,
        color: Color,
        show_peek: bool,
        show_line: bool,
        blur_radius: f32,
    ) -> Self;
}

/// Conversions between a record and a UI model object `M`.
pub trait InteropConverter<M> {
    fn from_model(model: &M) -> Self;
    fn to_model(&self) -> M;
}

impl<M: AppearanceModel> InteropConverter<M> for TaskbarAppearance {
    fn from_model(model: &M) -> Self {
        Self::new(
            model.accent().into(),
            model.color(),
            model.show_peek(),
            model.show_line(),
            model.blur_radius(),
        )
    }

    fn to_model(&self) -> M {
        M::from_parts(
            self.accent.into(),
            self.color,
            self.show_peek,
            self.show_line,
            self.blur_radius,
        )
    }
}

/// Read-only appearance object handed to the settings UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskbarAppearanceModel {
    accent:      AccentState,
    color:       Color,
    show_peek:   bool,
    show_line:   bool,
    blur_radius: f32,
}

impl AppearanceModel for TaskbarAppearanceModel {
    fn accent(&self) -> AccentState {
        self.accent
    }

    fn color(&self) -> Color {
        self.color
    }

    fn show_peek(&self) -> bool {
        self.show_peek
    }

    fn show_line(&self) -> bool {
        self.show_line
    }

    fn blur_radius(&self) -> f32 {
        self.blur_radius
    }

    fn from_parts(
        accent: AccentState,
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
}

impl From<TaskbarAppearance> for TaskbarAppearanceModel {
    fn from(appearance: TaskbarAppearance) -> Self {
        appearance.to_model()
    }
}

impl From<&TaskbarAppearanceModel> for TaskbarAppearance {
    fn from(model: &TaskbarAppearanceModel) -> Self {
        Self::from_model(model)
    }
}
