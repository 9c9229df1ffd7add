use std::fmt;

/// Compositing style applied to the taskbar surface.
///
/// Discriminants match the shell's accent state ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Accent {
    #[default]
    Normal  = 0,
    Opaque  = 1,
    Clear   = 2,
    Blur    = 3,
    Acrylic = 4,
}

/// Ordered `(variant, token)` table used for both directions of the
/// document encoding.
pub const ACCENT_TOKENS: [(Accent, &str); 5] = [
    (Accent::Normal,  "normal"),
    (Accent::Opaque,  "opaque"),
    (Accent::Clear,   "clear"),
    (Accent::Blur,    "blur"),
    (Accent::Acrylic, "acrylic"),
];

impl Accent {
    /// Document token for this variant, e.g. `"acrylic"`.
    pub fn token(self) -> &'static str {
        ACCENT_TOKENS[self as usize].1
    }

    /// Look up a variant by its document token (case-sensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        ACCENT_TOKENS
            .iter()
            .find(|(_, t)| *t == token)
            .map(|(accent, _)| *accent)
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
