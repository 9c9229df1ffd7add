pub mod accent;
pub mod error;

pub use accent::{Accent, ACCENT_TOKENS};
pub use error::{DeserializationError, Result, TbError};
