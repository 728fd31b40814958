pub mod button;
pub mod common;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use common::{Avatar, LoadingText, ToastHost};
