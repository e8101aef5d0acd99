pub mod button;
pub mod input;
pub mod logo;
pub mod tooltip;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use input::Input;
pub use logo::Logo;
pub use tooltip::Tooltip;
