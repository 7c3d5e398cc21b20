pub mod button;
pub mod input;
pub mod textarea;

pub use button::Button;
pub use input::Input;
pub use textarea::Textarea;
