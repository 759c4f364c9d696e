pub mod create_button;
pub mod like_button;

pub use create_button::*;
pub use like_button::*;
