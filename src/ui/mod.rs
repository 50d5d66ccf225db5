pub mod input;
pub mod layout;
pub mod render;
pub mod text;

pub use layout::Layout;
