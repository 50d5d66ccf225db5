pub mod config;
pub mod engine;
pub mod layout;
pub mod renderer;
pub mod state;

pub use config::SlideshowConfig;
pub use engine::Slideshow;
