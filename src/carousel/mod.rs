pub mod controller;
pub mod focus;
pub mod indicator;
pub mod keyboard;
pub mod live_region;
pub mod motion;
pub mod view;

pub use controller::CarouselController;
pub use focus::{Control, FocusManager};
pub use keyboard::{Key, KeyEvent};
pub use motion::MediaQuery;
pub use view::CarouselView;
