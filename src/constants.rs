use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 900;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_DURATION: Duration = Duration::from_millis(3000);          // Time each slide stays up while autoplaying
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);      // Push transition between two slides
pub const REDUCED_SLIDE_DURATION: Duration = Duration::from_millis(8000);  // Slower cadence under reduced motion
pub const REDUCED_TRANSITION_DURATION: Duration = Duration::from_millis(100); // Near-instant transition under reduced motion

pub const DEFAULT_ASSETS_DIR: &str = "assets/carousel-slides";
pub const PLACEHOLDER_SIZE: i32 = 640;        // Edge of the square placeholder texture
