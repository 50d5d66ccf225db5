use std::time::Duration;
use raylib::prelude::*;
use crate::constants::*;

/// Options recognised by the slideshow. Rebuilt by the carousel every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideshowConfig {
    pub duration: Duration,            // How long a slide stays up before autoplay advances
    pub transition_duration: Duration, // Length of the push animation
    pub autoplay: bool,
    pub infinite: bool,                // Wrap at both ends
    pub pause_on_hover: bool,
    pub easing: Easing,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            duration: SLIDE_DURATION,
            transition_duration: TRANSITION_DURATION,
            autoplay: false,
            infinite: true,
            pause_on_hover: true,
            easing: Easing::Ease,
        }
    }
}

/// Timing curve of the push animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Ease, // cubic in-out
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Ease => ease::cubic_in_out(t, 0.0, 1.0, 1.0),
        }
    }
}
