//! The carousel's rendered contract: every label, state and text the window
//! shows or exposes, derived from the controller in one pass.

use crate::carousel::controller::CarouselController;
use crate::carousel::indicator::IndicatorDescriptor;
use crate::carousel::live_region::LiveRegion;
use crate::engine::Navigator;
use crate::slide::position_label;

pub const REGION_LABEL: &str = "Image Carousel";
pub const REDUCED_MOTION_BADGE: &str = "(Reduced motion mode)";
pub const SLIDESHOW_LABEL: &str = "Image slideshow. Use arrow keys to navigate between slides.";
pub const SLIDESHOW_DESCRIPTION: &str = "Use left and right arrow keys to navigate slides, spacebar to toggle autoplay, \
     Home key for first slide, End key for last slide. Tab to access slide indicators.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub text: &'static str,
    pub label: &'static str,
    pub title: Option<&'static str>,
    pub pressed: Option<bool>, // aria-pressed, toggle buttons only
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub group_label: String,
    pub alt: &'static str,
    pub caption: &'static str,
    pub description: &'static str,
    pub eager: bool, // first slide loads eagerly, the rest lazily
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub region_label: &'static str,
    pub instructions: String,
    pub live_text: String,
    pub live_mode: &'static str,
    pub live_atomic: bool,
    pub current_index: usize,
    pub status: String,
    pub reduced_motion_badge: Option<&'static str>,
    pub previous: ButtonView,
    pub play_pause: ButtonView,
    pub next: ButtonView,
    pub slideshow_label: &'static str,
    pub slideshow_description: &'static str,
    pub slides: Vec<SlideView>,
    pub indicators: Vec<IndicatorDescriptor>,
}

pub fn instructions(total: usize) -> String {
    format!(
        "Image carousel with {total} slides. Use arrow keys to navigate, spacebar to play/pause, \
         Home to go to first slide, End to go to last slide. Use Tab to navigate to slide indicators."
    )
}

impl CarouselView {
    pub fn build<N: Navigator>(carousel: &CarouselController<N>) -> Self {
        let state = carousel.state();
        let slides = carousel.slides();
        let total = slides.len();

        let play_pause = ButtonView {
            text: if state.is_playing { "PAUSE" } else { "PLAY" },
            label: if state.is_playing { "Pause automatic slideshow" } else { "Start automatic slideshow" },
            title: state
                .prefers_reduced_motion
                .then_some("Autoplay disabled due to reduced motion preference"),
            pressed: Some(state.is_playing),
            disabled: !carousel.play_pause_enabled(),
        };

        Self {
            region_label: REGION_LABEL,
            instructions: instructions(total),
            live_text: carousel.live_region().text().to_string(),
            live_mode: LiveRegion::POLITENESS,
            live_atomic: carousel.live_region().is_atomic(),
            current_index: state.current_index,
            status: position_label(state.current_index, total),
            reduced_motion_badge: state.prefers_reduced_motion.then_some(REDUCED_MOTION_BADGE),
            previous: ButtonView {
                text: "PREV",
                label: "Go to previous slide",
                title: Some("Previous slide"),
                pressed: None,
                disabled: false,
            },
            play_pause,
            next: ButtonView {
                text: "NEXT",
                label: "Go to next slide",
                title: Some("Next slide"),
                pressed: None,
                disabled: false,
            },
            slideshow_label: SLIDESHOW_LABEL,
            slideshow_description: SLIDESHOW_DESCRIPTION,
            slides: slides
                .iter()
                .enumerate()
                .map(|(i, slide)| SlideView {
                    group_label: position_label(i, total),
                    alt: slide.alt,
                    caption: slide.caption,
                    description: slide.description,
                    eager: i == 0,
                })
                .collect(),
            indicators: carousel.indicators(),
        }
    }
}
