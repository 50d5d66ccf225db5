use tracing::trace;
use crate::engine::{Navigator, SlideChange};
use crate::slideshow::config::SlideshowConfig;
use crate::slideshow::state::{Direction, TransitionState};

/// What the renderer has to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Still { index: usize },
    Push { outgoing: usize, incoming: usize, progress: f32, direction: Direction },
}

/// Transitioning container over `len` slides.
///
/// Navigation commits the new index immediately and reports it; the push
/// animation then plays out over the following `update` calls.
pub struct Slideshow {
    len: usize,
    current: usize,
    config: SlideshowConfig,
    state: TransitionState,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            config: SlideshowConfig::default(),
            state: TransitionState::Displaying { elapsed: 0.0 },
        }
    }

    pub fn configure(&mut self, config: SlideshowConfig) {
        if config.autoplay != self.config.autoplay {
            trace!(autoplay = config.autoplay, "slideshow autoplay changed");
        }
        self.config = config;
    }

    /// Advances the running transition and the autoplay timer by `dt` seconds.
    pub fn update(&mut self, dt: f32, hovered: bool) -> Option<SlideChange> {
        match self.state {
            TransitionState::Transitioning { from, direction, elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.config.transition_duration.as_secs_f32() {
                    self.state = TransitionState::Displaying { elapsed: 0.0 };
                } else {
                    self.state = TransitionState::Transitioning { from, direction, elapsed };
                }
                None
            }
            TransitionState::Displaying { elapsed } => {
                if !self.config.autoplay {
                    self.state = TransitionState::Displaying { elapsed: 0.0 };
                    return None;
                }
                if self.config.pause_on_hover && hovered {
                    return None;
                }

                let elapsed = elapsed + dt;
                if elapsed >= self.config.duration.as_secs_f32() {
                    self.state = TransitionState::Displaying { elapsed: 0.0 };
                    self.go_next()
                } else {
                    self.state = TransitionState::Displaying { elapsed };
                    None
                }
            }
        }
    }

    pub fn frame(&self) -> Frame {
        match self.state {
            TransitionState::Transitioning { from, direction, elapsed } => {
                let total = self.config.transition_duration.as_secs_f32();
                let linear = if total > 0.0 { elapsed / total } else { 1.0 };
                Frame::Push {
                    outgoing: from,
                    incoming: self.current,
                    progress: self.config.easing.apply(linear),
                    direction,
                }
            }
            TransitionState::Displaying { .. } => Frame::Still { index: self.current },
        }
    }

    fn start_transition(&mut self, target: usize, direction: Direction) -> Option<SlideChange> {
        if target == self.current || target >= self.len {
            return None;
        }

        // A transition still in flight is snapped to its end
        let previous = self.current;
        self.current = target;
        self.state = if self.config.transition_duration.is_zero() {
            TransitionState::Displaying { elapsed: 0.0 }
        } else {
            TransitionState::Transitioning { from: previous, direction, elapsed: 0.0 }
        };

        trace!(previous, current = target, ?direction, "slideshow transition");
        Some(SlideChange { previous, current: target })
    }
}

impl Navigator for Slideshow {
    fn go_next(&mut self) -> Option<SlideChange> {
        if self.len == 0 {
            return None;
        }
        let target = if self.current + 1 < self.len {
            self.current + 1
        } else if self.config.infinite {
            0
        } else {
            return None;
        };
        self.start_transition(target, Direction::Forward)
    }

    fn go_back(&mut self) -> Option<SlideChange> {
        if self.len == 0 {
            return None;
        }
        let target = if self.current > 0 {
            self.current - 1
        } else if self.config.infinite {
            self.len - 1
        } else {
            return None;
        };
        self.start_transition(target, Direction::Backward)
    }

    fn go_to(&mut self, index: usize) -> Option<SlideChange> {
        let direction = if index > self.current { Direction::Forward } else { Direction::Backward };
        self.start_transition(index, direction)
    }
}
