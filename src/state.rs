/// UI state owned by the carousel controller.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_playing: bool,
    pub prefers_reduced_motion: bool,
}

impl CarouselState {
    pub fn new(prefers_reduced_motion: bool, is_playing: bool) -> Self {
        Self {
            current_index: 0,
            // Playback never starts while motion is reduced
            is_playing: is_playing && !prefers_reduced_motion,
            prefers_reduced_motion,
        }
    }

    /// Autoplay handed to the slideshow: playing, and motion not reduced.
    pub fn autoplay(&self) -> bool {
        self.is_playing && !self.prefers_reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_suppresses_initial_playback() {
        let state = CarouselState::new(true, true);
        assert!(!state.is_playing);
        assert!(!state.autoplay());
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn autoplay_follows_playing_flag() {
        let mut state = CarouselState::new(false, false);
        assert!(!state.autoplay());
        state.is_playing = true;
        assert!(state.autoplay());
        state.prefers_reduced_motion = true;
        assert!(!state.autoplay());
    }
}
