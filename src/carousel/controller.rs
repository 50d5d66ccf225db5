use tracing::{debug, warn};
use crate::carousel::focus::Control;
use crate::carousel::indicator::{self, IndicatorDescriptor};
use crate::carousel::keyboard::{Key, KeyEvent};
use crate::carousel::live_region::LiveRegion;
use crate::carousel::motion::{MediaQuery, Subscription};
use crate::constants::*;
use crate::engine::{Navigator, SlideChange};
use crate::slide::{announcement, SlideMeta};
use crate::slideshow::SlideshowConfig;
use crate::state::CarouselState;

/// Mediates between input, the reduced-motion preference and the slideshow.
///
/// The navigator is optional: until one is attached every navigation request
/// is dropped.
pub struct CarouselController<N: Navigator> {
    slides: &'static [SlideMeta],
    state: CarouselState,
    live_region: LiveRegion,
    navigator: Option<N>,
    motion: Subscription,
}

impl<N: Navigator> CarouselController<N> {
    /// Reads the current preference from `query` and keeps listening to it
    /// for as long as the controller lives.
    pub fn mount(slides: &'static [SlideMeta], query: &MediaQuery, autoplay: bool) -> Self {
        let motion = query.subscribe();
        let state = CarouselState::new(query.matches(), autoplay);
        debug!(
            slides = slides.len(),
            reduced_motion = state.prefers_reduced_motion,
            playing = state.is_playing,
            listeners = query.listener_count(),
            "carousel mounted"
        );
        Self {
            slides,
            state,
            live_region: LiveRegion::polite(announcement(slides, 0)),
            navigator: None,
            motion,
        }
    }

    pub fn attach(&mut self, navigator: N) {
        self.navigator = Some(navigator);
    }

    pub fn navigator(&self) -> Option<&N> {
        self.navigator.as_ref()
    }

    pub fn navigator_mut(&mut self) -> Option<&mut N> {
        self.navigator.as_mut()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn slides(&self) -> &'static [SlideMeta] {
        self.slides
    }

    pub fn live_region(&self) -> &LiveRegion {
        &self.live_region
    }

    /// Slideshow options for the current state.
    pub fn slideshow_config(&self) -> SlideshowConfig {
        let reduced = self.state.prefers_reduced_motion;
        SlideshowConfig {
            duration: if reduced { REDUCED_SLIDE_DURATION } else { SLIDE_DURATION },
            transition_duration: if reduced { REDUCED_TRANSITION_DURATION } else { TRANSITION_DURATION },
            autoplay: self.state.autoplay(),
            infinite: true,
            pause_on_hover: true,
            ..SlideshowConfig::default()
        }
    }

    /// Applies the latest preference change published since the last poll.
    pub fn poll_environment(&mut self) {
        if let Some(reduced) = self.motion.take() {
            self.set_reduced_motion(reduced);
        }
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.state.prefers_reduced_motion == reduced {
            return;
        }
        self.state.prefers_reduced_motion = reduced;
        if reduced {
            self.state.is_playing = false;
        }
        debug!(reduced_motion = reduced, "motion preference applied");
    }

    pub fn play_pause_enabled(&self) -> bool {
        !self.state.prefers_reduced_motion
    }

    pub fn toggle_playback(&mut self) {
        if !self.play_pause_enabled() {
            debug!("playback toggle ignored under reduced motion");
            return;
        }
        self.state.is_playing = !self.state.is_playing;
        debug!(playing = self.state.is_playing, "playback toggled");
    }

    pub fn go_previous(&mut self) {
        self.navigate("previous", |navigator| navigator.go_back());
    }

    pub fn go_next(&mut self) {
        self.navigate("next", |navigator| navigator.go_next());
    }

    pub fn go_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            debug!(index, "jump outside the slide range ignored");
            return;
        }
        self.navigate("jump", |navigator| navigator.go_to(index));
    }

    pub fn go_first(&mut self) {
        self.go_to(0);
    }

    pub fn go_last(&mut self) {
        if let Some(last) = self.slides.len().checked_sub(1) {
            self.go_to(last);
        }
    }

    /// Key handler of the focused slideshow region.
    pub fn handle_key(&mut self, event: &mut KeyEvent) {
        match event.key {
            Key::ArrowLeft => self.go_previous(),
            Key::ArrowRight => self.go_next(),
            Key::Space | Key::Enter => self.toggle_playback(),
            Key::Home => self.go_first(),
            Key::End => self.go_last(),
            Key::Tab => return,
        }
        event.prevent_default();
    }

    /// Click, or Enter/Space on a focused button.
    pub fn activate(&mut self, control: Control) {
        match control {
            Control::Previous => self.go_previous(),
            Control::PlayPause => self.toggle_playback(),
            Control::Next => self.go_next(),
            Control::Indicator(index) => self.go_to(index),
            Control::Slideshow => {}
        }
    }

    /// Change reported by the slideshow, manual or automatic.
    pub fn on_slide_change(&mut self, change: SlideChange) {
        if change.current >= self.slides.len() {
            warn!(?change, "slideshow reported an index outside the catalog");
            return;
        }
        self.state.current_index = change.current;
        self.live_region.announce(announcement(self.slides, change.current));
    }

    pub fn indicators(&self) -> Vec<IndicatorDescriptor> {
        indicator::indicators(self.slides, self.state.current_index)
    }

    /// Sequential focus order; only the current indicator takes part.
    pub fn focus_order(&self) -> Vec<Control> {
        let mut order = vec![Control::Previous];
        if self.play_pause_enabled() {
            order.push(Control::PlayPause);
        }
        order.push(Control::Next);
        order.push(Control::Slideshow);
        if !self.slides.is_empty() {
            order.push(Control::Indicator(self.state.current_index));
        }
        order
    }

    fn navigate(&mut self, action: &'static str, op: impl FnOnce(&mut N) -> Option<SlideChange>) {
        let Some(navigator) = self.navigator.as_mut() else {
            debug!(action, "navigation before the slideshow is attached");
            return;
        };
        if let Some(change) = op(navigator) {
            self.on_slide_change(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use super::*;
    use crate::slide::SLIDES;
    use crate::slideshow::Slideshow;

    fn mounted(query: &MediaQuery) -> CarouselController<Slideshow> {
        let mut carousel = CarouselController::mount(&SLIDES, query, false);
        carousel.attach(Slideshow::new(SLIDES.len()));
        carousel
    }

    fn press(carousel: &mut CarouselController<Slideshow>, key: Key) -> KeyEvent {
        let mut event = KeyEvent::new(key);
        carousel.handle_key(&mut event);
        event
    }

    /// Records calls without moving.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Navigator for Recorder {
        fn go_next(&mut self) -> Option<SlideChange> {
            self.calls.push("next".into());
            None
        }
        fn go_back(&mut self) -> Option<SlideChange> {
            self.calls.push("back".into());
            None
        }
        fn go_to(&mut self, index: usize) -> Option<SlideChange> {
            self.calls.push(format!("to {index}"));
            None
        }
    }

    #[test]
    fn three_right_arrows_reach_alpine_house() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        for _ in 0..3 {
            assert!(press(&mut carousel, Key::ArrowRight).default_prevented());
        }
        assert_eq!(carousel.state().current_index, 3);
        assert_eq!(carousel.live_region().text(), "Slide 4 of 5: Alpine House in Mist");
    }

    #[test]
    fn left_arrow_wraps_to_last_slide() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        press(&mut carousel, Key::ArrowLeft);
        assert_eq!(carousel.state().current_index, 4);
        assert_eq!(carousel.live_region().text(), "Slide 5 of 5: Cozy Forest Cabin");
    }

    #[test]
    fn home_and_end_jump_to_edges() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        press(&mut carousel, Key::End);
        assert_eq!(carousel.state().current_index, 4);
        press(&mut carousel, Key::ArrowLeft);
        press(&mut carousel, Key::Home);
        assert_eq!(carousel.state().current_index, 0);
        press(&mut carousel, Key::Home);
        assert_eq!(carousel.state().current_index, 0);
    }

    #[test]
    fn space_and_enter_toggle_playback() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        assert!(press(&mut carousel, Key::Space).default_prevented());
        assert!(carousel.state().is_playing);
        assert!(carousel.slideshow_config().autoplay);
        press(&mut carousel, Key::Enter);
        assert!(!carousel.state().is_playing);
    }

    #[test]
    fn tab_is_left_to_the_window() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        assert!(!press(&mut carousel, Key::Tab).default_prevented());
    }

    #[test]
    fn toggling_twice_restores_playing_flag() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        let before = carousel.state().is_playing;
        carousel.toggle_playback();
        carousel.toggle_playback();
        assert_eq!(carousel.state().is_playing, before);
    }

    #[test]
    fn reduced_motion_while_playing_stops_autoplay() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        carousel.toggle_playback();
        assert!(carousel.slideshow_config().autoplay);

        query.set_matches(true);
        carousel.poll_environment();

        let config = carousel.slideshow_config();
        assert!(!config.autoplay);
        assert!(!carousel.state().is_playing);
        assert_eq!(config.duration, REDUCED_SLIDE_DURATION);
        assert_eq!(config.transition_duration, REDUCED_TRANSITION_DURATION);
        assert!(!carousel.play_pause_enabled());
    }

    #[test]
    fn reduced_motion_disables_toggle_but_not_navigation() {
        let query = MediaQuery::new(true);
        let mut carousel = mounted(&query);
        press(&mut carousel, Key::Space);
        carousel.activate(Control::PlayPause);
        assert!(!carousel.state().is_playing);
        assert!(!carousel.slideshow_config().autoplay);
        press(&mut carousel, Key::ArrowRight);
        assert_eq!(carousel.state().current_index, 1);
        assert!(!carousel.focus_order().contains(&Control::PlayPause));
    }

    #[test]
    fn preference_returning_to_normal_restores_timings_not_playback() {
        let query = MediaQuery::new(true);
        let mut carousel = mounted(&query);
        query.set_matches(false);
        carousel.poll_environment();
        let config = carousel.slideshow_config();
        assert_eq!(config.duration, SLIDE_DURATION);
        assert_eq!(config.transition_duration, TRANSITION_DURATION);
        assert!(!config.autoplay);
        assert!(carousel.play_pause_enabled());
    }

    #[test]
    fn clicking_third_indicator_marks_it_current() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        carousel.activate(Control::Indicator(2));
        assert_eq!(carousel.state().current_index, 2);
        let current: Vec<_> = carousel
            .indicators()
            .iter()
            .filter(|d| d.aria_current() == "true")
            .map(|d| d.index)
            .collect();
        assert_eq!(current, vec![2]);
        assert_eq!(carousel.focus_order().last(), Some(&Control::Indicator(2)));
    }

    #[test]
    fn automatic_transition_is_announced() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        carousel.toggle_playback();
        let config = carousel.slideshow_config();
        let change = carousel.navigator_mut().and_then(|slideshow| {
            slideshow.configure(config);
            slideshow.update(3.5, false)
        });
        carousel.on_slide_change(change.expect("autoplay should advance"));
        assert_eq!(carousel.live_region().text(), "Slide 2 of 5: Modern Suburban Home");
    }

    #[test]
    fn navigation_without_navigator_is_a_no_op() {
        let query = MediaQuery::new(false);
        let mut carousel: CarouselController<Slideshow> = CarouselController::mount(&SLIDES, &query, false);
        carousel.go_next();
        carousel.go_last();
        let mut event = KeyEvent::new(Key::ArrowRight);
        carousel.handle_key(&mut event);
        assert!(event.default_prevented());
        assert_eq!(carousel.state().current_index, 0);
        assert_eq!(carousel.live_region().announcements(), 0);
    }

    #[test]
    fn keys_delegate_to_navigator() {
        let query = MediaQuery::new(false);
        let mut carousel = CarouselController::mount(&SLIDES, &query, false);
        carousel.attach(Recorder::default());
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::Home, Key::End] {
            let mut event = KeyEvent::new(key);
            carousel.handle_key(&mut event);
        }
        carousel.go_to(9);
        let recorder = carousel.navigator().unwrap();
        assert_eq!(recorder.calls, vec!["back", "next", "to 0", "to 4"]);
    }

    #[test]
    fn out_of_range_change_is_ignored() {
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        carousel.on_slide_change(SlideChange { previous: 0, current: 7 });
        assert_eq!(carousel.state().current_index, 0);
    }

    #[test]
    fn unmount_releases_subscription() {
        let query = MediaQuery::new(false);
        let carousel = mounted(&query);
        assert_eq!(query.listener_count(), 1);
        drop(carousel);
        assert_eq!(query.listener_count(), 0);
        query.set_matches(true);
    }

    #[test]
    fn autoplay_flag_at_mount_respects_preference() {
        let query = MediaQuery::new(true);
        let carousel: CarouselController<Slideshow> = CarouselController::mount(&SLIDES, &query, true);
        assert!(!carousel.state().is_playing);
        let query = MediaQuery::new(false);
        let carousel: CarouselController<Slideshow> = CarouselController::mount(&SLIDES, &query, true);
        assert!(carousel.slideshow_config().autoplay);
    }

    #[test]
    fn random_input_keeps_index_in_range_and_announced() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let query = MediaQuery::new(false);
        let mut carousel = mounted(&query);
        let keys = [Key::ArrowLeft, Key::ArrowRight, Key::Space, Key::Enter, Key::Home, Key::End];

        for step in 0..2_000 {
            match rng.random_range(0..10) {
                0 => query.set_matches(rng.random_bool(0.5)),
                1 => carousel.activate(Control::Indicator(rng.random_range(0..SLIDES.len()))),
                2 => {
                    let config = carousel.slideshow_config();
                    let dt: f32 = rng.random_range(0.0..4.0);
                    let hovered = rng.random_bool(0.2);
                    let change = carousel.navigator_mut().and_then(|slideshow| {
                        slideshow.configure(config);
                        slideshow.update(dt, hovered)
                    });
                    if let Some(change) = change {
                        carousel.on_slide_change(change);
                    }
                }
                _ => {
                    let key = keys[rng.random_range(0..keys.len())];
                    press(&mut carousel, key);
                }
            }
            carousel.poll_environment();

            let state = carousel.state();
            assert!(state.current_index < SLIDES.len(), "step {step}");
            if state.prefers_reduced_motion {
                assert!(!carousel.slideshow_config().autoplay, "step {step}");
            }
            if carousel.live_region().announcements() > 0 {
                assert_eq!(carousel.live_region().text(), announcement(&SLIDES, state.current_index));
            }
        }
    }
}
