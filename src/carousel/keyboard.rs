use raylib::consts::KeyboardKey;

/// Keys the carousel window reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Home,
    End,
    Tab,
}

impl Key {
    pub fn from_raylib(key: KeyboardKey) -> Option<Self> {
        Some(match key {
            KeyboardKey::KEY_LEFT => Key::ArrowLeft,
            KeyboardKey::KEY_RIGHT => Key::ArrowRight,
            KeyboardKey::KEY_SPACE => Key::Space,
            KeyboardKey::KEY_ENTER | KeyboardKey::KEY_KP_ENTER => Key::Enter,
            KeyboardKey::KEY_HOME => Key::Home,
            KeyboardKey::KEY_END => Key::End,
            KeyboardKey::KEY_TAB => Key::Tab,
            _ => return None,
        })
    }
}

/// Keys whose auto-repeat, while held down, counts as further presses.
pub const REPEATING: [KeyboardKey; 2] = [KeyboardKey::KEY_LEFT, KeyboardKey::KEY_RIGHT];

/// A key press travelling through the focused control's handler before the
/// window's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false, default_prevented: false }
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(Key::from_raylib(KeyboardKey::KEY_LEFT), Some(Key::ArrowLeft));
        assert_eq!(Key::from_raylib(KeyboardKey::KEY_KP_ENTER), Some(Key::Enter));
        assert_eq!(Key::from_raylib(KeyboardKey::KEY_A), None);
    }

    #[test]
    fn only_arrows_repeat() {
        let keys: Vec<_> = REPEATING.iter().filter_map(|&k| Key::from_raylib(k)).collect();
        assert_eq!(keys, vec![Key::ArrowLeft, Key::ArrowRight]);
    }

    #[test]
    fn fresh_event_is_not_prevented() {
        let mut event = KeyEvent::new(Key::Space).with_shift(true);
        assert!(!event.default_prevented());
        assert!(event.shift);
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
