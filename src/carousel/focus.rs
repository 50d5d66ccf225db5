//! Keyboard focus across the carousel's controls.

/// A focusable part of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    PlayPause,
    Next,
    Slideshow,
    Indicator(usize),
}

impl Control {
    // Position in the full tab order, before any control is left out
    fn rank(&self) -> u8 {
        match self {
            Control::Previous => 0,
            Control::PlayPause => 1,
            Control::Next => 2,
            Control::Slideshow => 3,
            Control::Indicator(_) => 4,
        }
    }

    // Indicators share a single slot in the tab order (roving tab index)
    fn slot_matches(&self, other: &Control) -> bool {
        match (self, other) {
            (Control::Indicator(_), Control::Indicator(_)) => true,
            _ => self == other,
        }
    }
}

#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<Control>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&mut self, control: Control) {
        self.focused = Some(control);
    }

    pub fn focused(&self) -> Option<Control> {
        self.focused
    }

    pub fn is_focused(&self, control: Control) -> bool {
        self.focused == Some(control)
    }

    /// Hands focus to the following control when the focused one has left
    /// `order`, e.g. a button that became disabled.
    pub fn retain(&mut self, order: &[Control]) -> Option<Control> {
        let focused = self.focused?;
        if self.position(order).is_some() {
            return self.focused;
        }
        self.focused = order
            .iter()
            .find(|c| c.rank() > focused.rank())
            .or_else(|| order.first())
            .copied();
        self.focused
    }

    /// Moves focus forward through `order`, wrapping at the end.
    pub fn focus_next(&mut self, order: &[Control]) -> Option<Control> {
        if order.is_empty() {
            return self.focused;
        }
        let next = match self.position(order) {
            Some(p) if p + 1 < order.len() => order[p + 1],
            _ => order[0],
        };
        self.focused = Some(next);
        self.focused
    }

    /// Moves focus backward through `order`, wrapping at the start.
    pub fn focus_prev(&mut self, order: &[Control]) -> Option<Control> {
        let last = order.len().checked_sub(1)?;
        let prev = match self.position(order) {
            Some(p) if p > 0 => order[p - 1],
            _ => order[last],
        };
        self.focused = Some(prev);
        self.focused
    }

    fn position(&self, order: &[Control]) -> Option<usize> {
        let focused = self.focused?;
        order.iter().position(|c| c.slot_matches(&focused))
    }
}
