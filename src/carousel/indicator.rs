use crate::slide::SlideMeta;

/// Place of a control in sequential keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,    // tabindex="-1": reachable by pointer or script only
    Sequential(i32), // tabindex="0" or positive
}

impl TabIndex {
    pub fn value(&self) -> i32 {
        match self {
            Self::NotFocusable => -1,
            Self::Sequential(n) => *n,
        }
    }
}

/// Everything needed to draw and expose one slide indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorDescriptor {
    pub index: usize,
    pub text: String,
    pub label: String,
    pub title: String,
    pub is_current: bool,
    pub tab_index: TabIndex,
    pub sr_suffix: &'static str,
}

impl IndicatorDescriptor {
    /// `aria-current` value.
    pub fn aria_current(&self) -> &'static str {
        if self.is_current { "true" } else { "false" }
    }
}

/// Indicator for slide `index` while `current` is showing. Roving tab index:
/// only the current indicator is in the tab order.
pub fn indicator(index: usize, current: usize, slide: &SlideMeta) -> IndicatorDescriptor {
    let is_current = index == current;
    let number = index + 1;
    IndicatorDescriptor {
        index,
        text: number.to_string(),
        label: format!("Go to slide {}: {}", number, slide.caption),
        title: format!("Slide {}: {}", number, slide.caption),
        is_current,
        tab_index: if is_current { TabIndex::Sequential(0) } else { TabIndex::NotFocusable },
        sr_suffix: if is_current { "(current slide)" } else { "" },
    }
}

pub fn indicators(slides: &[SlideMeta], current: usize) -> Vec<IndicatorDescriptor> {
    slides
        .iter()
        .enumerate()
        .map(|(index, slide)| indicator(index, current, slide))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::SLIDES;

    #[test]
    fn active_indicator_is_current_and_tabbable() {
        let descriptor = indicator(2, 2, &SLIDES[2]);
        assert_eq!(descriptor.text, "3");
        assert_eq!(descriptor.label, "Go to slide 3: Cabin in the Mountains");
        assert_eq!(descriptor.title, "Slide 3: Cabin in the Mountains");
        assert_eq!(descriptor.aria_current(), "true");
        assert_eq!(descriptor.tab_index.value(), 0);
        assert_eq!(descriptor.sr_suffix, "(current slide)");
    }

    #[test]
    fn inactive_indicators_leave_tab_order() {
        let all = indicators(&SLIDES, 0);
        assert_eq!(all.len(), 5);
        let focusable: Vec<_> = all.iter().filter(|d| d.tab_index.value() >= 0).map(|d| d.index).collect();
        assert_eq!(focusable, vec![0]);
        assert!(all[1..].iter().all(|d| d.aria_current() == "false" && d.sr_suffix.is_empty()));
    }

    #[test]
    fn descriptor_depends_only_on_inputs() {
        assert_eq!(indicator(1, 3, &SLIDES[1]), indicator(1, 3, &SLIDES[1]));
        assert_ne!(indicator(1, 3, &SLIDES[1]), indicator(1, 1, &SLIDES[1]));
    }
}
