use tracing::info;

/// Polite, atomic text region whose changes are announced to assistive
/// technology.
///
/// Announcements are published through the `carousel::announce` log target.
#[derive(Debug, Clone)]
pub struct LiveRegion {
    text: String,
    announcements: usize,
}

impl LiveRegion {
    /// `aria-live` value.
    pub const POLITENESS: &'static str = "polite";

    pub fn polite(text: impl Into<String>) -> Self {
        Self { text: text.into(), announcements: 0 }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `aria-atomic`: the whole text is read on every change.
    pub fn is_atomic(&self) -> bool {
        true
    }

    /// Number of announcements made since creation.
    pub fn announcements(&self) -> usize {
        self.announcements
    }

    pub fn announce(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.announcements += 1;
        info!(target: "carousel::announce", politeness = Self::POLITENESS, count = self.announcements, "{}", self.text);
    }
}
