/// A transition reported by the slideshow, as `(previous, current)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub previous: usize,
    pub current: usize,
}

/// Imperative navigation exposed by the slideshow to the carousel.
///
/// Every call returns the change it caused, the same way automatic
/// transitions are reported, or `None` when nothing moved.
pub trait Navigator {
    fn go_next(&mut self) -> Option<SlideChange>;
    fn go_back(&mut self) -> Option<SlideChange>;
    fn go_to(&mut self, index: usize) -> Option<SlideChange>;
}
