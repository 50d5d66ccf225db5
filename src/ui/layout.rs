use raylib::prelude::*;
use crate::carousel::Control;

pub const HEADING_SIZE: i32 = 40;
pub const SUBHEADING_SIZE: i32 = 20;
pub const STATUS_SIZE: i32 = 22;
pub const BUTTON_SIZE: i32 = 20;
pub const CAPTION_SIZE: i32 = 26;
pub const DESCRIPTION_SIZE: i32 = 18;

const MARGIN: f32 = 20.0;
const PADDING: f32 = 16.0;
const GAP: f32 = 8.0;
const MAX_SECTION_WIDTH: f32 = 1000.0;
const HEADER_HEIGHT: f32 = 110.0;
const STATUS_HEIGHT: f32 = 72.0;
const BUTTON_HEIGHT: f32 = 44.0;
const INDICATOR_EDGE: f32 = 48.0;
const OVERLAY_HEIGHT: f32 = 110.0;

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Screen placement of the page header and every carousel control.
#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub heading_y: i32,
    pub subheading_y: i32,
    pub section: Rectangle,
    pub status_bar: Rectangle,
    pub previous: Rectangle,
    pub play_pause: Rectangle,
    pub next: Rectangle,
    pub slideshow: Rectangle,
    pub overlay: Rectangle,
    pub indicators: Vec<Rectangle>,
}

impl Layout {
    pub fn compute(width: f32, height: f32, slide_count: usize) -> Self {
        let section_w = (width - 2.0 * MARGIN).clamp(0.0, MAX_SECTION_WIDTH);
        let section = Rectangle::new(
            (width - section_w) * 0.5,
            HEADER_HEIGHT,
            section_w,
            (height - HEADER_HEIGHT - MARGIN).max(0.0),
        );

        let status_bar = Rectangle::new(
            section.x + PADDING,
            section.y + PADDING,
            (section.width - 2.0 * PADDING).max(0.0),
            STATUS_HEIGHT,
        );

        // Controls are right-aligned in the status bar: PREV, PLAY/PAUSE, NEXT
        let button_y = status_bar.y + (STATUS_HEIGHT - BUTTON_HEIGHT) * 0.5;
        let right = status_bar.x + status_bar.width - PADDING;
        let next = Rectangle::new(right - 110.0, button_y, 110.0, BUTTON_HEIGHT);
        let play_pause = Rectangle::new(next.x - GAP - 130.0, button_y, 130.0, BUTTON_HEIGHT);
        let previous = Rectangle::new(play_pause.x - GAP - 110.0, button_y, 110.0, BUTTON_HEIGHT);

        let indicator_row_h = INDICATOR_EDGE + 2.0 * GAP;
        let slideshow_y = status_bar.y + status_bar.height + PADDING;
        let slideshow = Rectangle::new(
            status_bar.x,
            slideshow_y,
            status_bar.width,
            (section.y + section.height - PADDING - indicator_row_h - slideshow_y).max(0.0),
        );
        let overlay_h = OVERLAY_HEIGHT.min(slideshow.height);
        let overlay = Rectangle::new(
            slideshow.x,
            slideshow.y + slideshow.height - overlay_h,
            slideshow.width,
            overlay_h,
        );

        let row_w = slide_count as f32 * INDICATOR_EDGE + slide_count.saturating_sub(1) as f32 * GAP;
        let row_x = slideshow.x + (slideshow.width - row_w) * 0.5;
        let row_y = slideshow.y + slideshow.height + GAP;
        let indicators = (0..slide_count)
            .map(|i| Rectangle::new(row_x + i as f32 * (INDICATOR_EDGE + GAP), row_y, INDICATOR_EDGE, INDICATOR_EDGE))
            .collect();

        Self {
            width,
            heading_y: MARGIN as i32,
            subheading_y: MARGIN as i32 + HEADING_SIZE + 12,
            section,
            status_bar,
            previous,
            play_pause,
            next,
            slideshow,
            overlay,
            indicators,
        }
    }

    pub fn rect(&self, control: Control) -> Option<Rectangle> {
        match control {
            Control::Previous => Some(self.previous),
            Control::PlayPause => Some(self.play_pause),
            Control::Next => Some(self.next),
            Control::Slideshow => Some(self.slideshow),
            Control::Indicator(i) => self.indicators.get(i).copied(),
        }
    }

    /// Control under `point`; buttons win over the slideshow they may overlap.
    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        if contains(&self.previous, point) {
            return Some(Control::Previous);
        }
        if contains(&self.play_pause, point) {
            return Some(Control::PlayPause);
        }
        if contains(&self.next, point) {
            return Some(Control::Next);
        }
        if let Some(i) = self.indicators.iter().position(|r| contains(r, point)) {
            return Some(Control::Indicator(i));
        }
        if contains(&self.slideshow, point) {
            return Some(Control::Slideshow);
        }
        None
    }
}
