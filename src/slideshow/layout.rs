use raylib::prelude::*;
use crate::slideshow::engine::Frame;
use crate::slideshow::state::Direction;

/// Horizontal fraction `[start, end]` of a slide or of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub const FULL: Span = Span { start: 0.0, end: 1.0 };

    pub fn width(&self) -> f32 {
        self.end - self.start
    }
}

/// One clipped piece of a slide: which part of it is drawn where in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub source: Span,
    pub dest: Span,
}

/// Splits the viewport between the visible slides of `frame`.
pub fn segments(frame: Frame) -> Vec<Segment> {
    match frame {
        Frame::Still { index } => vec![Segment { index, source: Span::FULL, dest: Span::FULL }],
        Frame::Push { outgoing, incoming, progress, direction } => {
            let p = progress.clamp(0.0, 1.0);
            let (out_src, out_dst, in_src, in_dst) = match direction {
                Direction::Forward => (
                    Span { start: p, end: 1.0 },
                    Span { start: 0.0, end: 1.0 - p },
                    Span { start: 0.0, end: p },
                    Span { start: 1.0 - p, end: 1.0 },
                ),
                Direction::Backward => (
                    Span { start: 0.0, end: 1.0 - p },
                    Span { start: p, end: 1.0 },
                    Span { start: 1.0 - p, end: 1.0 },
                    Span { start: 0.0, end: p },
                ),
            };
            [
                Segment { index: outgoing, source: out_src, dest: out_dst },
                Segment { index: incoming, source: in_src, dest: in_dst },
            ]
            .into_iter()
            .filter(|segment| segment.dest.width() > 0.0)
            .collect()
        }
    }
}

/// Centered crop of a `tex_w` x `tex_h` texture that fills `view` without distortion.
pub fn cover_crop(tex_w: f32, tex_h: f32, view: Rectangle) -> Rectangle {
    if tex_w <= 0.0 || tex_h <= 0.0 || view.width <= 0.0 || view.height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_w.max(0.0), tex_h.max(0.0));
    }
    let view_ratio = view.width / view.height;
    let tex_ratio = tex_w / tex_h;
    if tex_ratio > view_ratio {
        // Too wide: trim left and right
        let w = tex_h * view_ratio;
        Rectangle::new((tex_w - w) * 0.5, 0.0, w, tex_h)
    } else {
        let h = tex_w / view_ratio;
        Rectangle::new(0.0, (tex_h - h) * 0.5, tex_w, h)
    }
}

/// Source and destination rectangles for drawing `segment` into `view`.
pub fn segment_rects(segment: &Segment, crop: Rectangle, view: Rectangle) -> (Rectangle, Rectangle) {
    let source = Rectangle::new(
        crop.x + crop.width * segment.source.start,
        crop.y,
        crop.width * segment.source.width(),
        crop.height,
    );
    let dest = Rectangle::new(
        view.x + view.width * segment.dest.start,
        view.y,
        view.width * segment.dest.width(),
        view.height,
    );
    (source, dest)
}
