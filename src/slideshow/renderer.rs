use raylib::prelude::*;
use crate::slideshow::engine::Slideshow;
use crate::slideshow::layout::{cover_crop, segment_rects, segments};

/// Draws the visible slides of `slideshow` into `view`, one texture per slide.
pub fn draw_slideshow(d: &mut RaylibDrawHandle, slideshow: &Slideshow, textures: &[Texture2D], view: Rectangle) {
    d.draw_rectangle_rec(view, Color::BLACK);

    for segment in segments(slideshow.frame()) {
        let Some(texture) = textures.get(segment.index) else {
            continue;
        };
        let crop = cover_crop(texture.width() as f32, texture.height() as f32, view);
        let (source, dest) = segment_rects(&segment, crop, view);

        d.draw_texture_pro(
            texture,
            source,
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
