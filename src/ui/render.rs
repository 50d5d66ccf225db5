use raylib::prelude::*;
use crate::carousel::{CarouselView, Control, FocusManager};
use crate::carousel::view::ButtonView;
use crate::page::PageMeta;
use crate::slideshow::Slideshow;
use crate::slideshow::renderer::draw_slideshow;
use crate::ui::layout::*;
use crate::ui::text::wrap_text;

const FOCUS_RING: Color = Color { r: 30, g: 110, b: 255, a: 255 };

fn draw_text_centered(d: &mut RaylibDrawHandle, text: &str, center_x: f32, y: i32, size: i32, color: Color) {
    let w = measure_text(text, size);
    d.draw_text(text, center_x as i32 - w / 2, y, size, color);
}

pub fn draw_page(d: &mut RaylibDrawHandle, page: &PageMeta, layout: &Layout) {
    d.clear_background(Color::WHITE);
    let center = layout.width * 0.5;
    draw_text_centered(d, page.heading, center, layout.heading_y, HEADING_SIZE, Color::BLACK);
    draw_text_centered(d, page.subheading, center, layout.subheading_y, SUBHEADING_SIZE, Color::DARKGRAY);
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, button: &ButtonView) {
    let (fill, ink) = if button.disabled {
        (Color::LIGHTGRAY, Color::GRAY)
    } else {
        (Color::WHITE, Color::BLACK)
    };
    d.draw_rectangle_rec(rect, fill);
    d.draw_rectangle_lines_ex(rect, 2.0, Color::WHITE);

    let w = measure_text(button.text, BUTTON_SIZE);
    d.draw_text(
        button.text,
        (rect.x + (rect.width - w as f32) * 0.5) as i32,
        (rect.y + (rect.height - BUTTON_SIZE as f32) * 0.5) as i32,
        BUTTON_SIZE,
        ink,
    );
}

fn draw_status_bar(d: &mut RaylibDrawHandle, view: &CarouselView, layout: &Layout) {
    let bar = layout.status_bar;
    d.draw_rectangle_rec(bar, Color::BLACK);

    let text_y = (bar.y + (bar.height - STATUS_SIZE as f32) * 0.5) as i32;
    let text_x = (bar.x + 16.0) as i32;
    d.draw_text(&view.status, text_x, text_y, STATUS_SIZE, Color::WHITE);

    if let Some(badge) = view.reduced_motion_badge {
        let badge_x = text_x + measure_text(&view.status, STATUS_SIZE) + 12;
        let badge_w = measure_text(badge, 16) + 16;
        d.draw_rectangle(badge_x, text_y - 4, badge_w, 28, Color::WHITE);
        d.draw_text(badge, badge_x + 8, text_y + 2, 16, Color::BLACK);
    }

    draw_button(d, layout.previous, &view.previous);
    draw_button(d, layout.play_pause, &view.play_pause);
    draw_button(d, layout.next, &view.next);
}

fn draw_overlay(d: &mut RaylibDrawHandle, view: &CarouselView, layout: &Layout) {
    let Some(slide) = view.slides.get(view.current_index) else {
        return;
    };
    let overlay = layout.overlay;
    if overlay.height <= 0.0 {
        return;
    }
    d.draw_rectangle_rec(overlay, Color::BLACK);
    d.draw_rectangle(overlay.x as i32, overlay.y as i32, overlay.width as i32, 4, Color::WHITE);

    let x = (overlay.x + 24.0) as i32;
    let mut y = (overlay.y + 18.0) as i32;
    d.draw_text(slide.caption, x, y, CAPTION_SIZE, Color::WHITE);
    y += CAPTION_SIZE + 10;

    let max_width = (overlay.width - 48.0) as i32;
    for line in wrap_text(slide.description, max_width, |s| measure_text(s, DESCRIPTION_SIZE)).iter().take(2) {
        d.draw_text(line, x, y, DESCRIPTION_SIZE, Color::RAYWHITE);
        y += DESCRIPTION_SIZE + 4;
    }
}

fn draw_indicators(d: &mut RaylibDrawHandle, view: &CarouselView, layout: &Layout) {
    for (descriptor, rect) in view.indicators.iter().zip(layout.indicators.iter()) {
        let (fill, ink) = if descriptor.is_current {
            (Color::BLACK, Color::WHITE)
        } else {
            (Color::WHITE, Color::GRAY)
        };
        d.draw_rectangle_rec(*rect, fill);
        d.draw_rectangle_lines_ex(*rect, 2.0, Color::BLACK);

        let w = measure_text(&descriptor.text, BUTTON_SIZE);
        d.draw_text(
            &descriptor.text,
            (rect.x + (rect.width - w as f32) * 0.5) as i32,
            (rect.y + (rect.height - BUTTON_SIZE as f32) * 0.5) as i32,
            BUTTON_SIZE,
            ink,
        );
    }
}

/// Title shown when the pointer rests on `control`.
pub fn tooltip(view: &CarouselView, control: Control) -> Option<&str> {
    match control {
        Control::Previous => view.previous.title,
        Control::PlayPause => view.play_pause.title,
        Control::Next => view.next.title,
        Control::Indicator(i) => view.indicators.get(i).map(|descriptor| descriptor.title.as_str()),
        Control::Slideshow => None,
    }
}

fn draw_tooltip(d: &mut RaylibDrawHandle, text: &str, at: Vector2) {
    let w = measure_text(text, 16) + 12;
    let x = at.x as i32 + 14;
    let y = at.y as i32 + 18;
    d.draw_rectangle(x, y, w, 24, Color::new(0, 0, 0, 220));
    d.draw_text(text, x + 6, y + 4, 16, Color::WHITE);
}

/// Draws the whole carousel section for one frame.
pub fn draw_carousel(
    d: &mut RaylibDrawHandle,
    view: &CarouselView,
    layout: &Layout,
    focus: &FocusManager,
    slideshow: Option<&Slideshow>,
    textures: &[Texture2D],
    pointer: Vector2,
) {
    d.draw_rectangle_rec(layout.section, Color::WHITE);
    d.draw_rectangle_lines_ex(layout.section, 4.0, Color::BLACK);

    draw_status_bar(d, view, layout);

    match slideshow {
        Some(slideshow) => draw_slideshow(d, slideshow, textures, layout.slideshow),
        None => d.draw_rectangle_rec(layout.slideshow, Color::DARKGRAY),
    }
    draw_overlay(d, view, layout);

    d.draw_rectangle_lines_ex(layout.slideshow, 4.0, Color::BLACK);

    draw_indicators(d, view, layout);

    if let Some(ring) = focus.focused().and_then(|control| layout.rect(control)) {
        d.draw_rectangle_lines_ex(ring, 4.0, FOCUS_RING);
    }

    if let Some(text) = layout.hit_test(pointer).and_then(|control| tooltip(view, control)) {
        draw_tooltip(d, text, pointer);
    }
}
