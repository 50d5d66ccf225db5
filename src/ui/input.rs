use raylib::prelude::Vector2;
use crate::carousel::{CarouselController, Control, FocusManager, Key, KeyEvent};
use crate::engine::Navigator;
use crate::ui::layout::Layout;

/// Routes a key press: the slideshow region handles it when it or one of the
/// indicators inside it has focus, then the window's default action runs
/// unless the handler prevented it.
pub fn dispatch_key<N: Navigator>(
    carousel: &mut CarouselController<N>,
    focus: &mut FocusManager,
    mut event: KeyEvent,
) -> KeyEvent {
    if matches!(focus.focused(), Some(Control::Slideshow | Control::Indicator(_))) {
        carousel.handle_key(&mut event);
    }
    if event.default_prevented() {
        return event;
    }

    match event.key {
        Key::Tab => {
            let order = carousel.focus_order();
            if event.shift {
                focus.focus_prev(&order);
            } else {
                focus.focus_next(&order);
            }
        }
        Key::Enter | Key::Space => {
            if let Some(control) = focus.focused() {
                carousel.activate(control);
            }
        }
        _ => {}
    }
    event
}

/// Applies a pending reduced-motion change and moves focus off any control
/// the change removed from the tab order.
pub fn sync_environment<N: Navigator>(carousel: &mut CarouselController<N>, focus: &mut FocusManager) {
    carousel.poll_environment();
    focus.retain(&carousel.focus_order());
}

/// Primary-button click at `point`. Disabled controls neither take focus nor act.
pub fn dispatch_click<N: Navigator>(
    carousel: &mut CarouselController<N>,
    focus: &mut FocusManager,
    layout: &Layout,
    point: Vector2,
) -> Option<Control> {
    let control = layout.hit_test(point)?;
    if control == Control::PlayPause && !carousel.play_pause_enabled() {
        return None;
    }
    focus.focus(control);
    carousel.activate(control);
    Some(control)
}
