use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod carousel;
mod constants;
mod engine;
mod error;
mod page;
mod slide;
mod slideshow;
mod state;
mod texture_loader;
mod ui;

use crate::carousel::{CarouselController, CarouselView, Control, FocusManager, Key, KeyEvent, MediaQuery};
use crate::constants::*;
use crate::page::PAGE;
use crate::slide::SLIDES;
use crate::slideshow::Slideshow;
use crate::texture_loader::load_slide_textures;
use crate::ui::Layout;
use crate::carousel::keyboard::REPEATING;
use crate::ui::input::{dispatch_click, dispatch_key, sync_environment};
use crate::ui::layout::contains;
use crate::ui::render::{draw_carousel, draw_page};

#[derive(Parser, Debug)]
#[command(name = "carousel", about = "Accessible image carousel")]
struct Cli {
    /// Directory holding the slide images 1.jpg to 5.jpg
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    assets: PathBuf,
    /// Start with the reduced-motion preference set (toggle at runtime with Ctrl+M)
    #[arg(long, env = "CAROUSEL_REDUCED_MOTION")]
    reduced_motion: bool,
    /// Start playing automatically
    #[arg(long)]
    autoplay: bool,
    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,
    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,
}

/// Hands the slideshow the options derived from the carousel state.
fn configure_slideshow(carousel: &mut CarouselController<Slideshow>) {
    let config = carousel.slideshow_config();
    if let Some(slideshow) = carousel.navigator_mut() {
        slideshow.configure(config);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    info!(title = PAGE.title, "starting");
    debug!(description = PAGE.description, keywords = ?PAGE.keyword_list(), "page metadata");
    if !cli.assets.is_dir() {
        warn!(path = %cli.assets.display(), "assets directory not found; slides will show placeholders");
    }

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(PAGE.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Mount Carousel ---
    let query = MediaQuery::new(cli.reduced_motion);
    let mut carousel = CarouselController::mount(&SLIDES, &query, cli.autoplay);

    let textures = load_slide_textures(&mut rl, &thread, &cli.assets, &SLIDES)
        .context("failed to prepare slide textures")?;
    carousel.attach(Slideshow::new(SLIDES.len()));
    configure_slideshow(&mut carousel);

    let view = CarouselView::build(&carousel);
    debug!(
        region = view.region_label,
        instructions = %view.instructions,
        slideshow = view.slideshow_label,
        described_by = view.slideshow_description,
        live = view.live_mode,
        atomic = view.live_atomic,
        announced = %view.live_text,
        "carousel ready"
    );
    for (slide, indicator) in view.slides.iter().zip(&view.indicators) {
        debug!(
            group = %slide.group_label,
            alt = slide.alt,
            eager = slide.eager,
            index = indicator.index,
            indicator = %indicator.label,
            current = indicator.aria_current(),
            tabindex = indicator.tab_index.value(),
            sr = indicator.sr_suffix,
            "slide"
        );
    }
    for button in [&view.previous, &view.play_pause, &view.next] {
        debug!(
            text = button.text,
            label = button.label,
            pressed = ?button.pressed,
            disabled = button.disabled,
            "button"
        );
    }

    let mut focus = FocusManager::new();
    focus.focus(Control::Slideshow);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let layout = Layout::compute(rl.get_screen_width() as f32, rl.get_screen_height() as f32, SLIDES.len());

        // Ctrl+M flips the reduced-motion preference the way a system setting would
        let ctrl = rl.is_key_down(KeyboardKey::KEY_LEFT_CONTROL) || rl.is_key_down(KeyboardKey::KEY_RIGHT_CONTROL);
        let shift = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
        if ctrl && rl.is_key_pressed(KeyboardKey::KEY_M) {
            query.set_matches(!query.matches());
        }
        sync_environment(&mut carousel, &mut focus);
        configure_slideshow(&mut carousel);

        // --- Input ---
        while let Some(pressed) = rl.get_key_pressed() {
            if let Some(key) = Key::from_raylib(pressed) {
                dispatch_key(&mut carousel, &mut focus, KeyEvent::new(key).with_shift(shift));
            }
        }
        // The pressed-key queue only holds the first press of a held key
        for held in REPEATING {
            if rl.is_key_pressed_repeat(held) {
                if let Some(key) = Key::from_raylib(held) {
                    dispatch_key(&mut carousel, &mut focus, KeyEvent::new(key).with_shift(shift));
                }
            }
        }

        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            dispatch_click(&mut carousel, &mut focus, &layout, mouse);
        }
        let hovered = contains(&layout.slideshow, mouse);

        // --- Update Slideshow ---
        configure_slideshow(&mut carousel);
        let change = carousel.navigator_mut().and_then(|slideshow| slideshow.update(dt, hovered));
        if let Some(change) = change {
            carousel.on_slide_change(change);
        }

        // --- Render ---
        let view = CarouselView::build(&carousel);
        let mut d = rl.begin_drawing(&thread);
        draw_page(&mut d, &PAGE, &layout);
        draw_carousel(&mut d, &view, &layout, &focus, carousel.navigator(), &textures, mouse);
    }

    info!("carousel closed");
    Ok(())
}
