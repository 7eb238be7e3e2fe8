use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use carousel::constants::*;
use carousel::{Carousel, CarouselConfig, DotPosition, EffectType, Rect};

mod slide;
mod stage;
mod texture_loader;

use crate::slide::Slide;
use crate::stage::Stage;
use crate::texture_loader::load_slides;

/// Rotating panel display.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory of images to rotate through. Colour placeholders are shown when omitted.
    image_directory: Option<PathBuf>,

    /// TOML configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Advance automatically.
    #[arg(long)]
    autoplay: bool,

    #[arg(long, value_enum)]
    effect: Option<EffectType>,

    #[arg(long, value_enum)]
    dot_position: Option<DotPosition>,

    /// Milliseconds a panel stays current under autoplay.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Autoplay tick granularity in milliseconds.
    #[arg(long)]
    time_step_ms: Option<u64>,

    /// Number of placeholder panels when no directory is given.
    #[arg(long, default_value_t = 5)]
    placeholders: usize,
}

impl Args {
    fn carousel_config(&self) -> Result<CarouselConfig> {
        let mut config = match &self.config {
            Some(path) => CarouselConfig::load(path)?,
            None => CarouselConfig::default(),
        };
        config.autoplay |= self.autoplay;
        if let Some(effect) = self.effect {
            config.effect = effect;
        }
        if let Some(position) = self.dot_position {
            config.dot_position = position;
        }
        if let Some(interval) = self.interval_ms {
            config.interval_ms = interval;
        }
        if let Some(step) = self.time_step_ms {
            config.time_step_ms = step;
        }
        config.validate()?;
        Ok(config)
    }
}

fn placeholder_slides(count: usize) -> Vec<Slide> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let color = Color::new(
                rng.random_range(40..200),
                rng.random_range(40..200),
                rng.random_range(40..200),
                255,
            );
            Slide::swatch(format!("Panel {}", i + 1), color)
        })
        .collect()
}

// Keep fatal errors on screen instead of closing on a blank window
fn show_fatal(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let started = Instant::now();
    while !rl.window_should_close() && started.elapsed() < ERROR_DISPLAY_DURATION {
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);
        d.draw_text(&format!("Error: {}", message), 20, 20, 20, Color::RED);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.carousel_config()?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Panels ---
    let slides = match &args.image_directory {
        Some(dir) => match load_slides(&mut rl, &thread, dir) {
            Ok(slides) => slides,
            Err(e) => {
                show_fatal(&mut rl, &thread, &format!("{:#}", e));
                return Err(e);
            }
        },
        None => placeholder_slides(args.placeholders),
    };

    let carousel = match Carousel::new(config, slides) {
        Ok(carousel) => carousel,
        Err(e) => {
            show_fatal(&mut rl, &thread, &e.to_string());
            return Err(e).context("Failed to start carousel");
        }
    };
    let mut carousel = carousel
        .on_before_change(|from, to| info!(from, to, "changing panel"))
        .on_after_change(|current| info!(current, "showing panel"));
    carousel.mount();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let area = Rect::new(0.0, 0.0, rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        // --- Input ---
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            let hit = carousel
                .indicator()
                .hit(area, DOT_SIZE, DOT_GAP, DOT_MARGIN, mouse.x, mouse.y);
            if let Some(index) = hit {
                carousel.select(index)?;
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            carousel.select_next()?;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            carousel.select_previous()?;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            let autoplay = !carousel.config().autoplay;
            carousel.set_autoplay(autoplay);
            info!(autoplay, "toggled autoplay");
        }

        // --- Update Logic ---
        carousel.update(Duration::from_secs_f32(dt.max(0.0)));

        let revision = carousel.revision();
        let views = carousel.views();
        for (slide, view) in carousel.panels_mut().iter_mut().zip(views.iter()) {
            if view.is_visible() {
                slide.sync(view, revision);
                slide.update(dt);
            }
        }

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.render(&mut Stage::new(&mut d, area));
    }

    Ok(())
}
