//! Rotating-panel display.
//!
//! Exactly one panel is current at a time. Panels change on an autoplay
//! timer or on explicit selection, and an indicator shows one marker per
//! panel with the progress toward the next automatic advance.
//!
//! ```no_run
//! use std::time::Duration;
//! use carousel::{Carousel, CarouselConfig, Renderable};
//!
//! struct Card(&'static str);
//! impl Renderable for Card {}
//!
//! let config = CarouselConfig { autoplay: true, ..CarouselConfig::default() };
//! let mut carousel = Carousel::new(config, [Card("a"), Card("b")])?
//!     .on_after_change(|current| println!("now showing {current}"));
//! carousel.mount();
//! carousel.update(Duration::from_millis(16));
//! # Ok::<(), carousel::CarouselError>(())
//! ```

pub mod carousel;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod indicator;
pub mod panel;
pub mod state;
pub mod surface;
pub mod timer;

pub use carousel::Carousel;
pub use config::{CarouselConfig, DotPosition, EffectType};
pub use controller::{ChangeHooks, TransitionController};
pub use error::{CarouselError, Result};
pub use indicator::{Indicator, Marker, Rect};
pub use panel::{EffectVariant, PanelRole, PanelView};
pub use state::{Direction, RotationState};
pub use surface::{RenderSurface, Renderable};
