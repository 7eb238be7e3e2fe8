use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000); // Time a panel stays current under autoplay
pub const DEFAULT_TIME_STEP: Duration = Duration::from_millis(10);  // Autoplay tick granularity

pub const ITEM_CLASS: &str = "carousel-item";  // Class prefix for panels
pub const DOT_CLASS: &str = "carousel-dot";    // Class prefix for the indicator

pub const WINDOW_WIDTH: i32 = 960;             // Initial window size of the host binary
pub const WINDOW_HEIGHT: i32 = 540;
pub const FPS: u32 = 60;                       // Frames per second

pub const ANIMATION_DURATION: f32 = 0.5;       // Duration of slide/fade entrance and exit (seconds)
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

pub const DOT_SIZE: f32 = 28.0;                // Indicator marker size (pixels)
pub const DOT_GAP: f32 = 10.0;                 // Space between markers (pixels)
pub const DOT_MARGIN: f32 = 16.0;              // Distance from the window edge (pixels)
pub const PROGRESS_HEIGHT: f32 = 4.0;          // Height of the active marker's progress bar (pixels)
