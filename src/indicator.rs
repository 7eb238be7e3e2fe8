//! Position indicator: one marker per panel, progress on the active one.

use crate::config::DotPosition;
use crate::constants::DOT_CLASS;

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub active: bool,
    /// Filled fraction of the progress bar, only set on the active marker.
    pub progress: Option<f32>,
}

/// Snapshot of the indicator for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub position: DotPosition,
    pub markers: Vec<Marker>,
}

impl Indicator {
    pub fn new(dot_count: usize, current: usize, progress: f32, position: DotPosition) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let markers = (0..dot_count)
            .map(|index| {
                let active = index == current;
                Marker {
                    index,
                    active,
                    progress: active.then_some(progress),
                }
            })
            .collect();
        Self { position, markers }
    }

    pub fn active(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.active)
    }

    pub fn class_names(&self) -> String {
        format!("{DOT_CLASS} {DOT_CLASS}-{}", self.position)
    }

    /// Places the markers inside `area`, centred along the configured edge.
    pub fn layout(&self, area: Rect, marker_size: f32, gap: f32, margin: f32) -> Vec<Rect> {
        let count = self.markers.len() as f32;
        let span = count * marker_size + (count - 1.0).max(0.0) * gap;
        let step = marker_size + gap;

        (0..self.markers.len())
            .map(|i| {
                let offset = i as f32 * step;
                if self.position.is_vertical() {
                    let y = area.y + (area.height - span) * 0.5 + offset;
                    let x = if self.position == DotPosition::Right {
                        area.x + area.width - margin - marker_size
                    } else {
                        area.x + margin
                    };
                    Rect::new(x, y, marker_size, marker_size)
                } else {
                    let x = area.x + (area.width - span) * 0.5 + offset;
                    let y = if self.position == DotPosition::Bottom {
                        area.y + area.height - margin - marker_size
                    } else {
                        area.y + margin
                    };
                    Rect::new(x, y, marker_size, marker_size)
                }
            })
            .collect()
    }

    /// Index of the marker under `(px, py)`, if any.
    pub fn hit(&self, area: Rect, marker_size: f32, gap: f32, margin: f32, px: f32, py: f32) -> Option<usize> {
        self.layout(area, marker_size, gap, margin)
            .iter()
            .position(|rect| rect.contains(px, py))
    }
}
