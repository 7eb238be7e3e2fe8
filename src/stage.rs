use carousel::constants::{DOT_GAP, DOT_MARGIN, DOT_SIZE, PROGRESS_HEIGHT};
use carousel::{Indicator, PanelView, Rect, RenderSurface};
use raylib::prelude::*;

use crate::slide::Slide;

/// Draws the carousel into the window area.
pub struct Stage<'a, D: RaylibDraw> {
    d: &'a mut D,
    area: Rect,
}

impl<'a, D: RaylibDraw> Stage<'a, D> {
    pub fn new(d: &'a mut D, area: Rect) -> Self {
        Self { d, area }
    }
}

fn rectangle(rect: &Rect) -> Rectangle {
    Rectangle::new(rect.x, rect.y, rect.width, rect.height)
}

impl<D: RaylibDraw> RenderSurface<Slide> for Stage<'_, D> {
    fn draw_panel(&mut self, panel: &Slide, _view: &PanelView) {
        panel.draw(&mut *self.d, rectangle(&self.area));
    }

    fn draw_indicator(&mut self, indicator: &Indicator) {
        let rects = indicator.layout(self.area, DOT_SIZE, DOT_GAP, DOT_MARGIN);
        for (marker, rect) in indicator.markers.iter().zip(rects.iter()) {
            let outline = rectangle(rect);
            self.d.draw_rectangle_rec(outline, Color::new(0, 0, 0, 120));
            self.d.draw_rectangle_lines_ex(outline, 2.0, Color::RAYWHITE);

            // Active marker fills left to right with the countdown
            if let Some(progress) = marker.progress {
                let bar = Rectangle::new(
                    rect.x,
                    rect.y + rect.height - PROGRESS_HEIGHT,
                    rect.width * progress,
                    PROGRESS_HEIGHT,
                );
                self.d.draw_rectangle_rec(bar, Color::SKYBLUE);
            }
        }
    }
}
