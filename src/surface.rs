use crate::indicator::Indicator;
use crate::panel::PanelView;

/// Host-supplied panel. Panels that are not renderable are skipped.
pub trait Renderable {
    fn is_renderable(&self) -> bool {
        true
    }
}

/// Whatever draws the carousel: receives the visible panels with their
/// role and animation, then the indicator.
pub trait RenderSurface<P> {
    fn draw_panel(&mut self, panel: &P, view: &PanelView);
    fn draw_indicator(&mut self, indicator: &Indicator);
}
