//! The embeddable widget: panels, controller, autoplay timer and hooks.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{CarouselConfig, DotPosition, EffectType};
use crate::controller::{ChangeHooks, TransitionController};
use crate::error::{CarouselError, Result};
use crate::indicator::Indicator;
use crate::panel::PanelView;
use crate::state::RotationState;
use crate::surface::{RenderSurface, Renderable};
use crate::timer::{Schedule, Ticker};

#[derive(Debug)]
pub struct Carousel<P> {
    config: CarouselConfig,
    panels: Vec<P>,
    controller: TransitionController,
    ticker: Option<Ticker>,
    hooks: ChangeHooks,
    revision: u64,
}

/// Keeps renderable panels in order, warning about every dropped one.
fn renderable_panels<P: Renderable>(panels: impl IntoIterator<Item = P>) -> Result<Vec<P>> {
    let panels: Vec<P> = panels
        .into_iter()
        .enumerate()
        .filter_map(|(position, panel)| {
            if panel.is_renderable() {
                Some(panel)
            } else {
                warn!(position, "skipping panel that cannot be rendered");
                None
            }
        })
        .collect();
    if panels.is_empty() {
        return Err(CarouselError::NoPanels);
    }
    Ok(panels)
}

/// Config stores milliseconds; anything finer or larger is refused.
fn whole_millis(name: &str, duration: Duration) -> Result<u64> {
    if duration.subsec_nanos() % 1_000_000 != 0 {
        return Err(CarouselError::InvalidConfig(format!(
            "{name} must be a whole number of milliseconds, got {duration:?}"
        )));
    }
    u64::try_from(duration.as_millis())
        .map_err(|_| CarouselError::InvalidConfig(format!("{name} {duration:?} is too large")))
}

impl<P: Renderable> Carousel<P> {
    pub fn new(config: CarouselConfig, panels: impl IntoIterator<Item = P>) -> Result<Self> {
        config.validate()?;
        let panels = renderable_panels(panels)?;
        let mut carousel = Self {
            config,
            panels,
            controller: TransitionController::new(),
            ticker: None,
            hooks: ChangeHooks::default(),
            revision: 0,
        };
        carousel.sync_timer();
        debug!(panels = carousel.panels.len(), autoplay = carousel.config.autoplay, "carousel created");
        Ok(carousel)
    }

    /// Replaces the panel sequence. Indices are kept positionally, folded
    /// into the new count.
    pub fn set_panels(&mut self, panels: impl IntoIterator<Item = P>) -> Result<()> {
        self.panels = renderable_panels(panels)?;
        self.controller.rebase(self.panels.len());
        self.sync_timer();
        Ok(())
    }
}

impl<P> Carousel<P> {
    pub fn on_before_change(mut self, hook: impl FnMut(usize, usize) + 'static) -> Self {
        self.hooks.set_before_change(hook);
        self
    }

    pub fn on_after_change(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.hooks.set_after_change(hook);
        self
    }

    /// Reports the initial current panel to the host.
    pub fn mount(&mut self) {
        self.hooks.after_change(self.controller.state().current);
    }

    /// Feeds host frame time to the autoplay timer and applies due ticks.
    pub fn update(&mut self, frame: Duration) {
        self.sync_timer();
        let Some(ticker) = self.ticker.as_mut() else {
            return;
        };
        let due = ticker.poll(frame);
        let (step, interval, count) = (self.config.time_step(), self.config.interval(), self.panels.len());
        for _ in 0..due {
            if self.controller.tick(step, count, interval) {
                self.revision += 1;
                self.hooks.after_change(self.controller.state().current);
            }
        }
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        self.controller.select(index, self.panels.len(), &mut self.hooks)?;
        self.revision += 1;
        if !self.config.autoplay {
            self.controller.pin(self.config.interval());
        }
        Ok(())
    }

    pub fn select_next(&mut self) -> Result<()> {
        let next = (self.controller.state().current + 1) % self.panels.len();
        self.select(next)
    }

    pub fn select_previous(&mut self) -> Result<()> {
        let count = self.panels.len();
        let previous = (self.controller.state().current + count - 1) % count;
        self.select(previous)
    }

    pub fn set_autoplay(&mut self, autoplay: bool) {
        if self.config.autoplay == autoplay {
            return;
        }
        self.config.autoplay = autoplay;
        if autoplay {
            self.controller.restart_countdown();
        }
        self.sync_timer();
    }

    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        let mut config = self.config.clone();
        config.interval_ms = whole_millis("interval", interval)?;
        self.apply_timing(config)
    }

    pub fn set_time_step(&mut self, time_step: Duration) -> Result<()> {
        let mut config = self.config.clone();
        config.time_step_ms = whole_millis("time step", time_step)?;
        self.apply_timing(config)
    }

    pub fn set_effect(&mut self, effect: EffectType) {
        self.config.effect = effect;
    }

    pub fn set_dot_position(&mut self, position: DotPosition) {
        self.config.dot_position = position;
    }

    fn apply_timing(&mut self, config: CarouselConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.sync_timer();
        Ok(())
    }

    /// Acquires, reschedules or releases the autoplay timer so that it
    /// always runs with the live parameters.
    fn sync_timer(&mut self) {
        if !self.config.autoplay {
            self.ticker = None;
            self.controller.pin(self.config.interval());
            return;
        }
        let schedule = Schedule {
            interval: self.config.interval(),
            time_step: self.config.time_step(),
            panel_count: self.panels.len(),
        };
        match &self.ticker {
            Some(ticker) if ticker.schedule() == schedule => {}
            _ => {
                // Release the old timer before acquiring the new one.
                self.ticker = None;
                self.ticker = Some(Ticker::start(schedule));
            }
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> RotationState {
        self.controller.state()
    }

    pub fn elapsed(&self) -> Duration {
        self.controller.elapsed()
    }

    pub fn progress(&self) -> f32 {
        self.controller.progress(self.config.interval())
    }

    pub fn is_autoplaying(&self) -> bool {
        self.ticker.is_some()
    }

    /// Bumped on every committed transition, including reselection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut [P] {
        &mut self.panels
    }

    pub fn view(&self, index: usize) -> PanelView {
        self.controller.view(index, self.config.effect)
    }

    pub fn views(&self) -> Vec<PanelView> {
        (0..self.panels.len()).map(|i| self.view(i)).collect()
    }

    pub fn indicator(&self) -> Indicator {
        Indicator::new(
            self.panels.len(),
            self.controller.state().current,
            self.progress(),
            self.config.dot_position,
        )
    }

    pub fn render<S: RenderSurface<P>>(&self, surface: &mut S) {
        for (panel, view) in self.panels.iter().zip(self.views()) {
            if view.is_visible() {
                surface.draw_panel(panel, &view);
            }
        }
        surface.draw_indicator(&self.indicator());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card(bool);

    impl Renderable for Card {
        fn is_renderable(&self) -> bool {
            self.0
        }
    }

    fn autoplay() -> CarouselConfig {
        CarouselConfig { autoplay: true, ..CarouselConfig::default() }
    }

    #[test]
    fn empty_panel_list_is_fatal() {
        let err = Carousel::new(CarouselConfig::default(), Vec::<Card>::new()).unwrap_err();
        assert!(matches!(err, CarouselError::NoPanels));
    }

    #[test]
    fn unrenderable_panels_are_skipped() {
        let carousel = Carousel::new(autoplay(), [Card(true), Card(false), Card(true)]).unwrap();
        assert_eq!(carousel.panel_count(), 2);

        let err = Carousel::new(autoplay(), [Card(false)]).unwrap_err();
        assert!(matches!(err, CarouselError::NoPanels));
    }

    #[test]
    fn frame_time_drives_advances() {
        let mut carousel = Carousel::new(autoplay(), vec![Card(true); 3]).unwrap();
        for _ in 0..300 {
            carousel.update(Duration::from_millis(16));
        }
        // 4800ms in whole 10ms steps -> 480 ticks, below the 500 needed.
        assert_eq!(carousel.state().current, 0);
        carousel.update(Duration::from_millis(200));
        assert_eq!(carousel.state(), RotationState { previous: 0, current: 1 });
        assert_eq!(carousel.revision(), 1);
    }

    #[test]
    fn disabled_autoplay_pins_progress() {
        let mut carousel = Carousel::new(CarouselConfig::default(), vec![Card(true); 2]).unwrap();
        assert!(!carousel.is_autoplaying());
        assert_eq!(carousel.progress(), 1.0);

        carousel.update(Duration::from_secs(60));
        assert_eq!(carousel.state().current, 0);

        carousel.select(1).unwrap();
        assert_eq!(carousel.progress(), 1.0);
    }

    #[test]
    fn disabling_autoplay_cancels_pending_ticks() {
        let mut carousel = Carousel::new(autoplay(), vec![Card(true); 2]).unwrap();
        carousel.update(Duration::from_millis(4990));
        carousel.set_autoplay(false);
        assert!(!carousel.is_autoplaying());
        carousel.update(Duration::from_secs(10));
        assert_eq!(carousel.state().current, 0);
    }

    #[test]
    fn enabling_autoplay_starts_a_fresh_countdown() {
        let mut carousel = Carousel::new(CarouselConfig::default(), vec![Card(true); 2]).unwrap();
        carousel.set_autoplay(true);
        assert_eq!(carousel.progress(), 0.0);
        carousel.update(Duration::from_millis(10));
        assert_eq!(carousel.state().current, 0);
    }

    #[test]
    fn timing_change_reschedules_timer() {
        let mut carousel = Carousel::new(autoplay(), vec![Card(true); 2]).unwrap();
        carousel.update(Duration::from_millis(5));
        carousel.set_interval(Duration::from_millis(100)).unwrap();
        // The 5ms left over from the old timer is discarded.
        carousel.update(Duration::from_millis(5));
        assert_eq!(carousel.elapsed(), Duration::ZERO);
        carousel.update(Duration::from_millis(100));
        assert_eq!(carousel.state().current, 1);
    }

    #[test]
    fn zero_time_step_is_rejected() {
        let mut carousel = Carousel::new(autoplay(), vec![Card(true); 2]).unwrap();
        assert!(carousel.set_time_step(Duration::ZERO).is_err());
        assert_eq!(carousel.config().time_step_ms, 10);
    }

    #[test]
    fn sub_millisecond_timing_is_rejected() {
        let mut carousel = Carousel::new(autoplay(), vec![Card(true); 2]).unwrap();
        let err = carousel.set_interval(Duration::from_micros(1500)).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));
        assert!(carousel.set_interval(Duration::from_micros(500)).is_err());
        assert!(carousel.set_time_step(Duration::from_nanos(10_000_001)).is_err());
        assert_eq!(carousel.config().interval_ms, 5000);
        assert_eq!(carousel.config().time_step_ms, 10);

        carousel.set_interval(Duration::from_millis(1500)).unwrap();
        assert_eq!(carousel.config().interval_ms, 1500);
    }

    #[test]
    fn oversized_interval_is_rejected() {
        let mut carousel = Carousel::new(autoplay(), vec![Card(true); 2]).unwrap();
        let err = carousel.set_interval(Duration::from_secs(u64::MAX)).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));
        assert_eq!(carousel.config().interval_ms, 5000);
    }

    #[test]
    fn panel_change_reschedules_timer() {
        let mut carousel = Carousel::new(autoplay(), vec![Card(true); 5]).unwrap();
        carousel.select(4).unwrap();
        carousel.update(Duration::from_millis(4995));
        assert_eq!(carousel.elapsed(), Duration::from_millis(4990));

        carousel.set_panels(vec![Card(true); 3]).unwrap();
        assert_eq!(carousel.state(), RotationState { previous: 0, current: 1 });
        // 5ms pending on the old timer is gone, so 5ms more is still no tick.
        carousel.update(Duration::from_millis(5));
        assert_eq!(carousel.state().current, 1);
        assert_eq!(carousel.elapsed(), Duration::from_millis(4990));

        carousel.update(Duration::from_millis(10));
        assert_eq!(carousel.state(), RotationState { previous: 1, current: 2 });
        for _ in 0..500 {
            carousel.update(Duration::from_millis(10));
        }
        assert_eq!(carousel.state(), RotationState { previous: 2, current: 0 });
    }

    #[test]
    fn time_step_change_reschedules_timer() {
        let mut carousel = Carousel::new(autoplay(), vec![Card(true); 2]).unwrap();
        carousel.update(Duration::from_millis(4995));
        assert_eq!(carousel.elapsed(), Duration::from_millis(4990));

        carousel.set_time_step(Duration::from_millis(20)).unwrap();
        // The old timer's 5ms is discarded; 15ms is below one 20ms step.
        carousel.update(Duration::from_millis(15));
        assert_eq!(carousel.state().current, 0);
        assert_eq!(carousel.elapsed(), Duration::from_millis(4990));

        carousel.update(Duration::from_millis(5));
        assert_eq!(carousel.state(), RotationState { previous: 0, current: 1 });
        carousel.update(Duration::from_millis(5000));
        assert_eq!(carousel.state(), RotationState { previous: 1, current: 0 });
    }

    #[test]
    fn shrinking_panel_list_folds_indices() {
        let mut carousel = Carousel::new(CarouselConfig::default(), vec![Card(true); 5]).unwrap();
        carousel.select(4).unwrap();
        carousel.set_panels(vec![Card(true); 3]).unwrap();
        assert_eq!(carousel.state(), RotationState { previous: 0, current: 1 });
        assert!(carousel.set_panels(Vec::new()).is_err());
    }

    #[test]
    fn keyboard_navigation_wraps() {
        let mut carousel = Carousel::new(CarouselConfig::default(), vec![Card(true); 3]).unwrap();
        carousel.select_previous().unwrap();
        assert_eq!(carousel.state().current, 2);
        carousel.select_next().unwrap();
        assert_eq!(carousel.state().current, 0);
    }
}
