//! Transition controller: rotation state, elapsed time and the two ways of
//! moving between panels.

use std::time::Duration;

use tracing::debug;

use crate::config::EffectType;
use crate::error::{CarouselError, Result};
use crate::panel::PanelView;
use crate::state::RotationState;

type BeforeChange = Box<dyn FnMut(usize, usize)>;
type AfterChange = Box<dyn FnMut(usize)>;

/// Host notifications around a committed change.
///
/// `before_change` sees the state as it was immediately before a selection
/// and has no way to veto it.
#[derive(Default)]
pub struct ChangeHooks {
    before_change: Option<BeforeChange>,
    after_change: Option<AfterChange>,
}

impl ChangeHooks {
    pub fn set_before_change(&mut self, hook: impl FnMut(usize, usize) + 'static) {
        self.before_change = Some(Box::new(hook));
    }

    pub fn set_after_change(&mut self, hook: impl FnMut(usize) + 'static) {
        self.after_change = Some(Box::new(hook));
    }

    pub fn before_change(&mut self, from: usize, to: usize) {
        if let Some(hook) = self.before_change.as_mut() {
            hook(from, to);
        }
    }

    pub fn after_change(&mut self, current: usize) {
        if let Some(hook) = self.after_change.as_mut() {
            hook(current);
        }
    }
}

impl std::fmt::Debug for ChangeHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeHooks")
            .field("before_change", &self.before_change.is_some())
            .field("after_change", &self.after_change.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransitionController {
    state: RotationState,
    elapsed: Duration,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// One autoplay step. Returns true when the step advanced to the next panel.
    ///
    /// The threshold check is `>=` so a late step never skips an advance.
    /// `count` must be non-zero.
    pub fn tick(&mut self, delta: Duration, count: usize, interval: Duration) -> bool {
        debug_assert!(count > 0, "ticking over an empty panel sequence");
        if self.elapsed + delta >= interval {
            self.state = self.state.advanced(count);
            self.elapsed = Duration::ZERO;
            debug!(previous = self.state.previous, current = self.state.current, "advanced");
            true
        } else {
            self.elapsed += delta;
            false
        }
    }

    /// Jumps to `target`, notifying the host before and after the change.
    ///
    /// Reselecting the current panel is a full transition as well.
    pub fn select(&mut self, target: usize, count: usize, hooks: &mut ChangeHooks) -> Result<()> {
        if target >= count {
            return Err(CarouselError::PanelOutOfRange { index: target, count });
        }
        hooks.before_change(self.state.current, target);
        self.state = self.state.jumped(target);
        self.elapsed = Duration::ZERO;
        debug!(previous = self.state.previous, current = self.state.current, "selected");
        hooks.after_change(self.state.current);
        Ok(())
    }

    /// Holds elapsed at the interval: no countdown is in progress.
    pub fn pin(&mut self, interval: Duration) {
        self.elapsed = interval;
    }

    pub fn restart_countdown(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn rebase(&mut self, count: usize) {
        self.state = self.state.rebased(count);
    }

    /// Fraction of the interval already elapsed, in `[0, 1]`.
    pub fn progress(&self, interval: Duration) -> f32 {
        if interval.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / interval.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    pub fn view(&self, index: usize, effect: EffectType) -> PanelView {
        PanelView::classify(index, self.state, effect)
    }
}
