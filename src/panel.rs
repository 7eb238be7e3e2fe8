//! Per-panel role and animation classification.

use crate::config::EffectType;
use crate::constants::ITEM_CLASS;
use crate::state::{Direction, RotationState};

/// Role a panel plays in the last transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRole {
    Initial,  // previous == current == this panel
    Current,
    Previous,
    None,     // Not involved, not drawn
}

/// Concrete animation applied to a panel taking part in a transition.
///
/// Forward transitions use the base variant, backward ones the mirrored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectVariant {
    Slide,
    SlideMirrored,
    Fade,
    FadeMirrored,
}

impl EffectVariant {
    fn new(effect: EffectType, direction: Direction) -> Option<Self> {
        match (effect, direction) {
            (_, Direction::None) => None,
            (EffectType::Slide, Direction::Forward) => Some(EffectVariant::Slide),
            (EffectType::Slide, Direction::Backward) => Some(EffectVariant::SlideMirrored),
            (EffectType::Fade, Direction::Forward) => Some(EffectVariant::Fade),
            (EffectType::Fade, Direction::Backward) => Some(EffectVariant::FadeMirrored),
        }
    }

    pub fn effect(&self) -> EffectType {
        match self {
            EffectVariant::Slide | EffectVariant::SlideMirrored => EffectType::Slide,
            EffectVariant::Fade | EffectVariant::FadeMirrored => EffectType::Fade,
        }
    }

    pub fn is_mirrored(&self) -> bool {
        matches!(self, EffectVariant::SlideMirrored | EffectVariant::FadeMirrored)
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            EffectVariant::Slide => "slide",
            EffectVariant::SlideMirrored => "slide-right",
            EffectVariant::Fade => "fade",
            EffectVariant::FadeMirrored => "fade-right",
        }
    }
}

/// What the rendering surface needs to know about one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    pub index: usize,
    pub role: PanelRole,
    pub variant: Option<EffectVariant>,
}

impl PanelView {
    pub fn classify(index: usize, state: RotationState, effect: EffectType) -> Self {
        let RotationState { previous, current } = state;
        let role = if previous == current && current == index {
            PanelRole::Initial
        } else if index == current {
            PanelRole::Current
        } else if index == previous {
            PanelRole::Previous
        } else {
            PanelRole::None
        };
        let variant = match role {
            PanelRole::Current | PanelRole::Previous => EffectVariant::new(effect, state.direction()),
            PanelRole::Initial | PanelRole::None => None,
        };
        Self { index, role, variant }
    }

    pub fn is_visible(&self) -> bool {
        self.role != PanelRole::None
    }

    /// Class list in the form a stylesheet-driven surface expects, e.g.
    /// `carousel-item carousel-item-prev carousel-item-prev-fade-right`.
    pub fn class_names(&self) -> String {
        let mut classes = vec![ITEM_CLASS.to_string()];
        let role = match self.role {
            PanelRole::Initial => Some("initial"),
            PanelRole::Current => Some("current"),
            PanelRole::Previous => Some("prev"),
            PanelRole::None => None,
        };
        if let Some(role) = role {
            classes.push(format!("{ITEM_CLASS}-{role}"));
            if let Some(variant) = self.variant {
                classes.push(format!("{ITEM_CLASS}-{role}-{}", variant.suffix()));
            }
        }
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(index: usize, previous: usize, current: usize, effect: EffectType) -> PanelView {
        PanelView::classify(index, RotationState { previous, current }, effect)
    }

    #[test]
    fn initial_state_marks_only_the_first_panel() {
        let first = view(0, 0, 0, EffectType::Slide);
        assert_eq!(first.role, PanelRole::Initial);
        assert_eq!(first.variant, None);
        assert_eq!(first.class_names(), "carousel-item carousel-item-initial");

        let other = view(1, 0, 0, EffectType::Slide);
        assert_eq!(other.role, PanelRole::None);
        assert!(!other.is_visible());
        assert_eq!(other.class_names(), "carousel-item");
    }

    #[test]
    fn forward_transition_uses_base_variant() {
        let current = view(1, 0, 1, EffectType::Slide);
        assert_eq!(current.role, PanelRole::Current);
        assert_eq!(current.variant, Some(EffectVariant::Slide));
        assert_eq!(
            current.class_names(),
            "carousel-item carousel-item-current carousel-item-current-slide"
        );

        let previous = view(0, 0, 1, EffectType::Slide);
        assert_eq!(previous.role, PanelRole::Previous);
        assert_eq!(previous.variant, Some(EffectVariant::Slide));
    }

    #[test]
    fn backward_transition_uses_mirrored_variant() {
        let previous = view(2, 2, 0, EffectType::Fade);
        assert_eq!(previous.role, PanelRole::Previous);
        assert_eq!(previous.variant, Some(EffectVariant::FadeMirrored));
        assert!(previous.variant.unwrap().is_mirrored());
        assert_eq!(
            previous.class_names(),
            "carousel-item carousel-item-prev carousel-item-prev-fade-right"
        );

        let current = view(0, 2, 0, EffectType::Fade);
        assert_eq!(current.variant, Some(EffectVariant::FadeMirrored));
        assert_eq!(current.variant.unwrap().effect(), EffectType::Fade);
    }

    #[test]
    fn bystanders_have_no_role() {
        assert_eq!(view(2, 0, 1, EffectType::Slide).role, PanelRole::None);
        assert_eq!(view(2, 0, 1, EffectType::Slide).variant, None);
    }
}
