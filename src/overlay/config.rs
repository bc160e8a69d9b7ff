use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where an overlay attaches on screen. Governs the default transition and
/// interaction policy when no custom style is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    Top,
    Center,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Slide in from the attached edge.
    Translate,
    /// Scale up while fading in.
    ScaleFade,
}

/// Visual and interaction defaults the rendering host applies to one overlay.
/// The core only chooses these values; how they look is up to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub transition: Transition,
    pub dims_background: bool,
    pub blocks_interaction: bool,
    pub swipe_to_dismiss: bool,
    pub auto_dismiss_after: Option<Duration>,
}

impl OverlayStyle {
    /// Default style for overlays presented at `position`. Top notifications
    /// leave the screen underneath interactive; centered and bottom overlays
    /// block and dim it.
    pub fn for_position(position: Position) -> Self {
        match position {
            Position::Top => Self {
                transition: Transition::Translate,
                dims_background: false,
                blocks_interaction: false,
                swipe_to_dismiss: true,
                auto_dismiss_after: None,
            },
            Position::Center => Self {
                transition: Transition::ScaleFade,
                dims_background: true,
                blocks_interaction: true,
                swipe_to_dismiss: false,
                auto_dismiss_after: None,
            },
            Position::Bottom => Self {
                transition: Transition::Translate,
                dims_background: true,
                blocks_interaction: true,
                swipe_to_dismiss: false,
                auto_dismiss_after: None,
            },
        }
    }
}

pub type OverlayHook = Box<dyn FnMut()>;

/// Ordered lifecycle handlers for one overlay. Handlers are appended, never
/// replaced, so a hook the caller installed before presenting still fires.
#[derive(Default)]
pub struct LifecycleHooks {
    pub on_shown: Vec<OverlayHook>,
    pub on_will_hide: Vec<OverlayHook>,
    pub on_hidden: Vec<OverlayHook>,
}

impl LifecycleHooks {
    pub fn fire_shown(&mut self) {
        for hook in &mut self.on_shown {
            hook();
        }
    }

    pub fn fire_will_hide(&mut self) {
        for hook in &mut self.on_will_hide {
            hook();
        }
    }

    pub fn fire_hidden(&mut self) {
        for hook in &mut self.on_hidden {
            hook();
        }
    }
}

/// Everything the rendering host receives to display one overlay.
pub struct OverlayConfig {
    pub style: OverlayStyle,
    pub hooks: LifecycleHooks,
}

impl OverlayConfig {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            hooks: LifecycleHooks::default(),
        }
    }

    pub fn for_position(position: Position) -> Self {
        Self::new(OverlayStyle::for_position(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_style_is_non_blocking() {
        let style = OverlayStyle::for_position(Position::Top);
        assert_eq!(style.transition, Transition::Translate);
        assert!(!style.dims_background);
        assert!(!style.blocks_interaction);
        assert!(style.swipe_to_dismiss);
        assert_eq!(style.auto_dismiss_after, None);
    }

    #[test]
    fn test_center_style_blocks_with_scale_fade() {
        let style = OverlayStyle::for_position(Position::Center);
        assert_eq!(style.transition, Transition::ScaleFade);
        assert!(style.dims_background);
        assert!(style.blocks_interaction);
        assert!(!style.swipe_to_dismiss);
    }

    #[test]
    fn test_bottom_style_blocks_with_translate() {
        let style = OverlayStyle::for_position(Position::Bottom);
        assert_eq!(style.transition, Transition::Translate);
        assert!(style.dims_background);
        assert!(style.blocks_interaction);
        assert!(!style.swipe_to_dismiss);
    }

    #[test]
    fn test_hooks_fire_in_insertion_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let order = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = LifecycleHooks::default();
        for name in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            hooks.on_shown.push(Box::new(move || {
                order.borrow_mut().push(name);
            }));
        }

        hooks.fire_shown();
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }
}
