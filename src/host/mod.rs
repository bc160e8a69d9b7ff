mod mock;

pub use mock::{DisplayedOverlay, MockRenderHost};

use crate::overlay::{Level, OverlayConfig, OverlayContent, OverlayHook, PresentationHandle};
use thiserror::Error;

/// Failure at the rendering boundary. The presenter logs and swallows these;
/// the public surface stays silent so dismissal is always safe to call.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no surface available for overlay {0}")]
    NoSurface(String),
    #[error("{0}")]
    Other(String),
}

impl From<&str> for HostError {
    fn from(message: &str) -> Self {
        HostError::Other(message.to_string())
    }
}

impl From<String> for HostError {
    fn from(message: String) -> Self {
        HostError::Other(message)
    }
}

pub type HostResult<T> = Result<T, HostError>;

/// The rendering side of the overlay stack. The host owns every animated
/// transition, the screen region backing each level, and any auto-dismiss
/// timer; the presenter owns the registry.
///
/// Host obligations: fire `on_shown` once the content is fully visible,
/// `on_will_hide` once before a hide transition starts, and `on_hidden` once
/// after it completes; expose the handle to the presented content so it can
/// dismiss itself; honor `auto_dismiss_after` from the style.
///
/// All methods run on the UI context; implementations need no synchronization.
pub trait RenderHost {
    /// Level of the host's own topmost content, if it tracks one.
    fn baseline_level(&self) -> Option<Level>;

    /// Begins the animated display of `content`. Must not block; completion is
    /// reported through the config's `on_shown` hooks.
    fn display(
        &self,
        content: Box<dyn OverlayContent>,
        config: OverlayConfig,
        handle: PresentationHandle,
    ) -> HostResult<()>;

    /// Begins hiding the overlay with `id`, invoking `completion` once the
    /// hide transition finishes.
    fn hide(&self, id: &str, completion: Option<OverlayHook>) -> HostResult<()>;

    /// Begins hiding every overlay the host is displaying.
    fn hide_all(&self, completion: Option<OverlayHook>) -> HostResult<()>;

    /// Begins hiding whatever the host considers currently displayed, whether
    /// or not the registry tracks it.
    fn hide_current(&self, completion: Option<OverlayHook>) -> HostResult<()>;

    /// Drops any active text/input focus. Called before every dismissal and
    /// again when a hide transition is about to start.
    fn release_focus(&self);

    /// Queues `task` onto the UI-affine context. Must never run it inline;
    /// callers rely on the current call stack unwinding first.
    fn post(&self, task: Box<dyn FnOnce()>);
}
