use crate::host::RenderHost;
use crate::overlay::config::{OverlayConfig, OverlayHook, Position};
use crate::overlay::content::OverlayContent;
use crate::overlay::handle::PresentationHandle;
use crate::overlay::registry::{OverlayRecord, OverlayRegistry};
use crate::overlay::{ident, level, lifecycle, OverlayId};
use log::{debug, error};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// What a `dismiss` call targets.
#[derive(Debug, Clone, PartialEq)]
pub enum DismissTarget {
    /// Whatever the host considers currently displayed. Does not consult or
    /// mutate the registry.
    Current,
    ById(OverlayId),
    ByPosition(Position),
    All,
}

#[derive(Default)]
pub struct PresentOptions {
    /// Identifier for the overlay; generated when omitted.
    pub id: Option<OverlayId>,
    pub position: Position,
    /// Full config; defaults are derived from `position` when omitted.
    pub config: Option<OverlayConfig>,
    /// Runs once the host reports the content fully visible.
    pub completion: Option<OverlayHook>,
}

#[derive(Default)]
pub struct NotificationOptions {
    pub id: Option<OverlayId>,
    /// Auto-dismiss delay, stamped into the style for the host's timer.
    pub auto_dismiss_after: Option<Duration>,
    pub config: Option<OverlayConfig>,
    pub completion: Option<OverlayHook>,
}

/// The overlay stack for one application. Create one and pass it wherever
/// presentation is needed; every method must run on the UI context.
///
/// Presenting registers the overlay and hands it to the rendering host in one
/// step; the host's later hide callback unregisters it again. None of the
/// methods block on animations.
pub struct OverlayPresenter {
    registry: Rc<RefCell<OverlayRegistry>>,
    host: Rc<dyn RenderHost>,
}

impl OverlayPresenter {
    pub fn new(host: Rc<dyn RenderHost>) -> Self {
        Self {
            registry: Rc::new(RefCell::new(OverlayRegistry::new())),
            host,
        }
    }

    /// Presents `content` as an overlay and returns its handle. Returns as
    /// soon as the host has taken over; completion arrives via `on_shown`.
    pub fn present(
        &self,
        content: Box<dyn OverlayContent>,
        options: PresentOptions,
    ) -> PresentationHandle {
        let PresentOptions {
            id,
            position,
            config,
            completion,
        } = options;

        let id = id.unwrap_or_else(ident::generate);
        let mut config = config.unwrap_or_else(|| OverlayConfig::for_position(position));
        let level = level::compute(&self.registry.borrow(), self.host.baseline_level());
        let handle = PresentationHandle::new(id.clone(), level, position, config.style.clone());

        self.registry.borrow_mut().register(&id, position, level);
        lifecycle::install(
            &mut config.hooks,
            id.clone(),
            completion,
            Rc::clone(&self.registry),
            Rc::clone(&self.host),
        );

        debug!("Presenting overlay {} at level {} ({:?})", id, level, position);
        if let Err(e) = self.host.display(content, config, handle.clone()) {
            error!("Failed to display overlay {}: {}", id, e);
        }

        handle
    }

    /// Presents `content` as a top notification. A supplied duration becomes
    /// `auto_dismiss_after` on the style; the host owns the timer.
    pub fn notification(
        &self,
        content: Box<dyn OverlayContent>,
        options: NotificationOptions,
    ) -> PresentationHandle {
        let NotificationOptions {
            id,
            auto_dismiss_after,
            config,
            completion,
        } = options;

        let mut config = config.unwrap_or_else(|| OverlayConfig::for_position(Position::Top));
        if let Some(after) = auto_dismiss_after {
            config.style.auto_dismiss_after = Some(after);
        }

        self.present(
            content,
            PresentOptions {
                id,
                position: Position::Top,
                config: Some(config),
                completion,
            },
        )
    }

    /// Dismisses overlays. Unknown ids and empty positions are silent no-ops,
    /// so this is always safe to call speculatively. Active input focus is
    /// released up front in every case.
    pub fn dismiss(&self, target: DismissTarget, mut completion: Option<OverlayHook>) {
        self.host.release_focus();

        match target {
            DismissTarget::Current => {
                if let Err(e) = self.host.hide_current(completion) {
                    error!("Failed to hide current overlay: {}", e);
                }
            }
            DismissTarget::ById(id) => self.dismiss_id(&id, completion),
            DismissTarget::ByPosition(position) => {
                let ids = self.registry.borrow().find_by_position(position);
                if ids.is_empty() {
                    return;
                }
                let last = ids.len() - 1;
                for (index, id) in ids.iter().enumerate() {
                    let done = if index == last { completion.take() } else { None };
                    self.dismiss_id(id, done);
                }
            }
            DismissTarget::All => {
                // Cleared before the host confirms any hide animation.
                self.registry.borrow_mut().clear();
                debug!("Dismissed all overlays");
                if let Err(e) = self.host.hide_all(completion) {
                    error!("Failed to hide all overlays: {}", e);
                }
            }
        }
    }

    /// Self-dismissal entry point for presented content holding its handle.
    /// Equivalent to `dismiss(DismissTarget::ById(handle.id()))`.
    pub fn dismiss_handle(&self, handle: &PresentationHandle) {
        self.dismiss(DismissTarget::ById(handle.id().to_string()), None);
    }

    /// Registry membership only; the overlay may still be mid-transition.
    pub fn is_displaying(&self, id: &str) -> bool {
        self.registry.borrow().find_by_id(id).is_some()
    }

    pub fn modal_count(&self, position: Position) -> usize {
        self.registry.borrow().find_by_position(position).len()
    }

    pub fn displayed_modals(&self) -> Vec<OverlayRecord> {
        self.registry.borrow().all_records()
    }

    fn dismiss_id(&self, id: &str, completion: Option<OverlayHook>) {
        if self.registry.borrow().find_by_id(id).is_none() {
            return;
        }
        if let Err(e) = self.host.hide(id, completion) {
            error!("Failed to hide overlay {}: {}", id, e);
        }
        // Removed up front rather than waiting for the hide callback; the
        // callback's own unregister becomes a no-op.
        self.registry.borrow_mut().unregister(id);
        debug!("Dismissed overlay {}", id);
    }
}
