use crate::host::RenderHost;
use crate::overlay::config::{LifecycleHooks, OverlayHook};
use crate::overlay::registry::OverlayRegistry;
use crate::overlay::OverlayId;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Composes the presenter's lifecycle handlers with whatever the caller
/// already installed on the config. Existing handlers are never dropped or
/// reordered.
///
/// Order per event:
/// - `on_shown`: existing handlers, then the caller's completion.
/// - `on_will_hide`: focus release, then existing handlers.
/// - `on_hidden`: existing handlers, then the posted unregister.
pub(crate) fn install(
    hooks: &mut LifecycleHooks,
    id: OverlayId,
    completion: Option<OverlayHook>,
    registry: Rc<RefCell<OverlayRegistry>>,
    host: Rc<dyn RenderHost>,
) {
    if let Some(done) = completion {
        hooks.on_shown.push(done);
    }

    let focus_host = Rc::clone(&host);
    hooks
        .on_will_hide
        .insert(0, Box::new(move || focus_host.release_focus()));

    hooks.on_hidden.push(Box::new(move || {
        // Running the unregister inline would mutate the registry from inside
        // the hide transition's call stack; post it back onto the UI context.
        let registry = Rc::clone(&registry);
        let id = id.clone();
        host.post(Box::new(move || {
            debug!("Unregistered overlay {} after hide", id);
            registry.borrow_mut().unregister(&id);
        }));
    }));
}
