use crate::host::{HostResult, RenderHost};
use crate::overlay::{Level, OverlayConfig, OverlayContent, OverlayHook, PresentationHandle};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// One overlay as the mock host is displaying it.
pub struct DisplayedOverlay {
    pub handle: PresentationHandle,
    pub config: OverlayConfig,
    pub content: Box<dyn OverlayContent>,
}

/// In-memory stand-in for a real rendering host. Records every call, keeps the
/// displayed configs so tests can drive lifecycle hooks, and queues posted
/// tasks until `pump` runs them.
///
/// Transitions are instantaneous: hide completions run inside the hide call,
/// and `fire_shown`/`fire_hidden` simulate the animation callbacks a real host
/// would deliver later.
#[derive(Default)]
pub struct MockRenderHost {
    baseline: Option<Level>,
    displayed: RefCell<Vec<DisplayedOverlay>>,
    hidden_ids: RefCell<Vec<String>>,
    hide_all_calls: Cell<u32>,
    hide_current_calls: Cell<u32>,
    focus_release_calls: Cell<u32>,
    posted: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl MockRenderHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baseline(level: Level) -> Self {
        Self {
            baseline: Some(level),
            ..Self::default()
        }
    }

    /// Runs every posted task, including any posted while pumping.
    pub fn pump(&self) {
        loop {
            let task = self.posted.borrow_mut().pop_front();
            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }

    pub fn pending_tasks(&self) -> usize {
        self.posted.borrow().len()
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed.borrow().len()
    }

    pub fn last_handle(&self) -> Option<PresentationHandle> {
        self.displayed
            .borrow()
            .last()
            .map(|overlay| overlay.handle.clone())
    }

    pub fn hidden_ids(&self) -> Vec<String> {
        self.hidden_ids.borrow().clone()
    }

    pub fn hide_all_calls(&self) -> u32 {
        self.hide_all_calls.get()
    }

    pub fn hide_current_calls(&self) -> u32 {
        self.hide_current_calls.get()
    }

    pub fn focus_releases(&self) -> u32 {
        self.focus_release_calls.get()
    }

    /// Whether the most recently displayed content is a `T`, the same check a
    /// real host performs before rendering.
    pub fn last_content_is<T: std::any::Any>(&self) -> bool {
        self.displayed
            .borrow()
            .last()
            .map(|overlay| (*overlay.content).as_any().is::<T>())
            .unwrap_or(false)
    }

    /// Simulates the show transition for `id` finishing.
    pub fn fire_shown(&self, id: &str) {
        let mut displayed = self.displayed.borrow_mut();
        if let Some(overlay) = displayed.iter_mut().find(|o| o.handle.id() == id) {
            overlay.config.hooks.fire_shown();
        }
    }

    /// Simulates a full hide transition for `id`: will-hide, then hidden, then
    /// the surface is gone.
    pub fn fire_hidden(&self, id: &str) {
        let overlay = {
            let mut displayed = self.displayed.borrow_mut();
            let index = displayed.iter().position(|o| o.handle.id() == id);
            index.map(|index| displayed.remove(index))
        };
        if let Some(mut overlay) = overlay {
            overlay.config.hooks.fire_will_hide();
            overlay.config.hooks.fire_hidden();
        }
    }
}

impl RenderHost for MockRenderHost {
    fn baseline_level(&self) -> Option<Level> {
        self.baseline
    }

    fn display(
        &self,
        content: Box<dyn OverlayContent>,
        config: OverlayConfig,
        handle: PresentationHandle,
    ) -> HostResult<()> {
        self.displayed.borrow_mut().push(DisplayedOverlay {
            handle,
            config,
            content,
        });
        Ok(())
    }

    fn hide(&self, id: &str, completion: Option<OverlayHook>) -> HostResult<()> {
        self.hidden_ids.borrow_mut().push(id.to_string());
        if let Some(mut done) = completion {
            done();
        }
        Ok(())
    }

    fn hide_all(&self, completion: Option<OverlayHook>) -> HostResult<()> {
        self.hide_all_calls.set(self.hide_all_calls.get() + 1);
        if let Some(mut done) = completion {
            done();
        }
        Ok(())
    }

    fn hide_current(&self, completion: Option<OverlayHook>) -> HostResult<()> {
        self.hide_current_calls.set(self.hide_current_calls.get() + 1);
        if let Some(mut done) = completion {
            done();
        }
        Ok(())
    }

    fn release_focus(&self) {
        self.focus_release_calls.set(self.focus_release_calls.get() + 1);
    }

    fn post(&self, task: Box<dyn FnOnce()>) {
        self.posted.borrow_mut().push_back(task);
    }
}
