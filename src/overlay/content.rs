use std::any::Any;

/// Opaque content handed through to the rendering host. The core never looks
/// inside; hosts downcast via `as_any` to whatever concrete type they render.
pub trait OverlayContent: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> OverlayContent for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
