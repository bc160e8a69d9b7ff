pub mod host;
pub mod overlay;

pub use host::{HostError, HostResult, MockRenderHost, RenderHost};
pub use overlay::{
    DismissTarget, Level, LifecycleHooks, NotificationOptions, OverlayConfig, OverlayContent,
    OverlayHook, OverlayId, OverlayPresenter, OverlayRecord, OverlayRegistry, OverlayStyle,
    PresentOptions, PresentationHandle, Position, Transition, DEFAULT_BASE_LEVEL,
};
