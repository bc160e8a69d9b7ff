mod config;
mod content;
mod handle;
mod ident;
mod level;
mod lifecycle;
mod presenter;
mod registry;

pub use config::{LifecycleHooks, OverlayConfig, OverlayHook, OverlayStyle, Position, Transition};
pub use content::OverlayContent;
pub use handle::PresentationHandle;
pub use level::DEFAULT_BASE_LEVEL;
pub use presenter::{DismissTarget, NotificationOptions, OverlayPresenter, PresentOptions};
pub use registry::{OverlayRecord, OverlayRegistry};

pub type OverlayId = String;

/// Stacking order value. Higher levels render above lower ones and above host
/// content; levels only grow while the process runs.
pub type Level = i64;
