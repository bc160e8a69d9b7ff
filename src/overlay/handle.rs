use crate::overlay::{Level, OverlayId, OverlayStyle, Position};

/// Handle to one presented overlay, given to the presented content so it can
/// describe and dismiss itself. Immutable mirror of the registry record plus
/// the resolved style; it has no lifecycle of its own.
#[derive(Debug, Clone)]
pub struct PresentationHandle {
    id: OverlayId,
    level: Level,
    position: Position,
    style: OverlayStyle,
}

impl PresentationHandle {
    pub(crate) fn new(id: OverlayId, level: Level, position: Position, style: OverlayStyle) -> Self {
        Self {
            id,
            level,
            position,
            style,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }
}
