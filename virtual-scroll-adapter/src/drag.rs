/// Phase of a scrollbar thumb drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    /// `grab` is the pointer's distance from the thumb's leading edge at press time.
    Dragging { grab: f64 },
}

/// Pointer-drag state machine for the synthetic thumb: `Idle → Dragging → Idle`.
///
/// Release and the pointer leaving the tracked surface are both valid ways out; there is no
/// timeout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThumbDrag {
    phase: DragPhase,
}

impl ThumbDrag {
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Starts a drag with the pointer at `pointer` over a thumb currently at `thumb_position`.
    pub fn press(&mut self, pointer: f64, thumb_position: f64) {
        self.phase = DragPhase::Dragging {
            grab: pointer - thumb_position,
        };
    }

    /// Returns the thumb position the pointer now asks for (unclamped), or `None` when idle.
    pub fn drag_to(&self, pointer: f64) -> Option<f64> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { grab } => Some(pointer - grab),
        }
    }

    pub fn release(&mut self) {
        self.phase = DragPhase::Idle;
    }

    pub fn cancel(&mut self) {
        self.release();
    }
}
