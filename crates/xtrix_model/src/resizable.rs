//! Reducer actions and transition logic for a resizable panel group.

use crate::error::ResizableError;
use crate::panels::{PanelAllocation, PanelPair};
use crate::pointer::{Orientation, PointerId, PointerSample, PointerTracker, TrackRect};

#[derive(Debug, Clone, PartialEq)]
/// Snapshot captured when a handle drag begins.
pub struct HandleDrag {
    /// Panel before the handle.
    pub before_id: String,
    /// Panel after the handle.
    pub after_id: String,
    /// Pair sizes at gesture start.
    pub start: PanelPair,
}

/// Gesture state for the group's handles; at most one handle drags at a time.
pub type ResizableInteraction = PointerTracker<HandleDrag>;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_resizable`].
pub enum ResizableAction {
    /// Register a panel on first mount.
    Register {
        /// Panel id, unique within the group.
        id: String,
        /// Declared default size in percent.
        default_size: Option<f64>,
    },
    /// Pointer pressed on the handle between two panels.
    BeginDrag {
        /// Panel before the handle.
        before_id: String,
        /// Panel after the handle.
        after_id: String,
        /// Group axis.
        orientation: Orientation,
        /// Union of the two panels' rectangles, measured once.
        track: TrackRect,
        /// Pointer that pressed the handle.
        sample: PointerSample,
    },
    /// Pointer moved while a handle drag is active.
    UpdateDrag {
        /// Latest pointer sample.
        sample: PointerSample,
    },
    /// Pointer released.
    EndDrag {
        /// Pointer that was released.
        pointer: PointerId,
    },
    /// Pointer cancelled by the platform, or the group is tearing down.
    CancelDrag,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_resizable`] for the view layer.
pub enum ResizableEffect {
    /// Panel sizes changed; dependent flex-basis styles must re-render.
    PanelsChanged,
    /// Gesture finished; window-scoped move/up listeners must be removed.
    ReleasePointer,
}

/// Applies a [`ResizableAction`] to the panel sizes and the handle gesture.
///
/// # Errors
///
/// Returns [`ResizableError`] when a handle names an unregistered panel or the
/// same panel on both sides. State is left unchanged in that case.
pub fn reduce_resizable(
    panels: &mut PanelAllocation,
    interaction: &mut ResizableInteraction,
    action: ResizableAction,
) -> Result<Vec<ResizableEffect>, ResizableError> {
    let mut effects = Vec::new();
    match action {
        ResizableAction::Register { id, default_size } => {
            let before = panels.len();
            panels.register(&id, default_size);
            if panels.len() != before {
                effects.push(ResizableEffect::PanelsChanged);
            }
        }
        ResizableAction::BeginDrag {
            before_id,
            after_id,
            orientation,
            track,
            sample,
        } => {
            let start = panels.pair(&before_id, &after_id)?;
            let snapshot = HandleDrag {
                before_id,
                after_id,
                start,
            };
            // Resize is driven by travel since press, so the press itself moves nothing.
            let _ = interaction.begin(sample, orientation, track, snapshot);
        }
        ResizableAction::UpdateDrag { sample } => {
            if let (Some(update), Some(session)) = (interaction.update(sample), interaction.session())
            {
                let drag = &session.snapshot;
                let before = panels.pair(&drag.before_id, &drag.after_id)?;
                let after = panels.resize_from(
                    &drag.before_id,
                    &drag.after_id,
                    drag.start,
                    update.delta_ratio * 100.0,
                )?;
                if after != before {
                    effects.push(ResizableEffect::PanelsChanged);
                }
            }
        }
        ResizableAction::EndDrag { pointer } => {
            if interaction.end(pointer).is_some() {
                effects.push(ResizableEffect::ReleasePointer);
            }
        }
        ResizableAction::CancelDrag => {
            if interaction.release().is_some() {
                effects.push(ResizableEffect::ReleasePointer);
            }
        }
    }
    Ok(effects)
}
