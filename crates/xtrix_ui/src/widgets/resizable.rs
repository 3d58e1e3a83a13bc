//! Resizable panel groups: percentage-sized panels split by draggable handles.

use leptos::*;
use xtrix_model::{
    reduce_resizable, ConfigError, Orientation, PanelAllocation, PanelPolicy, PointerId,
    PointerSample, ResizableAction, ResizableEffect, ResizableInteraction, TrackRect,
};

use super::{bool_token, merge_layout_class};
use crate::dom::{
    element_rect, is_primary_press, pointer_sample, try_set_pointer_capture, MeasureError,
};
use crate::gesture::WindowGesture;

#[derive(Clone, Copy)]
/// Owner-side handle for a group of resizable panels.
///
/// Holds the live size map and the handle gesture. Every mutation goes through
/// [`reduce_resizable`]; reducer errors are logged and leave state untouched.
pub struct ResizableGroup {
    orientation: Orientation,
    panels: RwSignal<PanelAllocation>,
    interaction: RwSignal<ResizableInteraction>,
    elements: StoredValue<Vec<(String, NodeRef<html::Div>)>>,
    gesture: WindowGesture,
    dispatch: Callback<ResizableAction>,
}

impl ResizableGroup {
    /// Creates an empty group in the current reactive owner.
    ///
    /// # Panics
    ///
    /// Panics when `policy` has inverted or out-of-range bounds.
    pub fn new(orientation: Orientation, policy: PanelPolicy) -> Self {
        Self::try_new(orientation, policy)
            .unwrap_or_else(|err| panic!("invalid resizable panel policy: {err}"))
    }

    /// Fallible form of [`ResizableGroup::new`].
    pub fn try_new(orientation: Orientation, policy: PanelPolicy) -> Result<Self, ConfigError> {
        let panels = create_rw_signal(PanelAllocation::new(policy)?);
        let interaction = create_rw_signal(ResizableInteraction::default());
        let gesture = WindowGesture::new();

        let dispatch = Callback::new(move |action: ResizableAction| {
            let mut next_panels = panels.get_untracked();
            let mut next_interaction = interaction.get_untracked();

            match reduce_resizable(&mut next_panels, &mut next_interaction, action) {
                Ok(effects) => {
                    if effects.contains(&ResizableEffect::PanelsChanged) {
                        panels.set(next_panels);
                    }
                    if interaction.with_untracked(|current| *current != next_interaction) {
                        interaction.set(next_interaction);
                    }
                    if effects.contains(&ResizableEffect::ReleasePointer) {
                        gesture.release();
                    }
                }
                Err(err) => logging::warn!("resizable group error: {err}"),
            }
        });

        Ok(Self {
            orientation,
            panels,
            interaction,
            elements: store_value(Vec::new()),
            gesture,
            dispatch,
        })
    }

    /// Axis the panels are laid out along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Size of a registered panel in percent.
    pub fn size(&self, id: &str) -> Option<f64> {
        self.panels.with(|panels| panels.size(id))
    }

    /// Registered panel sizes in mount order.
    pub fn sizes(&self) -> Vec<(String, f64)> {
        self.panels.with(|panels| {
            panels
                .iter()
                .map(|(id, size)| (id.to_string(), size))
                .collect()
        })
    }

    /// Whether a handle is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.interaction.with(ResizableInteraction::is_dragging)
    }

    fn dispatch_action(&self, action: ResizableAction) {
        self.dispatch.call(action);
    }

    fn mount_panel(&self, id: &str, default_size: Option<f64>, node: NodeRef<html::Div>) {
        self.elements.update_value(|elements| {
            elements.retain(|(known, _)| known != id);
            elements.push((id.to_string(), node));
        });
        self.dispatch_action(ResizableAction::Register {
            id: id.to_string(),
            default_size,
        });
    }

    fn unmount_panel(&self, id: &str) {
        let _ = self.elements.try_update_value(|elements| {
            elements.retain(|(known, _)| known != id);
        });
    }

    fn measure(&self, id: &str) -> Result<TrackRect, MeasureError> {
        self.elements
            .try_with_value(|elements| {
                elements
                    .iter()
                    .find(|(known, _)| known == id)
                    .map(|(_, node)| *node)
            })
            .flatten()
            .and_then(|node| node.get_untracked())
            .map(|element| element_rect(&element))
            .ok_or_else(|| MeasureError::NotMounted(format!("panel {id}")))
    }

    /// Track for a handle: the combined rectangle of the panels either side of it.
    fn measure_pair(&self, before_id: &str, after_id: &str) -> Result<TrackRect, MeasureError> {
        let track = self.measure(before_id)?.union(&self.measure(after_id)?);
        if track.extent(self.orientation) <= 0.0 {
            return Err(MeasureError::ZeroExtent(format!(
                "handle between {before_id} and {after_id}"
            )));
        }
        Ok(track)
    }

    fn begin_drag(&self, before_id: String, after_id: String, track: TrackRect, sample: PointerSample) {
        self.dispatch_action(ResizableAction::BeginDrag {
            before_id,
            after_id,
            orientation: self.orientation,
            track,
            sample,
        });
        if !self.interaction.with_untracked(ResizableInteraction::is_dragging) {
            return;
        }

        let group = *self;
        self.gesture.attach(
            move |ev| {
                group.dispatch_action(ResizableAction::UpdateDrag {
                    sample: pointer_sample(&ev),
                })
            },
            move |ev| {
                group.dispatch_action(ResizableAction::EndDrag {
                    pointer: PointerId(ev.pointer_id()),
                })
            },
            move |_| group.dispatch_action(ResizableAction::CancelDrag),
        );
    }
}

pub(crate) fn flex_style(size: Option<f64>) -> String {
    match size {
        Some(size) => format!("flex:0 0 {size:.2}%;"),
        None => String::new(),
    }
}

#[component]
/// Flex container laying out the panels and handles of a [`ResizableGroup`].
pub fn ResizablePanelGroup(
    group: ResizableGroup,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-resizable", layout_class)
            data-ui-primitive="true"
            data-ui-kind="resizable-group"
            data-ui-orientation=group.orientation().token()
            data-ui-dragging=move || bool_token(group.is_dragging())
        >
            {children()}
        </div>
    }
}

#[component]
/// Panel whose flex basis follows its size in the group.
///
/// Registers with the group on first mount; remounting keeps the dragged size.
pub fn ResizablePanel(
    group: ResizableGroup,
    /// Panel id, unique within the group.
    #[prop(into)]
    id: String,
    /// Initial size in percent; the group policy default applies when omitted.
    #[prop(optional)]
    default_size: Option<f64>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    group.mount_panel(&id, default_size, node);

    let panel_id = store_value(id.clone());
    on_cleanup(move || {
        if let Some(id) = panel_id.try_get_value() {
            group.unmount_panel(&id);
        }
    });

    view! {
        <div
            node_ref=node
            class=merge_layout_class("ui-resizable-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="resizable-panel"
            data-panel-id=id
            style=move || panel_id.with_value(|id| flex_style(group.size(id)))
        >
            {children()}
        </div>
    }
}

#[component]
/// Drag handle moving size between the two named panels.
pub fn ResizableHandle(
    group: ResizableGroup,
    /// Panel before the handle (left or top).
    #[prop(into)]
    before: String,
    /// Panel after the handle (right or bottom).
    #[prop(into)]
    after: String,
    /// Renders a visible grip inside the handle.
    #[prop(optional)]
    with_handle: bool,
) -> impl IntoView {
    let ids = store_value((before, after));

    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || group.interaction.with_untracked(ResizableInteraction::is_dragging)
        {
            return;
        }
        let (before_id, after_id) = ids.get_value();
        let track = match group.measure_pair(&before_id, &after_id) {
            Ok(track) => track,
            Err(err) => {
                logging::warn!("resize drag ignored: {err}");
                return;
            }
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        group.begin_drag(before_id, after_id, track, pointer_sample(&ev));
    };

    let active = move || {
        group.interaction.with(|interaction| {
            interaction.session().is_some_and(|session| {
                ids.with_value(|(before, after)| {
                    &session.snapshot.before_id == before && &session.snapshot.after_id == after
                })
            })
        })
    };

    let separator_orientation = match group.orientation() {
        Orientation::Horizontal => Orientation::Vertical,
        Orientation::Vertical => Orientation::Horizontal,
    };

    view! {
        <div
            role="separator"
            aria-orientation=separator_orientation.token()
            data-ui-primitive="true"
            data-ui-kind="resizable-handle"
            data-ui-orientation=group.orientation().token()
            data-ui-dragging=move || bool_token(active())
            on:pointerdown=begin_drag
        >
            {with_handle.then(|| view! { <div data-ui-slot="grip"></div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flex_style_tracks_size() {
        assert_eq!(flex_style(Some(40.0)), "flex:0 0 40.00%;");
        assert_eq!(flex_style(None), "");
    }

    fn sample(id: i32, x: f64) -> PointerSample {
        PointerSample {
            id: PointerId(id),
            position: xtrix_model::PointerPosition { x, y: 10.0 },
        }
    }

    fn group_with_panels() -> ResizableGroup {
        let group = ResizableGroup::new(Orientation::Horizontal, PanelPolicy::default());
        group.mount_panel("sidebar", Some(30.0), create_node_ref());
        group.mount_panel("content", Some(70.0), create_node_ref());
        group
    }

    fn track() -> TrackRect {
        TrackRect {
            left: 0.0,
            top: 0.0,
            width: 400.0,
            height: 100.0,
        }
    }

    fn total(group: &ResizableGroup) -> f64 {
        group.sizes().iter().map(|(_, size)| size).sum()
    }

    #[test]
    fn mounted_panels_register_in_order() {
        let _ = create_runtime();
        let group = group_with_panels();
        assert_eq!(
            group.sizes(),
            vec![("sidebar".to_string(), 30.0), ("content".to_string(), 70.0)]
        );

        // Remounting keeps the existing size.
        group.mount_panel("sidebar", Some(50.0), create_node_ref());
        assert_eq!(group.size("sidebar"), Some(30.0));
    }

    #[test]
    fn handle_drag_moves_size_through_the_group() {
        let _ = create_runtime();
        let group = group_with_panels();
        group.begin_drag("sidebar".to_string(), "content".to_string(), track(), sample(1, 120.0));
        assert!(group.is_dragging());

        group.dispatch_action(ResizableAction::UpdateDrag { sample: sample(1, 160.0) });
        assert_eq!(group.size("sidebar"), Some(40.0));
        assert_eq!(group.size("content"), Some(60.0));
        assert_eq!(total(&group), 100.0);

        // Clamped at the policy minimum.
        group.dispatch_action(ResizableAction::UpdateDrag { sample: sample(1, 500.0) });
        assert_eq!(group.size("content"), Some(10.0));
        assert_eq!(total(&group), 100.0);

        group.dispatch_action(ResizableAction::EndDrag { pointer: PointerId(2) });
        assert!(group.is_dragging());
        group.dispatch_action(ResizableAction::EndDrag { pointer: PointerId(1) });
        assert!(!group.is_dragging());

        group.dispatch_action(ResizableAction::UpdateDrag { sample: sample(1, 0.0) });
        assert_eq!(group.size("sidebar"), Some(90.0));
    }

    #[test]
    fn reducer_errors_leave_the_group_untouched() {
        let _ = create_runtime();
        let group = group_with_panels();
        let before = group.sizes();
        group.begin_drag("sidebar".to_string(), "footer".to_string(), track(), sample(1, 120.0));
        assert!(!group.is_dragging());
        assert_eq!(group.sizes(), before);

        group.begin_drag("sidebar".to_string(), "content".to_string(), track(), sample(1, 120.0));
        group.dispatch_action(ResizableAction::CancelDrag);
        assert!(!group.is_dragging());
        assert_eq!(group.sizes(), before);
    }

    #[test]
    fn unmounted_panels_cannot_be_measured() {
        let _ = create_runtime();
        let group = group_with_panels();
        assert_eq!(
            group.measure_pair("sidebar", "content"),
            Err(MeasureError::NotMounted("panel sidebar".to_string()))
        );
        group.unmount_panel("sidebar");
        assert_eq!(group.size("sidebar"), Some(30.0));
    }
}
