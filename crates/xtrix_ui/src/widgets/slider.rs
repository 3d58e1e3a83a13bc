//! Single-thumb slider driven by pointer drags over the track and arrow keys on the thumb.

use leptos::*;
use serde::{Deserialize, Serialize};
use xtrix_model::{
    ConfigError, Orientation, PointerId, PointerSample, PointerTracker, SliderConfig, SliderKey,
    SliderState, TrackRect, ValueRange,
};

use super::{bool_token, merge_layout_class, percent_style};
use crate::dom::{
    element_rect, is_primary_press, pointer_sample, try_set_pointer_capture, MeasureError,
};
use crate::gesture::WindowGesture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Slider presentation variants.
pub enum SliderVariant {
    /// Track, fill, and thumb.
    #[default]
    Default,
    /// Track and fill only.
    NoThumb,
    /// Thumb plus one tick mark per reachable step.
    Stepped,
}

impl SliderVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NoThumb => "no-thumb",
            Self::Stepped => "stepped",
        }
    }
}

#[derive(Clone, Copy)]
/// Owner-side handle for a slider's value and drag state.
///
/// Create it in the component that owns the value and pass it to [`Slider`];
/// reads through the handle are reactive.
pub struct SliderHandle {
    state: RwSignal<SliderState>,
    tracker: RwSignal<PointerTracker<()>>,
}

impl SliderHandle {
    /// Creates the slider state in the current reactive owner.
    ///
    /// # Panics
    ///
    /// Panics when `config` describes an empty range or a non-positive step.
    pub fn new(config: SliderConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|err| panic!("invalid slider config: {err}"))
    }

    /// Fallible form of [`SliderHandle::new`].
    pub fn try_new(config: SliderConfig) -> Result<Self, ConfigError> {
        let state = SliderState::new(&config)?;
        Ok(Self {
            state: create_rw_signal(state),
            tracker: create_rw_signal(PointerTracker::default()),
        })
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.state.with(SliderState::value)
    }

    /// Current value on `0..=100`.
    pub fn percentage(&self) -> f64 {
        self.state.with(SliderState::percentage)
    }

    /// Range the value is constrained to.
    pub fn range(&self) -> ValueRange {
        self.state.with_untracked(SliderState::range)
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.tracker.with(PointerTracker::is_dragging)
    }

    /// Sets the value programmatically, with the same clamping and quantization as a drag.
    pub fn set_value(&self, raw: f64) {
        self.apply(|state| state.set_value(raw));
    }

    fn apply(&self, f: impl FnOnce(&mut SliderState) -> f64) -> Option<f64> {
        let before = self.state.with_untracked(SliderState::value);
        let after = self.state.try_update(f)?;
        (after != before).then_some(after)
    }

    fn begin_drag(
        &self,
        sample: PointerSample,
        track: TrackRect,
    ) -> Result<Option<f64>, MeasureError> {
        if track.extent(Orientation::Horizontal) <= 0.0 {
            return Err(MeasureError::ZeroExtent("slider track".to_string()));
        }
        let update = self
            .tracker
            .try_update(|tracker| tracker.begin(sample, Orientation::Horizontal, track, ()))
            .flatten();
        Ok(update.and_then(|update| self.apply(|state| state.set_ratio(update.ratio))))
    }

    fn drag_to(&self, sample: PointerSample) -> Option<f64> {
        let update = self
            .tracker
            .with_untracked(|tracker| tracker.update(sample))?;
        self.apply(|state| state.set_ratio(update.ratio))
    }

    fn end_drag(&self, pointer: PointerId) -> bool {
        self.tracker
            .try_update(|tracker| tracker.end(pointer).is_some())
            .unwrap_or(false)
    }

    fn cancel_drag(&self) {
        self.tracker.update(|tracker| {
            tracker.release();
        });
    }

    fn apply_key(&self, key: SliderKey) -> Option<f64> {
        self.apply(|state| state.apply_key(key))
    }
}

#[component]
/// Slider bound to a [`SliderHandle`].
///
/// Pressing the track jumps the value under the pointer and starts a drag;
/// move/up/cancel are tracked on the window until the drag ends. Arrow, page,
/// and home/end keys step the value while the thumb has focus.
pub fn Slider(
    handle: SliderHandle,
    #[prop(optional)] variant: SliderVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Called with the new value whenever drag or keyboard input changes it.
    #[prop(optional)]
    on_value_change: Option<Callback<f64>>,
) -> impl IntoView {
    let track = create_node_ref::<html::Div>();
    let gesture = WindowGesture::new();
    let range = handle.range();

    let notify = move |changed: Option<f64>| {
        if let (Some(value), Some(on_value_change)) = (changed, on_value_change) {
            on_value_change.call(value);
        }
    };
    let on_move = move |ev: web_sys::PointerEvent| notify(handle.drag_to(pointer_sample(&ev)));
    let on_up = move |ev: web_sys::PointerEvent| {
        if handle.end_drag(PointerId(ev.pointer_id())) {
            gesture.release();
        }
    };
    let on_cancel = move |_: web_sys::PointerEvent| {
        handle.cancel_drag();
        gesture.release();
    };

    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || handle.tracker.with_untracked(PointerTracker::is_dragging) {
            return;
        }
        let Some(track_el) = track.get_untracked() else {
            logging::warn!(
                "slider drag ignored: {}",
                MeasureError::NotMounted("slider track".to_string())
            );
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        match handle.begin_drag(pointer_sample(&ev), element_rect(&track_el)) {
            Ok(changed) => {
                gesture.attach(on_move, on_up, on_cancel);
                notify(changed);
            }
            Err(err) => logging::warn!("slider drag ignored: {err}"),
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(key) = SliderKey::from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        notify(handle.apply_key(key));
    };

    let marks = (variant == SliderVariant::Stepped).then(|| {
        range
            .step_marks()
            .into_iter()
            .map(|mark| {
                view! {
                    <span
                        data-ui-slot="mark"
                        data-ui-value=mark.value
                        data-ui-active=move || bool_token(handle.value() >= mark.value)
                        style=percent_style("left", mark.percent)
                    ></span>
                }
            })
            .collect_view()
    });

    let thumb = (variant != SliderVariant::NoThumb).then(|| {
        view! {
            <div
                data-ui-slot="thumb"
                role="slider"
                tabindex="0"
                aria-label=aria_label
                aria-valuemin=range.min()
                aria-valuemax=range.max()
                aria-valuenow=move || handle.value()
                style=move || percent_style("left", handle.percentage())
                on:keydown=on_keydown
            ></div>
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-slider", layout_class)
            data-ui-primitive="true"
            data-ui-kind="slider"
            data-ui-variant=variant.token()
            data-ui-value=move || handle.value()
            data-ui-dragging=move || bool_token(handle.is_dragging())
        >
            <div node_ref=track data-ui-slot="track" on:pointerdown=begin_drag>
                <div
                    data-ui-slot="fill"
                    style=move || percent_style("width", handle.percentage())
                ></div>
                {marks}
                {thumb}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn variant_tokens_match_dom_contract() {
        assert_eq!(SliderVariant::Default.token(), "default");
        assert_eq!(SliderVariant::NoThumb.token(), "no-thumb");
        assert_eq!(SliderVariant::Stepped.token(), "stepped");
    }

    #[test]
    fn variant_deserializes_from_token() {
        let variant: SliderVariant = serde_json::from_str("\"no-thumb\"").unwrap();
        assert_eq!(variant, SliderVariant::NoThumb);
    }

    fn press(id: i32, x: f64) -> PointerSample {
        PointerSample {
            id: PointerId(id),
            position: xtrix_model::PointerPosition { x, y: 4.0 },
        }
    }

    fn track(width: f64) -> TrackRect {
        TrackRect {
            left: 0.0,
            top: 0.0,
            width,
            height: 8.0,
        }
    }

    #[test]
    fn drag_jumps_then_follows_the_pointer() {
        let _ = create_runtime();
        let handle = SliderHandle::new(SliderConfig::default());
        assert_eq!(handle.value(), 25.0);

        assert_eq!(handle.begin_drag(press(1, 100.0), track(200.0)), Ok(Some(50.0)));
        assert!(handle.is_dragging());
        assert_eq!(handle.drag_to(press(1, 150.0)), Some(75.0));
        assert_eq!(handle.drag_to(press(1, 150.4)), None);
        assert_eq!(handle.drag_to(press(1, 900.0)), Some(100.0));

        assert!(handle.end_drag(PointerId(1)));
        assert!(!handle.is_dragging());
        assert_eq!(handle.drag_to(press(1, 0.0)), None);
        assert_eq!(handle.value(), 100.0);
    }

    #[test]
    fn second_pointer_cannot_steal_the_drag() {
        let _ = create_runtime();
        let handle = SliderHandle::new(SliderConfig::default());
        handle.begin_drag(press(1, 100.0), track(200.0)).unwrap();

        assert_eq!(handle.begin_drag(press(2, 0.0), track(200.0)), Ok(None));
        assert_eq!(handle.drag_to(press(2, 20.0)), None);
        assert!(!handle.end_drag(PointerId(2)));
        assert!(handle.is_dragging());
        assert_eq!(handle.value(), 50.0);

        handle.cancel_drag();
        assert!(!handle.is_dragging());
    }

    #[test]
    fn collapsed_track_refuses_to_start() {
        let _ = create_runtime();
        let handle = SliderHandle::new(SliderConfig::default());
        assert_eq!(
            handle.begin_drag(press(1, 0.0), track(0.0)),
            Err(MeasureError::ZeroExtent("slider track".to_string()))
        );
        assert!(!handle.is_dragging());
        assert_eq!(handle.value(), 25.0);
    }

    #[test]
    fn keys_and_programmatic_values_share_quantization() {
        let _ = create_runtime();
        let handle = SliderHandle::new(SliderConfig {
            step: 10.0,
            default_value: 40.0,
            ..SliderConfig::default()
        });
        assert_eq!(handle.apply_key(SliderKey::Increment), Some(50.0));
        assert_eq!(handle.apply_key(SliderKey::End), Some(100.0));
        assert_eq!(handle.apply_key(SliderKey::Increment), None);
        handle.set_value(33.0);
        assert_eq!(handle.value(), 30.0);
        assert_eq!(handle.percentage(), 30.0);
    }
}
