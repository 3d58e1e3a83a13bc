//! Progress bar and star rating.

use leptos::*;
use xtrix_model::{ProgressModel, RatingState, DEFAULT_STAR_COUNT};

use super::{bool_token, merge_layout_class, percent_style};

#[component]
/// Horizontal progress bar with an optional percent label.
///
/// # Panics
///
/// Panics at mount when `max` is not positive.
pub fn Progress(
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(optional)] max: Option<f64>,
    #[prop(optional)] show_label: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let max = max.unwrap_or(100.0);
    let base = ProgressModel::new(0.0, max)
        .unwrap_or_else(|err| panic!("invalid progress config: {err}"));
    let model = Signal::derive(move || {
        let mut model = base;
        model.set_value(value.get());
        model
    });

    view! {
        <div
            class=merge_layout_class("ui-progress", layout_class)
            role="progressbar"
            aria-label=aria_label
            aria-valuemin="0"
            aria-valuemax=max
            aria-valuenow=move || model.get().value()
            data-ui-primitive="true"
            data-ui-kind="progress"
            data-ui-percent=move || format!("{:.2}", model.get().percent())
        >
            <div
                data-ui-slot="indicator"
                style=move || percent_style("width", model.get().percent())
            ></div>
            {show_label.then(|| view! {
                <span data-ui-slot="label">{move || model.get().label()}</span>
            })}
        </div>
    }
}

#[component]
/// Star rating; hovering a star fills up to it unless the rating is disabled or a showcase.
pub fn Rating(
    #[prop(optional)] default_value: usize,
    #[prop(optional)] star_count: Option<usize>,
    #[prop(optional)] disabled: bool,
    /// Renders a fixed value that ignores hover.
    #[prop(optional)]
    showcase: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_value_change: Option<Callback<usize>>,
) -> impl IntoView {
    let star_count = star_count.unwrap_or(DEFAULT_STAR_COUNT);
    let state = create_rw_signal(
        RatingState::new(default_value, star_count)
            .disabled(disabled)
            .showcase(showcase),
    );
    let hover = move |index: usize| {
        let changed = state.try_update(|state| state.hover(index)).unwrap_or(false);
        if changed {
            if let Some(on_value_change) = on_value_change {
                on_value_change.call(state.with_untracked(RatingState::value));
            }
        }
    };

    let stars = (0..star_count)
        .map(|index| {
            let filled = move || state.with(|state| state.is_filled(index));
            view! {
                <span
                    data-ui-slot="star"
                    data-ui-index=index
                    data-ui-filled=move || bool_token(filled())
                    aria-hidden="true"
                    on:mouseenter=move |_| hover(index)
                >
                    {move || if filled() { "\u{2605}" } else { "\u{2606}" }}
                </span>
            }
        })
        .collect_view();

    let variant = if showcase { "showcase" } else { "interactive" };

    view! {
        <div
            class=merge_layout_class("ui-rating", layout_class)
            role="img"
            aria-label=move || format!("{} of {} stars", state.with(RatingState::value), star_count)
            data-ui-primitive="true"
            data-ui-kind="rating"
            data-ui-disabled=bool_token(disabled)
            data-ui-variant=variant
        >
            {stars}
        </div>
    }
}
