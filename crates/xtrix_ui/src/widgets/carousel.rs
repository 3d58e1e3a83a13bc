//! Scroll-snapping carousel with previous/next controls.

use leptos::*;
use xtrix_model::{CarouselMetrics, CarouselStep, Orientation};

use super::merge_layout_class;

fn read_metrics(viewport: &web_sys::Element, orientation: Orientation) -> CarouselMetrics {
    match orientation {
        Orientation::Horizontal => CarouselMetrics {
            offset: f64::from(viewport.scroll_left()),
            viewport: f64::from(viewport.client_width()),
            content: f64::from(viewport.scroll_width()),
        },
        Orientation::Vertical => CarouselMetrics {
            offset: f64::from(viewport.scroll_top()),
            viewport: f64::from(viewport.client_height()),
            content: f64::from(viewport.scroll_height()),
        },
    }
}

fn write_offset(viewport: &web_sys::Element, orientation: Orientation, offset: f64) {
    let offset = offset.round() as i32;
    match orientation {
        Orientation::Horizontal => viewport.set_scroll_left(offset),
        Orientation::Vertical => viewport.set_scroll_top(offset),
    }
}

#[component]
/// Scrollable strip of [`CarouselItem`]s paged one viewport at a time.
///
/// Arrow keys along the carousel axis page while it has focus; the controls
/// disable themselves at either end.
pub fn Carousel(
    #[prop(optional)] orientation: Orientation,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let viewport = create_node_ref::<html::Div>();
    let metrics = create_rw_signal(CarouselMetrics::default());

    let refresh = move || {
        if let Some(element) = viewport.get_untracked() {
            metrics.set(read_metrics(&element, orientation));
        }
    };
    // Slides have no layout until the frame after mount.
    viewport.on_load(move |_| request_animation_frame(refresh));
    let resize_listener = window_event_listener(ev::resize, move |_| refresh());
    on_cleanup(move || resize_listener.remove());

    let scroll = move |step: CarouselStep| {
        let Some(element) = viewport.get_untracked() else {
            return;
        };
        let mut current = read_metrics(&element, orientation);
        let offset = current.scroll(step);
        write_offset(&element, orientation, offset);
        metrics.set(current);
    };
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if let Some(step) = CarouselStep::from_key(&ev.key(), orientation) {
            ev.prevent_default();
            scroll(step);
        }
    };

    view! {
        <section
            class=merge_layout_class("ui-carousel", layout_class)
            role="region"
            aria-roledescription="carousel"
            aria-label=aria_label
            tabindex="0"
            data-ui-primitive="true"
            data-ui-kind="carousel"
            data-ui-orientation=orientation.token()
            on:keydown=on_keydown
        >
            <div node_ref=viewport data-ui-slot="viewport" on:scroll=move |_| refresh()>
                <div data-ui-slot="content">{children()}</div>
            </div>
            <button
                type="button"
                data-ui-slot="previous"
                aria-label="Previous slide"
                disabled=move || !metrics.with(CarouselMetrics::can_scroll_prev)
                on:click=move |_| scroll(CarouselStep::Prev)
            >
                "\u{2039}"
            </button>
            <button
                type="button"
                data-ui-slot="next"
                aria-label="Next slide"
                disabled=move || !metrics.with(CarouselMetrics::can_scroll_next)
                on:click=move |_| scroll(CarouselStep::Next)
            >
                "\u{203A}"
            </button>
        </section>
    }
}

#[component]
/// One slide of a [`Carousel`].
pub fn CarouselItem(children: Children) -> impl IntoView {
    view! {
        <div role="group" aria-roledescription="slide" data-ui-slot="item">
            {children()}
        </div>
    }
}
