//! Browser showcase mounting every xtrix widget.
//!
//! Widget settings come from the bundled `showcase.json`; the app falls back to
//! defaults when the document is rejected.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use leptos::*;
use leptos_meta::*;
use serde::{Deserialize, Serialize};
use xtrix_ui::prelude::*;

const SHOWCASE_CONFIG: &str = include_str!("../showcase.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ShowcaseState {
    slider_value: f64,
    panel_sizes: Vec<(String, f64)>,
    otp_code: Option<String>,
    active_tab: Option<String>,
    rating: usize,
    details_open: bool,
    framework: Option<String>,
    region: Option<String>,
}

fn load_config(raw: &str) -> WidgetConfig {
    match WidgetConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("showcase config rejected, using defaults: {err}");
            WidgetConfig::default()
        }
    }
}

fn trigger(value: &str, label: &'static str) -> DisclosureSlot<ViewFn> {
    DisclosureSlot::Trigger {
        value: value.to_string(),
        body: ViewFn::from(move || label),
    }
}

fn content(value: &str, text: &'static str) -> DisclosureSlot<ViewFn> {
    DisclosureSlot::Content {
        value: value.to_string(),
        body: ViewFn::from(move || view! { <p>{text}</p> }),
    }
}

fn faq_slots() -> Vec<DisclosureSlot<ViewFn>> {
    vec![
        trigger("keyboard", "Can I drive the slider from the keyboard?"),
        content(
            "keyboard",
            "Arrow keys move one step, Page Up/Down ten, Home/End jump to the bounds.",
        ),
        trigger("panels", "What happens at the panel minimum?"),
        content(
            "panels",
            "The handle stops; the remaining drag distance is discarded.",
        ),
        trigger("toasts", "How many notifications stay on screen?"),
        content("toasts", "Five. Adding a sixth evicts the oldest."),
    ]
}

fn framework_options() -> Vec<ListOption> {
    vec![
        ListOption::new("leptos", "Leptos"),
        ListOption::new("yew", "Yew"),
        ListOption::new("dioxus", "Dioxus"),
        ListOption::new("sycamore", "Sycamore"),
    ]
}

fn region_options() -> Vec<ListOption> {
    [
        ("eu-west", "Europe (Ireland)"),
        ("eu-central", "Europe (Frankfurt)"),
        ("us-east", "US East (Virginia)"),
        ("us-west", "US West (Oregon)"),
        ("ap-south", "Asia Pacific (Mumbai)"),
    ]
    .into_iter()
    .map(|(value, label)| ListOption::new(value, label))
    .collect()
}

fn settings_tabs() -> Vec<DisclosureSlot<ViewFn>> {
    vec![
        trigger("account", "Account"),
        trigger("password", "Password"),
        content("account", "Change your display name and avatar."),
        content("password", "Rotate your password after a security event."),
    ]
}

#[component]
/// Showcase page with one section per widget.
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();

    let config = load_config(SHOWCASE_CONFIG);
    let state = create_rw_signal(ShowcaseState::default());

    let volume = SliderHandle::new(config.slider);
    let stepped = SliderHandle::new(config.slider);
    let meter = SliderHandle::new(SliderConfig {
        default_value: 64.0,
        ..config.slider
    });
    let panels = ResizableGroup::new(Orientation::Horizontal, config.panels);
    let sonner = SonnerHandle::new(config.toaster);
    let otp = OtpHandle::new("showcase-otp", config.otp);
    let dialog = OverlayHandle::dialog("showcase-dialog");
    let sheet = OverlayHandle::sheet("showcase-sheet");
    let drawer = OverlayHandle::drawer("showcase-drawer");
    let framework = SelectHandle::new("showcase-framework", framework_options(), Some("leptos"));
    let region = ComboboxHandle::new("showcase-region", region_options());

    create_effect(move |_| {
        let slider_value = volume.value();
        let panel_sizes = panels.sizes();
        state.update(|value| {
            value.slider_value = slider_value;
            value.panel_sizes = panel_sizes;
        });
    });

    let snapshot = move || {
        state.with(|value| serde_json::to_string_pretty(value)).unwrap_or_else(|err| {
            logging::warn!("showcase serialize failed: {err}");
            String::new()
        })
    };

    let otp_split = otp.len() / 2;
    let otp_slots = move |cells: std::ops::Range<usize>| {
        cells
            .map(|index| view! { <InputOtpSlot handle=otp index=index /> })
            .collect_view()
    };

    let notify = move |variant: NotificationVariant, message: &'static str| {
        sonner.add_notification(message, NotificationOptions::default().with_variant(variant));
    };

    view! {
        <Title text="xtrix widgets" />
        <main class="showcase-root" data-ui-kind="showcase">
            <section data-ui-slot="section">
                <h2>"Slider"</h2>
                <Slider handle=volume aria_label="Volume" />
                <Slider handle=stepped variant=SliderVariant::Stepped aria_label="Stepped" />
                <Slider handle=meter variant=SliderVariant::NoThumb aria_label="Meter" />
                <p>{move || format!("Volume: {}", volume.value())}</p>
            </section>

            <section data-ui-slot="section">
                <h2>"Resizable"</h2>
                <ResizablePanelGroup group=panels>
                    <ResizablePanel group=panels id="sidebar" default_size=30.0>
                        <p>"Sidebar"</p>
                    </ResizablePanel>
                    <ResizableHandle group=panels before="sidebar" after="content" with_handle=true />
                    <ResizablePanel group=panels id="content" default_size=70.0>
                        <p>"Content"</p>
                    </ResizablePanel>
                </ResizablePanelGroup>
            </section>

            <section data-ui-slot="section">
                <h2>"Sonner"</h2>
                <button type="button" on:click=move |_| notify(NotificationVariant::Default, "Event has been created")>
                    "Default"
                </button>
                <button type="button" on:click=move |_| notify(NotificationVariant::Success, "Profile saved")>
                    "Success"
                </button>
                <button type="button" on:click=move |_| notify(NotificationVariant::Error, "Upload failed")>
                    "Error"
                </button>
                <button
                    type="button"
                    on:click=move |_| {
                        sonner.add_notification(
                            "Pinned until dismissed",
                            NotificationOptions::default()
                                .with_variant(NotificationVariant::Warning)
                                .with_position(NotificationPosition::TopRight)
                                .with_duration(Duration::from_secs(60)),
                        );
                    }
                >
                    "Warning"
                </button>
                <button type="button" on:click=move |_| sonner.clear()>"Clear"</button>
                <Toaster handle=sonner />
            </section>

            <section data-ui-slot="section">
                <h2>"Input OTP"</h2>
                <InputOtp
                    handle=otp
                    on_complete=Callback::new(move |code: String| {
                        state.update(|value| value.otp_code = Some(code));
                    })
                >
                    <InputOtpGroup>{otp_slots(0..otp_split)}</InputOtpGroup>
                    <InputOtpSeparator variant=OtpSeparator::Dash />
                    <InputOtpGroup>{otp_slots(otp_split..otp.len())}</InputOtpGroup>
                </InputOtp>
                <button type="button" on:click=move |_| otp.reset()>"Reset"</button>
            </section>

            <section data-ui-slot="section">
                <h2>"Disclosure"</h2>
                <Accordion slots=faq_slots() default_value="keyboard" />
                <Collapsible
                    trigger=|| "Show details"
                    on_open_change=Callback::new(move |open: bool| {
                        state.update(|value| value.details_open = open);
                    })
                >
                    <p>"Collapsible content stays mounted only while open."</p>
                </Collapsible>
                <Tabs
                    id="settings"
                    slots=settings_tabs()
                    default_value="account"
                    on_value_change=Callback::new(move |tab: String| {
                        state.update(|value| value.active_tab = Some(tab));
                    })
                />
            </section>

            <section data-ui-slot="section">
                <h2>"Carousel"</h2>
                <Carousel aria_label="Gallery">
                    {(1..=5)
                        .map(|index| view! { <CarouselItem>{format!("Slide {index}")}</CarouselItem> })
                        .collect_view()}
                </Carousel>
            </section>

            <section data-ui-slot="section">
                <h2>"Overlays"</h2>
                <OverlayTrigger handle=dialog>"Delete project"</OverlayTrigger>
                <OverlayContent handle=dialog title="Delete project?">
                    <p>"This cannot be undone."</p>
                    <OverlayClose handle=dialog>"Cancel"</OverlayClose>
                </OverlayContent>
                <OverlayTrigger handle=sheet>"Edit profile"</OverlayTrigger>
                <OverlayContent handle=sheet title="Edit profile">
                    <p>"Changes apply when you close the sheet."</p>
                </OverlayContent>
                <OverlayTrigger handle=drawer>"Filters"</OverlayTrigger>
                <OverlayContent handle=drawer title="Filters" side=OverlaySide::Bottom>
                    <p>"Tap outside the drawer to close it."</p>
                </OverlayContent>
            </section>

            <section data-ui-slot="section">
                <h2>"Select and combobox"</h2>
                <Select
                    handle=framework
                    placeholder="Pick a framework"
                    on_value_change=Callback::new(move |value: String| {
                        state.update(|current| current.framework = Some(value));
                    })
                />
                <Combobox
                    handle=region
                    placeholder="Search regions"
                    on_value_change=Callback::new(move |value: String| {
                        state.update(|current| current.region = Some(value));
                    })
                />
            </section>

            <section data-ui-slot="section">
                <h2>"Progress and rating"</h2>
                <Progress value=Signal::derive(move || meter.value()) show_label=true aria_label="Meter" />
                <Rating
                    default_value=3
                    on_value_change=Callback::new(move |rating: usize| {
                        state.update(|value| value.rating = rating);
                    })
                />
                <Rating default_value=4 showcase=true />
            </section>

            <section data-ui-slot="section">
                <h2>"State"</h2>
                <pre data-ui-slot="snapshot">{snapshot}</pre>
            </section>
        </main>
    }
}

/// Mounts the showcase into `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use xtrix_model::NotificationPosition;

    use super::*;

    #[test]
    fn bundled_config_is_valid() {
        let config = WidgetConfig::from_json(SHOWCASE_CONFIG).expect("bundled config");
        assert_eq!(config.slider.step, 10.0);
        assert_eq!(config.panels.min_size, 15.0);
        assert_eq!(config.toaster.default_duration, Some(Duration::from_millis(4000)));
        assert_eq!(config.toaster.default_position, NotificationPosition::BottomRight);
    }

    #[test]
    fn rejected_config_falls_back_to_defaults() {
        assert_eq!(load_config(r#"{ "otp": { "length": 0 } }"#), WidgetConfig::default());
        assert_eq!(load_config("not json"), WidgetConfig::default());
    }

    #[test]
    fn tabs_declare_one_trigger_per_panel() {
        let slots = settings_tabs();
        let triggers: Vec<&str> = slots
            .iter()
            .filter(|slot| matches!(slot, DisclosureSlot::Trigger { .. }))
            .map(DisclosureSlot::value)
            .collect();
        let panels: Vec<&str> = slots
            .iter()
            .filter(|slot| matches!(slot, DisclosureSlot::Content { .. }))
            .map(DisclosureSlot::value)
            .collect();
        assert_eq!(triggers, panels);
    }

    #[test]
    fn list_options_have_unique_values() {
        for options in [framework_options(), region_options()] {
            let mut values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();
            let total = values.len();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), total);
        }
    }
}
