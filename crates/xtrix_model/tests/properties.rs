//! Property tests for the drag-to-value core and the notification queue.
//!
//! 1. Slider values stay within bounds and on the step grid
//! 2. Quantization is idempotent
//! 3. Percentage maps the bounds to 0 and 100
//! 4. Panel resizes conserve the pair's sum and respect size bounds
//! 5. The notification queue retains only the newest entries

use proptest::prelude::*;
use xtrix_model::{
    NotificationId, NotificationOptions, NotificationQueue, OtpConfig, OtpState, PanelAllocation,
    PanelPolicy, SliderConfig, SliderState, ValueRange,
};

const TOLERANCE: f64 = 1e-6;

// ── Strategies ──────────────────────────────────────────────────────────

fn range_strategy() -> impl Strategy<Value = ValueRange> {
    (-1000.0f64..1000.0, 0.5f64..1000.0, 0.01f64..1.0).prop_map(|(min, width, step_frac)| {
        let step = (width * step_frac).max(0.01);
        ValueRange::new(min, min + width, step).expect("strategy yields valid ranges")
    })
}

fn policy_strategy() -> impl Strategy<Value = PanelPolicy> {
    (0.0f64..30.0, 50.0f64..=100.0).prop_map(|(min_size, max_size)| PanelPolicy {
        min_size,
        max_size,
        default_size: 50.0,
    })
}

// ═══════════════════════════════════════════════════════════════════════
// 1-3. Value model
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn quantized_values_stay_in_bounds(range in range_strategy(), raw in -1e6f64..1e6) {
        let value = range.quantize(raw);
        prop_assert!(value >= range.min());
        prop_assert!(value <= range.max());
    }

    #[test]
    fn quantized_values_sit_on_the_step_grid(range in range_strategy(), raw in -1e6f64..1e6) {
        let value = range.quantize(raw);
        let steps = (value - range.min()) / range.step();
        prop_assert!(
            (steps - steps.round()).abs() < TOLERANCE || value == range.max(),
            "value {} is off grid for {:?}",
            value,
            range
        );
    }

    #[test]
    fn quantize_is_idempotent(range in range_strategy(), raw in -1e6f64..1e6) {
        let once = range.quantize(raw);
        prop_assert_eq!(range.quantize(once), once);
    }

    #[test]
    fn percentage_maps_bounds_to_ends(range in range_strategy()) {
        prop_assert_eq!(range.percentage(range.min()), 0.0);
        prop_assert_eq!(range.percentage(range.max()), 100.0);
    }

    #[test]
    fn slider_ratio_updates_stay_in_bounds(range in range_strategy(), ratios in prop::collection::vec(-0.5f64..1.5, 1..20)) {
        let mut slider = SliderState::with_range(range, range.min());
        for ratio in ratios {
            let value = slider.set_ratio(ratio);
            prop_assert!(value >= range.min() && value <= range.max());
            let percent = slider.percentage();
            prop_assert!((-TOLERANCE..=100.0 + TOLERANCE).contains(&percent));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Panel allocation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resize_sequences_conserve_pair_sum(
        policy in policy_strategy(),
        start in 30.0f64..70.0,
        deltas in prop::collection::vec(-150.0f64..150.0, 1..30),
    ) {
        let mut panels = PanelAllocation::new(policy).expect("strategy yields valid policies");
        panels.register("left", Some(start));
        panels.register("right", Some(100.0 - start));
        let total = panels.pair("left", "right").expect("both registered").total();

        for delta in deltas {
            let pair = panels.resize("left", "right", delta).expect("known panels");
            prop_assert!((pair.total() - total).abs() < TOLERANCE);
            for size in [pair.before, pair.after] {
                prop_assert!(size >= policy.min_size - TOLERANCE);
                prop_assert!(size <= policy.max_size + TOLERANCE);
            }
        }
    }

    #[test]
    fn resize_never_touches_other_panels(delta in -100.0f64..100.0) {
        let mut panels = PanelAllocation::new(PanelPolicy::default()).expect("default policy");
        panels.register("a", Some(20.0));
        panels.register("b", Some(30.0));
        panels.register("c", Some(50.0));
        panels.resize("a", "b", delta).expect("known panels");
        prop_assert_eq!(panels.size("c"), Some(50.0));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Notification queue
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn queue_keeps_only_the_newest_five(count in 6u64..60) {
        let mut queue = NotificationQueue::default();
        let mut evicted = Vec::new();
        for index in 0..count {
            let added = queue.add(format!("message {index}"), NotificationOptions::default());
            evicted.extend(added.evicted);
        }
        let retained: Vec<NotificationId> = queue.iter().map(|entry| entry.id).collect();
        let expected: Vec<NotificationId> = (count - 4..=count).map(NotificationId).collect();
        prop_assert_eq!(retained, expected);
        prop_assert_eq!(evicted.len() as u64, count - 5);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Reference scenarios
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn tens_slider_mounts_default_25_at_30() {
    let slider = SliderState::new(&SliderConfig {
        default_value: 25.0,
        min: 0.0,
        max: 100.0,
        step: 10.0,
    })
    .expect("valid slider");
    assert_eq!(slider.value(), 30.0);
}

#[test]
fn even_split_moved_by_minus_ten() {
    let mut panels = PanelAllocation::new(PanelPolicy::default()).expect("default policy");
    panels.register("left", Some(50.0));
    panels.register("right", Some(50.0));
    let pair = panels.resize("left", "right", -10.0).expect("known panels");
    assert_eq!((pair.before, pair.after), (40.0, 60.0));
}

#[test]
fn otp_typing_one_then_two() {
    let mut otp = OtpState::new(&OtpConfig { length: 6 }).expect("valid otp");
    otp.input(0, "1");
    otp.input(1, "2");
    assert_eq!(otp.cell(0), Some('1'));
    assert_eq!(otp.cell(1), Some('2'));
    assert_eq!(otp.focus(), 2);
}
