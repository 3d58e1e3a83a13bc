//! Stacked notifications with per-entry auto-dismiss timers.

use std::collections::HashMap;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use xtrix_model::{
    ConfigError, Notification, NotificationId, NotificationOptions, NotificationPosition,
    NotificationQueue, StackSlot, ToasterConfig,
};

use super::merge_layout_class;

#[derive(Clone, Copy)]
/// Owner-side handle for a notification stack.
///
/// Timers are fire-once and are cancelled when their notification is
/// dismissed, evicted by a newer one, or the owner is torn down.
pub struct SonnerHandle {
    queue: RwSignal<NotificationQueue>,
    timers: StoredValue<HashMap<NotificationId, TimeoutHandle>>,
}

impl SonnerHandle {
    /// Creates an empty stack in the current reactive owner.
    ///
    /// # Panics
    ///
    /// Panics when `config.max_visible` is zero.
    pub fn new(config: ToasterConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|err| panic!("invalid toaster config: {err}"))
    }

    /// Fallible form of [`SonnerHandle::new`].
    pub fn try_new(config: ToasterConfig) -> Result<Self, ConfigError> {
        let handle = Self {
            queue: create_rw_signal(NotificationQueue::new(&config)?),
            timers: store_value(HashMap::new()),
        };
        on_cleanup(move || handle.clear_timers());
        Ok(handle)
    }

    /// Queues a notification and returns its id.
    ///
    /// Entries beyond the cap are evicted oldest first and their timers cancelled.
    pub fn add_notification(
        &self,
        message: impl Into<String>,
        options: NotificationOptions,
    ) -> NotificationId {
        let mut queue = self.queue.get_untracked();
        let added = queue.add(message, options);
        let duration = queue.get(added.id).and_then(|entry| entry.duration);
        self.queue.set(queue);

        for evicted in &added.evicted {
            self.cancel_timer(*evicted);
        }
        if let Some(duration) = duration {
            self.schedule_expiry(added.id, duration);
        }
        added.id
    }

    /// Dismisses a notification; returns whether it was still shown.
    pub fn remove_notification(&self, id: NotificationId) -> bool {
        self.cancel_timer(id);
        self.queue
            .try_update(|queue| queue.remove(id))
            .unwrap_or(false)
    }

    /// Dismisses every notification.
    pub fn clear(&self) {
        self.clear_timers();
        self.queue.update(|queue| {
            queue.clear();
        });
    }

    /// Visible notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.queue.with(|queue| queue.iter().cloned().collect())
    }

    fn stack(&self, position: NotificationPosition) -> Vec<(StackSlot, Notification)> {
        self.queue.with(|queue| {
            queue
                .stack(position)
                .into_iter()
                .map(|(slot, entry)| (slot, entry.clone()))
                .collect()
        })
    }

    fn schedule_expiry(&self, id: NotificationId, duration: std::time::Duration) {
        let handle = *self;
        let scheduled = set_timeout_with_handle(
            move || {
                let _ = handle.timers.try_update_value(|timers| timers.remove(&id));
                let _ = handle.queue.try_update(|queue| queue.expire(id));
            },
            duration,
        );
        match scheduled {
            Ok(timer) => self.timers.update_value(|timers| {
                timers.insert(id, timer);
            }),
            Err(err) => logging::warn!("failed to schedule notification expiry: {err:?}"),
        }
    }

    fn cancel_timer(&self, id: NotificationId) {
        if let Some(Some(timer)) = self.timers.try_update_value(|timers| timers.remove(&id)) {
            timer.clear();
        }
    }

    fn clear_timers(&self) {
        let Some(timers) = self.timers.try_update_value(std::mem::take) else {
            return;
        };
        for timer in timers.into_values() {
            timer.clear();
        }
    }
}

#[component]
/// Renders a [`SonnerHandle`]'s notifications, one stack per anchor position.
///
/// Clicking a notification or its close button dismisses it.
pub fn Toaster(
    handle: SonnerHandle,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    NotificationPosition::ALL
        .into_iter()
        .map(|position| {
            let entries = move || handle.stack(position);
            view! {
                <Show when=move || !entries().is_empty() fallback=|| ()>
                    <ol
                        class=merge_layout_class("ui-toaster", layout_class)
                        data-ui-primitive="true"
                        data-ui-kind="toaster"
                        data-ui-position=position.token()
                        aria-live="polite"
                    >
                        <For
                            each=entries
                            key=|(slot, entry)| (entry.id, slot.index)
                            children=move |(slot, entry)| {
                                let id = entry.id;
                                view! {
                                    <li
                                        id=id.dom_id()
                                        role="status"
                                        data-ui-kind="notification"
                                        data-ui-variant=entry.variant.token()
                                        data-ui-stack-index=slot.index
                                        style=slot.style()
                                        on:click=move |_| {
                                            handle.remove_notification(id);
                                        }
                                    >
                                        <span data-ui-slot="message">{entry.message}</span>
                                        <button
                                            type="button"
                                            data-ui-slot="close"
                                            aria-label="Dismiss notification"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                handle.remove_notification(id);
                                            }
                                        >
                                            "\u{00D7}"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ol>
                </Show>
            }
        })
        .collect_view()
}
