//! User-facing notifications.
//!
//! The workflow only needs "emit a notification"; [`Notifier`] is that
//! capability. [`ToastNotifier`] backs it with a reactive toast list
//! that the `ToastStack` component renders.

use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};
use crate::types::{Notification, NotificationVariant, Toast};

/// Sink for user-visible notifications.
pub trait Notifier {
    fn emit(&self, notification: Notification);
}

/// Toast queue living in the reactive runtime. Cheap to copy into handlers.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn emit(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Destructive => {
                log::warn!("{}: {}", notification.title, notification.description)
            }
            NotificationVariant::Default => {
                log::info!("{}: {}", notification.title, notification.description)
            }
        }

        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        let toast = Toast {
            id,
            notification,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        };
        self.toasts.update(|toasts| push_bounded(toasts, toast));

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            // The runtime may be gone if the page was torn down.
            let _ = toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }
}

fn push_bounded(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_TOASTS {
        let excess = toasts.len() - MAX_TOASTS;
        toasts.drain(..excess);
    }
}
