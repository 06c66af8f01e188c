//! Toast stack rendering the notifications emitted by the workflow.

use leptos::*;

use crate::services::ToastNotifier;

#[component]
pub fn ToastStack(notifier: ToastNotifier) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || notifier.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.notification.variant.css_class())>
                            <div class="toast-body">
                                <span class="toast-time">"[" {toast.timestamp} "] "</span>
                                <strong class="toast-title">{toast.notification.title}</strong>
                                <p class="toast-description">{toast.notification.description}</p>
                            </div>
                            <button
                                class="toast-dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
