//! Image upload panel with drag & drop support.
//!
//! Handles file selection and the predict button. All state changes go
//! through [`PredictWorkflow`]; this component only wires DOM events.

use leptos::ev::{DragEvent, MouseEvent};
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{first_file, read_selected_file, request_prediction, HttpTransport, ToastNotifier};
use crate::workflow::PredictWorkflow;

#[component]
pub fn UploadPanel(workflow: RwSignal<PredictWorkflow>, notifier: ToastNotifier) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();

    // Check the media type first, then read and hand over under a ticket
    let accept_file = move |file: File| {
        let name = file.name();
        let media_type = file.type_();
        let Some(Ok(ticket)) =
            workflow.try_update(|w| w.begin_selection(&name, &media_type, &notifier))
        else {
            return;
        };

        spawn_local(async move {
            let outcome = read_selected_file(&file).await;
            workflow.update(|w| {
                w.finish_selection(ticket, outcome, &notifier);
            });
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            accept_file(file);
        }
        // Picking the same file again must fire `change` again
        input.set_value("");
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        workflow.update(PredictWorkflow::drag_enter);
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !workflow.with_untracked(PredictWorkflow::drag_active) {
            workflow.update(PredictWorkflow::drag_over);
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        workflow.update(PredictWorkflow::drag_leave);
    };

    let on_drop = move |ev: DragEvent| {
        // Keep the browser from navigating to the dropped file
        ev.prevent_default();
        ev.stop_propagation();
        workflow.update(PredictWorkflow::drag_drop);

        if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
            accept_file(file);
        }
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_predict = move |_: MouseEvent| {
        let Some(pending) = workflow.try_update(|w| w.begin_predict(&notifier)).flatten() else {
            return;
        };

        spawn_local(async move {
            let transport = HttpTransport::default();
            let outcome = request_prediction(&transport, &pending.file).await;
            workflow.update(|w| {
                w.finish_predict(pending.seq, outcome, &notifier);
            });
        });
    };

    let is_loading = move || workflow.with(PredictWorkflow::is_loading);

    view! {
        <div class="card upload-card">
            <h2 class="card-title">"📤 Upload Retinal Image"</h2>

            <div
                class="drop-zone"
                class:drag-active=move || workflow.with(PredictWorkflow::drag_active)
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_picker
            >
                <input
                    type="file"
                    accept="image/*"
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                />

                {move || {
                    let selection = workflow.with(|w| {
                        w.preview()
                            .map(|p| p.as_data_url().to_string())
                            .zip(w.selected_file().map(|f| f.name.clone()))
                    });
                    match selection {
                        Some((src, name)) => view! {
                            <div class="preview">
                                <img src=src alt="Selected retinal image" class="preview-image"/>
                                <p class="file-name">{name}</p>
                            </div>
                        }
                        .into_view(),
                        None => view! {
                            <div class="upload-prompt">
                                <div class="upload-icon">"🖼️"</div>
                                <div class="upload-text">"Drag and drop your retinal image here"</div>
                                <div class="upload-hint">"or click to browse files"</div>
                            </div>
                        }
                        .into_view(),
                    }
                }}
            </div>

            <button
                class="predict-button"
                disabled=move || !workflow.with(PredictWorkflow::can_predict)
                on:click=on_predict
            >
                {move || if is_loading() {
                    "⏳ Analyzing Image..."
                } else {
                    "❤️ Predict Heart Risk"
                }}
            </button>
        </div>
    }
}
