use leptos::*;

/// Indeterminate spinner shown while a prediction is outstanding.
#[component]
pub fn ProcessingIndicator() -> impl IntoView {
    view! {
        <div class="processing">
            <div class="spinner"></div>
            <p class="processing-text">"Processing your image..."</p>
            <p class="processing-hint">"This may take a few moments"</p>
        </div>
    }
}
