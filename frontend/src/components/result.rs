//! Prediction results panel.
//!
//! Three states: processing, a result, or the "no analysis yet"
//! placeholder.

use leptos::*;

use crate::components::ProcessingIndicator;
use crate::types::{PredictionResult, PreviewData};
use crate::workflow::PredictWorkflow;

#[component]
pub fn ResultsPanel(workflow: RwSignal<PredictWorkflow>) -> impl IntoView {
    view! {
        <div class="card results-card">
            <h2 class="card-title">"📋 Prediction Results"</h2>
            {move || {
                let (loading, result, preview) = workflow.with(|w| {
                    (w.is_loading(), w.result().cloned(), w.preview().cloned())
                });

                if loading {
                    view! { <ProcessingIndicator/> }.into_view()
                } else if let Some(result) = result {
                    view! { <ResultCard result=result preview=preview/> }.into_view()
                } else {
                    view! { <EmptyResult/> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ResultCard(result: PredictionResult, preview: Option<PreviewData>) -> impl IntoView {
    let label = result.prediction;
    let bar_style = format!("width: {:.1}%;", result.bar_width());
    let bar_class = format!("confidence-fill {}", result.tier().bar_class());

    view! {
        <div class="result">
            <div class=format!("result-banner {}", label.tone_class())>
                <h3 class="result-label">{label.emoji()} " " {label.as_str()}</h3>
                <p class="result-explanation">{label.explanation()}</p>
            </div>

            <div class="confidence">
                <div class="confidence-header">
                    <span class="confidence-title">"Confidence Score"</span>
                    <span class="confidence-value">{result.confidence_label()}</span>
                </div>
                <div class="confidence-bar">
                    <div class=bar_class style=bar_style></div>
                </div>
                <p class="confidence-hint">"Higher confidence indicates more reliable prediction"</p>
            </div>

            {preview.map(|preview| view! {
                <div class="analyzed-image">
                    <p class="analyzed-caption">"Analyzed Image:"</p>
                    <img src=preview.as_data_url().to_string() alt="Analyzed retinal image"/>
                </div>
            })}
        </div>
    }
}

#[component]
fn EmptyResult() -> impl IntoView {
    view! {
        <div class="result-empty">
            <div class="empty-icon">"🫀"</div>
            <p class="empty-title">"No analysis yet"</p>
            <p class="empty-hint">"Upload an image and click \"Predict\" to see results"</p>
        </div>
    }
}
