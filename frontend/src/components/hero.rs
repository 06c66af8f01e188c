//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-icon">"❤️"</div>
            <h1>"Heart Risk Prediction from Retinal Images"</h1>
            <p class="subtitle">
                "Upload a retinal image to check whether the person is at risk of heart disease "
                "using AI-powered medical analysis."
            </p>
        </div>
    }
}
