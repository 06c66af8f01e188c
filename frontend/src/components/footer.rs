//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-grid">
                <div class="footer-item">
                    <h4>"How it works"</h4>
                    <p>"AI analyzes retinal blood vessel patterns to detect cardiovascular risk indicators"</p>
                </div>
                <div class="footer-item">
                    <h4>"Accuracy"</h4>
                    <p>"Our model achieves high accuracy in detecting heart disease risk from retinal images"</p>
                </div>
                <div class="footer-item">
                    <h4>"Important Note"</h4>
                    <p>"This tool is for research purposes only and should not replace professional medical diagnosis"</p>
                </div>
            </div>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
