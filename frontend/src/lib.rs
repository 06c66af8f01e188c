//! Retina Risk - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a retinal image to a prediction
//! service and displays the heart risk label and confidence it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │  UploadPanel                 │  ResultsPanel                │
//! │  (drop zone, predict button) │  (spinner / result / empty)  │
//! ├──────────────────────────────┴──────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//!            ToastStack (overlay, fed by ToastNotifier)
//! ```
//!
//! Both panels share one `RwSignal<PredictWorkflow>`.
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, PredictionResult, etc.)
//! - [`error`] - Error taxonomy
//! - [`workflow`] - Upload-and-predict state machine
//! - [`components`] - UI components
//! - [`services`] - Browser collaborators (HTTP, file reading, toasts)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod workflow;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{AppError, AppResult};

// Types
pub use types::{
    // Files
    SelectedFile, PreviewData,
    // Prediction
    PredictionResult, RiskLabel, ConfidenceTier,
    // API
    PredictResponse,
    // Notifications
    Notification, NotificationVariant, Toast,
};

// Workflow
pub use workflow::{PendingPrediction, PredictWorkflow};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and console logging, then mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Retina Risk - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Heart Risk Prediction"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Page-wide state
    let workflow = create_rw_signal(PredictWorkflow::new());
    let notifier = ToastNotifier::new();

    view! {
        <div class="container">
            <Hero/>

            <div class="panels">
                <UploadPanel workflow=workflow notifier=notifier/>
                <ResultsPanel workflow=workflow/>
            </div>
        </div>

        <Footer/>
        <ToastStack notifier=notifier/>
    }
}
