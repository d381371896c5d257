//! App Root Component
//!
//! Main application component with routing, global providers and the fault
//! boundary around the routed content.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{FaultBoundary, Toast};
use crate::pages::Dashboard;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    web_sys::console::log_1(&format!("Cropwatch service: {}", api::get_api_base()).into());

    view! {
        <Router>
            <main class="app">
                <FaultBoundary>
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </FaultBoundary>

                // Toast notifications
                <Toast />
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Go to Dashboard"</A>
        </div>
    }
}
