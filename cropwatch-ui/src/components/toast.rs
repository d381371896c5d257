//! Toast Notification Component
//!
//! Shows transient error messages, such as a failed prediction request.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="toast-container">
            {move || {
                state.error.get().map(|msg| view! {
                    <div class="toast toast-error">
                        <span class="toast-icon">"✕"</span>
                        <span class="toast-message">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
