//! Age Gate Component
//!
//! Blocking confirmation overlay shown once per session until dismissed.

use leptos::prelude::*;

/// Full-screen age verification overlay
///
/// # Arguments
/// * `on_confirm` - Callback run when the user confirms their age
#[component]
pub fn AgeGate(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="age-verification-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"AGE VERIFICATION REQUIRED"</h2>
                </div>
                <div class="modal-body">
                    <p>
                        "🚨 This website contains alcohol-related content. "
                        "You must be at least 21 years old to enter."
                    </p>
                </div>
                <div class="modal-footer">
                    <button class="enter-button" on:click=move |_| on_confirm.run(())>
                        "ENTER SITE"
                    </button>
                </div>
            </div>
        </div>
    }
}
