//! Inline failure banner under the search bar.

use leptos::prelude::*;

/// Banner with the fixed failure message. It has no close control; the next
/// submission clears it.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-banner__icon" aria-hidden="true">"!"</span>
            {message}
        </div>
    }
}
