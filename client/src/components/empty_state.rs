//! Placeholder shown when there is nothing to list.

use leptos::prelude::*;
use recommend::render::{EMPTY_HINT, EMPTY_TITLE};

/// "Ready to analyze" panel. Covers both the never-submitted and the
/// zero-matches cases.
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon" aria-hidden="true">"▭"</div>
            <h3 class="empty-state__title">{EMPTY_TITLE}</h3>
            <p class="empty-state__hint">{EMPTY_HINT}</p>
        </div>
    }
}
