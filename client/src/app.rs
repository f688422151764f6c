//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use recommend::render::TITLE;
use recommend::state::RecommendState;

use crate::pages::home::HomePage;

/// Root application component.
///
/// Provides the shared recommendation state; there is a single page, so no
/// router is mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(RecommendState::default());
    provide_context(state);

    view! {
        <Title text=TITLE/>
        <HomePage/>
    }
}
