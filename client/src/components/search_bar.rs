//! Query input and trigger button.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use recommend::render::{QUERY_PLACEHOLDER, TRIGGER_LABEL};
use recommend::state::RecommendState;

/// Text input bound to the shared query plus the "Generate" trigger.
///
/// Every edit is stored verbatim. Clicking the button or pressing Enter runs
/// `on_submit`; while `busy` the button is disabled, shows a spinner, and
/// Enter does nothing.
#[component]
pub fn SearchBar(#[prop(into)] busy: Signal<bool>, on_submit: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<RecommendState>>();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !busy.get_untracked() {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <div class="search-bar">
            <div class="search-bar__field">
                <span class="search-bar__icon" aria-hidden="true">"⌕"</span>
                <input
                    class="search-bar__input"
                    type="text"
                    placeholder=QUERY_PLACEHOLDER
                    prop:value=move || state.with(|s| s.query().to_owned())
                    on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
            </div>
            <button
                class="search-bar__trigger"
                disabled=move || busy.get()
                on:click=move |_| on_submit.run(())
            >
                {move || {
                    if busy.get() {
                        view! { <span class="spinner" aria-label="Loading"></span> }.into_any()
                    } else {
                        TRIGGER_LABEL.into_any()
                    }
                }}
            </button>
        </div>
    }
}
