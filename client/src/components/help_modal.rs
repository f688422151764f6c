//! "System Information" dialog opened from the header.

use leptos::prelude::*;

const CATALOGUE_URL: &str = "https://www.shl.com/products/product-catalog/";

/// Static description of the engine. Closes from the close button, the
/// "Get Started" button, a backdrop click, or Escape.
#[component]
pub fn HelpModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_start_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="help-modal__backdrop" on:click=on_backdrop>
            <div
                class="help-modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="help-modal__header">
                    <h3>"System Information"</h3>
                    <button class="help-modal__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <div class="help-modal__body">
                    <h2>"What's Assessment Recommendation Engine?"</h2>
                    <p>
                        "This project helps teams find the most effective testing assessments based on job requirements, skills, and cultural fit from the "
                        <a class="help-modal__link" href=CATALOGUE_URL>"SHL catalogue"</a>
                        "."
                    </p>
                    <button class="help-modal__start" on:click=on_start_click>
                        "Get Started"
                    </button>
                </div>
            </div>
        </div>
    }
}
