//! The single page: search card, error banner, results, and help dialog.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use recommend::render::{self, Body, Screen, TriggerControl};
use recommend::state::{RecommendState, Settlement, Ticket};
use recommend::{RecommendError, RecommendResponse};

#[cfg(feature = "csr")]
use crate::net::api::BrowserRecommendService;
#[cfg(feature = "csr")]
use recommend::service::RecommendService;

use crate::components::empty_state::EmptyState;
use crate::components::error_banner::ErrorBanner;
use crate::components::help_modal::HelpModal;
use crate::components::recommendation_table::RecommendationTable;
use crate::components::search_bar::SearchBar;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Home page. Owns request orchestration; every panel is driven by one
/// memoized [`Screen`].
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<RecommendState>>();
    let screen: Memo<Screen> = Memo::new(move |_| state.with(render::render));
    let help_open = RwSignal::new(false);

    probe_health();

    let busy = Signal::derive(move || screen.with(|s| s.trigger == TriggerControl::Busy));
    let on_submit = Callback::new(move |()| submit(state));
    let on_help_close = Callback::new(move |()| help_open.set(false));

    view! {
        <div class="page">
            <div class="page__inner">
                <header class="page__header">
                    <div>
                        <h1 class="page__title">{render::TITLE}</h1>
                        <p class="page__subtitle">{render::SUBTITLE}</p>
                    </div>
                    <button class="page__help" title="About" on:click=move |_| help_open.set(true)>
                        "?"
                    </button>
                </header>

                <section class="search-card">
                    <SearchBar busy=busy on_submit=on_submit/>
                    {move || {
                        screen
                            .with(|s| s.banner.clone())
                            .map(|message| view! { <ErrorBanner message=message/> })
                    }}
                </section>

                {move || match screen.with(|s| s.body.clone()) {
                    Body::Table(table) => view! { <RecommendationTable table=table/> }.into_any(),
                    Body::EmptyPrompt => view! { <EmptyState/> }.into_any(),
                    Body::Blank => ().into_any(),
                }}
            </div>

            <Show when=move || help_open.get()>
                <HelpModal on_close=on_help_close/>
            </Show>
        </div>
    }
}

/// Begin a submission for the current query and settle it when the service
/// answers. Blank queries return without a request.
fn submit(state: RwSignal<RecommendState>) {
    let Some(ticket) = start_submission(state) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = BrowserRecommendService.recommend(&ticket.query).await;
        finish_submission(state, &ticket, outcome);
    });

    #[cfg(not(feature = "csr"))]
    finish_submission(state, &ticket, Err(crate::net::api::unavailable()));
}

/// Issue a ticket for the current query. A blank query leaves the signal
/// untouched so nothing re-renders.
fn start_submission(state: RwSignal<RecommendState>) -> Option<Ticket> {
    if !state.with_untracked(|s| recommend::submittable(s.query()).is_some()) {
        return None;
    }
    let mut ticket = None;
    state.update(|s| ticket = s.begin());
    ticket
}

/// Apply the outcome behind `ticket`. Superseded tickets are dropped without
/// notifying subscribers.
fn finish_submission(
    state: RwSignal<RecommendState>,
    ticket: &Ticket,
    outcome: Result<RecommendResponse, RecommendError>,
) -> Settlement {
    if state.with_untracked(|s| s.latest_seq() != ticket.seq) {
        #[cfg(feature = "csr")]
        log::debug!("dropped response for superseded request {}", ticket.seq);
        return Settlement::Stale;
    }
    let mut settlement = Settlement::Stale;
    state.update(|s| settlement = s.settle(ticket, outcome));
    settlement
}

/// Fire-and-forget startup probe; the result is only logged.
fn probe_health() {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async {
        match BrowserRecommendService.health().await {
            Ok(body) => log::info!("recommendation service health: {body}"),
            Err(error) => log::warn!("recommendation service health probe failed: {error}"),
        }
    });
}
