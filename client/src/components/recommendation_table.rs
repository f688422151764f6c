//! Table of recommended assessments.
//!
//! Rows arrive already ordered and derived (`RowView`); this module only maps
//! them onto markup and CSS modifiers.

use leptos::prelude::*;
use recommend::render::{
    AdaptiveSupport, COLUMNS, LINK_LABEL, LINK_REL, RESULTS_HEADING, RemoteSupport, ResultsTable, RowView,
};

#[cfg(test)]
#[path = "recommendation_table_test.rs"]
mod recommendation_table_test;

/// Results card: heading with match count, then one row per record.
#[component]
pub fn RecommendationTable(table: ResultsTable) -> impl IntoView {
    let ResultsTable { count_badge, rows } = table;

    view! {
        <div class="results">
            <div class="results__header">
                <h2 class="results__heading">{RESULTS_HEADING}</h2>
                <span class="results__count">{count_badge}</span>
            </div>
            <div class="results__scroll">
                <table class="results__table">
                    <thead>
                        <tr>
                            {COLUMNS
                                .iter()
                                .enumerate()
                                .map(|(idx, title)| view! { <th class=column_class(idx)>{*title}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|row| view! { <RecommendationRow row=row/> }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn RecommendationRow(row: RowView) -> impl IntoView {
    let RowView { name, description, duration_badge, tags, remote, adaptive, url } = row;

    view! {
        <tr class="results__row">
            <td class=column_class(0)>
                <div class="results__name">
                    {name}
                    {duration_badge.map(|badge| view! { <span class="badge badge--duration">{badge}</span> })}
                </div>
                <div class="results__description">{description}</div>
            </td>
            <td class=column_class(1)>
                <div class="results__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="badge badge--tag">{tag}</span> })
                        .collect_view()}
                </div>
            </td>
            <td class=column_class(2)>
                <span class=remote_class(remote)>{remote.label()}</span>
            </td>
            <td class=column_class(3)>
                <span class=adaptive_class(adaptive)>{adaptive.label()}</span>
            </td>
            <td class=column_class(4)>
                <a class="results__link" href=url target="_blank" rel=LINK_REL>
                    {LINK_LABEL}
                    " ↗"
                </a>
            </td>
        </tr>
    }
}

/// Cell class for the column at `idx`; support columns center, the link
/// column aligns right.
pub fn column_class(idx: usize) -> &'static str {
    match idx {
        2 | 3 => "results__cell results__cell--center",
        4 => "results__cell results__cell--right",
        _ => "results__cell",
    }
}

pub fn remote_class(remote: RemoteSupport) -> &'static str {
    match remote {
        RemoteSupport::Supported => "support support--yes",
        RemoteSupport::No => "support support--no",
    }
}

pub fn adaptive_class(adaptive: AdaptiveSupport) -> &'static str {
    match adaptive {
        AdaptiveSupport::Adaptive => "adaptive adaptive--on",
        AdaptiveSupport::Standard => "adaptive adaptive--off",
    }
}
