//! Pure mapping from [`RecommendState`] to what the page shows.
//!
//! Both front-ends draw from [`Screen`]; neither re-derives visibility or
//! badge rules on its own.

use crate::AssessmentRecord;
use crate::state::{RecommendState, ViewState};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

pub const TITLE: &str = "Assessment Recommender";
pub const SUBTITLE: &str = "AI-driven insights from the SHL product catalogue.";
pub const QUERY_PLACEHOLDER: &str = "Describe the role or skills you need to assess...";
pub const TRIGGER_LABEL: &str = "Generate";
pub const RESULTS_HEADING: &str = "Recommended Assessments";
pub const EMPTY_TITLE: &str = "Ready to analyze";
pub const EMPTY_HINT: &str = "Type in your hiring context to find the best match.";
pub const COLUMNS: [&str; 5] = ["Assessment", "Type", "Remote", "Adaptive", "Link"];
pub const LINK_LABEL: &str = "View";
/// Result links open in a new browsing context with no opener or referrer.
pub const LINK_REL: &str = "noopener noreferrer";

/// Exact value the service uses for a supported feature.
const SUPPORTED: &str = "Yes";

/// State of the trigger button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerControl {
    Ready,
    /// Disabled, showing a spinner instead of its label.
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteSupport {
    Supported,
    No,
}

impl RemoteSupport {
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        if value == Some(SUPPORTED) { Self::Supported } else { Self::No }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Supported => "Supported",
            Self::No => "No",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdaptiveSupport {
    Adaptive,
    Standard,
}

impl AdaptiveSupport {
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        if value == Some(SUPPORTED) { Self::Adaptive } else { Self::Standard }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Adaptive => "Adaptive",
            Self::Standard => "Standard",
        }
    }
}

/// One table row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    pub name: String,
    pub description: String,
    pub duration_badge: Option<String>,
    pub tags: Vec<String>,
    pub remote: RemoteSupport,
    pub adaptive: AdaptiveSupport,
    /// `None` leaves the link inert.
    pub url: Option<String>,
}

impl From<&AssessmentRecord> for RowView {
    fn from(record: &AssessmentRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            duration_badge: duration_badge(record.duration),
            tags: record.test_type.clone(),
            remote: RemoteSupport::from_wire(record.remote_support.as_deref()),
            adaptive: AdaptiveSupport::from_wire(record.adaptive_support.as_deref()),
            url: Some(record.url.trim())
                .filter(|url| !url.is_empty())
                .map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsTable {
    pub count_badge: String,
    pub rows: Vec<RowView>,
}

impl ResultsTable {
    fn from_records(records: &[AssessmentRecord]) -> Self {
        Self {
            count_badge: count_badge(records.len()),
            rows: records.iter().map(RowView::from).collect(),
        }
    }
}

/// Main panel under the search card.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// "Ready to analyze": no results and nothing loading.
    EmptyPrompt,
    Table(ResultsTable),
    /// No results yet and a request is in flight.
    Blank,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    pub trigger: TriggerControl,
    pub banner: Option<String>,
    pub body: Body,
}

impl Screen {
    #[must_use]
    pub fn row_count(&self) -> usize {
        match &self.body {
            Body::Table(table) => table.rows.len(),
            Body::EmptyPrompt | Body::Blank => 0,
        }
    }
}

/// Derive the full screen for `state`.
#[must_use]
pub fn render(state: &RecommendState) -> Screen {
    match state.view() {
        ViewState::Idle => Screen {
            trigger: TriggerControl::Ready,
            banner: None,
            body: Body::EmptyPrompt,
        },
        ViewState::Loading { stale } => Screen {
            trigger: TriggerControl::Busy,
            banner: None,
            body: if stale.is_empty() {
                Body::Blank
            } else {
                Body::Table(ResultsTable::from_records(stale))
            },
        },
        ViewState::Error { message, results } => Screen {
            trigger: TriggerControl::Ready,
            banner: Some(message.to_owned()),
            body: if results.is_empty() {
                Body::EmptyPrompt
            } else {
                Body::Table(ResultsTable::from_records(results))
            },
        },
        ViewState::Results(records) => Screen {
            trigger: TriggerControl::Ready,
            banner: None,
            body: Body::Table(ResultsTable::from_records(records)),
        },
    }
}

#[must_use]
pub fn count_badge(count: usize) -> String {
    format!("{count} MATCHES")
}

/// `"<minutes>m"`, or `None` when the duration is absent or zero.
#[must_use]
pub fn duration_badge(duration: Option<f64>) -> Option<String> {
    duration
        .filter(|minutes| minutes.is_finite() && minutes.abs() > f64::EPSILON)
        .map(|minutes| format!("{minutes}m"))
}
