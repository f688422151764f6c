//! Query and request lifecycle state.
//!
//! DESIGN
//! ======
//! One container holds the query, the last applied results, and an explicit
//! `Activity`. Every submission is issued a sequence number; only the latest
//! one may settle the state, so an older response that arrives late is
//! dropped instead of overwriting newer results.
//!
//! Results are replaced wholesale by a successful settlement and are left
//! untouched by both a new submission and a failed one, so a stale table can
//! stay visible under the spinner or the error banner.

use crate::error::FAILURE_MESSAGE;
use crate::{AssessmentRecord, RecommendError, RecommendResponse};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// What the coordinator is doing right now.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Activity {
    /// Nothing in flight and the last settlement (if any) succeeded.
    #[default]
    Idle,
    /// Waiting on the request with this sequence number.
    Loading { seq: u64 },
    /// The latest request failed.
    Failed { message: String },
}

/// Handle for one in-flight submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    /// Query text as it was when the submission began.
    pub query: String,
}

/// How a settlement affected the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// Results replaced with `count` records.
    Applied { count: usize },
    /// The error banner is up; results unchanged.
    Failed,
    /// A newer submission was issued; nothing changed.
    Stale,
}

/// Mutually exclusive UI mode derived from [`RecommendState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewState<'a> {
    /// Nothing to show yet, or the last search had no matches.
    Idle,
    /// A request is in flight; `stale` holds whatever was shown before.
    Loading { stale: &'a [AssessmentRecord] },
    /// The latest request failed; `results` are the previous ones.
    Error {
        message: &'a str,
        results: &'a [AssessmentRecord],
    },
    Results(&'a [AssessmentRecord]),
}

/// State container shared by the input controller, the request coordinator
/// and the result renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendState {
    query: String,
    results: Vec<AssessmentRecord>,
    activity: Activity,
    issued: u64,
}

impl RecommendState {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Store the raw edit value with no transformation.
    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.query = raw.into();
    }

    #[must_use]
    pub fn results(&self) -> &[AssessmentRecord] {
        &self.results
    }

    #[must_use]
    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.activity, Activity::Loading { .. })
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.activity {
            Activity::Failed { message } => Some(message.as_str()),
            Activity::Idle | Activity::Loading { .. } => None,
        }
    }

    /// Sequence number of the most recent submission (0 before the first).
    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// Start a submission for the current query.
    ///
    /// Returns `None` without touching anything when the query is blank.
    pub fn begin(&mut self) -> Option<Ticket> {
        let query = crate::submittable(&self.query)?.to_owned();
        self.issued += 1;
        self.activity = Activity::Loading { seq: self.issued };
        Some(Ticket {
            seq: self.issued,
            query,
        })
    }

    /// Apply the outcome of the request behind `ticket`.
    pub fn settle(
        &mut self,
        ticket: &Ticket,
        outcome: Result<RecommendResponse, RecommendError>,
    ) -> Settlement {
        if ticket.seq != self.issued {
            return Settlement::Stale;
        }

        match outcome {
            Ok(response) => {
                self.results = response.into_records();
                self.activity = Activity::Idle;
                Settlement::Applied {
                    count: self.results.len(),
                }
            }
            Err(_) => {
                self.activity = Activity::Failed {
                    message: FAILURE_MESSAGE.to_owned(),
                };
                Settlement::Failed
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState<'_> {
        match &self.activity {
            Activity::Loading { .. } => ViewState::Loading {
                stale: &self.results,
            },
            Activity::Failed { message } => ViewState::Error {
                message: message.as_str(),
                results: &self.results,
            },
            Activity::Idle if self.results.is_empty() => ViewState::Idle,
            Activity::Idle => ViewState::Results(self.results.as_slice()),
        }
    }
}
