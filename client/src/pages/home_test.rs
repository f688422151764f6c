use super::*;
use recommend::AssessmentRecord;
use recommend::state::Activity;

fn response(names: &[&str]) -> RecommendResponse {
    RecommendResponse {
        recommended_assessments: Some(
            names
                .iter()
                .map(|name| AssessmentRecord { name: (*name).to_owned(), ..AssessmentRecord::default() })
                .collect(),
        ),
    }
}

fn with_state(query: &str, f: impl FnOnce(RwSignal<RecommendState>)) {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(RecommendState::default());
        state.update(|s| s.set_query(query));
        f(state);
    });
}

#[test]
fn blank_query_issues_no_ticket_and_leaves_state_alone() {
    with_state("   ", |state| {
        let before = state.get_untracked();
        assert!(start_submission(state).is_none());
        assert_eq!(state.get_untracked(), before);
        assert_eq!(state.with_untracked(RecommendState::latest_seq), 0);
    });
}

#[test]
fn loading_clears_after_success() {
    with_state("java", |state| {
        let ticket = start_submission(state).expect("ticket");
        assert!(state.with_untracked(RecommendState::is_loading));

        let settlement = finish_submission(state, &ticket, Ok(response(&["Java Test"])));
        assert_eq!(settlement, Settlement::Applied { count: 1 });
        assert_eq!(state.with_untracked(|s| s.activity().clone()), Activity::Idle);
    });
}

#[test]
fn loading_clears_after_failure() {
    with_state("java", |state| {
        let ticket = start_submission(state).expect("ticket");
        let settlement = finish_submission(state, &ticket, Err(crate::net::api::unavailable()));
        assert_eq!(settlement, Settlement::Failed);
        assert!(!state.with_untracked(RecommendState::is_loading));
        assert_eq!(state.with_untracked(|s| s.error().map(str::to_owned)).as_deref(), Some(recommend::FAILURE_MESSAGE));
    });
}

#[cfg(not(feature = "csr"))]
#[test]
fn submit_without_a_browser_still_settles() {
    with_state("java", |state| {
        submit(state);
        assert!(!state.with_untracked(RecommendState::is_loading));
        assert!(state.with_untracked(|s| s.error().is_some()));
    });
}

#[test]
fn superseded_ticket_is_dropped() {
    with_state("first", |state| {
        let first = start_submission(state).expect("first ticket");
        state.update(|s| s.set_query("second"));
        let second = start_submission(state).expect("second ticket");

        assert_eq!(finish_submission(state, &first, Ok(response(&["Stale"]))), Settlement::Stale);
        assert!(state.with_untracked(RecommendState::is_loading));
        assert!(state.with_untracked(|s| s.results().is_empty()));

        assert_eq!(finish_submission(state, &second, Ok(response(&["Fresh"]))), Settlement::Applied { count: 1 });
        assert_eq!(state.with_untracked(|s| s.results()[0].name.clone()), "Fresh");
    });
}
