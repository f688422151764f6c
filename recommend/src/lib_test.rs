use super::*;

#[test]
fn request_serializes_query_as_sole_field() {
    let body = serde_json::to_value(RecommendRequest::new("  java developer ")).expect("serialize");
    assert_eq!(body, serde_json::json!({ "query": "  java developer " }));
}

#[test]
fn submittable_rejects_blank_and_keeps_raw_text() {
    assert_eq!(submittable(""), None);
    assert_eq!(submittable(" \t\n "), None);
    assert_eq!(submittable("  rust  "), Some("  rust  "));
}

#[test]
fn decode_full_record() {
    let body = r#"{"recommended_assessments":[{
        "name":"Java Test",
        "url":"https://x/y",
        "description":"Core Java",
        "test_type":["Knowledge","Skills"],
        "remote_support":"Yes",
        "adaptive_support":"No",
        "duration":30
    }]}"#;
    let records = decode_response(body).expect("decode").into_records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Java Test");
    assert_eq!(record.url, "https://x/y");
    assert_eq!(record.description.as_deref(), Some("Core Java"));
    assert_eq!(record.test_type, vec!["Knowledge", "Skills"]);
    assert_eq!(record.remote_support.as_deref(), Some("Yes"));
    assert_eq!(record.adaptive_support.as_deref(), Some("No"));
    assert_eq!(record.duration, Some(30.0));
}

#[test]
fn decode_minimal_record_fills_defaults() {
    let body = r#"{"recommended_assessments":[{"name":"Only","url":"https://x","test_type":null,"extra":1}]}"#;
    let record = decode_response(body).expect("decode").into_records().remove(0);
    assert!(record.description.is_none());
    assert!(record.duration.is_none());
    assert!(record.test_type.is_empty());
    assert!(record.remote_support.is_none());
    assert!(record.adaptive_support.is_none());
}

#[test]
fn missing_or_null_results_field_means_no_matches() {
    assert!(decode_response("{}").expect("decode").into_records().is_empty());
    assert!(
        decode_response(r#"{"recommended_assessments":null}"#)
            .expect("decode")
            .into_records()
            .is_empty()
    );
}

#[test]
fn malformed_body_is_decode_error() {
    assert!(matches!(decode_response("<html>"), Err(RecommendError::Decode(_))));
}

#[test]
fn non_string_support_flags_read_as_absent() {
    let body = r#"{"recommended_assessments":[
        {"name":"A","url":"u","remote_support":true,"adaptive_support":1}
    ]}"#;
    let record = decode_response(body).expect("decode").into_records().remove(0);
    assert_eq!(record.name, "A");
    assert!(record.remote_support.is_none());
    assert!(record.adaptive_support.is_none());
}

#[test]
fn numeric_string_duration_is_accepted_and_junk_is_absent() {
    let body = r#"{"recommended_assessments":[
        {"name":"A","url":"u","duration":"30"},
        {"name":"B","url":"u","duration":" 12.5 "},
        {"name":"C","url":"u","duration":"about an hour"},
        {"name":"D","url":"u","duration":{"minutes":5}}
    ]}"#;
    let durations: Vec<_> = decode_response(body)
        .expect("decode")
        .into_records()
        .into_iter()
        .map(|r| r.duration)
        .collect();
    assert_eq!(durations, [Some(30.0), Some(12.5), None, None]);
}

#[test]
fn missing_url_defaults_to_empty_without_failing_siblings() {
    let body = r#"{"recommended_assessments":[
        {"name":"First","url":"https://x/1"},
        {"name":"Second"}
    ]}"#;
    let records = decode_response(body).expect("decode").into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].url, "https://x/1");
    assert_eq!(records[1].url, "");
}

#[test]
fn non_array_test_type_reads_as_empty() {
    let body = r#"{"recommended_assessments":[
        {"name":"A","url":"u","test_type":"Knowledge"},
        {"name":"B","url":"u","test_type":["Skills",7,null]}
    ]}"#;
    let records = decode_response(body).expect("decode").into_records();
    assert!(records[0].test_type.is_empty());
    assert_eq!(records[1].test_type, vec!["Skills", "7"]);
}

#[test]
fn record_without_name_still_decodes() {
    let body = r#"{"recommended_assessments":[{"url":"https://x"}]}"#;
    let record = decode_response(body).expect("decode").into_records().remove(0);
    assert_eq!(record.name, "");
    assert_eq!(record.url, "https://x");
}

#[test]
fn endpoints_trim_trailing_slash() {
    assert_eq!(health_endpoint("http://svc/"), "http://svc/health");
    assert_eq!(recommend_endpoint("http://svc"), "http://svc/recommend");
    assert_eq!(
        recommend_endpoint(DEFAULT_BASE_URL),
        "https://assessment-recommendation-engine-0mg0.onrender.com/recommend"
    );
}

#[test]
fn every_error_shows_the_same_message() {
    let errors = [
        RecommendError::Status { status: 500, body: "boom".to_owned() },
        RecommendError::Transport("unreachable".to_owned()),
        RecommendError::Decode("eof".to_owned()),
    ];
    for error in &errors {
        assert_eq!(error.user_message(), FAILURE_MESSAGE);
    }
    assert_eq!(errors[0].status(), Some(500));
    assert_eq!(errors[1].status(), None);
    assert!(errors[0].to_string().contains("500"));
}
