use super::*;

#[test]
fn support_columns_are_centered_and_link_right_aligned() {
    assert_eq!(column_class(0), "results__cell");
    assert_eq!(column_class(1), "results__cell");
    assert!(column_class(2).ends_with("--center"));
    assert!(column_class(3).ends_with("--center"));
    assert!(column_class(4).ends_with("--right"));
    assert_eq!(COLUMNS.len(), 5);
}

#[test]
fn remote_support_classes_differ() {
    assert_eq!(remote_class(RemoteSupport::Supported), "support support--yes");
    assert_eq!(remote_class(RemoteSupport::No), "support support--no");
}

#[test]
fn adaptive_support_classes_differ() {
    assert_eq!(adaptive_class(AdaptiveSupport::Adaptive), "adaptive adaptive--on");
    assert_eq!(adaptive_class(AdaptiveSupport::Standard), "adaptive adaptive--off");
}

#[test]
fn links_open_isolated() {
    assert_eq!(LINK_REL, "noopener noreferrer");
}
