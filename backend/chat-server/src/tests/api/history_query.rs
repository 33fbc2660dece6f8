use crate::{ApiError, HistoryQuery};

#[test]
fn given_no_limit_when_resolved_then_none() {
    assert_eq!(HistoryQuery::default().limit().unwrap(), None);
}

#[test]
fn given_positive_limit_when_resolved_then_some() {
    let query = HistoryQuery { limit: Some(3) };

    assert_eq!(query.limit().unwrap(), Some(3));
}

#[test]
fn given_negative_limit_when_resolved_then_binding_error() {
    let query = HistoryQuery { limit: Some(-1) };

    assert!(matches!(query.limit(), Err(ApiError::Binding { .. })));
}
