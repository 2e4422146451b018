use smt_telemetry::new_request_ids;

#[test]
fn request_ids_non_empty() {
    let ids = new_request_ids();
    assert!(!ids.request_id.is_empty());
    assert!(!ids.trace_id.is_empty());
}

#[test]
fn request_ids_are_distinct() {
    let first = new_request_ids();
    let second = new_request_ids();
    assert_ne!(first.request_id, second.request_id);
    assert_ne!(first.request_id, first.trace_id);
}
