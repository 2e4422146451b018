use domain::{MaintenanceStatus, UserRole};

#[test]
fn role_accepts_exact_members() {
    assert_eq!(UserRole::parse("Administrator"), Some(UserRole::Administrator));
    assert_eq!(UserRole::parse("Teknisi"), Some(UserRole::Teknisi));
    assert_eq!(UserRole::parse("User"), Some(UserRole::User));
}

#[test]
fn role_rejects_unknown_and_wrong_case() {
    assert_eq!(UserRole::parse("administrator"), None);
    assert_eq!(UserRole::parse("TEKNISI"), None);
    assert_eq!(UserRole::parse("Operator"), None);
    assert_eq!(UserRole::parse(""), None);
}

#[test]
fn role_default_is_user() {
    assert_eq!(UserRole::default(), UserRole::User);
}

#[test]
fn status_accepts_exact_members() {
    assert_eq!(MaintenanceStatus::parse("Selesai"), Some(MaintenanceStatus::Selesai));
    assert_eq!(MaintenanceStatus::parse("Tertunda"), Some(MaintenanceStatus::Tertunda));
    assert_eq!(
        MaintenanceStatus::parse("Dalam Proses"),
        Some(MaintenanceStatus::DalamProses)
    );
}

#[test]
fn status_rejects_unknown_and_wrong_case() {
    assert_eq!(MaintenanceStatus::parse("selesai"), None);
    assert_eq!(MaintenanceStatus::parse("DalamProses"), None);
    assert_eq!(MaintenanceStatus::parse("Done"), None);
}

#[test]
fn status_default_is_tertunda() {
    assert_eq!(MaintenanceStatus::default(), MaintenanceStatus::Tertunda);
}

#[test]
fn status_serializes_with_space() {
    let value = serde_json::to_value(MaintenanceStatus::DalamProses).expect("serialize");
    assert_eq!(value, serde_json::json!("Dalam Proses"));
}

#[test]
fn role_round_trips_through_str() {
    for role in [UserRole::Administrator, UserRole::Teknisi, UserRole::User] {
        assert_eq!(UserRole::parse(role.as_str()), Some(role));
    }
    for status in [
        MaintenanceStatus::Selesai,
        MaintenanceStatus::Tertunda,
        MaintenanceStatus::DalamProses,
    ] {
        assert_eq!(MaintenanceStatus::parse(status.as_str()), Some(status));
    }
}
