use api_contract::{
    CreateMaintenanceRequest, CreateSwitchRequest, CreateUserRequest, MaintenanceStatsDto,
    SwitchStatsDto, UpdateUserRequest, UserDto,
};
use domain::UserRole;
use serde_json::Value;

#[test]
fn user_dto_is_camel_case() {
    let dto = UserDto {
        id: 1,
        username: "budi".to_string(),
        email: "budi@example.com".to_string(),
        full_name: "Budi Santoso".to_string(),
        role: UserRole::Teknisi,
        is_active: true,
        created_at: "2024-05-01T08:00:00+00:00".to_string(),
        updated_at: "2024-05-01T08:00:00+00:00".to_string(),
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert!(value.get("fullName").is_some());
    assert!(value.get("isActive").is_some());
    assert!(value.get("createdAt").is_some());
    assert!(value.get("full_name").is_none());
    assert_eq!(value.get("role"), Some(&Value::String("Teknisi".to_string())));
}

#[test]
fn create_user_request_parses_camel_case() {
    let payload = r#"{
        "username": "budi",
        "email": "budi@example.com",
        "fullName": "Budi Santoso",
        "role": "Teknisi"
    }"#;
    let req: CreateUserRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.full_name, "Budi Santoso");
    assert_eq!(req.role.as_deref(), Some("Teknisi"));
}

#[test]
fn create_user_request_role_is_optional() {
    let payload = r#"{"username":"budi","email":"budi@example.com","fullName":"Budi"}"#;
    let req: CreateUserRequest = serde_json::from_str(payload).expect("parse");
    assert!(req.role.is_none());
}

#[test]
fn update_user_request_all_fields_optional() {
    let req: UpdateUserRequest = serde_json::from_str("{}").expect("parse");
    assert!(req.username.is_none());
    assert!(req.email.is_none());
    assert!(req.full_name.is_none());
    assert!(req.role.is_none());
    assert!(req.is_active.is_none());
}

#[test]
fn create_switch_request_parses_coordinates_and_date() {
    let payload = r#"{
        "deviceName": "SW-CORE-01",
        "locationDescription": "Gedung A lantai 2",
        "model": "C2960X",
        "serialNumber": "FOC1234X0AB",
        "implementationDate": "2023-11-14",
        "ipAddress": "10.20.30.41",
        "latitude": "1.23456789",
        "longitude": "2.34567890"
    }"#;
    let req: CreateSwitchRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.implementation_date.to_string(), "2023-11-14");
    assert_eq!(req.latitude.to_string(), "1.23456789");
    assert_eq!(req.longitude.to_string(), "2.34567890");
}

#[test]
fn create_maintenance_request_defaults_are_absent() {
    let payload = r#"{
        "switchDeviceId": 7,
        "technicianId": 3,
        "maintenanceDate": "2024-06-10",
        "workDescription": "Bersihkan port dan cek uplink"
    }"#;
    let req: CreateMaintenanceRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.switch_device_id, 7);
    assert_eq!(req.technician_id, 3);
    assert!(req.technician_name.is_none());
    assert!(req.status.is_none());
    assert!(req.maintenance_type.is_none());
    assert!(req.additional_notes.is_none());
}

#[test]
fn stats_dtos_are_camel_case() {
    let maintenance = MaintenanceStatsDto {
        total_maintenance: 10,
        selesai: 4,
        tertunda: 3,
        dalam_proses: 3,
        maintenance_this_month: 2,
    };
    let value = serde_json::to_value(maintenance).expect("serialize");
    assert!(value.get("totalMaintenance").is_some());
    assert!(value.get("dalamProses").is_some());
    assert!(value.get("maintenanceThisMonth").is_some());

    let switches = SwitchStatsDto {
        total_switches: 5,
        switches_with_pending_maintenance: 2,
        switches_without_maintenance: 1,
        total_unique_locations: 4,
    };
    let value = serde_json::to_value(switches).expect("serialize");
    assert!(value.get("switchesWithPendingMaintenance").is_some());
    assert!(value.get("totalUniqueLocations").is_some());
}
