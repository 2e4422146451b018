use api_contract::{ApiResponse, MaintenanceRecordDto};
use domain::MaintenanceStatus;

#[test]
fn api_response_success() {
    let response = ApiResponse::success("ok");
    assert!(response.success);
    assert!(response.data.is_some());
    assert!(response.error.is_none());
}

#[test]
fn api_response_error() {
    let response = ApiResponse::<()>::error("INVALID.REQUEST", "email: invalid format");
    assert!(!response.success);
    assert!(response.data.is_none());
    let error = response.error.expect("error body");
    assert_eq!(error.code, "INVALID.REQUEST");
    assert_eq!(error.message, "email: invalid format");
}

#[test]
fn maintenance_dto_omits_absent_relations() {
    let dto = MaintenanceRecordDto {
        id: 1,
        switch_device_id: 7,
        technician_id: 3,
        maintenance_date: "2024-06-10".to_string(),
        technician_name: "Budi Santoso".to_string(),
        work_description: "Ganti SFP".to_string(),
        status: MaintenanceStatus::Selesai,
        maintenance_type: "CM".to_string(),
        additional_notes: "".to_string(),
        created_at: "2024-06-10T02:00:00+00:00".to_string(),
        updated_at: "2024-06-10T02:00:00+00:00".to_string(),
        switch_device: None,
        technician: None,
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert!(value.get("switchDevice").is_none());
    assert!(value.get("technician").is_none());
    assert_eq!(
        value.get("status"),
        Some(&serde_json::json!("Selesai"))
    );
}
