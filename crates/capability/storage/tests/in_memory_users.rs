use chrono::NaiveDate;
use domain::{MaintenanceStatus, UserRole};
use rust_decimal::Decimal;
use smt_storage::{
    InMemoryStore, MaintenanceStore, NewMaintenanceRecord, NewSwitchDevice, NewUser, SwitchStore,
    UserStore, UserUpdate,
};

fn new_user(n: u32) -> NewUser {
    NewUser {
        username: format!("teknisi-{n}"),
        email: format!("teknisi{n}@example.com"),
        full_name: format!("Teknisi {n}"),
        role: UserRole::Teknisi,
    }
}

fn date(text: &str) -> NaiveDate {
    text.parse().expect("date literal")
}

#[tokio::test]
async fn create_assigns_sequential_ids_and_defaults() {
    let store = InMemoryStore::new();
    let first = store.create_user(new_user(1)).await.expect("create");
    let second = store.create_user(new_user(2)).await.expect("create");
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.is_active);
    assert_eq!(first.role, UserRole::Teknisi);
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn unique_keys_are_enforced() {
    let store = InMemoryStore::new();
    store.create_user(new_user(1)).await.expect("create");

    let mut duplicate_username = new_user(2);
    duplicate_username.username = "teknisi-1".to_string();
    assert!(store.create_user(duplicate_username).await.is_err());

    let mut duplicate_email = new_user(3);
    duplicate_email.email = "teknisi1@example.com".to_string();
    assert!(store.create_user(duplicate_email).await.is_err());
}

#[tokio::test]
async fn find_by_username_and_email() {
    let store = InMemoryStore::new();
    let created = store.create_user(new_user(1)).await.expect("create");
    let by_name = store
        .find_by_username("teknisi-1")
        .await
        .expect("query")
        .expect("user");
    assert_eq!(by_name.id, created.id);
    let by_email = store
        .find_by_email("teknisi1@example.com")
        .await
        .expect("query")
        .expect("user");
    assert_eq!(by_email.id, created.id);
    assert!(
        store
            .find_by_username("missing")
            .await
            .expect("query")
            .is_none()
    );
}

#[tokio::test]
async fn update_changes_only_present_fields() {
    let store = InMemoryStore::new();
    let created = store.create_user(new_user(1)).await.expect("create");
    let updated = store
        .update_user(
            created.id,
            UserUpdate {
                email: Some("baru@example.com".to_string()),
                is_active: Some(false),
                ..UserUpdate::default()
            },
        )
        .await
        .expect("update")
        .expect("user");
    assert_eq!(updated.email, "baru@example.com");
    assert!(!updated.is_active);
    // 未提供的字段保持不变
    assert_eq!(updated.username, created.username);
    assert_eq!(updated.full_name, created.full_name);
    assert_eq!(updated.role, created.role);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_missing_user_returns_none() {
    let store = InMemoryStore::new();
    let result = store
        .update_user(42, UserUpdate::default())
        .await
        .expect("update");
    assert!(result.is_none());
}

#[tokio::test]
async fn rename_syncs_technician_name_on_records() {
    let store = InMemoryStore::new();
    let user = store.create_user(new_user(1)).await.expect("create user");
    let switch = store
        .create_switch(NewSwitchDevice {
            device_name: "SW-CORE-01".to_string(),
            location_description: "Gedung A".to_string(),
            model: "C2960X".to_string(),
            serial_number: "FOC0001".to_string(),
            implementation_date: date("2023-01-15"),
            ip_address: "10.0.0.1".to_string(),
            latitude: Decimal::from(1),
            longitude: Decimal::from(2),
        })
        .await
        .expect("create switch");
    let record = store
        .create_record(NewMaintenanceRecord {
            switch_device_id: switch.id,
            technician_id: user.id,
            maintenance_date: date("2024-06-10"),
            technician_name: user.full_name.clone(),
            work_description: "Cek uplink".to_string(),
            status: MaintenanceStatus::Tertunda,
            maintenance_type: "PM".to_string(),
            additional_notes: "".to_string(),
        })
        .await
        .expect("create record");

    store
        .update_user(
            user.id,
            UserUpdate {
                full_name: Some("Budi Santoso".to_string()),
                ..UserUpdate::default()
            },
        )
        .await
        .expect("update")
        .expect("user");

    let synced = store
        .find_record(record.id)
        .await
        .expect("query")
        .expect("record");
    assert_eq!(synced.technician_name, "Budi Santoso");
}

#[tokio::test]
async fn delete_is_refused_while_records_reference_user() {
    let store = InMemoryStore::new();
    let user = store.create_user(new_user(1)).await.expect("create user");
    let switch = store
        .create_switch(NewSwitchDevice {
            device_name: "SW-ACC-07".to_string(),
            location_description: "Gedung B".to_string(),
            model: "C9200".to_string(),
            serial_number: "FOC0002".to_string(),
            implementation_date: date("2023-03-01"),
            ip_address: "10.0.0.2".to_string(),
            latitude: Decimal::from(0),
            longitude: Decimal::from(0),
        })
        .await
        .expect("create switch");
    let record = store
        .create_record(NewMaintenanceRecord {
            switch_device_id: switch.id,
            technician_id: user.id,
            maintenance_date: date("2024-06-10"),
            technician_name: user.full_name.clone(),
            work_description: "Ganti kabel".to_string(),
            status: MaintenanceStatus::Tertunda,
            maintenance_type: "CM".to_string(),
            additional_notes: "".to_string(),
        })
        .await
        .expect("create record");

    assert!(store.delete_user(user.id).await.is_err());

    // 引用移除后允许删除
    assert!(store.delete_record(record.id).await.expect("delete record"));
    assert!(store.delete_user(user.id).await.expect("delete user"));
    assert!(!store.delete_user(user.id).await.expect("second delete"));
}
