use chrono::{Datelike, NaiveDate, Utc};
use domain::{MaintenanceStatus, UserRole};
use rust_decimal::Decimal;
use smt_storage::{
    InMemoryStore, MaintenanceStore, NewMaintenanceRecord, NewSwitchDevice, NewUser, SwitchStore,
    UserStore,
};

async fn seed_user(store: &InMemoryStore) -> i64 {
    store
        .create_user(NewUser {
            username: "budi".to_string(),
            email: "budi@example.com".to_string(),
            full_name: "Budi Santoso".to_string(),
            role: UserRole::Teknisi,
        })
        .await
        .expect("create user")
        .id
}

async fn seed_switch(store: &InMemoryStore, n: u32, location: &str) -> i64 {
    store
        .create_switch(NewSwitchDevice {
            device_name: format!("SW-{n:02}"),
            location_description: location.to_string(),
            model: "C2960X".to_string(),
            serial_number: format!("FOC{n:06}"),
            implementation_date: "2023-11-14".parse().expect("date"),
            ip_address: format!("10.0.0.{n}"),
            latitude: Decimal::from(1),
            longitude: Decimal::from(2),
        })
        .await
        .expect("create switch")
        .id
}

async fn seed_record(
    store: &InMemoryStore,
    switch_id: i64,
    user_id: i64,
    date: NaiveDate,
    status: MaintenanceStatus,
) {
    store
        .create_record(NewMaintenanceRecord {
            switch_device_id: switch_id,
            technician_id: user_id,
            maintenance_date: date,
            technician_name: "Budi Santoso".to_string(),
            work_description: "Pemeliharaan rutin".to_string(),
            status,
            maintenance_type: "PM".to_string(),
            additional_notes: "".to_string(),
        })
        .await
        .expect("create record");
}

#[tokio::test]
async fn maintenance_stats_count_by_status_and_month() {
    let store = InMemoryStore::new();
    let user_id = seed_user(&store).await;
    let switch_id = seed_switch(&store, 1, "Gedung A").await;

    let today = Utc::now().date_naive();
    let this_month =
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1).expect("first of month");
    let last_year = NaiveDate::from_ymd_opt(today.year() - 1, 1, 15).expect("past date");

    seed_record(&store, switch_id, user_id, this_month, MaintenanceStatus::Selesai).await;
    seed_record(&store, switch_id, user_id, this_month, MaintenanceStatus::Tertunda).await;
    seed_record(&store, switch_id, user_id, last_year, MaintenanceStatus::DalamProses).await;
    seed_record(&store, switch_id, user_id, last_year, MaintenanceStatus::Selesai).await;

    let stats = store.maintenance_stats().await.expect("stats");
    assert_eq!(stats.total_maintenance, 4);
    assert_eq!(stats.selesai, 2);
    assert_eq!(stats.tertunda, 1);
    assert_eq!(stats.dalam_proses, 1);
    assert_eq!(stats.maintenance_this_month, 2);
}

#[tokio::test]
async fn maintenance_stats_empty_store_is_zero() {
    let store = InMemoryStore::new();
    let stats = store.maintenance_stats().await.expect("stats");
    assert_eq!(stats.total_maintenance, 0);
    assert_eq!(stats.maintenance_this_month, 0);
}

#[tokio::test]
async fn switch_stats_cover_pending_untouched_and_locations() {
    let store = InMemoryStore::new();
    let user_id = seed_user(&store).await;
    // 两台在同一位置，第三台单独一个位置
    let pending = seed_switch(&store, 1, "Gedung A").await;
    let maintained = seed_switch(&store, 2, "Gedung A").await;
    let untouched = seed_switch(&store, 3, "Gedung B").await;
    let _ = untouched;

    let date = "2024-06-10".parse().expect("date");
    seed_record(&store, pending, user_id, date, MaintenanceStatus::Tertunda).await;
    seed_record(&store, maintained, user_id, date, MaintenanceStatus::Selesai).await;

    let stats = store.switch_stats().await.expect("stats");
    assert_eq!(stats.total_switches, 3);
    assert_eq!(stats.switches_with_pending_maintenance, 1);
    assert_eq!(stats.switches_without_maintenance, 1);
    assert_eq!(stats.total_unique_locations, 2);
}
