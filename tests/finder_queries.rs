//! Finder and derived-query tests: conjunctive filters, thresholds, date
//! ranges, and the cross-entity storage aggregation.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};

use erp_service::application::audit::AuditLogService;
use erp_service::application::fleet::{DriverService, RouteService};
use erp_service::application::inventory::{
    InventoryItemService, StorageQueryService, StorageService, SupplyService,
};
use erp_service::domain::audit::AuditLogRequest;
use erp_service::domain::fleet::{DriverRequest, RouteRequest};
use erp_service::domain::inventory::{
    InventoryItemRequest, StorageRequest, StorageType, SupplyRequest,
};
use erp_service::{InMemoryRepository, ServiceError};

fn storage_req(name: &str, location: &str, storage_type: StorageType, capacity: i32) -> StorageRequest {
    StorageRequest {
        name: name.into(),
        location: location.into(),
        storage_type,
        capacity,
    }
}

#[test]
fn driver_created_with_phone_is_found_by_phone() {
    let service = DriverService::new(InMemoryRepository::new());
    let ana = service
        .create(DriverRequest {
            name: "Ana".into(),
            phone: "555-0100".into(),
            license_number: "L-1".into(),
        })
        .unwrap();
    assert_ne!(ana.id, 0);
    assert_eq!(ana.name, "Ana");

    let found = service.find_by_phone("555-0100").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, ana.id);
}

#[test]
fn refrigerated_capacity_threshold_returns_only_larger_storage() {
    let service = StorageService::new(InMemoryRepository::new());
    let big = service
        .create(storage_req("North", "Leeds", StorageType::Refrigerated, 100))
        .unwrap();
    service
        .create(storage_req("South", "Leeds", StorageType::Refrigerated, 50))
        .unwrap();

    let found = service
        .get_by_type_and_capacity_greater_than(StorageType::Refrigerated, 75)
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, big.id);
    assert_eq!(found[0].capacity, 100);
}

#[test]
fn conjunctive_filter_equals_intersection_of_single_filters() {
    let service = StorageService::new(InMemoryRepository::new());
    service
        .create(storage_req("North", "Leeds", StorageType::Dry, 10))
        .unwrap();
    service
        .create(storage_req("North", "York", StorageType::Dry, 10))
        .unwrap();
    service
        .create(storage_req("South", "Leeds", StorageType::Dry, 10))
        .unwrap();

    let by_name: HashSet<i64> = service
        .get_by_name("North")
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    let by_location: HashSet<i64> = service
        .get_by_location("Leeds")
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    let both: HashSet<i64> = service
        .get_by_name_and_location("North", "Leeds")
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();

    let intersection: HashSet<i64> = by_name.intersection(&by_location).copied().collect();
    assert_eq!(both, intersection);
    assert_eq!(both.len(), 1);
}

#[test]
fn difference_threshold_query_is_monotonic() {
    let service = InventoryItemService::new(InMemoryRepository::new());
    for (recorded, counted) in [(100, 100), (100, 95), (100, 80), (100, 60)] {
        service
            .create(InventoryItemRequest {
                product_id: 1,
                recorded_quantity: recorded,
                counted_quantity: counted,
            })
            .unwrap();
    }

    let loose: HashSet<i64> = service
        .find_items_with_difference(3)
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    let strict: HashSet<i64> = service
        .find_items_with_difference(15)
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();

    assert!(strict.is_subset(&loose));
    assert_eq!(loose.len(), 3);
    assert_eq!(strict.len(), 2);
}

#[test]
fn negative_threshold_is_rejected() {
    let service = InventoryItemService::new(InMemoryRepository::new());
    let err = service.find_items_with_difference(-1).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test]
fn logs_between_dates_honors_both_bounds() {
    let service = AuditLogService::new(InMemoryRepository::new());
    let log_at = |h: u32| AuditLogRequest {
        actor: "system".into(),
        action: "login".into(),
        detail: String::new(),
        logged_at: Utc.with_ymd_and_hms(2026, 5, 10, h, 0, 0).unwrap(),
    };
    service.create(log_at(8)).unwrap(); // before the window
    let inside = service.create(log_at(12)).unwrap();
    service.create(log_at(20)).unwrap(); // after the window

    let found = service
        .get_logs_between_dates(
            Utc.with_ymd_and_hms(2026, 5, 10, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 5, 10, 15, 0, 0).unwrap(),
        )
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, inside.id);
}

#[test]
fn audit_log_get_all_lists_chronologically_not_by_insertion() {
    let service = AuditLogService::new(InMemoryRepository::new());
    let log_at = |h: u32, action: &str| AuditLogRequest {
        actor: "system".into(),
        action: action.into(),
        detail: String::new(),
        logged_at: Utc.with_ymd_and_hms(2026, 5, 10, h, 0, 0).unwrap(),
    };
    // Inserted out of event order on purpose: the later event first.
    service.create(log_at(14, "later-event")).unwrap();
    service.create(log_at(9, "earlier-event")).unwrap();

    let actions: Vec<String> = service
        .get_all()
        .unwrap()
        .into_iter()
        .map(|l| l.action)
        .collect();
    assert_eq!(actions, vec!["earlier-event", "later-event"]);
}

#[test]
fn non_finite_distance_is_rejected_everywhere() {
    let service = RouteService::new(InMemoryRepository::new());
    let err = service
        .create(RouteRequest {
            name: "North loop".into(),
            origin: "Leeds".into(),
            destination: "York".into(),
            distance_km: f64::NAN,
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = service.find_with_distance_greater_than(f64::NAN).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test]
fn storages_with_min_distinct_goods_counts_per_storage() {
    let storages = Arc::new(InMemoryRepository::new());
    let supplies = Arc::new(InMemoryRepository::new());
    let storage_service = StorageService::new(Arc::clone(&storages));
    let supply_service = SupplyService::new(Arc::clone(&supplies));
    let queries = StorageQueryService::new(storages, supplies);

    let stocked = storage_service
        .create(storage_req("North", "Leeds", StorageType::Dry, 100))
        .unwrap();
    let sparse = storage_service
        .create(storage_req("South", "York", StorageType::Dry, 100))
        .unwrap();

    let delivered = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
    for goods in ["rice", "flour", "salt"] {
        supply_service
            .create(SupplyRequest {
                storage_id: stocked.id,
                goods_name: goods.into(),
                quantity: 10,
                delivered_on: delivered,
            })
            .unwrap();
    }
    supply_service
        .create(SupplyRequest {
            storage_id: sparse.id,
            goods_name: "rice".into(),
            quantity: 10,
            delivered_on: delivered,
        })
        .unwrap();

    let found = queries.storages_with_min_distinct_goods(2).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, stocked.id);
}
