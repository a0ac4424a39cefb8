//! Contract tests for the generic entity service: round-trips, absence
//! handling, overwrite semantics, and all-or-nothing bulk operations.

use bigdecimal::BigDecimal;
use chrono::{TimeZone, Utc};

use erp_service::application::fleet::{DriverService, VehicleService};
use erp_service::application::procurement::VendorService;
use erp_service::application::sales::SalesOrderService;
use erp_service::domain::fleet::{DriverRequest, VehicleRequest};
use erp_service::domain::procurement::VendorRequest;
use erp_service::domain::sales::{OrderStatus, SalesOrderRequest};
use erp_service::{InMemoryRepository, ServiceError};

fn driver_req(name: &str, phone: &str, license: &str) -> DriverRequest {
    DriverRequest {
        name: name.into(),
        phone: phone.into(),
        license_number: license.into(),
    }
}

fn vendor_req(name: &str, email: &str) -> VendorRequest {
    VendorRequest {
        name: name.into(),
        email: email.into(),
        address: "1 Depot Rd".into(),
    }
}

#[test]
fn create_then_get_round_trips() {
    let service = DriverService::new(InMemoryRepository::new());
    let created = service.create(driver_req("Ana", "555-0100", "L-77")).unwrap();
    assert_ne!(created.id, 0);
    assert_eq!(created.name, "Ana");

    let fetched = service.get(created.id).unwrap().expect("driver exists");
    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.phone, "555-0100");
    assert_eq!(fetched.license_number, "L-77");
}

#[test]
fn get_absent_is_none_not_error() {
    let service = DriverService::new(InMemoryRepository::new());
    assert!(service.get(123).unwrap().is_none());
}

#[test]
fn delete_then_get_yields_absent() {
    let service = DriverService::new(InMemoryRepository::new());
    let created = service.create(driver_req("Ana", "555-0100", "L-77")).unwrap();
    service.delete(created.id).unwrap();
    assert!(service.get(created.id).unwrap().is_none());
}

#[test]
fn delete_nonexistent_vehicle_is_not_found() {
    let service = VehicleService::new(InMemoryRepository::new());
    let err = service.delete(9999).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Vehicle with id 9999 not found");
}

#[test]
fn update_overwrites_all_mutable_fields_and_keeps_identity() {
    let service = DriverService::new(InMemoryRepository::new());
    let created = service.create(driver_req("Ana", "555-0100", "L-77")).unwrap();

    let updated = service
        .update(created.id, driver_req("Ana Souza", "555-0199", "L-77"))
        .unwrap();
    assert_eq!(updated.id, created.id);

    let fetched = service.get(created.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Ana Souza");
    assert_eq!(fetched.phone, "555-0199");
}

#[test]
fn update_absent_is_not_found() {
    let service = DriverService::new(InMemoryRepository::new());
    let err = service
        .update(42, driver_req("Ana", "555-0100", "L-77"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn create_rejects_blank_required_fields() {
    let service = DriverService::new(InMemoryRepository::new());
    let err = service.create(driver_req("  ", "555-0100", "L-77")).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test]
fn duplicate_vendor_email_conflicts() {
    let service = VendorService::new(InMemoryRepository::new());
    service
        .create(vendor_req("Acme", "sales@acme.test"))
        .unwrap();
    let err = service
        .create(vendor_req("Acme Two", "sales@acme.test"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test]
fn create_all_aborts_whole_batch_on_one_bad_item() {
    let service = VehicleService::new(InMemoryRepository::new());
    let reqs = vec![
        VehicleRequest {
            plate_number: "AB-123".into(),
            model: "Sprinter".into(),
            capacity_kg: 1200,
            driver_id: None,
        },
        VehicleRequest {
            plate_number: "AB-123".into(), // duplicate plate
            model: "Transit".into(),
            capacity_kg: 900,
            driver_id: None,
        },
    ];
    assert!(service.create_all(reqs).is_err());
    assert!(service.get_all().unwrap().is_empty());
}

#[test]
fn delete_all_aborts_when_one_id_is_missing() {
    let service = DriverService::new(InMemoryRepository::new());
    let kept = service.create(driver_req("Ana", "555-0100", "L-1")).unwrap();
    let err = service.delete_all(&[kept.id, 4242]).unwrap_err();
    assert!(err.is_not_found());
    assert!(service.get(kept.id).unwrap().is_some());
}

#[test]
fn get_all_preserves_creation_order() {
    let service = DriverService::new(InMemoryRepository::new());
    service.create(driver_req("Ana", "555-0100", "L-1")).unwrap();
    service.create(driver_req("Bo", "555-0101", "L-2")).unwrap();
    service.create(driver_req("Cy", "555-0102", "L-3")).unwrap();

    let names: Vec<String> = service
        .get_all()
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Ana", "Bo", "Cy"]);
}

#[test]
fn sales_order_response_carries_derived_order_number() {
    let service = SalesOrderService::new(InMemoryRepository::new());
    let created = service
        .create(SalesOrderRequest {
            customer_name: "Globex".into(),
            placed_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            status: OrderStatus::Pending,
            total: BigDecimal::from(250),
        })
        .unwrap();
    assert_eq!(created.order_number, format!("SO-{:06}", created.id));
}
