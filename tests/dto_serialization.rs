//! Wire-format tests: requests parse from the JSON a presentation layer
//! would post, and responses serialize with their derived display fields
//! and string-encoded decimals.

use bigdecimal::BigDecimal;
use chrono::{TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

use erp_service::application::audit::TransactionAuditService;
use erp_service::application::inventory::StorageService;
use erp_service::application::sales::SalesOrderService;
use erp_service::domain::audit::TransactionAuditRequest;
use erp_service::domain::inventory::{StorageRequest, StorageType};
use erp_service::domain::sales::{OrderStatus, SalesOrderRequest};
use erp_service::InMemoryRepository;

#[test]
fn storage_request_parses_from_wire_json() {
    let req: StorageRequest = serde_json::from_value(json!({
        "name": "North",
        "location": "Leeds",
        "storage_type": "Refrigerated",
        "capacity": 100
    }))
    .unwrap();
    assert_eq!(req.storage_type, StorageType::Refrigerated);

    let service = StorageService::new(InMemoryRepository::new());
    let created = service.create(req).unwrap();
    assert_eq!(created.capacity, 100);
}

#[test]
fn sales_order_response_serializes_order_number_and_decimal_total() {
    let service = SalesOrderService::new(InMemoryRepository::new());
    let created = service
        .create(SalesOrderRequest {
            customer_name: "Globex".into(),
            placed_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            status: OrderStatus::Pending,
            total: "249.90".parse::<BigDecimal>().unwrap(),
        })
        .unwrap();

    let value = serde_json::to_value(&created).unwrap();
    assert_eq!(value["order_number"], "SO-000001");
    assert_eq!(value["status"], "Pending");
    // Decimals cross the wire as strings, never as floats.
    assert_eq!(value["total"], "249.90");
}

#[test]
fn transaction_audit_keeps_structured_payload() {
    let service = TransactionAuditService::new(InMemoryRepository::new());
    let created = service
        .create(TransactionAuditRequest {
            transaction_id: Uuid::new_v4(),
            entity_name: "SalesOrder".into(),
            operation: "update".into(),
            payload: json!({ "status": "Shipped", "total": "249.90" }),
            performed_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
        })
        .unwrap();

    let fetched = service.get(created.id).unwrap().unwrap();
    assert_eq!(fetched.payload["status"], "Shipped");
}
