//! Boundary tests: confirmation-document upload/download, report artifact
//! generation, and asynchronous mail dispatch.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use erp_service::application::audit::AuditLogService;
use erp_service::application::documents::DocumentService;
use erp_service::application::mailer::MailDispatcher;
use erp_service::application::reports::{ReportRequest, ReportService};
use erp_service::domain::audit::AuditLogRequest;
use erp_service::domain::mail::EmailMessage;
use erp_service::{InMemoryBlobStore, InMemoryRepository, LoggingMailer, ServiceError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn document_upload_download_round_trip() {
    init_logging();
    let service = DocumentService::new(InMemoryRepository::new(), InMemoryBlobStore::new());
    let uploaded = service
        .upload(7, "delivery-note.pdf", b"%PDF-1.7 ...".to_vec())
        .unwrap();
    assert_eq!(uploaded.sales_order_id, 7);
    assert_eq!(uploaded.file_name, "delivery-note.pdf");
    assert_eq!(uploaded.size_bytes, 12);

    let bytes = service.download(uploaded.id).unwrap();
    assert_eq!(bytes, b"%PDF-1.7 ...");

    let for_order = service.find_by_order(7).unwrap();
    assert_eq!(for_order.len(), 1);
}

#[test]
fn download_unknown_document_is_not_found() {
    let service = DocumentService::new(InMemoryRepository::new(), InMemoryBlobStore::new());
    let err = service.download(404).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn deleted_document_loses_its_bytes() {
    let service = DocumentService::new(InMemoryRepository::new(), InMemoryBlobStore::new());
    let uploaded = service.upload(7, "note.pdf", b"bytes".to_vec()).unwrap();
    service.delete(uploaded.id).unwrap();
    assert!(service.get(uploaded.id).unwrap().is_none());
    assert!(service.download(uploaded.id).unwrap_err().is_not_found());
}

#[test]
fn report_describes_artifact_and_download_returns_csv() {
    let logs = Arc::new(InMemoryRepository::new());
    let log_service = AuditLogService::new(Arc::clone(&logs));
    log_service
        .create(AuditLogRequest {
            actor: "ana".into(),
            action: "stock-count".into(),
            detail: "warehouse North".into(),
            logged_at: Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap(),
        })
        .unwrap();

    let reports = ReportService::new(logs, InMemoryBlobStore::new());
    let report = reports
        .generate(ReportRequest {
            title: "June activity".into(),
            from: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
            to: Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).unwrap(),
        })
        .unwrap();
    assert_eq!(report.row_count, 1);
    assert!(report.size_bytes > 0);

    let csv = String::from_utf8(reports.download(report.artifact_id).unwrap()).unwrap();
    assert!(csv.starts_with("logged_at,actor,action,detail"));
    assert!(csv.contains("ana,stock-count"));
}

#[test]
fn csv_columns_survive_commas_in_any_text_field() {
    let logs = Arc::new(InMemoryRepository::new());
    let log_service = AuditLogService::new(Arc::clone(&logs));
    log_service
        .create(AuditLogRequest {
            actor: "Souza, Ana".into(),
            action: "stock-count, recount".into(),
            detail: "North,\nsecond pass".into(),
            logged_at: Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap(),
        })
        .unwrap();

    let reports = ReportService::new(logs, InMemoryBlobStore::new());
    let report = reports
        .generate(ReportRequest {
            title: "June activity".into(),
            from: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
            to: Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).unwrap(),
        })
        .unwrap();

    let csv = String::from_utf8(reports.download(report.artifact_id).unwrap()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    // Four columns per row, no matter what the free text contained.
    for line in lines {
        assert_eq!(line.matches(',').count(), 3, "misaligned row: {line}");
    }
}

#[test]
fn report_with_inverted_range_is_rejected() {
    let reports = ReportService::new(
        InMemoryRepository::new(),
        InMemoryBlobStore::new(),
    );
    let err = reports
        .generate(ReportRequest {
            title: "backwards".into(),
            from: Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).unwrap(),
            to: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[test]
fn download_unknown_artifact_is_io_error() {
    let reports = ReportService::new(
        InMemoryRepository::new(),
        InMemoryBlobStore::new(),
    );
    let err = reports.download(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, ServiceError::Io(_)));
}

#[tokio::test]
async fn mail_send_returns_before_delivery_and_handle_observes_outcome() {
    init_logging();
    let mailer = Arc::new(LoggingMailer::new());
    let dispatcher = MailDispatcher::new(Arc::clone(&mailer));

    let handle = dispatcher
        .send(
            EmailMessage::new("ops@erp.test", "Delivery delayed", "Truck AB-123 is late.")
                .with_attachment("manifest.csv", b"route,eta\n".to_vec()),
        )
        .expect("message accepted for sending");

    // Awaiting the handle is optional for callers; here we use it to
    // observe completion.
    handle.await.unwrap().unwrap();

    let delivered = mailer.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].to, "ops@erp.test");
    assert_eq!(
        delivered[0].attachment.as_ref().unwrap().file_name,
        "manifest.csv"
    );
}

#[tokio::test]
async fn mail_with_invalid_recipient_is_rejected_synchronously() {
    let dispatcher = MailDispatcher::new(LoggingMailer::new());
    let err = dispatcher
        .send(EmailMessage::new("not-an-address", "subj", "body"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}
