//! Service-contract layer of an ERP backend: inventory, procurement, sales,
//! fleet, audit trails, documents, and system settings.
//!
//! Every entity shares one generic CRUD/query contract
//! ([`application::service::EntityService`]) instantiated over the
//! [`domain::ports::Repository`] port, with per-entity finders layered on
//! top. Persistence and the HTTP surface are external collaborators;
//! [`infrastructure::memory`] ships reference adapters used by the tests.

pub mod application;
pub mod domain;
pub mod errors;
pub mod infrastructure;

pub use application::service::EntityService;
pub use domain::entity::Entity;
pub use domain::ports::{BlobStore, Mailer, Repository};
pub use errors::ServiceError;
pub use infrastructure::memory::{InMemoryBlobStore, InMemoryRepository, LoggingMailer};
