use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use super::service::{check_threshold, contains_ci, EntityService};
use crate::domain::ports::Repository;
use crate::domain::procurement::{
    DeliveryStatus, InboundDelivery, InboundDeliveryResponse, LogisticsProvider,
    LogisticsProviderResponse, Procurement, ProcurementResponse, Vendor, VendorResponse,
};
use crate::errors::ServiceError;

pub type VendorService<R> = EntityService<Vendor, R>;
pub type ProcurementService<R> = EntityService<Procurement, R>;
pub type InboundDeliveryService<R> = EntityService<InboundDelivery, R>;
pub type LogisticsProviderService<R> = EntityService<LogisticsProvider, R>;

impl<R: Repository<Vendor>> EntityService<Vendor, R> {
    /// Exact email lookup; emails are unique so at most one vendor matches.
    pub fn find_by_email(&self, email: &str) -> Result<Option<VendorResponse>, ServiceError> {
        self.find_one_where(|v| v.email == email)
    }

    pub fn find_by_name(&self, name: &str) -> Result<Vec<VendorResponse>, ServiceError> {
        self.find_where(|v| contains_ci(&v.name, name))
    }
}

impl<R: Repository<Procurement>> EntityService<Procurement, R> {
    pub fn find_by_vendor(&self, vendor_id: i64) -> Result<Vec<ProcurementResponse>, ServiceError> {
        self.find_where(|p| p.vendor_id == vendor_id)
    }

    /// Procurements ordered inside `[from, to]`, bounds inclusive.
    pub fn find_ordered_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ProcurementResponse>, ServiceError> {
        self.find_where(|p| p.ordered_on >= from && p.ordered_on <= to)
    }

    pub fn find_with_cost_greater_than(
        &self,
        threshold: BigDecimal,
    ) -> Result<Vec<ProcurementResponse>, ServiceError> {
        check_threshold("total_cost", &threshold)?;
        self.find_where(|p| p.total_cost > threshold)
    }
}

impl<R: Repository<InboundDelivery>> EntityService<InboundDelivery, R> {
    pub fn find_by_status(
        &self,
        status: DeliveryStatus,
    ) -> Result<Vec<InboundDeliveryResponse>, ServiceError> {
        self.find_where(|d| d.status == status)
    }

    pub fn find_expected_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<InboundDeliveryResponse>, ServiceError> {
        self.find_where(|d| d.expected_on >= from && d.expected_on <= to)
    }
}

impl<R: Repository<LogisticsProvider>> EntityService<LogisticsProvider, R> {
    pub fn find_by_name(&self, name: &str) -> Result<Vec<LogisticsProviderResponse>, ServiceError> {
        self.find_where(|p| contains_ci(&p.name, name))
    }
}
