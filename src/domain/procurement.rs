use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{require_non_negative, require_positive, require_text, Entity};
use crate::errors::ServiceError;

// ── Vendor ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VendorRequest {
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
}

impl Entity for Vendor {
    type Request = VendorRequest;
    type Response = VendorResponse;

    const NAME: &'static str = "Vendor";

    fn from_request(id: i64, req: VendorRequest) -> Result<Self, ServiceError> {
        let email = require_text("email", &req.email)?;
        if !email.contains('@') {
            return Err(ServiceError::validation(format!(
                "email '{email}' is not a valid address"
            )));
        }
        Ok(Vendor {
            id,
            name: require_text("name", &req.name)?,
            email,
            address: require_text("address", &req.address)?,
        })
    }

    fn to_response(&self) -> VendorResponse {
        VendorResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.email == other.email || self.name == other.name
    }
}

// ── Procurement ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcurementStatus {
    Draft,
    Ordered,
    Received,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Procurement {
    pub id: i64,
    pub vendor_id: i64,
    pub raw_material_id: i64,
    pub quantity: i32,
    pub total_cost: BigDecimal,
    pub ordered_on: NaiveDate,
    pub status: ProcurementStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcurementRequest {
    pub vendor_id: i64,
    pub raw_material_id: i64,
    pub quantity: i32,
    pub total_cost: BigDecimal,
    pub ordered_on: NaiveDate,
    pub status: ProcurementStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcurementResponse {
    pub id: i64,
    pub vendor_id: i64,
    pub raw_material_id: i64,
    pub quantity: i32,
    pub total_cost: BigDecimal,
    pub ordered_on: NaiveDate,
    pub status: ProcurementStatus,
}

impl Entity for Procurement {
    type Request = ProcurementRequest;
    type Response = ProcurementResponse;

    const NAME: &'static str = "Procurement";

    fn from_request(id: i64, req: ProcurementRequest) -> Result<Self, ServiceError> {
        Ok(Procurement {
            id,
            vendor_id: req.vendor_id,
            raw_material_id: req.raw_material_id,
            quantity: require_positive("quantity", req.quantity)?,
            total_cost: require_non_negative("total_cost", req.total_cost)?,
            ordered_on: req.ordered_on,
            status: req.status,
        })
    }

    fn to_response(&self) -> ProcurementResponse {
        ProcurementResponse {
            id: self.id,
            vendor_id: self.vendor_id,
            raw_material_id: self.raw_material_id,
            quantity: self.quantity,
            total_cost: self.total_cost.clone(),
            ordered_on: self.ordered_on,
            status: self.status,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ── InboundDelivery ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Scheduled,
    InTransit,
    Delivered,
    Delayed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundDelivery {
    pub id: i64,
    pub procurement_id: i64,
    pub logistics_provider_id: Option<i64>,
    pub expected_on: NaiveDate,
    pub received_on: Option<NaiveDate>,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundDeliveryRequest {
    pub procurement_id: i64,
    pub logistics_provider_id: Option<i64>,
    pub expected_on: NaiveDate,
    pub received_on: Option<NaiveDate>,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct InboundDeliveryResponse {
    pub id: i64,
    pub procurement_id: i64,
    pub logistics_provider_id: Option<i64>,
    pub expected_on: NaiveDate,
    pub received_on: Option<NaiveDate>,
    pub status: DeliveryStatus,
}

impl Entity for InboundDelivery {
    type Request = InboundDeliveryRequest;
    type Response = InboundDeliveryResponse;

    const NAME: &'static str = "InboundDelivery";

    fn from_request(id: i64, req: InboundDeliveryRequest) -> Result<Self, ServiceError> {
        Ok(InboundDelivery {
            id,
            procurement_id: req.procurement_id,
            logistics_provider_id: req.logistics_provider_id,
            expected_on: req.expected_on,
            received_on: req.received_on,
            status: req.status,
        })
    }

    fn to_response(&self) -> InboundDeliveryResponse {
        InboundDeliveryResponse {
            id: self.id,
            procurement_id: self.procurement_id,
            logistics_provider_id: self.logistics_provider_id,
            expected_on: self.expected_on,
            received_on: self.received_on,
            status: self.status,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ── LogisticsProvider ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticsProvider {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogisticsProviderRequest {
    pub name: String,
    pub contact_email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogisticsProviderResponse {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
    pub phone: String,
}

impl Entity for LogisticsProvider {
    type Request = LogisticsProviderRequest;
    type Response = LogisticsProviderResponse;

    const NAME: &'static str = "LogisticsProvider";

    fn from_request(id: i64, req: LogisticsProviderRequest) -> Result<Self, ServiceError> {
        Ok(LogisticsProvider {
            id,
            name: require_text("name", &req.name)?,
            contact_email: require_text("contact_email", &req.contact_email)?,
            phone: require_text("phone", &req.phone)?,
        })
    }

    fn to_response(&self) -> LogisticsProviderResponse {
        LogisticsProviderResponse {
            id: self.id,
            name: self.name.clone(),
            contact_email: self.contact_email.clone(),
            phone: self.phone.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
