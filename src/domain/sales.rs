use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{require_non_negative, require_positive, require_text, Entity};
use crate::errors::ServiceError;

// ── SalesOrder ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Closed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: i64,
    pub customer_name: String,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalesOrderRequest {
    pub customer_name: String,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalesOrderResponse {
    pub id: i64,
    /// Display string derived from the id, e.g. "SO-000042".
    pub order_number: String,
    pub customer_name: String,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: BigDecimal,
}

impl SalesOrder {
    pub fn order_number(&self) -> String {
        format!("SO-{:06}", self.id)
    }
}

impl Entity for SalesOrder {
    type Request = SalesOrderRequest;
    type Response = SalesOrderResponse;

    const NAME: &'static str = "SalesOrder";

    fn from_request(id: i64, req: SalesOrderRequest) -> Result<Self, ServiceError> {
        Ok(SalesOrder {
            id,
            customer_name: require_text("customer_name", &req.customer_name)?,
            placed_at: req.placed_at,
            status: req.status,
            total: require_non_negative("total", req.total)?,
        })
    }

    fn to_response(&self) -> SalesOrderResponse {
        SalesOrderResponse {
            id: self.id,
            order_number: self.order_number(),
            customer_name: self.customer_name.clone(),
            placed_at: self.placed_at,
            status: self.status,
            total: self.total.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ── ItemSales ────────────────────────────────────────────────────────────────

/// One line of a sales order: the goods sold and at what price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSales {
    pub id: i64,
    pub sales_order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemSalesRequest {
    pub sales_order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemSalesResponse {
    pub id: i64,
    pub sales_order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

impl Entity for ItemSales {
    type Request = ItemSalesRequest;
    type Response = ItemSalesResponse;

    const NAME: &'static str = "ItemSales";

    fn from_request(id: i64, req: ItemSalesRequest) -> Result<Self, ServiceError> {
        Ok(ItemSales {
            id,
            sales_order_id: req.sales_order_id,
            product_id: req.product_id,
            quantity: require_positive("quantity", req.quantity)?,
            unit_price: require_non_negative("unit_price", req.unit_price)?,
        })
    }

    fn to_response(&self) -> ItemSalesResponse {
        ItemSalesResponse {
            id: self.id,
            sales_order_id: self.sales_order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ── Payment ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub sales_order_id: i64,
    pub amount: BigDecimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub sales_order_id: i64,
    pub amount: BigDecimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub sales_order_id: i64,
    pub amount: BigDecimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

impl Entity for Payment {
    type Request = PaymentRequest;
    type Response = PaymentResponse;

    const NAME: &'static str = "Payment";

    fn from_request(id: i64, req: PaymentRequest) -> Result<Self, ServiceError> {
        Ok(Payment {
            id,
            sales_order_id: req.sales_order_id,
            amount: require_non_negative("amount", req.amount)?,
            method: req.method,
            status: req.status,
            paid_at: req.paid_at,
        })
    }

    fn to_response(&self) -> PaymentResponse {
        PaymentResponse {
            id: self.id,
            sales_order_id: self.sales_order_id,
            amount: self.amount.clone(),
            method: self.method,
            status: self.status,
            paid_at: self.paid_at,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
