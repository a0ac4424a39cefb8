use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::service::{check_threshold, contains_ci, EntityService};
use crate::domain::ports::Repository;
use crate::domain::sales::{
    ItemSales, ItemSalesResponse, OrderStatus, Payment, PaymentResponse, PaymentStatus,
    SalesOrder, SalesOrderResponse,
};
use crate::errors::ServiceError;

pub type SalesOrderService<R> = EntityService<SalesOrder, R>;
pub type ItemSalesService<R> = EntityService<ItemSales, R>;
pub type PaymentService<R> = EntityService<Payment, R>;

impl<R: Repository<SalesOrder>> EntityService<SalesOrder, R> {
    pub fn find_by_customer(
        &self,
        customer: &str,
    ) -> Result<Vec<SalesOrderResponse>, ServiceError> {
        self.find_where(|o| contains_ci(&o.customer_name, customer))
    }

    pub fn find_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<SalesOrderResponse>, ServiceError> {
        self.find_where(|o| o.status == status)
    }

    /// Orders placed inside `[from, to]`, bounds inclusive.
    pub fn find_placed_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<SalesOrderResponse>, ServiceError> {
        self.find_where(|o| o.placed_at >= from && o.placed_at <= to)
    }
}

impl<R: Repository<ItemSales>> EntityService<ItemSales, R> {
    /// All lines of one sales order.
    pub fn find_by_order(&self, sales_order_id: i64) -> Result<Vec<ItemSalesResponse>, ServiceError> {
        self.find_where(|i| i.sales_order_id == sales_order_id)
    }
}

impl<R: Repository<Payment>> EntityService<Payment, R> {
    pub fn find_by_order(&self, sales_order_id: i64) -> Result<Vec<PaymentResponse>, ServiceError> {
        self.find_where(|p| p.sales_order_id == sales_order_id)
    }

    pub fn find_by_status(
        &self,
        status: PaymentStatus,
    ) -> Result<Vec<PaymentResponse>, ServiceError> {
        self.find_where(|p| p.status == status)
    }

    pub fn find_with_amount_greater_than(
        &self,
        threshold: BigDecimal,
    ) -> Result<Vec<PaymentResponse>, ServiceError> {
        check_threshold("amount", &threshold)?;
        self.find_where(|p| p.amount > threshold)
    }

    pub fn find_paid_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<PaymentResponse>, ServiceError> {
        self.find_where(|p| p.paid_at >= from && p.paid_at <= to)
    }
}
