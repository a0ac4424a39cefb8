use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{require_non_negative, require_text, Entity};
use crate::errors::ServiceError;

// ── Storage ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageType {
    Refrigerated,
    Dry,
    Hazardous,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storage {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub storage_type: StorageType,
    pub capacity: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageRequest {
    pub name: String,
    pub location: String,
    pub storage_type: StorageType,
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageResponse {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub storage_type: StorageType,
    pub capacity: i32,
}

impl Entity for Storage {
    type Request = StorageRequest;
    type Response = StorageResponse;

    const NAME: &'static str = "Storage";

    fn from_request(id: i64, req: StorageRequest) -> Result<Self, ServiceError> {
        Ok(Storage {
            id,
            name: require_text("name", &req.name)?,
            location: require_text("location", &req.location)?,
            storage_type: req.storage_type,
            capacity: require_non_negative("capacity", req.capacity)?,
        })
    }

    fn to_response(&self) -> StorageResponse {
        StorageResponse {
            id: self.id,
            name: self.name.clone(),
            location: self.location.clone(),
            storage_type: self.storage_type,
            capacity: self.capacity,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ── Supply ───────────────────────────────────────────────────────────────────

/// One kind of goods held in a storage. The storage reference is a foreign
/// key resolved by the persistence tier, not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supply {
    pub id: i64,
    pub storage_id: i64,
    pub goods_name: String,
    pub quantity: i32,
    pub delivered_on: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupplyRequest {
    pub storage_id: i64,
    pub goods_name: String,
    pub quantity: i32,
    pub delivered_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplyResponse {
    pub id: i64,
    pub storage_id: i64,
    pub goods_name: String,
    pub quantity: i32,
    pub delivered_on: NaiveDate,
}

impl Entity for Supply {
    type Request = SupplyRequest;
    type Response = SupplyResponse;

    const NAME: &'static str = "Supply";

    fn from_request(id: i64, req: SupplyRequest) -> Result<Self, ServiceError> {
        Ok(Supply {
            id,
            storage_id: req.storage_id,
            goods_name: require_text("goods_name", &req.goods_name)?,
            quantity: require_non_negative("quantity", req.quantity)?,
            delivered_on: req.delivered_on,
        })
    }

    fn to_response(&self) -> SupplyResponse {
        SupplyResponse {
            id: self.id,
            storage_id: self.storage_id,
            goods_name: self.goods_name.clone(),
            quantity: self.quantity,
            delivered_on: self.delivered_on,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ── InventoryItem ────────────────────────────────────────────────────────────

/// A reconciliation row: recorded stock versus the last physical count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub product_id: i64,
    pub recorded_quantity: i32,
    pub counted_quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItemRequest {
    pub product_id: i64,
    pub recorded_quantity: i32,
    pub counted_quantity: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub recorded_quantity: i32,
    pub counted_quantity: i32,
    /// Absolute difference between recorded and counted stock.
    pub difference: i32,
}

impl InventoryItem {
    pub fn difference(&self) -> i32 {
        (self.recorded_quantity - self.counted_quantity).abs()
    }
}

impl Entity for InventoryItem {
    type Request = InventoryItemRequest;
    type Response = InventoryItemResponse;

    const NAME: &'static str = "InventoryItem";

    fn from_request(id: i64, req: InventoryItemRequest) -> Result<Self, ServiceError> {
        Ok(InventoryItem {
            id,
            product_id: req.product_id,
            recorded_quantity: require_non_negative("recorded_quantity", req.recorded_quantity)?,
            counted_quantity: require_non_negative("counted_quantity", req.counted_quantity)?,
        })
    }

    fn to_response(&self) -> InventoryItemResponse {
        InventoryItemResponse {
            id: self.id,
            product_id: self.product_id,
            recorded_quantity: self.recorded_quantity,
            counted_quantity: self.counted_quantity,
            difference: self.difference(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
