use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::entity::{require_non_negative, require_positive, require_text, Entity};
use crate::errors::ServiceError;

// ── Product ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: BigDecimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub sku: String,
    pub category: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: BigDecimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: BigDecimal,
}

impl Entity for Product {
    type Request = ProductRequest;
    type Response = ProductResponse;

    const NAME: &'static str = "Product";

    fn from_request(id: i64, req: ProductRequest) -> Result<Self, ServiceError> {
        Ok(Product {
            id,
            name: require_text("name", &req.name)?,
            sku: require_text("sku", &req.sku)?,
            category: require_text("category", &req.category)?,
            price: require_non_negative("price", req.price)?,
        })
    }

    fn to_response(&self) -> ProductResponse {
        ProductResponse {
            id: self.id,
            name: self.name.clone(),
            sku: self.sku.clone(),
            category: self.category.clone(),
            price: self.price.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.sku == other.sku
    }
}

// ── RawMaterial ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterial {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub unit_cost: BigDecimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMaterialRequest {
    pub name: String,
    pub unit: String,
    pub unit_cost: BigDecimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct RawMaterialResponse {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub unit_cost: BigDecimal,
}

impl Entity for RawMaterial {
    type Request = RawMaterialRequest;
    type Response = RawMaterialResponse;

    const NAME: &'static str = "RawMaterial";

    fn from_request(id: i64, req: RawMaterialRequest) -> Result<Self, ServiceError> {
        Ok(RawMaterial {
            id,
            name: require_text("name", &req.name)?,
            unit: require_text("unit", &req.unit)?,
            unit_cost: require_non_negative("unit_cost", req.unit_cost)?,
        })
    }

    fn to_response(&self) -> RawMaterialResponse {
        RawMaterialResponse {
            id: self.id,
            name: self.name.clone(),
            unit: self.unit.clone(),
            unit_cost: self.unit_cost.clone(),
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

// ── BillOfMaterials ──────────────────────────────────────────────────────────

/// One component line of a product's bill of materials. Parent and
/// component references are foreign keys resolved by the persistence tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub id: i64,
    pub parent_product_id: i64,
    pub component_product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BillOfMaterialsRequest {
    pub parent_product_id: i64,
    pub component_product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillOfMaterialsResponse {
    pub id: i64,
    pub parent_product_id: i64,
    pub component_product_id: i64,
    pub quantity: i32,
}

impl Entity for BillOfMaterials {
    type Request = BillOfMaterialsRequest;
    type Response = BillOfMaterialsResponse;

    const NAME: &'static str = "BillOfMaterials";

    fn from_request(id: i64, req: BillOfMaterialsRequest) -> Result<Self, ServiceError> {
        if req.parent_product_id == req.component_product_id {
            return Err(ServiceError::validation(
                "a product cannot be a component of itself",
            ));
        }
        Ok(BillOfMaterials {
            id,
            parent_product_id: req.parent_product_id,
            component_product_id: req.component_product_id,
            quantity: require_positive("quantity", req.quantity)?,
        })
    }

    fn to_response(&self) -> BillOfMaterialsResponse {
        BillOfMaterialsResponse {
            id: self.id,
            parent_product_id: self.parent_product_id,
            component_product_id: self.component_product_id,
            quantity: self.quantity,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
