use bigdecimal::BigDecimal;

use super::service::{check_threshold, contains_ci, EntityService};
use crate::domain::catalog::{
    BillOfMaterials, BillOfMaterialsResponse, Product, ProductResponse, RawMaterial,
    RawMaterialResponse,
};
use crate::domain::ports::Repository;
use crate::errors::ServiceError;

pub type ProductService<R> = EntityService<Product, R>;
pub type RawMaterialService<R> = EntityService<RawMaterial, R>;
pub type BillOfMaterialsService<R> = EntityService<BillOfMaterials, R>;

impl<R: Repository<Product>> EntityService<Product, R> {
    pub fn find_by_category(&self, category: &str) -> Result<Vec<ProductResponse>, ServiceError> {
        self.find_where(|p| p.category == category)
    }

    pub fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        self.find_where(|p| contains_ci(&p.name, fragment))
    }

    /// Exact SKU lookup; SKUs are unique so at most one product matches.
    pub fn find_by_sku(&self, sku: &str) -> Result<Option<ProductResponse>, ServiceError> {
        self.find_one_where(|p| p.sku == sku)
    }

    pub fn find_with_price_greater_than(
        &self,
        threshold: BigDecimal,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        check_threshold("price", &threshold)?;
        self.find_where(|p| p.price > threshold)
    }
}

impl<R: Repository<RawMaterial>> EntityService<RawMaterial, R> {
    pub fn find_by_name(&self, name: &str) -> Result<Vec<RawMaterialResponse>, ServiceError> {
        self.find_where(|m| contains_ci(&m.name, name))
    }
}

impl<R: Repository<BillOfMaterials>> EntityService<BillOfMaterials, R> {
    /// All component lines of one parent product.
    pub fn find_by_parent_product(
        &self,
        parent_product_id: i64,
    ) -> Result<Vec<BillOfMaterialsResponse>, ServiceError> {
        self.find_where(|b| b.parent_product_id == parent_product_id)
    }
}
