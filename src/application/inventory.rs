use std::collections::HashSet;

use super::service::{check_threshold, contains_ci, EntityService};
use crate::domain::entity::Entity;
use crate::domain::inventory::{
    InventoryItem, InventoryItemResponse, Storage, StorageResponse, StorageType, Supply,
    SupplyResponse,
};
use crate::domain::ports::Repository;
use crate::errors::ServiceError;

pub type StorageService<R> = EntityService<Storage, R>;
pub type SupplyService<R> = EntityService<Supply, R>;
pub type InventoryItemService<R> = EntityService<InventoryItem, R>;

impl<R: Repository<Storage>> EntityService<Storage, R> {
    pub fn get_by_name(&self, name: &str) -> Result<Vec<StorageResponse>, ServiceError> {
        self.find_where(|s| s.name == name)
    }

    pub fn get_by_location(&self, location: &str) -> Result<Vec<StorageResponse>, ServiceError> {
        self.find_where(|s| s.location == location)
    }

    /// Conjunctive filter: exactly the intersection of `get_by_name` and
    /// `get_by_location`.
    pub fn get_by_name_and_location(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Vec<StorageResponse>, ServiceError> {
        self.find_where(|s| s.name == name && s.location == location)
    }

    pub fn get_by_type(
        &self,
        storage_type: StorageType,
    ) -> Result<Vec<StorageResponse>, ServiceError> {
        self.find_where(|s| s.storage_type == storage_type)
    }

    pub fn get_by_type_and_capacity_greater_than(
        &self,
        storage_type: StorageType,
        min_capacity: i32,
    ) -> Result<Vec<StorageResponse>, ServiceError> {
        check_threshold("capacity", &min_capacity)?;
        self.find_where(|s| s.storage_type == storage_type && s.capacity > min_capacity)
    }
}

impl<R: Repository<Supply>> EntityService<Supply, R> {
    pub fn find_by_storage(&self, storage_id: i64) -> Result<Vec<SupplyResponse>, ServiceError> {
        self.find_where(|s| s.storage_id == storage_id)
    }

    pub fn find_by_goods_name(&self, goods: &str) -> Result<Vec<SupplyResponse>, ServiceError> {
        self.find_where(|s| contains_ci(&s.goods_name, goods))
    }
}

impl<R: Repository<InventoryItem>> EntityService<InventoryItem, R> {
    /// Reconciliation rows whose recorded/counted difference exceeds the
    /// caller-supplied threshold. Lower thresholds return supersets of
    /// higher ones.
    pub fn find_items_with_difference(
        &self,
        threshold: i32,
    ) -> Result<Vec<InventoryItemResponse>, ServiceError> {
        check_threshold("difference", &threshold)?;
        self.find_where(|i| i.difference() > threshold)
    }
}

/// Read-only queries spanning storages and their supplies. Held as two
/// injected repositories; the service itself stays stateless.
pub struct StorageQueryService<RS, RP> {
    storages: RS,
    supplies: RP,
}

impl<RS, RP> StorageQueryService<RS, RP>
where
    RS: Repository<Storage>,
    RP: Repository<Supply>,
{
    pub fn new(storages: RS, supplies: RP) -> Self {
        Self { storages, supplies }
    }

    /// Storages holding at least `min_goods` distinct goods names.
    pub fn storages_with_min_distinct_goods(
        &self,
        min_goods: usize,
    ) -> Result<Vec<StorageResponse>, ServiceError> {
        let supplies = self.supplies.all()?;
        let storages = self.storages.all()?;
        Ok(storages
            .iter()
            .filter(|storage| {
                let distinct: HashSet<&str> = supplies
                    .iter()
                    .filter(|s| s.storage_id == storage.id)
                    .map(|s| s.goods_name.as_str())
                    .collect();
                distinct.len() >= min_goods
            })
            .map(Entity::to_response)
            .collect())
    }
}
