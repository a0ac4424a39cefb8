use chrono::{DateTime, Utc};

use super::service::{check_threshold, contains_ci, EntityService};
use crate::domain::entity::require_finite;
use crate::domain::fleet::{
    Driver, DriverResponse, Route, RouteResponse, Shift, ShiftResponse, Vehicle, VehicleResponse,
};
use crate::domain::ports::Repository;
use crate::errors::ServiceError;

pub type DriverService<R> = EntityService<Driver, R>;
pub type VehicleService<R> = EntityService<Vehicle, R>;
pub type RouteService<R> = EntityService<Route, R>;
pub type ShiftService<R> = EntityService<Shift, R>;

impl<R: Repository<Driver>> EntityService<Driver, R> {
    /// Drivers whose name contains `name`, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<DriverResponse>, ServiceError> {
        self.find_where(|d| contains_ci(&d.name, name))
    }

    /// Drivers with exactly this phone number.
    pub fn find_by_phone(&self, phone: &str) -> Result<Vec<DriverResponse>, ServiceError> {
        self.find_where(|d| d.phone == phone)
    }
}

impl<R: Repository<Vehicle>> EntityService<Vehicle, R> {
    /// Exact plate lookup; plates are unique so at most one vehicle matches.
    pub fn find_by_plate(&self, plate: &str) -> Result<Option<VehicleResponse>, ServiceError> {
        self.find_one_where(|v| v.plate_number == plate)
    }

    pub fn find_by_model(&self, model: &str) -> Result<Vec<VehicleResponse>, ServiceError> {
        self.find_where(|v| contains_ci(&v.model, model))
    }

    pub fn find_by_driver(&self, driver_id: i64) -> Result<Vec<VehicleResponse>, ServiceError> {
        self.find_where(|v| v.driver_id == Some(driver_id))
    }
}

impl<R: Repository<Route>> EntityService<Route, R> {
    /// Routes matching both endpoints (conjunctive filter).
    pub fn find_by_origin_and_destination(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteResponse>, ServiceError> {
        self.find_where(|r| r.origin == origin && r.destination == destination)
    }

    pub fn find_with_distance_greater_than(
        &self,
        threshold_km: f64,
    ) -> Result<Vec<RouteResponse>, ServiceError> {
        require_finite("distance_km", threshold_km)?;
        check_threshold("distance_km", &threshold_km)?;
        self.find_where(|r| r.distance_km > threshold_km)
    }
}

impl<R: Repository<Shift>> EntityService<Shift, R> {
    pub fn find_by_driver(&self, driver_id: i64) -> Result<Vec<ShiftResponse>, ServiceError> {
        self.find_where(|s| s.driver_id == driver_id)
    }

    /// Shifts that started inside `[from, to]`, bounds inclusive.
    pub fn find_started_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ShiftResponse>, ServiceError> {
        self.find_where(|s| s.started_at >= from && s.started_at <= to)
    }
}
