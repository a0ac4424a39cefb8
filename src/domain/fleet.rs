use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{require_finite, require_non_negative, require_text, Entity};
use crate::errors::ServiceError;

// ── Driver ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub license_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverRequest {
    pub name: String,
    pub phone: String,
    pub license_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriverResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub license_number: String,
}

impl Entity for Driver {
    type Request = DriverRequest;
    type Response = DriverResponse;

    const NAME: &'static str = "Driver";

    fn from_request(id: i64, req: DriverRequest) -> Result<Self, ServiceError> {
        Ok(Driver {
            id,
            name: require_text("name", &req.name)?,
            phone: require_text("phone", &req.phone)?,
            license_number: require_text("license_number", &req.license_number)?,
        })
    }

    fn to_response(&self) -> DriverResponse {
        DriverResponse {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.clone(),
            license_number: self.license_number.clone(),
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.license_number == other.license_number
    }
}

// ── Vehicle ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub plate_number: String,
    pub model: String,
    pub capacity_kg: i32,
    pub driver_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRequest {
    pub plate_number: String,
    pub model: String,
    pub capacity_kg: i32,
    pub driver_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub plate_number: String,
    pub model: String,
    pub capacity_kg: i32,
    pub driver_id: Option<i64>,
}

impl Entity for Vehicle {
    type Request = VehicleRequest;
    type Response = VehicleResponse;

    const NAME: &'static str = "Vehicle";

    fn from_request(id: i64, req: VehicleRequest) -> Result<Self, ServiceError> {
        Ok(Vehicle {
            id,
            plate_number: require_text("plate_number", &req.plate_number)?,
            model: require_text("model", &req.model)?,
            capacity_kg: require_non_negative("capacity_kg", req.capacity_kg)?,
            driver_id: req.driver_id,
        })
    }

    fn to_response(&self) -> VehicleResponse {
        VehicleResponse {
            id: self.id,
            plate_number: self.plate_number.clone(),
            model: self.model.clone(),
            capacity_kg: self.capacity_kg,
            driver_id: self.driver_id,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.plate_number == other.plate_number
    }
}

// ── Route ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub id: i64,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

impl Entity for Route {
    type Request = RouteRequest;
    type Response = RouteResponse;

    const NAME: &'static str = "Route";

    fn from_request(id: i64, req: RouteRequest) -> Result<Self, ServiceError> {
        Ok(Route {
            id,
            name: require_text("name", &req.name)?,
            origin: require_text("origin", &req.origin)?,
            destination: require_text("destination", &req.destination)?,
            distance_km: require_non_negative(
                "distance_km",
                require_finite("distance_km", req.distance_km)?,
            )?,
        })
    }

    fn to_response(&self) -> RouteResponse {
        RouteResponse {
            id: self.id,
            name: self.name.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            distance_km: self.distance_km,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// ── Shift ────────────────────────────────────────────────────────────────────

/// Shift state is a stored field, not a transition the service enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftStatus {
    Scheduled,
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub driver_id: i64,
    pub vehicle_id: Option<i64>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: ShiftStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShiftRequest {
    pub driver_id: i64,
    pub vehicle_id: Option<i64>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: ShiftStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftResponse {
    pub id: i64,
    pub driver_id: i64,
    pub vehicle_id: Option<i64>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: ShiftStatus,
}

impl Entity for Shift {
    type Request = ShiftRequest;
    type Response = ShiftResponse;

    const NAME: &'static str = "Shift";

    fn from_request(id: i64, req: ShiftRequest) -> Result<Self, ServiceError> {
        if let Some(ended) = req.ended_at {
            if ended < req.started_at {
                return Err(ServiceError::validation(
                    "ended_at must not precede started_at",
                ));
            }
        }
        Ok(Shift {
            id,
            driver_id: req.driver_id,
            vehicle_id: req.vehicle_id,
            started_at: req.started_at,
            ended_at: req.ended_at,
            status: req.status,
        })
    }

    fn to_response(&self) -> ShiftResponse {
        ShiftResponse {
            id: self.id,
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            started_at: self.started_at,
            ended_at: self.ended_at,
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
