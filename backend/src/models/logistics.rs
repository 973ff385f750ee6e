use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::validation::{self, FieldErrors, FormInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    #[serde(rename = "On Route")]
    OnRoute,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_number: String,
    pub driver_name: String,
    pub driver_phone: String,
    /// Tank capacity in litres.
    pub capacity: String,
    pub status: VehicleStatus,
}

impl Entity for Vehicle {
    const NAME: &'static str = "Vehicle";
}

impl FormInput for Vehicle {
    fn normalize(&mut self) {
        self.vehicle_number = validation::normalize_vehicle_number(&self.vehicle_number);
        self.driver_name = self.driver_name.trim().to_string();
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "vehicleNumber",
                validation::validate_vehicle_number(&self.vehicle_number),
            )
            .check("driverName", validation::validate_name(&self.driver_name))
            .check("driverPhone", validation::validate_phone(&self.driver_phone))
            .check("capacity", validation::validate_amount(&self.capacity));
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Scheduled,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub vehicle_number: String,
    pub destination: String,
    pub quantity: String,
    pub scheduled_date: NaiveDate,
    pub status: DeliveryStatus,
}

impl Entity for Delivery {
    const NAME: &'static str = "Delivery";
}

impl FormInput for Delivery {
    fn normalize(&mut self) {
        self.vehicle_number = validation::normalize_vehicle_number(&self.vehicle_number);
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "vehicleNumber",
                validation::validate_vehicle_number(&self.vehicle_number),
            )
            .check(
                "destination",
                validation::validate_required(&self.destination, "Destination"),
            )
            .check("quantity", validation::validate_amount(&self.quantity));
        errors
    }
}
