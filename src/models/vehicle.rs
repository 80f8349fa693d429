//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su payload de creación.
//! Mapea exactamente al schema SQLite con primary key 'id'.
//!
//! El valor actual NO se guarda en el struct: se recalcula en cada llamada a
//! partir de los campos vigentes, así siempre refleja el estado presente.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::valuation_service;
use crate::utils::format::{format_kilometers, format_price};

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub build_year: i32,
    pub power_hp: i32,
    pub odometer_km: i64,
    pub purchase_price: Decimal,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Payload para crear un nuevo vehículo.
///
/// Las anotaciones de `validator` reflejan las reglas de la capa de
/// presentación; el repositorio nunca llama a `validate()` (la validación
/// semántica es responsabilidad del caller).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewVehicle {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub build_year: i32,

    #[validate(range(min = 1))]
    pub power_hp: i32,

    #[validate(range(min = 0))]
    pub odometer_km: i64,

    pub purchase_price: Decimal,

    #[validate(length(min = 1, max = 50))]
    pub color: String,
}

impl Vehicle {
    /// Valor actual estimado para un año de referencia dado
    pub fn current_value(&self, reference_year: i32) -> Decimal {
        valuation_service::current_value(
            self.purchase_price,
            self.build_year,
            self.odometer_km,
            reference_year,
        )
    }

    /// Valor actual estimado respecto al año en curso
    pub fn current_value_now(&self) -> Decimal {
        self.current_value(Utc::now().year())
    }

    /// Edad en años respecto al año de referencia
    pub fn age(&self, reference_year: i32) -> i32 {
        valuation_service::age(self.build_year, reference_year)
    }

    /// Un vehículo es clásico a partir de los 30 años
    pub fn is_vintage(&self, reference_year: i32) -> bool {
        valuation_service::is_vintage(self.build_year, reference_year)
    }

    /// Porcentaje de depreciación respecto al precio de compra
    pub fn depreciation_percent(&self, reference_year: i32) -> Decimal {
        valuation_service::depreciation_percent(
            self.purchase_price,
            self.current_value(reference_year),
        )
    }

    /// Descripción detallada para listados e informes
    pub fn detailed_description(&self) -> String {
        format!(
            "{} {} ({}) - {} hp - {} - {}",
            self.make,
            self.model,
            self.build_year,
            self.power_hp,
            format_kilometers(self.odometer_km),
            self.color
        )
    }

    /// Precio de compra formateado para la UI
    pub fn purchase_price_formatted(&self) -> String {
        format_price(self.purchase_price)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.make, self.model, self.build_year)
    }
}
