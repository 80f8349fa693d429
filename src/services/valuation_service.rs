//! Servicio de valoración de vehículos
//!
//! Calcula el valor actual estimado de un vehículo a partir del precio de
//! compra, el año de fabricación y el kilometraje. Todas las funciones son
//! puras y deterministas: el año de referencia se pasa como parámetro en vez
//! de leer el reloj del sistema, para que los tests sean reproducibles.
//!
//! Fórmula de depreciación:
//! - 15% por año durante los primeros 3 años, 10% por año después.
//! - 2% adicional por cada 10.000 km (las fracciones cuentan proporcionalmente).
//! - Máximo 90% de depreciación, valor residual mínimo del 5% del precio.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::vehicle::Vehicle;

/// Años a los que un vehículo se considera clásico
pub const VINTAGE_AGE_YEARS: i32 = 30;

/// Calcula el valor actual estimado de un vehículo.
///
/// Entradas sin sentido (`purchase_price <= 0` o `build_year <= 0`) degradan
/// a `0` en vez de fallar. El resultado se redondea a 2 decimales con
/// `MidpointAwayFromZero` (redondeo comercial).
pub fn current_value(
    purchase_price: Decimal,
    build_year: i32,
    odometer_km: i64,
    reference_year: i32,
) -> Decimal {
    if purchase_price <= Decimal::ZERO || build_year <= 0 {
        return Decimal::ZERO;
    }

    let age = Decimal::from(age(build_year, reference_year).max(0));
    let three = Decimal::from(3);

    // 0.15 * min(edad, 3) + 0.10 * max(edad - 3, 0)
    let age_fraction = Decimal::new(15, 2) * age.min(three)
        + Decimal::new(10, 2) * (age - three).max(Decimal::ZERO);

    // 0.02 por cada bloque de 10.000 km, división exacta en decimal
    let mileage_fraction =
        Decimal::from(odometer_km) / Decimal::from(10_000) * Decimal::new(2, 2);

    let mut fraction = age_fraction + mileage_fraction;
    if fraction > Decimal::new(90, 2) {
        fraction = Decimal::new(90, 2);
    }

    let value = purchase_price * (Decimal::ONE - fraction);
    let floor = purchase_price * Decimal::new(5, 2);

    value
        .max(floor)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Edad del vehículo en años respecto al año de referencia
pub fn age(build_year: i32, reference_year: i32) -> i32 {
    reference_year - build_year
}

/// Un vehículo es clásico a partir de los 30 años
pub fn is_vintage(build_year: i32, reference_year: i32) -> bool {
    age(build_year, reference_year) >= VINTAGE_AGE_YEARS
}

/// Porcentaje de depreciación respecto al precio de compra.
///
/// Devuelve `0` cuando `purchase_price <= 0` (división indefinida).
pub fn depreciation_percent(purchase_price: Decimal, current_value: Decimal) -> Decimal {
    if purchase_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    ((purchase_price - current_value) / purchase_price * Decimal::from(100))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Resumen agregado de una flota de vehículos
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSummary {
    pub vehicle_count: usize,
    pub total_purchase_price: Decimal,
    pub total_current_value: Decimal,
    pub total_depreciation: Decimal,
    pub depreciation_percent: Decimal,
}

/// Calcula los totales de flota que consume el informe de listado.
pub fn fleet_summary(vehicles: &[Vehicle], reference_year: i32) -> FleetSummary {
    let total_purchase_price: Decimal = vehicles.iter().map(|v| v.purchase_price).sum();
    let total_current_value: Decimal =
        vehicles.iter().map(|v| v.current_value(reference_year)).sum();
    let total_depreciation = total_purchase_price - total_current_value;

    FleetSummary {
        vehicle_count: vehicles.len(),
        total_purchase_price,
        total_current_value,
        total_depreciation,
        depreciation_percent: depreciation_percent(total_purchase_price, total_current_value),
    }
}
