//! Utilidades de validación
//!
//! Este módulo contiene funciones helper de validación para la capa de
//! presentación. El repositorio no las invoca: la validación semántica es
//! responsabilidad del caller antes de persistir.

use num_traits::Zero;
use serde::Serialize;
use validator::ValidationError;

/// Primer año de fabricación admitido
pub const MIN_BUILD_YEAR: i32 = 1900;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar un año de fabricación: [1900, año de referencia + 1].
///
/// El año siguiente al de referencia es válido porque los modelos del año
/// próximo salen a la venta con antelación.
pub fn validate_build_year(year: i32, reference_year: i32) -> Result<(), ValidationError> {
    validate_range(year, MIN_BUILD_YEAR, reference_year + 1).map_err(|_| {
        let mut error = ValidationError::new("build_year");
        error.add_param("value".into(), &year);
        error.add_param("min".into(), &MIN_BUILD_YEAR);
        error.add_param("max".into(), &(reference_year + 1));
        error
    })
}

/// Normaliza la entrada de un campo de texto: recorta extremos y colapsa
/// espacios internos repetidos
pub fn clean_input(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
