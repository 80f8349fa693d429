//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y formateo de valores para la capa de presentación.

pub mod errors;
pub mod format;
pub mod validation;
