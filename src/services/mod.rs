//! Servicios del sistema
//!
//! Lógica de negocio pura, sin I/O.

pub mod valuation_service;
