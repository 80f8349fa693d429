//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del archivo de base de datos.

pub mod database;

pub use database::*;
