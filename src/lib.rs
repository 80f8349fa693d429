//! Núcleo de gestión de vehículos
//!
//! Este crate contiene la capa de persistencia (SQLite) y el motor de
//! valoración del sistema de gestión de vehículos. La UI de escritorio y el
//! renderizado de informes consumen este crate como biblioteca.

pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use config::database::DatabaseConfig;
pub use models::vehicle::{NewVehicle, Vehicle};
pub use repositories::vehicle_repository::VehicleRepository;
pub use services::valuation_service::{self, FleetSummary};
pub use utils::errors::{StoreError, StoreResult};
