//! Configuración de base de datos
//!
//! Este módulo maneja la ubicación del archivo SQLite. La ruta es
//! configuración local del proceso, no parte del contrato del núcleo.

use std::path::PathBuf;

use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::StoreResult;

/// Nombre del archivo por defecto, junto al directorio de trabajo
const DEFAULT_DB_FILE: &str = "vehicles.db";

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: std::env::var("VEHICLE_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE)),
        }
    }
}

impl DatabaseConfig {
    /// Configuración apuntando a una ruta concreta
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Abre el repositorio y garantiza que el schema existe.
    ///
    /// Si esto falla el proceso no debe seguir sirviendo operaciones de
    /// almacenamiento (error de arranque).
    pub fn open_repository(&self) -> StoreResult<VehicleRepository> {
        let repository = VehicleRepository::new(&self.path);
        repository.initialize()?;
        Ok(repository)
    }
}
