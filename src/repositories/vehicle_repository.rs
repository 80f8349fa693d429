//! Repositorio de Vehicle
//!
//! CRUD y búsqueda sobre la tabla `vehicles` en un archivo SQLite local.
//!
//! Cada operación abre su propia conexión y la cierra al terminar, con lo que
//! no hay estado compartido entre llamadas; una llamada fallida no afecta a la
//! siguiente. Todos los valores van como parámetros enlazados, nunca
//! concatenados en el SQL.

use std::path::PathBuf;

use chrono::Utc;
use rusqlite::{params, Connection, Row};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, error};

use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::{StoreError, StoreResult};

/// Schema de la tabla vehicles (idempotente)
const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS vehicles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    make TEXT NOT NULL,
    model TEXT NOT NULL,
    build_year INTEGER NOT NULL,
    power_hp INTEGER NOT NULL,
    odometer_km INTEGER NOT NULL,
    purchase_price DECIMAL(10,2) NOT NULL,
    color TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

const SELECT_COLUMNS: &str =
    "id, make, model, build_year, power_hp, odometer_km, purchase_price, color, created_at";

/// Repositorio de vehículos sobre un archivo SQLite
pub struct VehicleRepository {
    db_path: PathBuf,
}

impl VehicleRepository {
    /// Crea el repositorio apuntando al archivo dado (no lo abre todavía)
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self { db_path: db_path.into() }
    }

    fn open(&self) -> Result<Connection, rusqlite::Error> {
        Connection::open(&self.db_path)
    }

    /// Crea la tabla si no existe. Seguro de llamar en cada arranque.
    pub fn initialize(&self) -> StoreResult<()> {
        let conn = self.open().map_err(|e| {
            error!("No se pudo abrir la base de datos: {}", e);
            StoreError::Init(format!("Error opening database: {}", e))
        })?;

        conn.execute(CREATE_TABLE_SQL, []).map_err(|e| {
            error!("No se pudo crear la tabla vehicles: {}", e);
            StoreError::Init(format!("Error creating vehicles table: {}", e))
        })?;

        debug!("Base de datos inicializada en {:?}", self.db_path);
        Ok(())
    }

    /// Inserta un vehículo nuevo y devuelve el id asignado.
    ///
    /// `created_at` se estampa aquí con la hora de inserción; no valida
    /// semántica de campos (contrato con la capa de presentación).
    pub fn create(&self, vehicle: &NewVehicle) -> StoreResult<i64> {
        let conn = self
            .open()
            .map_err(|e| StoreError::Write(format!("Error opening database: {}", e)))?;

        conn.execute(
            "INSERT INTO vehicles (make, model, build_year, power_hp, odometer_km, purchase_price, color, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                vehicle.make,
                vehicle.model,
                vehicle.build_year,
                vehicle.power_hp,
                vehicle.odometer_km,
                price_to_sql(vehicle.purchase_price),
                vehicle.color,
                Utc::now(),
            ],
        )
        .map_err(|e| {
            error!("Error al crear vehículo: {}", e);
            StoreError::Write(format!("Error creating vehicle: {}", e))
        })?;

        let id = conn.last_insert_rowid();
        debug!("Vehículo creado con id {}", id);
        Ok(id)
    }

    /// Devuelve todos los vehículos ordenados por (make, model).
    ///
    /// El orden usa la collation BINARY de SQLite: sensible a mayúsculas,
    /// estable entre ejecuciones. Tabla vacía devuelve un vector vacío.
    pub fn find_all(&self) -> StoreResult<Vec<Vehicle>> {
        let conn = self
            .open()
            .map_err(|e| StoreError::Read(format!("Error opening database: {}", e)))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM vehicles ORDER BY make, model",
                SELECT_COLUMNS
            ))
            .map_err(|e| StoreError::Read(format!("Error loading vehicles: {}", e)))?;

        let vehicles = stmt
            .query_map([], map_vehicle_row)
            .map_err(|e| StoreError::Read(format!("Error loading vehicles: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Read(format!("Error loading vehicles: {}", e)))?;

        debug!("Cargados {} vehículos", vehicles.len());
        Ok(vehicles)
    }

    /// Busca vehículos por subcadena en make, model, color o build_year.
    ///
    /// La comparación es case-insensitive (LIKE de SQLite, plegado ASCII) y
    /// los comodines `%`/`_` del término se escapan para que siempre cuente
    /// como subcadena literal. Un término vacío o solo espacios equivale a
    /// `find_all()`. Mismo orden que `find_all()`.
    pub fn search(&self, term: &str) -> StoreResult<Vec<Vehicle>> {
        if term.trim().is_empty() {
            return self.find_all();
        }

        let conn = self
            .open()
            .map_err(|e| StoreError::Read(format!("Error opening database: {}", e)))?;

        let pattern = format!("%{}%", escape_like(term));
        let mut stmt = conn
            .prepare(&format!(
                r"SELECT {} FROM vehicles
                  WHERE make LIKE ?1 ESCAPE '\'
                     OR model LIKE ?1 ESCAPE '\'
                     OR color LIKE ?1 ESCAPE '\'
                     OR CAST(build_year AS TEXT) LIKE ?1 ESCAPE '\'
                  ORDER BY make, model",
                SELECT_COLUMNS
            ))
            .map_err(|e| StoreError::Read(format!("Error searching vehicles: {}", e)))?;

        let vehicles = stmt
            .query_map(params![pattern], map_vehicle_row)
            .map_err(|e| StoreError::Read(format!("Error searching vehicles: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Read(format!("Error searching vehicles: {}", e)))?;

        debug!("Búsqueda '{}' devolvió {} vehículos", term, vehicles.len());
        Ok(vehicles)
    }

    /// Reemplaza todos los campos mutables de la fila con `vehicle.id`.
    ///
    /// `created_at` nunca se toca. Devuelve `false` si no existe ninguna fila
    /// con ese id (no es un error).
    pub fn update(&self, vehicle: &Vehicle) -> StoreResult<bool> {
        let conn = self
            .open()
            .map_err(|e| StoreError::Write(format!("Error opening database: {}", e)))?;

        let rows = conn
            .execute(
                "UPDATE vehicles
                 SET make = ?1,
                     model = ?2,
                     build_year = ?3,
                     power_hp = ?4,
                     odometer_km = ?5,
                     purchase_price = ?6,
                     color = ?7
                 WHERE id = ?8",
                params![
                    vehicle.make,
                    vehicle.model,
                    vehicle.build_year,
                    vehicle.power_hp,
                    vehicle.odometer_km,
                    price_to_sql(vehicle.purchase_price),
                    vehicle.color,
                    vehicle.id,
                ],
            )
            .map_err(|e| {
                error!("Error al actualizar vehículo {}: {}", vehicle.id, e);
                StoreError::Write(format!("Error updating vehicle: {}", e))
            })?;

        Ok(rows > 0)
    }

    /// Elimina la fila con el id dado. `false` si no existía.
    pub fn delete(&self, id: i64) -> StoreResult<bool> {
        let conn = self
            .open()
            .map_err(|e| StoreError::Write(format!("Error opening database: {}", e)))?;

        let rows = conn
            .execute("DELETE FROM vehicles WHERE id = ?1", params![id])
            .map_err(|e| {
                error!("Error al eliminar vehículo {}: {}", id, e);
                StoreError::Write(format!("Error deleting vehicle: {}", e))
            })?;

        Ok(rows > 0)
    }

    /// Número de vehículos almacenados
    pub fn count(&self) -> StoreResult<i64> {
        let conn = self
            .open()
            .map_err(|e| StoreError::Read(format!("Error opening database: {}", e)))?;

        conn.query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get(0))
            .map_err(|e| StoreError::Read(format!("Error counting vehicles: {}", e)))
    }
}

/// Mapea una fila SQLite al modelo Vehicle
fn map_vehicle_row(row: &Row<'_>) -> rusqlite::Result<Vehicle> {
    Ok(Vehicle {
        id: row.get("id")?,
        make: row.get("make")?,
        model: row.get("model")?,
        build_year: row.get("build_year")?,
        power_hp: row.get("power_hp")?,
        odometer_km: row.get("odometer_km")?,
        purchase_price: price_from_sql(row.get("purchase_price")?),
        color: row.get("color")?,
        created_at: row.get("created_at")?,
    })
}

/// La columna DECIMAL(10,2) tiene afinidad NUMERIC en SQLite, así que el
/// precio viaja como f64. La conversión es exacta dentro del rango (10,2).
fn price_to_sql(price: Decimal) -> f64 {
    price.round_dp(2).to_f64().unwrap_or_default()
}

fn price_from_sql(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or_default().round_dp(2)
}

/// Escapa los comodines de LIKE para que el término busque literalmente
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
