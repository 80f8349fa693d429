//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error de la capa de persistencia.
//! Las condiciones "no encontrado" de update/delete no son errores: se
//! devuelven como booleanos, porque son resultados esperados en una
//! herramienta CRUD de un solo usuario.

use thiserror::Error;

/// Errores de la capa de almacenamiento
#[derive(Error, Debug)]
pub enum StoreError {
    /// El archivo o la tabla no pudieron crearse/abrirse; fatal al arranque.
    #[error("Storage init error: {0}")]
    Init(String),

    /// Fallo de I/O durante una lectura; la siguiente llamada es independiente.
    #[error("Storage read error: {0}")]
    Read(String),

    /// Fallo de I/O durante una escritura; la siguiente llamada es independiente.
    #[error("Storage write error: {0}")]
    Write(String),
}

/// Resultado tipado para operaciones del almacenamiento
pub type StoreResult<T> = Result<T, StoreError>;
