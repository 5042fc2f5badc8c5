use serde::{Deserialize, Serialize};

/// Unidad de negocio tal como la sirve `GET /api/unidades`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unidad {
    pub id: i64,
    pub nombre: String,
}
