use serde::{Deserialize, Serialize};

/// Cliente con tarifas próximas a vencer (`GET /api/tarifas-vencidas`).
/// El API resuelve la ventana de vencimiento del lado del servidor y
/// devuelve sólo los clientes afectados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientePorVencer {
    pub id: i64,
    pub nombre: String,
}
