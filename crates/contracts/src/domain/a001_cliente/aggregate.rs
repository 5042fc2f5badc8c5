use serde::{Deserialize, Serialize};

/// Cliente tal como lo sirve `GET /api/clientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,
}
