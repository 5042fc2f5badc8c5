use contracts::domain::a003_unidad::Unidad;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Lista de unidades de negocio.
pub async fn get_unidades() -> Result<Vec<Unidad>, String> {
    let response = Request::get(&api_url("/api/unidades"))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<Unidad>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}
