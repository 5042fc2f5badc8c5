use contracts::projections::p901_tarifas_por_vencer::ClientePorVencer;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Clientes con tarifas dentro de la ventana de vencimiento que calcula
/// el servidor.
pub async fn get_clientes_por_vencer() -> Result<Vec<ClientePorVencer>, String> {
    let response = Request::get(&api_url("/api/tarifas-vencidas"))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<ClientePorVencer>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}
