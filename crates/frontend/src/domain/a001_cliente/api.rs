use contracts::domain::a001_cliente::Cliente;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Lista de clientes para los selectores.
pub async fn get_clientes() -> Result<Vec<Cliente>, String> {
    let response = Request::get(&api_url("/api/clientes"))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<Cliente>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}
