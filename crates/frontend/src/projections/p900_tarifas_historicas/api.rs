use contracts::projections::p900_tarifas_historicas::{FiltroHistorico, TarifaHistorica};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Histórico de tarifas archivadas, filtrado del lado del servidor.
pub async fn buscar_historico(filtro: &FiltroHistorico) -> Result<Vec<TarifaHistorica>, String> {
    let url = format!(
        "{}{}",
        api_url("/api/tarifas_historicas"),
        filtro.query_string()
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<TarifaHistorica>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}
