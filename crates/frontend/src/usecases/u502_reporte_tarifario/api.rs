use contracts::usecases::u502_reporte_tarifario::{FormatoReporte, SolicitudReporte};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Pide el reporte al servidor y devuelve el archivo ya renderizado.
/// El armado del PDF/Excel es del lado del API; acá sólo viajan los
/// criterios y vuelve el binario.
pub async fn generar_reporte(
    solicitud: &SolicitudReporte,
    formato: FormatoReporte,
    access_token: &str,
) -> Result<Vec<u8>, String> {
    let response = Request::post(&api_url(formato.endpoint()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(solicitud)
        .map_err(|e| format!("No se pudo armar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("No se pudo leer el archivo: {}", e))
}
