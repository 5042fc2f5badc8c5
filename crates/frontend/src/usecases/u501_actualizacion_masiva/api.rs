use contracts::usecases::u501_actualizacion_masiva::{
    clave_idempotencia, ActualizacionMasiva, CuerpoError, MensajeExito, ResultadoActualizacion,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Envía una actualización masiva. Un solo intento por invocación: sin
/// reintentos ni deduplicación local. Cada intento lleva una clave
/// idempotente fresca en el header para que el servidor pueda descartar
/// un doble envío.
pub async fn enviar_actualizacion(
    request: &ActualizacionMasiva,
    access_token: &str,
) -> ResultadoActualizacion {
    let clave = clave_idempotencia();
    log::debug!(
        "actualizacion_masiva [{}]: {}",
        clave,
        serde_json::to_string(request).unwrap_or_default()
    );

    let peticion = match Request::post(&api_url("/api/actualizacion_masiva_tarifas"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("X-Idempotency-Key", &clave)
        .json(request)
    {
        Ok(peticion) => peticion,
        Err(error) => {
            log::error!("No se pudo armar la solicitud: {}", error);
            return ResultadoActualizacion::fallo(None);
        }
    };

    match peticion.send().await {
        Ok(response) if response.ok() => match response.json::<MensajeExito>().await {
            Ok(cuerpo) => ResultadoActualizacion::exito(cuerpo.message),
            Err(error) => {
                log::error!("Respuesta de éxito sin cuerpo legible: {}", error);
                ResultadoActualizacion::fallo(None)
            }
        },
        Ok(response) => {
            // rechazo de negocio: el cuerpo trae {error}
            let detalle = response
                .json::<CuerpoError>()
                .await
                .ok()
                .map(|cuerpo| cuerpo.error);
            ResultadoActualizacion::fallo(detalle)
        }
        Err(error) => {
            log::error!("Error de red en la actualización masiva: {}", error);
            ResultadoActualizacion::fallo(None)
        }
    }
}
