use contracts::domain::a005_tarifa_rango::{TarifaRango, TarifaRangoDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn get_tarifas_rango() -> Result<Vec<TarifaRango>, String> {
    let response = Request::get(&api_url("/api/tarifarioRango"))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<TarifaRango>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}

pub async fn crear_tarifa_rango(dto: &TarifaRangoDto, access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/api/tarifarioRango"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(dto)
        .map_err(|e| format!("No se pudo armar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    Ok(())
}

pub async fn editar_tarifa_rango(
    id: i64,
    dto: &TarifaRangoDto,
    access_token: &str,
) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/tarifarioRango/{}", id)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(dto)
        .map_err(|e| format!("No se pudo armar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    Ok(())
}

pub async fn eliminar_tarifa_rango(id: i64, access_token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/tarifarioRango/{}", id)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    Ok(())
}
