use contracts::domain::a004_tarifa::{FiltroTarifas, Tarifa, TarifaDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Tarifario vigente, filtrado del lado del servidor.
pub async fn buscar_tarifas(filtro: &FiltroTarifas) -> Result<Vec<Tarifa>, String> {
    let url = format!("{}{}", api_url("/api/tarifario"), filtro.query_string());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<Tarifa>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}

pub async fn crear_tarifa(dto: &TarifaDto, access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/api/tarifario"))
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

pub async fn editar_tarifa(id: i64, dto: &TarifaDto, access_token: &str) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/tarifario/{}", id)))
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

pub async fn eliminar_tarifa(id: i64, access_token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/tarifario/{}", id)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    Ok(())
}
