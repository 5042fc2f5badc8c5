use contracts::projections::p902_valores_prep::{NuevoValorPrep, ValorPrepKilo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn get_valores_prep() -> Result<Vec<ValorPrepKilo>, String> {
    let response = Request::get(&api_url("/api/reportes/valores_prep"))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<ValorPrepKilo>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}

pub async fn agregar_valor_prep(valor: &NuevoValorPrep, access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/api/reportes/valores_prep"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(valor)
        .map_err(|e| format!("No se pudo armar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    Ok(())
}
