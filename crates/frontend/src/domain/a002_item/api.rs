use contracts::domain::a002_item::{Categoria, Item};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Lista de items del catálogo, con su categoría.
pub async fn get_items() -> Result<Vec<Item>, String> {
    let response = Request::get(&api_url("/api/items"))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<Item>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}

/// Lista de categorías propia del API (la usa la pantalla de reportes).
pub async fn get_categorias() -> Result<Vec<Categoria>, String> {
    let response = Request::get(&api_url("/api/categorias"))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<Vec<Categoria>>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}
