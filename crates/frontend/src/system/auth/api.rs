use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UsuarioInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login contra el servicio de autenticación del API de tarifas. El
/// servidor verifica las credenciales y emite los tokens y permisos.
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("No se pudo armar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Login rechazado: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}

/// Renueva el access token con el refresh token vigente.
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/auth/refresh", api_base()))
        .json(&request)
        .map_err(|e| format!("No se pudo armar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh rechazado: {}", response.status()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}

/// Cierra la sesión revocando el refresh token del lado del servidor.
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/auth/logout", api_base()))
        .json(&request)
        .map_err(|e| format!("No se pudo armar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout rechazado: {}", response.status()));
    }

    Ok(())
}

/// Usuario actual según el token presentado. Sirve para validar un token
/// restaurado de localStorage.
pub async fn get_current_user(access_token: &str) -> Result<UsuarioInfo, String> {
    fetch_with_auth("/api/auth/me", access_token).await
}

/// GET autenticado genérico.
pub async fn fetch_with_auth<T>(path: &str, access_token: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&format!("{}{}", api_base(), path))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("No se pudo enviar la solicitud: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("No se pudo interpretar la respuesta: {}", e))
}
