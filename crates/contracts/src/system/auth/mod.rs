use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UsuarioInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Capacidad habilitada para un usuario. Las claves de serialización son
/// las que emite el servicio de autenticación por identidad autenticada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permiso {
    #[serde(rename = "tarifas")]
    Tarifas,
    #[serde(rename = "tarifasPorRango")]
    TarifasPorRango,
    #[serde(rename = "tarifasPorVencer")]
    TarifasPorVencer,
    #[serde(rename = "actualizacionTarifas")]
    ActualizacionTarifas,
    #[serde(rename = "tarifasHistoricas")]
    TarifasHistoricas,
    #[serde(rename = "reportes")]
    Reportes,
    #[serde(rename = "valor-x-kilo")]
    ValorPorKilo,
}

/// Usuario autenticado con los permisos que el servidor emitió para él.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioInfo {
    pub id: String,
    pub username: String,
    pub permisos: Vec<Permiso>,
}

impl UsuarioInfo {
    pub fn tiene_permiso(&self, permiso: Permiso) -> bool {
        self.permisos.contains(&permiso)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permisos_usan_las_claves_del_servicio() {
        let json = serde_json::to_string(&vec![
            Permiso::ActualizacionTarifas,
            Permiso::ValorPorKilo,
        ])
        .unwrap();
        assert_eq!(json, r#"["actualizacionTarifas","valor-x-kilo"]"#);
    }

    #[test]
    fn tiene_permiso_consulta_la_lista_emitida() {
        let usuario = UsuarioInfo {
            id: "u-1".into(),
            username: "diego".into(),
            permisos: vec![Permiso::Tarifas, Permiso::ActualizacionTarifas],
        };
        assert!(usuario.tiene_permiso(Permiso::ActualizacionTarifas));
        assert!(!usuario.tiene_permiso(Permiso::Reportes));
    }
}
