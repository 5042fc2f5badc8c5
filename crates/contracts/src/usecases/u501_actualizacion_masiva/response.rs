use serde::{Deserialize, Serialize};

/// Respuesta exitosa del endpoint de actualización masiva.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MensajeExito {
    pub message: String,
}

/// Cuerpo de error que devuelve el API cuando rechaza la actualización.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuerpoError {
    pub error: String,
}

/// Mensaje genérico cuando el servidor no informó detalle (errores de red,
/// respuestas sin cuerpo).
pub const ERROR_GENERICO: &str = "Ocurrió un error al actualizar las tarifas";

/// Resultado de un envío, mostrado al usuario tal cual. `Exito` lleva el
/// texto del servidor verbatim; `Fallo` lleva el error del servidor si
/// existe o el mensaje genérico.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultadoActualizacion {
    Exito(String),
    Fallo(String),
}

impl ResultadoActualizacion {
    pub fn exito(mensaje: impl Into<String>) -> Self {
        ResultadoActualizacion::Exito(mensaje.into())
    }

    /// Mapea un error reportado (o su ausencia) al fallo visible.
    pub fn fallo(detalle: Option<String>) -> Self {
        match detalle {
            Some(detalle) if !detalle.is_empty() => ResultadoActualizacion::Fallo(detalle),
            _ => ResultadoActualizacion::Fallo(ERROR_GENERICO.to_string()),
        }
    }

    pub fn es_exito(&self) -> bool {
        matches!(self, ResultadoActualizacion::Exito(_))
    }

    pub fn mensaje(&self) -> &str {
        match self {
            ResultadoActualizacion::Exito(mensaje) => mensaje,
            ResultadoActualizacion::Fallo(mensaje) => mensaje,
        }
    }

    /// Texto con el prefijo que usa el banner de resultado.
    pub fn banner(&self) -> String {
        match self {
            ResultadoActualizacion::Exito(mensaje) => format!("Éxito: {}", mensaje),
            ResultadoActualizacion::Fallo(mensaje) => format!("Error: {}", mensaje),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_mensaje_del_servidor_se_muestra_verbatim() {
        let cuerpo: MensajeExito =
            serde_json::from_str(r#"{"message":"3 tarifas actualizadas"}"#).unwrap();
        let resultado = ResultadoActualizacion::exito(cuerpo.message);
        assert_eq!(
            resultado,
            ResultadoActualizacion::Exito("3 tarifas actualizadas".into())
        );
        assert_eq!(resultado.banner(), "Éxito: 3 tarifas actualizadas");
    }

    #[test]
    fn el_error_del_servidor_se_muestra_verbatim() {
        let cuerpo: CuerpoError = serde_json::from_str(r#"{"error":"tarifa no encontrada"}"#).unwrap();
        let resultado = ResultadoActualizacion::fallo(Some(cuerpo.error));
        assert_eq!(
            resultado,
            ResultadoActualizacion::Fallo("tarifa no encontrada".into())
        );
    }

    #[test]
    fn sin_cuerpo_cae_al_mensaje_generico() {
        assert_eq!(
            ResultadoActualizacion::fallo(None),
            ResultadoActualizacion::Fallo(ERROR_GENERICO.into())
        );
        assert_eq!(
            ResultadoActualizacion::fallo(Some(String::new())),
            ResultadoActualizacion::Fallo(ERROR_GENERICO.into())
        );
    }
}
