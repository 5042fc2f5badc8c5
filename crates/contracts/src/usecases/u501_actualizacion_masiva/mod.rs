pub mod request;
pub mod response;

pub use request::{
    clave_idempotencia, opciones, ActualizacionMasiva, Criterio, ErrorValidacion,
    FormularioActualizacion, Opcion,
};
pub use response::{CuerpoError, MensajeExito, ResultadoActualizacion};

use crate::usecases::common::UseCaseMetadata;

pub struct ActualizacionMasivaTarifas;

impl UseCaseMetadata for ActualizacionMasivaTarifas {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "actualizacion_masiva"
    }

    fn display_name() -> &'static str {
        "Actualización de Tarifas"
    }

    fn description() -> &'static str {
        "Ajuste porcentual del tarifario por cliente, item, unidad o categoría"
    }
}
