pub mod request;

pub use request::{FormatoReporte, SolicitudReporte};

use crate::usecases::common::UseCaseMetadata;

pub struct ReporteTarifario;

impl UseCaseMetadata for ReporteTarifario {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "reporte_tarifario"
    }

    fn display_name() -> &'static str {
        "Reportes"
    }

    fn description() -> &'static str {
        "Generación de reportes del tarifario en PDF o Excel"
    }
}
