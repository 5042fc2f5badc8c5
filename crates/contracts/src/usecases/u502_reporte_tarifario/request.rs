use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Formato de salida del reporte. El servidor renderiza el archivo; acá
/// sólo se elige endpoint y nombre de descarga.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatoReporte {
    Pdf,
    Excel,
}

impl FormatoReporte {
    pub fn endpoint(&self) -> &'static str {
        match self {
            FormatoReporte::Pdf => "/api/reportes/pdf",
            FormatoReporte::Excel => "/api/reportes/excel",
        }
    }

    pub fn nombre_archivo(&self) -> &'static str {
        match self {
            FormatoReporte::Pdf => "reporte_tarifario.pdf",
            FormatoReporte::Excel => "reporte_tarifario.xlsx",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            FormatoReporte::Pdf => "application/pdf",
            FormatoReporte::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// Criterios del reporte (`POST /api/reportes/pdf` y `/excel`). Los campos
/// de id viajan como texto vacío cuando no se eligieron, igual que los
/// mandaba la pantalla original.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolicitudReporte {
    pub fecha_desde: Option<NaiveDate>,
    pub fecha_hasta: Option<NaiveDate>,
    pub cliente_id: String,
    pub item_id: String,
    pub categoria_id: String,
    pub unidad_id: String,
    pub especifico: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializa_con_los_nombres_del_endpoint() {
        let solicitud = SolicitudReporte {
            fecha_desde: NaiveDate::from_ymd_opt(2024, 1, 1),
            fecha_hasta: None,
            cliente_id: "3".into(),
            especifico: true,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&solicitud).unwrap(),
            json!({
                "fecha_desde": "2024-01-01",
                "fecha_hasta": null,
                "cliente_id": "3",
                "item_id": "",
                "categoria_id": "",
                "unidad_id": "",
                "especifico": true,
            })
        );
    }

    #[test]
    fn cada_formato_conoce_su_endpoint_y_archivo() {
        assert_eq!(FormatoReporte::Pdf.endpoint(), "/api/reportes/pdf");
        assert_eq!(FormatoReporte::Pdf.nombre_archivo(), "reporte_tarifario.pdf");
        assert_eq!(FormatoReporte::Excel.endpoint(), "/api/reportes/excel");
        assert_eq!(
            FormatoReporte::Excel.nombre_archivo(),
            "reporte_tarifario.xlsx"
        );
    }
}
