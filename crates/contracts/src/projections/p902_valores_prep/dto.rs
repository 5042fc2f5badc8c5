use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fila del reporte de valores prep por kilo
/// (`GET /api/reportes/valores_prep`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValorPrepKilo {
    pub nombre: String,
    pub cliente: i64,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_final: Option<String>,
    // El nombre de columna llega con mayúscula inicial desde el API
    #[serde(alias = "Valor_kilo_prep")]
    pub valor_kilo_prep: f64,
}

/// Alta de un valor prep (`POST /api/reportes/valores_prep`). Este endpoint
/// espera las fechas compactas `YYYYMMDD`, no ISO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuevoValorPrep {
    pub cliente_id: i64,
    pub fecha_inicio: String,
    pub fecha_final: String,
    pub valor: f64,
}

/// Formato de fecha compacto que consume el alta de valores prep.
pub fn fecha_compacta(fecha: NaiveDate) -> String {
    fecha.format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fecha_compacta_sin_separadores() {
        let fecha = NaiveDate::from_ymd_opt(2024, 7, 3).unwrap();
        assert_eq!(fecha_compacta(fecha), "20240703");
    }

    #[test]
    fn acepta_la_columna_con_mayuscula() {
        let fila: ValorPrepKilo = serde_json::from_str(
            r#"{"nombre":"ESA","cliente":4,"fecha_inicio":"2024-01-01","fecha_final":"2024-06-30","Valor_kilo_prep":125.5}"#,
        )
        .unwrap();
        assert_eq!(fila.valor_kilo_prep, 125.5);
    }
}
