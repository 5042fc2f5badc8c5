use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fila del tarifario por rango (`GET /api/tarifarioRango`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarifaRango {
    pub id: i64,
    #[serde(default)]
    pub cliente_id: Option<i64>,
    #[serde(default)]
    pub unidad_id: Option<i64>,
    #[serde(default)]
    pub item_id: Option<i64>,
    pub cliente: String,
    pub categoria: String,
    pub unidad: String,
    pub item: String,
    pub precio: f64,
    pub incremento: f64,
    pub minimo: f64,
    #[serde(default)]
    pub fecha_vigencia_inicio: Option<String>,
    #[serde(default)]
    pub fecha_vigencia_final: Option<String>,
}

/// Payload de alta/edición (`POST`/`PUT /api/tarifarioRango`). A diferencia
/// del tarifario general, acá ambas fechas de vigencia son obligatorias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TarifaRangoDto {
    pub cliente_id: Option<i64>,
    pub unidad_id: Option<i64>,
    pub item_id: Option<i64>,
    pub precio: Option<f64>,
    pub incremento: Option<f64>,
    pub minimo: Option<f64>,
    pub fecha_vigencia_inicio: Option<NaiveDate>,
    pub fecha_vigencia_final: Option<NaiveDate>,
}

impl TarifaRangoDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.cliente_id.is_none() {
            return Err("Seleccione un cliente".into());
        }
        if self.unidad_id.is_none() {
            return Err("Seleccione una unidad".into());
        }
        if self.item_id.is_none() {
            return Err("Seleccione un item".into());
        }
        if self.precio.is_none() {
            return Err("Ingrese el precio".into());
        }
        if self.minimo.is_none() {
            return Err("Ingrese el mínimo".into());
        }
        if self.incremento.is_none() {
            return Err("Ingrese el incremento".into());
        }
        if self.fecha_vigencia_inicio.is_none() {
            return Err("Seleccione la fecha de inicio".into());
        }
        if self.fecha_vigencia_final.is_none() {
            return Err("Seleccione la fecha de finalización".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambas_fechas_son_obligatorias() {
        let mut dto = TarifaRangoDto {
            cliente_id: Some(1),
            unidad_id: Some(2),
            item_id: Some(3),
            precio: Some(900.0),
            incremento: Some(5.0),
            minimo: Some(50.0),
            fecha_vigencia_inicio: NaiveDate::from_ymd_opt(2024, 6, 1),
            fecha_vigencia_final: None,
        };
        assert!(dto.validate().is_err());

        dto.fecha_vigencia_final = NaiveDate::from_ymd_opt(2024, 12, 31);
        assert!(dto.validate().is_ok());
    }
}
