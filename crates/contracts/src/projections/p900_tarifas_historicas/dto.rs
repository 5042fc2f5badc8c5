use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fila del histórico de tarifas (`GET /api/tarifas_historicas`).
///
/// El API alias las fechas de vigencia como `fechadesde`/`fechahasta`; el
/// movimiento es la marca de auditoría de la actualización que archivó la
/// fila.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarifaHistorica {
    pub cliente: String,
    pub categoria: String,
    pub unidad: String,
    pub item: String,
    pub minimo: f64,
    pub incremento: f64,
    pub precio: f64,
    #[serde(default)]
    pub fechadesde: Option<String>,
    #[serde(default)]
    pub fechahasta: Option<String>,
    #[serde(default)]
    pub movimiento: Option<String>,
}

/// Filtros del histórico. Los nombres de parámetro son los que espera el
/// endpoint (`cliente`, `unidad`, `item`, `fecha_inicio`, `fecha_fin`,
/// `fecha_movimiento`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FiltroHistorico {
    pub cliente: Option<i64>,
    pub unidad: Option<i64>,
    pub item: Option<i64>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub fecha_movimiento: Option<NaiveDate>,
}

impl FiltroHistorico {
    pub fn query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(cliente) = self.cliente {
            params.push(format!("cliente={}", cliente));
        }
        if let Some(unidad) = self.unidad {
            params.push(format!("unidad={}", unidad));
        }
        if let Some(item) = self.item {
            params.push(format!("item={}", item));
        }
        if let Some(fecha) = self.fecha_inicio {
            params.push(format!("fecha_inicio={}", fecha.format("%Y-%m-%d")));
        }
        if let Some(fecha) = self.fecha_fin {
            params.push(format!("fecha_fin={}", fecha.format("%Y-%m-%d")));
        }
        if let Some(fecha) = self.fecha_movimiento {
            params.push(format!("fecha_movimiento={}", fecha.format("%Y-%m-%d")));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_los_filtros_presentes_viajan() {
        let filtro = FiltroHistorico {
            cliente: Some(7),
            fecha_movimiento: NaiveDate::from_ymd_opt(2024, 3, 15),
            ..Default::default()
        };
        assert_eq!(
            filtro.query_string(),
            "?cliente=7&fecha_movimiento=2024-03-15"
        );
    }
}
