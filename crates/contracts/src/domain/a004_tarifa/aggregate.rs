use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Read model
// ============================================================================

/// Fila del tarifario vigente (`GET /api/tarifario`).
///
/// El API resuelve los joins y devuelve nombres ya legibles; los ids de
/// referencia no siempre vienen en la respuesta, por eso son opcionales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarifa {
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

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload de alta/edición de tarifa (`POST`/`PUT /api/tarifario`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TarifaDto {
    pub cliente_id: Option<i64>,
    pub unidad_id: Option<i64>,
    pub item_id: Option<i64>,
    pub precio: Option<f64>,
    pub incremento: Option<f64>,
    pub minimo: Option<f64>,
    pub fecha_vigencia_inicio: Option<NaiveDate>,
    pub fecha_vigencia_final: Option<NaiveDate>,
}

impl TarifaDto {
    /// Validación previa al envío. La fecha de vigencia final es el único
    /// campo opcional del formulario.
    pub fn validate(&self) -> Result<(), String> {
        if self.cliente_id.is_none() {
            return Err("Por favor selecciona un cliente".into());
        }
        if self.unidad_id.is_none() {
            return Err("Por favor selecciona una unidad".into());
        }
        if self.item_id.is_none() {
            return Err("Por favor selecciona un item".into());
        }
        if self.precio.is_none() {
            return Err("Por favor ingresa un precio".into());
        }
        if self.incremento.is_none() {
            return Err("Por favor ingresa un incremento".into());
        }
        if self.minimo.is_none() {
            return Err("Por favor ingresa un mínimo".into());
        }
        if self.fecha_vigencia_inicio.is_none() {
            return Err("Por favor selecciona una fecha de inicio".into());
        }
        Ok(())
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Filtros de búsqueda del tarifario vigente. Sólo los campos presentes se
/// convierten en parámetros de consulta.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FiltroTarifas {
    pub cliente: Option<i64>,
    pub unidad: Option<i64>,
    pub item: Option<i64>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
}

impl FiltroTarifas {
    /// Query string para `GET /api/tarifario`; vacío si no hay filtros.
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
            params.push(format!("fechaInicio={}", fecha.format("%Y-%m-%d")));
        }
        if let Some(fecha) = self.fecha_fin {
            params.push(format!("fechaFin={}", fecha.format("%Y-%m-%d")));
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
    fn filtro_vacio_no_genera_query() {
        assert_eq!(FiltroTarifas::default().query_string(), "");
    }

    #[test]
    fn filtro_completo_usa_los_nombres_del_api() {
        let filtro = FiltroTarifas {
            cliente: Some(3),
            unidad: Some(1),
            item: Some(42),
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 1, 1),
            fecha_fin: NaiveDate::from_ymd_opt(2024, 2, 1),
        };
        assert_eq!(
            filtro.query_string(),
            "?cliente=3&unidad=1&item=42&fechaInicio=2024-01-01&fechaFin=2024-02-01"
        );
    }

    #[test]
    fn dto_requiere_campos_obligatorios() {
        let mut dto = TarifaDto::default();
        assert!(dto.validate().is_err());

        dto.cliente_id = Some(1);
        dto.unidad_id = Some(1);
        dto.item_id = Some(1);
        dto.precio = Some(1500.0);
        dto.incremento = Some(10.0);
        dto.minimo = Some(100.0);
        dto.fecha_vigencia_inicio = NaiveDate::from_ymd_opt(2024, 1, 1);
        // fecha_vigencia_final ausente es válido
        assert!(dto.validate().is_ok());
    }
}
