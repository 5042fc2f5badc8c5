//! Tab labels - única fuente de verdad para los títulos de los tabs.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_actualizacion_masiva::ActualizacionMasivaTarifas;
use contracts::usecases::u502_reporte_tarifario::ReporteTarifario;

/// Título legible del tab para una clave dada. Fallback: la clave misma.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a004_tarifa" => "Tarifas",
        "a005_tarifa_rango" => "Tarifas por Rango",
        "p901_tarifas_por_vencer" => "Tarifas por Vencer",
        "p900_tarifas_historicas" => "Tarifas Históricas",
        "p902_valores_prep" => "Valor x Kilo",
        "u501_actualizacion_masiva" => ActualizacionMasivaTarifas::display_name(),
        "u502_reporte_tarifario" => ReporteTarifario::display_name(),
        _ => "Módulo",
    }
}
