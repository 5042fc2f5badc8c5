pub mod u501_actualizacion_masiva;
pub mod u502_reporte_tarifario;
