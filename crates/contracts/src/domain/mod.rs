pub mod a001_cliente;
pub mod a002_item;
pub mod a003_unidad;
pub mod a004_tarifa;
pub mod a005_tarifa_rango;
