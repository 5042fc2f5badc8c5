pub mod aggregate;

pub use aggregate::{FiltroTarifas, Tarifa, TarifaDto};
