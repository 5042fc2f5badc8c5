pub mod aggregate;

pub use aggregate::{TarifaRango, TarifaRangoDto};
