pub mod dto;

pub use dto::{FiltroHistorico, TarifaHistorica};
