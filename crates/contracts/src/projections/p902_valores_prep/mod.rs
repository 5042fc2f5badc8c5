pub mod dto;

pub use dto::{fecha_compacta, NuevoValorPrep, ValorPrepKilo};
