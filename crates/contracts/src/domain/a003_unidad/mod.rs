pub mod aggregate;

pub use aggregate::Unidad;
