pub mod aggregate;

pub use aggregate::{categorias_unicas, Categoria, Item};
