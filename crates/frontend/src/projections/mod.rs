pub mod p900_tarifas_historicas;
pub mod p901_tarifas_por_vencer;
pub mod p902_valores_prep;
