use serde::{Deserialize, Serialize};

/// Item del catálogo; `categoria` es el atributo que usan las
/// actualizaciones masivas por categoría.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub nombre: String,
    pub categoria: String,
}

/// Categoría como lista propia del API (`GET /api/categorias`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: i64,
    pub nombre: String,
}

/// Valores de categoría presentes en el snapshot de items, deduplicados
/// y ordenados. Las categorías vacías se descartan.
pub fn categorias_unicas(items: &[Item]) -> Vec<String> {
    let mut categorias: Vec<String> = items
        .iter()
        .map(|item| item.categoria.trim())
        .filter(|categoria| !categoria.is_empty())
        .map(str::to_string)
        .collect();
    categorias.sort();
    categorias.dedup();
    categorias
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, categoria: &str) -> Item {
        Item {
            id,
            nombre: format!("Item {}", id),
            categoria: categoria.to_string(),
        }
    }

    #[test]
    fn deduplica_y_ordena_categorias() {
        let items = vec![
            item(1, "Seco"),
            item(2, "Refrigerado"),
            item(3, "Seco"),
            item(4, "Congelado"),
            item(5, "Refrigerado"),
        ];
        assert_eq!(
            categorias_unicas(&items),
            vec!["Congelado", "Refrigerado", "Seco"]
        );
    }

    #[test]
    fn descarta_categorias_vacias() {
        let items = vec![item(1, ""), item(2, "  "), item(3, "Seco")];
        assert_eq!(categorias_unicas(&items), vec!["Seco"]);
    }
}
