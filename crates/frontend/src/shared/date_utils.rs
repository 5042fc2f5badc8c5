/// Utilities for date formatting
///
/// The API serves ISO dates (`2024-03-15`, sometimes with a time part);
/// the tables display them as DD/MM/YYYY.

/// Format an ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T00:00:00Z" -> "15/03/2024"
pub fn formato_fecha(fecha: &str) -> String {
    let parte_fecha = fecha.split('T').next().unwrap_or(fecha);
    if let Some((anio, resto)) = parte_fecha.split_once('-') {
        if let Some((mes, dia)) = resto.split_once('-') {
            return format!("{}/{}/{}", dia, mes, anio);
        }
    }
    fecha.to_string()
}

/// Same as [`formato_fecha`] but renders a missing date as "-".
pub fn formato_fecha_opcional(fecha: &Option<String>) -> String {
    match fecha {
        Some(valor) if !valor.is_empty() => formato_fecha(valor),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formato_fecha() {
        assert_eq!(formato_fecha("2024-03-15"), "15/03/2024");
        assert_eq!(formato_fecha("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_formato_invalido_pasa_sin_tocar() {
        assert_eq!(formato_fecha("sin fecha"), "sin fecha");
    }

    #[test]
    fn test_fecha_ausente() {
        assert_eq!(formato_fecha_opcional(&None), "-");
        assert_eq!(formato_fecha_opcional(&Some(String::new())), "-");
        assert_eq!(
            formato_fecha_opcional(&Some("2024-12-31".to_string())),
            "31/12/2024"
        );
    }
}
