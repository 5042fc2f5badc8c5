//! Formateo de números para las tablas, en convención es-AR
//! (punto como separador de miles, coma decimal).

/// Formatea un número con separador de miles y la cantidad indicada de
/// decimales.
///
/// # Ejemplos
///
/// ```
/// use frontend::shared::number_format::formato_numero_con_decimales;
/// assert_eq!(formato_numero_con_decimales(1234.567, 2), "1.234,57");
/// ```
pub fn formato_numero_con_decimales(valor: f64, decimales: u8) -> String {
    let formateado = match decimales {
        0 => format!("{:.0}", valor),
        1 => format!("{:.1}", valor),
        2 => format!("{:.2}", valor),
        _ => format!("{:.2}", valor),
    };

    let partes: Vec<&str> = formateado.split('.').collect();
    let parte_entera = partes[0];
    let parte_decimal = partes.get(1);

    // Separador de miles cada 3 dígitos desde el final
    let mut resultado = String::new();
    let digitos: Vec<char> = parte_entera.chars().rev().collect();
    for (i, c) in digitos.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            resultado.push('.');
        }
        resultado.push(*c);
    }
    let entera_formateada = resultado.chars().rev().collect::<String>();

    match parte_decimal {
        Some(decimal) => format!("{},{}", entera_formateada, decimal),
        None => entera_formateada,
    }
}

/// Precio con 2 decimales y símbolo, como lo muestran las tablas
/// del tarifario.
///
/// # Ejemplos
///
/// ```
/// use frontend::shared::number_format::formato_precio;
/// assert_eq!(formato_precio(1234567.89), "$1.234.567,89");
/// ```
pub fn formato_precio(valor: f64) -> String {
    format!("${}", formato_numero_con_decimales(valor, 2))
}

/// Incremento porcentual tal como lo muestran las tablas.
pub fn formato_incremento(valor: f64) -> String {
    if valor.fract() == 0.0 {
        format!("{:.0}%", valor)
    } else {
        format!("{}%", formato_numero_con_decimales(valor, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formato_precio() {
        assert_eq!(formato_precio(1234.56), "$1.234,56");
        assert_eq!(formato_precio(1234567.89), "$1.234.567,89");
        assert_eq!(formato_precio(0.0), "$0,00");
        assert_eq!(formato_precio(-1234.56), "$-1.234,56");
    }

    #[test]
    fn test_formato_numero_con_decimales() {
        assert_eq!(formato_numero_con_decimales(1234.567, 0), "1.235");
        assert_eq!(formato_numero_con_decimales(1234.567, 1), "1.234,6");
        assert_eq!(formato_numero_con_decimales(1234.567, 2), "1.234,57");
    }

    #[test]
    fn test_formato_incremento() {
        assert_eq!(formato_incremento(10.0), "10%");
        assert_eq!(formato_incremento(12.5), "12,5%");
    }
}
