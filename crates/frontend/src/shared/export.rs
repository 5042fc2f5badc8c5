/// Exportación de tablas a CSV compatible con Excel y descarga de archivos
/// generados por el servidor.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait para los tipos que pueden exportarse como planilla.
pub trait ExcelExportable {
    /// Encabezados de columna, en orden.
    fn headers() -> Vec<&'static str>;

    /// Proyección de la fila a valores de celda.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Exporta las filas a un CSV con separador `;` e inicia la descarga.
pub fn exportar_excel<T: ExcelExportable>(filas: &[T], nombre_archivo: &str) -> Result<(), String> {
    if filas.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }

    let mut contenido = String::new();

    // BOM UTF-8 para que Excel interprete bien los acentos
    contenido.push('\u{FEFF}');

    let encabezados = T::headers();
    contenido.push_str(&encabezados.join(";"));
    contenido.push('\n');

    for fila in filas {
        let celdas: Vec<String> = fila
            .to_csv_row()
            .iter()
            .map(|celda| escapar_celda(celda))
            .collect();
        contenido.push_str(&celdas.join(";"));
        contenido.push('\n');
    }

    let blob = crear_blob_texto(&contenido, "text/csv;charset=utf-8;")?;
    descargar_blob(&blob, nombre_archivo)
}

/// Descarga un archivo binario que ya generó el servidor (reportes PDF y
/// Excel).
pub fn descargar_bytes(bytes: &[u8], mime: &str, nombre_archivo: &str) -> Result<(), String> {
    let secuencia = js_sys::Array::new();
    secuencia.push(&js_sys::Uint8Array::from(bytes));

    let propiedades = BlobPropertyBag::new();
    propiedades.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&secuencia, &propiedades)
        .map_err(|e| format!("No se pudo crear el blob: {:?}", e))?;
    descargar_blob(&blob, nombre_archivo)
}

/// Escapa una celda si contiene separadores, comillas o saltos de línea.
fn escapar_celda(celda: &str) -> String {
    if celda.contains(';') || celda.contains('"') || celda.contains('\n') || celda.contains('\r') {
        let escapada = celda.replace('"', "\"\"");
        format!("\"{}\"", escapada)
    } else {
        celda.to_string()
    }
}

fn crear_blob_texto(contenido: &str, mime: &str) -> Result<Blob, String> {
    let secuencia = js_sys::Array::new();
    secuencia.push(&wasm_bindgen::JsValue::from_str(contenido));

    let propiedades = BlobPropertyBag::new();
    propiedades.set_type(mime);

    Blob::new_with_str_sequence_and_options(&secuencia, &propiedades)
        .map_err(|e| format!("No se pudo crear el blob: {:?}", e))
}

/// Dispara la descarga de un blob a través de un anchor temporal.
pub fn descargar_blob(blob: &Blob, nombre_archivo: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("No se pudo crear la URL del blob: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("No se pudo crear el anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "El elemento creado no es un anchor".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(nombre_archivo);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("No se pudo ocultar el anchor: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("No se pudo insertar el anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("No se pudo quitar el anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("No se pudo liberar la URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celdas_simples_pasan_sin_tocar() {
        assert_eq!(escapar_celda("ESA"), "ESA");
        assert_eq!(escapar_celda("1.234,56"), "1.234,56");
    }

    #[test]
    fn celdas_con_separador_o_comillas_se_escapan() {
        assert_eq!(escapar_celda("a;b"), "\"a;b\"");
        assert_eq!(escapar_celda("dijo \"hola\""), "\"dijo \"\"hola\"\"\"");
        assert_eq!(escapar_celda("línea\nnueva"), "\"línea\nnueva\"");
    }
}
