use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::a001_cliente::Cliente;
use crate::domain::a002_item::{categorias_unicas, Item};
use crate::domain::a003_unidad::Unidad;

// ============================================================================
// Criterio
// ============================================================================

/// Dimensión por la que se seleccionan las tarifas afectadas por una
/// actualización masiva.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterio {
    Cliente,
    Item,
    Unidad,
    Categoria,
}

impl Criterio {
    pub const TODOS: [Criterio; 4] = [
        Criterio::Cliente,
        Criterio::Item,
        Criterio::Unidad,
        Criterio::Categoria,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterio::Cliente => "cliente",
            Criterio::Item => "item",
            Criterio::Unidad => "unidad",
            Criterio::Categoria => "categoria",
        }
    }

    /// Etiqueta de la opción en el selector de criterio.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Criterio::Cliente => "Por Cliente",
            Criterio::Item => "Por Item",
            Criterio::Unidad => "Por Unidad",
            Criterio::Categoria => "Por Categoría de Item",
        }
    }

    /// Valor de un `<select>` de vuelta al criterio.
    pub fn parse(valor: &str) -> Option<Criterio> {
        Criterio::TODOS
            .into_iter()
            .find(|criterio| criterio.as_str() == valor)
    }
}

impl fmt::Display for Criterio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Wire request
// ============================================================================

/// Cuerpo de `POST /api/actualizacion_masiva_tarifas`, con los nombres de
/// campo exactos que espera el endpoint. Las fechas ausentes viajan como
/// `null`, no se omiten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualizacionMasiva {
    pub criterio: Criterio,
    pub seleccion_id: String,
    pub incluir_cliente: bool,
    pub cliente_id: String,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub porcentaje: f64,
    pub usuario: String,
}

/// Token idempotente nuevo para un intento de envío. Viaja en el header
/// `X-Idempotency-Key`; un servidor que deduplica lo usa y uno que no lo
/// hace ve el protocolo original intacto.
pub fn clave_idempotencia() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ============================================================================
// Form state
// ============================================================================

/// Error de validación previo al envío. Nunca llega a la red: el
/// orquestador corta en el primero que encuentra, en este orden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorValidacion {
    SeleccionFaltante,
    ClienteFaltante,
    PorcentajeFaltante,
    PorcentajeInvalido,
}

impl fmt::Display for ErrorValidacion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mensaje = match self {
            ErrorValidacion::SeleccionFaltante => "Debe seleccionar un elemento.",
            ErrorValidacion::ClienteFaltante => "Debe seleccionar un cliente si se incluye.",
            ErrorValidacion::PorcentajeFaltante => "El porcentaje no puede estar vacío.",
            ErrorValidacion::PorcentajeInvalido => "El porcentaje no es un número válido.",
        };
        f.write_str(mensaje)
    }
}

impl std::error::Error for ErrorValidacion {}

/// Estado del formulario de actualización masiva, tal como lo edita el
/// usuario (los campos numéricos y de fecha se mantienen como texto hasta
/// el armado del request).
#[derive(Debug, Clone, PartialEq)]
pub struct FormularioActualizacion {
    pub criterio: Criterio,
    pub seleccion_id: String,
    pub incluir_cliente: bool,
    pub cliente_id: String,
    pub porcentaje: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

impl Default for FormularioActualizacion {
    fn default() -> Self {
        Self {
            criterio: Criterio::Cliente,
            seleccion_id: String::new(),
            incluir_cliente: false,
            cliente_id: String::new(),
            porcentaje: String::new(),
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
        }
    }
}

impl FormularioActualizacion {
    /// Cambia el criterio activo. Un identificador elegido bajo un criterio
    /// no es válido bajo otro, así que la selección vuelve a vacío.
    pub fn cambiar_criterio(&mut self, criterio: Criterio) {
        if self.criterio != criterio {
            self.seleccion_id.clear();
        }
        self.criterio = criterio;
    }

    /// Muestra u oculta el sub-selector de cliente. El `cliente_id` elegido
    /// antes se retiene en el estado; al apagar el flag sólo queda excluido
    /// de la validación y del armado.
    pub fn alternar_incluir_cliente(&mut self, incluir: bool) {
        self.incluir_cliente = incluir;
    }

    /// Validación previa y armado del request, en un solo paso puro.
    ///
    /// Orden de validación, cortando en el primer fallo:
    /// 1. selección no vacía
    /// 2. cliente no vacío si `incluir_cliente`
    /// 3. porcentaje no vacío y parseable como número
    pub fn preparar(&self, usuario: &str) -> Result<ActualizacionMasiva, ErrorValidacion> {
        if self.seleccion_id.is_empty() {
            return Err(ErrorValidacion::SeleccionFaltante);
        }
        if self.incluir_cliente && self.cliente_id.is_empty() {
            return Err(ErrorValidacion::ClienteFaltante);
        }
        let porcentaje = self.porcentaje.trim();
        if porcentaje.is_empty() {
            return Err(ErrorValidacion::PorcentajeFaltante);
        }
        // Sin validación de rango: valores negativos o mayores a 100 viajan
        // tal cual; el servidor es la autoridad.
        let porcentaje: f64 = porcentaje
            .parse()
            .map_err(|_| ErrorValidacion::PorcentajeInvalido)?;

        Ok(ActualizacionMasiva {
            criterio: self.criterio,
            seleccion_id: self.seleccion_id.clone(),
            incluir_cliente: self.incluir_cliente,
            cliente_id: if self.incluir_cliente {
                self.cliente_id.clone()
            } else {
                String::new()
            },
            fecha_inicio: parse_fecha(&self.fecha_inicio),
            fecha_fin: parse_fecha(&self.fecha_fin),
            porcentaje,
            usuario: usuario.to_string(),
        })
    }
}

fn parse_fecha(valor: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(valor.trim(), "%Y-%m-%d").ok()
}

// ============================================================================
// Candidate options
// ============================================================================

/// Una opción seleccionable para el criterio activo.
#[derive(Debug, Clone, PartialEq)]
pub struct Opcion {
    pub valor: String,
    pub etiqueta: String,
}

/// Proyecta las listas de referencia en las opciones del criterio activo.
///
/// Para `categoria` el valor elegido es el nombre de la categoría en sí
/// (la regla de matching del servidor compara contra ese texto), tomado
/// del snapshot de items deduplicado.
pub fn opciones(
    criterio: Criterio,
    clientes: &[Cliente],
    items: &[Item],
    unidades: &[Unidad],
) -> Vec<Opcion> {
    match criterio {
        Criterio::Cliente => clientes
            .iter()
            .map(|cliente| Opcion {
                valor: cliente.id.to_string(),
                etiqueta: cliente.nombre.clone(),
            })
            .collect(),
        Criterio::Item => items
            .iter()
            .map(|item| Opcion {
                valor: item.id.to_string(),
                etiqueta: item.nombre.clone(),
            })
            .collect(),
        Criterio::Unidad => unidades
            .iter()
            .map(|unidad| Opcion {
                valor: unidad.id.to_string(),
                etiqueta: unidad.nombre.clone(),
            })
            .collect(),
        Criterio::Categoria => categorias_unicas(items)
            .into_iter()
            .map(|categoria| Opcion {
                valor: categoria.clone(),
                etiqueta: categoria,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn formulario_valido() -> FormularioActualizacion {
        FormularioActualizacion {
            criterio: Criterio::Item,
            seleccion_id: "42".into(),
            incluir_cliente: false,
            cliente_id: String::new(),
            porcentaje: "10".into(),
            fecha_inicio: "2024-01-01".into(),
            fecha_fin: "2024-02-01".into(),
        }
    }

    #[test]
    fn cambiar_criterio_limpia_la_seleccion() {
        for origen in Criterio::TODOS {
            for destino in Criterio::TODOS {
                if origen == destino {
                    continue;
                }
                let mut formulario = FormularioActualizacion {
                    criterio: origen,
                    seleccion_id: "42".into(),
                    ..Default::default()
                };
                formulario.cambiar_criterio(destino);
                assert_eq!(formulario.criterio, destino);
                assert!(
                    formulario.seleccion_id.is_empty(),
                    "{} -> {} debería limpiar la selección",
                    origen,
                    destino
                );
            }
        }
    }

    #[test]
    fn reafirmar_el_mismo_criterio_conserva_la_seleccion() {
        let mut formulario = FormularioActualizacion {
            criterio: Criterio::Unidad,
            seleccion_id: "3".into(),
            ..Default::default()
        };
        formulario.cambiar_criterio(Criterio::Unidad);
        assert_eq!(formulario.seleccion_id, "3");
    }

    #[test]
    fn seleccion_vacia_corta_primero() {
        // Todo lo demás inválido también: la selección gana por orden.
        let formulario = FormularioActualizacion {
            incluir_cliente: true,
            ..Default::default()
        };
        assert_eq!(
            formulario.preparar("diego"),
            Err(ErrorValidacion::SeleccionFaltante)
        );
    }

    #[test]
    fn cliente_requerido_solo_si_se_incluye() {
        let mut formulario = formulario_valido();
        formulario.incluir_cliente = true;
        formulario.cliente_id = String::new();
        assert_eq!(
            formulario.preparar("diego"),
            Err(ErrorValidacion::ClienteFaltante)
        );

        // Con el flag apagado, el mismo estado pasa.
        formulario.incluir_cliente = false;
        assert!(formulario.preparar("diego").is_ok());
    }

    #[test]
    fn cliente_se_valida_antes_que_porcentaje() {
        let formulario = FormularioActualizacion {
            seleccion_id: "42".into(),
            incluir_cliente: true,
            ..Default::default()
        };
        assert_eq!(
            formulario.preparar("diego"),
            Err(ErrorValidacion::ClienteFaltante)
        );
    }

    #[test]
    fn porcentaje_vacio_rechazado() {
        let mut formulario = formulario_valido();
        formulario.porcentaje = String::new();
        assert_eq!(
            formulario.preparar("diego"),
            Err(ErrorValidacion::PorcentajeFaltante)
        );
    }

    #[test]
    fn porcentaje_no_numerico_rechazado() {
        let mut formulario = formulario_valido();
        formulario.porcentaje = "diez".into();
        assert_eq!(
            formulario.preparar("diego"),
            Err(ErrorValidacion::PorcentajeInvalido)
        );
    }

    #[test]
    fn porcentajes_fuera_de_rango_viajan_sin_tocar() {
        let mut formulario = formulario_valido();
        formulario.porcentaje = "-12.5".into();
        assert_eq!(formulario.preparar("diego").unwrap().porcentaje, -12.5);

        formulario.porcentaje = "250".into();
        assert_eq!(formulario.preparar("diego").unwrap().porcentaje, 250.0);
    }

    #[test]
    fn el_armado_produce_los_campos_del_endpoint() {
        let request = formulario_valido().preparar("diego").unwrap();
        let valor = serde_json::to_value(&request).unwrap();
        assert_eq!(
            valor,
            json!({
                "criterio": "item",
                "seleccionId": "42",
                "incluirCliente": false,
                "clienteId": "",
                "fechaInicio": "2024-01-01",
                "fechaFin": "2024-02-01",
                "porcentaje": 10.0,
                "usuario": "diego",
            })
        );
    }

    #[test]
    fn fechas_ausentes_viajan_como_null() {
        let mut formulario = formulario_valido();
        formulario.fecha_inicio = String::new();
        formulario.fecha_fin = String::new();
        let valor = serde_json::to_value(formulario.preparar("diego").unwrap()).unwrap();
        assert!(valor["fechaInicio"].is_null());
        assert!(valor["fechaFin"].is_null());
        // presentes aunque nulos
        assert!(valor.as_object().unwrap().contains_key("fechaInicio"));
    }

    #[test]
    fn cliente_retenido_pero_apagado_no_viaja() {
        let mut formulario = formulario_valido();
        formulario.incluir_cliente = true;
        formulario.cliente_id = "7".into();
        formulario.alternar_incluir_cliente(false);

        // el estado retiene el valor...
        assert_eq!(formulario.cliente_id, "7");
        // ...pero el request no lo lleva como restricción
        let request = formulario.preparar("diego").unwrap();
        assert_eq!(request.cliente_id, "");
        assert!(!request.incluir_cliente);
    }

    #[test]
    fn opciones_de_categoria_deduplicadas_con_el_nombre_como_valor() {
        let items = vec![
            Item {
                id: 1,
                nombre: "Pallet".into(),
                categoria: "Seco".into(),
            },
            Item {
                id: 2,
                nombre: "Bulto".into(),
                categoria: "Seco".into(),
            },
            Item {
                id: 3,
                nombre: "Tambor".into(),
                categoria: "Refrigerado".into(),
            },
        ];
        let opciones = opciones(Criterio::Categoria, &[], &items, &[]);
        assert_eq!(opciones.len(), 2);
        assert_eq!(opciones[0].valor, "Refrigerado");
        assert_eq!(opciones[0].etiqueta, "Refrigerado");
        assert_eq!(opciones[1].valor, "Seco");
    }

    #[test]
    fn opciones_por_cliente_usan_el_id_como_valor() {
        let clientes = vec![Cliente {
            id: 9,
            nombre: "ESA Logística".into(),
        }];
        let opciones = opciones(Criterio::Cliente, &clientes, &[], &[]);
        assert_eq!(opciones[0].valor, "9");
        assert_eq!(opciones[0].etiqueta, "ESA Logística");
    }

    #[test]
    fn criterio_parse_cubre_los_valores_del_select() {
        for criterio in Criterio::TODOS {
            assert_eq!(Criterio::parse(criterio.as_str()), Some(criterio));
        }
        assert_eq!(Criterio::parse("otro"), None);
    }

    #[test]
    fn claves_idempotentes_distintas_por_intento() {
        assert_ne!(clave_idempotencia(), clave_idempotencia());
    }
}
