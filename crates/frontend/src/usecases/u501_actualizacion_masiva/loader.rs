use contracts::domain::a001_cliente::Cliente;
use contracts::domain::a002_item::Item;
use contracts::domain::a003_unidad::Unidad;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::request_gen::GeneracionPeticiones;

/// Snapshot de las listas de referencia que alimentan el selector de
/// criterio. Se cargan al montar y quedan de sólo lectura por sesión.
#[derive(Clone, Copy)]
pub struct Referencias {
    pub clientes: RwSignal<Vec<Cliente>>,
    pub items: RwSignal<Vec<Item>>,
    pub unidades: RwSignal<Vec<Unidad>>,
}

impl Referencias {
    pub fn new() -> Self {
        Self {
            clientes: RwSignal::new(Vec::new()),
            items: RwSignal::new(Vec::new()),
            unidades: RwSignal::new(Vec::new()),
        }
    }
}

impl Default for Referencias {
    fn default() -> Self {
        Self::new()
    }
}

/// Lanza las tres cargas de referencia, independientes entre sí: la caída
/// de una no bloquea a las otras, sólo deja su lista vacía y el error en
/// el log del operador.
///
/// Toda la tanda comparte un número de generación; si se lanza una tanda
/// nueva con una anterior todavía en vuelo, las respuestas viejas se
/// descartan en lugar de pisar datos más nuevos.
pub fn cargar_referencias(referencias: Referencias, generacion: &GeneracionPeticiones) {
    let numero = generacion.iniciar();

    {
        let guardia = generacion.clone();
        spawn_local(async move {
            match crate::domain::a001_cliente::api::get_clientes().await {
                Ok(lista) if guardia.es_vigente(numero) => referencias.clientes.set(lista),
                Ok(_) => log::warn!("clientes: respuesta de una carga anterior, descartada"),
                Err(error) => log::error!("Error al obtener clientes: {}", error),
            }
        });
    }

    {
        let guardia = generacion.clone();
        spawn_local(async move {
            match crate::domain::a002_item::api::get_items().await {
                Ok(lista) if guardia.es_vigente(numero) => referencias.items.set(lista),
                Ok(_) => log::warn!("items: respuesta de una carga anterior, descartada"),
                Err(error) => log::error!("Error al obtener items: {}", error),
            }
        });
    }

    {
        let guardia = generacion.clone();
        spawn_local(async move {
            match crate::domain::a003_unidad::api::get_unidades().await {
                Ok(lista) if guardia.es_vigente(numero) => referencias.unidades.set(lista),
                Ok(_) => log::warn!("unidades: respuesta de una carga anterior, descartada"),
                Err(error) => log::error!("Error al obtener unidades: {}", error),
            }
        });
    }
}
