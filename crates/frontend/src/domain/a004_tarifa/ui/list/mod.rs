use chrono::NaiveDate;
use contracts::domain::a001_cliente::Cliente;
use contracts::domain::a002_item::Item;
use contracts::domain::a003_unidad::Unidad;
use contracts::domain::a004_tarifa::{FiltroTarifas, Tarifa};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use super::details::TarifaDetails;
use crate::shared::date_utils::formato_fecha_opcional;
use crate::shared::export::{exportar_excel, ExcelExportable};
use crate::shared::number_format::{formato_incremento, formato_precio};
use crate::system::auth::context::use_auth;

impl ExcelExportable for Tarifa {
    fn headers() -> Vec<&'static str> {
        vec![
            "Cliente",
            "Categoria",
            "Unidad",
            "Item",
            "Incremento",
            "Precio",
            "Mínimo",
            "Fecha Inicio",
            "Fecha Final",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.cliente.clone(),
            self.categoria.clone(),
            self.unidad.clone(),
            self.item.clone(),
            formato_incremento(self.incremento),
            formato_precio(self.precio),
            self.minimo.to_string(),
            self.fecha_vigencia_inicio.clone().unwrap_or_default(),
            self.fecha_vigencia_final.clone().unwrap_or_default(),
        ]
    }
}

/// Tarifario vigente: búsqueda con filtros, alta/edición/baja y
/// exportación de lo filtrado.
#[component]
pub fn TarifasList() -> impl IntoView {
    let (auth_state, _) = use_auth();

    // listas de referencia para los combos
    let clientes = RwSignal::new(Vec::<Cliente>::new());
    let unidades = RwSignal::new(Vec::<Unidad>::new());
    let items = RwSignal::new(Vec::<Item>::new());

    let tarifas = RwSignal::new(Vec::<Tarifa>::new());
    let (mensaje, set_mensaje) = signal(Option::<String>::None);
    let (buscando, set_buscando) = signal(false);

    // filtros (texto vacío = sin filtro)
    let (filtro_cliente, set_filtro_cliente) = signal(String::new());
    let (filtro_unidad, set_filtro_unidad) = signal(String::new());
    let (filtro_item, set_filtro_item) = signal(String::new());
    let (filtro_desde, set_filtro_desde) = signal(String::new());
    let (filtro_hasta, set_filtro_hasta) = signal(String::new());

    // modal de alta/edición
    let (modal_abierto, set_modal_abierto) = signal(false);
    let (tarifa_editando, set_tarifa_editando) = signal(Option::<Tarifa>::None);

    // Las tres cargas son independientes; si una falla, las otras siguen.
    Effect::new(move || {
        spawn_local(async move {
            match crate::domain::a001_cliente::api::get_clientes().await {
                Ok(lista) => clientes.set(lista),
                Err(error) => log::error!("Error al obtener clientes: {}", error),
            }
        });
        spawn_local(async move {
            match crate::domain::a003_unidad::api::get_unidades().await {
                Ok(lista) => unidades.set(lista),
                Err(error) => log::error!("Error al obtener unidades: {}", error),
            }
        });
        spawn_local(async move {
            match crate::domain::a002_item::api::get_items().await {
                Ok(lista) => items.set(lista),
                Err(error) => log::error!("Error al obtener items: {}", error),
            }
        });
    });

    let filtro_actual = move || FiltroTarifas {
        cliente: filtro_cliente.get_untracked().parse().ok(),
        unidad: filtro_unidad.get_untracked().parse().ok(),
        item: filtro_item.get_untracked().parse().ok(),
        fecha_inicio: NaiveDate::parse_from_str(&filtro_desde.get_untracked(), "%Y-%m-%d").ok(),
        fecha_fin: NaiveDate::parse_from_str(&filtro_hasta.get_untracked(), "%Y-%m-%d").ok(),
    };

    let buscar = move || {
        let filtro = filtro_actual();
        set_buscando.set(true);
        set_mensaje.set(None);
        spawn_local(async move {
            match api::buscar_tarifas(&filtro).await {
                Ok(lista) => tarifas.set(lista),
                Err(error) => {
                    set_mensaje.set(Some(format!("Error al obtener las tarifas: {}", error)));
                }
            }
            set_buscando.set(false);
        });
    };

    let eliminar = move |id: i64| {
        let access_token = auth_state.get_untracked().access_token.unwrap_or_default();
        spawn_local(async move {
            match api::eliminar_tarifa(id, &access_token).await {
                Ok(()) => {
                    set_mensaje.set(Some("Tarifa eliminada exitosamente".to_string()));
                    tarifas.update(|lista| lista.retain(|tarifa| tarifa.id != id));
                }
                Err(error) => {
                    set_mensaje.set(Some(format!("Error al eliminar la tarifa: {}", error)));
                }
            }
        });
    };

    let descargar_excel = move |_| {
        if let Err(error) = exportar_excel(&tarifas.get(), "tarifas.csv") {
            set_mensaje.set(Some(error));
        }
    };

    let select_style = "width: 200px; padding: 6px; border: 1px solid #ccc; border-radius: 4px; margin-right: 8px;";

    view! {
        <div>
            <h1>"Tarifas Vigentes"</h1>

            <div style="margin-bottom: 16px; display: flex; flex-wrap: wrap; gap: 8px; align-items: center;">
                <button
                    style="padding: 8px 16px; background: #00a8ff; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    on:click=move |_| {
                        set_tarifa_editando.set(None);
                        set_modal_abierto.set(true);
                    }
                >
                    "Agregar Tarifa"
                </button>

                <select
                    style=select_style
                    on:change=move |ev| set_filtro_cliente.set(event_target_value(&ev))
                >
                    <option value="">"Cliente"</option>
                    {move || clientes.get().into_iter().map(|cliente| view! {
                        <option value=cliente.id.to_string()>{cliente.nombre}</option>
                    }).collect_view()}
                </select>

                <select
                    style=select_style
                    on:change=move |ev| set_filtro_unidad.set(event_target_value(&ev))
                >
                    <option value="">"Unidad"</option>
                    {move || unidades.get().into_iter().map(|unidad| view! {
                        <option value=unidad.id.to_string()>{unidad.nombre}</option>
                    }).collect_view()}
                </select>

                <select
                    style=select_style
                    on:change=move |ev| set_filtro_item.set(event_target_value(&ev))
                >
                    <option value="">"Item"</option>
                    {move || items.get().into_iter().map(|item| view! {
                        <option value=item.id.to_string()>{item.nombre}</option>
                    }).collect_view()}
                </select>

                <input
                    type="date"
                    style=select_style
                    title="Fecha Inicio"
                    on:change=move |ev| set_filtro_desde.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    style=select_style
                    title="Fecha Final"
                    on:change=move |ev| set_filtro_hasta.set(event_target_value(&ev))
                />

                <button
                    style="padding: 8px 16px; background: #00a8ff; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    prop:disabled=move || buscando.get()
                    on:click=move |_| buscar()
                >
                    {move || if buscando.get() { "Buscando..." } else { "Buscar" }}
                </button>
            </div>

            {move || {
                mensaje.get().map(|texto| {
                    let es_error = texto.starts_with("Error");
                    view! {
                        <div style=format!(
                            "padding: 10px; border-radius: 4px; color: white; margin-bottom: 10px; background: {};",
                            if es_error { "#e74c3c" } else { "#4cd137" },
                        )>
                            {texto}
                        </div>
                    }
                })
            }}

            <div style="overflow-x: auto;">
                <table style="width: 100%; border-collapse: collapse; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                    <thead>
                        <tr style="background: #f8f9fa; border-bottom: 2px solid #dee2e6;">
                            <th style="padding: 10px; text-align: left;">"Cliente"</th>
                            <th style="padding: 10px; text-align: left;">"Categoria"</th>
                            <th style="padding: 10px; text-align: left;">"Unidad"</th>
                            <th style="padding: 10px; text-align: left;">"Item"</th>
                            <th style="padding: 10px; text-align: right;">"Incremento"</th>
                            <th style="padding: 10px; text-align: right;">"Precio"</th>
                            <th style="padding: 10px; text-align: right;">"Mínimo"</th>
                            <th style="padding: 10px; text-align: left;">"Fecha Inicio"</th>
                            <th style="padding: 10px; text-align: left;">"Fecha Final"</th>
                            <th style="padding: 10px; text-align: center;">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || tarifas.get().into_iter().enumerate().map(|(idx, tarifa)| {
                            let fondo = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                            let tarifa_editar = tarifa.clone();
                            let id = tarifa.id;
                            view! {
                                <tr style=format!("background: {}; border-bottom: 1px solid #eee;", fondo)>
                                    <td style="padding: 8px;">{tarifa.cliente.clone()}</td>
                                    <td style="padding: 8px;">{tarifa.categoria.clone()}</td>
                                    <td style="padding: 8px;">{tarifa.unidad.clone()}</td>
                                    <td style="padding: 8px;">{tarifa.item.clone()}</td>
                                    <td style="padding: 8px; text-align: right;">{formato_incremento(tarifa.incremento)}</td>
                                    <td style="padding: 8px; text-align: right;">{formato_precio(tarifa.precio)}</td>
                                    <td style="padding: 8px; text-align: right;">{tarifa.minimo}</td>
                                    <td style="padding: 8px;">{formato_fecha_opcional(&tarifa.fecha_vigencia_inicio)}</td>
                                    <td style="padding: 8px;">{formato_fecha_opcional(&tarifa.fecha_vigencia_final)}</td>
                                    <td style="padding: 8px; text-align: center; white-space: nowrap;">
                                        <button
                                            style="padding: 4px 10px; margin-right: 6px; background: #00a8ff; color: white; border: none; border-radius: 4px; cursor: pointer;"
                                            on:click=move |_| {
                                                set_tarifa_editando.set(Some(tarifa_editar.clone()));
                                                set_modal_abierto.set(true);
                                            }
                                        >
                                            "Editar"
                                        </button>
                                        <button
                                            style="padding: 4px 10px; background: #e74c3c; color: white; border: none; border-radius: 4px; cursor: pointer;"
                                            on:click=move |_| eliminar(id)
                                        >
                                            "Eliminar"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <button
                style="margin-top: 16px; padding: 8px 16px; background: #28a745; color: white; border: none; border-radius: 4px; cursor: pointer;"
                on:click=descargar_excel
            >
                "Descargar Excel"
            </button>

            {move || {
                if modal_abierto.get() {
                    view! {
                        <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); display: flex; align-items: flex-start; justify-content: center; z-index: 1000; padding-top: 40px;">
                            <div style="background: white; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); width: 480px; max-height: calc(100vh - 80px); overflow-y: auto;">
                                <TarifaDetails
                                    tarifa=tarifa_editando.get()
                                    clientes=clientes
                                    unidades=unidades
                                    items=items
                                    on_saved=move |_| {
                                        set_modal_abierto.set(false);
                                        set_mensaje.set(Some(
                                            "Tarifa guardada exitosamente".to_string(),
                                        ));
                                        buscar();
                                    }
                                    on_cancel=move |_| set_modal_abierto.set(false)
                                />
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
