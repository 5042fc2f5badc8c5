use contracts::domain::a001_cliente::Cliente;
use contracts::domain::a002_item::Item;
use contracts::domain::a003_unidad::Unidad;
use contracts::domain::a005_tarifa_rango::TarifaRango;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use super::details::TarifaRangoDetails;
use crate::shared::date_utils::formato_fecha_opcional;
use crate::shared::number_format::{formato_incremento, formato_precio};
use crate::system::auth::context::use_auth;

/// Gestión del tarifario por rango: lista completa más alta, edición y
/// baja. Esta pantalla no filtra del lado del servidor.
#[component]
pub fn TarifasRangoList() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let clientes = RwSignal::new(Vec::<Cliente>::new());
    let unidades = RwSignal::new(Vec::<Unidad>::new());
    let items = RwSignal::new(Vec::<Item>::new());

    let tarifas = RwSignal::new(Vec::<TarifaRango>::new());
    let (mensaje, set_mensaje) = signal(Option::<String>::None);

    let (modal_abierto, set_modal_abierto) = signal(false);
    let (tarifa_editando, set_tarifa_editando) = signal(Option::<TarifaRango>::None);

    let cargar = move || {
        spawn_local(async move {
            match api::get_tarifas_rango().await {
                Ok(lista) => tarifas.set(lista),
                Err(error) => {
                    set_mensaje.set(Some(format!(
                        "Error al obtener las tarifas por rango: {}",
                        error
                    )));
                }
            }
        });
    };

    Effect::new(move || {
        cargar();
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

    let eliminar = move |id: i64| {
        let access_token = auth_state.get_untracked().access_token.unwrap_or_default();
        spawn_local(async move {
            match api::eliminar_tarifa_rango(id, &access_token).await {
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

    view! {
        <div>
            <h2>"Gestión de Tarifas por Rango"</h2>

            <button
                style="margin-bottom: 16px; padding: 8px 16px; background: #00a8ff; color: white; border: none; border-radius: 4px; cursor: pointer;"
                on:click=move |_| {
                    set_tarifa_editando.set(None);
                    set_modal_abierto.set(true);
                }
            >
                "Agregar Tarifa"
            </button>

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
                            <th style="padding: 10px; text-align: left;">"Categoría"</th>
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

            {move || {
                if modal_abierto.get() {
                    view! {
                        <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); display: flex; align-items: flex-start; justify-content: center; z-index: 1000; padding-top: 40px;">
                            <div style="background: white; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); width: 480px; max-height: calc(100vh - 80px); overflow-y: auto;">
                                <TarifaRangoDetails
                                    tarifa=tarifa_editando.get()
                                    clientes=clientes
                                    unidades=unidades
                                    items=items
                                    on_saved=move |_| {
                                        set_modal_abierto.set(false);
                                        set_mensaje.set(Some(
                                            "Tarifa guardada exitosamente".to_string(),
                                        ));
                                        cargar();
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
