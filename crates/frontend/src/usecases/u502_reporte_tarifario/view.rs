use chrono::NaiveDate;
use contracts::domain::a001_cliente::Cliente;
use contracts::domain::a002_item::{Categoria, Item};
use contracts::domain::a003_unidad::Unidad;
use contracts::usecases::u502_reporte_tarifario::{FormatoReporte, SolicitudReporte};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::export::descargar_bytes;
use crate::system::auth::context::use_auth;

/// Generación de reportes del tarifario. Los criterios viajan al API y el
/// archivo vuelve renderizado, listo para descargar.
#[component]
pub fn ReporteTarifarioWidget() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let clientes = RwSignal::new(Vec::<Cliente>::new());
    let items = RwSignal::new(Vec::<Item>::new());
    let categorias = RwSignal::new(Vec::<Categoria>::new());
    let unidades = RwSignal::new(Vec::<Unidad>::new());

    let (cliente_id, set_cliente_id) = signal(String::new());
    let (item_id, set_item_id) = signal(String::new());
    let (categoria_id, set_categoria_id) = signal(String::new());
    let (unidad_id, set_unidad_id) = signal(String::new());
    let (fecha_desde, set_fecha_desde) = signal(String::new());
    let (fecha_hasta, set_fecha_hasta) = signal(String::new());
    let (especifico, set_especifico) = signal(false);

    let (generando, set_generando) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // Cuatro cargas independientes; la que falla deja su combo vacío.
    Effect::new(move || {
        spawn_local(async move {
            match crate::domain::a001_cliente::api::get_clientes().await {
                Ok(lista) => clientes.set(lista),
                Err(error) => log::error!("Error al obtener clientes: {}", error),
            }
        });
        spawn_local(async move {
            match crate::domain::a002_item::api::get_items().await {
                Ok(lista) => items.set(lista),
                Err(error) => log::error!("Error al obtener items: {}", error),
            }
        });
        spawn_local(async move {
            match crate::domain::a002_item::api::get_categorias().await {
                Ok(lista) => categorias.set(lista),
                Err(error) => log::error!("Error al obtener categorías: {}", error),
            }
        });
        spawn_local(async move {
            match crate::domain::a003_unidad::api::get_unidades().await {
                Ok(lista) => unidades.set(lista),
                Err(error) => log::error!("Error al obtener unidades: {}", error),
            }
        });
    });

    let generar = move |formato: FormatoReporte| {
        let solicitud = SolicitudReporte {
            fecha_desde: NaiveDate::parse_from_str(&fecha_desde.get_untracked(), "%Y-%m-%d").ok(),
            fecha_hasta: NaiveDate::parse_from_str(&fecha_hasta.get_untracked(), "%Y-%m-%d").ok(),
            cliente_id: cliente_id.get_untracked(),
            item_id: item_id.get_untracked(),
            categoria_id: categoria_id.get_untracked(),
            unidad_id: unidad_id.get_untracked(),
            especifico: especifico.get_untracked(),
        };
        let access_token = auth_state.get_untracked().access_token.unwrap_or_default();

        set_generando.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::generar_reporte(&solicitud, formato, &access_token).await {
                Ok(bytes) => {
                    if let Err(mensaje) =
                        descargar_bytes(&bytes, formato.mime(), formato.nombre_archivo())
                    {
                        set_error.set(Some(mensaje));
                    }
                }
                Err(mensaje) => {
                    set_error.set(Some(format!("Error al generar el reporte: {}", mensaje)));
                }
            }
            set_generando.set(false);
        });
    };

    let select_style = "width: 220px; padding: 8px; border: 1px solid #ccc; border-radius: 4px;";

    view! {
        <div style="padding: 20px; background: #f0f0f0; border-radius: 8px; max-width: 600px;">
            <h2 style="color: #333; margin-bottom: 20px;">"Generar Reportes de Tarifas"</h2>

            {move || {
                error.get().map(|mensaje| view! {
                    <div style="padding: 10px; background: #e74c3c; border-radius: 4px; color: white; margin-bottom: 15px;">
                        {mensaje}
                    </div>
                })
            }}

            <div style="display: flex; flex-direction: column; gap: 12px;">
                <select
                    style=select_style
                    on:change=move |ev| set_cliente_id.set(event_target_value(&ev))
                >
                    <option value="">"Seleccionar Cliente"</option>
                    {move || clientes.get().into_iter().map(|cliente| view! {
                        <option value=cliente.id.to_string()>{cliente.nombre}</option>
                    }).collect_view()}
                </select>

                <select
                    style=select_style
                    on:change=move |ev| set_item_id.set(event_target_value(&ev))
                >
                    <option value="">"Seleccionar Item"</option>
                    {move || items.get().into_iter().map(|item| view! {
                        <option value=item.id.to_string()>{item.nombre}</option>
                    }).collect_view()}
                </select>

                <select
                    style=select_style
                    on:change=move |ev| set_categoria_id.set(event_target_value(&ev))
                >
                    <option value="">"Seleccionar Categoría"</option>
                    {move || categorias.get().into_iter().map(|categoria| view! {
                        <option value=categoria.id.to_string()>{categoria.nombre}</option>
                    }).collect_view()}
                </select>

                <select
                    style=select_style
                    on:change=move |ev| set_unidad_id.set(event_target_value(&ev))
                >
                    <option value="">"Seleccionar Unidad"</option>
                    {move || unidades.get().into_iter().map(|unidad| view! {
                        <option value=unidad.id.to_string()>{unidad.nombre}</option>
                    }).collect_view()}
                </select>

                <div style="display: flex; gap: 8px;">
                    <input
                        type="date"
                        title="Fecha Desde"
                        style=select_style
                        on:change=move |ev| set_fecha_desde.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        title="Fecha Hasta"
                        style=select_style
                        on:change=move |ev| set_fecha_hasta.set(event_target_value(&ev))
                    />
                </div>

                <label style="display: flex; align-items: center; gap: 8px;">
                    <input
                        type="checkbox"
                        prop:checked=move || especifico.get()
                        on:change=move |ev| set_especifico.set(event_target_checked(&ev))
                    />
                    "Sólo tarifas específicas del cliente"
                </label>

                <div style="display: flex; gap: 10px; margin-top: 8px;">
                    <button
                        style="padding: 10px 15px; background: #e74c3c; color: white; border: none; border-radius: 4px; cursor: pointer;"
                        prop:disabled=move || generando.get()
                        on:click=move |_| generar(FormatoReporte::Pdf)
                    >
                        "Generar PDF"
                    </button>
                    <button
                        style="padding: 10px 15px; background: #28a745; color: white; border: none; border-radius: 4px; cursor: pointer;"
                        prop:disabled=move || generando.get()
                        on:click=move |_| generar(FormatoReporte::Excel)
                    >
                        "Generar Excel"
                    </button>
                </div>
            </div>
        </div>
    }
}
