use chrono::NaiveDate;
use contracts::domain::a001_cliente::Cliente;
use contracts::domain::a002_item::Item;
use contracts::domain::a003_unidad::Unidad;
use contracts::domain::a005_tarifa_rango::{TarifaRango, TarifaRangoDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::super::api;
use crate::system::auth::context::use_auth;

fn parse_fecha_iso(valor: &Option<String>) -> Option<NaiveDate> {
    let valor = valor.as_deref()?;
    let parte_fecha = valor.split('T').next().unwrap_or(valor);
    NaiveDate::parse_from_str(parte_fecha, "%Y-%m-%d").ok()
}

fn dto_desde(tarifa: &Option<TarifaRango>) -> TarifaRangoDto {
    match tarifa {
        Some(tarifa) => TarifaRangoDto {
            cliente_id: tarifa.cliente_id,
            unidad_id: tarifa.unidad_id,
            item_id: tarifa.item_id,
            precio: Some(tarifa.precio),
            incremento: Some(tarifa.incremento),
            minimo: Some(tarifa.minimo),
            fecha_vigencia_inicio: parse_fecha_iso(&tarifa.fecha_vigencia_inicio),
            fecha_vigencia_final: parse_fecha_iso(&tarifa.fecha_vigencia_final),
        },
        None => TarifaRangoDto::default(),
    }
}

/// Formulario modal de alta/edición de tarifa por rango.
#[component]
pub fn TarifaRangoDetails(
    tarifa: Option<TarifaRango>,
    clientes: RwSignal<Vec<Cliente>>,
    unidades: RwSignal<Vec<Unidad>>,
    items: RwSignal<Vec<Item>>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    let modo_edicion = tarifa.is_some();
    let tarifa_id = tarifa.as_ref().map(|t| t.id);
    let form = RwSignal::new(dto_desde(&tarifa));
    let (error, set_error) = signal(Option::<String>::None);
    let (guardando, set_guardando) = signal(false);

    let on_guardar = move |_| {
        let dto = form.get();
        if let Err(mensaje) = dto.validate() {
            set_error.set(Some(mensaje));
            return;
        }

        let access_token = auth_state.get_untracked().access_token.unwrap_or_default();
        set_guardando.set(true);
        set_error.set(None);

        spawn_local(async move {
            let resultado = match tarifa_id {
                Some(id) => api::editar_tarifa_rango(id, &dto, &access_token).await,
                None => api::crear_tarifa_rango(&dto, &access_token).await,
            };
            match resultado {
                Ok(()) => on_saved.run(()),
                Err(mensaje) => {
                    log::error!("Error al guardar la tarifa por rango: {}", mensaje);
                    set_error.set(Some(mensaje));
                }
            }
            set_guardando.set(false);
        });
    };

    let input_style = "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px; box-sizing: border-box;";
    let label_style = "display: block; margin: 10px 0 4px 0; font-weight: bold;";

    view! {
        <div style="padding: 20px;">
            <h3 style="margin-top: 0;">
                {if modo_edicion { "Editar Tarifa" } else { "Agregar Tarifa" }}
            </h3>

            {move || {
                error.get().map(|mensaje| view! {
                    <div style="padding: 10px; background: #fee; border: 1px solid #fcc; border-radius: 4px; color: #c00; margin-bottom: 10px;">
                        {mensaje}
                    </div>
                })
            }}

            <label style=label_style>"Cliente"</label>
            <select
                style=input_style
                prop:value=move || form.get().cliente_id.map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    form.update(|dto| dto.cliente_id = event_target_value(&ev).parse().ok());
                }
            >
                <option value="">"Seleccione un cliente"</option>
                {move || clientes.get().into_iter().map(|cliente| view! {
                    <option value=cliente.id.to_string()>{cliente.nombre}</option>
                }).collect_view()}
            </select>

            <label style=label_style>"Unidad"</label>
            <select
                style=input_style
                prop:value=move || form.get().unidad_id.map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    form.update(|dto| dto.unidad_id = event_target_value(&ev).parse().ok());
                }
            >
                <option value="">"Seleccione una unidad"</option>
                {move || unidades.get().into_iter().map(|unidad| view! {
                    <option value=unidad.id.to_string()>{unidad.nombre}</option>
                }).collect_view()}
            </select>

            <label style=label_style>"Item"</label>
            <select
                style=input_style
                prop:value=move || form.get().item_id.map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    form.update(|dto| dto.item_id = event_target_value(&ev).parse().ok());
                }
            >
                <option value="">"Seleccione un item"</option>
                {move || items.get().into_iter().map(|item| view! {
                    <option value=item.id.to_string()>{item.nombre}</option>
                }).collect_view()}
            </select>

            <label style=label_style>"Precio"</label>
            <input
                type="number"
                step="any"
                placeholder="Ingrese el precio"
                style=input_style
                prop:value=move || form.get().precio.map(|v| v.to_string()).unwrap_or_default()
                on:input=move |ev| {
                    form.update(|dto| dto.precio = event_target_value(&ev).parse().ok());
                }
            />

            <label style=label_style>"Mínimo"</label>
            <input
                type="number"
                step="any"
                placeholder="Ingrese el mínimo"
                style=input_style
                prop:value=move || form.get().minimo.map(|v| v.to_string()).unwrap_or_default()
                on:input=move |ev| {
                    form.update(|dto| dto.minimo = event_target_value(&ev).parse().ok());
                }
            />

            <label style=label_style>"Incremento"</label>
            <input
                type="number"
                step="any"
                placeholder="Ingrese el incremento"
                style=input_style
                prop:value=move || form.get().incremento.map(|v| v.to_string()).unwrap_or_default()
                on:input=move |ev| {
                    form.update(|dto| dto.incremento = event_target_value(&ev).parse().ok());
                }
            />

            <label style=label_style>"Fecha de Inicio"</label>
            <input
                type="date"
                style=input_style
                prop:value=move || {
                    form.get()
                        .fecha_vigencia_inicio
                        .map(|fecha| fecha.format("%Y-%m-%d").to_string())
                        .unwrap_or_default()
                }
                on:change=move |ev| {
                    form.update(|dto| {
                        dto.fecha_vigencia_inicio =
                            NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
                    });
                }
            />

            <label style=label_style>"Fecha de Finalización"</label>
            <input
                type="date"
                style=input_style
                prop:value=move || {
                    form.get()
                        .fecha_vigencia_final
                        .map(|fecha| fecha.format("%Y-%m-%d").to_string())
                        .unwrap_or_default()
                }
                on:change=move |ev| {
                    form.update(|dto| {
                        dto.fecha_vigencia_final =
                            NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
                    });
                }
            />

            <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 20px;">
                <button
                    style="padding: 8px 16px; background: #dcdde1; border: none; border-radius: 4px; cursor: pointer;"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancelar"
                </button>
                <button
                    style="padding: 8px 16px; background: #4cd137; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    prop:disabled=move || guardando.get()
                    on:click=on_guardar
                >
                    {move || if guardando.get() {
                        "Guardando..."
                    } else if modo_edicion {
                        "Guardar"
                    } else {
                        "Agregar"
                    }}
                </button>
            </div>
        </div>
    }
}
