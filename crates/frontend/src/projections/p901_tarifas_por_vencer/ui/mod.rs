use contracts::projections::p901_tarifas_por_vencer::ClientePorVencer;
use contracts::usecases::u501_actualizacion_masiva::{
    Criterio, FormularioActualizacion, ResultadoActualizacion,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::system::auth::context::use_auth;
use crate::usecases::u501_actualizacion_masiva::api as actualizacion_api;

/// Clientes con tarifas por vencer. La acción de renovación por cliente
/// reusa el protocolo de actualización masiva, acotado a ese cliente.
#[component]
pub fn TarifasPorVencerList() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let clientes_vencidos = RwSignal::new(Vec::<ClientePorVencer>::new());
    let (cargado, set_cargado) = signal(false);
    let (resultado, set_resultado) = signal(Option::<ResultadoActualizacion>::None);

    // cliente elegido para renovar (None = modal cerrado)
    let (cliente_renovando, set_cliente_renovando) = signal(Option::<ClientePorVencer>::None);
    let (fecha_inicio, set_fecha_inicio) = signal(String::new());
    let (fecha_fin, set_fecha_fin) = signal(String::new());
    let (porcentaje, set_porcentaje) = signal(String::new());
    let (enviando, set_enviando) = signal(false);

    Effect::new(move || {
        spawn_local(async move {
            match api::get_clientes_por_vencer().await {
                Ok(lista) => clientes_vencidos.set(lista),
                Err(error) => log::error!("Error al obtener tarifas por vencer: {}", error),
            }
            set_cargado.set(true);
        });
    });

    let on_renovar = move |_| {
        let Some(cliente) = cliente_renovando.get_untracked() else {
            return;
        };

        let formulario = FormularioActualizacion {
            criterio: Criterio::Cliente,
            seleccion_id: cliente.id.to_string(),
            porcentaje: porcentaje.get_untracked(),
            fecha_inicio: fecha_inicio.get_untracked(),
            fecha_fin: fecha_fin.get_untracked(),
            ..Default::default()
        };

        let estado = auth_state.get_untracked();
        let usuario = estado.username();
        let access_token = estado.access_token.unwrap_or_default();

        match formulario.preparar(&usuario) {
            Err(error) => {
                set_resultado.set(Some(ResultadoActualizacion::Fallo(error.to_string())));
            }
            Ok(request) => {
                set_enviando.set(true);
                set_resultado.set(None);
                spawn_local(async move {
                    let resultado =
                        actualizacion_api::enviar_actualizacion(&request, &access_token).await;
                    if resultado.es_exito() {
                        set_cliente_renovando.set(None);
                    }
                    set_resultado.set(Some(resultado));
                    set_enviando.set(false);
                });
            }
        }
    };

    let input_style = "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px; box-sizing: border-box;";
    let label_style = "display: block; margin: 10px 0 4px 0; font-weight: bold;";

    view! {
        <div style="padding: 20px; background: #f8f9fa; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
            <h2 style="color: #343a40;">"Clientes con Tarifas a Vencer"</h2>

            {move || {
                resultado.get().map(|res| {
                    let fondo = if res.es_exito() { "#4cd137" } else { "#e74c3c" };
                    view! {
                        <div style=format!(
                            "margin-bottom: 10px; padding: 10px; border-radius: 4px; color: white; background: {};",
                            fondo,
                        )>
                            {res.banner()}
                        </div>
                    }
                })
            }}

            {move || {
                if cargado.get() && clientes_vencidos.get().is_empty() {
                    view! { <p>"No hay tarifas por vencer en este momento."</p> }.into_any()
                } else {
                    view! {
                        <table style="width: 100%; border-collapse: collapse; background: white;">
                            <thead>
                                <tr style="background: #f8f9fa; border-bottom: 2px solid #dee2e6;">
                                    <th style="padding: 10px; text-align: left;">"ID Cliente"</th>
                                    <th style="padding: 10px; text-align: left;">"Nombre del Cliente"</th>
                                    <th style="padding: 10px; text-align: center;">"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || clientes_vencidos.get().into_iter().map(|cliente| {
                                    let cliente_modal = cliente.clone();
                                    view! {
                                        <tr style="border-bottom: 1px solid #eee;">
                                            <td style="padding: 8px;">{cliente.id}</td>
                                            <td style="padding: 8px;">{cliente.nombre.clone()}</td>
                                            <td style="padding: 8px; text-align: center;">
                                                <button
                                                    style="padding: 4px 10px; background: #00a8ff; color: white; border: none; border-radius: 4px; cursor: pointer;"
                                                    on:click=move |_| {
                                                        set_porcentaje.set(String::new());
                                                        set_fecha_inicio.set(String::new());
                                                        set_fecha_fin.set(String::new());
                                                        set_cliente_renovando.set(Some(cliente_modal.clone()));
                                                    }
                                                >
                                                    "Actualizar Tarifa"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}

            {move || {
                cliente_renovando.get().map(|cliente| view! {
                    <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); display: flex; align-items: flex-start; justify-content: center; z-index: 1000; padding-top: 40px;">
                        <div style="background: white; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); width: 420px; padding: 20px;">
                            <h3 style="margin-top: 0;">
                                {format!("Renovar tarifas de {}", cliente.nombre)}
                            </h3>

                            <label style=label_style>"Fecha Vigencia Inicio"</label>
                            <input
                                type="date"
                                style=input_style
                                prop:value=move || fecha_inicio.get()
                                on:change=move |ev| set_fecha_inicio.set(event_target_value(&ev))
                            />

                            <label style=label_style>"Fecha Vigencia Final"</label>
                            <input
                                type="date"
                                style=input_style
                                prop:value=move || fecha_fin.get()
                                on:change=move |ev| set_fecha_fin.set(event_target_value(&ev))
                            />

                            <label style=label_style>"Porcentaje"</label>
                            <input
                                type="number"
                                step="any"
                                style=input_style
                                prop:value=move || porcentaje.get()
                                on:input=move |ev| set_porcentaje.set(event_target_value(&ev))
                            />

                            <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 20px;">
                                <button
                                    style="padding: 8px 16px; background: #dcdde1; border: none; border-radius: 4px; cursor: pointer;"
                                    on:click=move |_| set_cliente_renovando.set(None)
                                >
                                    "Cancelar"
                                </button>
                                <button
                                    style="padding: 8px 16px; background: #4cd137; color: white; border: none; border-radius: 4px; cursor: pointer;"
                                    prop:disabled=move || enviando.get()
                                    on:click=on_renovar
                                >
                                    {move || if enviando.get() { "Enviando..." } else { "Actualizar" }}
                                </button>
                            </div>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}
