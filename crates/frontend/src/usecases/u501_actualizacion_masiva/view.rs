use contracts::usecases::u501_actualizacion_masiva::{
    opciones, Criterio, FormularioActualizacion, ResultadoActualizacion,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::loader::{cargar_referencias, Referencias};
use crate::shared::request_gen::GeneracionPeticiones;
use crate::system::auth::context::use_auth;

/// Actualización masiva de tarifas: el ajuste porcentual de todas las
/// tarifas que matchean un criterio, con alcance opcional a un cliente y
/// una ventana de vigencia nueva.
#[component]
pub fn ActualizacionMasivaWidget() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let referencias = Referencias::new();
    let generacion = GeneracionPeticiones::new();

    let formulario = RwSignal::new(FormularioActualizacion::default());
    let (enviando, set_enviando) = signal(false);
    let (resultado, set_resultado) = signal(Option::<ResultadoActualizacion>::None);

    Effect::new(move || {
        cargar_referencias(referencias, &generacion);
    });

    // opciones del segundo selector, según el criterio activo
    let opciones_actuales = move || {
        let criterio = formulario.get().criterio;
        opciones(
            criterio,
            &referencias.clientes.get(),
            &referencias.items.get(),
            &referencias.unidades.get(),
        )
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let estado = auth_state.get_untracked();
        let usuario = estado.username();
        let access_token = estado.access_token.unwrap_or_default();

        match formulario.get_untracked().preparar(&usuario) {
            Err(error) => {
                // validación en cliente: no sale nada a la red
                set_resultado.set(Some(ResultadoActualizacion::Fallo(error.to_string())));
            }
            Ok(request) => {
                set_enviando.set(true);
                set_resultado.set(None);
                spawn_local(async move {
                    let resultado = api::enviar_actualizacion(&request, &access_token).await;
                    set_resultado.set(Some(resultado));
                    set_enviando.set(false);
                });
            }
        }
    };

    let input_style = "padding: 8px; border: 1px solid #ccc; border-radius: 4px;";

    view! {
        <div style="padding: 20px; background: #f0f0f0; border-radius: 8px; max-width: 600px;">
            <h2 style="color: #333; margin-bottom: 20px;">"Actualización Masiva de Tarifas"</h2>

            <form
                style="display: flex; flex-direction: column; gap: 15px;"
                on:submit=on_submit
            >
                <select
                    style=input_style
                    prop:value=move || formulario.get().criterio.as_str()
                    on:change=move |ev| {
                        if let Some(criterio) = Criterio::parse(&event_target_value(&ev)) {
                            formulario.update(|f| f.cambiar_criterio(criterio));
                        }
                    }
                >
                    {Criterio::TODOS
                        .into_iter()
                        .map(|criterio| view! {
                            <option value=criterio.as_str()>{criterio.etiqueta()}</option>
                        })
                        .collect_view()}
                </select>

                <select
                    style=input_style
                    prop:value=move || formulario.get().seleccion_id
                    on:change=move |ev| {
                        formulario.update(|f| f.seleccion_id = event_target_value(&ev));
                    }
                >
                    <option value="">
                        {move || format!("Seleccione {}", formulario.get().criterio)}
                    </option>
                    {move || opciones_actuales().into_iter().map(|opcion| view! {
                        <option value=opcion.valor.clone()>{opcion.etiqueta.clone()}</option>
                    }).collect_view()}
                </select>

                <label style="display: flex; align-items: center; gap: 8px;">
                    <input
                        type="checkbox"
                        prop:checked=move || formulario.get().incluir_cliente
                        on:change=move |ev| {
                            formulario.update(|f| {
                                f.alternar_incluir_cliente(event_target_checked(&ev));
                            });
                        }
                    />
                    "Incluir cliente específico"
                </label>

                <Show when=move || formulario.get().incluir_cliente>
                    <select
                        style=input_style
                        prop:value=move || formulario.get().cliente_id
                        on:change=move |ev| {
                            formulario.update(|f| f.cliente_id = event_target_value(&ev));
                        }
                    >
                        <option value="">"Seleccione un cliente"</option>
                        {move || referencias.clientes.get().into_iter().map(|cliente| view! {
                            <option value=cliente.id.to_string()>{cliente.nombre}</option>
                        }).collect_view()}
                    </select>
                </Show>

                <input
                    type="number"
                    step="any"
                    placeholder="Porcentaje"
                    style=input_style
                    prop:value=move || formulario.get().porcentaje
                    on:input=move |ev| {
                        formulario.update(|f| f.porcentaje = event_target_value(&ev));
                    }
                />

                <input
                    type="date"
                    title="Fecha de vigencia inicio"
                    style=input_style
                    prop:value=move || formulario.get().fecha_inicio
                    on:change=move |ev| {
                        formulario.update(|f| f.fecha_inicio = event_target_value(&ev));
                    }
                />
                <input
                    type="date"
                    title="Fecha de vigencia fin"
                    style=input_style
                    prop:value=move || formulario.get().fecha_fin
                    on:change=move |ev| {
                        formulario.update(|f| f.fecha_fin = event_target_value(&ev));
                    }
                />

                // El candado contra el doble click vive acá, no en el
                // orquestador: el botón queda deshabilitado mientras hay
                // un envío en vuelo.
                <button
                    type="submit"
                    style="padding: 10px 15px; background: #4cd137; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 16px;"
                    prop:disabled=move || enviando.get()
                >
                    {move || if enviando.get() { "Actualizando..." } else { "Actualizar Tarifas" }}
                </button>
            </form>

            {move || {
                resultado.get().map(|res| {
                    let fondo = if res.es_exito() { "#4cd137" } else { "#e74c3c" };
                    view! {
                        <div style=format!(
                            "margin-top: 20px; padding: 10px; border-radius: 4px; color: white; background: {};",
                            fondo,
                        )>
                            {res.banner()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
