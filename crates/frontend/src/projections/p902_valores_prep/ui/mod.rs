use chrono::NaiveDate;
use contracts::domain::a001_cliente::Cliente;
use contracts::projections::p902_valores_prep::{fecha_compacta, NuevoValorPrep, ValorPrepKilo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::formato_fecha_opcional;
use crate::shared::export::{exportar_excel, ExcelExportable};
use crate::shared::number_format::formato_precio;
use crate::system::auth::context::use_auth;

impl ExcelExportable for ValorPrepKilo {
    fn headers() -> Vec<&'static str> {
        vec!["Cliente", "Fecha Inicio", "Fecha Final", "Valor"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.fecha_inicio.clone().unwrap_or_default(),
            self.fecha_final.clone().unwrap_or_default(),
            formato_precio(self.valor_kilo_prep),
        ]
    }
}

/// Valores prep por kilo: tabla, alta y exportación.
#[component]
pub fn ValoresPrepList() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let reportes = RwSignal::new(Vec::<ValorPrepKilo>::new());
    let clientes = RwSignal::new(Vec::<Cliente>::new());
    let (mensaje, set_mensaje) = signal(Option::<String>::None);

    // formulario de alta
    let (modal_abierto, set_modal_abierto) = signal(false);
    let (cliente_id, set_cliente_id) = signal(String::new());
    let (fecha_inicio, set_fecha_inicio) = signal(String::new());
    let (fecha_final, set_fecha_final) = signal(String::new());
    let (valor, set_valor) = signal(String::new());
    let (guardando, set_guardando) = signal(false);

    let cargar = move || {
        spawn_local(async move {
            match api::get_valores_prep().await {
                Ok(lista) => reportes.set(lista),
                Err(error) => {
                    set_mensaje.set(Some(format!("Error al cargar los datos: {}", error)));
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
    });

    let on_agregar = move |_| {
        let Ok(cliente_id) = cliente_id.get_untracked().parse::<i64>() else {
            set_mensaje.set(Some("Selecciona un cliente".to_string()));
            return;
        };
        let Ok(desde) =
            NaiveDate::parse_from_str(&fecha_inicio.get_untracked(), "%Y-%m-%d")
        else {
            set_mensaje.set(Some("Selecciona una fecha de inicio".to_string()));
            return;
        };
        let Ok(hasta) = NaiveDate::parse_from_str(&fecha_final.get_untracked(), "%Y-%m-%d")
        else {
            set_mensaje.set(Some("Selecciona una fecha de final".to_string()));
            return;
        };
        let Ok(valor) = valor.get_untracked().parse::<f64>() else {
            set_mensaje.set(Some("Ingresa un valor".to_string()));
            return;
        };

        // Este endpoint espera las fechas compactas YYYYMMDD
        let nuevo = NuevoValorPrep {
            cliente_id,
            fecha_inicio: fecha_compacta(desde),
            fecha_final: fecha_compacta(hasta),
            valor,
        };

        let access_token = auth_state.get_untracked().access_token.unwrap_or_default();
        set_guardando.set(true);
        spawn_local(async move {
            match api::agregar_valor_prep(&nuevo, &access_token).await {
                Ok(()) => {
                    set_mensaje.set(Some("Reporte agregado exitosamente".to_string()));
                    set_modal_abierto.set(false);
                    cargar();
                }
                Err(error) => {
                    set_mensaje.set(Some(format!("Error al agregar el reporte: {}", error)));
                }
            }
            set_guardando.set(false);
        });
    };

    let exportar = move |_| {
        if let Err(error) = exportar_excel(&reportes.get(), "reportes.csv") {
            set_mensaje.set(Some(error));
        }
    };

    let input_style = "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px; box-sizing: border-box;";
    let label_style = "display: block; margin: 10px 0 4px 0; font-weight: bold;";

    view! {
        <div style="padding: 20px; background: #f8f9fa; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
            <h2 style="color: #343a40;">"Reportes de Valores Prep"</h2>

            <div style="margin-bottom: 16px; display: flex; gap: 10px;">
                <button
                    style="padding: 8px 16px; background: #00a8ff; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    on:click=move |_| set_modal_abierto.set(true)
                >
                    "Agregar Reporte"
                </button>
                <button
                    style="padding: 8px 16px; background: #28a745; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    on:click=exportar
                >
                    "Exportar a Excel"
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

            <table style="width: 100%; border-collapse: collapse; background: white;">
                <thead>
                    <tr style="background: #f8f9fa; border-bottom: 2px solid #dee2e6;">
                        <th style="padding: 10px; text-align: left;">"Cliente"</th>
                        <th style="padding: 10px; text-align: left;">"Fecha Inicio"</th>
                        <th style="padding: 10px; text-align: left;">"Fecha Final"</th>
                        <th style="padding: 10px; text-align: right;">"Valor"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || reportes.get().into_iter().enumerate().map(|(idx, fila)| {
                        let fondo = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                        view! {
                            <tr style=format!("background: {}; border-bottom: 1px solid #eee;", fondo)>
                                <td style="padding: 8px;">{fila.nombre.clone()}</td>
                                <td style="padding: 8px;">{formato_fecha_opcional(&fila.fecha_inicio)}</td>
                                <td style="padding: 8px;">{formato_fecha_opcional(&fila.fecha_final)}</td>
                                <td style="padding: 8px; text-align: right;">{formato_precio(fila.valor_kilo_prep)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            {move || {
                if modal_abierto.get() {
                    view! {
                        <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); display: flex; align-items: flex-start; justify-content: center; z-index: 1000; padding-top: 40px;">
                            <div style="background: white; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); width: 420px; padding: 20px;">
                                <h3 style="margin-top: 0;">"Agregar Reporte"</h3>

                                <label style=label_style>"Cliente"</label>
                                <select
                                    style=input_style
                                    prop:value=move || cliente_id.get()
                                    on:change=move |ev| set_cliente_id.set(event_target_value(&ev))
                                >
                                    <option value="">"Selecciona un cliente"</option>
                                    {move || clientes.get().into_iter().map(|cliente| view! {
                                        <option value=cliente.id.to_string()>{cliente.nombre}</option>
                                    }).collect_view()}
                                </select>

                                <label style=label_style>"Fecha Inicio"</label>
                                <input
                                    type="date"
                                    style=input_style
                                    prop:value=move || fecha_inicio.get()
                                    on:change=move |ev| set_fecha_inicio.set(event_target_value(&ev))
                                />

                                <label style=label_style>"Fecha Final"</label>
                                <input
                                    type="date"
                                    style=input_style
                                    prop:value=move || fecha_final.get()
                                    on:change=move |ev| set_fecha_final.set(event_target_value(&ev))
                                />

                                <label style=label_style>"Valor"</label>
                                <input
                                    type="number"
                                    step="any"
                                    style=input_style
                                    prop:value=move || valor.get()
                                    on:input=move |ev| set_valor.set(event_target_value(&ev))
                                />

                                <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 20px;">
                                    <button
                                        style="padding: 8px 16px; background: #dcdde1; border: none; border-radius: 4px; cursor: pointer;"
                                        on:click=move |_| set_modal_abierto.set(false)
                                    >
                                        "Cancelar"
                                    </button>
                                    <button
                                        style="padding: 8px 16px; background: #4cd137; color: white; border: none; border-radius: 4px; cursor: pointer;"
                                        prop:disabled=move || guardando.get()
                                        on:click=on_agregar
                                    >
                                        {move || if guardando.get() { "Guardando..." } else { "Agregar" }}
                                    </button>
                                </div>
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
