use chrono::NaiveDate;
use contracts::domain::a001_cliente::Cliente;
use contracts::domain::a002_item::Item;
use contracts::domain::a003_unidad::Unidad;
use contracts::projections::p900_tarifas_historicas::{FiltroHistorico, TarifaHistorica};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::formato_fecha_opcional;
use crate::shared::export::{exportar_excel, ExcelExportable};
use crate::shared::number_format::{formato_incremento, formato_precio};

impl ExcelExportable for TarifaHistorica {
    fn headers() -> Vec<&'static str> {
        vec![
            "Cliente",
            "Categoría",
            "Item",
            "Unidad",
            "Mínimo",
            "Incremento",
            "Precio",
            "Fecha Inicio",
            "Fecha Final",
            "Fecha Movimiento",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.cliente.clone(),
            self.categoria.clone(),
            self.item.clone(),
            self.unidad.clone(),
            self.minimo.to_string(),
            formato_incremento(self.incremento),
            formato_precio(self.precio),
            self.fechadesde.clone().unwrap_or_default(),
            self.fechahasta.clone().unwrap_or_default(),
            self.movimiento.clone().unwrap_or_default(),
        ]
    }
}

/// Histórico de tarifas: consulta de sólo lectura sobre las filas que las
/// actualizaciones fueron archivando, con exportación a planilla.
#[component]
pub fn TarifasHistoricasList() -> impl IntoView {
    let clientes = RwSignal::new(Vec::<Cliente>::new());
    let unidades = RwSignal::new(Vec::<Unidad>::new());
    let items = RwSignal::new(Vec::<Item>::new());

    let tarifas = RwSignal::new(Vec::<TarifaHistorica>::new());
    let (mensaje, set_mensaje) = signal(Option::<String>::None);
    let (buscando, set_buscando) = signal(false);

    let (filtro_cliente, set_filtro_cliente) = signal(String::new());
    let (filtro_unidad, set_filtro_unidad) = signal(String::new());
    let (filtro_item, set_filtro_item) = signal(String::new());
    let (filtro_desde, set_filtro_desde) = signal(String::new());
    let (filtro_hasta, set_filtro_hasta) = signal(String::new());
    let (filtro_movimiento, set_filtro_movimiento) = signal(String::new());

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

    let buscar = move || {
        let filtro = FiltroHistorico {
            cliente: filtro_cliente.get_untracked().parse().ok(),
            unidad: filtro_unidad.get_untracked().parse().ok(),
            item: filtro_item.get_untracked().parse().ok(),
            fecha_inicio: NaiveDate::parse_from_str(&filtro_desde.get_untracked(), "%Y-%m-%d")
                .ok(),
            fecha_fin: NaiveDate::parse_from_str(&filtro_hasta.get_untracked(), "%Y-%m-%d").ok(),
            fecha_movimiento: NaiveDate::parse_from_str(
                &filtro_movimiento.get_untracked(),
                "%Y-%m-%d",
            )
            .ok(),
        };
        set_buscando.set(true);
        set_mensaje.set(None);
        spawn_local(async move {
            match api::buscar_historico(&filtro).await {
                Ok(lista) => tarifas.set(lista),
                Err(error) => {
                    set_mensaje.set(Some(format!("Error al obtener las tarifas: {}", error)));
                }
            }
            set_buscando.set(false);
        });
    };

    let descargar_excel = move |_| {
        if let Err(error) = exportar_excel(&tarifas.get(), "tarifas_historicas.csv") {
            set_mensaje.set(Some(error));
        }
    };

    let select_style = "width: 200px; padding: 6px; border: 1px solid #ccc; border-radius: 4px; margin-right: 8px;";

    view! {
        <div>
            <h1>"Tarifas Históricas"</h1>

            <div style="margin-bottom: 16px; display: flex; flex-wrap: wrap; gap: 8px; align-items: center;">
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
                <input
                    type="date"
                    style=select_style
                    title="Fecha Movimiento"
                    on:change=move |ev| set_filtro_movimiento.set(event_target_value(&ev))
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
                mensaje.get().map(|texto| view! {
                    <div style="padding: 10px; background: #e74c3c; border-radius: 4px; color: white; margin-bottom: 10px;">
                        {texto}
                    </div>
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
                            <th style="padding: 10px; text-align: left;">"Movimiento"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || tarifas.get().into_iter().enumerate().map(|(idx, tarifa)| {
                            let fondo = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                            view! {
                                <tr style=format!("background: {}; border-bottom: 1px solid #eee;", fondo)>
                                    <td style="padding: 8px;">{tarifa.cliente.clone()}</td>
                                    <td style="padding: 8px;">{tarifa.categoria.clone()}</td>
                                    <td style="padding: 8px;">{tarifa.unidad.clone()}</td>
                                    <td style="padding: 8px;">{tarifa.item.clone()}</td>
                                    <td style="padding: 8px; text-align: right;">{formato_incremento(tarifa.incremento)}</td>
                                    <td style="padding: 8px; text-align: right;">{formato_precio(tarifa.precio)}</td>
                                    <td style="padding: 8px; text-align: right;">{tarifa.minimo}</td>
                                    <td style="padding: 8px;">{formato_fecha_opcional(&tarifa.fechadesde)}</td>
                                    <td style="padding: 8px;">{formato_fecha_opcional(&tarifa.fechahasta)}</td>
                                    <td style="padding: 8px;">{formato_fecha_opcional(&tarifa.movimiento)}</td>
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
        </div>
    }
}
