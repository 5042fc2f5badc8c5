//! Sidebar con el menú de módulos, filtrado por los permisos de la sesión.

use contracts::system::auth::Permiso;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::tab_label_for_key;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, Permiso)>, // (tab key, permiso requerido)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "tarifas",
            label: "Tarifas",
            items: vec![
                ("a004_tarifa", Permiso::Tarifas),
                ("a005_tarifa_rango", Permiso::TarifasPorRango),
                ("p901_tarifas_por_vencer", Permiso::TarifasPorVencer),
            ],
        },
        MenuGroup {
            id: "operaciones",
            label: "Operaciones",
            items: vec![("u501_actualizacion_masiva", Permiso::ActualizacionTarifas)],
        },
        MenuGroup {
            id: "informes",
            label: "Informes",
            items: vec![
                ("p900_tarifas_historicas", Permiso::TarifasHistoricas),
                ("u502_reporte_tarifario", Permiso::Reportes),
                ("p902_valores_prep", Permiso::ValorPorKilo),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    view! {
        <Show when=move || ctx.left_open.get()>
            <nav style="width: 250px; background: #1e272e; padding: 1.5rem 1rem; color: #fff;">
                {move || {
                    let estado = auth_state.get();
                    get_menu_groups()
                        .into_iter()
                        .filter_map(|grupo| {
                            let visibles: Vec<_> = grupo
                                .items
                                .iter()
                                .filter(|(_, permiso)| estado.tiene_permiso(*permiso))
                                .cloned()
                                .collect();
                            if visibles.is_empty() {
                                return None;
                            }
                            Some(view! {
                                <div style="margin-bottom: 1.5rem;">
                                    <div style="font-size: 12px; text-transform: uppercase; color: #8395a7; margin-bottom: 0.5rem;">
                                        {grupo.label}
                                    </div>
                                    {visibles
                                        .into_iter()
                                        .map(|(key, _)| {
                                            let activo = move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            };
                                            view! {
                                                <div
                                                    style=move || format!(
                                                        "padding: 0.5rem 1rem; margin-bottom: 0.25rem; cursor: pointer; border-radius: 5px; color: {}; background: {};",
                                                        if activo() { "#00a8ff" } else { "#fff" },
                                                        if activo() { "rgba(0, 168, 255, 0.1)" } else { "transparent" },
                                                    )
                                                    on:click=move |_| {
                                                        ctx.open_tab(key, tab_label_for_key(key));
                                                    }
                                                >
                                                    {tab_label_for_key(key)}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            })
                        })
                        .collect_view()
                }}
            </nav>
        </Show>
    }
}
