pub mod registry;
pub mod tab_labels;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Barra de tabs abiertos, con cierre individual.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div style="display: flex; gap: 4px; border-bottom: 1px solid #dcdde1; margin-bottom: 1rem; flex-wrap: wrap;">
            {move || {
                ctx.opened
                    .get()
                    .into_iter()
                    .map(|tab| {
                        let key = tab.key.clone();
                        let key_activate = key.clone();
                        let key_close = key.clone();
                        let activo = {
                            let key = key.clone();
                            move || ctx.active.get().as_deref() == Some(key.as_str())
                        };
                        view! {
                            <div
                                style=move || format!(
                                    "display: flex; align-items: center; gap: 6px; padding: 6px 10px; cursor: pointer; border-radius: 5px 5px 0 0; background: {}; color: {};",
                                    if activo() { "#fff" } else { "#dcdde1" },
                                    if activo() { "#00a8ff" } else { "#2f3640" },
                                )
                                on:click=move |_| ctx.activate_tab(&key_activate)
                            >
                                <span>{tab.title.clone()}</span>
                                <span
                                    style="font-weight: bold; padding: 0 2px;"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        ctx.close_tab(&key_close);
                                    }
                                >
                                    "×"
                                </span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Contenido del tab activo, resuelto por el registry.
#[component]
pub fn TabContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div>
            {move || match ctx.active.get() {
                Some(key) => registry::render_tab_content(&key),
                None => view! {
                    <div style="padding: 40px; text-align: center; color: #666;">
                        "Elegí un módulo del menú para empezar."
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
