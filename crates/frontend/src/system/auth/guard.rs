use contracts::system::auth::Permiso;
use leptos::prelude::*;

use super::context::use_auth;

/// Muestra el contenido sólo si el usuario autenticado tiene el permiso.
/// El mismo permiso filtra la entrada del sidebar; este guard cubre el
/// caso de un tab abierto por URL sin la capacidad necesaria.
#[component]
pub fn RequierePermiso(permiso: Permiso, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().tiene_permiso(permiso)
            fallback=|| view! {
                <div style="padding: 20px; color: #666;">
                    "No tiene permiso para ver este módulo."
                </div>
            }
        >
            {children()}
        </Show>
    }
}
