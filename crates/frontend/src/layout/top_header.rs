use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let on_logout = move |_| {
        spawn_local(async move {
            // Revocación best-effort; la sesión local se cierra igual.
            if let Some(refresh_token) = storage::get_refresh_token() {
                let _ = api::logout(refresh_token).await;
            }
            storage::clear_tokens();
            set_auth_state.set(AuthState::default());
        });
    };

    view! {
        <header style="display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; background: #1e272e; color: #fff;">
            <div style="display: flex; align-items: center; gap: 12px;">
                <button
                    style="background: none; border: none; color: #fff; font-size: 20px; cursor: pointer;"
                    title="Mostrar u ocultar el menú"
                    on:click=move |_| ctx.toggle_left()
                >
                    "☰"
                </button>
                <span style="font-size: 18px; font-weight: bold;">"Tarifario Comercial"</span>
            </div>

            <div style="display: flex; align-items: center; gap: 15px;">
                <span>{move || format!("Bienvenido, {}", auth_state.get().username())}</span>
                <button
                    style="padding: 0.5rem 1rem; border: none; border-radius: 5px; background: #ff4757; color: #fff; cursor: pointer;"
                    on:click=on_logout
                >
                    "Cerrar sesión"
                </button>
            </div>
        </header>
    }
}
