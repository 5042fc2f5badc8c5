use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_auth, context::AuthState, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    storage::save_refresh_token(&response.refresh_token);

                    // Con la sesión en el contexto, AppRoutes pasa al shell
                    set_auth_state.set(AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(response.user),
                    });

                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("No se pudo iniciar sesión: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: linear-gradient(to right, #000428, #004e92);">
            <div style="background: white; padding: 40px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.3); width: 360px;">
                <h1 style="margin: 0 0 5px 0; color: #2f3640;">"Tarifario Comercial"</h1>
                <h2 style="margin: 0 0 20px 0; font-size: 16px; font-weight: normal; color: #666;">
                    "Ingreso al sistema"
                </h2>

                <Show when=move || error_message.get().is_some()>
                    <div style="padding: 10px; background: #fee; border: 1px solid #fcc; border-radius: 4px; color: #c00; margin-bottom: 15px;">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div style="margin-bottom: 15px;">
                        <label for="username" style="display: block; margin-bottom: 5px; font-weight: bold;">
                            "Usuario"
                        </label>
                        <input
                            type="text"
                            id="username"
                            style="width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px; box-sizing: border-box;"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div style="margin-bottom: 20px;">
                        <label for="password" style="display: block; margin-bottom: 5px; font-weight: bold;">
                            "Contraseña"
                        </label>
                        <input
                            type="password"
                            id="password"
                            style="width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px; box-sizing: border-box;"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        style="width: 100%; padding: 10px 15px; background: #4cd137; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 16px;"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
