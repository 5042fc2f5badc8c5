use contracts::system::auth::{Permiso, UsuarioInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Sesión autenticada del usuario. Vive en un contexto provisto al
/// componer la aplicación; cada instancia de la app es dueña de la suya.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UsuarioInfo>,
}

impl AuthState {
    pub fn tiene_permiso(&self, permiso: Permiso) -> bool {
        self.user_info
            .as_ref()
            .map(|usuario| usuario.tiene_permiso(permiso))
            .unwrap_or(false)
    }

    /// Usuario que firma las operaciones de auditoría.
    pub fn username(&self) -> String {
        self.user_info
            .as_ref()
            .map(|usuario| usuario.username.clone())
            .unwrap_or_default()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore session from localStorage on mount
    Effect::new(move || {
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                // Validate token by fetching current user
                match api::get_current_user(&access_token).await {
                    Ok(user_info) => {
                        set_auth_state.set(AuthState {
                            access_token: Some(access_token),
                            user_info: Some(user_info),
                        });
                    }
                    Err(_) => {
                        // Token invalid, try refresh
                        if let Some(refresh_token) = storage::get_refresh_token() {
                            match api::refresh_token(refresh_token).await {
                                Ok(response) => {
                                    storage::save_access_token(&response.access_token);

                                    if let Ok(user_info) =
                                        api::get_current_user(&response.access_token).await
                                    {
                                        set_auth_state.set(AuthState {
                                            access_token: Some(response.access_token),
                                            user_info: Some(user_info),
                                        });
                                    }
                                }
                                Err(_) => {
                                    storage::clear_tokens();
                                }
                            }
                        } else {
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
