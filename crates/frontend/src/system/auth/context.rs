use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.access_token.is_some()
            && self
                .user_info
                .as_ref()
                .map(|u| u.is_admin())
                .unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage on mount. The stored token is
    // revalidated against the backend; a stale token is dropped.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                match api::get_current_user(&access_token).await {
                    Ok(user_info) => {
                        set_auth_state.set(AuthState {
                            access_token: Some(access_token),
                            user_info: Some(user_info),
                        });
                    }
                    Err(_) => {
                        storage::clear_token();
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

/// Helper: sign in and publish the session
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Helper: sign out everywhere. The server call is best-effort.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = storage::get_access_token() {
        let _ = api::logout(&token).await;
    }

    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
