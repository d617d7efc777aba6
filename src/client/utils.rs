use crate::common::AuthState;

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::console;

// Call this function to log a message
pub fn log_to_console(message: impl std::fmt::Debug) {
    let message = format!("{:?}", message);
    console::log_1(&JsValue::from_str(&message));
}

/// Reads the session the auth provider keeps under `localStorage['auth']`.
pub async fn fetch_auth_storage() -> Option<AuthState> {
    let mut eval = eval(
        r#"
        let auth = localStorage.getItem('auth');
        dioxus.send(auth);
        "#,
    );

    let value = match eval.recv().await {
        Ok(value) => value,
        Err(e) => {
            log_to_console(("failed to read session:", e));
            return None;
        }
    };

    let Some(raw) = value.as_str() else {
        log_to_console("no session stored");
        return None;
    };

    let auth = AuthState::from_json(raw);
    if auth.is_none() {
        log_to_console(("malformed session:", raw));
    }
    auth
}
