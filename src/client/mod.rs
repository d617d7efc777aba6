#![allow(non_snake_case)]

use crate::common;
use common::AuthState;
use common::Destination;

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

mod components;
mod pages;
pub mod utils;

use pages::*;
use utils::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    // Routes `tracing` events from `common` to the browser console.
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    launch(App);
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Dashboard => Route::Dashboard {},
            Destination::Login => Route::Login {},
            Destination::Register => Route::Register {},
        }
    }
}

fn App() -> Element {
    let mut auth = use_context_provider(|| Signal::new(AuthState::default()));

    // The session is owned by the auth provider, we only read it once.
    use_future(move || async move {
        if let Some(session) = fetch_auth_storage().await {
            log_to_console(("session loaded, authenticated:", session.is_authenticated));
            auth.set(session);
        }
    });

    rsx!(Router::<Route> {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_routes() {
        for destination in [
            Destination::Dashboard,
            Destination::Login,
            Destination::Register,
        ] {
            let route = Route::from(destination);
            assert_eq!(route.to_string(), destination.path());
        }

        assert_eq!(Route::Landing {}.to_string(), "/");
    }
}
