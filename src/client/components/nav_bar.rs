#![allow(non_snake_case)]

use crate::client::Route;
use crate::common;
use common::welcome_message;
use common::AuthState;
use common::Destination;
use common::Icon;
use common::CONFIG;

use dioxus::prelude::*;

pub fn brand_logo() -> Element {
    let logo = Icon::BookOpen.glyph();
    let brand = &CONFIG.brand_name;

    rsx! {
        Link {
            to: Route::Landing {},
            class: "brand",
            span { class: "brand-logo", "{logo}" }
            span { class: "brand-name", "{brand}" }
        }
    }
}

#[component]
pub fn WelcomeMessage(#[props(!optional)] name: Option<String>) -> Element {
    let text = welcome_message(name.as_deref());

    rsx! {
        span { class: "welcome-message", "{text}" }
    }
}

#[component]
pub fn NavBar() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let auth = auth();
    let user_glyph = Icon::User.glyph();

    let actions = if auth.is_authenticated {
        rsx! {
            div { class: "nav-user",
                WelcomeMessage { name: auth.first_name().map(str::to_owned) }
                Link {
                    to: Route::from(Destination::Dashboard),
                    class: "btn btn-primary",
                    span { class: "btn-icon", "{user_glyph}" }
                    "Dashboard"
                }
            }
        }
    } else {
        rsx! {
            div { class: "nav-auth",
                Link {
                    to: Route::from(Destination::Login),
                    class: "btn btn-ghost",
                    "Login"
                }
                Link {
                    to: Route::from(Destination::Register),
                    class: "btn btn-primary",
                    "Get Started"
                }
            }
        }
    };

    rsx! {
        header { class: "site-header",
            nav { class: "main-nav",
                { brand_logo() }
                div { class: "nav-actions",
                    button { class: "btn btn-ghost", "Help" }
                    { actions }
                }
            }
        }
    }
}
