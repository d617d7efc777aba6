#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::components::brand_logo;
use client::Route;
use common::Destination;

use dioxus::prelude::*;

// The real pages live with the auth provider and the app shell, these only
// give the router somewhere to land.

#[component]
pub fn Dashboard() -> Element {
    placeholder(Destination::Dashboard)
}

#[component]
pub fn Login() -> Element {
    placeholder(Destination::Login)
}

#[component]
pub fn Register() -> Element {
    placeholder(Destination::Register)
}

fn placeholder(destination: Destination) -> Element {
    rsx! {
        style { { include_str!("../css/landing.css") } }
        div { class: "landing placeholder",
            header { class: "site-header",
                nav { class: "main-nav", { brand_logo() } }
            }
            section { class: "card-section",
                h2 { "{destination}" }
                Link {
                    to: Route::Landing {},
                    class: "btn btn-outline",
                    "Back to main page"
                }
            }
        }
    }
}
