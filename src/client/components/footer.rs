#![allow(non_snake_case)]

use crate::common::CONFIG;

use dioxus::prelude::*;

const FOOTER_LINKS: [&str; 3] = ["Documentation", "Support", "Privacy"];

#[component]
pub fn SiteFooter() -> Element {
    let notice = CONFIG.footer_notice();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-notice", "{notice}" }
            div { class: "footer-links",
                for label in FOOTER_LINKS {
                    a { key: "{label}", href: "#", "{label}" }
                }
            }
        }
    }
}
