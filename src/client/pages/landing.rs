#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::components::*;
use client::Route;
use common::hero_transition_class;
use common::AuthState;
use common::CardKind;
use common::ContentItem;
use common::Icon;
use common::CONFIG;
use common::CONTENT;

use dioxus::prelude::*;
use std::time::Duration;

#[component]
pub fn Landing() -> Element {
    let mut mounted = use_signal(|| false);

    // Wait a tick so the hidden state gets painted before the transition.
    use_effect(move || {
        spawn(async move {
            gloo_timers::future::sleep(Duration::ZERO).await;
            if !*mounted.peek() {
                mounted.set(true);
            }
        });
    });

    rsx! {
        style { { include_str!("../css/landing.css") } }
        div {
            class: "landing",
            NavBar {}
            Hero { mounted: mounted() }
            StatsSection {}
            CardSection {
                kind: CardKind::Feature,
                heading: "Powerful Features".to_string(),
                blurb: "Everything you need to create, manage, and analyze tests effectively",
                items: CONTENT.features.to_vec(),
            }
            CardSection {
                kind: CardKind::TestType,
                heading: "Question Types".to_string(),
                blurb: "Support for multiple question formats to create comprehensive assessments",
                items: CONTENT.test_types.to_vec(),
                compact: true,
            }
            CardSection {
                kind: CardKind::Benefit,
                heading: format!("Why Choose {}?", CONFIG.brand_name),
                blurb: "Advanced features that make test creation and learning more effective",
                items: CONTENT.benefits.to_vec(),
            }
            CallToAction {}
            SiteFooter {}
        }
    }
}

#[component]
fn Hero(mounted: bool) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let auth = auth();
    let destination = auth.primary_destination();
    let label = auth.hero_cta_label();
    let class = hero_transition_class(mounted);

    rsx! {
        section { class: "hero",
            div { class: "{class}",
                h1 {
                    "Create & Take"
                    span { class: "highlight", " Tests" }
                    br {}
                    "Like Never Before"
                }
                p { class: "hero-description",
                    "Build comprehensive tests, track progress, and enhance learning with our powerful "
                    "test creation and management platform. Perfect for educators, trainers, and learners."
                }
                div { class: "cta-buttons",
                    Link {
                        to: Route::from(destination),
                        class: "btn btn-gradient",
                        "{label}"
                    }
                    button { class: "btn btn-outline", "View Demo" }
                }
            }
        }
    }
}

#[component]
fn StatsSection() -> Element {
    rsx! {
        section { class: "stats",
            div { class: "grid grid-4",
                for (i, stat) in CONTENT.stats.iter().enumerate() {
                    StatCard { key: "{i}", id: CardKind::Stat.card_id(i), stat: stat.clone() }
                }
            }
        }
    }
}

#[component]
fn CardSection(
    kind: CardKind,
    heading: String,
    blurb: &'static str,
    items: Vec<ContentItem>,
    #[props(default)] compact: bool,
) -> Element {
    rsx! {
        section { class: "card-section",
            div { class: "section-intro",
                h2 { "{heading}" }
                p { "{blurb}" }
            }
            div { class: "grid grid-4",
                for (i, item) in items.into_iter().enumerate() {
                    ContentCard {
                        key: "{i}",
                        id: kind.card_id(i),
                        item: item,
                        compact: compact,
                    }
                }
            }
        }
    }
}

#[component]
fn CallToAction() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let destination = auth.read().primary_destination();
    let brand = &CONFIG.brand_name;
    let create = Icon::PlusCircle.glyph();
    let community = Icon::Users.glyph();

    rsx! {
        section { class: "cta",
            div { class: "cta-panel",
                h2 { "Ready to Transform Your Testing?" }
                p {
                    "Join thousands of educators and learners who are already using {brand} to create better assessments"
                }
                div { class: "cta-buttons",
                    Link {
                        to: Route::from(destination),
                        class: "btn btn-gradient",
                        span { class: "btn-icon", "{create}" }
                        "Create Your First Test"
                    }
                    button { class: "btn btn-outline",
                        span { class: "btn-icon", "{community}" }
                        "Join Community"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(auth: AuthState) -> Element {
        use_context_provider(|| Signal::new(auth.clone()));

        rsx! {
            Router::<Route> {
                config: || RouterConfig::default().history(MemoryHistory::<Route>::default())
            }
        }
    }

    fn render_landing(auth: AuthState) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { auth });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_guest_page() {
        let html = render_landing(AuthState::default());

        assert!(html.contains("nav-auth"));
        assert!(html.contains("Login"));
        assert!(html.contains("Get Started"));
        assert!(html.contains("/register"));
        assert!(html.contains("Start Creating Tests"));
        assert!(!html.contains("/dashboard"));
        assert!(!html.contains("welcome-message"));
        assert!(html.contains("hero-hidden"));
        assert_eq!(html.matches("data-card-id").count(), 16);
    }

    #[test]
    fn test_authenticated_page() {
        let html = render_landing(AuthState::authenticated(Some("Jane Doe")));

        assert!(html.contains("Welcome, Jane!"));
        assert!(html.contains("Go to Dashboard"));
        assert!(html.contains("/dashboard"));
        assert!(!html.contains("/register"));
        assert!(!html.contains("nav-auth"));
    }

    #[test]
    fn test_authenticated_page_without_name() {
        let html = render_landing(AuthState::authenticated(None));

        assert!(html.contains("Welcome!"));
        assert!(html.contains("Go to Dashboard"));
    }
}
