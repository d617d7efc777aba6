#![allow(non_snake_case)]

use crate::common;
use common::ContentItem;
use common::StatItem;

use dioxus::prelude::*;

#[component]
pub fn StatCard(id: &'static str, stat: StatItem) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            "data-card-id": id,
            div { class: "stat-value", "{stat.value}" }
            div { class: "stat-label", "{stat.label}" }
        }
    }
}

/// Card with an icon, a title and a description.
///
/// `compact` is the smaller variant used on the question types grid,
/// with the icon set in a badge.
#[component]
pub fn ContentCard(
    id: &'static str,
    item: ContentItem,
    #[props(default)] compact: bool,
) -> Element {
    let glyph = item.icon.glyph();
    let icon_style = format!("color: {}", item.accent);
    let class = if compact {
        "card content-card compact"
    } else {
        "card content-card"
    };

    rsx! {
        div {
            class: "{class}",
            "data-card-id": id,
            div {
                class: if compact { "card-icon icon-badge" } else { "card-icon" },
                span {
                    class: "icon icon-{item.icon}",
                    style: "{icon_style}",
                    "{glyph}"
                }
            }
            h3 { "{item.title}" }
            p { "{item.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CardKind;
    use common::CONTENT;

    #[test]
    fn test_stat_card() {
        let stat = CONTENT.stats[0].clone();
        let html = dioxus_ssr::render_element(rsx! {
            StatCard { id: CardKind::Stat.card_id(0usize), stat: stat }
        });

        assert!(html.contains("stat-card-0"));
        assert!(html.contains("10K+"));
        assert!(html.contains("Tests Created"));
    }

    #[test]
    fn test_content_card() {
        let item = CONTENT.benefits[2].clone();
        let html = dioxus_ssr::render_element(rsx! {
            ContentCard { id: CardKind::Benefit.card_id(2usize), item: item }
        });

        assert!(html.contains("benefit-card-2"));
        assert!(html.contains("Gamification"));
        assert!(html.contains("icon-star"));
        assert!(!html.contains("icon-badge"));
    }

    #[test]
    fn test_compact_card() {
        let item = CONTENT.test_types[0].clone();
        let html = dioxus_ssr::render_element(rsx! {
            ContentCard { id: CardKind::TestType.card_id(7usize), item: item, compact: true }
        });

        assert!(html.contains("noID"));
        assert!(html.contains("icon-badge"));
        assert!(html.contains("Multiple Choice"));
    }

    #[test]
    fn test_grid_renders_in_order() {
        let html = dioxus_ssr::render_element(rsx! {
            for (i, stat) in CONTENT.stats.iter().enumerate() {
                StatCard { key: "{i}", id: CardKind::Stat.card_id(i), stat: stat.clone() }
            }
        });

        let positions: Vec<usize> = CONTENT
            .stats
            .iter()
            .map(|stat| html.find(stat.label.as_str()).unwrap())
            .collect();

        assert_eq!(html.matches("data-card-id").count(), 4);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
