pub mod auth;
pub mod config;
pub mod content;
pub mod lookup;

pub use auth::*;
pub use config::*;
pub use content::*;
pub use lookup::*;

/// Class of the hero block before and after the page has mounted.
pub fn hero_transition_class(mounted: bool) -> &'static str {
    if mounted {
        "hero-content hero-visible"
    } else {
        "hero-content hero-hidden"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_transition_class() {
        assert_eq!(hero_transition_class(false), "hero-content hero-hidden");
        assert_eq!(hero_transition_class(true), "hero-content hero-visible");
    }
}
