/// Returned for any index outside a card table.
pub const NO_ID: &str = "noID";

/// The grids of the landing page that carry card identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Stat,
    Feature,
    TestType,
    Benefit,
}

impl CardKind {
    pub fn ids(&self) -> &'static [&'static str] {
        match self {
            Self::Stat => &["stat-card-0", "stat-card-1", "stat-card-2", "stat-card-3"],
            Self::Feature => &[
                "feature-card-0",
                "feature-card-1",
                "feature-card-2",
                "feature-card-3",
            ],
            Self::TestType => &[
                "test-type-card-0",
                "test-type-card-1",
                "test-type-card-2",
                "test-type-card-3",
            ],
            Self::Benefit => &[
                "benefit-card-0",
                "benefit-card-1",
                "benefit-card-2",
                "benefit-card-3",
            ],
        }
    }

    pub fn card_id(&self, index: impl TryInto<usize>) -> &'static str {
        card_id(self.ids(), index)
    }
}

/// Bounded lookup, negative or too large indices yield [`NO_ID`].
pub fn card_id<'a>(ids: &[&'a str], index: impl TryInto<usize>) -> &'a str {
    index
        .try_into()
        .ok()
        .and_then(|i| ids.get(i))
        .copied()
        .unwrap_or(NO_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [CardKind; 4] = [
        CardKind::Stat,
        CardKind::Feature,
        CardKind::TestType,
        CardKind::Benefit,
    ];

    #[test]
    fn test_valid_indices() {
        assert_eq!(CardKind::Stat.card_id(0usize), "stat-card-0");
        assert_eq!(CardKind::Feature.card_id(1usize), "feature-card-1");
        assert_eq!(CardKind::TestType.card_id(2usize), "test-type-card-2");
        assert_eq!(CardKind::Benefit.card_id(3usize), "benefit-card-3");

        for kind in KINDS {
            for (i, id) in kind.ids().iter().enumerate() {
                assert_eq!(kind.card_id(i), *id);
            }
        }
    }

    #[test]
    fn test_out_of_range_falls_back() {
        for kind in KINDS {
            assert_eq!(kind.card_id(-1i32), NO_ID);
            assert_eq!(kind.card_id(4usize), NO_ID);
            assert_eq!(kind.card_id(100u64), NO_ID);
            assert_eq!(kind.card_id(i64::MIN), NO_ID);
        }
    }

    #[test]
    fn test_generic_lookup() {
        let ids = ["a", "b"];
        assert_eq!(card_id(&ids, 1u8), "b");
        assert_eq!(card_id(&ids, 2u8), NO_ID);
        assert_eq!(card_id(&[], 0usize), NO_ID);
    }
}
