//! Bookmaker catalog
//!
//! A fixed, ordered list of the betting companies the form knows about.
//! Entries are `'static` and never change at runtime.

/// A betting company the form can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bookmaker {
    /// Short lowercase token, e.g. "betway"
    pub id: &'static str,
    /// Display name, e.g. "Betway"
    pub name: &'static str,
}

impl Bookmaker {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// The bookmaker every fixed-target deployment converts to
pub const BETPAWA: Bookmaker = Bookmaker::new("betpawa", "BetPawa");

/// Catalog in display order
pub const BOOKMAKERS: &[Bookmaker] = &[
    Bookmaker::new("betway", "Betway"),
    Bookmaker::new("1xbet", "1xBet"),
    Bookmaker::new("sportybet", "SportyBet"),
    Bookmaker::new("sportpesa", "SportPesa"),
    BETPAWA,
    Bookmaker::new("paripesa", "PariPesa"),
];

/// Find a catalog entry by id (exact match)
pub fn find(id: &str) -> Option<&'static Bookmaker> {
    BOOKMAKERS.iter().find(|b| b.id == id)
}

/// Comma-separated list of known ids, for error messages
pub fn known_ids() -> String {
    BOOKMAKERS
        .iter()
        .map(|b| b.id)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_fixed() {
        let ids: Vec<_> = BOOKMAKERS.iter().map(|b| b.id).collect();
        assert_eq!(
            ids,
            ["betway", "1xbet", "sportybet", "sportpesa", "betpawa", "paripesa"]
        );
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("1xbet").map(|b| b.name), Some("1xBet"));
        assert_eq!(find("betpawa"), Some(&BETPAWA));
        assert!(find("Betway").is_none(), "lookup is case-sensitive");
        assert!(find("").is_none());
    }

    #[test]
    fn known_ids_lists_every_entry() {
        assert_eq!(
            known_ids(),
            "betway, 1xbet, sportybet, sportpesa, betpawa, paripesa"
        );
    }
}
