//! Tri-state answers — the value type every question topic resolves to.

use serde::{Deserialize, Serialize};

/// Answer to a single yes/no question topic. A topic the user has not
/// reached yet is `Unanswered`, never a missing key, so visibility
/// predicates stay total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unanswered,
}

impl TriState {
    /// Maps a nullable boolean (e.g. a nullable column) onto the tri-state.
    pub fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
            None => TriState::Unanswered,
        }
    }

    pub fn is_yes(self) -> bool {
        self == TriState::Yes
    }

    pub fn is_no(self) -> bool {
        self == TriState::No
    }

    pub fn is_unanswered(self) -> bool {
        self == TriState::Unanswered
    }

    /// True for topics answered yes or not yet reached. Optional sections
    /// stay visible until the user explicitly opts out.
    pub fn is_yes_or_unanswered(self) -> bool {
        self != TriState::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_derived_boolean_holds() {
        for value in [TriState::Yes, TriState::No, TriState::Unanswered] {
            let flags = [value.is_yes(), value.is_no(), value.is_unanswered()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{:?}", value);
        }
    }

    #[test]
    fn test_default_is_unanswered() {
        assert_eq!(TriState::default(), TriState::Unanswered);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(TriState::from_option(Some(true)), TriState::Yes);
        assert_eq!(TriState::from_option(Some(false)), TriState::No);
        assert_eq!(TriState::from_option(None), TriState::Unanswered);
    }

    #[test]
    fn test_yes_or_unanswered() {
        assert!(TriState::Yes.is_yes_or_unanswered());
        assert!(TriState::Unanswered.is_yes_or_unanswered());
        assert!(!TriState::No.is_yes_or_unanswered());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&TriState::Unanswered).unwrap();
        assert_eq!(json, "\"unanswered\"");
        let back: TriState = serde_json::from_str("\"yes\"").unwrap();
        assert_eq!(back, TriState::Yes);
    }
}
