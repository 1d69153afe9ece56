//! Known given names.
//!
//! The forename pass only needs a set of upper-cased names. Where the set
//! comes from is up to the caller: the built-in list below, a
//! `HashSet<String>` built by hand, or a file read by the CLI (`--names`).

use std::collections::HashSet;

/// Anything that can supply the forename dictionary.
pub trait NameSource {
    /// Given names, upper-cased (`"GEORGE"`).
    fn forenames(&self) -> HashSet<String>;
}

impl NameSource for HashSet<String> {
    fn forenames(&self) -> HashSet<String> {
        self.iter().map(|name| name.to_uppercase()).collect()
    }
}

impl NameSource for Vec<String> {
    fn forenames(&self) -> HashSet<String> {
        self.iter().map(|name| name.to_uppercase()).collect()
    }
}

impl NameSource for [&str] {
    fn forenames(&self) -> HashSet<String> {
        self.iter().map(|name| name.to_uppercase()).collect()
    }
}

/// A compact list of common English given names, regnal names included.
///
/// Names that double as ordinary capitalized words (month names, `Will`,
/// `Grace`, `Mark` …) are left out so sentence-initial words are not taken
/// for names.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNames;

const BUILTIN_NAMES: &[&str] = &[
    // Regnal names of English, British, French and Spanish monarchs and popes.
    "ALFONSO", "ALEXANDER", "ANNE", "BENEDICT", "CHARLES", "CLEMENT", "EDMUND", "EDWARD", "ELIZABETH", "FERDINAND",
    "FRANCIS", "GEORGE", "GREGORY", "HENRY", "INNOCENT", "JAMES", "JOHN", "LEO", "LOUIS", "MARY", "PAUL", "PHILIP",
    "PIUS", "RICHARD", "STEPHEN", "URBAN", "VICTORIA", "WILLIAM",
    // Common given names.
    "AARON", "ADAM", "ALAN", "ALBERT", "ALICE", "AMANDA", "AMY", "ANDREW", "ANGELA", "ANNA", "ANTHONY", "ARTHUR",
    "BARBARA", "BENJAMIN", "BETTY", "BRIAN", "CAROLINE", "CATHERINE", "CHARLOTTE", "CHRISTOPHER", "DANIEL",
    "DAVID", "DEBORAH", "DONALD", "DOROTHY", "EDWIN", "ELEANOR", "EMILY", "EMMA", "ERIC", "FRANK", "FREDERICK",
    "GARY", "HANNAH", "HAROLD", "HELEN", "ISABELLA", "JACK", "JACOB", "JAKE", "JANE", "JASON", "JEFFREY",
    "JENNIFER", "JESSICA", "JILL", "JONATHAN", "JOSEPH", "JOSHUA", "KAREN", "KATHERINE", "KENNETH", "KEVIN",
    "LAURA", "LINDA", "LISA", "MARGARET", "MARIA", "MATTHEW", "MICHAEL", "MICHELLE", "NANCY", "NICHOLAS", "OLIVER",
    "OLIVIA", "PATRICIA", "PETER", "RACHEL", "RAYMOND", "REBECCA", "ROBERT", "RONALD", "SAMUEL", "SARAH", "SHARON",
    "SOPHIA", "STEVEN", "SUSAN", "THOMAS", "TIMOTHY", "WALTER",
];

impl NameSource for BuiltinNames {
    fn forenames(&self) -> HashSet<String> {
        BUILTIN_NAMES.iter().map(|name| name.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_upper_case_and_unique() {
        let names = BuiltinNames.forenames();
        assert_eq!(names.len(), BUILTIN_NAMES.len());
        assert!(names.iter().all(|name| name.chars().all(|c| c.is_ascii_uppercase())));
        assert!(names.contains("GEORGE"));
        assert!(names.contains("ELIZABETH"));
        assert!(!names.contains("MAY"));
    }

    #[test]
    fn sources_upper_case_their_names() {
        let from_slice = ["Jack", "jill"][..].forenames();
        let from_vec = vec!["Jack".to_string(), "JILL".to_string()].forenames();
        assert_eq!(from_slice, from_vec);
        assert!(from_slice.contains("JILL"));
    }
}
