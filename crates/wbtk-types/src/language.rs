//! A language as used on Wikibase: a code bound to the item representing
//! the language.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::Qid;

/// A language record: a BCP47-style code (as used in termboxes, monolingual
/// text values, and lexeme language codes) paired with the item id of the
/// language itself.
///
/// Several codes may map to the same item (scripts, regional variants), and
/// a handful of codes share an item (`mis`/`und`). Equality is structural
/// over both fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    code: String,
    item: Qid,
}

impl Language {
    /// Create a language record from a code and the language's item id.
    pub fn new(code: impl Into<String>, item: Qid) -> Self {
        Self {
            code: code.into(),
            item,
        }
    }

    /// The language code, e.g. `en` or `bn-x-Q48726740`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The item id of the language, e.g. `Q1860` for English.
    pub fn item(&self) -> &Qid {
        &self.item
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(s: &str) -> Qid {
        Qid::new(s).unwrap()
    }

    #[test]
    fn accessors() {
        let en = Language::new("en", qid("Q1860"));
        assert_eq!(en.code(), "en");
        assert_eq!(en.item(), &qid("Q1860"));
    }

    #[test]
    fn equality_is_structural_over_both_fields() {
        let a = Language::new("en", qid("Q1860"));
        let b = Language::new("en", qid("Q1860"));
        let c = Language::new("en-gb", qid("Q1860"));
        let d = Language::new("en", qid("Q7979"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn display_shows_code_and_item() {
        let de = Language::new("de", qid("Q188"));
        assert_eq!(de.to_string(), "de (Q188)");
    }
}
