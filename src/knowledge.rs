//! The validity knowledgebase: the tables tokens are classified against.
//!
//! A `Knowledgebase` is immutable while a file is being linted. The built-in
//! tables live in [`tables`]; configuration can merge extra names on top via
//! [`Knowledgebase::extend`].

pub mod tables;

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use self::tables::VALID_TABLES;

static BUILTIN: Lazy<Knowledgebase> = Lazy::new(|| {
    Knowledgebase::new(
        VALID_TABLES.properties.iter().copied(),
        VALID_TABLES.prefixes.iter().copied(),
        VALID_TABLES.pseudo_suffixes.iter().copied(),
        VALID_TABLES.tag_names.iter().copied(),
    )
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Knowledgebase {
    /// Canonical orderable names (properties and selector element names).
    pub properties: BTreeSet<String>,
    /// Vendor prefixes, tried in order before each property.
    pub prefixes: Vec<String>,
    /// Pseudo-class/element markers, tried in order after each property.
    pub pseudo_suffixes: Vec<String>,
    /// Bare tag names; only combined with `pseudo_suffixes`, never `prefixes`.
    pub tag_names: BTreeSet<String>,
}

impl Knowledgebase {
    pub fn new<P, X, S, T>(properties: P, prefixes: X, pseudo_suffixes: S, tag_names: T) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        X: IntoIterator,
        X::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            pseudo_suffixes: pseudo_suffixes.into_iter().map(Into::into).collect(),
            tag_names: tag_names.into_iter().map(Into::into).collect(),
        }
    }

    /// The default CSS/HTML tables shipped with the linter.
    pub fn builtin() -> &'static Knowledgebase {
        &BUILTIN
    }

    /// Merges another set of tables into this one. Ordered tables keep their
    /// existing order and gain only entries they don't already have.
    pub fn extend(&mut self, other: &Knowledgebase) {
        self.properties.extend(other.properties.iter().cloned());
        self.tag_names.extend(other.tag_names.iter().cloned());
        for prefix in &other.prefixes {
            if !self.prefixes.contains(prefix) {
                self.prefixes.push(prefix.clone());
            }
        }
        for suffix in &other.pseudo_suffixes {
            if !self.pseudo_suffixes.contains(suffix) {
                self.pseudo_suffixes.push(suffix.clone());
            }
        }
    }

    pub fn is_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }

    pub fn is_tag(&self, name: &str) -> bool {
        self.tag_names.contains(name)
    }
}
