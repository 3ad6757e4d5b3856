//! External links for query results.
//!
//! Raw references are opaque to the engine. A link template is either a URL
//! prefix the reference is appended to, or contains a `{ref}` placeholder.
//! [`LinkTemplates::url_for`] takes the side the query searched; the template
//! is picked from the side the results belong to (the source side's opposite).

use crate::side::Side;

const PLACEHOLDER: &str = "{ref}";

/// Per-side URL templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTemplates {
    templates: [String; 2],
}

impl LinkTemplates {
    pub fn new<L: Into<String>, R: Into<String>>(left: L, right: R) -> Self {
        LinkTemplates {
            templates: [left.into(), right.into()],
        }
    }

    /// URL of a reference returned by a query that searched `source`.
    pub fn url_for(&self, source: Side, raw_reference: &str) -> String {
        let template = &self.templates[source.opposite().index()];
        if template.contains(PLACEHOLDER) {
            template.replace(PLACEHOLDER, raw_reference)
        } else {
            format!("{template}{raw_reference}")
        }
    }
}
