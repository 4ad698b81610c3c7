//! A mage: identity, raw path spec, and the reduced variant distribution
//! computed once at construction.

use serde::Serialize;
use std::fmt;

use crate::magic::variants::{annotate_variants, generate_outcomes, reduce_outcomes, Variant};
use crate::magic::PathsError;

/// Fully constructed mage. All derived state (prefix split, variants,
/// annotations) is computed in [`Mage::new`] and immutable afterward.
#[derive(Debug, Clone, Serialize)]
pub struct Mage {
    pub name: String,
    /// Recruitment cost in gold; heroes come in at 0.
    pub gcost: u32,
    /// The raw spec, e.g. `FWWEEE,100FWE,10FWE`.
    pub paths: String,
    /// Guaranteed prefix of the spec, empty when the first token is random.
    pub prefix: String,
    /// Whether the bare prefix set appears among the reduced variants. False
    /// when certain bonus tokens always extend it.
    pub prefix_occurs: bool,
    /// Distinct path sets, chance descending, chances summing to exactly 1.
    pub variants: Vec<Variant>,
}

/// Split a raw spec into its guaranteed prefix and the remaining random
/// tokens. The first token counts as prefix only when purely alphabetic.
pub(crate) fn split_spec(paths: &str) -> (&str, Vec<&str>) {
    let mut tokens: Vec<&str> = paths.split(',').collect();
    let has_prefix = tokens
        .first()
        .map_or(false, |t| !t.is_empty() && t.chars().all(|c| c.is_ascii_alphabetic()));
    let prefix = if has_prefix { tokens.remove(0) } else { "" };
    (prefix, tokens)
}

impl Mage {
    pub fn new(
        name: impl Into<String>,
        paths: impl Into<String>,
        gcost: u32,
    ) -> Result<Mage, PathsError> {
        let name = name.into();
        let paths = paths.into();
        let (prefix, random_tokens) = split_spec(&paths);

        let reduced = generate_outcomes(prefix, &random_tokens)
            .and_then(reduce_outcomes)
            .map_err(|err| err.for_mage(&name))?;
        let (variants, prefix_occurs) = annotate_variants(reduced, prefix);

        Ok(Mage {
            name,
            gcost,
            prefix: prefix.to_string(),
            prefix_occurs,
            variants,
            paths,
        })
    }
}

impl fmt::Display for Mage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} gold)", self.name, self.paths, self.gcost)
    }
}
