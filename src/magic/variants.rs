//! Expands a mage's path tokens into the exact distribution of deterministic
//! path sets, then reduces that distribution to distinct, annotated variants.

use serde::Serialize;
use std::fmt;

use crate::magic::chance::Chance;
use crate::magic::paths;
use crate::magic::token::{unpack_token, TokenOutcome};
use crate::magic::PathsError;

/// One fully resolved path set a mage can end up with: canonical path
/// string, exact chance, and a human-facing annotation. Immutable once the
/// owning mage is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub paths: String,
    pub chance: Chance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<VariantNote>,
}

/// Annotation computed at construction time, never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantNote {
    /// The mage has no randomness; this is its only path set.
    SoleVariant,
    /// This variant is exactly the guaranteed prefix, so its paths are
    /// shared by every other variant.
    CommonToAll,
}

impl fmt::Display for VariantNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantNote::SoleVariant => write!(f, "sole variant"),
            VariantNote::CommonToAll => write!(f, "common to all variants"),
        }
    }
}

/// Raw distribution over path strings: the prefix as a one-outcome factor,
/// each random token as its own factor, combined left to right by cartesian
/// product. Concatenations are canonicalized immediately so the reducer can
/// compare plain strings. Factor counts grow multiplicatively, which is fine
/// for the game's specs (at most a handful of random tokens per mage).
pub fn generate_outcomes(
    prefix: &str,
    random_tokens: &[&str],
) -> Result<Vec<TokenOutcome>, PathsError> {
    if let Some(symbol) = paths::find_unknown_symbol(prefix) {
        return Err(PathsError::UnknownSymbol {
            token: prefix.to_string(),
            symbol,
        });
    }
    let mut combined = vec![TokenOutcome {
        delta: paths::canonicalize(prefix),
        chance: Chance::ONE,
    }];
    for token in random_tokens {
        let factor = unpack_token(token)?;
        let mut next = Vec::with_capacity(combined.len() * factor.len());
        for left in &combined {
            for right in &factor {
                next.push(TokenOutcome {
                    delta: paths::canonicalize(&format!("{}{}", left.delta, right.delta)),
                    chance: left.chance * right.chance,
                });
            }
        }
        combined = next;
    }
    Ok(combined)
}

/// Collapse a raw distribution into distinct path sets.
///
/// Groups by canonical path string, sums chances, clamps each group to at
/// most 1, and sorts by chance descending with ties broken by path string
/// ascending. Fails if the reduced chances do not sum to exactly 1: that
/// means the spec itself was not a probability distribution.
pub fn reduce_outcomes(mut raw: Vec<TokenOutcome>) -> Result<Vec<(String, Chance)>, PathsError> {
    raw.sort_by(|a, b| a.delta.cmp(&b.delta));

    let mut reduced: Vec<(String, Chance)> = Vec::new();
    for outcome in raw {
        match reduced.last_mut() {
            Some((paths, chance)) if *paths == outcome.delta => {
                *chance = *chance + outcome.chance;
            }
            _ => reduced.push((outcome.delta, outcome.chance)),
        }
    }
    for (_, chance) in reduced.iter_mut() {
        *chance = (*chance).min(Chance::ONE);
    }
    reduced.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let total: Chance = reduced.iter().map(|(_, chance)| *chance).sum();
    if total != Chance::ONE {
        return Err(PathsError::ProbabilityMass {
            total: total.to_string(),
        });
    }
    Ok(reduced)
}

/// Attach annotations and report whether the bare prefix set itself occurs.
///
/// A single variant is marked [`VariantNote::SoleVariant`]. Among several,
/// the one equal to the canonicalized prefix is [`VariantNote::CommonToAll`];
/// when no variant matches, the prefix set never occurs on its own (every
/// certain bonus token extends it) and the returned flag records that.
pub fn annotate_variants(reduced: Vec<(String, Chance)>, prefix: &str) -> (Vec<Variant>, bool) {
    let canonical_prefix = paths::canonicalize(prefix);
    let sole = reduced.len() == 1;
    let mut prefix_occurs = false;

    let variants = reduced
        .into_iter()
        .map(|(paths, chance)| {
            let matches_prefix = paths == canonical_prefix;
            prefix_occurs |= matches_prefix;
            let note = if sole {
                Some(VariantNote::SoleVariant)
            } else if matches_prefix {
                Some(VariantNote::CommonToAll)
            } else {
                None
            };
            Variant {
                paths,
                chance,
                note,
            }
        })
        .collect();
    (variants, prefix_occurs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(variants: &[(String, Chance)]) -> Chance {
        variants.iter().map(|(_, c)| *c).sum()
    }

    #[test]
    fn prefix_only_mage_has_one_certain_outcome() {
        let raw = generate_outcomes("FWWEEE", &[]).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].delta, "FWWEEE");
        assert_eq!(raw[0].chance, Chance::ONE);
    }

    #[test]
    fn outcomes_are_canonicalized_per_product_step() {
        // E outranks W in raw byte order but follows it canonically.
        let raw = generate_outcomes("E", &["100W"]).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].delta, "WE");
    }

    #[test]
    fn factor_fold_multiplies_chances() {
        let raw = generate_outcomes("F", &["50FW", "10E"]).unwrap();
        // 3 outcomes from the first token times 2 from the second.
        assert_eq!(raw.len(), 6);
        let sum: Chance = raw.iter().map(|o| o.chance).sum();
        assert_eq!(sum, Chance::ONE);
    }

    #[test]
    fn reduce_merges_identical_path_sets() {
        // F+W and W+F collapse once canonicalized.
        let raw = generate_outcomes("", &["100FW", "100WF"]).unwrap();
        let reduced = reduce_outcomes(raw).unwrap();
        let fw = reduced.iter().find(|(p, _)| p == "FW").unwrap();
        assert_eq!(fw.1, Chance::new(1, 2));
        assert_eq!(total(&reduced), Chance::ONE);
    }

    #[test]
    fn reduce_sorts_by_chance_descending_then_paths_ascending() {
        let raw = generate_outcomes("", &["50FW"]).unwrap();
        let reduced = reduce_outcomes(raw).unwrap();
        let order: Vec<&str> = reduced.iter().map(|(p, _)| p.as_str()).collect();
        // Miss case first at 1/2, then the 1/4 tie broken F before W.
        assert_eq!(order, vec!["", "F", "W"]);
    }

    #[test]
    fn reduce_rejects_a_broken_distribution() {
        // 150% bonus: outcome mass sums to 3/2 with no miss complement.
        let raw = generate_outcomes("", &["150FW"]).unwrap();
        assert!(matches!(
            reduce_outcomes(raw),
            Err(PathsError::ProbabilityMass { .. })
        ));
    }

    #[test]
    fn annotates_sole_variant() {
        let reduced = vec![("FWWEEE".to_string(), Chance::ONE)];
        let (variants, prefix_occurs) = annotate_variants(reduced, "FWWEEE");
        assert_eq!(variants[0].note, Some(VariantNote::SoleVariant));
        assert!(prefix_occurs);
    }

    #[test]
    fn annotates_common_to_all_when_prefix_survives() {
        let raw = generate_outcomes("F", &["10W"]).unwrap();
        let reduced = reduce_outcomes(raw).unwrap();
        let (variants, prefix_occurs) = annotate_variants(reduced, "F");
        assert!(prefix_occurs);
        let bare = variants.iter().find(|v| v.paths == "F").unwrap();
        assert_eq!(bare.note, Some(VariantNote::CommonToAll));
        let extended = variants.iter().find(|v| v.paths == "FW").unwrap();
        assert_eq!(extended.note, None);
    }

    #[test]
    fn records_when_prefix_never_occurs_alone() {
        // The certain bonus always extends the prefix.
        let raw = generate_outcomes("F", &["100WE"]).unwrap();
        let reduced = reduce_outcomes(raw).unwrap();
        let (variants, prefix_occurs) = annotate_variants(reduced, "F");
        assert!(!prefix_occurs);
        assert!(variants.iter().all(|v| v.note.is_none()));
        assert_eq!(variants.len(), 2);
    }
}
