//! Redundancy between mages: whether everything one mage can cast is
//! already guaranteed by another mage the same nation recruits.
//!
//! Two predicates exist. The structural one compares raw specs and is what
//! production filtering uses; the chance-based one compares per-spell cast
//! probabilities over a catalog and is kept as a selectable alternative.
//! They answer subtly different questions and are never merged.

use crate::data::spell::SpellRecord;
use crate::magic::mage::{split_spec, Mage};
use crate::magic::matcher::chance_to_cast;

/// Which subsumption predicate drives redundancy suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubsumptionStrategy {
    /// Raw-spec containment: prefix clusters and random tokens of the first
    /// mage all appear in the second's spec.
    #[default]
    Structural,
    /// Outcome dominance: for every spell in the catalog, the first mage's
    /// cast chance never exceeds the second's. Strictly looser.
    ChanceDominance,
}

/// Maximal runs of one repeated symbol: `FWWEEE` -> `F`, `WW`, `EEE`.
/// A run's length is a path level, so containment must match the run as a
/// literal substring, not just the symbol.
fn symbol_clusters(prefix: &str) -> Vec<String> {
    let mut clusters: Vec<String> = Vec::new();
    for symbol in prefix.chars() {
        match clusters.last_mut() {
            Some(cluster) if cluster.ends_with(symbol) => cluster.push(symbol),
            _ => clusters.push(symbol.to_string()),
        }
    }
    clusters
}

/// Structural containment: is `first`'s spell-casting capability entirely
/// redundant when `second` is also available?
///
/// Textually identical specs return false (suppressing both listings would
/// lose one of two interchangeable mages), as does a `first` with more raw
/// tokens than `second`. Random-token matching is multiset containment:
/// each token of `first` consumes a distinct token instance of `second`, so
/// `FN,10FEDN,10FEDN` does not fit `FN,10FEDN,10SWE`.
pub fn first_in_second(first: &Mage, second: &Mage) -> bool {
    if first.paths == second.paths {
        return false;
    }
    let (prefix1, tokens1) = split_spec(&first.paths);
    let (prefix2, mut tokens2) = split_spec(&second.paths);
    if tokens1.len() > tokens2.len() {
        return false;
    }
    for cluster in symbol_clusters(prefix1) {
        if !prefix2.contains(&cluster) {
            return false;
        }
    }
    for token in tokens1 {
        match tokens2.iter().position(|candidate| *candidate == token) {
            Some(index) => {
                tokens2.remove(index);
            }
            None => return false,
        }
    }
    true
}

/// Chance dominance over a spell catalog. Unlike the structural predicate
/// this sees through differently-spelled but equivalent specs, at the price
/// of depending on the catalog supplied.
pub fn first_in_second_by_chance(first: &Mage, second: &Mage, catalog: &[SpellRecord]) -> bool {
    if first.paths == second.paths {
        return false;
    }
    catalog
        .iter()
        .all(|spell| chance_to_cast(first, spell) <= chance_to_cast(second, spell))
}

/// Dispatch on the configured strategy.
pub fn subsumed_by(
    first: &Mage,
    second: &Mage,
    strategy: SubsumptionStrategy,
    catalog: &[SpellRecord],
) -> bool {
    match strategy {
        SubsumptionStrategy::Structural => first_in_second(first, second),
        SubsumptionStrategy::ChanceDominance => first_in_second_by_chance(first, second, catalog),
    }
}
