//! The capability-variant engine: exact probabilities, path-spec parsing,
//! variant generation/reduction, spell matching, and mage subsumption.

pub mod chance;
pub mod mage;
pub mod matcher;
pub mod paths;
pub mod subsume;
pub mod token;
pub mod variants;

use thiserror::Error;

pub use chance::Chance;
pub use mage::Mage;
pub use matcher::{can_cast, chance_to_cast, only_castable, possible_spells, spells_by_variant};
pub use subsume::{first_in_second, first_in_second_by_chance, SubsumptionStrategy};
pub use token::{unpack_token, TokenOutcome};
pub use variants::{Variant, VariantNote};

/// Errors raised while turning a raw path spec into a variant distribution.
/// All of these are fatal for the mage being built: the input is static game
/// data, so a failure is a data bug to surface, never something to skip.
#[derive(Debug, Error)]
pub enum PathsError {
    #[error("malformed path token '{token}': {reason}")]
    MalformedToken { token: String, reason: String },

    #[error("unknown path symbol '{symbol}' in token '{token}'")]
    UnknownSymbol { token: String, symbol: char },

    #[error("variant probabilities sum to {total}, expected exactly 1")]
    ProbabilityMass { total: String },

    #[error("mage '{name}': {source}")]
    Mage {
        name: String,
        #[source]
        source: Box<PathsError>,
    },
}

impl PathsError {
    /// Attach the owning mage's name so diagnostics identify the bad record.
    pub(crate) fn for_mage(self, name: &str) -> PathsError {
        PathsError::Mage {
            name: name.to_string(),
            source: Box::new(self),
        }
    }
}
