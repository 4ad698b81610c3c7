//! Decodes one comma-separated segment of a raw path spec.
//!
//! A segment is either a guaranteed prefix (pure path symbols, e.g.
//! `FWWEEE`) or a random bonus token `<percent><symbols>[*<multiplier>]`,
//! e.g. `100FEDN*2`: with `percent/100` chance one of the listed symbols is
//! granted, chosen uniformly, contributing `multiplier` copies.

use crate::magic::chance::Chance;
use crate::magic::paths;
use crate::magic::PathsError;

/// One weighted outcome of a token: the path symbols it contributes (empty
/// for the miss case) and the exact chance of rolling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOutcome {
    pub delta: String,
    pub chance: Chance,
}

impl TokenOutcome {
    fn new(delta: impl Into<String>, chance: Chance) -> TokenOutcome {
        TokenOutcome {
            delta: delta.into(),
            chance,
        }
    }
}

fn malformed(token: &str, reason: impl Into<String>) -> PathsError {
    PathsError::MalformedToken {
        token: token.to_string(),
        reason: reason.into(),
    }
}

fn check_symbols(token: &str, symbols: &str) -> Result<(), PathsError> {
    match paths::find_unknown_symbol(symbols) {
        Some(symbol) => Err(PathsError::UnknownSymbol {
            token: token.to_string(),
            symbol,
        }),
        None => Ok(()),
    }
}

/// Expand one token into its outcome list. Outcome chances always sum to
/// exactly 1: a guaranteed prefix is a single certain outcome, and a random
/// token's per-symbol chances plus the miss complement close the mass.
pub fn unpack_token(token: &str) -> Result<Vec<TokenOutcome>, PathsError> {
    if token.is_empty() {
        return Err(malformed(token, "empty token"));
    }
    if token.chars().all(|c| c.is_ascii_alphabetic()) {
        check_symbols(token, token)?;
        return Ok(vec![TokenOutcome::new(token, Chance::ONE)]);
    }

    let (body, multiplier) = match token.split_once('*') {
        Some((body, raw)) => {
            let multiplier: usize = raw
                .parse()
                .map_err(|_| malformed(token, format!("bad multiplier '{raw}'")))?;
            if multiplier == 0 {
                return Err(malformed(token, "multiplier must be at least 1"));
            }
            (body, multiplier)
        }
        None => (token, 1),
    };

    let digits_end = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    let (percent_digits, symbols) = body.split_at(digits_end);
    if percent_digits.is_empty() {
        return Err(malformed(token, "missing percentage"));
    }
    if symbols.is_empty() {
        return Err(malformed(token, "no path symbols after percentage"));
    }
    if !symbols.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(malformed(token, "path symbols interrupted by non-letters"));
    }
    check_symbols(token, symbols)?;

    let percent: i64 = percent_digits
        .parse()
        .map_err(|_| malformed(token, format!("bad percentage '{percent_digits}'")))?;
    let bonus_chance = Chance::from_percent(percent);
    // The percentage is split evenly across the listed symbols.
    let letter_chance = Chance::new(percent, 100 * symbols.chars().count() as i64);

    let mut outcomes: Vec<TokenOutcome> = symbols
        .chars()
        .map(|symbol| TokenOutcome::new(symbol.to_string().repeat(multiplier), letter_chance))
        .collect();
    if bonus_chance < Chance::ONE {
        outcomes.push(TokenOutcome::new("", bonus_chance.complement()));
    }
    Ok(outcomes)
}
