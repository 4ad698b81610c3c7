//! The fixed path alphabet and its canonical ordering.
//!
//! Order matters only for canonical serialization and sorting; matching is
//! membership-based and never depends on it.

/// Fire, Air, Water, Earth, Astral, Death, Nature, Blood, Holy.
pub const PATH_ORDER: &str = "FAWESDNBH";

/// Position of a symbol in the canonical order, `None` for anything outside
/// the alphabet.
pub fn path_index(symbol: char) -> Option<usize> {
    PATH_ORDER.find(symbol)
}

pub fn is_path_symbol(symbol: char) -> bool {
    path_index(symbol).is_some()
}

/// First symbol not in the alphabet, if any. Callers treat that as a fatal
/// parse error.
pub fn find_unknown_symbol(paths: &str) -> Option<char> {
    paths.chars().find(|c| !is_path_symbol(*c))
}

/// Sort a path string into canonical `FAWESDNBH` order. Purely cosmetic:
/// equality of reduced variants compares canonicalized strings, so every
/// path set has exactly one spelling.
pub fn canonicalize(paths: &str) -> String {
    let mut symbols: Vec<char> = paths.chars().collect();
    symbols.sort_by_key(|c| path_index(*c).unwrap_or(usize::MAX));
    symbols.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_fawesdnbh() {
        assert_eq!(canonicalize("HBNDSEWAF"), "FAWESDNBH");
        assert_eq!(canonicalize("EWF"), "FWE");
        assert_eq!(canonicalize("EEWWF"), "FWWEE");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let once = canonicalize("SFWDE");
        assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn unknown_symbols_are_reported() {
        assert_eq!(find_unknown_symbol("FWX"), Some('X'));
        assert_eq!(find_unknown_symbol("f"), Some('f'));
        assert_eq!(find_unknown_symbol("FAWESDNBH"), None);
    }
}
