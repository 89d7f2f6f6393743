//! Bidirectional char-code table.

use std::collections::HashMap;
use std::hash::Hash;

/// A code table built from one canonical list of `(code, value)` pairs.
///
/// The value-to-code direction is derived by inverting the list when the
/// table is built. There is no second list to keep in sync.
#[derive(Debug)]
pub struct CharCodec<T: 'static> {
    pairs: &'static [(char, T)],
    forward: HashMap<char, T>,
    reverse: HashMap<T, char>,
}

impl<T> CharCodec<T>
where
    T: Copy + Eq + Hash + 'static,
{
    /// Build a codec from its canonical pairs.
    ///
    /// Codes and values must each be distinct for the mapping to be a
    /// bijection.
    pub fn from_pairs(pairs: &'static [(char, T)]) -> Self {
        let forward: HashMap<char, T> = pairs.iter().copied().collect();
        let reverse: HashMap<T, char> = forward
            .iter()
            .map(|(&code, &value)| (value, code))
            .collect();

        debug_assert_eq!(forward.len(), pairs.len(), "duplicate code in table");
        debug_assert_eq!(reverse.len(), pairs.len(), "duplicate value in table");

        Self {
            pairs,
            forward,
            reverse,
        }
    }

    /// Map a code to its value. `None` outside the domain.
    pub fn decode(&self, code: char) -> Option<T> {
        self.forward.get(&code).copied()
    }

    /// Map a value to its code. `None` if the value has no code.
    pub fn encode(&self, value: T) -> Option<char> {
        self.reverse.get(&value).copied()
    }

    /// Codes in canonical order.
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.pairs.iter().map(|(code, _)| *code)
    }

    /// Values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.pairs.iter().map(|(_, value)| *value)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Light {
        Red,
        Green,
    }

    static LIGHTS: &[(char, Light)] = &[('r', Light::Red), ('g', Light::Green)];

    #[test]
    fn test_reverse_is_derived() {
        let codec = CharCodec::from_pairs(LIGHTS);

        assert_eq!(codec.decode('g'), Some(Light::Green));
        assert_eq!(codec.encode(Light::Red), Some('r'));
        assert_eq!(codec.decode('y'), None);
        assert_eq!(codec.len(), 2);
    }

    #[test]
    fn test_canonical_order() {
        let codec = CharCodec::from_pairs(LIGHTS);

        assert_eq!(codec.codes().collect::<String>(), "rg");
        assert_eq!(
            codec.values().collect::<Vec<_>>(),
            vec![Light::Red, Light::Green]
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate value")]
    fn test_duplicate_value_rejected() {
        static BROKEN: &[(char, Light)] = &[('r', Light::Red), ('x', Light::Red)];
        let _ = CharCodec::from_pairs(BROKEN);
    }
}
