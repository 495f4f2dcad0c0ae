use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration for self-play limits.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum Limits {
    /// Play until the game is over.
    #[display(fmt = "{}", "ron::ser::to_string(self).map_err(|_| std::fmt::Error)?")]
    None,

    /// The maximum number of plies to play.
    #[display(fmt = "{}", "ron::ser::to_string(self).map_err(|_| std::fmt::Error)?")]
    Plies(u32),
}

impl Default for Limits {
    fn default() -> Self {
        Limits::None
    }
}

/// The reason why parsing [`Limits`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse self-play limits")]
pub struct ParseLimitsError(ron::de::SpannedError);

impl FromStr for Limits {
    type Err = ParseLimitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl Limits {
    /// Plies or [`u32::MAX`].
    pub fn plies(&self) -> u32 {
        match self {
            Limits::Plies(n) => *n,
            Limits::None => u32::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_limits_is_an_identity(l: Limits) {
        assert_eq!(l.to_string().parse(), Ok(l));
    }

    #[test]
    fn limits_are_encoded_in_ron() {
        assert_eq!("plies(200)".parse(), Ok(Limits::Plies(200)));
        assert_eq!("none".parse(), Ok(Limits::None));
    }

    #[proptest]
    fn parsing_limits_fails_for_unknown_variants(
        #[strategy("[a-z]+")]
        #[filter(!["none", "plies"].contains(&#s.as_str()))]
        s: String,
    ) {
        assert!(s.parse::<Limits>().is_err());
    }

    #[proptest]
    fn plies_returns_value_if_set(n: u32) {
        assert_eq!(Limits::Plies(n).plies(), n);
    }

    #[test]
    fn plies_returns_max_by_default() {
        assert_eq!(Limits::default().plies(), u32::MAX);
    }
}
