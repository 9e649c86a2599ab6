//! Subscript - the tagged key type for global addressing
//!
//! A subscript is either canonical-numeric or a string. The two classes are
//! never coerced into each other at the type level: `Str("1")` and `Int(1)`
//! are distinct keys. Canonicalization happens only at the text boundary,
//! via [`Subscript::parse`].
//!
//! ## Collation
//!
//! Subscripts implement strict total ordering:
//!
//! 1. Canonical numbers sort strictly before all strings.
//! 2. Numbers compare by mathematical value (`Int` and `Num` form one
//!    comparison class: `Int(2) < Num(2.5) < Int(3)`).
//! 3. Strings compare byte-wise.
//!
//! ## Canonicalization
//!
//! A piece of text is numeric iff it round-trips: parsing it and re-rendering
//! the parsed number reproduces the identical bytes. `"007"`, `"1."`, `"+1"`,
//! `"2.50"`, `"-0"` and `" 1"` all fail the round trip and stay strings, so
//! no value ever has a dual identity.

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single subscript in a global path
///
/// `Num` is always finite and non-integral: integral values are normalized
/// to `Int` on every construction path, including deserialization, so the
/// two numeric variants never compare equal and `Eq`/`Hash` can stay
/// variant-local.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subscript {
    /// Canonical integer
    Int(i64),
    /// Canonical non-integral decimal
    Num(f64),
    /// String subscript (byte-wise collation)
    Str(String),
}

/// Magnitude bound below which every i64 is exactly representable as f64.
///
/// Also the bound above which every f64 is integral, which is what makes
/// large-integer vs decimal comparison exact without big-number arithmetic.
const MAX_EXACT: i64 = 1 << 53;

impl Subscript {
    /// Canonicalize text into a subscript.
    ///
    /// Numeric iff re-rendering the parsed number reproduces the input
    /// exactly; everything else is a string subscript.
    pub fn parse(text: &str) -> Subscript {
        if let Ok(i) = text.parse::<i64>() {
            if i.to_string() == text {
                return Subscript::Int(i);
            }
        }
        if let Ok(f) = text.parse::<f64>() {
            // fract() != 0 also excludes integral values beyond i64 range;
            // those stay strings rather than becoming lossy numbers.
            if f.is_finite() && f.fract() != 0.0 && f.to_string() == text {
                return Subscript::Num(f);
            }
        }
        Subscript::Str(text.to_string())
    }

}

/// Compare an integer against a (finite, non-integral) decimal.
fn cmp_int_num(i: i64, n: f64) -> Ordering {
    // A non-integral f64 always has magnitude below 2^53, so an integer at
    // or beyond that bound is ordered by sign alone.
    if i >= MAX_EXACT {
        return Ordering::Greater;
    }
    if i <= -MAX_EXACT {
        return Ordering::Less;
    }
    (i as f64).total_cmp(&n)
}

impl Ord for Subscript {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Subscript::Int(a), Subscript::Int(b)) => a.cmp(b),
            (Subscript::Num(a), Subscript::Num(b)) => a.total_cmp(b),
            (Subscript::Int(a), Subscript::Num(b)) => cmp_int_num(*a, *b),
            (Subscript::Num(a), Subscript::Int(b)) => cmp_int_num(*b, *a).reverse(),
            (Subscript::Str(a), Subscript::Str(b)) => a.as_bytes().cmp(b.as_bytes()),
            // Numbers sort strictly before strings
            (Subscript::Str(_), _) => Ordering::Greater,
            (_, Subscript::Str(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Subscript {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Subscript {
    fn eq(&self, other: &Self) -> bool {
        // Int/Num never overlap (Num is non-integral), so equality is
        // variant-local.
        match (self, other) {
            (Subscript::Int(a), Subscript::Int(b)) => a == b,
            (Subscript::Num(a), Subscript::Num(b)) => a.to_bits() == b.to_bits(),
            (Subscript::Str(a), Subscript::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Subscript {}

impl Hash for Subscript {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Subscript::Int(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            Subscript::Num(n) => {
                1u8.hash(state);
                n.to_bits().hash(state);
            }
            Subscript::Str(s) => {
                2u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for Subscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subscript::Int(i) => write!(f, "{}", i),
            Subscript::Num(n) => write!(f, "{}", n),
            Subscript::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

// === Convenient From implementations ===

impl From<i64> for Subscript {
    fn from(i: i64) -> Self {
        Subscript::Int(i)
    }
}

impl From<i32> for Subscript {
    fn from(i: i32) -> Self {
        Subscript::Int(i as i64)
    }
}

impl From<f64> for Subscript {
    fn from(f: f64) -> Self {
        // Normalize: integral decimals become Int, keeping Num non-integral.
        if f.is_finite() && f.fract() != 0.0 {
            Subscript::Num(f)
        } else if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            Subscript::Int(f as i64)
        } else {
            // Non-finite and out-of-range integral values have no canonical
            // numeric form; render them as string subscripts like any other
            // numeral that fails canonicalization.
            Subscript::Str(f.to_string())
        }
    }
}

/// Wire shape before normalization; `Num` may arrive integral or non-finite.
#[derive(serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum SubscriptWire {
    Int(i64),
    Num(f64),
    Str(String),
}

impl<'de> Deserialize<'de> for Subscript {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match SubscriptWire::deserialize(deserializer)? {
            SubscriptWire::Int(i) => Ok(Subscript::Int(i)),
            SubscriptWire::Str(s) => Ok(Subscript::Str(s)),
            SubscriptWire::Num(n) if n.is_finite() && n.fract() != 0.0 => Ok(Subscript::Num(n)),
            // Integral decimals normalize to Int; anything without an exact
            // integer form is rejected rather than admitted as a lossy key.
            SubscriptWire::Num(n)
                if n.is_finite() && n >= i64::MIN as f64 && n <= i64::MAX as f64 =>
            {
                Ok(Subscript::Int(n as i64))
            }
            SubscriptWire::Num(n) => Err(D::Error::custom(format!(
                "numeric subscript {n} has no canonical form"
            ))),
        }
    }
}

impl From<&str> for Subscript {
    fn from(s: &str) -> Self {
        Subscript::Str(s.to_string())
    }
}

impl From<String> for Subscript {
    fn from(s: String) -> Self {
        Subscript::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_integers() {
        assert_eq!(Subscript::parse("0"), Subscript::Int(0));
        assert_eq!(Subscript::parse("1"), Subscript::Int(1));
        assert_eq!(Subscript::parse("-3"), Subscript::Int(-3));
        assert_eq!(Subscript::parse("9223372036854775807"), Subscript::Int(i64::MAX));
    }

    #[test]
    fn test_parse_canonical_decimals() {
        assert_eq!(Subscript::parse("2.5"), Subscript::Num(2.5));
        assert_eq!(Subscript::parse("-0.25"), Subscript::Num(-0.25));
        assert_eq!(Subscript::parse("0.1"), Subscript::Num(0.1));
    }

    #[test]
    fn test_parse_non_canonical_stays_string() {
        // Failed canonicalization means plain string, no dual identity
        for s in ["007", "1.", "+1", "2.50", "-0", " 1", "1 ", ".5", "1e5", "NaN", "inf", ""] {
            assert_eq!(Subscript::parse(s), Subscript::Str(s.to_string()), "case: {:?}", s);
        }
    }

    #[test]
    fn test_parse_integral_beyond_i64_is_string() {
        let s = "9223372036854775808"; // i64::MAX + 1
        assert_eq!(Subscript::parse(s), Subscript::Str(s.to_string()));
    }

    #[test]
    fn test_numbers_before_strings() {
        assert!(Subscript::Int(999) < Subscript::Str("0".into()));
        assert!(Subscript::Num(1.5) < Subscript::Str("".into()));
    }

    #[test]
    fn test_numeric_class_comparison() {
        assert!(Subscript::Int(9) < Subscript::Int(10));
        assert!(Subscript::Int(2) < Subscript::Num(2.5));
        assert!(Subscript::Num(2.5) < Subscript::Int(3));
        assert!(Subscript::Num(-0.5) < Subscript::Num(0.5));
    }

    #[test]
    fn test_large_int_vs_decimal() {
        // Beyond 2^53 the f64 cast is lossy; ordering must still be exact
        let big = Subscript::Int((1 << 53) + 1);
        assert!(Subscript::Num(9007199254740991.5) < big);
        let small = Subscript::Int(-(1 << 53) - 1);
        assert!(small < Subscript::Num(-9007199254740991.5));
    }

    #[test]
    fn test_string_collation_is_bytewise() {
        assert!(Subscript::Str("a".into()) < Subscript::Str("b".into()));
        assert!(Subscript::Str("Z".into()) < Subscript::Str("a".into()));
        assert!(Subscript::Str("apple".into()) < Subscript::Str("apples".into()));
    }

    #[test]
    fn test_mixed_key_collation() {
        // {10, 2, "apple", "1", 1} collates as 1, 2, 10, "1", "apple"
        let mut subs = vec![
            Subscript::Int(10),
            Subscript::Int(2),
            Subscript::Str("apple".into()),
            Subscript::Str("1".into()),
            Subscript::Int(1),
        ];
        subs.sort();
        assert_eq!(
            subs,
            vec![
                Subscript::Int(1),
                Subscript::Int(2),
                Subscript::Int(10),
                Subscript::Str("1".into()),
                Subscript::Str("apple".into()),
            ]
        );
    }

    #[test]
    fn test_string_one_distinct_from_int_one() {
        assert_ne!(Subscript::Str("1".into()), Subscript::Int(1));
        assert!(Subscript::Int(1) < Subscript::Str("1".into()));
    }

    #[test]
    fn test_from_f64_normalizes_integral() {
        assert_eq!(Subscript::from(2.0), Subscript::Int(2));
        assert_eq!(Subscript::from(-0.0), Subscript::Int(0));
        assert_eq!(Subscript::from(2.5), Subscript::Num(2.5));
    }

    #[test]
    fn test_from_f64_out_of_range_integral_is_string() {
        // finite but with no exact i64 form; must not become a lossy Num key
        assert!(matches!(Subscript::from(1e300), Subscript::Str(_)));
        assert!(matches!(Subscript::from(f64::NAN), Subscript::Str(_)));
    }

    #[test]
    fn test_deserialize_normalizes_integral_num() {
        let sub: Subscript = serde_json::from_str(r#"{"num":2.0}"#).unwrap();
        assert_eq!(sub, Subscript::Int(2));
        // equality and ordering agree after normalization
        assert_eq!(sub.cmp(&Subscript::Int(2)), Ordering::Equal);
    }

    #[test]
    fn test_deserialize_rejects_num_without_canonical_form() {
        assert!(serde_json::from_str::<Subscript>(r#"{"num":1e300}"#).is_err());
        assert!(serde_json::from_str::<Subscript>(r#"{"num":-1e300}"#).is_err());
        let sub: Subscript = serde_json::from_str(r#"{"num":2.5}"#).unwrap();
        assert_eq!(sub, Subscript::Num(2.5));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Subscript::Int(1));
        set.insert(Subscript::Str("1".into()));
        set.insert(Subscript::parse("1"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Subscript::Int(10).to_string(), "10");
        assert_eq!(Subscript::Num(2.5).to_string(), "2.5");
        assert_eq!(Subscript::Str("apple".into()).to_string(), "\"apple\"");
    }

    #[test]
    fn test_serde_tagged_round_trip() {
        let subs = vec![
            Subscript::Int(1),
            Subscript::Num(2.5),
            Subscript::Str("1".into()),
        ];
        let json = serde_json::to_string(&subs).unwrap();
        assert_eq!(json, r#"[{"int":1},{"num":2.5},{"str":"1"}]"#);
        let back: Vec<Subscript> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, subs);
    }
}
