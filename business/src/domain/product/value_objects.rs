use serde::{Deserialize, Serialize};

/// A numeric price coerced from form text.
///
/// Coercion never fails. It follows JavaScript `Number()` on the trimmed text:
/// blank or missing input is `0`, decimal, exponent and `0x`/`0o`/`0b`
/// literals parse, `Infinity` keeps its sign and anything else is `NaN`.
/// Negative values and offers above the list price are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn coerce(raw: Option<&str>) -> Self {
        let text = raw.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Self(0.0);
        }

        Self(
            Self::parse_infinity(text)
                .or_else(|| Self::parse_radix(text))
                .or_else(|| Self::parse_decimal(text))
                .unwrap_or(f64::NAN),
        )
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    fn parse_infinity(text: &str) -> Option<f64> {
        match text {
            "Infinity" | "+Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        }
    }

    /// Unsigned `0x`, `0o` and `0b` literals.
    fn parse_radix(text: &str) -> Option<f64> {
        let radix = match text.get(..2)? {
            "0x" | "0X" => 16,
            "0o" | "0O" => 8,
            "0b" | "0B" => 2,
            _ => return None,
        };
        let digits = &text[2..];
        if digits.is_empty() {
            return Some(f64::NAN);
        }

        digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
                .or(Some(f64::NAN))
        })
    }

    fn parse_decimal(text: &str) -> Option<f64> {
        // `str::parse` also takes "inf" and "nan" spellings, which are NaN here.
        if !text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        {
            return None;
        }
        text.parse::<f64>().ok()
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerce(raw: &str) -> f64 {
        Price::coerce(Some(raw)).value()
    }

    #[test]
    fn should_coerce_integer_text() {
        assert_eq!(coerce("10"), 10.0);
    }

    #[test]
    fn should_coerce_decimal_text_with_surrounding_whitespace() {
        assert_eq!(coerce(" 8.50 "), 8.5);
        assert_eq!(coerce("1e3"), 1000.0);
        assert_eq!(coerce(".5"), 0.5);
    }

    #[test]
    fn should_default_to_zero_when_missing_or_blank() {
        assert_eq!(Price::coerce(None).value(), 0.0);
        assert_eq!(coerce("   "), 0.0);
    }

    #[test]
    fn should_accept_negative_price_without_bounds_check() {
        assert_eq!(coerce("-3"), -3.0);
    }

    #[test]
    fn should_parse_radix_literals() {
        assert_eq!(coerce("0x10"), 16.0);
        assert_eq!(coerce("0o17"), 15.0);
        assert_eq!(coerce("0b101"), 5.0);
    }

    #[test]
    fn should_keep_signed_infinity() {
        assert_eq!(coerce("Infinity"), f64::INFINITY);
        assert_eq!(coerce("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn should_become_nan_when_text_is_not_a_number() {
        for raw in ["ten", "inf", "NaN", "0x", "0xZZ", "-0x10", "1e", "12abc", "1,5"] {
            assert!(coerce(raw).is_nan(), "{raw} should be NaN");
        }
    }
}
