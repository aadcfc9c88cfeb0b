//! Conversion between numeric tokens and values.
//!
//! Two families of readers are provided:
//!
//! * *lenient* readers accept the longest leading numeric literal of a token and ignore the
//!   remainder, the same way `parseFloat`/`parseInt` do. A token with no numeric prefix yields a
//!   sentinel rather than an error.
//! * *strict* readers require the whole token to be a well-formed literal.

use std::{
    fmt::{self, Display},
    ops::Range,
};

use crate::Real;

/// Decimal exponents of values written without exponent notation (`1e-7` and `1e21` are not).
const PLAIN_EXPONENTS: Range<i32> = -6..21;

/// Errors produced by the strict readers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    #[error("{0:?} is not a decimal number")]
    NotANumber(String),
    #[error("{0:?} is not a finite number")]
    NotFinite(String),
    #[error("{0:?} is not a positive integer")]
    NotAnIndex(String),
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// The longest prefix of `token` which reads as a decimal literal:
/// `[+-] (Infinity | digits [. digits] [(e|E) [+-] digits] | . digits [exponent])`
///
/// An exponent marker without digits after it is not part of the literal.
fn decimal_prefix(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if token[end..].starts_with("Infinity") {
        return Some(&token[..end + "Infinity".len()]);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(&token[..end])
}

/// Read a real number from the leading decimal literal of `token`.
///
/// Trailing garbage is ignored (`"1.5abc"` reads as `1.5`). A token without a leading literal
/// reads as NaN.
pub fn real_lenient<R: Real>(token: &str) -> R {
    let Some(literal) = decimal_prefix(token) else {
        return R::nan();
    };
    match literal.trim_start_matches('+') {
        "Infinity" => R::infinity(),
        "-Infinity" => R::neg_infinity(),
        digits => digits.parse().unwrap_or_else(|_| R::nan()),
    }
}

/// Read a real number from the whole of `token`, which must be finite.
pub fn real_strict<R: Real>(token: &str) -> Result<R, NumberError> {
    let value: R = token
        .parse()
        .map_err(|_| NumberError::NotANumber(token.to_owned()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumberError::NotFinite(token.to_owned()))
    }
}

/// Read an integer from the leading `[+-] digits` of `token`.
///
/// Returns `None` if `token` has no leading digits or the value doesn't fit in an [i64].
pub fn integer_lenient(token: &str) -> Option<i64> {
    let bytes = token.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    token[..sign + digits].parse().ok()
}

/// Read a 1-based index from the whole of `token`, which must be a positive decimal integer.
pub fn index_strict(token: &str) -> Result<i64, NumberError> {
    let not_an_index = || NumberError::NotAnIndex(token.to_owned());
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_an_index());
    }
    match token.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(not_an_index()),
    }
}

/// Displays a real number as the shortest decimal text which reads back as the same value.
///
/// Integral values have no decimal point (`1.0` is written `1`). Values below `1e-6` or from
/// `1e21` in magnitude use exponent notation, with a sign on the exponent (`1e-7`, `1.5e+300`).
/// Non-finite values are written as `NaN`, `Infinity`, and `-Infinity`, which [real_lenient]
/// reads back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shortest<R>(pub R);

impl<R: Real> Display for Shortest<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value.is_sign_negative() {
                "-Infinity"
            } else {
                "Infinity"
            })
        } else {
            // `{:e}` has the same shortest digits as `{}`, which never switches to an exponent
            let sci = format!("{value:e}");
            match sci.split_once('e') {
                Some((mantissa, exp)) => match exp.parse::<i32>() {
                    Ok(exp) if !PLAIN_EXPONENTS.contains(&exp) => {
                        let sign = if exp < 0 { "" } else { "+" };
                        write!(f, "{mantissa}e{sign}{exp}")
                    }
                    _ => write!(f, "{value}"),
                },
                None => write!(f, "{value}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::decimal_prefix;

    #[test]
    fn prefix_stops_at_garbage() {
        assert_eq!(decimal_prefix("1.5abc"), Some("1.5"));
        assert_eq!(decimal_prefix("-2e"), Some("-2"));
        assert_eq!(decimal_prefix("3e+"), Some("3"));
        assert_eq!(decimal_prefix("4E-2x"), Some("4E-2"));
        assert_eq!(decimal_prefix("1/2/3"), Some("1"));
    }

    #[test]
    fn prefix_fraction_forms() {
        assert_eq!(decimal_prefix(".5"), Some(".5"));
        assert_eq!(decimal_prefix("5."), Some("5."));
        assert_eq!(decimal_prefix("-.25e1"), Some("-.25e1"));
        assert_eq!(decimal_prefix("."), None);
        assert_eq!(decimal_prefix("-"), None);
        assert_eq!(decimal_prefix(""), None);
    }

    #[test]
    fn prefix_infinity() {
        assert_eq!(decimal_prefix("Infinity"), Some("Infinity"));
        assert_eq!(decimal_prefix("-Infinityx"), Some("-Infinity"));
        assert_eq!(decimal_prefix("inf"), None);
        assert_eq!(decimal_prefix("NaN"), None);
    }
}
