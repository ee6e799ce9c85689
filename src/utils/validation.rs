//! Input shape validation
//!
//! Superficial checks for email addresses and zip codes. Neither function
//! attempts real address validation: they only look at the shape of the
//! string, which is all the forms using them need.

/// Checks that a string looks like an email address
///
/// Returns `true` when the input contains at least one `@` and at least one
/// `.`, anywhere and in any order.
///
/// # Arguments
/// - `email` - The address to check
pub fn validate_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Checks that a string is a five character numeric zip code
///
/// The length is counted in UTF-16 code units and the numeric test follows
/// JavaScript `Number(..)` conversion, so inputs such as `"+1234"`,
/// `"12.34"`, `"1e100"` or `"0x1FF"` are accepted alongside plain digits.
///
/// # Arguments
/// - `zip` - The zip code to check
///
/// # Returns
/// `true` if the input has length 5 and converts to a number
pub fn validate_zip(zip: &str) -> bool {
    zip.encode_utf16().count() == 5 && is_numeric(zip)
}

/// Whitespace and line terminators trimmed by `Number(..)`
///
/// Narrower than [`char::is_whitespace`]: U+0085 (NEL) is not included.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Returns `true` if `Number(input)` would not produce `NaN`
///
/// A blank string converts to `0` and therefore counts as numeric.
pub(crate) fn is_numeric(input: &str) -> bool {
    let trimmed = input.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return true;
    }

    is_radix_integer(trimmed) || is_infinity(trimmed) || is_decimal_literal(trimmed)
}

/// `0x..`, `0o..` and `0b..` literals; no sign allowed
fn is_radix_integer(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return false;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return false,
    };

    s[2..].chars().all(|c| c.is_digit(radix))
}

fn is_infinity(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned == "Infinity"
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}
