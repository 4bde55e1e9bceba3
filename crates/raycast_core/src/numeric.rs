//! Numeric token handling compatible with existing scene files.
//!
//! Scene files have always been read with C `atof` semantics: the longest
//! leading decimal number is used and anything unparseable reads as zero.
//! The validity checks below are built on that, so a literal `"0"` and a
//! token that fails to parse cannot be told apart by value alone. Existing
//! files depend on this behaviour, so it is kept as is.

/// Parse the leading decimal number of `token` the way C `atof` does.
///
/// Leading whitespace is skipped. `inf`, `infinity` and `nan` are recognized
/// case-insensitively. Returns `0.0` when no number prefix exists.
pub fn atof(token: &str) -> f64 {
    let s = token.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    let rest = &bytes[end..];
    if starts_with_ignore_case(rest, b"inf") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    if starts_with_ignore_case(rest, b"nan") {
        return f64::NAN;
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
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // The prefix is ASCII, so slicing at `end` is on a char boundary
    s[..end].parse().unwrap_or(0.0)
}

/// `true` when `token` is the literal `"0"` or reads as a positive number.
///
/// Used for colors, radius and camera extents. Note `"0.0"` is rejected.
pub fn accepts_positive(token: &str) -> bool {
    token == "0" || atof(token) > 0.0
}

/// `true` when `token` is the literal `"0"` or reads as a non-zero number.
///
/// Effectively rejects only tokens that have no numeric prefix.
pub fn accepts_numeric(token: &str) -> bool {
    token == "0" || atof(token) != 0.0
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn starts_with_ignore_case(bytes: &[u8], word: &[u8]) -> bool {
    bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word)
}
