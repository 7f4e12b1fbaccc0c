//! Lenient text-to-number conversion for input records.
//!
//! Records are read the way C's `atoi`/`atof` read them: leading whitespace
//! is skipped and the longest numeric prefix is converted, so `"12,"` and
//! `"12.9"` both give the integer 12. Text with no numeric prefix yields
//! `None`; callers encode it as zero.

/// Parse the integer prefix of `text`.
///
/// Out-of-range values saturate at the `i64` bounds; narrowing to the
/// element type happens afterwards and wraps.
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    let bytes = text.trim_start().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        seen = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    seen.then_some(value)
}

/// Parse the floating-point prefix of `text`.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let end = float_prefix_len(s.as_bytes());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

fn float_prefix_len(b: &[u8]) -> usize {
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let rest = &b[i..];
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return i + word.len();
        }
    }

    let int_digits = count_digits(&b[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = count_digits(&b[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&b[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}
