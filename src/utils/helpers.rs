use chrono::Local;

/// Coerce free-form text to an integer: optional sign, then leading decimal
/// digits; anything else yields 0. Callers treat 0 as "no id supplied".
pub fn loose_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    for ch in digits.chars() {
        let Some(d) = ch.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(d as i64);
    }

    if negative { -value } else { value }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`, the format stored in the
/// `created_at`/`updated_at` columns.
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(loose_int("42"), 42);
        assert_eq!(loose_int("-7"), -7);
        assert_eq!(loose_int("+13"), 13);
    }

    #[test]
    fn takes_the_numeric_prefix() {
        assert_eq!(loose_int("5abc"), 5);
        assert_eq!(loose_int(" 10 "), 10);
    }

    #[test]
    fn non_numeric_input_is_zero() {
        assert_eq!(loose_int("abc"), 0);
        assert_eq!(loose_int(""), 0);
        assert_eq!(loose_int("-"), 0);
    }

    #[test]
    fn timestamp_has_expected_shape() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
