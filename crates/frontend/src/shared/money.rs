//! BRL formatting. Every amount in the app is an integer number of cents;
//! this is the only place that divides by 100.

/// `123456` -> `"R$ 1.234,56"`
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let units = abs / 100;
    let frac = abs % 100;
    format!("{}R$ {},{:02}", sign, group_thousands(units), frac)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Parses a typed amount. `"R$ 1.234,56"`, `"1234,5"` and `"12"` are accepted.
pub fn parse_brl(input: &str) -> Option<i64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let (units, frac) = match body.split_once(',') {
        Some((u, f)) => (u, f),
        None => (body, ""),
    };
    if units.is_empty() && frac.is_empty() {
        return None;
    }
    if !units.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 {
        return None;
    }
    let units: i64 = if units.is_empty() { 0 } else { units.parse().ok()? };
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    let cents = units.checked_mul(100)?.checked_add(frac)?;
    Some(if negative { -cents } else { cents })
}

/// Re-masks a money input as the user types: the digits are read as cents.
/// Returns the masked text and the value in cents.
pub fn mask_brl_input(raw: &str) -> (String, i64) {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return (String::new(), 0);
    }
    // 15 digits keep the value far below i64::MAX
    let digits = &digits[..digits.len().min(15)];
    let cents: i64 = digits.parse().unwrap_or(0);
    (format_brl(cents), cents)
}

/// Text shown in a money input for an existing value
pub fn input_text(cents: i64) -> String {
    if cents == 0 {
        String::new()
    } else {
        format_brl(cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(11000), "R$ 110,00");
        assert_eq!(format_brl(123456), "R$ 1.234,56");
        assert_eq!(format_brl(123456789), "R$ 1.234.567,89");
        assert_eq!(format_brl(-2550), "-R$ 25,50");
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("R$ 12,34"), Some(1234));
        assert_eq!(parse_brl("1.234,56"), Some(123456));
        assert_eq!(parse_brl("12"), Some(1200));
        assert_eq!(parse_brl("12,5"), Some(1250));
        assert_eq!(parse_brl(",99"), Some(99));
        assert_eq!(parse_brl("-3,00"), Some(-300));
        assert_eq!(parse_brl(""), None);
        assert_eq!(parse_brl("abc"), None);
        assert_eq!(parse_brl("1,234"), None);
    }

    #[test]
    fn test_mask_reads_digits_as_cents() {
        assert_eq!(mask_brl_input("1"), ("R$ 0,01".to_string(), 1));
        assert_eq!(mask_brl_input("R$ 0,012"), ("R$ 0,12".to_string(), 12));
        assert_eq!(mask_brl_input("R$ 1.234,567"), ("R$ 12.345,67".to_string(), 1234567));
        assert_eq!(mask_brl_input("R$ "), (String::new(), 0));
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        for cents in [1, 99, 100, 11000, 987654] {
            assert_eq!(parse_brl(&format_brl(cents)), Some(cents));
        }
        assert_eq!(input_text(0), "");
    }
}
