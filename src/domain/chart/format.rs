//! Number formatting for the y axis and the tooltip.

const SI_PREFIXES: [&str; 17] =
    ["y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Significant digits of the axis and tooltip labels
pub const LABEL_PRECISION: usize = 2;

/// Digits and decimal exponent of `x` rounded to `significant` digits:
/// `(2.5e9, 2)` → `("25", 9)`.
fn decimal_parts(x: f64, significant: usize) -> (String, i32) {
    let formatted = format!("{:.*e}", significant.max(1) - 1, x);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    (mantissa.replace('.', ""), exponent.parse().unwrap_or(0))
}

/// SI-prefixed rendering with `significant` digits, keeping trailing zeros
/// (`1000` → `"1.0k"`, `0.5` → `"500m"`).
pub fn format_si(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let significant = significant.max(1);
    let sign = if value < 0.0 { "-" } else { "" };
    let x = value.abs();

    let (coefficient, exponent) = decimal_parts(x, significant);
    let prefix_exponent = exponent.div_euclid(3).clamp(-8, 8);
    let split = exponent - prefix_exponent * 3 + 1;
    let digits = coefficient.len() as i32;

    let body = if split == digits {
        coefficient
    } else if split > digits {
        coefficient + &"0".repeat((split - digits) as usize)
    } else if split > 0 {
        let (int_part, frac_part) = coefficient.split_at(split as usize);
        format!("{}.{}", int_part, frac_part)
    } else {
        // below the smallest prefix
        let (rest, _) = decimal_parts(x, (significant as i32 + split - 1).max(1) as usize);
        format!("0.{}{}", "0".repeat((-split) as usize), rest)
    };

    format!("{}{}{}", sign, body, SI_PREFIXES[(8 + prefix_exponent) as usize])
}

/// Label text: SI format with "G" spelled as "B" (billion)
pub fn format_value(value: f64) -> String {
    format_si(value, LABEL_PRECISION).replacen('G', "B", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billions_use_b() {
        assert_eq!(format_value(2_500_000_000.0), "2.5B");
        assert_eq!(format_value(16_000_000_000.0), "16B");
    }

    #[test]
    fn thousands_and_millions() {
        assert_eq!(format_value(1_200.0), "1.2k");
        assert_eq!(format_value(1_000.0), "1.0k");
        assert_eq!(format_value(150_000_000.0), "150M");
    }

    #[test]
    fn small_values_get_sub_unit_prefixes() {
        assert_eq!(format_value(45.0), "45");
        assert_eq!(format_value(0.5), "500m");
        assert_eq!(format_value(0.0065), "6.5m");
        assert_eq!(format_value(0.0), "0.0");
    }

    #[test]
    fn sign_and_non_finite() {
        assert_eq!(format_value(-1_200.0), "-1.2k");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn precision_is_configurable() {
        assert_eq!(format_si(1_234_567.0, 3), "1.23M");
        assert_eq!(format_si(1_234_567.0, 1), "1M");
    }
}
