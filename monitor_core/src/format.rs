//! Currency and percent formatting.
//!
//! Pure string projections used by every view. Two locale conventions are
//! supported: `en` (`$1,234.50`) and `ru` (`1 234,50 $`). Compact forms
//! abbreviate large magnitudes with `B`/`M` suffixes and skip thousands
//! grouping, mirroring the full-precision form only in decimal separator and
//! symbol placement. Percent badges are locale-independent.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Currency display convention selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Locale {
    /// `$1,234.50` — leading symbol, comma grouping, dot decimal.
    En,
    /// `1 234,50 $` — trailing symbol, space grouping, comma decimal.
    Ru,
}

impl Locale {
    /// Format `value` as currency with two fractional digits and grouping.
    pub fn currency(&self, value: f64) -> String {
        let amount = format!("{:.2}", value.abs());
        let (int_part, frac_part) = amount.split_once('.').unwrap_or((amount.as_str(), "00"));
        let sign = if value < 0.0 { "-" } else { "" };
        match self {
            Locale::En => format!("{}${}.{}", sign, group_digits(int_part, ','), frac_part),
            Locale::Ru => format!("{}{},{} $", sign, group_digits(int_part, ' '), frac_part),
        }
    }

    /// Format `value` compactly: billions as `B`, millions as `M`, anything
    /// smaller as the literal two-decimal amount.
    pub fn currency_compact(&self, value: f64) -> String {
        if value >= 1e9 {
            self.suffixed(value / 1e9, "B")
        } else if value >= 1e6 {
            self.suffixed(value / 1e6, "M")
        } else {
            self.suffixed(value, "")
        }
    }

    fn suffixed(&self, scaled: f64, suffix: &str) -> String {
        match self {
            Locale::En => format!("${:.2}{}", scaled, suffix),
            Locale::Ru => format!("{}{} $", format!("{:.2}", scaled).replace('.', ","), suffix),
        }
    }
}

/// Format a percent change with an explicit sign: `+1.23%`, `-0.45%`.
pub fn signed_percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Insert `separator` between three-digit groups, counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_currency_grouping() {
        assert_eq!(Locale::En.currency(1234.5), "$1,234.50");
        assert_eq!(Locale::En.currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(Locale::En.currency(500.0), "$500.00");
        assert_eq!(Locale::En.currency(0.0), "$0.00");
    }

    #[test]
    fn test_ru_currency_convention() {
        assert_eq!(Locale::Ru.currency(1234.5), "1 234,50 $");
        assert_eq!(Locale::Ru.currency(43_250.0), "43 250,00 $");
        assert_eq!(Locale::Ru.currency(98.0), "98,00 $");
    }

    #[test]
    fn test_negative_amounts_keep_the_sign_outside() {
        assert_eq!(Locale::En.currency(-1234.5), "-$1,234.50");
        assert_eq!(Locale::Ru.currency(-1234.5), "-1 234,50 $");
    }

    #[test]
    fn test_compact_billions_and_millions() {
        assert_eq!(Locale::En.currency_compact(2_500_000_000.0), "$2.50B");
        assert_eq!(Locale::En.currency_compact(3_400_000.0), "$3.40M");
        assert_eq!(Locale::En.currency_compact(500.0), "$500.00");
    }

    #[test]
    fn test_compact_follows_the_ru_convention() {
        assert_eq!(Locale::Ru.currency_compact(2_500_000_000.0), "2,50B $");
        assert_eq!(Locale::Ru.currency_compact(3_400_000.0), "3,40M $");
        assert_eq!(Locale::Ru.currency_compact(500.0), "500,00 $");
    }

    #[test]
    fn test_signed_percent_always_carries_a_sign() {
        assert_eq!(signed_percent(1.234), "+1.23%");
        assert_eq!(signed_percent(-0.456), "-0.46%");
        assert_eq!(signed_percent(0.0), "+0.00%");
    }

    #[test]
    fn test_locale_parses_case_insensitively() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!(Locale::En.to_string(), "en");
    }
}
