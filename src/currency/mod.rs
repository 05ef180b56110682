//! Display-boundary money handling: locale-aware formatting of minor units and
//! parsing of amounts typed on the command line.

use payoff_domain::{currency_precision, to_minor_units, Money};
use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Separators for a BCP 47 tag; unknown tags fall back to `en-US` punctuation.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" => (',', '.'),
            "fr" | "sv" | "fi" | "nb" | "pl" | "cs" | "ru" => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        "INR" => "₹".into(),
        _ => code.into(),
    }
}

/// Formats `amount` minor units of `code`, e.g. `-$1,234.50`.
pub fn format_money(amount: Money, code: &str, locale: &LocaleConfig) -> String {
    format_money_with(amount, code, locale, CurrencyDisplay::Symbol)
}

pub fn format_money_with(
    amount: Money,
    code: &str,
    locale: &LocaleConfig,
    display: CurrencyDisplay,
) -> String {
    let body = format_minor_units(amount.unsigned_abs(), currency_precision(code), locale);
    let sign = if amount < 0 { "-" } else { "" };
    match display {
        CurrencyDisplay::Symbol => format!("{}{}{}", sign, symbol_for(code), body),
        CurrencyDisplay::Code => format!("{}{} {}", sign, code, body),
    }
}

fn format_minor_units(value: u64, precision: u8, locale: &LocaleConfig) -> String {
    let scale = 10u64.pow(precision as u32);
    let whole = group_digits(&(value / scale).to_string(), locale.grouping_separator);
    if precision == 0 {
        return whole;
    }
    format!(
        "{}{}{:0width$}",
        whole,
        locale.decimal_separator,
        value % scale,
        width = precision as usize
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Parses a display amount such as `250`, `1,250.75` or `-40` into minor units.
pub fn parse_amount(input: &str, code: &str) -> Result<Money, String> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '_' | ' ' | '$'))
        .collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| format!("`{}` is not an amount", input))?;
    if !value.is_finite() {
        return Err(format!("`{}` is not a finite amount", input));
    }
    Ok(to_minor_units(value, currency_precision(code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_sign() {
        let locale = LocaleConfig::default();
        assert_eq!(format_money(123_456_789, "USD", &locale), "$1,234,567.89");
        assert_eq!(format_money(-5, "USD", &locale), "-$0.05");
        assert_eq!(format_money(0, "USD", &locale), "$0.00");
    }

    #[test]
    fn respects_locale_and_precision() {
        let german = LocaleConfig::for_tag("de-DE");
        assert_eq!(format_money(1_234_550, "EUR", &german), "€12.345,50");
        assert_eq!(
            format_money_with(150_000, "JPY", &LocaleConfig::default(), CurrencyDisplay::Code),
            "JPY 150,000"
        );
        assert_eq!(format_money(1_500, "KWD", &LocaleConfig::default()), "KWD1.500");
    }

    #[test]
    fn parses_display_amounts() {
        assert_eq!(parse_amount("200", "USD"), Ok(20_000));
        assert_eq!(parse_amount("$1,250.75", "USD"), Ok(125_075));
        assert_eq!(parse_amount("-40", "USD"), Ok(-4_000));
        assert_eq!(parse_amount("5000", "JPY"), Ok(5_000));
        assert!(parse_amount("ten", "USD").is_err());
        assert!(parse_amount("inf", "USD").is_err());
    }
}
