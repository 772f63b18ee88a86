//! Numeric rendering for report output.
//!
//! `format_brl` builds the `R$ 1.234,56` shape digit by digit instead of
//! reformatting a locale string through separator substitution.

pub const CURRENCY_PREFIX: &str = "R$";

/// Renders a value as Brazilian currency: `.` thousands grouping, `,`
/// decimal separator, exactly two decimal places.
pub fn format_brl(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let negative = value.is_sign_negative() && value != 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{CURRENCY_PREFIX} {sign}{grouped},{fraction:02}")
}

/// Plain numeric rendering for non-currency columns: integral values print
/// without a decimal tail.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
