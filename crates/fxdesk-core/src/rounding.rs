//! Rounding and display formatting.
//!
//! Money is shown with 2 decimals, rates with 5 (the usual FX
//! convention for pairs quoted to a tenth of a pip).

/// Decimals used for rates (bid, ask, trigger rates).
pub const RATE_DECIMALS: i32 = 5;

/// Decimals used for monetary amounts.
pub const MONEY_DECIMALS: i32 = 2;

/// Round `value` to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round_money(value: f64) -> f64 {
    round_to(value, MONEY_DECIMALS)
}

pub fn round_rate(value: f64) -> f64 {
    round_to(value, RATE_DECIMALS)
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.5}", rate)
}

/// `-$1,234.56` / `$65.16` style.
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Whole number with thousands separators, e.g. `100,000`.
pub fn format_units(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&rounded))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
