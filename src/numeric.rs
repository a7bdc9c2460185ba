//! Shared numeric and display helpers
//!
//! Every ratio in the calculator goes through [`ratio_or_zero`] so that a zero
//! denominator yields 0 instead of NaN or infinity.

/// Round to the nearest integer, with halves rounding toward positive infinity.
///
/// This differs from `f64::round` for negative halves: `-2.5` becomes `-2.0`,
/// not `-3.0`. Profit figures are routinely negative in the first months, so
/// the distinction shows up in projection output.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place using [`round_half_up`]
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// `numerator / denominator`, or 0 when the denominator is not positive
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Format a dollar amount as a rounded whole number with thousands separators
///
/// `5000.0` -> `"$5,000"`, `-1234.6` -> `"-$1,235"`
pub fn format_dollars(amount: f64) -> String {
    let rounded = round_half_up(amount);
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
