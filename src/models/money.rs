//! Monetary helpers
//!
//! Amounts are plain `f64` values in whole currency units (a month's salary,
//! a rent payment). Every figure the engine reports goes through [`round2`],
//! and every figure it reads goes through [`normalize_amount`] first.

/// Round to two decimals, half away from zero
///
/// `f64::EPSILON` is added before scaling so values such as `1.005`, which
/// are stored as `1.00499999...`, still round up.
///
/// # Examples
/// ```
/// use budget_split::models::money::round2;
/// assert_eq!(round2(1.005), 1.01);
/// assert_eq!(round2(923.787), 923.79);
/// ```
pub fn round2(n: f64) -> f64 {
    let scaled = (n + f64::EPSILON) * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        // Too large to carry cents anyway
        n
    }
}

/// Treat missing or non-finite amounts as zero and floor negatives at zero
pub fn normalize_amount(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Clamp a finite value into `[min, max]`, mapping non-finite values to `min`
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

/// Pull an overflowed result back to the largest finite value of its sign
pub fn saturate(value: f64) -> f64 {
    value.clamp(-f64::MAX, f64::MAX)
}

/// Sum of normalized amounts, saturating at `f64::MAX`
pub fn sum_normalized<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    amounts
        .into_iter()
        .map(normalize_amount)
        .fold(0.0, |total, amount| saturate(total + amount))
}

/// Format an amount with space-grouped thousands and a trailing currency symbol
///
/// `format_money(12345.5, "kr")` gives `"12 345.50 kr"`.
pub fn format_money(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }

    let cents = (round2(amount.abs()) * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if symbol.is_empty() {
        format!("{}{}.{:02}", sign, grouped, frac)
    } else {
        format!("{}{}.{:02} {}", sign, grouped, frac, symbol)
    }
}

/// Format a 0..1 share as a whole-number percentage
pub fn format_share(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}
