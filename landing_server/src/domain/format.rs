// Display rules for the landing page figures.

// Shown on a category card when nobody offers the trade yet.
pub const COMING_SOON: &str = "Coming soon";
// Shown in the statistics bar when a figure could not be loaded.
pub const STAT_PLACEHOLDER: &str = "—";
// Shown instead of a rating before the first review exists.
pub const NO_RATING: &str = "New";

const ABBREVIATE_FROM: u64 = 1000;

/// Availability line for a category card.
///
/// Absent or zero counts read as [`COMING_SOON`], counts below one thousand
/// as `"{n} available"`, and larger counts are abbreviated to thousands with
/// one decimal, e.g. `1500 -> "1.5K+"`.
pub fn format_count(count: Option<u64>) -> String {
    match count {
        None | Some(0) => COMING_SOON.to_string(),
        Some(n) if n < ABBREVIATE_FROM => format!("{n} available"),
        Some(n) => format!("{}K+", thousands_one_decimal(n)),
    }
}

/// Headline figure for the statistics bar, abbreviated like [`format_count`].
pub fn format_total(value: u64) -> String {
    if value < ABBREVIATE_FROM {
        value.to_string()
    } else {
        format!("{}K+", thousands_one_decimal(value))
    }
}

pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() => format!("{r:.1}/5"),
        _ => NO_RATING.to_string(),
    }
}

// Thousands rounded half-up to one decimal, always printing the decimal.
fn thousands_one_decimal(n: u64) -> String {
    let tenths = (n as u128 * 10 + 500) / 1000;
    format!("{}.{}", tenths / 10, tenths % 10)
}
