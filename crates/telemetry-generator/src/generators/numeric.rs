//! Numeric metric generators.

use rand::Rng;

/// Round `value` to the given number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Generate a random float in `[min, max]`, rounded to `places` decimals.
///
/// The rounded value is clamped back into the range so that a draw close to
/// a bound can never round outside it.
pub fn generate_rounded_range<R: Rng>(rng: &mut R, min: f64, max: f64, places: u32) -> f64 {
    let value = rng.gen_range(min..=max);
    round_to(value, places).clamp(min, max)
}
