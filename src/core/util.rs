//! Common numeric helpers

/// Format a float for reports.
///
/// Integral values keep one decimal place (`4.0`); other values in
/// `[1e-4, 1e16)` use the shortest representation that round-trips.
/// Magnitudes outside that range use a signed, two-digit-minimum exponent
/// (`1e+20`, `1.5e-07`).
pub fn format_float(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        if value.is_finite() && value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            format!("{}", value)
        }
    } else {
        format_exponent(value)
    }
}

fn format_exponent(value: f64) -> String {
    let raw = format!("{:e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Square root by Newton iteration.
///
/// Returns NaN for negative or NaN input.
pub fn square_root(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        return f64::NAN;
    }
    if value == 0.0 || value.is_infinite() {
        return value;
    }

    // Start at or above the root; the iteration then decreases monotonically
    // until rounding stops it.
    let mut guess = value.max(1.0);
    loop {
        let next = 0.5 * (guess + value / guess);
        if next >= guess {
            return guess;
        }
        guess = next;
    }
}
