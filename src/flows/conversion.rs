//! Decimal to binary / hexadecimal conversion
//!
//! Each value is truncated toward zero and written as sign + magnitude in
//! base 2 and base 16 (uppercase, no prefix). Digits are taken straight from
//! the float's mantissa and exponent, so every finite value converts exactly
//! without going through a fixed-width integer.

use std::path::Path;

use crate::core::diagnostics::Diagnostics;
use crate::core::error::ToolError;
use crate::core::file_reader::read_numbers;
use crate::core::model::{ConversionEntry, ConversionTable, NumericDataset};

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// Binary digits of `trunc(|value|)`, without sign
fn magnitude_binary(value: f64) -> String {
    let bits = value.abs().to_bits();
    let exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    if exponent == 0 {
        // zero or subnormal
        return "0".to_string();
    }
    let mantissa = (bits & ((1u64 << MANTISSA_BITS) - 1)) | (1u64 << MANTISSA_BITS);
    let shift = exponent - EXPONENT_BIAS;

    if shift >= 0 {
        let mut digits = format!("{:b}", mantissa);
        digits.extend(std::iter::repeat('0').take(shift as usize));
        digits
    } else if shift > -64 {
        format!("{:b}", mantissa >> (-shift))
    } else {
        "0".to_string()
    }
}

/// Regroup binary digits into uppercase hexadecimal
fn binary_to_hex(binary: &str) -> String {
    let pad = (4 - binary.len() % 4) % 4;
    let padded: Vec<u8> = std::iter::repeat(b'0')
        .take(pad)
        .chain(binary.bytes())
        .collect();

    let hex: String = padded
        .chunks(4)
        .map(|nibble| {
            let v = nibble.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b - b'0'));
            char::from_digit(v, 16).unwrap_or('0').to_ascii_uppercase()
        })
        .collect();

    let trimmed = hex.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Convert a single value
pub fn convert_number(value: f64) -> ConversionEntry {
    let magnitude = magnitude_binary(value);
    let hex = binary_to_hex(&magnitude);
    let sign = if value < 0.0 && magnitude != "0" { "-" } else { "" };

    ConversionEntry {
        decimal: value,
        binary: format!("{}{}", sign, magnitude),
        hexadecimal: format!("{}{}", sign, hex),
    }
}

/// Convert every value, keeping input order and duplicates
pub fn convert_numbers(dataset: &NumericDataset) -> ConversionTable {
    ConversionTable {
        entries: dataset.values().iter().copied().map(convert_number).collect(),
    }
}

/// Load the dataset at `path` and convert it
pub fn analyze(
    path: &Path,
    diagnostics: &mut dyn Diagnostics,
) -> Result<ConversionTable, ToolError> {
    let dataset = read_numbers(path, diagnostics)?;
    Ok(convert_numbers(&dataset))
}
