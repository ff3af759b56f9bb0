//! Luhn-style mod-10 check digit.
//!
//! Positions are weighted 2, 1, 2, 1, ... from the left. Doubled values
//! above 9 have 9 subtracted (the same as summing their two digits), and
//! the check digit is whatever brings the sum up to the next multiple of
//! ten.

/// Computes the check digit for a string of ASCII decimal digits.
///
/// Callers must only pass digits; any other byte is treated as its
/// distance from `'0'`, which is meaningless but never panics.
pub fn check_digit(digits: &str) -> u8 {
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let weight = if i % 2 == 0 { 2 } else { 1 };
            let v = u32::from(b.wrapping_sub(b'0')) * weight;
            if v > 9 {
                v - 9
            } else {
                v
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Returns true if the last digit of `digits` is the check digit of the rest.
pub fn is_valid(digits: &str) -> bool {
    match digits.as_bytes().split_last() {
        Some((&last @ b'0'..=b'9', body)) if !body.is_empty() => {
            check_digit(&digits[..body.len()]) == last - b'0'
        }
        _ => false,
    }
}
