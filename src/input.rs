//! Text ingestion for tables and evaluation points.
//!
//! Numbers are separated by any whitespace and may use either `.` or `,`
//! as the decimal separator (`1,5` and `1.5` are the same number).
//! Nothing in the engines depends on this module.


use crate::errors::InputError;


/// Parses whitespace-separated numbers.
///
/// # Errors
/// - [`InputError::Empty`] if `text` holds no tokens
/// - [`InputError::InvalidNumber`] for the first token that is not a finite number;
///   `position` is the 0-based token index
pub fn parse_numbers(text: &str) -> Result<Vec<f64>, InputError> {
    let values = text
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| parse_token(token, position))
        .collect::<Result<Vec<f64>, InputError>>()?;

    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}


/// Parses nodes and values from two texts of equal length.
pub fn parse_table(x_text: &str, f_text: &str) -> Result<(Vec<f64>, Vec<f64>), InputError> {
    let x = parse_numbers(x_text)?;
    let f = parse_numbers(f_text)?;

    if x.len() != f.len() {
        return Err(InputError::LengthMismatch { x_len: x.len(), f_len: f.len() });
    }
    Ok((x, f))
}


fn parse_token(token: &str, position: usize) -> Result<f64, InputError> {
    let invalid = || InputError::InvalidNumber { token: token.to_owned(), position };

    // a token carrying both separators is ambiguous
    if token.contains(',') && token.contains('.') {
        return Err(invalid());
    }

    match token.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid()),
    }
}
