//! Offline identifier validation: CNPJ/CPF check digits, CEP, dates, IBGE codes.

use chrono::NaiveDate;

use super::error::{IdentifierError, IdentifierKind};
use super::types::{Cep, Cnpj, Cpf, DATE_FORMAT, DateValue, MunicipalCode};

const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Keep only ASCII digits.
fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn to_values(digits: &str) -> Vec<u32> {
    digits.bytes().map(|b| u32::from(b - b'0')).collect()
}

/// Modulo-11 check digit used by CNPJ: 0 when `11 - rest` is 10 or 11.
fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let rest = sum % 11;
    if rest < 2 { 0 } else { 11 - rest }
}

/// Validate a CNPJ (company registry number).
///
/// Punctuation is ignored, so both `00000000000191` and
/// `00.000.000/0001-91` are accepted. Returns the normalized 14 digits.
pub fn validate_cnpj(raw: &str) -> Result<Cnpj, IdentifierError> {
    let digits = digits_of(raw);
    if digits.len() != 14 {
        return Err(IdentifierError::new(
            IdentifierKind::Cnpj,
            raw,
            format!("expected 14 digits, got {}", digits.len()),
        ));
    }

    let values = to_values(&digits);
    if all_same(&values) {
        return Err(IdentifierError::new(
            IdentifierKind::Cnpj,
            raw,
            "all digits are identical",
        ));
    }

    let first = cnpj_check_digit(&values[..12], &CNPJ_WEIGHTS_1);
    if values[12] != first {
        return Err(IdentifierError::new(
            IdentifierKind::Cnpj,
            raw,
            format!("first check digit should be {first}"),
        ));
    }

    let second = cnpj_check_digit(&values[..13], &CNPJ_WEIGHTS_2);
    if values[13] != second {
        return Err(IdentifierError::new(
            IdentifierKind::Cnpj,
            raw,
            format!("second check digit should be {second}"),
        ));
    }

    Ok(Cnpj::from_parts(raw, digits))
}

/// Validate a CPF (individual taxpayer number).
///
/// Punctuation is ignored. Returns the normalized 11 digits.
pub fn validate_cpf(raw: &str) -> Result<Cpf, IdentifierError> {
    let digits = digits_of(raw);
    if digits.len() != 11 {
        return Err(IdentifierError::new(
            IdentifierKind::Cpf,
            raw,
            format!("expected 11 digits, got {}", digits.len()),
        ));
    }

    let values = to_values(&digits);
    if all_same(&values) {
        return Err(IdentifierError::new(
            IdentifierKind::Cpf,
            raw,
            "all digits are identical",
        ));
    }

    for t in 9..11 {
        let sum: u32 = (0..t).map(|c| values[c] * (t as u32 + 1 - c as u32)).sum();
        let expected = ((sum * 10) % 11) % 10;
        if values[t] != expected {
            return Err(IdentifierError::new(
                IdentifierKind::Cpf,
                raw,
                format!("check digit at position {t} should be {expected}"),
            ));
        }
    }

    Ok(Cpf::from_parts(raw, digits))
}

/// Validate a CEP (postal code): exactly 8 digits once punctuation is removed.
pub fn validate_cep(raw: &str) -> Result<Cep, IdentifierError> {
    let digits = digits_of(raw);
    if digits.len() != 8 {
        return Err(IdentifierError::new(
            IdentifierKind::Cep,
            raw,
            format!("expected 8 digits, got {}", digits.len()),
        ));
    }
    Ok(Cep::from_parts(raw, digits))
}

/// Validate a `DD/MM/YYYY` date.
///
/// The parsed date must format back to exactly the input, which rejects
/// single-digit fields and padded years as well as impossible days.
pub fn validate_date(raw: &str) -> Result<DateValue, IdentifierError> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        IdentifierError::new(IdentifierKind::Date, raw, format!("not a DD/MM/YYYY date: {e}"))
    })?;

    if date.format(DATE_FORMAT).to_string() != raw {
        return Err(IdentifierError::new(
            IdentifierKind::Date,
            raw,
            "date does not round-trip through DD/MM/YYYY",
        ));
    }

    Ok(DateValue::from(date))
}

/// Validate an IBGE municipal code: non-empty and made only of ASCII digits.
pub fn validate_municipal_code(raw: &str) -> Result<MunicipalCode, IdentifierError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentifierError::new(
            IdentifierKind::MunicipalCode,
            raw,
            "must be numeric",
        ));
    }
    Ok(MunicipalCode::from_digits(raw))
}
