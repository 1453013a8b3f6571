use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{IdentifierError, IdentifierKind};
use super::validation::{
    validate_cep, validate_cnpj, validate_cpf, validate_date, validate_municipal_code,
};

/// Text pattern of [`DateValue`] (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A checksum-validated CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj {
    raw: String,
    digits: String,
}

/// A checksum-validated CPF.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf {
    raw: String,
    digits: String,
}

/// An 8-digit CEP.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep {
    raw: String,
    digits: String,
}

/// A numeric IBGE municipal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MunicipalCode {
    digits: String,
}

macro_rules! digit_identifier {
    ($ty:ident, $validate:ident) => {
        impl $ty {
            pub(crate) fn from_parts(raw: &str, digits: String) -> Self {
                Self {
                    raw: raw.to_string(),
                    digits,
                }
            }

            /// The input exactly as the caller supplied it.
            pub fn raw(&self) -> &str {
                &self.raw
            }

            /// Normalized digit-only form.
            pub fn as_str(&self) -> &str {
                &self.digits
            }
        }

        impl FromStr for $ty {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $validate(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = IdentifierError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                $validate(&s)
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> String {
                v.digits
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.digits)
            }
        }
    };
}

digit_identifier!(Cnpj, validate_cnpj);
digit_identifier!(Cpf, validate_cpf);
digit_identifier!(Cep, validate_cep);

impl Cnpj {
    /// Punctuated form, e.g. `00.000.000/0001-91`.
    pub fn formatted(&self) -> String {
        let d = &self.digits;
        format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        )
    }
}

impl Cpf {
    /// Punctuated form, e.g. `123.456.789-09`.
    pub fn formatted(&self) -> String {
        let d = &self.digits;
        format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    }
}

impl Cep {
    /// Hyphenated form, e.g. `01001-000`.
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.digits[..5], &self.digits[5..])
    }
}

impl MunicipalCode {
    pub(crate) fn from_digits(digits: &str) -> Self {
        Self {
            digits: digits.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl FromStr for MunicipalCode {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_municipal_code(s)
    }
}

impl TryFrom<String> for MunicipalCode {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate_municipal_code(&s)
    }
}

impl From<MunicipalCode> for String {
    fn from(v: MunicipalCode) -> String {
        v.digits
    }
}

impl fmt::Display for MunicipalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Any validated identifier, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Cnpj(Cnpj),
    Cpf(Cpf),
    Cep(Cep),
    MunicipalCode(MunicipalCode),
}

impl Identifier {
    /// Validate `raw` as an identifier of the given kind.
    ///
    /// [`IdentifierKind::Date`] is not an identifier and is always rejected;
    /// use [`DateValue::parse`] instead.
    pub fn parse(kind: IdentifierKind, raw: &str) -> Result<Self, IdentifierError> {
        match kind {
            IdentifierKind::Cnpj => validate_cnpj(raw).map(Self::Cnpj),
            IdentifierKind::Cpf => validate_cpf(raw).map(Self::Cpf),
            IdentifierKind::Cep => validate_cep(raw).map(Self::Cep),
            IdentifierKind::MunicipalCode => validate_municipal_code(raw).map(Self::MunicipalCode),
            IdentifierKind::Date => Err(IdentifierError::new(
                kind,
                raw,
                "dates are parsed with DateValue::parse",
            )),
        }
    }

    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Cnpj(_) => IdentifierKind::Cnpj,
            Self::Cpf(_) => IdentifierKind::Cpf,
            Self::Cep(_) => IdentifierKind::Cep,
            Self::MunicipalCode(_) => IdentifierKind::MunicipalCode,
        }
    }

    /// The input as supplied. Municipal codes have no separate raw form.
    pub fn raw(&self) -> &str {
        match self {
            Self::Cnpj(v) => v.raw(),
            Self::Cpf(v) => v.raw(),
            Self::Cep(v) => v.raw(),
            Self::MunicipalCode(v) => v.as_str(),
        }
    }

    pub fn normalized(&self) -> &str {
        match self {
            Self::Cnpj(v) => v.as_str(),
            Self::Cpf(v) => v.as_str(),
            Self::Cep(v) => v.as_str(),
            Self::MunicipalCode(v) => v.as_str(),
        }
    }
}

/// A calendar date that round-trips through `DD/MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateValue(NaiveDate);

impl DateValue {
    /// Parse `DD/MM/YYYY`, rejecting impossible or non-canonical dates.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        validate_date(raw)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl TryFrom<String> for DateValue {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate_date(&s)
    }
}

impl From<DateValue> for String {
    fn from(v: DateValue) -> String {
        v.to_string()
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
