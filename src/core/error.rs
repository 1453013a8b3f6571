use std::fmt;

/// Kind of identifier checked by the validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Company registry number (14 digits).
    Cnpj,
    /// Individual taxpayer number (11 digits).
    Cpf,
    /// Postal code (8 digits).
    Cep,
    /// IBGE municipal code.
    MunicipalCode,
    /// Calendar date in `DD/MM/YYYY`.
    Date,
}

impl IdentifierKind {
    /// Short uppercase label used in messages (e.g. "CNPJ").
    pub fn label(self) -> &'static str {
        match self {
            Self::Cnpj => "CNPJ",
            Self::Cpf => "CPF",
            Self::Cep => "CEP",
            Self::MunicipalCode => "municipal code",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when an identifier fails format or checksum validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierError {
    /// What was being validated.
    pub kind: IdentifierKind,
    /// The raw input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl IdentifierError {
    pub(crate) fn new(kind: IdentifierKind, value: &str, reason: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} '{}': {}", self.kind, self.value, self.reason)
    }
}

impl std::error::Error for IdentifierError {}
