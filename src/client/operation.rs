//! Operations and their endpoint mapping.

use super::config::HubConfig;
use super::error::HubError;
use super::query::{Endpoint, Query};
use super::shipping::ShippingQuote;
use crate::core::{
    Cep, Cnpj, Cpf, DateValue, MunicipalCode, validate_cep, validate_cnpj, validate_cpf,
    validate_date, validate_municipal_code,
};

pub const MSG_INVALID_CNPJ: &str = "invalid CNPJ";
pub const MSG_INVALID_CPF: &str = "invalid CPF";
pub const MSG_INVALID_CEP: &str = "invalid CEP";
pub const MSG_INVALID_BIRTH_DATE: &str = "invalid birth date";
pub const MSG_INVALID_MUNICIPAL_CODE: &str = "invalid municipal code";

/// Source for the state-registration (Inscrições Estaduais) lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateRegistrationMode {
    /// Query the state registries live (`ie=1`).
    RealTime,
    /// Use the service's cached data (`ie=3`).
    #[default]
    Cached,
}

impl StateRegistrationMode {
    pub fn code(self) -> &'static str {
        match self {
            Self::RealTime => "1",
            Self::Cached => "3",
        }
    }
}

/// One call against the service, with validated parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Operation {
    CompanyLookup(Cnpj),
    CompanyLookupBypassCache(Cnpj),
    CompanyLastUpdate(Cnpj),
    CompanyStateRegistrations(Cnpj, StateRegistrationMode),
    SimplifiedTaxLookup(Cnpj),
    SimplifiedTaxLookupBypassCache(Cnpj),
    SimplifiedTaxLastUpdate(Cnpj),
    PostalCodeLookup(Cep),
    PersonLookup(Cpf, DateValue),
    PersonLookupBypassCache(Cpf, DateValue),
    PersonLastUpdate(Cpf, DateValue),
    PersonNameAndBirthDate(Cpf),
    PersonNameAndBirthDateBypassCache(Cpf),
    PersonNameAndBirthDateLastUpdate(Cpf),
    ShippingQuote(ShippingQuote),
    MunicipalityLookup(MunicipalCode),
    BalanceLookup,
}

pub(crate) fn cnpj(raw: &str) -> Result<Cnpj, HubError> {
    validate_cnpj(raw).map_err(|e| HubError::invalid(MSG_INVALID_CNPJ, e))
}

pub(crate) fn cpf(raw: &str) -> Result<Cpf, HubError> {
    validate_cpf(raw).map_err(|e| HubError::invalid(MSG_INVALID_CPF, e))
}

pub(crate) fn cep(raw: &str) -> Result<Cep, HubError> {
    validate_cep(raw).map_err(|e| HubError::invalid(MSG_INVALID_CEP, e))
}

pub(crate) fn birth_date(raw: &str) -> Result<DateValue, HubError> {
    validate_date(raw).map_err(|e| HubError::invalid(MSG_INVALID_BIRTH_DATE, e))
}

pub(crate) fn municipal_code(raw: &str) -> Result<MunicipalCode, HubError> {
    validate_municipal_code(raw).map_err(|e| HubError::invalid(MSG_INVALID_MUNICIPAL_CODE, e))
}

impl Operation {
    /// Path segment under the API root.
    pub fn path(&self) -> &'static str {
        match self {
            Self::CompanyLookup(_)
            | Self::CompanyLookupBypassCache(_)
            | Self::CompanyLastUpdate(_)
            | Self::CompanyStateRegistrations(..) => "cnpj",
            Self::SimplifiedTaxLookup(_)
            | Self::SimplifiedTaxLookupBypassCache(_)
            | Self::SimplifiedTaxLastUpdate(_) => "simples",
            Self::PostalCodeLookup(_) => "cep",
            Self::PersonLookup(..)
            | Self::PersonLookupBypassCache(..)
            | Self::PersonLastUpdate(..)
            | Self::PersonNameAndBirthDate(_)
            | Self::PersonNameAndBirthDateBypassCache(_)
            | Self::PersonNameAndBirthDateLastUpdate(_) => "cpf",
            Self::ShippingQuote(_) => "correios",
            Self::MunicipalityLookup(_) => "ibge",
            Self::BalanceLookup => "saldo",
        }
    }

    /// Build the endpoint for this operation under `config`.
    ///
    /// Only [`Operation::ShippingQuote`] can fail here, when a required
    /// parameter is missing.
    pub fn endpoint(&self, config: &HubConfig) -> Result<Endpoint, HubError> {
        let fmt = config.format.as_str();
        let token = config.token.as_str();
        let base = || Query::new().flag(fmt);

        let query = match self {
            Self::CompanyLookup(c) | Self::SimplifiedTaxLookup(c) => {
                base().pair("cnpj", c.as_str()).pair("token", token)
            }
            Self::CompanyLookupBypassCache(c) | Self::SimplifiedTaxLookupBypassCache(c) => base()
                .pair("cnpj", c.as_str())
                .pair("token", token)
                .flag("ignore_db"),
            Self::CompanyLastUpdate(c) | Self::SimplifiedTaxLastUpdate(c) => base()
                .pair("cnpj", c.as_str())
                .pair("token", token)
                .pair("last_update", "2"),
            Self::CompanyStateRegistrations(c, mode) => base()
                .pair("cnpj", c.as_str())
                .pair("token", token)
                .pair("ie", mode.code()),
            Self::PostalCodeLookup(c) => base().pair("cep", c.as_str()).pair("token", token),
            Self::PersonLookup(c, d) => person(base(), c, d).pair("token", token),
            Self::PersonLookupBypassCache(c, d) => person(base(), c, d)
                .pair("token", token)
                .flag("ignore_db"),
            Self::PersonLastUpdate(c, d) => person(base(), c, d)
                .pair("token", token)
                .pair("last_update", "2"),
            Self::PersonNameAndBirthDate(c) => base()
                .pair("cpf", c.as_str())
                .pair("onlyBirthDate", "")
                .pair("token", token),
            Self::PersonNameAndBirthDateBypassCache(c) => base()
                .pair("cpf", c.as_str())
                .pair("onlyBirthDate", "")
                .pair("token", token)
                .flag("ignore_db"),
            Self::PersonNameAndBirthDateLastUpdate(c) => base()
                .pair("cpf", c.as_str())
                .pair("token", token)
                .pair("last_update", "2")
                .flag("onlyBirthDate"),
            Self::ShippingQuote(q) => q.to_query(fmt, token)?,
            Self::MunicipalityLookup(code) => base()
                .pair("cod_cidade", code.as_str())
                .pair("token", token),
            Self::BalanceLookup => base().flag("info").pair("token", token),
        };

        Ok(Endpoint::new(self.path(), query))
    }
}

fn person(q: Query, cpf: &Cpf, date: &DateValue) -> Query {
    q.pair("cpf", cpf.as_str()).pair("data", &date.to_string())
}
