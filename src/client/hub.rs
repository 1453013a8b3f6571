use super::config::HubConfig;
use super::error::HubError;
use super::operation::{self, Operation, StateRegistrationMode};
use super::response::{Payload, decode};
use super::shipping::ShippingQuote;
use super::transport::Transport;

/// Synchronous client for the Hub do Desenvolvedor API.
///
/// Holds an immutable [`HubConfig`] and a [`Transport`]. Each method
/// validates its input, issues at most one GET and classifies the answer.
/// Invalid input fails before the transport is touched.
#[derive(Debug, Clone)]
pub struct HubClient<T> {
    config: HubConfig,
    transport: T,
}

impl<T: Transport> HubClient<T> {
    pub fn with_transport(config: HubConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a prepared operation.
    pub fn execute(&self, operation: &Operation) -> Result<Payload, HubError> {
        let endpoint = operation.endpoint(&self.config)?;
        let url = endpoint.url(&self.config.root());
        tracing::debug!(endpoint = %endpoint.redacted(), "sending request");

        let body = self
            .transport
            .get(&url, self.config.timeout_duration())
            .map_err(|e| {
                tracing::debug!(path = operation.path(), error = %e, "transport failed");
                HubError::from(e)
            })?;

        decode(self.config.format, &body)
    }

    // --- CNPJ ---

    /// Company registry data.
    pub fn company(&self, cnpj: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::CompanyLookup(operation::cnpj(cnpj)?))
    }

    /// Company registry data, bypassing the service cache.
    pub fn company_bypass_cache(&self, cnpj: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::CompanyLookupBypassCache(operation::cnpj(cnpj)?))
    }

    /// Timestamp of the last registry update for the company.
    pub fn company_last_update(&self, cnpj: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::CompanyLastUpdate(operation::cnpj(cnpj)?))
    }

    /// State registrations (Inscrições Estaduais) of the company.
    pub fn company_state_registrations(
        &self,
        cnpj: &str,
        mode: StateRegistrationMode,
    ) -> Result<Payload, HubError> {
        self.execute(&Operation::CompanyStateRegistrations(
            operation::cnpj(cnpj)?,
            mode,
        ))
    }

    // --- Simples Nacional ---

    pub fn simples(&self, cnpj: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::SimplifiedTaxLookup(operation::cnpj(cnpj)?))
    }

    pub fn simples_bypass_cache(&self, cnpj: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::SimplifiedTaxLookupBypassCache(operation::cnpj(
            cnpj,
        )?))
    }

    pub fn simples_last_update(&self, cnpj: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::SimplifiedTaxLastUpdate(operation::cnpj(cnpj)?))
    }

    // --- CEP ---

    pub fn postal_code(&self, cep: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::PostalCodeLookup(operation::cep(cep)?))
    }

    /// Alias of [`HubClient::postal_code`] kept for the service's `CEP3`
    /// product name; it hits the same `cep` endpoint.
    pub fn postal_code_v3(&self, cep: &str) -> Result<Payload, HubError> {
        self.postal_code(cep)
    }

    // --- CPF ---

    /// Individual registry data. `birth_date` is `DD/MM/YYYY`.
    pub fn person(&self, cpf: &str, birth_date: &str) -> Result<Payload, HubError> {
        let cpf = operation::cpf(cpf)?;
        let date = operation::birth_date(birth_date)?;
        self.execute(&Operation::PersonLookup(cpf, date))
    }

    pub fn person_bypass_cache(&self, cpf: &str, birth_date: &str) -> Result<Payload, HubError> {
        let cpf = operation::cpf(cpf)?;
        let date = operation::birth_date(birth_date)?;
        self.execute(&Operation::PersonLookupBypassCache(cpf, date))
    }

    pub fn person_last_update(&self, cpf: &str, birth_date: &str) -> Result<Payload, HubError> {
        let cpf = operation::cpf(cpf)?;
        let date = operation::birth_date(birth_date)?;
        self.execute(&Operation::PersonLastUpdate(cpf, date))
    }

    /// Name and birth date only; no birth date needed on input.
    pub fn person_name_and_birth_date(&self, cpf: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::PersonNameAndBirthDate(operation::cpf(cpf)?))
    }

    pub fn person_name_and_birth_date_bypass_cache(&self, cpf: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::PersonNameAndBirthDateBypassCache(
            operation::cpf(cpf)?,
        ))
    }

    pub fn person_name_and_birth_date_last_update(&self, cpf: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::PersonNameAndBirthDateLastUpdate(
            operation::cpf(cpf)?,
        ))
    }

    // --- Others ---

    /// Correios shipping cost and delivery time.
    pub fn shipping_quote(&self, quote: &ShippingQuote) -> Result<Payload, HubError> {
        self.execute(&Operation::ShippingQuote(quote.clone()))
    }

    /// IBGE municipality data.
    pub fn municipality(&self, code: &str) -> Result<Payload, HubError> {
        self.execute(&Operation::MunicipalityLookup(operation::municipal_code(
            code,
        )?))
    }

    /// Remaining query credits on the account.
    pub fn balance(&self) -> Result<Payload, HubError> {
        self.execute(&Operation::BalanceLookup)
    }
}

#[cfg(feature = "http")]
impl HubClient<crate::http::ReqwestTransport> {
    /// Client over a blocking `reqwest` transport.
    pub fn new(config: HubConfig) -> Result<Self, HubError> {
        let transport = crate::http::ReqwestTransport::new()?;
        Ok(Self::with_transport(config, transport))
    }

    /// Client configured from `HUBDODESENVOLVEDOR_*` environment variables.
    pub fn from_env() -> Result<Self, HubError> {
        Self::new(HubConfig::from_env()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::TransportError;
    use std::cell::RefCell;
    use std::time::Duration;

    struct Canned {
        body: Result<String, TransportError>,
        urls: RefCell<Vec<String>>,
    }

    impl Transport for Canned {
        fn get(&self, url: &str, _timeout: Duration) -> Result<String, TransportError> {
            self.urls.borrow_mut().push(url.to_string());
            self.body.clone()
        }
    }

    fn client(body: Result<&str, TransportError>) -> HubClient<Canned> {
        HubClient::with_transport(
            HubConfig::new("T").with_base_url("http://stub/v2"),
            Canned {
                body: body.map(str::to_string),
                urls: RefCell::new(Vec::new()),
            },
        )
    }

    #[test]
    fn builds_full_url() {
        let c = client(Ok(r#"{"return":"OK"}"#));
        c.postal_code("01001-000").unwrap();
        assert_eq!(
            c.transport().urls.borrow().as_slice(),
            ["http://stub/v2/cep/?json&cep=01001000&token=T"]
        );
    }

    #[test]
    fn postal_code_v3_uses_cep_endpoint() {
        let c = client(Ok(r#"{"return":"OK"}"#));
        c.postal_code_v3("01001-000").unwrap();
        assert_eq!(
            c.transport().urls.borrow().as_slice(),
            ["http://stub/v2/cep/?json&cep=01001000&token=T"]
        );
    }

    #[test]
    fn invalid_date_never_sends() {
        let c = client(Ok(r#"{"return":"OK"}"#));
        let err = c.person("12345678909", "31/02/1990").unwrap_err();
        assert_eq!(err.to_string(), "invalid birth date");
        assert!(c.transport().urls.borrow().is_empty());
    }

    #[test]
    fn transport_error_body_surfaces() {
        let c = client(Err(TransportError::with_body("HTTP 401", "Unauthorized token")));
        let err = c.balance().unwrap_err();
        assert!(matches!(err, HubError::TransportFailure(ref m) if m == "Unauthorized token"));
    }
}
