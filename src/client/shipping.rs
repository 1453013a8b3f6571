//! Correios shipping quote parameters.

use rust_decimal::Decimal;

use super::error::HubError;
use super::query::Query;

/// Parameters the service requires for every quote, in check order.
pub const REQUIRED_SHIPPING_PARAMS: [&str; 8] = [
    "servico",
    "cepOrigem",
    "cepDestino",
    "altura",
    "largura",
    "peso",
    "comprimento",
    "formato",
];

/// Correios package format code (`formato`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    /// Box or package (1).
    BoxOrPackage,
    /// Roll or prism (2).
    RollOrPrism,
    /// Envelope (3).
    Envelope,
}

impl PackageFormat {
    pub fn code(self) -> &'static str {
        match self {
            Self::BoxOrPackage => "1",
            Self::RollOrPrism => "2",
            Self::Envelope => "3",
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "S" } else { "N" }
}

fn decimal(d: Decimal) -> String {
    d.normalize().to_string()
}

/// Shipping quote request, kept in the order parameters were set.
///
/// Typed setters cover the documented parameters; [`param`](Self::param)
/// passes anything else through untouched. Setting a key twice replaces
/// the earlier value in place.
///
/// ```
/// use hubdev::client::{PackageFormat, ShippingQuote};
/// use rust_decimal::Decimal;
///
/// let quote = ShippingQuote::new()
///     .service("40010")
///     .origin_cep("01001000")
///     .destination_cep("20040000")
///     .height(Decimal::new(2, 0))
///     .width(Decimal::new(11, 0))
///     .weight(Decimal::new(5, 1))
///     .length(Decimal::new(16, 0))
///     .package_format(PackageFormat::BoxOrPackage);
/// assert!(quote.missing_parameter().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingQuote {
    params: Vec<(String, String)>,
}

impl ShippingQuote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary parameter.
    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
        self
    }

    /// Correios service code (`servico`), e.g. `40010` for SEDEX.
    pub fn service(self, code: &str) -> Self {
        self.param("servico", code)
    }

    pub fn origin_cep(self, cep: &str) -> Self {
        self.param("cepOrigem", cep)
    }

    pub fn destination_cep(self, cep: &str) -> Self {
        self.param("cepDestino", cep)
    }

    /// Height in centimetres.
    pub fn height(self, cm: Decimal) -> Self {
        self.param("altura", decimal(cm))
    }

    /// Width in centimetres.
    pub fn width(self, cm: Decimal) -> Self {
        self.param("largura", decimal(cm))
    }

    /// Weight in kilograms.
    pub fn weight(self, kg: Decimal) -> Self {
        self.param("peso", decimal(kg))
    }

    /// Length in centimetres.
    pub fn length(self, cm: Decimal) -> Self {
        self.param("comprimento", decimal(cm))
    }

    pub fn package_format(self, format: PackageFormat) -> Self {
        self.param("formato", format.code())
    }

    /// Delivery receipt (`avisoRecebimento`).
    pub fn receipt_notice(self, on: bool) -> Self {
        self.param("avisoRecebimento", yes_no(on))
    }

    /// Hand delivery to the addressee only (`maoPropria`).
    pub fn own_hands(self, on: bool) -> Self {
        self.param("maoPropria", yes_no(on))
    }

    pub fn declared_value(self, value: Decimal) -> Self {
        self.param("valorDeclarado", decimal(value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First required parameter that has not been set.
    pub fn missing_parameter(&self) -> Option<&'static str> {
        REQUIRED_SHIPPING_PARAMS
            .iter()
            .copied()
            .find(|name| self.get(name).is_none())
    }

    /// Caller parameters followed by `retorno` and `token`.
    pub(crate) fn to_query(&self, format: &str, token: &str) -> Result<Query, HubError> {
        if let Some(name) = self.missing_parameter() {
            return Err(HubError::MissingParameter(name.to_string()));
        }
        let query = self
            .params
            .iter()
            .filter(|(k, _)| k != "retorno" && k != "token")
            .fold(Query::new(), |q, (k, v)| q.pair(k, v));
        Ok(query.pair("retorno", format).pair("token", token))
    }
}
