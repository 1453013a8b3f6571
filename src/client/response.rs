//! Response decoding and outcome classification.
//!
//! Decoding and classification are separate steps: a body that does not
//! parse under the configured format is [`HubError::MalformedPayload`]; a
//! body that parses but carries `return = NOK` is
//! [`HubError::ServiceReportedFailure`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::config::ResponseFormat;
use super::error::{HubError, UNKNOWN_SERVICE_ERROR};
use super::xml::{XmlElement, parse_document};

/// Status marker the service uses for success.
pub const RETURN_OK: &str = "OK";
/// Status marker the service uses for failure.
pub const RETURN_NOK: &str = "NOK";

/// A successfully decoded response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Map<String, Value>),
    Xml(XmlElement),
}

/// The service's common envelope fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// `status` field; `None` when absent or not a boolean.
    pub status: Option<bool>,
    /// `return` marker (`OK` / `NOK`).
    pub return_code: Option<String>,
    pub message: Option<String>,
}

impl ResponseEnvelope {
    pub fn is_failure(&self) -> bool {
        self.return_code.as_deref() == Some(RETURN_NOK)
    }

    /// Whether the envelope obeys the service contract: any marker other
    /// than `OK` comes with `status = false` and a message.
    pub fn is_consistent(&self) -> bool {
        match self.return_code.as_deref() {
            None | Some(RETURN_OK) => true,
            Some(_) => self.status != Some(true) && self.message.is_some(),
        }
    }
}

fn json_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl Payload {
    pub fn format(&self) -> ResponseFormat {
        match self {
            Self::Json(_) => ResponseFormat::Json,
            Self::Xml(_) => ResponseFormat::Xml,
        }
    }

    pub fn envelope(&self) -> ResponseEnvelope {
        match self {
            Self::Json(map) => ResponseEnvelope {
                status: map.get("status").and_then(Value::as_bool),
                return_code: map.get("return").and_then(json_text),
                message: map.get("message").and_then(json_text),
            },
            Self::Xml(root) => ResponseEnvelope {
                status: root.child_text("status").and_then(|s| match s {
                    "true" | "1" => Some(true),
                    "false" | "0" => Some(false),
                    _ => None,
                }),
                return_code: root.child_text("return").map(str::to_string),
                message: root.child_text("message").map(str::to_string),
            },
        }
    }

    /// The `result` object of a JSON response.
    pub fn result_json(&self) -> Option<&Value> {
        match self {
            Self::Json(map) => map.get("result"),
            Self::Xml(_) => None,
        }
    }

    /// The `result` element of an XML response.
    pub fn result_xml(&self) -> Option<&XmlElement> {
        match self {
            Self::Json(_) => None,
            Self::Xml(root) => root.child("result"),
        }
    }

    /// Deserialize the JSON `result` into a caller type.
    pub fn result_as<T: DeserializeOwned>(&self) -> Result<T, HubError> {
        let result = self.result_json().ok_or_else(|| HubError::MalformedPayload {
            format: self.format(),
            detail: "no JSON result object".into(),
        })?;
        T::deserialize(result).map_err(|e| HubError::MalformedPayload {
            format: ResponseFormat::Json,
            detail: e.to_string(),
        })
    }
}

fn decode_json(body: &str) -> Result<Payload, HubError> {
    let malformed = |detail: String| HubError::MalformedPayload {
        format: ResponseFormat::Json,
        detail,
    };
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(Payload::Json(map)),
        Ok(other) => Err(malformed(format!("expected an object, got: {other}"))),
        Err(e) => Err(malformed(e.to_string())),
    }
}

fn decode_xml(body: &str) -> Result<Payload, HubError> {
    parse_document(body)
        .map(Payload::Xml)
        .map_err(|detail| HubError::MalformedPayload {
            format: ResponseFormat::Xml,
            detail,
        })
}

/// Decode `body` under `format` and classify the outcome.
pub fn decode(format: ResponseFormat, body: &str) -> Result<Payload, HubError> {
    let payload = match format {
        ResponseFormat::Json => decode_json(body)?,
        ResponseFormat::Xml => decode_xml(body)?,
    };

    let envelope = payload.envelope();
    if envelope.is_failure() {
        let message = envelope
            .message
            .unwrap_or_else(|| UNKNOWN_SERVICE_ERROR.to_string());
        tracing::warn!(%format, %message, "service reported failure");
        return Err(HubError::ServiceReportedFailure(message));
    }
    if !envelope.is_consistent() {
        tracing::warn!(
            %format,
            return_code = ?envelope.return_code,
            status = ?envelope.status,
            "unexpected response envelope"
        );
    }

    tracing::debug!(%format, "response decoded");
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn json_nok_is_service_failure() {
        let err = decode(ResponseFormat::Json, r#"{"return":"NOK","message":"x"}"#).unwrap_err();
        assert!(matches!(err, HubError::ServiceReportedFailure(ref m) if m == "x"));
    }

    #[test]
    fn json_nok_without_message_uses_default() {
        let err = decode(ResponseFormat::Json, r#"{"status":false,"return":"NOK"}"#).unwrap_err();
        assert!(matches!(err, HubError::ServiceReportedFailure(ref m) if m == UNKNOWN_SERVICE_ERROR));
    }

    #[test]
    fn json_ok_returns_result() {
        let payload = decode(
            ResponseFormat::Json,
            r#"{"status":true,"return":"OK","result":{"cep":"01001000","uf":"SP"}}"#,
        )
        .unwrap();
        let result = payload.result_json().unwrap();
        assert_eq!(result["uf"], "SP");
        assert_eq!(payload.envelope().status, Some(true));
    }

    #[test]
    fn json_without_return_is_success() {
        let payload = decode(ResponseFormat::Json, r#"{"saldo":"10"}"#).unwrap();
        assert!(payload.result_json().is_none());
    }

    #[test]
    fn json_array_is_malformed() {
        let err = decode(ResponseFormat::Json, "[1,2]").unwrap_err();
        assert!(matches!(err, HubError::MalformedPayload { format: ResponseFormat::Json, .. }));
    }

    #[test]
    fn json_garbage_is_malformed() {
        let err = decode(ResponseFormat::Json, "<html>502</html>").unwrap_err();
        assert!(matches!(err, HubError::MalformedPayload { .. }));
    }

    #[test]
    fn xml_nok_is_service_failure() {
        let err = decode(
            ResponseFormat::Xml,
            "<root><status>false</status><return>NOK</return><message>Token inválido</message></root>",
        )
        .unwrap_err();
        assert!(matches!(err, HubError::ServiceReportedFailure(ref m) if m == "Token inválido"));
    }

    #[test]
    fn xml_nok_without_message_uses_default() {
        let err = decode(ResponseFormat::Xml, "<root><return>NOK</return></root>").unwrap_err();
        assert_eq!(err.to_string(), "service error: unknown service error");
    }

    #[test]
    fn xml_marker_must_match_exactly() {
        let payload = decode(ResponseFormat::Xml, "<root><return> NOK </return></root>").unwrap();
        assert_eq!(payload.envelope().return_code.as_deref(), Some(" NOK "));
    }

    #[test]
    fn xml_ok_returns_document() {
        let payload = decode(
            ResponseFormat::Xml,
            "<root><status>true</status><return>OK</return><result><uf>SP</uf></result></root>",
        )
        .unwrap();
        assert_eq!(payload.result_xml().and_then(|r| r.child_text("uf")), Some("SP"));
        assert_eq!(payload.envelope().status, Some(true));
    }

    #[test]
    fn xml_garbage_is_malformed() {
        let err = decode(ResponseFormat::Xml, "{\"return\":\"OK\"}").unwrap_err();
        assert!(matches!(err, HubError::MalformedPayload { format: ResponseFormat::Xml, .. }));
    }

    #[test]
    fn envelope_consistency() {
        let ok = ResponseEnvelope {
            status: Some(true),
            return_code: Some("OK".into()),
            message: None,
        };
        assert!(ok.is_consistent());
        let odd = ResponseEnvelope {
            status: Some(true),
            return_code: Some("WAIT".into()),
            message: None,
        };
        assert!(!odd.is_consistent());
    }

    #[derive(Debug, Deserialize)]
    struct Endereco {
        logradouro: String,
        uf: String,
    }

    #[test]
    fn result_as_typed() {
        let payload = decode(
            ResponseFormat::Json,
            r#"{"return":"OK","result":{"logradouro":"Praça da Sé","uf":"SP"}}"#,
        )
        .unwrap();
        let e: Endereco = payload.result_as().unwrap();
        assert_eq!(e.logradouro, "Praça da Sé");
        assert_eq!(e.uf, "SP");
    }

    #[test]
    fn result_as_missing_result() {
        let payload = decode(ResponseFormat::Json, r#"{"return":"OK"}"#).unwrap();
        assert!(payload.result_as::<Endereco>().is_err());
    }
}
