//! Reading UPI payment URIs back into their fields

use crate::config::UpiConfig;
use crate::core::error::DecodeError;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Decoded `upi://pay?...` payload
///
/// Only `pa` is mandatory; parameters this crate does not emit (`mc`, `tr`,
/// ...) are kept in `extra` in the order they appeared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiPayload {
    pub payee_address: String,
    pub payee_name: Option<String>,
    pub amount: Option<String>,
    pub note: Option<String>,
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl UpiPayload {
    /// Parse a payload produced for `config.scheme`
    ///
    /// When a parameter repeats, the first occurrence wins.
    pub fn parse(uri: &str, config: &UpiConfig) -> Result<Self, DecodeError> {
        let query = uri
            .strip_prefix(config.scheme.as_str())
            .and_then(|rest| rest.strip_prefix('?'))
            .ok_or_else(|| DecodeError::UnsupportedScheme {
                expected: config.scheme.clone(),
            })?;

        let mut payee_address = None;
        let mut payee_name = None;
        let mut amount = None;
        let mut note = None;
        let mut currency = None;
        let mut extra = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "pa" => &mut payee_address,
                "pn" => &mut payee_name,
                "am" => &mut amount,
                "tn" => &mut note,
                "cu" => &mut currency,
                _ => {
                    extra.push((key.to_string(), value.into_owned()));
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        if let Some(text) = &amount {
            if !text.parse::<f64>().is_ok_and(f64::is_finite) {
                return Err(DecodeError::InvalidAmount(text.clone()));
            }
        }

        Ok(Self {
            payee_address: payee_address.ok_or(DecodeError::MissingParameter("pa"))?,
            payee_name,
            amount,
            note,
            currency,
            extra,
        })
    }

    /// Fixed amount as a number, `None` when the payer chooses
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.as_deref().and_then(|text| text.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoder::encode;

    #[test]
    fn test_parse_encoded_payload() {
        let config = UpiConfig::default();
        let uri = encode(&config, "acme@upi", "Acme Traders", Some(250.0), "").unwrap();
        let payload = UpiPayload::parse(&uri, &config).unwrap();

        assert_eq!(payload.payee_address, "acme@upi");
        assert_eq!(payload.payee_name.as_deref(), Some("Acme Traders"));
        assert_eq!(payload.amount.as_deref(), Some("250.00"));
        assert_eq!(payload.amount_value(), Some(250.0));
        assert_eq!(payload.note.as_deref(), Some("Payment for Acme Traders"));
        assert_eq!(payload.currency.as_deref(), Some("INR"));
        assert!(payload.extra.is_empty());
    }

    #[test]
    fn test_parse_keeps_unknown_parameters() {
        let config = UpiConfig::default();
        let payload =
            UpiPayload::parse("upi://pay?pa=shop@bank&mc=5411&tr=T123", &config).unwrap();

        assert_eq!(payload.payee_address, "shop@bank");
        assert_eq!(payload.amount_value(), None);
        assert_eq!(
            payload.extra,
            vec![
                ("mc".to_string(), "5411".to_string()),
                ("tr".to_string(), "T123".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_first_occurrence_wins() {
        let config = UpiConfig::default();
        let payload = UpiPayload::parse("upi://pay?pa=a@b&pa=c@d", &config).unwrap();
        assert_eq!(payload.payee_address, "a@b");
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        let config = UpiConfig::default();
        let err = UpiPayload::parse("https://pay?pa=a@b", &config).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_parse_requires_payee_address() {
        let config = UpiConfig::default();
        let err = UpiPayload::parse("upi://pay?cu=INR&pn=Acme", &config).unwrap_err();
        assert_eq!(err, DecodeError::MissingParameter("pa"));
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        let config = UpiConfig::default();
        let err = UpiPayload::parse("upi://pay?pa=a@b&am=ten", &config).unwrap_err();
        assert_eq!(err, DecodeError::InvalidAmount("ten".to_string()));
    }
}
