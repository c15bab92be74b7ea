//! Stripe REST client for payment intents and webhook verification.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::server::{
    error::{payment::PaymentError, AppError},
    util::endpoint::endpoint,
};

type HmacSha256 = Hmac<Sha256>;

/// Maximum age of a webhook signature timestamp, in seconds.
pub const WEBHOOK_TOLERANCE_SECONDS: i64 = 300;

/// Event type that marks an order as paid.
pub const PAYMENT_SUCCEEDED_EVENT: &str = "payment_intent.succeeded";

/// Fields sent when creating a payment intent.
#[derive(Debug, Clone)]
pub struct PaymentIntentRequest {
    pub amount_cents: i64,
    pub currency: String,
    pub receipt_email: String,
    /// Encoded `id:qty` cart lines
    pub items: String,
    pub discount_code: Option<String>,
}

impl PaymentIntentRequest {
    fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("amount", self.amount_cents.to_string()),
            ("currency", self.currency.clone()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
            ("receipt_email", self.receipt_email.clone()),
            ("metadata[items]", self.items.clone()),
        ];
        if let Some(code) = &self.discount_code {
            form.push(("metadata[discount_code]", code.clone()));
        }
        form
    }
}

/// The parts of a created payment intent the storefront needs.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

/// A verified webhook event.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeEventData {
    pub object: serde_json::Value,
}

/// Payment intent object carried by `payment_intent.*` events.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentObject {
    pub id: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Clone)]
pub struct StripeClient {
    http_client: reqwest::Client,
    api_url: Arc<str>,
    secret_key: Arc<str>,
    webhook_secret: Option<Arc<str>>,
}

impl StripeClient {
    pub fn new(
        http_client: reqwest::Client,
        api_url: &str,
        secret_key: &str,
        webhook_secret: Option<&str>,
    ) -> Self {
        Self {
            http_client,
            api_url: Arc::from(api_url),
            secret_key: Arc::from(secret_key),
            webhook_secret: webhook_secret.map(Arc::from),
        }
    }

    /// Creates a payment intent for the given amount.
    ///
    /// # Returns
    /// - `Ok(CreatedPaymentIntent)` - Stripe accepted the intent
    /// - `Err(AppError::PaymentErr(Gateway))` - Stripe rejected the request
    /// - `Err(AppError::ReqwestErr)` - Stripe could not be reached
    pub async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<CreatedPaymentIntent, AppError> {
        let url = endpoint(&self.api_url, "v1/payment_intents")?;

        let response = self
            .http_client
            .post(url)
            .bearer_auth(&*self.secret_key)
            .form(&request.form())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| "no error message".to_string());

            return Err(PaymentError::Gateway {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        Ok(response.json::<CreatedPaymentIntent>().await?)
    }

    /// Verifies a webhook payload against its `Stripe-Signature` header and parses the event.
    ///
    /// The header carries `t=<unix seconds>` and one or more `v1=<hex hmac>` entries. The
    /// expected signature is HMAC-SHA256 of `"{t}.{payload}"` under the webhook secret.
    ///
    /// # Returns
    /// - `Ok(StripeEvent)` - Signature valid and within tolerance
    /// - `Err(PaymentError::WebhookNotConfigured)` - No webhook secret configured
    /// - `Err(PaymentError::InvalidSignature)` - Header missing, stale, or not matching
    pub fn verify_webhook(
        &self,
        payload: &[u8],
        signature_header: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<StripeEvent, PaymentError> {
        let secret = self
            .webhook_secret
            .as_deref()
            .ok_or(PaymentError::WebhookNotConfigured)?;
        let header = signature_header
            .ok_or_else(|| PaymentError::InvalidSignature("missing header".to_string()))?;

        verify_signature(secret, payload, header, now)?;

        serde_json::from_slice(payload)
            .map_err(|e| PaymentError::InvalidSignature(format!("undecodable event: {}", e)))
    }
}

fn verify_signature(
    secret: &str,
    payload: &[u8],
    header: &str,
    now: DateTime<Utc>,
) -> Result<(), PaymentError> {
    let mut timestamp: Option<i64> = None;
    let mut signatures: Vec<&str> = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse().ok(),
            Some(("v1", value)) => signatures.push(value),
            _ => {}
        }
    }

    let timestamp =
        timestamp.ok_or_else(|| PaymentError::InvalidSignature("missing timestamp".to_string()))?;
    if (now.timestamp() - timestamp).abs() > WEBHOOK_TOLERANCE_SECONDS {
        return Err(PaymentError::InvalidSignature(
            "timestamp outside tolerance".to_string(),
        ));
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| PaymentError::InvalidSignature(e.to_string()))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    let matched = signatures.iter().any(|candidate| {
        hex::decode(candidate)
            .map(|bytes| mac.clone().verify_slice(&bytes).is_ok())
            .unwrap_or(false)
    });

    if matched {
        Ok(())
    } else {
        Err(PaymentError::InvalidSignature(
            "no matching v1 signature".to_string(),
        ))
    }
}

/// Builds a `Stripe-Signature` header value for a payload.
///
/// Used by tests and local tooling that replay webhook events.
pub fn sign_webhook_payload(secret: &str, payload: &[u8], timestamp: i64) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    Some(format!(
        "t={},v1={}",
        timestamp,
        hex::encode(mac.finalize().into_bytes())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test";

    fn client(webhook_secret: Option<&str>) -> StripeClient {
        StripeClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            "sk_test",
            webhook_secret,
        )
    }

    fn event_payload() -> Vec<u8> {
        serde_json::to_vec(&serde_json::json!({
            "id": "evt_1",
            "type": "payment_intent.succeeded",
            "data": { "object": { "id": "pi_1", "metadata": { "items": "1:2" } } }
        }))
        .unwrap()
    }

    #[test]
    fn accepts_valid_signature() {
        let now = Utc::now();
        let payload = event_payload();
        let header = sign_webhook_payload(SECRET, &payload, now.timestamp()).unwrap();

        let event = client(Some(SECRET))
            .verify_webhook(&payload, Some(&header), now)
            .unwrap();

        assert_eq!(event.event_type, PAYMENT_SUCCEEDED_EVENT);
        let intent: PaymentIntentObject = serde_json::from_value(event.data.object).unwrap();
        assert_eq!(intent.metadata.get("items").map(String::as_str), Some("1:2"));
    }

    #[test]
    fn rejects_wrong_secret_and_tampered_body() {
        let now = Utc::now();
        let payload = event_payload();
        let header = sign_webhook_payload("whsec_other", &payload, now.timestamp()).unwrap();
        assert!(matches!(
            client(Some(SECRET)).verify_webhook(&payload, Some(&header), now),
            Err(PaymentError::InvalidSignature(_))
        ));

        let header = sign_webhook_payload(SECRET, &payload, now.timestamp()).unwrap();
        let mut tampered = payload.clone();
        tampered.push(b' ');
        assert!(matches!(
            client(Some(SECRET)).verify_webhook(&tampered, Some(&header), now),
            Err(PaymentError::InvalidSignature(_))
        ));
    }

    #[test]
    fn rejects_stale_timestamp() {
        let now = Utc::now();
        let payload = event_payload();
        let header = sign_webhook_payload(SECRET, &payload, now.timestamp() - 301).unwrap();

        assert!(matches!(
            client(Some(SECRET)).verify_webhook(&payload, Some(&header), now),
            Err(PaymentError::InvalidSignature(_))
        ));
    }

    #[test]
    fn requires_configured_secret_and_header() {
        let payload = event_payload();
        assert!(matches!(
            client(None).verify_webhook(&payload, Some("t=1,v1=00"), Utc::now()),
            Err(PaymentError::WebhookNotConfigured)
        ));
        assert!(matches!(
            client(Some(SECRET)).verify_webhook(&payload, None, Utc::now()),
            Err(PaymentError::InvalidSignature(_))
        ));
    }

    #[test]
    fn encodes_payment_intent_form() {
        let request = PaymentIntentRequest {
            amount_cents: 12_995,
            currency: "cad".to_string(),
            receipt_email: "a@b.co".to_string(),
            items: "1:2".to_string(),
            discount_code: Some("SAVE10".to_string()),
        };
        let form = request.form();

        assert!(form.contains(&("amount", "12995".to_string())));
        assert!(form.contains(&("automatic_payment_methods[enabled]", "true".to_string())));
        assert!(form.contains(&("metadata[discount_code]", "SAVE10".to_string())));
    }
}
