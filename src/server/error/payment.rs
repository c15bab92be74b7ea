use thiserror::Error;

/// Failures talking to the payment processor or verifying its callbacks.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Payment processor rejected the request.
    ///
    /// Results in 500 Internal Server Error; the processor's message is logged only.
    #[error("Payment gateway returned {status}: {message}")]
    Gateway {
        /// HTTP status returned by the gateway
        status: u16,
        /// Error message from the gateway body
        message: String,
    },

    /// Webhook payload signature header was missing, malformed, stale, or did not match.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid webhook signature: {0}")]
    InvalidSignature(String),

    /// Webhook secret is not configured so webhooks cannot be verified.
    #[error("Webhook secret is not configured")]
    WebhookNotConfigured,
}
