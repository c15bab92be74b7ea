//! Admin bearer token service.
//!
//! Issues and verifies HS256 JSON Web Tokens for the single admin principal. Tokens are
//! `header.claims.signature` with base64url (no padding) parts and an HMAC-SHA256 signature
//! keyed by `JWT_SECRET`. The admin password is compared through an HMAC of both values so
//! the comparison runs in constant time.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::Sha256;

use crate::server::error::auth::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Subject claim carried by every admin token.
pub const ADMIN_SUBJECT: &str = "admin";

/// Lifetime of an issued token.
pub const TOKEN_LIFETIME_HOURS: i64 = 8;

const ALGORITHM: &str = "HS256";

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// Claims stored in an admin token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl Claims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// A signed token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct AuthTokenService {
    secret: Arc<[u8]>,
    /// HMAC of the configured admin password under `secret`.
    password_mac: Arc<[u8]>,
}

impl AuthTokenService {
    /// Creates the service from the signing secret and the configured admin password.
    ///
    /// # Returns
    /// - `Ok(AuthTokenService)` - Ready to issue and verify tokens
    /// - `Err(AuthError::MalformedToken)` - The secret cannot key an HMAC
    pub fn new(secret: &str, admin_password: &str) -> Result<Self, AuthError> {
        let secret: Arc<[u8]> = Arc::from(secret.as_bytes());
        let password_mac = sign(&secret, admin_password.as_bytes())?;

        Ok(Self {
            secret,
            password_mac: Arc::from(password_mac),
        })
    }

    /// Checks the admin password and issues a token valid for eight hours.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Password matched
    /// - `Err(AuthError::InvalidCredentials)` - Password did not match
    pub fn login(&self, password: &str, now: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
        let mut mac = keyed(&self.secret)?;
        mac.update(password.as_bytes());
        mac.verify_slice(&self.password_mac)
            .map_err(|_| AuthError::InvalidCredentials)?;

        self.issue(now)
    }

    /// Signs a fresh admin token issued at `now`.
    pub fn issue(&self, now: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        };

        let header = encode_part(&Header {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
        })?;
        let payload = encode_part(&claims)?;
        let signing_input = format!("{}.{}", header, payload);
        let signature = URL_SAFE_NO_PAD.encode(sign(&self.secret, signing_input.as_bytes())?);

        Ok(IssuedToken {
            token: format!("{}.{}", signing_input, signature),
            expires_at: claims.expires_at(),
        })
    }

    /// Verifies a token's structure, signature, subject and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid at `now`
    /// - `Err(AuthError::MalformedToken)` - Not a decodable HS256 JWT for the admin subject
    /// - `Err(AuthError::InvalidSignature)` - Signature mismatch
    /// - `Err(AuthError::TokenExpired)` - `exp` is at or before `now`
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let mut parts = token.split('.');
        let (Some(header_part), Some(payload_part), Some(signature_part), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::MalformedToken(
                "expected three segments".to_string(),
            ));
        };

        let header: Header = decode_part(header_part)?;
        if header.alg != ALGORITHM {
            return Err(AuthError::MalformedToken(format!(
                "unsupported algorithm {}",
                header.alg
            )));
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_part)
            .map_err(|e| AuthError::MalformedToken(e.to_string()))?;
        let mut mac = keyed(&self.secret)?;
        mac.update(header_part.as_bytes());
        mac.update(b".");
        mac.update(payload_part.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidSignature)?;

        let claims: Claims = decode_part(payload_part)?;
        if claims.sub != ADMIN_SUBJECT {
            return Err(AuthError::MalformedToken(format!(
                "unexpected subject {}",
                claims.sub
            )));
        }
        if claims.exp <= now.timestamp() {
            return Err(AuthError::TokenExpired(claims.exp));
        }

        Ok(claims)
    }
}

fn keyed(secret: &[u8]) -> Result<HmacSha256, AuthError> {
    HmacSha256::new_from_slice(secret)
        .map_err(|e| AuthError::MalformedToken(format!("signing key rejected: {}", e)))
}

fn sign(secret: &[u8], input: &[u8]) -> Result<Vec<u8>, AuthError> {
    let mut mac = keyed(secret)?;
    mac.update(input);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn encode_part<T: Serialize>(value: &T) -> Result<String, AuthError> {
    let json = serde_json::to_vec(value).map_err(|e| AuthError::MalformedToken(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_part<T: DeserializeOwned>(part: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(part)
        .map_err(|e| AuthError::MalformedToken(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| AuthError::MalformedToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthTokenService {
        AuthTokenService::new("test-secret", "hunter2").unwrap()
    }

    #[test]
    fn login_with_correct_password_issues_verifiable_token() {
        let service = service();
        let now = Utc::now();

        let issued = service.login("hunter2", now).unwrap();
        let claims = service.verify(&issued.token, now).unwrap();

        assert_eq!(claims.sub, ADMIN_SUBJECT);
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_HOURS * 3600);
        assert_eq!(issued.expires_at.timestamp(), claims.exp);
    }

    #[test]
    fn login_with_wrong_password_fails() {
        assert!(matches!(
            service().login("hunter3", Utc::now()),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let service = service();
        let issued_at = Utc::now() - Duration::hours(9);
        let issued = service.issue(issued_at).unwrap();

        assert!(matches!(
            service.verify(&issued.token, Utc::now()),
            Err(AuthError::TokenExpired(_))
        ));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let other = AuthTokenService::new("other-secret", "hunter2").unwrap();
        let issued = other.issue(Utc::now()).unwrap();

        assert!(matches!(
            service().verify(&issued.token, Utc::now()),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn rejects_tampered_claims() {
        let service = service();
        let now = Utc::now();
        let issued = service.issue(now).unwrap();

        let forged_claims = encode_part(&Claims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: now.timestamp() + 1_000_000,
        })
        .unwrap();
        let mut parts: Vec<&str> = issued.token.split('.').collect();
        parts[1] = &forged_claims;
        let forged = parts.join(".");

        assert!(matches!(
            service.verify(&forged, now),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn rejects_malformed_tokens() {
        let service = service();
        for token in ["", "abc", "a.b", "a.b.c.d", "!!.??.##"] {
            assert!(matches!(
                service.verify(token, Utc::now()),
                Err(AuthError::MalformedToken(_))
            ));
        }
    }
}
