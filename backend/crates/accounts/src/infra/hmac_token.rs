//! HMAC Form Token Authority
//!
//! Stateless token authority backed by a 32-byte HMAC secret.
//!
//! Token layout: `"{expires_ms}.{base64url(hmac(secret, scope|expires_ms))}"`.
//! Scoping the MAC input by the form action makes a login token useless
//! on the registration form and vice versa. Verification recomputes the
//! MAC and compares in constant time before checking the window.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use platform::crypto::{constant_time_eq, from_base64url, hmac_sha256, to_base64url};

use crate::domain::action::FormAction;
use crate::domain::token::TokenAuthority;

/// HMAC-signed, action-scoped form tokens
#[derive(Clone)]
pub struct HmacTokenAuthority {
    secret: [u8; 32],
    ttl: Duration,
}

impl HmacTokenAuthority {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    fn mint_at(&self, action: FormAction, expires_at_ms: i64) -> String {
        let sig = hmac_sha256(&self.secret, Self::payload(action, expires_at_ms).as_bytes());
        format!("{}.{}", expires_at_ms, to_base64url(&sig))
    }

    fn payload(action: FormAction, expires_at_ms: i64) -> String {
        format!("{}|{}", action.scope(), expires_at_ms)
    }

    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

impl TokenAuthority for HmacTokenAuthority {
    fn mint(&self, action: FormAction) -> String {
        let expires_at_ms = Self::now_ms() + self.ttl.as_millis() as i64;
        self.mint_at(action, expires_at_ms)
    }

    fn verify(&self, action: FormAction, token: &str) -> bool {
        let Some((expires_str, sig_b64)) = token.split_once('.') else {
            return false;
        };
        let Ok(expires_at_ms) = expires_str.parse::<i64>() else {
            return false;
        };
        let Ok(sig) = from_base64url(sig_b64) else {
            return false;
        };

        let expected = hmac_sha256(&self.secret, Self::payload(action, expires_at_ms).as_bytes());
        if !constant_time_eq(&sig, &expected) {
            return false;
        }

        expires_at_ms > Self::now_ms()
    }
}
