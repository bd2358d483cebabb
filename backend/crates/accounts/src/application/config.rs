//! Application Configuration
//!
//! Configuration for the accounts flows.

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Secret for form-token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Form token validity window
    pub token_ttl: Duration,
    /// Session cookie Max-Age without "Remember me" (2 days)
    pub session_ttl_short: Duration,
    /// Session cookie Max-Age with "Remember me" (2 weeks)
    pub session_ttl_long: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Fixed site-relative redirect targets
    pub dashboard_route: String,
    pub login_route: String,
    pub register_route: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "portal_session".to_string(),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600),
            session_ttl_short: Duration::from_secs(2 * 24 * 3600),
            session_ttl_long: Duration::from_secs(14 * 24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            dashboard_route: "/dashboard".to_string(),
            login_route: "/login".to_string(),
            register_route: "/register".to_string(),
        }
    }
}

impl AccountsConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cookie settings for the session cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }

    /// Session cookie Max-Age in seconds for the given remember flag
    pub fn session_max_age_secs(&self, remember: bool) -> i64 {
        let ttl = if remember {
            self.session_ttl_long
        } else {
            self.session_ttl_short
        };
        ttl.as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_age_follows_remember_flag() {
        let config = AccountsConfig::default();
        assert!(config.session_max_age_secs(true) > config.session_max_age_secs(false));
        assert_eq!(config.session_max_age_secs(false), 2 * 24 * 3600);
        assert_eq!(config.session_max_age_secs(true), 14 * 24 * 3600);
    }

    #[test]
    fn test_development_config_is_insecure_only_for_cookies() {
        let config = AccountsConfig::development();
        assert!(!config.cookie_secure);
        // Still gets a real secret
        assert!(config.token_secret.iter().any(|&b| b != 0));
    }
}
