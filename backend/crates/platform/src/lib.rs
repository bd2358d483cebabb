//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Cookie management
//! - Common header helpers

pub mod cookie;
pub mod crypto;
