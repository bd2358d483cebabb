//! Form Token Authority Seam
//!
//! Every state-changing submission must carry a token minted for exactly
//! its action. The authority is a collaborator; the flows only consume
//! this two-method contract.

use crate::domain::action::FormAction;

/// Mints and verifies action-scoped form tokens.
///
/// `verify` is a pure check and never errors: missing, expired,
/// tampered, malformed or wrong-action tokens all yield `false`.
pub trait TokenAuthority: Send + Sync {
    /// Mint a token valid for one action within the authority's window
    fn mint(&self, action: FormAction) -> String;

    /// Check a submitted token against an action
    fn verify(&self, action: FormAction, token: &str) -> bool;
}
