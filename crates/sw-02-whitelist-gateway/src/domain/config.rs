//! # Gateway Configuration
//!
//! Texts sent to a rejected principal. Translation is the host's concern;
//! the gateway only carries whatever strings it is configured with.

/// Disconnect messages for rejected sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectMessages {
    /// Case 3: the name is whitelisted under another identity.
    pub identity_mismatch: String,
    /// Case 4b (and malformed principals).
    pub not_whitelisted: String,
}

impl Default for RejectMessages {
    fn default() -> Self {
        Self {
            identity_mismatch: "You appear to be whitelisted, but your identity does not match. \
                                Please contact an administrator."
                .to_string(),
            not_whitelisted: "You are not on the whitelist. Please contact an administrator \
                              to be added."
                .to_string(),
        }
    }
}

/// Whitelist gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    pub messages: RejectMessages,
}
