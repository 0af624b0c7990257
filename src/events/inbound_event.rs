use crate::error::HookError;
use crate::webhook_payloads::github::{
    GithubMarketplacePurchasePayload, GithubPushWebhookPayload,
};

/// Header naming the GitHub event kind.
pub const HEADER_EVENT: &str = "x-github-event";
/// Header carrying the GitHub delivery id.
pub const HEADER_DELIVERY: &str = "x-github-delivery";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    MarketplacePurchase,
    Unknown,
}

impl EventKind {
    pub fn from_header(value: &str) -> Self {
        match value.trim() {
            "push" => EventKind::Push,
            "marketplace_purchase" => EventKind::MarketplacePurchase,
            _ => EventKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Push => "push",
            EventKind::MarketplacePurchase => "marketplace_purchase",
            EventKind::Unknown => "unknown",
        }
    }
}

/// A single delivery as received: its kind and the untouched body.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    pub kind: EventKind,
    pub raw_payload: Vec<u8>,
}

/// A delivery decoded into the payload shape of its kind.
#[derive(Debug, Clone)]
pub enum GitHubEvent {
    Push(GithubPushWebhookPayload),
    MarketplacePurchase(GithubMarketplacePurchasePayload),
    Unknown,
}

impl InboundEvent {
    pub fn new(event_header: &str, raw_payload: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: EventKind::from_header(event_header),
            raw_payload: raw_payload.into(),
        }
    }

    /// Unknown kinds never look at the body.
    pub fn parse(&self) -> Result<GitHubEvent, HookError> {
        match self.kind {
            EventKind::Push => serde_json::from_slice(&self.raw_payload)
                .map(GitHubEvent::Push)
                .map_err(|source| self.malformed(source)),
            EventKind::MarketplacePurchase => serde_json::from_slice(&self.raw_payload)
                .map(GitHubEvent::MarketplacePurchase)
                .map_err(|source| self.malformed(source)),
            EventKind::Unknown => Ok(GitHubEvent::Unknown),
        }
    }

    fn malformed(&self, source: serde_json::Error) -> HookError {
        HookError::MalformedPayload {
            kind: self.kind.as_str(),
            reason: source.to_string(),
        }
    }
}
