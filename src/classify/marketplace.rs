use crate::collaborators::MarketplaceRecord;
use crate::webhook_payloads::github::GithubMarketplacePurchasePayload;

use super::{Decision, IgnoreReason, MarketplaceMutation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceAction {
    Purchased,
    Cancelled,
    Ignored(String),
}

impl MarketplaceAction {
    pub fn from_action(action: &str) -> Self {
        match action {
            "purchased" => MarketplaceAction::Purchased,
            "cancelled" => MarketplaceAction::Cancelled,
            other => MarketplaceAction::Ignored(other.to_string()),
        }
    }
}

pub fn classify_marketplace(payload: &GithubMarketplacePurchasePayload) -> Decision {
    match MarketplaceAction::from_action(&payload.action) {
        MarketplaceAction::Purchased => Decision::Mutate(MarketplaceMutation::Upsert(
            MarketplaceRecord::from_payload(payload),
        )),
        MarketplaceAction::Cancelled => Decision::Mutate(MarketplaceMutation::Cancel(
            MarketplaceRecord::from_payload(payload),
        )),
        MarketplaceAction::Ignored(action) => {
            Decision::Ignore(IgnoreReason::MarketplaceAction(action))
        }
    }
}
