use super::GithubUser;

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubMarketplacePurchasePayload {
    pub action: String,
    #[serde(default)]
    pub effective_date: Option<String>,
    pub sender: GithubUser,
    pub marketplace_purchase: GithubMarketplacePurchase,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubMarketplacePurchase {
    pub account: GithubMarketplaceAccount,
    #[serde(default)]
    pub billing_cycle: Option<String>,
    #[serde(default)]
    pub unit_count: Option<i64>,
    #[serde(default)]
    pub on_free_trial: bool,
    #[serde(default)]
    pub free_trial_ends_on: Option<String>,
    #[serde(default)]
    pub next_billing_date: Option<String>,
    pub plan: GithubMarketplacePlan,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubMarketplaceAccount {
    pub id: i64,
    pub login: String,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default)]
    pub organization_billing_email: Option<String>,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct GithubMarketplacePlan {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price_model: Option<String>,
    #[serde(default)]
    pub monthly_price_in_cents: Option<i64>,
    #[serde(default)]
    pub yearly_price_in_cents: Option<i64>,
}
