mod github_commit;
mod github_installation;
mod github_repository;
mod github_user;
mod marketplace_purchase;
mod payload;

pub use github_commit::GithubCommit;
pub use github_installation::GithubInstallation;
pub use github_repository::GithubRepository;
pub use github_user::GithubUser;
pub use marketplace_purchase::{
    GithubMarketplaceAccount, GithubMarketplacePlan, GithubMarketplacePurchase,
    GithubMarketplacePurchasePayload,
};
pub use payload::GithubPushWebhookPayload;
