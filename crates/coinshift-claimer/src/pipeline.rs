/*
[INPUT]:  Account credentials, campaign constants, Privy/Deform endpoints
[OUTPUT]: Per-account claim reports with step-level failure detail
[POS]:    Execution layer - ordered per-account claim orchestration
[UPDATE]: When changing step order or failure containment semantics
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use coinshift_adapter::{
    ActivityResult, AuthenticateRequest, ClientConfig, CoinshiftClient, CoinshiftError,
    EvmWalletSigner, WalletSigner, issued_at_now,
};

use crate::campaign;
use crate::config::AccountConfig;

/// Pipeline step at which an account's processing stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    CreateClient,
    DeriveAddress,
    RequestNonce,
    SignMessage,
    Authenticate,
    FederationLogin,
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStep::CreateClient => "create client",
            PipelineStep::DeriveAddress => "derive address",
            PipelineStep::RequestNonce => "request nonce",
            PipelineStep::SignMessage => "sign message",
            PipelineStep::Authenticate => "authenticate",
            PipelineStep::FederationLogin => "federation login",
        };
        f.write_str(name)
    }
}

/// Outcome of one activity claim; a claim error does not fail the account
#[derive(Debug)]
pub struct ActivityOutcome {
    pub activity_id: String,
    pub outcome: Result<ActivityResult, CoinshiftError>,
}

/// Result of one pipeline pass over one account
#[derive(Debug)]
pub enum AccountOutcome {
    /// All steps through federation succeeded; every activity was attempted
    Completed {
        user_id: String,
        activities: Vec<ActivityOutcome>,
    },
    /// A step failed; the remaining steps were skipped
    Failed {
        step: PipelineStep,
        error: CoinshiftError,
    },
}

/// Report for one configured account
#[derive(Debug)]
pub struct AccountReport {
    pub index: usize,
    pub address: Option<String>,
    pub outcome: AccountOutcome,
}

impl AccountReport {
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, AccountOutcome::Completed { .. })
    }
}

/// Sleep seam so tests can assert pacing without waiting wall-clock time
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Runs the claim flow for each configured account, strictly one at a
/// time. One account's failure never aborts the remaining accounts.
pub struct ClaimPipeline {
    /// (privy, deform) base URL overrides; production URLs when absent
    base_urls: Option<(String, String)>,
    activity_ids: Vec<String>,
    activity_delay: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl ClaimPipeline {
    /// Pipeline against the production endpoints with the campaign's
    /// fixed activity list
    pub fn new() -> Self {
        Self {
            base_urls: None,
            activity_ids: campaign::ACTIVITY_IDS.iter().map(|id| id.to_string()).collect(),
            activity_delay: campaign::ACTIVITY_DELAY,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Point both services at different base URLs (test seam)
    pub fn with_base_urls(mut self, privy_base_url: &str, deform_base_url: &str) -> Self {
        self.base_urls = Some((privy_base_url.to_string(), deform_base_url.to_string()));
        self
    }

    pub fn with_activity_ids(mut self, activity_ids: Vec<String>) -> Self {
        self.activity_ids = activity_ids;
        self
    }

    pub fn with_activity_delay(mut self, delay: Duration) -> Self {
        self.activity_delay = delay;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Process every account in order and collect a report per account
    pub async fn run(&self, accounts: &[AccountConfig]) -> Vec<AccountReport> {
        let mut reports = Vec::with_capacity(accounts.len());

        for (index, account) in accounts.iter().enumerate() {
            info!(
                account = index + 1,
                proxy = account.proxy.as_deref().unwrap_or("direct"),
                "processing account"
            );

            let report = self.process_account(index, account).await;
            match &report.outcome {
                AccountOutcome::Completed { user_id, activities } => {
                    let claimed = activities
                        .iter()
                        .filter(|activity| activity.outcome.is_ok())
                        .count();
                    info!(
                        account = index + 1,
                        user_id = %user_id,
                        claimed,
                        attempted = activities.len(),
                        "account processed"
                    );
                }
                AccountOutcome::Failed { step, error } => {
                    warn!(
                        account = index + 1,
                        step = %step,
                        error = %error,
                        "account failed, moving to next"
                    );
                }
            }
            reports.push(report);
        }

        reports
    }

    /// Run the ordered step sequence for one account.
    ///
    /// Steps: create proxied client, derive address, request nonce, build
    /// and sign the SIWE message, authenticate, federate, then claim each
    /// activity with a pause between claims.
    async fn process_account(&self, index: usize, account: &AccountConfig) -> AccountReport {
        let fail = |address: Option<String>, step: PipelineStep, error: CoinshiftError| {
            AccountReport {
                index,
                address,
                outcome: AccountOutcome::Failed { step, error },
            }
        };

        let config = ClientConfig::with_proxy(account.proxy.clone());
        let client = match &self.base_urls {
            Some((privy, deform)) => {
                CoinshiftClient::with_config_and_base_urls(config, privy, deform)
            }
            None => CoinshiftClient::with_config(config),
        };
        let client = match client {
            Ok(client) => client,
            Err(error) => return fail(None, PipelineStep::CreateClient, error),
        };

        let wallet = match EvmWalletSigner::new(&account.private_key) {
            Ok(wallet) => wallet,
            Err(error) => return fail(None, PipelineStep::DeriveAddress, error),
        };
        let address = wallet.address().to_string();
        info!(account = index + 1, address = %address, "wallet address derived");

        let challenge = match client.siwe_init(&address).await {
            Ok(challenge) => challenge,
            Err(error) => return fail(Some(address), PipelineStep::RequestNonce, error),
        };
        info!(account = index + 1, nonce = %challenge.nonce, "challenge issued");

        let message =
            campaign::siwe_message(&address, &challenge.nonce, &issued_at_now()).to_message();
        let signature = match wallet.sign_message(&message).await {
            Ok(signature) => signature,
            Err(error) => return fail(Some(address), PipelineStep::SignMessage, error),
        };

        let request = AuthenticateRequest::for_login(message, signature);
        let response = match client.siwe_authenticate(&request).await {
            Ok(response) => response,
            Err(error) => return fail(Some(address), PipelineStep::Authenticate, error),
        };
        info!(
            account = index + 1,
            user_id = %response.user.id,
            linked_accounts = response.user.linked_accounts.len(),
            is_new_user = response.is_new_user,
            "authenticated"
        );
        debug!(
            account = index + 1,
            token = %token_prefix(&response.token),
            refresh_token = %token_prefix(&response.refresh_token),
            "session tokens issued"
        );

        let session = match response.into_session() {
            Ok(session) => session,
            Err(error) => return fail(Some(address), PipelineStep::Authenticate, error),
        };

        // A failed federation is a hard failure: claims are never
        // attempted with a token of unknown validity.
        let platform_token = match client.user_login(&session.token).await {
            Ok(token) => token,
            Err(error) => return fail(Some(address), PipelineStep::FederationLogin, error),
        };
        info!(
            account = index + 1,
            token = %token_prefix(&platform_token),
            "federated login succeeded"
        );

        let mut activities = Vec::with_capacity(self.activity_ids.len());
        for (position, activity_id) in self.activity_ids.iter().enumerate() {
            if position > 0 {
                self.sleeper.sleep(self.activity_delay).await;
            }

            let outcome = match client
                .verify_activity(activity_id, &platform_token, &session.identity_token)
                .await
            {
                Ok(record) => {
                    info!(
                        account = index + 1,
                        activity_id = %activity_id,
                        status = %record.status,
                        rewards = record.reward_records.len(),
                        "activity claimed"
                    );
                    Ok(ActivityResult::from(record))
                }
                Err(error) => {
                    warn!(
                        account = index + 1,
                        activity_id = %activity_id,
                        error = %error,
                        "activity claim failed"
                    );
                    Err(error)
                }
            };

            activities.push(ActivityOutcome {
                activity_id: activity_id.clone(),
                outcome,
            });
        }

        AccountReport {
            index,
            address: Some(address),
            outcome: AccountOutcome::Completed {
                user_id: session.user_id,
                activities,
            },
        }
    }
}

impl Default for ClaimPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Safe token prefix for logs; never exposes the full credential
fn token_prefix(token: &str) -> String {
    let end = token
        .char_indices()
        .nth(10)
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    format!("{}...", &token[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_prefix_is_char_boundary_safe() {
        assert_eq!(token_prefix("abcdefghijklmno"), "abcdefghij...");
        assert_eq!(token_prefix("short"), "short...");
        // multi-byte characters must not split
        assert_eq!(token_prefix("ééééééééééé"), "éééééééééé...");
    }

    #[test]
    fn test_pipeline_defaults_follow_campaign() {
        let pipeline = ClaimPipeline::new();
        assert_eq!(pipeline.activity_ids.len(), campaign::ACTIVITY_IDS.len());
        assert_eq!(pipeline.activity_delay, campaign::ACTIVITY_DELAY);
    }

    #[test]
    fn test_step_display_names() {
        assert_eq!(PipelineStep::RequestNonce.to_string(), "request nonce");
        assert_eq!(PipelineStep::FederationLogin.to_string(), "federation login");
    }
}
