/*
[INPUT]:  JSON bodies returned by Privy and Deform
[OUTPUT]: Typed response records, decoded field-by-field
[POS]:    Data layer - inbound response types
[UPDATE]: When API schema changes or new response fields are needed
*/

use serde::Deserialize;

use crate::http::{CoinshiftError, Result};
use crate::types::Session;

/// Response from POST /api/v1/siwe/init
#[derive(Debug, Clone, Deserialize)]
pub struct SiweInitResponse {
    /// Single-use challenge consumed by exactly one SIWE message
    pub nonce: String,
    pub address: String,
    pub expires_at: String,
}

/// Response from POST /api/v1/siwe/authenticate
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticateResponse {
    pub user: UserProfile,
    pub token: String,
    #[serde(default)]
    pub privy_access_token: String,
    pub refresh_token: String,
    pub identity_token: String,
    #[serde(default)]
    pub session_update_action: String,
    #[serde(default)]
    pub is_new_user: bool,
}

impl AuthenticateResponse {
    /// Extract the session credentials consumed downstream.
    ///
    /// An empty access token means the account cannot proceed, so it is
    /// rejected here rather than surfacing as an opaque federation error.
    pub fn into_session(self) -> Result<Session> {
        if self.token.is_empty() {
            return Err(CoinshiftError::InvalidResponse(
                "authenticate response carried an empty session token".to_string(),
            ));
        }

        Ok(Session {
            user_id: self.user.id,
            token: self.token,
            refresh_token: self.refresh_token,
            identity_token: self.identity_token,
        })
    }
}

/// Privy user profile embedded in the authenticate response
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub linked_accounts: Vec<LinkedAccount>,
    #[serde(default)]
    pub has_accepted_terms: bool,
    #[serde(default)]
    pub is_guest: bool,
}

/// One linked account entry in the user profile
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedAccount {
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub chain_type: Option<String>,
    #[serde(default)]
    pub wallet_client_type: Option<String>,
    #[serde(default)]
    pub connector_type: Option<String>,
    #[serde(default)]
    pub verified_at: Option<i64>,
}

/// GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLErrorEntry>,
}

/// One entry of the GraphQL errors list
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
}

/// Data payload of the UserLogin mutation
#[derive(Debug, Clone, Deserialize)]
pub struct UserLoginData {
    /// Platform bearer token scoped to one session
    #[serde(rename = "userLogin")]
    pub user_login: String,
}

/// Data payload of the VerifyActivity mutation
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyActivityData {
    #[serde(rename = "verifyActivity")]
    pub verify_activity: VerifyActivityPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyActivityPayload {
    pub record: ActivityRecord,
    #[serde(rename = "missionRecord", default)]
    pub mission_record: Option<serde_json::Value>,
}

/// Claim record nested under data.verifyActivity.record
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    #[serde(rename = "activityId")]
    pub activity_id: String,
    pub status: String,
    #[serde(default)]
    pub properties: Option<serde_json::Value>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "rewardRecords", default)]
    pub reward_records: Vec<RewardRecord>,
}

/// Reward application attached to a claim record
#[derive(Debug, Clone, Deserialize)]
pub struct RewardRecord {
    pub id: String,
    pub status: String,
    #[serde(rename = "appliedRewardType", default)]
    pub applied_reward_type: String,
    #[serde(rename = "appliedRewardQuantity", default)]
    pub applied_reward_quantity: i64,
    #[serde(rename = "rewardId", default)]
    pub reward_id: String,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub reward: Option<Reward>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reward {
    pub id: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(rename = "type", default)]
    pub reward_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_session_rejects_empty_token() {
        let response: AuthenticateResponse = serde_json::from_value(serde_json::json!({
            "user": {"id": "did:privy:abc"},
            "token": "",
            "refresh_token": "refresh",
            "identity_token": "identity",
        }))
        .unwrap();

        let err = response.into_session().unwrap_err();
        match err {
            CoinshiftError::InvalidResponse(msg) => assert!(msg.contains("empty session token")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_activity_record_decodes_nested_rewards() {
        let json = r#"{
            "id": "rec-1",
            "activityId": "304a9530-3720-45c8-a778-fbd3060d5cfd",
            "status": "CLAIMED",
            "properties": null,
            "createdAt": "2025-06-01T00:00:00.000Z",
            "rewardRecords": [
                {
                    "id": "rr-1",
                    "status": "APPLIED",
                    "appliedRewardType": "POINTS",
                    "appliedRewardQuantity": 100,
                    "rewardId": "rw-1",
                    "error": null,
                    "reward": {"id": "rw-1", "quantity": 100, "type": "POINTS"}
                }
            ]
        }"#;

        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.activity_id, "304a9530-3720-45c8-a778-fbd3060d5cfd");
        assert_eq!(record.status, "CLAIMED");
        assert_eq!(record.reward_records.len(), 1);
        assert_eq!(record.reward_records[0].applied_reward_quantity, 100);
        assert_eq!(
            record.reward_records[0].reward.as_ref().unwrap().reward_type,
            "POINTS"
        );
    }

    #[test]
    fn test_graphql_envelope_defaults_errors_to_empty() {
        let envelope: GraphQLResponse<UserLoginData> =
            serde_json::from_str(r#"{"data": {"userLogin": "token"}}"#).unwrap();
        assert!(envelope.errors.is_empty());
        assert_eq!(envelope.data.unwrap().user_login, "token");
    }
}
