/*
[INPUT]:  Privy session tokens and campaign activity ids
[OUTPUT]: Platform bearer token and claim records from the Deform GraphQL API
[POS]:    HTTP layer - campaign platform endpoints
[UPDATE]: When the GraphQL mutation documents or auth headers change
*/

use tracing::debug;

use crate::http::{CoinshiftClient, CoinshiftError, Result};
use crate::types::{ActivityRecord, GraphQLRequest, UserLoginData, VerifyActivityData};

const USER_LOGIN_OPERATION: &str = "UserLogin";
const USER_LOGIN_QUERY: &str = "mutation UserLogin($data: UserLoginInput!) {
  userLogin(data: $data)
}";

const VERIFY_ACTIVITY_OPERATION: &str = "VerifyActivity";
const VERIFY_ACTIVITY_QUERY: &str = "mutation VerifyActivity($data: VerifyActivityInput!) {
  verifyActivity(data: $data) {
    record {
      id
      activityId
      status
      properties
      createdAt
      rewardRecords {
        id
        status
        appliedRewardType
        appliedRewardQuantity
        appliedRewardMetadata
        error
        rewardId
        reward {
          id
          quantity
          type
          properties
          __typename
        }
        __typename
      }
      __typename
    }
    missionRecord {
      id
      missionId
      status
      createdAt
      rewardRecords {
        id
        status
        appliedRewardType
        appliedRewardQuantity
        appliedRewardMetadata
        error
        rewardId
        reward {
          id
          quantity
          type
          properties
          __typename
        }
        __typename
      }
      __typename
    }
    __typename
  }
}";

impl CoinshiftClient {
    /// Federate a Privy session into the campaign platform.
    ///
    /// Sends the UserLogin mutation with the Privy access token and
    /// returns the platform bearer token. Idempotent per distinct token
    /// on the server side.
    pub async fn user_login(&self, external_auth_token: &str) -> Result<String> {
        debug!("federating session via UserLogin");

        let request = GraphQLRequest {
            operation_name: USER_LOGIN_OPERATION,
            variables: serde_json::json!({
                "data": {"externalAuthToken": external_auth_token},
            }),
            query: USER_LOGIN_QUERY,
        };

        let builder = self.deform_request(USER_LOGIN_OPERATION);
        let data: UserLoginData = self.send_graphql(builder, &request).await?;

        if data.user_login.is_empty() {
            return Err(CoinshiftError::InvalidResponse(
                "UserLogin returned an empty platform token".to_string(),
            ));
        }

        Ok(data.user_login)
    }

    /// Claim one reward activity with the federated session.
    ///
    /// Sends the VerifyActivity mutation authorized by the platform
    /// bearer token and the Privy identity token. The server-reported
    /// status is returned as-is; "FAILED" or "PENDING" are valid
    /// outcomes, not transport errors.
    pub async fn verify_activity(
        &self,
        activity_id: &str,
        bearer_token: &str,
        identity_token: &str,
    ) -> Result<ActivityRecord> {
        debug!(activity_id, "claiming activity via VerifyActivity");

        let request = GraphQLRequest {
            operation_name: VERIFY_ACTIVITY_OPERATION,
            variables: serde_json::json!({
                "data": {"activityId": activity_id},
            }),
            query: VERIFY_ACTIVITY_QUERY,
        };

        let builder = self
            .deform_request(VERIFY_ACTIVITY_OPERATION)
            .bearer_auth(bearer_token)
            .header("privy-id-token", identity_token);
        let data: VerifyActivityData = self.send_graphql(builder, &request).await?;

        Ok(data.verify_activity.record)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, CoinshiftClient, CoinshiftError};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> CoinshiftClient {
        CoinshiftClient::with_config_and_base_urls(
            ClientConfig::default(),
            &server.uri(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_user_login_returns_platform_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("x-apollo-operation-name", "UserLogin"))
            .and(body_partial_json(serde_json::json!({
                "operationName": "UserLogin",
                "variables": {"data": {"externalAuthToken": "privy-token"}},
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"userLogin": "platform-token"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let token = client.user_login("privy-token").await.expect("user_login");

        assert_eq!(token, "platform-token");
    }

    #[tokio::test]
    async fn test_user_login_surfaces_graphql_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": null,
                "errors": [{"message": "boom"}, {"message": "second"}],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.user_login("privy-token").await.unwrap_err();

        match err {
            CoinshiftError::GraphQL(message) => assert_eq!(message, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_user_login_rejects_missing_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.user_login("privy-token").await.unwrap_err();

        assert!(matches!(err, CoinshiftError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_verify_activity_sends_session_headers() {
        let server = MockServer::start().await;
        let activity_id = "907b82a0-152f-45d7-ae35-ce01de22b481";

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("authorization", "Bearer platform-token"))
            .and(header("privy-id-token", "identity-token"))
            .and(header("x-apollo-operation-name", "VerifyActivity"))
            .and(body_partial_json(serde_json::json!({
                "operationName": "VerifyActivity",
                "variables": {"data": {"activityId": activity_id}},
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "verifyActivity": {
                        "record": {
                            "id": "rec-1",
                            "activityId": activity_id,
                            "status": "CLAIMED",
                            "createdAt": "2025-06-01T00:00:00.000Z",
                            "rewardRecords": [],
                        },
                        "missionRecord": null,
                    },
                },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let record = client
            .verify_activity(activity_id, "platform-token", "identity-token")
            .await
            .expect("verify_activity");

        assert_eq!(record.activity_id, activity_id);
        assert_eq!(record.status, "CLAIMED");
    }
}
