/*
[INPUT]:  Endpoint identity (Privy auth service vs Deform GraphQL service)
[OUTPUT]: Browser-mimicking header sets expected by the remote services
[POS]:    HTTP layer - per-endpoint request header construction
[UPDATE]: When the campaign frontend rotates its client identifiers
*/

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Origin of the campaign frontend both services expect to see
pub const CAMPAIGN_ORIGIN: &str = "https://campaign.coinshift.xyz";
/// Referer matching the campaign frontend
pub const CAMPAIGN_REFERER: &str = "https://campaign.coinshift.xyz/";

/// Privy application id of the Coinshift campaign
pub const PRIVY_APP_ID: &str = "clphlvsh3034xjw0fvs59mrdc";
/// Privy client analytics id
pub const PRIVY_CA_ID: &str = "e37a03d7-0a73-423e-b427-71b288d6c199";
/// Privy SDK version string the frontend reports
pub const PRIVY_CLIENT: &str = "react-auth:2.4.1";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";
const ACCEPT_ENCODING: &str = "gzip, deflate, br, zstd";
const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";
const SEC_CH_UA: &str = r#""Google Chrome";v="137", "Chromium";v="137", "Not/A)Brand";v="24""#;

/// Header pairs shared by every outbound request.
///
/// These values are part of the wire contract: the services reject
/// requests that do not look like the campaign frontend.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept-encoding", ACCEPT_ENCODING),
    ("accept-language", ACCEPT_LANGUAGE),
    ("content-type", "application/json"),
    ("origin", CAMPAIGN_ORIGIN),
    ("priority", "u=1, i"),
    ("referer", CAMPAIGN_REFERER),
    ("sec-ch-ua", SEC_CH_UA),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", r#""macOS""#),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "cross-site"),
    ("user-agent", USER_AGENT),
];

fn browser_headers(accept: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(BROWSER_HEADERS.len() + 4);
    headers.insert("accept", HeaderValue::from_static(accept));
    for (name, value) in BROWSER_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}

/// Headers for the Privy challenge and authentication endpoints
pub fn privy_headers() -> HeaderMap {
    let mut headers = browser_headers("application/json");
    headers.insert("privy-app-id", HeaderValue::from_static(PRIVY_APP_ID));
    headers.insert("privy-ca-id", HeaderValue::from_static(PRIVY_CA_ID));
    headers.insert("privy-client", HeaderValue::from_static(PRIVY_CLIENT));
    headers
}

/// Headers for the Deform GraphQL endpoint
pub fn deform_headers(operation_name: &'static str) -> HeaderMap {
    let mut headers = browser_headers("*/*");
    headers.insert(
        "x-apollo-operation-name",
        HeaderValue::from_static(operation_name),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privy_headers_carry_app_identity() {
        let headers = privy_headers();
        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert_eq!(headers.get("privy-app-id").unwrap(), PRIVY_APP_ID);
        assert_eq!(headers.get("privy-client").unwrap(), PRIVY_CLIENT);
        assert_eq!(headers.get("origin").unwrap(), CAMPAIGN_ORIGIN);
    }

    #[test]
    fn test_deform_headers_carry_operation_name() {
        let headers = deform_headers("UserLogin");
        assert_eq!(headers.get("accept").unwrap(), "*/*");
        assert_eq!(headers.get("x-apollo-operation-name").unwrap(), "UserLogin");
        assert!(headers.get("privy-app-id").is_none());
    }
}
