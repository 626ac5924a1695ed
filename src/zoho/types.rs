use serde::Deserialize;

// https://www.zoho.com/accounts/protocol/oauth/web-apps/access-token.html
//
// Zoho reports some token failures with a 200 status and an "error" field in
// place of "access_token", so both are optional here and the caller decides.
#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub(super) access_token: Option<String>,
    pub(super) error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let body = r#"{"access_token":"1000.abc","expires_in":3600,"token_type":"Bearer"}"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.access_token.as_deref(), Some("1000.abc"));
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_parse_token_error_response() {
        let body = r#"{"error":"invalid_code"}"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.access_token, None);
        assert_eq!(response.error.as_deref(), Some("invalid_code"));
    }
}
