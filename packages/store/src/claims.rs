//! Expiry lookup for JWT session tokens.
//!
//! The token is otherwise opaque: the signature is not checked here, the
//! backend does that on every admin request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

/// The `exp` claim (seconds since the Unix epoch), if the token is a JWT that has one.
pub fn token_expiry(token: &str) -> Option<u64> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?;
    exp.as_u64()
        .or_else(|| exp.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
}

#[cfg(test)]
pub(crate) fn make_token(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_exp() {
        let token = make_token(&json!({"sub": "admin", "exp": 1_900_000_000u64}));
        assert_eq!(token_expiry(&token), Some(1_900_000_000));

        let token = make_token(&json!({"exp": 1_700_000_000.5}));
        assert_eq!(token_expiry(&token), Some(1_700_000_000));
    }

    #[test]
    fn test_opaque_or_malformed_tokens() {
        assert_eq!(token_expiry("abc"), None);
        assert_eq!(token_expiry("a.b"), None);
        assert_eq!(token_expiry("a.!!!.c"), None);
        assert_eq!(token_expiry("a.b.c.d"), None);
        assert_eq!(token_expiry(&make_token(&json!({"sub": "admin"}))), None);
        assert_eq!(token_expiry(&make_token(&json!({"exp": "soon"}))), None);
    }
}
