use crate::{error::Error, Claims};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::collections::HashSet;
use time::OffsetDateTime;

///
/// Decodes claims without checking the signature or any registered claim.
///
/// ### Errors
/// - [Error::Malformed] when token is not a well formed JWT
///
pub fn decode_claims(token: &str) -> Result<Claims, Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    let token_data =
        jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;

    Ok(token_data.claims)
}

///
/// Token without `exp` claim never expires.
///
/// ### Errors
/// - [Error::InvalidExpiration] when `exp` is out of range
///
pub fn is_expired(claims: &Claims, now: OffsetDateTime) -> Result<bool, Error> {
    let Some(exp) = claims.exp else {
        return Ok(false);
    };

    let expire_at = OffsetDateTime::from_unix_timestamp(exp)?;

    Ok(expire_at <= now)
}

#[cfg(test)]
mod test {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    fn encode(claims: serde_json::Value) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"key only the backend knows"),
        )
        .unwrap()
    }

    #[test]
    fn decode_claims_ignores_signature() {
        let token = encode(json!({ "sub": "42", "exp": 1_700_000_000_i64 }));

        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.sub.as_deref(), Some("42"));
        assert_eq!(claims.exp, Some(1_700_000_000));
    }

    #[test]
    fn decode_claims_without_registered_claims() {
        let token = encode(json!({ "role": "ADMIN" }));

        let claims = decode_claims(&token).unwrap();

        assert!(claims.sub.is_none());
        assert!(claims.exp.is_none());
    }

    #[test]
    fn decode_claims_malformed() {
        let result = decode_claims("definitely.not-a.jwt");

        assert!(matches!(result, Err(Error::Malformed(_))));
    }

    #[test]
    fn is_expired_past() {
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: None,
            exp: Some(now.unix_timestamp() - 60),
            iat: None,
        };

        assert!(is_expired(&claims, now).unwrap());
    }

    #[test]
    fn is_expired_future() {
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: None,
            exp: Some(now.unix_timestamp() + 3600),
            iat: None,
        };

        assert!(!is_expired(&claims, now).unwrap());
    }

    #[test]
    fn is_expired_missing_exp() {
        let claims = Claims {
            sub: None,
            exp: None,
            iat: None,
        };

        assert!(!is_expired(&claims, OffsetDateTime::now_utc()).unwrap());
    }
}
