use crate::error::ApiError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an issued token.
///
/// The authenticated user's id is stored in the audience claim, rendered as a
/// decimal string. No expiration claim is set at issuance, so a token stays
/// valid until the signing secret rotates (see DESIGN.md).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Audience claim, repurposed to carry the user id.
    pub aud: String,
}

impl Claims {
    /// The user id carried in the audience claim.
    ///
    /// A non-numeric audience means the token was not issued by us; that is
    /// surfaced the same way as any other invalid credential.
    pub fn user_id(&self) -> Result<i32, ApiError> {
        self.aud
            .parse()
            .map_err(|_| ApiError::Unauthorized("Unauthorized".into()))
    }
}

/// Signs a token naming `user_id` as its audience.
///
/// Issued only on successful login. The secret comes from the process-wide
/// `Config`, read once at startup; a signing failure is an internal error,
/// not an authentication one.
pub fn generate_token(user_id: i32, secret: &str) -> Result<String, ApiError> {
    let claims = Claims {
        aud: user_id.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to sign token: {}", e)))
}

/// Verifies a token's signature against the shared secret and decodes its claims.
///
/// Only the signature is checked: tokens carry no expiration claim and the
/// audience holds a user id rather than a recipient, so both of those
/// standard validations are disabled. Every verification failure, bad
/// signature or malformed payload alike, is `Unauthorized`.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized("Unauthorized".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip_yields_same_identity() {
        let user_id = 42;
        let token = generate_token(user_id, "round_trip_secret").unwrap();
        let claims = verify_token(&token, "round_trip_secret").unwrap();
        assert_eq!(claims.aud, "42");
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_foreign_secret_is_unauthorized() {
        let foreign_token = encode(
            &Header::default(),
            &Claims { aud: "7".into() },
            &EncodingKey::from_secret("secret_two".as_bytes()),
        )
        .unwrap();

        match verify_token(&foreign_token, "secret_one") {
            Err(ApiError::Unauthorized(msg)) => assert_eq!(msg, "Unauthorized"),
            Ok(_) => panic!("token signed with another secret must not verify"),
            Err(e) => panic!("unexpected error kind: {:?}", e),
        }
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        match verify_token("not.a.jwt", "garbage_secret") {
            Err(ApiError::Unauthorized(_)) => {}
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_audience_is_unauthorized() {
        let token = encode(
            &Header::default(),
            &Claims {
                aud: "not-a-user-id".into(),
            },
            &EncodingKey::from_secret("aud_secret".as_bytes()),
        )
        .unwrap();

        let claims = verify_token(&token, "aud_secret").unwrap();
        assert!(matches!(claims.user_id(), Err(ApiError::Unauthorized(_))));
    }
}
