
use crate::Claims;

use eh_core::Role;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

pub(crate) fn valid_claims(role: Role) -> Claims {
    Claims {
        id: "person-123".to_string(),
        email: "person@example.com".to_string(),
        role,
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}
