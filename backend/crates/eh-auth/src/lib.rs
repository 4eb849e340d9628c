pub mod claims;
pub mod cookies;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod session;

pub use claims::Claims;
pub use cookies::{CookieSettings, cookie_value, expired_cookie, session_cookie};
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;
pub use session::{SessionContext, SessionTokens};

#[cfg(test)]
mod tests;
