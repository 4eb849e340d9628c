/// Supported JWT algorithms
#[derive(Debug, Clone)]
pub enum JwtAlgorithm {
    /// HMAC with SHA-256 (symmetric key shared with the backend)
    HS256 { secret: Vec<u8> },
    /// RSA with SHA-256 (backend's public key)
    RS256 { public_key_pem: String },
}
