use serde::{Serialize, Deserialize};

/// Session token claims: the admin identity plus issue/expiry times.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

/// Result of a successful login, handed to the transport layer to be set
/// as a cookie.
#[derive(Debug)]
pub struct IssuedSession {
    pub token: String,
    pub username: String,
}
