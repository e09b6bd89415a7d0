/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "admin-token";
