use std::env;

use data_encoding::BASE64;

/// JWT signing configuration.
///
/// The signing key arrives as base64 in `JWT_SECRET` and is decoded once
/// here; everything downstream works with the raw key bytes. The token
/// lifetime is configured in milliseconds via `JWT_EXPIRY_MS`.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Vec<u8>,
    pub expiry_ms: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material never goes to logs.
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("expiry_ms", &self.expiry_ms)
            .finish()
    }
}

// 64 random bytes, base64 encoded. Development fallback only.
const DEV_SECRET: &str = "ZGV2LW9ubHktc2VjcmV0LWtleS1kby1ub3QtdXNlLWluLXByb2R1Y3Rpb24tZXZlci0xMjM0NTY3ODkwYWJjZGVm";

impl JwtConfig {
    pub fn from_env() -> Self {
        let encoded = env::var("JWT_SECRET").unwrap_or_else(|_| DEV_SECRET.to_string());

        let secret = BASE64
            .decode(encoded.as_bytes())
            .expect("JWT_SECRET must be valid base64");

        if secret.len() < 32 {
            tracing::warn!(
                key_bits = secret.len() * 8,
                "JWT_SECRET decodes to fewer than 256 bits; use a longer key in production"
            );
        }

        let expiry_ms = env::var("JWT_EXPIRY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(604_800_000); // 7 days

        Self { secret, expiry_ms }
    }
}
