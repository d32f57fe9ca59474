use actix_web::http::header;
use actix_web::middleware::{Condition, DefaultHeaders};

/// HSTS policy sent on every response when TLS is enabled.
pub const HSTS_POLICY: &str = "max-age=31536000; includeSubDomains";

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'";

pub const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

/// HTTPS hardening headers, applied only when the service terminates TLS.
pub fn security_headers(enabled: bool) -> Condition<DefaultHeaders> {
    Condition::new(
        enabled,
        DefaultHeaders::new()
            .add((header::STRICT_TRANSPORT_SECURITY, HSTS_POLICY))
            .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
            .add((header::X_FRAME_OPTIONS, "SAMEORIGIN"))
            .add((header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY))
            .add((header::REFERRER_POLICY, REFERRER_POLICY)),
    )
}
