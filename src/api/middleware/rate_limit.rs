//! Rate limiting for contact submissions, using a per-IP token bucket.
//!
//! # Limits
//!
//! - **Rate**: 1 request per second
//! - **Burst**: 5 requests
//!
//! Requests exceeding the limit receive `429 Too Many Requests`.
//!
//! The layers key on the client IP, so the router must be served with
//! `into_make_service_with_connect_info::<SocketAddr>()`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

const PER_SECOND: u64 = 1;
const BURST_SIZE: u32 = 5;

type Layer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn config<K: KeyExtractor>(key_extractor: K) -> Arc<GovernorConfig<K, NoOpMiddleware<QuantaInstant>>> {
    Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .key_extractor(key_extractor)
            .finish()
            .expect("rate limit quota is non-zero"),
    )
}

/// Limits by the socket peer address.
pub fn layer() -> Layer<PeerIpKeyExtractor> {
    GovernorLayer::new(config(PeerIpKeyExtractor))
}

/// Limits by the client address reported in `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded`, falling back to the peer address.
///
/// Use only behind a trusted reverse proxy; the headers are spoofable
/// otherwise.
pub fn proxied_layer() -> Layer<SmartIpKeyExtractor> {
    GovernorLayer::new(config(SmartIpKeyExtractor))
}
