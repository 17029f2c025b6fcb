//! Token bucket rate limiter middleware.
//!
//! Non-blocking: a request that finds its bucket empty is rejected at once
//! with 429, never queued.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;
use tokio::time::Instant;

use workout_core::config::RateLimitConfig;
use workout_core::error::AppError;

use crate::error::ApiError;

/// Bucket key for requests served without a socket peer address.
const UNKNOWN_PEER_KEY: &str = "unknown";

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Tracked clients above which full buckets are dropped.
const PRUNE_THRESHOLD: usize = 10_000;

/// Simple in-memory token bucket rate limiter.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Client key → bucket state.
    buckets: Arc<Mutex<HashMap<String, TokenBucket>>>,
    /// Maximum tokens per bucket.
    max_tokens: u32,
    /// Token refill rate per second.
    refill_rate: f64,
    /// Peers allowed to name the client in `x-forwarded-for`.
    trusted_proxies: Arc<[IpAddr]>,
}

#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// Creates a new rate limiter.
    pub fn new(max_tokens: u32, refill_rate: f64) -> Self {
        Self {
            buckets: Arc::new(Mutex::new(HashMap::new())),
            max_tokens,
            refill_rate,
            trusted_proxies: Arc::from([]),
        }
    }

    /// Creates a rate limiter from the `server.rate_limit` section.
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.burst, config.refill_per_second)
            .with_trusted_proxies(config.trusted_proxies.clone())
    }

    /// Believe `x-forwarded-for` when the socket peer is one of `proxies`.
    pub fn with_trusted_proxies(mut self, proxies: Vec<IpAddr>) -> Self {
        self.trusted_proxies = proxies.into();
        self
    }

    fn is_trusted(&self, ip: IpAddr) -> bool {
        self.trusted_proxies.contains(&ip)
    }

    /// The address the request is charged to.
    ///
    /// The socket peer, unless it is a trusted proxy. Then the forwarded
    /// chain is walked from the right and the first untrusted hop wins; a
    /// hop that does not parse ends the walk.
    fn client_ip(&self, request: &Request) -> Option<IpAddr> {
        let peer = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()?
            .0
            .ip();
        if !self.is_trusted(peer) {
            return Some(peer);
        }

        let forwarded = request
            .headers()
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        let mut client = peer;
        for hop in forwarded.rsplit(',') {
            let Ok(ip) = hop.trim().parse::<IpAddr>() else {
                break;
            };
            client = ip;
            if !self.is_trusted(ip) {
                break;
            }
        }
        Some(client)
    }

    fn client_key(&self, request: &Request) -> String {
        self.client_ip(request)
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| UNKNOWN_PEER_KEY.to_string())
    }

    /// Attempts to consume a token for the given key.
    pub async fn check(&self, key: &str) -> bool {
        let mut buckets = self.buckets.lock().await;
        let now = Instant::now();
        let capacity = f64::from(self.max_tokens);

        if buckets.len() >= PRUNE_THRESHOLD && !buckets.contains_key(key) {
            let rate = self.refill_rate;
            buckets.retain(|_, b| {
                b.tokens + now.duration_since(b.last_refill).as_secs_f64() * rate < capacity
            });
        }

        let bucket = buckets.entry(key.to_string()).or_insert(TokenBucket {
            tokens: capacity,
            last_refill: now,
        });

        // Refill tokens
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.refill_rate).min(capacity);
        bucket.last_refill = now;

        // Try to consume
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Rejects the request with 429 when the client's bucket is empty.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let key = limiter.client_key(&request);

    if !limiter.check(&key).await {
        tracing::warn!(client = %key, path = %request.uri().path(), "Rate limit exceeded");
        return ApiError(AppError::rate_limited("Too many requests")).into_response();
    }

    next.run(request).await
}
