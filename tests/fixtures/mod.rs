// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-greengrass
//!
//! Deterministic configuration and a frozen clock so timestamps in
//! responses are reproducible.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

use cim_greengrass::{FixedClock, GreengrassBackend, GreengrassConfig};

pub const REGION: &str = "ap-northeast-1";
pub const ACCOUNT_ID: &str = "944137583148";

// Frozen instant (2022-06-01T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2022-06-01T12:00:00Z";
pub const FIXED_TIMESTAMP_WIRE: &str = "2022-06-01T12:00:00.000Z";

/// Parse the fixed timestamp
pub fn fixed_instant() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn config() -> GreengrassConfig {
    GreengrassConfig::new(REGION, ACCOUNT_ID)
}

/// Backend whose clock is frozen at the fixed timestamp
pub fn frozen_backend() -> (GreengrassBackend, Arc<FixedClock>) {
    init_tracing();
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    (GreengrassBackend::with_clock(config(), clock.clone()), clock)
}

/// Backend on the wall clock
pub fn live_backend() -> GreengrassBackend {
    init_tracing();
    GreengrassBackend::new(config())
}

/// Install a subscriber once per test binary; RUST_LOG controls verbosity
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Core definition initial version
pub fn core_payload() -> Value {
    json!({
        "Cores": [{
            "CertificateArn": format!("arn:aws:iot:{REGION}:{ACCOUNT_ID}:cert/36ed61be9c6271ae8da174e29d0e033c06af149d7b21672f3800fe322044554d"),
            "Id": "123456789",
            "ThingArn": format!("arn:aws:iot:{REGION}:{ACCOUNT_ID}:thing/CoreThing"),
        }]
    })
}

/// Function definition initial version
pub fn function_payload() -> Value {
    json!({
        "Functions": [{
            "FunctionArn": "arn:aws:lambda:ap-northeast-1:123456789012:function:test-func:1",
            "Id": "1234567890",
            "FunctionConfiguration": {
                "MemorySize": 16384,
                "EncodingType": "binary",
                "Pinned": true,
                "Timeout": 3,
            },
        }]
    })
}

/// Subscription definition initial version
pub fn subscription_payload() -> Value {
    json!({
        "Subscriptions": [{
            "Id": "123456",
            "Source": "arn:aws:lambda:ap-northeast-1:123456789012:function:test_func:1",
            "Subject": "foo/bar",
            "Target": "cloud",
        }]
    })
}
