#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, Utc};

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn utc(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid RFC 3339 timestamp")
        .to_utc()
}
