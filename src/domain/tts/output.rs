use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

pub const OUTPUT_SUFFIX: &str = "_synthesis.wav";

/// Hands out `{unix-millis}_synthesis.wav` names.
///
/// Stamps are strictly increasing: a request landing in a millisecond that was
/// already used takes the next free one, so concurrent requests never share a file.
#[derive(Debug, Default)]
pub struct OutputNamer {
    last_stamp: AtomicI64,
}

impl OutputNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_file_name(&self) -> String {
        format!("{}{}", self.next_stamp(Utc::now().timestamp_millis()), OUTPUT_SUFFIX)
    }

    fn next_stamp(&self, now_millis: i64) -> i64 {
        let mut last = self.last_stamp.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(last + 1);
            match self.last_stamp.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}
