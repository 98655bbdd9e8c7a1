use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out `EMP<number>` identifiers derived from the wall clock in
/// milliseconds. When the clock has not moved since the last call the number
/// is bumped past the previous one, so identifiers never repeat.
#[derive(Debug, Default)]
pub struct EmployeeIdGenerator {
    last: AtomicI64,
}

impl EmployeeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&self, now_millis: i64) -> String {
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return format!("EMP{}", candidate),
                Err(actual) => previous = actual,
            }
        }
    }
}
