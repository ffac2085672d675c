// crates/ssrf-rs/src/index.rs

//! Sequential `idx` attribute values for point-like elements.

use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_INDEX: AtomicU32 = AtomicU32::new(1);

/// Returns the next value of the process-wide element index.
///
/// Values start at 1 and increase by one per call, so elements created in
/// sequence are ordered by creation. Parsed elements keep the `idx` read from
/// the document and do not advance the counter.
pub fn next_index() -> u32 {
    NEXT_INDEX.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::next_index;

    #[test]
    fn test_indices_increase() {
        let a = next_index();
        let b = next_index();
        assert!(b > a);
        assert!(a >= 1);
    }
}
