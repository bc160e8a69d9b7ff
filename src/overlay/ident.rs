use once_cell::sync::Lazy;
use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Random seed plus a full-period odd stride: every call draws a distinct
// 32-bit nonce until the sequence wraps after 2^32 ids, so identifiers cannot
// collide within one process lifetime.
static NONCE: Lazy<AtomicU32> = Lazy::new(|| AtomicU32::new(rand::thread_rng().gen()));

const NONCE_STRIDE: u32 = 0x9e37_79b9;

/// Generates an overlay identifier of the form
/// `modal_{8 lowercase hex chars}_{unix seconds}`.
///
/// The registry is never consulted for collisions.
pub fn generate() -> String {
    let nonce = NONCE.fetch_add(NONCE_STRIDE, Ordering::Relaxed);
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("modal_{:08x}_{}", nonce, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_format() {
        let id = generate();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "modal");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(!parts[2].is_empty());
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_no_duplicates_in_ten_thousand() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_timestamp_is_current() {
        let id = generate();
        let seconds: u64 = id.split('_').nth(2).unwrap().parse().unwrap();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert!(seconds <= now);
        assert!(now - seconds < 5);
    }
}
