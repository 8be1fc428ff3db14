use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces an id from the current unix-millis and a 6 character random
/// suffix, both base-36 (e.g. `mdyq3k8a-4fq1x9`). Uniqueness is practical
/// for a single user's journal, not a cryptographic guarantee.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}", to_base36(millis), suffix)
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_distinct_under_rapid_calls() {
        let ids: HashSet<String> = (0..512).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 512);
    }

    #[test]
    fn id_has_time_and_random_parts() {
        let id = generate_id();
        let (time_part, random_part) = id.split_once('-').expect("separator");
        assert!(!time_part.is_empty());
        assert_eq!(random_part.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn base36_round_trip() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }
}
