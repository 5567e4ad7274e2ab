//! Deterministic avatar URLs via the RoboHash convention.

/// Derive an avatar image URL from a seed string.
///
/// RoboHash renders a unique robot per seed, so the same seed always maps
/// to the same picture. Only the URL is constructed here; fetching it is
/// the platform's business.
pub fn avatar_url(seed: &str) -> String {
    format!("https://robohash.org/{seed}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_deterministic() {
        assert_eq!(avatar_url("basic-native"), avatar_url("basic-native"));
    }

    #[test]
    fn test_avatar_url_format() {
        assert_eq!(
            avatar_url("basic-native"),
            "https://robohash.org/basic-native.png"
        );
    }

    #[test]
    fn test_avatar_url_distinct_seeds() {
        assert_ne!(avatar_url("a"), avatar_url("b"));
    }
}
