//! Deterministic logical-id generation.

/// Derive the logical id for a resource from its stack name and label.
///
/// The id doubles as the resource's display name. Two labels under the same
/// stack never collide, and the same label under two stacks never collides,
/// so ids stay stable across re-synthesis of the same recipe.
pub fn logical_id(stack: &str, label: &str) -> String {
    format!("{stack}-{label}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_id_deterministic() {
        assert_eq!(logical_id("s", "client"), logical_id("s", "client"));
    }

    #[test]
    fn test_logical_id_distinct_labels() {
        assert_ne!(logical_id("s", "client"), logical_id("s", "api"));
    }

    #[test]
    fn test_logical_id_distinct_stacks() {
        assert_ne!(logical_id("s1", "client"), logical_id("s2", "client"));
    }

    #[test]
    fn test_logical_id_format() {
        assert_eq!(logical_id("basic-native", "api"), "basic-native-api");
    }
}
