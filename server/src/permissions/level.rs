//! Ordered access tiers.

use serde::{Deserialize, Serialize};

/// Access tier within a module, from least to most privileged.
///
/// The derived `Ord` follows declaration order, so tier comparison is a
/// plain `>=`. A grant at a higher tier implies every capability of the
/// tiers below it for that module.
///
/// # Examples
///
/// ```
/// use swyft_server::permissions::AccessLevel;
///
/// assert!(AccessLevel::Write >= AccessLevel::Read);
/// assert!(AccessLevel::Manage < AccessLevel::Admin);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// No access.
    #[default]
    None,
    /// View records.
    Read,
    /// Create and edit records.
    Write,
    /// Remove records.
    Delete,
    /// Manage module settings and other members' records.
    Manage,
    /// Full control of the module.
    Admin,
}

impl AccessLevel {
    /// Returns the stored/wire name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Read => "read",
            Self::Write => "write",
            Self::Delete => "delete",
            Self::Manage => "manage",
            Self::Admin => "admin",
        }
    }

    /// All tiers in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::None,
            Self::Read,
            Self::Write,
            Self::Delete,
            Self::Manage,
            Self::Admin,
        ]
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_totally_ordered() {
        let all = AccessLevel::all();
        for window in all.windows(2) {
            assert!(window[0] < window[1], "{} should rank below {}", window[0], window[1]);
        }
    }

    #[test]
    fn test_none_is_lowest_admin_is_highest() {
        for level in AccessLevel::all() {
            assert!(AccessLevel::None <= *level);
            assert!(*level <= AccessLevel::Admin);
        }
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(AccessLevel::default(), AccessLevel::None);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&AccessLevel::Write).unwrap();
        assert_eq!(json, "\"write\"");
    }

    #[test]
    fn test_serde_matches_as_str() {
        for level in AccessLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn test_deserialize_known_tier() {
        let level: AccessLevel = serde_json::from_str("\"manage\"").unwrap();
        assert_eq!(level, AccessLevel::Manage);
    }

    #[test]
    fn test_deserialize_rejects_unknown_tier() {
        let result = serde_json::from_str::<AccessLevel>("\"superuser\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_wrong_case() {
        // Stored grant data is lowercase; anything else is malformed.
        let result = serde_json::from_str::<AccessLevel>("\"Admin\"");
        assert!(result.is_err());
    }
}
