//! Feature flags selecting which scope stages run.

use std::fmt;
use std::ops::BitOr;

/// Set of enabled processing stages.
///
/// An empty set disables all processing and leaves the query untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilterFlags(u8);

impl FilterFlags {
    /// Equality predicates from filterable fields.
    pub const FILTER: Self = Self(1 << 0);
    /// Substring search over searchable fields.
    pub const SEARCH: Self = Self(1 << 1);
    /// `order_by` / `order_direction` handling, with the default ordering.
    pub const ORDER_BY: Self = Self(1 << 2);
    /// `page` / `limit` handling with a count query.
    pub const PAGINATE: Self = Self(1 << 3);
    /// Every stage.
    pub const ALL: Self = Self(Self::FILTER.0 | Self::SEARCH.0 | Self::ORDER_BY.0 | Self::PAGINATE.0);

    const NAMES: [(Self, &'static str); 4] = [
        (Self::FILTER, "FILTER"),
        (Self::SEARCH, "SEARCH"),
        (Self::ORDER_BY, "ORDER_BY"),
        (Self::PAGINATE, "PAGINATE"),
    ];

    /// No stage enabled.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from raw bits, ignoring unknown ones.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Whether no stage is enabled.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every stage in `other` is enabled.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FilterFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<u8> for FilterFlags {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl fmt::Debug for FilterFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "FilterFlags(empty)");
        }
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "FilterFlags({})", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_union() {
        let union =
            FilterFlags::FILTER | FilterFlags::SEARCH | FilterFlags::ORDER_BY | FilterFlags::PAGINATE;
        assert_eq!(union, FilterFlags::ALL);
        assert!(FilterFlags::ALL.contains(FilterFlags::ORDER_BY));
    }

    #[test]
    fn test_zero_is_empty() {
        let flags = FilterFlags::from(0u8);
        assert!(flags.is_empty());
        assert!(!flags.contains(FilterFlags::FILTER));
        assert_eq!(flags, FilterFlags::default());
    }

    #[test]
    fn test_unknown_bits_dropped() {
        let flags = FilterFlags::from_bits_truncate(0b1111_0001);
        assert_eq!(flags, FilterFlags::FILTER);
    }

    #[test]
    fn test_debug_lists_names() {
        let flags = FilterFlags::FILTER | FilterFlags::ORDER_BY;
        assert_eq!(format!("{flags:?}"), "FilterFlags(FILTER | ORDER_BY)");
    }
}
