#![forbid(unsafe_code)]

//! Highlight roles.

use std::fmt;

/// Presentation tag attached to a set of indices.
///
/// Roles never influence algorithm logic. Their timing and scope are part of
/// the observable contract a renderer relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HighlightRole {
    /// Values currently being compared or probed.
    Comparing,
    /// Values about to move, or a slot that was just written.
    Swapping,
    /// Indices whose final position is guaranteed.
    Sorted,
    /// A search hit, or a quick-sort pivot.
    Found,
}

impl HighlightRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 4] = [Self::Comparing, Self::Swapping, Self::Sorted, Self::Found];

    /// Stable lowercase name (matches the CSS class a web renderer would use).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Sorted => "sorted",
            Self::Found => "found",
        }
    }
}

impl fmt::Display for HighlightRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
