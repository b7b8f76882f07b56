//! Offset/limit pagination over any ordered sequence.

use serde::{Deserialize, Serialize};

/// Requested window. Absent values are filled in by [`paginate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// First index to return (default 0).
    pub start: Option<usize>,
    /// Maximum number of items to return (default: everything after `start`).
    pub limit: Option<usize>,
}

impl Pagination {
    pub fn new(start: Option<usize>, limit: Option<usize>) -> Self {
        Self { start, limit }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    /// Number of items before the window was applied.
    pub total: usize,
    /// Effective start index.
    pub start: usize,
    /// Effective limit.
    pub limit: usize,
    pub data: Vec<T>,
}

/// Slices `items` to `[start, start + limit)`, clamped to bounds.
///
/// A start past the end yields an empty page, never an error.
pub fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> ResultEnvelope<T> {
    let total = items.len();
    let start = pagination.start.unwrap_or(0);
    let limit = pagination
        .limit
        .unwrap_or_else(|| total.saturating_sub(start));

    let data = items.into_iter().skip(start).take(limit).collect();

    ResultEnvelope {
        total,
        start,
        limit,
        data,
    }
}
