//! Shift query engine.
//!
//! Builds filtered, sorted, paginated views over the shift collection.
//! Every call re-queries the store (there is no caching), and ordering
//! between records with equal sort keys is unspecified.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Shift, ShiftStatus};
use crate::store::ShiftFilter;

use super::commands::ShiftService;
use super::views::ShiftView;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// The shift fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// The calendar date (the default).
    Date,
    /// The start instant.
    StartTime,
    /// The finish instant.
    FinishTime,
    /// The title, lexicographically.
    Title,
    /// The role, lexicographically.
    Role,
    /// The lifecycle status, in declaration order.
    Status,
    /// The creation timestamp.
    CreatedAt,
}

impl SortKey {
    /// Parses a wire sort key.
    ///
    /// Unknown keys fall back to [`SortKey::Date`]: rejecting malformed
    /// input is the upstream validator's job, and the source system
    /// treated unknown keys as a no-op sort target.
    pub fn parse(value: &str) -> Self {
        match value {
            "date" => SortKey::Date,
            "startTime" | "start_time" => SortKey::StartTime,
            "finishTime" | "finish_time" => SortKey::FinishTime,
            "title" => SortKey::Title,
            "role" => SortKey::Role,
            "status" => SortKey::Status,
            "createdAt" | "created_at" => SortKey::CreatedAt,
            _ => SortKey::Date,
        }
    }
}

/// Query options for a shift listing, as submitted by the caller.
///
/// All fields are optional; [`ShiftService::list_shifts`] fills the gaps
/// from the engine configuration and the caller-context sort default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftQueryOptions {
    /// 1-based page number; defaults to 1.
    pub page: Option<u32>,
    /// Page size; clamped to the configured maximum.
    pub limit: Option<u32>,
    /// Restrict to one lifecycle status.
    pub status: Option<ShiftStatus>,
    /// Field to sort by; defaults to `date`.
    pub sort_by: Option<String>,
    /// Sort direction; the default depends on the caller context.
    pub sort_order: Option<SortOrder>,
}

/// Pagination metadata returned alongside every listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// The requested page.
    pub current_page: u32,
    /// Total pages at this limit; 0 when the result set is empty.
    pub total_pages: u32,
    /// Total matching records before pagination.
    pub total_count: usize,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_prev_page: bool,
    /// The page size used.
    pub limit: u32,
}

/// One page of denormalized shifts plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftPage {
    /// The shifts on this page.
    pub shifts: Vec<ShiftView>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

/// Sorts shifts in place by `key` in the given direction.
///
/// Records with equal sort keys keep an unspecified relative order.
pub fn sort_shifts(shifts: &mut [Shift], key: SortKey, order: SortOrder) {
    shifts.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::StartTime => a.start_time.cmp(&b.start_time),
            SortKey::FinishTime => a.finish_time.cmp(&b.finish_time),
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Role => a.role.cmp(&b.role),
            SortKey::Status => a.status.cmp(&b.status),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Computes pagination metadata for a result set of `total_count` records.
pub fn paginate(total_count: usize, page: u32, limit: u32) -> Pagination {
    let total_pages = if total_count == 0 {
        0
    } else {
        total_count.div_ceil(limit as usize) as u32
    };
    Pagination {
        current_page: page,
        total_pages,
        total_count,
        has_next_page: page < total_pages,
        has_prev_page: page > 1,
        limit,
    }
}

impl ShiftService {
    /// Lists shifts matching `base`, shaped by `options`.
    ///
    /// `base` is the caller's standing restriction: empty for the
    /// administrator listing, one worker for "my shifts". The status
    /// filter from `options` narrows it further. `default_order` supplies
    /// the sort direction when the caller did not pick one.
    pub async fn list_shifts(
        &self,
        base: ShiftFilter,
        options: &ShiftQueryOptions,
        default_order: SortOrder,
    ) -> EngineResult<ShiftPage> {
        let page = options.page.unwrap_or(1).max(1);
        let limit = options
            .limit
            .unwrap_or(self.pagination.default_limit)
            .clamp(1, self.pagination.max_limit);
        let key = SortKey::parse(options.sort_by.as_deref().unwrap_or("date"));
        let order = options.sort_order.unwrap_or(default_order);

        let mut filter = base;
        if let Some(status) = options.status {
            filter = filter.with_status(status);
        }

        let mut shifts = self.store.shifts_matching(&filter).await?;
        sort_shifts(&mut shifts, key, order);

        let total_count = shifts.len();
        let pagination = paginate(total_count, page, limit);
        let skip = (page as usize - 1) * limit as usize;

        let mut views = Vec::with_capacity(limit.min(total_count as u32) as usize);
        for shift in shifts.into_iter().skip(skip).take(limit as usize) {
            views.push(self.view(shift).await?);
        }

        Ok(ShiftPage {
            shifts: views,
            pagination,
        })
    }
}
