use serde::{Deserialize, Serialize};

/// One page of a paginated collection.
///
/// Every field is optional on the wire; a missing field decodes as `None`. `content.len() <= page_size` and
/// `total_pages == ceil(total_records / page_size)` hold for well-behaved
/// backends; clients should not rely on either.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// Records on this page.
    pub content: Option<Vec<T>>,
    /// 1-based page number the backend served.
    pub page_number: Option<u32>,
    /// Page size the backend applied.
    pub page_size: Option<u32>,
    /// Total records across all pages.
    pub total_records: Option<u64>,
    /// Total number of pages.
    pub total_pages: Option<u32>,
}

impl<T> PageResponse<T> {
    /// A fully populated page.
    pub fn new(content: Vec<T>, page_number: u32, page_size: u32, total_records: u64) -> Self {
        Self {
            content: Some(content),
            page_number: Some(page_number),
            page_size: Some(page_size),
            total_records: Some(total_records),
            total_pages: Some(page_count(total_records, page_size)),
        }
    }
}

/// Number of pages needed for `total_records` at `page_size` per page.
///
/// A zero page size yields zero pages.
#[must_use]
pub fn page_count(total_records: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total_records.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}
