//! DTOs for the paginated tool table.

use serde::Serialize;

use crate::domain::entities::{PageView, ScoreBand, ToolRecord};

/// Paginated list of tools.
#[derive(Debug, Serialize)]
pub struct ToolsPageResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<ToolRow>,
}

/// One table row, ready for display.
#[derive(Debug, Serialize)]
pub struct ToolRow {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub topics: Vec<String>,
    pub thumbnail_url: Option<String>,
    /// Website with its query string removed.
    pub link: Option<String>,
    pub created_at: String,
    pub score: Option<f64>,
    pub score_band: ScoreBand,
    pub score_label: &'static str,
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl From<&ToolRecord> for ToolRow {
    fn from(record: &ToolRecord) -> Self {
        let band = record.score_band();
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            tagline: record.tagline.clone(),
            topics: record.topics.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            link: record.link_target(),
            created_at: record.created_at.clone(),
            score: record.score,
            score_band: band,
            score_label: band.label(),
        }
    }
}

impl From<&PageView> for ToolsPageResponse {
    fn from(view: &PageView) -> Self {
        Self {
            pagination: PaginationMeta {
                page: view.page_index.get(),
                page_size: view.page_size.get(),
                total_items: view.total_count,
                total_pages: view.total_pages(),
            },
            items: view.records.iter().map(ToolRow::from).collect(),
        }
    }
}
