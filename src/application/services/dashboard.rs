//! Control state plus the table and chart pipelines that react to it.

use std::num::NonZeroU32;
use std::sync::{Arc, Mutex, PoisonError};

use crate::application::services::aggregator::aggregate;
use crate::application::services::paginator::paginate;
use crate::application::services::pipeline::{Pipeline, ViewState};
use crate::domain::clock::Clock;
use crate::domain::entities::{DEFAULT_PAGE_SIZE, Lookback, PageView, TimeSeries};
use crate::domain::repositories::ToolSource;

/// User-controlled inputs of both pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub page: NonZeroU32,
    pub page_size: NonZeroU32,
    pub range: Lookback,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            page: NonZeroU32::MIN,
            page_size: NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN),
            range: Lookback::default(),
        }
    }
}

/// Drives the table and chart pipelines from control changes.
///
/// Table triggers (`set_page`, `set_page_size`, `refresh_table`) and chart
/// triggers (`set_range`, `refresh_chart`) each run their own fetch and
/// transform; the two pipelines never share state and may be in different
/// states at the same time. Every trigger is a fresh fetch, and a trigger that
/// completes after a newer one of the same group is discarded.
pub struct Dashboard<S: ToolSource + ?Sized> {
    source: Arc<S>,
    clock: Arc<dyn Clock>,
    controls: Mutex<Controls>,
    table: Pipeline<PageView>,
    chart: Pipeline<TimeSeries>,
}

impl<S: ToolSource + ?Sized> Dashboard<S> {
    /// Creates a dashboard with default controls and both pipelines idle.
    pub fn new(source: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            controls: Mutex::new(Controls::default()),
            table: Pipeline::new("table"),
            chart: Pipeline::new("chart"),
        }
    }

    /// Replaces the initial controls without triggering a fetch.
    pub fn with_controls(self, controls: Controls) -> Self {
        *self.controls.lock().unwrap_or_else(PoisonError::into_inner) = controls;
        self
    }

    pub fn controls(&self) -> Controls {
        *self.controls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn table_state(&self) -> ViewState<PageView> {
        self.table.snapshot()
    }

    pub fn chart_state(&self) -> ViewState<TimeSeries> {
        self.chart.snapshot()
    }

    /// Moves to `page` and reloads the table.
    pub async fn set_page(&self, page: NonZeroU32) -> ViewState<PageView> {
        let controls = self.update(|c| c.page = page);
        self.load_table(controls).await
    }

    /// Changes the page size, resets to the first page and reloads the table.
    pub async fn set_page_size(&self, page_size: NonZeroU32) -> ViewState<PageView> {
        let controls = self.update(|c| {
            c.page_size = page_size;
            c.page = NonZeroU32::MIN;
        });
        self.load_table(controls).await
    }

    /// Changes the lookback window and reloads the chart.
    pub async fn set_range(&self, range: Lookback) -> ViewState<TimeSeries> {
        let controls = self.update(|c| c.range = range);
        self.load_chart(controls).await
    }

    /// Reloads the table with the current controls.
    pub async fn refresh_table(&self) -> ViewState<PageView> {
        self.load_table(self.controls()).await
    }

    /// Reloads the chart with the current controls.
    pub async fn refresh_chart(&self) -> ViewState<TimeSeries> {
        self.load_chart(self.controls()).await
    }

    fn update(&self, change: impl FnOnce(&mut Controls)) -> Controls {
        let mut controls = self.controls.lock().unwrap_or_else(PoisonError::into_inner);
        change(&mut controls);
        *controls
    }

    async fn load_table(&self, controls: Controls) -> ViewState<PageView> {
        let ticket = self.table.begin();
        tracing::info!(
            page = controls.page.get(),
            page_size = controls.page_size.get(),
            generation = ticket.generation(),
            "Loading table"
        );

        let outcome = self
            .source
            .fetch()
            .await
            .map(|records| paginate(&records, controls.page, controls.page_size));

        self.table.complete(ticket, outcome);
        self.table.snapshot()
    }

    async fn load_chart(&self, controls: Controls) -> ViewState<TimeSeries> {
        let ticket = self.chart.begin();
        tracing::info!(
            range = controls.range.get(),
            generation = ticket.generation(),
            "Loading chart"
        );

        let today = self.clock.today();
        let outcome = self
            .source
            .fetch()
            .await
            .map(|records| aggregate(&records, controls.range, today));

        self.chart.complete(ticket, outcome);
        self.chart.snapshot()
    }
}
