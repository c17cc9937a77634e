//! List ordering and chart-series projections.
//!
//! # Responsibility
//! - Sort a collection copy for display under the selected ordering mode.
//! - Derive the chronological water-intake series for the trend chart.
//!
//! # Invariants
//! - Both projections are pure functions of the collection snapshot.
//! - The chart is always chronological (ascending id), regardless of the
//!   list's current sort mode.

use crate::model::record::{format_chart_label, Record};

/// Fewer records than this yields no chart series.
pub const MIN_CHART_RECORDS: usize = 2;

/// Ordering mode for the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Newest first (descending id). The default.
    #[default]
    Recent,
    /// Highest water intake first; ties keep insertion order.
    MaxWater,
}

impl SortMode {
    /// Stable mode name used across the UI boundary and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::MaxWater => "max_water",
        }
    }

    /// Parses a stable mode name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "recent" => Some(Self::Recent),
            "max_water" => Some(Self::MaxWater),
            _ => None,
        }
    }
}

/// Returns a sorted copy of the collection for display.
///
/// Stable sort, so `MaxWater` ties resolve to insertion order. The input
/// slice is never reordered.
pub fn ordered_view(records: &[Record], mode: SortMode) -> Vec<Record> {
    let mut view = records.to_vec();
    match mode {
        SortMode::Recent => view.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::MaxWater => view.sort_by(|a, b| b.water_cups.cmp(&a.water_cups)),
    }
    view
}

/// Water-intake trend series: parallel label/value sequences in
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    /// `DD/MM` labels derived from each record's creation timestamp.
    pub labels: Vec<String>,
    /// Water cups per record, aligned with `labels`.
    pub water_cups: Vec<u32>,
}

/// Derives the chart series, oldest record first.
///
/// Returns `None` below [`MIN_CHART_RECORDS`]; that is the normal
/// "insufficient data" placeholder state, not an error.
pub fn chart_series(records: &[Record]) -> Option<ChartSeries> {
    if records.len() < MIN_CHART_RECORDS {
        return None;
    }

    let mut chronological = records.to_vec();
    chronological.sort_by_key(|record| record.id);

    Some(ChartSeries {
        labels: chronological
            .iter()
            .map(|record| format_chart_label(record.id))
            .collect(),
        water_cups: chronological.iter().map(|record| record.water_cups).collect(),
    })
}
