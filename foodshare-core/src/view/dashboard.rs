use serde::{Deserialize, Serialize};

use crate::model::DonationDataset;

use super::{
    filter_restaurants, DashboardSummary, MapSettings, MapView, RouteTableView, SurplusFilter,
    DEFAULT_TABLE_ROWS, DEFAULT_THRESHOLD_QUANTILE,
};

/// parameters fixed for the lifetime of a dashboard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub map: MapSettings,
    /// quantile of observed surplus used as the starting threshold
    pub default_quantile: f64,
    /// maximum rows in the routes table
    pub table_rows: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            map: MapSettings::default(),
            default_quantile: DEFAULT_THRESHOLD_QUANTILE,
            table_rows: DEFAULT_TABLE_ROWS,
        }
    }
}

/// a loaded dashboard session. owns the immutable dataset and the slider
/// computed from it; every interaction derives a fresh [`DashboardView`].
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: DonationDataset,
    filter: SurplusFilter,
    settings: DashboardSettings,
}

/// everything displayed for one threshold value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub threshold: f64,
    pub filter: SurplusFilter,
    pub summary: DashboardSummary,
    pub map: MapView,
    pub table: RouteTableView,
}

impl Dashboard {
    pub fn new(dataset: DonationDataset, settings: DashboardSettings) -> Dashboard {
        let filter = SurplusFilter::from_restaurants(&dataset.restaurants, settings.default_quantile);
        log::info!(
            "surplus slider range [{}, {}], default threshold {}",
            filter.min,
            filter.max,
            filter.default_threshold
        );
        Dashboard {
            dataset,
            filter,
            settings,
        }
    }

    pub fn dataset(&self) -> &DonationDataset {
        &self.dataset
    }

    pub fn filter(&self) -> &SurplusFilter {
        &self.filter
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn summary(&self, requested_threshold: Option<f64>) -> DashboardSummary {
        let threshold = self.filter.resolve_threshold(requested_threshold);
        let filtered = filter_restaurants(&self.dataset.restaurants, threshold);
        DashboardSummary::new(&filtered, &self.dataset.ngos, &self.dataset.routes)
    }

    /// recomputes filter, summary, map and table for a threshold. absent or
    /// non-finite thresholds use the session default.
    pub fn view(&self, requested_threshold: Option<f64>) -> DashboardView {
        let threshold = self.filter.resolve_threshold(requested_threshold);
        let filtered = filter_restaurants(&self.dataset.restaurants, threshold);
        let DonationDataset { ngos, routes, .. } = &self.dataset;
        DashboardView {
            threshold,
            filter: self.filter,
            summary: DashboardSummary::new(&filtered, ngos, routes),
            map: MapView::new(&self.settings.map, &filtered, ngos, routes),
            table: RouteTableView::new(routes, self.settings.table_rows),
        }
    }
}
