use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use foodshare_core::{
    model::DonationDataset,
    view::{Dashboard, DashboardSummary, SurplusFilter},
};
use serde::{Deserialize, Serialize};

use crate::{
    app::FoodshareAppError,
    config::FoodshareConfig,
    page::{self, PageMode},
    server::{self, ServerState},
};

/// dashboard of predicted food surplus at restaurants, clustered NGOs and
/// optimized donation routes
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FoodshareApp {
    /// TOML or JSON file overriding the default configuration
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,
    /// select the dashboard operation to run
    #[command(subcommand)]
    pub op: FoodshareOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum FoodshareOperation {
    /// load the datasets once and serve the interactive dashboard
    Serve {
        /// address to listen on, overrides server.host
        #[arg(long)]
        host: Option<String>,
        /// port to listen on, overrides server.port
        #[arg(long)]
        port: Option<u16>,
    },
    /// write a static snapshot of the dashboard to an HTML file
    Render {
        /// destination HTML file
        #[arg(short, long)]
        output_file: PathBuf,
        /// minimum surplus threshold, defaults to the configured quantile
        #[arg(long)]
        min_surplus: Option<f64>,
    },
    /// print the summary metrics and slider bounds as JSON
    Summary {
        /// minimum surplus threshold, defaults to the configured quantile
        #[arg(long)]
        min_surplus: Option<f64>,
    },
}

/// JSON document written by the `summary` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub threshold: f64,
    pub filter: SurplusFilter,
    pub summary: DashboardSummary,
}

impl FoodshareApp {
    pub fn run(&self) -> Result<(), FoodshareAppError> {
        let conf = FoodshareConfig::load(self.config_file.as_deref())?;
        self.op.run(conf)
    }
}

impl FoodshareOperation {
    pub fn run(&self, mut conf: FoodshareConfig) -> Result<(), FoodshareAppError> {
        match self {
            FoodshareOperation::Serve { host, port } => {
                if let Some(h) = host {
                    conf.server.host = h.clone();
                }
                if let Some(p) = port {
                    conf.server.port = *p;
                }
                let dashboard = load_dashboard(&conf)?;
                let state = Arc::new(ServerState::new(dashboard, conf.view.clone()));
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()?;
                runtime.block_on(server::serve(state, &conf.server))
            }
            FoodshareOperation::Render {
                output_file,
                min_surplus,
            } => {
                let dashboard = load_dashboard(&conf)?;
                let view = dashboard.view(*min_surplus);
                let html = page::render_page(&view, &conf.view, PageMode::Snapshot)?;
                std::fs::write(output_file, html)?;
                log::info!(
                    "wrote dashboard snapshot at threshold {} to {}",
                    view.threshold,
                    output_file.display()
                );
                Ok(())
            }
            FoodshareOperation::Summary { min_surplus } => {
                let dashboard = load_dashboard(&conf)?;
                let output = SummaryOutput {
                    threshold: dashboard.filter().resolve_threshold(*min_surplus),
                    filter: *dashboard.filter(),
                    summary: dashboard.summary(*min_surplus),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
                Ok(())
            }
        }
    }
}

/// loads the three datasets once and builds the dashboard session around them.
pub fn load_dashboard(conf: &FoodshareConfig) -> Result<Dashboard, FoodshareAppError> {
    let dataset = DonationDataset::load(&conf.data)?;
    Ok(Dashboard::new(dataset, conf.dashboard_settings()))
}
