//! Command implementations for the SRP CLI.
//!
//! Provides subcommands for browsing the region/state catalog, classifying
//! values, and requesting predictions from the prediction service.

use clap::Subcommand;
use srp_core::config::DEFAULT_BASE_URL;

pub mod catalog;
pub mod predict;

#[derive(Subcommand)]
pub enum Command {
    /// List region codes and names
    Regions,

    /// List the states of a region
    States {
        /// Region code (N, NE, CO, SE, S)
        #[arg(short = 'r', long)]
        region: String,
    },

    /// Validate a query and request a prediction for it
    Predict {
        /// Region code (N, NE, CO, SE, S)
        #[arg(short = 'r', long)]
        region: String,

        /// State code, must belong to the region
        #[arg(short = 's', long)]
        state: String,

        /// Year to forecast (defaults to the current year)
        #[arg(short = 'y', long)]
        year: Option<String>,

        /// Month to forecast (1-12)
        #[arg(short = 'm', long)]
        month: String,

        /// Base URL of the prediction service
        #[arg(long, env = "SRP_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Show the category of a radiation value
    Classify {
        /// Radiation value
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Regions => {
            catalog::run_regions();
            Ok(())
        }
        Command::States { region } => {
            catalog::run_states(&region);
            Ok(())
        }
        Command::Predict {
            region,
            state,
            year,
            month,
            base_url,
        } => predict::run_predict(&region, &state, year.as_deref(), &month, &base_url).await,
        Command::Classify { value } => {
            predict::run_classify(value);
            Ok(())
        }
    }
}
