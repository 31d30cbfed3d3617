//! Logreport - Service Log Reporter
//!
//! ローテーション済みのサービスログをレポートに集計

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use logreport::adapter::config::Config;
use logreport::driver::{Args, ReportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = ReportWorkflow::new(config);

    workflow.execute(args).await
}
