/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::{fs::File, path::Path, sync::Mutex};
use tokio;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui1090_map::{cache::{ensure_data, http_client}, loader::load_features};
use tui1090_app::{CliArgs, run};

#[tokio::main]
async fn main ()->Result<()> {
    let args = CliArgs::parse();
    let config = args.app_config()?;

    if let Some(path) = &args.debug_log {
        init_tracing( path)?;
        println!("debug logging enabled: {path:?}");
        info!("tui1090 debug log started");
    }

    let data_dir = config.resolve_data_dir();
    println!("checking map data in {data_dir:?} ..");
    let client = http_client()?;
    match ensure_data( &client, &data_dir, &config.datasets, &config.data_urls).await {
        Ok(report) => {
            for (ftype,len) in &report.downloaded { println!("  downloaded {ftype} data ({len} bytes)") }
            for (ftype,err) in &report.failed { println!("  warning: skipping {ftype} data: {err}") }
        }
        Err(e) => println!("  warning: no map data cache: {e}")
    }

    let features = load_features( &data_dir, &config.datasets, config.highway_detail);
    for (ftype,n) in features.layer_counts() { println!("  {ftype}: {n} features") }

    println!("starting tui1090 (source: {}, radius: {:.0} miles, aspect: {:.1})", config.source, config.radius_miles, config.aspect);
    run( config, features).await?;

    println!("\nGoodbye!");
    Ok(())
}

/// log into a file since the terminal belongs to the UI. RUST_LOG overrides the default `info` level
fn init_tracing (path: &Path)->Result<()> {
    let file = File::create( path).with_context( || format!("failed to create debug log {path:?}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter( filter)
        .with_writer( Mutex::new( file))
        .with_ansi( false)
        .try_init()
        .map_err( |e| anyhow!("failed to install log subscriber: {e}"))
}
