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

use std::{env, fs, path::{Path, PathBuf}, time::Duration};
use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::{Serialize,Deserialize};
use tui1090_adsb::{DEFAULT_DROP_AFTER, DEFAULT_EVICT_INTERVAL, connector::SbsSource};
use tui1090_map::{ZoomLimits, cache::DataUrls, loader::{DatasetFiles, MIN_HIGHWAY_DETAIL, MAX_HIGHWAY_DETAIL}};

pub const DEFAULT_RADIUS_MILES: f64 = 150.0;
pub const DEFAULT_ASPECT: f64 = 2.0;
pub const MIN_ASPECT: f64 = 1.0;
pub const MAX_ASPECT: f64 = 4.0;
pub const DEFAULT_HIGHWAY_DETAIL: u8 = 4;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// the per-user directory we look for map data in, relative to $HOME
pub const USER_DATA_DIR: &str = ".tui1090/data";
/// used if there is no $HOME
pub const LOCAL_DATA_DIR: &str = "data";

/// the application configuration. This can be read from a RON file, all fields are optional:
/// ```ron
/// AppConfig(
///     source: Network("192.168.1.100:30003"),
///     radius_miles: 80.0,
///     drop_after: (secs: 120, nanos: 0),
/// )
/// ```
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SbsSource,
    pub data_dir: Option<PathBuf>, // None means $HOME/.tui1090/data or ./data
    pub datasets: DatasetFiles,
    pub data_urls: DataUrls, // where missing datasets are downloaded from
    pub radius_miles: f64,
    pub aspect: f64, // height:width of terminal character cells
    pub zoom_limits: ZoomLimits,
    pub highway_detail: u8,
    pub tick_interval: Duration, // render cycle
    pub evict_interval: Duration,
    pub drop_after: Duration, // staleness threshold for aircraft
}

impl Default for AppConfig {
    fn default()->Self {
        AppConfig {
            source: SbsSource::local_dump1090(),
            data_dir: None,
            datasets: DatasetFiles::default(),
            data_urls: DataUrls::default(),
            radius_miles: DEFAULT_RADIUS_MILES,
            aspect: DEFAULT_ASPECT,
            zoom_limits: ZoomLimits::default(),
            highway_detail: DEFAULT_HIGHWAY_DETAIL,
            tick_interval: DEFAULT_TICK_INTERVAL,
            evict_interval: DEFAULT_EVICT_INTERVAL,
            drop_after: DEFAULT_DROP_AFTER,
        }
    }
}

impl AppConfig {
    pub fn from_ron (s: &str)->Result<Self> {
        let config: AppConfig = ron::from_str( s).context("malformed config")?;
        Ok(config)
    }

    pub fn load (path: &Path)->Result<Self> {
        let s = fs::read_to_string( path).with_context( || format!("failed to read config file {path:?}"))?;
        AppConfig::from_ron( &s).with_context( || format!("invalid config file {path:?}"))
    }

    pub fn validate (&self)->Result<()> {
        if !(MIN_ASPECT..=MAX_ASPECT).contains( &self.aspect) {
            bail!("aspect ratio must be between {MIN_ASPECT} and {MAX_ASPECT}: {}", self.aspect)
        }
        if !(MIN_HIGHWAY_DETAIL..=MAX_HIGHWAY_DETAIL).contains( &self.highway_detail) {
            bail!("highway detail level must be between {MIN_HIGHWAY_DETAIL} and {MAX_HIGHWAY_DETAIL}: {}", self.highway_detail)
        }
        if !(self.radius_miles.is_finite() && self.radius_miles > 0.0) {
            bail!("radius must be positive: {}", self.radius_miles)
        }
        self.zoom_limits.validate()?;

        if self.tick_interval.is_zero() || self.evict_interval.is_zero() {
            bail!("tick and eviction intervals must not be zero")
        }
        Ok(())
    }

    /// the configured data dir, or the user data dir if there is a $HOME
    pub fn resolve_data_dir (&self)->PathBuf {
        if let Some(dir) = &self.data_dir {
            dir.clone()
        } else if let Ok(home) = env::var("HOME") {
            Path::new( &home).join( USER_DATA_DIR)
        } else {
            PathBuf::from( LOCAL_DATA_DIR)
        }
    }
}

/// command line options. Options that are given override the respective config values
#[derive(Parser,Debug)]
#[command(version, about = "terminal based ADS-B aircraft map", long_about = None)]
pub struct CliArgs {
    /// connect to a running dump1090 at host:port instead of starting a local one (e.g. 192.168.1.100:30003)
    #[arg(short, long)]
    pub network: Option<String>,

    /// directory with map data (default: ~/.tui1090/data)
    #[arg(short, long)]
    pub cache: Option<PathBuf>,

    /// write a debug log to this file
    #[arg(short, long)]
    pub debug_log: Option<PathBuf>,

    /// map radius in miles
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// character cell aspect ratio, adjust for font (1.0-4.0)
    #[arg(short, long)]
    pub aspect: Option<f64>,

    /// highway detail level, lower shows fewer roads (1-10)
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub highway_detail: Option<u8>,

    /// RON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// the config file (or default) with our overrides applied and validated
    pub fn app_config (&self)->Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load( path)?,
            None => AppConfig::default()
        };
        self.apply_to( &mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_to (&self, config: &mut AppConfig) {
        if let Some(addr) = &self.network { config.source = SbsSource::Network( addr.clone()) }
        if let Some(dir) = &self.cache { config.data_dir = Some( dir.clone()) }
        if let Some(r) = self.radius { config.radius_miles = r }
        if let Some(a) = self.aspect { config.aspect = a }
        if let Some(h) = self.highway_detail { config.highway_detail = h }
    }
}
