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

use std::{path::PathBuf, time::Duration};
use clap::Parser;
use tui1090_adsb::connector::SbsSource;
use tui1090_map::cache::OURAIRPORTS_URL;
use tui1090_app::{AppConfig, CliArgs, config::{DEFAULT_RADIUS_MILES, USER_DATA_DIR}};

// run with "cargo test -p tui1090_app test_config -- --nocapture"

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    println!("{config:#?}");

    assert!( config.validate().is_ok());
    assert_eq!( config.radius_miles, DEFAULT_RADIUS_MILES);
    assert_eq!( config.aspect, 2.0);
    assert_eq!( config.highway_detail, 4);
    assert_eq!( config.tick_interval, Duration::from_millis(100));
    assert_eq!( config.evict_interval, Duration::from_secs(10));
    assert_eq!( config.drop_after, Duration::from_secs(60));
    assert_eq!( config.zoom_limits.min_radius_miles, 10.0);
    assert_eq!( config.zoom_limits.max_radius_miles, 1000.0);
    assert_eq!( config.source, SbsSource::local_dump1090());
}

#[test]
fn test_ron_config() {
    let s = r#"
        AppConfig(
            source: Network("192.168.1.100:30003"),
            data_dir: Some("/opt/tui1090/data"),
            radius_miles: 80.0,
            zoom_limits: ( min_radius_miles: 5.0, max_radius_miles: 500.0 ),
            drop_after: ( secs: 120, nanos: 0 ),
            data_urls: ( natural_earth: "http://mirror.local/ne" ),
        )
    "#;
    let config = AppConfig::from_ron( s).unwrap();
    println!("{config:#?}");

    assert_eq!( config.source, SbsSource::Network("192.168.1.100:30003".into()));
    assert_eq!( config.resolve_data_dir(), PathBuf::from("/opt/tui1090/data"));
    assert_eq!( config.radius_miles, 80.0);
    assert_eq!( config.zoom_limits.max_radius_miles, 500.0);
    assert_eq!( config.drop_after, Duration::from_secs(120));
    assert_eq!( config.data_urls.natural_earth, "http://mirror.local/ne");
    assert_eq!( config.data_urls.airports, OURAIRPORTS_URL);

    // everything not given keeps its default
    assert_eq!( config.aspect, 2.0);
    assert_eq!( config.evict_interval, Duration::from_secs(10));
    assert_eq!( config.datasets.airports, "airports.csv");
    assert!( config.validate().is_ok());

    let config = AppConfig::from_ron(r#"( source: Local( command: "/usr/local/bin/dump1090", args: ["--net"], port: 30005 ) )"#).unwrap();
    assert_eq!( config.source, SbsSource::Local { command: "/usr/local/bin/dump1090".into(), args: vec!["--net".into()], port: 30005 });

    assert!( AppConfig::from_ron("( radius_miles: \"far\" )").is_err());
}

#[test]
fn test_config_validation() {
    let mut config = AppConfig::default();
    config.aspect = 4.5;
    assert!( config.validate().is_err());

    let mut config = AppConfig::default();
    config.highway_detail = 0;
    assert!( config.validate().is_err());

    let mut config = AppConfig::default();
    config.radius_miles = -1.0;
    assert!( config.validate().is_err());

    let mut config = AppConfig::default();
    config.zoom_limits.min_radius_miles = 2000.0;
    assert!( config.validate().is_err());

    let mut config = AppConfig::default();
    config.tick_interval = Duration::ZERO;
    assert!( config.validate().is_err());
}

#[test]
fn test_cli_overrides() {
    let args = CliArgs::try_parse_from(["tui1090", "-n", "10.0.0.5:30003", "-c", "/tmp/mapdata", "-r", "75", "-a", "2.5", "-H", "7"]).unwrap();
    let config = args.app_config().unwrap();

    assert_eq!( config.source, SbsSource::Network("10.0.0.5:30003".into()));
    assert_eq!( config.resolve_data_dir(), PathBuf::from("/tmp/mapdata"));
    assert_eq!( config.radius_miles, 75.0);
    assert_eq!( config.aspect, 2.5);
    assert_eq!( config.highway_detail, 7);
    assert!( args.debug_log.is_none());

    let args = CliArgs::try_parse_from(["tui1090", "--debug-log", "debug.log"]).unwrap();
    assert_eq!( args.debug_log, Some(PathBuf::from("debug.log")));
    assert_eq!( args.app_config().unwrap(), AppConfig::default());

    // out of range values
    assert!( CliArgs::try_parse_from(["tui1090", "-H", "11"]).is_err());
    let args = CliArgs::try_parse_from(["tui1090", "-a", "0.5"]).unwrap();
    assert!( args.app_config().is_err());

    // missing config file
    let args = CliArgs::try_parse_from(["tui1090", "--config", "/does/not/exist.ron"]).unwrap();
    assert!( args.app_config().is_err());
}

#[test]
fn test_config_file() {
    let path = std::env::temp_dir().join( format!("tui1090_config_{}.ron", std::process::id()));
    std::fs::write( &path, "( radius_miles: 42.0, highway_detail: 2 )").unwrap();

    let args = CliArgs::try_parse_from(["tui1090", "--config", path.to_str().unwrap(), "-r", "60"]).unwrap();
    let config = args.app_config().unwrap();
    assert_eq!( config.radius_miles, 60.0); // command line wins
    assert_eq!( config.highway_detail, 2);

    std::fs::remove_file( &path).ok();
}

#[test]
fn test_default_data_dir() {
    let config = AppConfig::default();
    let dir = config.resolve_data_dir();
    println!("data dir: {dir:?}");
    assert!( dir.ends_with( USER_DATA_DIR) || dir == PathBuf::from("data"));
}
