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

//! the local map data cache. Missing layers are downloaded into the data directory on startup, files
//! that are already there are never touched. Every layer is optional, a failed download only means the
//! respective layer stays empty

use std::{fs::{self, File}, io::Write, path::{Path, PathBuf}, time::Duration};
use reqwest::{Client, StatusCode};
use serde::{Serialize,Deserialize};
use tracing::{debug, info, warn};
use crate::{
    errors::{MapError, Result, download_error},
    features::FeatureType,
    loader::DatasetFiles,
};

/// GeoJSON exports of the Natural Earth vector data
pub const NATURAL_EARTH_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson";
pub const OURAIRPORTS_URL: &str = "https://davidmegginson.github.io/ourairports-data/airports.csv";

const USER_AGENT: &str = concat!("tui1090/", env!("CARGO_PKG_VERSION"));
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// where we get the layer files from. The Natural Earth URL is a directory that contains the configured
/// GeoJSON file names, the airports URL is the complete file URL
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct DataUrls {
    pub natural_earth: String,
    pub airports: String,
}

impl Default for DataUrls {
    fn default()->Self {
        DataUrls { natural_earth: NATURAL_EARTH_URL.to_string(), airports: OURAIRPORTS_URL.to_string() }
    }
}

impl DataUrls {
    pub fn url_for (&self, files: &DatasetFiles, ftype: FeatureType)->String {
        match ftype {
            FeatureType::Airport => self.airports.clone(),
            _ => format!("{}/{}", self.natural_earth.trim_end_matches('/'), files.file_for( ftype))
        }
    }
}

/// what `ensure_data` did for each layer
#[derive(Debug,Clone,Default,PartialEq)]
pub struct CacheReport {
    pub present: Vec<FeatureType>,
    pub downloaded: Vec<(FeatureType,u64)>,
    pub failed: Vec<(FeatureType,String)>,
}

impl CacheReport {
    pub fn is_complete (&self)->bool { self.failed.is_empty() }
}

pub fn http_client ()->Result<Client> {
    Ok( Client::builder().user_agent( USER_AGENT).timeout( DOWNLOAD_TIMEOUT).build()? )
}

/// make sure the data dir exists and download all layer files it does not have yet.
/// Only a data dir that can't be created is an error, failed downloads are reported per layer
pub async fn ensure_data (client: &Client, data_dir: &Path, files: &DatasetFiles, urls: &DataUrls)->Result<CacheReport> {
    fs::create_dir_all( data_dir)?;
    let mut report = CacheReport::default();

    for ftype in FeatureType::ALL {
        let path = data_dir.join( files.file_for( ftype));
        if path.is_file() {
            debug!("{} data already cached in {:?}", ftype, path);
            report.present.push( ftype);
            continue
        }

        let url = urls.url_for( files, ftype);
        info!("downloading {} data from {}", ftype, url);
        match download_url( client, &url, &path).await {
            Ok(len) => {
                info!("downloaded {} bytes of {} data to {:?}", len, ftype, path);
                report.downloaded.push( (ftype,len));
            }
            Err(e) => {
                warn!("skipping {} data: {}", ftype, e);
                report.failed.push( (ftype, e.to_string()));
            }
        }
    }

    Ok(report)
}

/// fetch `url` in chunks into `path`. The data goes into a temporary file first so that an interrupted
/// download never leaves a partial layer file behind. Returns the number of bytes written
pub async fn download_url (client: &Client, url: &str, path: &Path)->Result<u64> {
    let mut response = client.get( url).send().await?;

    match response.status() {
        StatusCode::OK => {
            let tmp_path = partial_path( path);
            let res = write_chunks( &mut response, &tmp_path).await;
            match res {
                Ok(len) => {
                    fs::rename( &tmp_path, path)?;
                    Ok(len)
                }
                Err(e) => {
                    fs::remove_file( &tmp_path).ok();
                    Err(e)
                }
            }
        }
        StatusCode::NOT_FOUND => Err( download_error!("not found {}", url)),
        other => Err( download_error!("response status {:?} for {}", other, url))
    }
}

async fn write_chunks (response: &mut reqwest::Response, path: &Path)->Result<u64> {
    let mut file = File::create( path)?;
    let mut len: u64 = 0;

    while let Some(chunk) = response.chunk().await? {
        len += chunk.len() as u64;
        file.write_all( &chunk)?;
    }
    file.flush()?;
    Ok(len)
}

fn partial_path (path: &Path)->PathBuf {
    let mut name = path.file_name().map( |s| s.to_os_string()).unwrap_or_default();
    name.push(".part");
    path.with_file_name( name)
}
