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

use std::{fs, io, path::{Path, PathBuf}};
use serde::{Serialize,Deserialize};
use geojson::{GeoJson, Geometry, Value, JsonValue};
use tracing::{debug, info, warn};
use tui1090_common::geo::GeoPoint;
use crate::{errors::{MapError, Result}, features::{FeatureIndex, FeatureType, GeoFeature}};

/// file names of the map layers within the data directory. Line and place layers are Natural Earth
/// GeoJSON exports, airports come from the OurAirports `airports.csv`
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct DatasetFiles {
    pub coastline: String,
    pub rivers: String,
    pub state_borders: String,
    pub highways: String,
    pub cities: String,
    pub airports: String,
}

impl Default for DatasetFiles {
    fn default()->Self {
        DatasetFiles {
            coastline: "ne_50m_coastline.geojson".into(),
            rivers: "ne_50m_rivers_lake_centerlines.geojson".into(),
            state_borders: "ne_50m_admin_1_states_provinces.geojson".into(),
            highways: "ne_10m_roads_north_america.geojson".into(),
            cities: "ne_50m_populated_places.geojson".into(),
            airports: "airports.csv".into(),
        }
    }
}

impl DatasetFiles {
    pub fn file_for (&self, ftype: FeatureType)->&str {
        match ftype {
            FeatureType::Coastline => &self.coastline,
            FeatureType::River => &self.rivers,
            FeatureType::StateBorder => &self.state_borders,
            FeatureType::Highway => &self.highways,
            FeatureType::City => &self.cities,
            FeatureType::Airport => &self.airports,
        }
    }
}

/// highway detail level range (max Natural Earth road scalerank we show)
pub const MIN_HIGHWAY_DETAIL: u8 = 1;
pub const MAX_HIGHWAY_DETAIL: u8 = 10;

/// load all layers from `data_dir`. This never fails, a layer that can't be loaded is logged and stays empty
pub fn load_features (data_dir: &Path, files: &DatasetFiles, highway_detail: u8)->FeatureIndex {
    let mut index = FeatureIndex::new();

    for ftype in FeatureType::ALL {
        let path = data_dir.join( files.file_for( ftype));
        let res = match ftype {
            FeatureType::Airport => load_airports( &path),
            FeatureType::Highway => load_geojson_layer( &path, ftype, Some(highway_detail)),
            _ => load_geojson_layer( &path, ftype, None),
        };

        let features = match res {
            Ok(features) => {
                info!("loaded {} {} features from {:?}", features.len(), ftype, path);
                features
            }
            Err(e) => {
                warn!("no {} features: failed to load {:?}: {}", ftype, path, e);
                Vec::new()
            }
        };
        index = index.with_layer( ftype, features);
    }

    index
}

//--- GeoJSON

/// read a GeoJSON file and convert its geometries into features of type `ftype`.
/// If `max_scalerank` is set, features with a larger `scalerank` property are skipped
pub fn load_geojson_layer (path: &Path, ftype: FeatureType, max_scalerank: Option<u8>)->Result<Vec<GeoFeature>> {
    let s = fs::read_to_string( path)?;
    parse_geojson_layer( &s, ftype, max_scalerank)
}

pub fn parse_geojson_layer (s: &str, ftype: FeatureType, max_scalerank: Option<u8>)->Result<Vec<GeoFeature>> {
    let mut features = Vec::new();

    match s.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => {
            for f in &fc.features {
                if let Some(max) = max_scalerank {
                    if let Some(rank) = f.property("scalerank").and_then( JsonValue::as_f64) {
                        if rank > max as f64 { continue }
                    }
                }
                if let Some(geom) = &f.geometry {
                    add_geometry( &mut features, ftype, geom, feature_name( f));
                }
            }
        }
        GeoJson::Feature(f) => {
            if let Some(geom) = &f.geometry { add_geometry( &mut features, ftype, geom, feature_name( &f)) }
        }
        GeoJson::Geometry(geom) => add_geometry( &mut features, ftype, &geom, None)
    }

    Ok(features)
}

const NAME_PROPERTIES: [&'static str;5] = ["NAME", "NAMEASCII", "NAME_EN", "name", "name_en"];

fn feature_name (f: &geojson::Feature)->Option<String> {
    NAME_PROPERTIES.iter()
        .filter_map( |key| f.property(key).and_then( JsonValue::as_str))
        .map( str::trim)
        .find( |s| !s.is_empty())
        .map( String::from)
}

fn add_geometry (features: &mut Vec<GeoFeature>, ftype: FeatureType, geom: &Geometry, name: Option<String>) {
    match &geom.value {
        Value::Point(pos) => {
            if let Some(p) = to_geo_point( pos) {
                features.push( GeoFeature::point( ftype, p, name));
            }
        }
        Value::MultiPoint(positions) => {
            for pos in positions {
                if let Some(p) = to_geo_point( pos) { features.push( GeoFeature::point( ftype, p, name.clone())) }
            }
        }
        Value::LineString(line) => add_polyline( features, ftype, line),
        Value::MultiLineString(lines) => {
            for line in lines { add_polyline( features, ftype, line) }
        }
        // we only draw outlines, each ring becomes a polyline
        Value::Polygon(rings) => {
            for ring in rings { add_polyline( features, ftype, ring) }
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                for ring in rings { add_polyline( features, ftype, ring) }
            }
        }
        Value::GeometryCollection(geoms) => {
            for g in geoms { add_geometry( features, ftype, g, name.clone()) }
        }
    }
}

fn add_polyline (features: &mut Vec<GeoFeature>, ftype: FeatureType, positions: &[Vec<f64>]) {
    let points: Vec<GeoPoint> = positions.iter().filter_map( |pos| to_geo_point(pos)).collect();
    if let Some(f) = GeoFeature::polyline( ftype, points) {
        features.push(f);
    }
}

// GeoJSON positions are [lon, lat, (alt)]
fn to_geo_point (pos: &[f64])->Option<GeoPoint> {
    if pos.len() >= 2 {
        let p = GeoPoint::from_lat_lon_degrees( pos[1], pos[0]);
        if p.is_valid() { Some(p) } else { None }
    } else {
        None
    }
}

//--- OurAirports CSV

const AIRPORT_COLUMNS: [&'static str;6] = ["type", "name", "latitude_deg", "longitude_deg", "iata_code", "ident"];

#[derive(Debug,Deserialize)]
struct RawAirport {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
    iata_code: String,
    ident: String,
}

impl RawAirport {
    fn is_relevant (&self)->bool {
        self.kind == "medium_airport" || self.kind == "large_airport"
    }

    // IATA code if there is one, ICAO ident otherwise, and the full name as a last resort
    fn label (&self)->String {
        [ &self.iata_code, &self.ident, &self.name ].iter()
            .map( |s| s.trim())
            .find( |s| !s.is_empty())
            .unwrap_or("")
            .to_string()
    }
}

pub fn load_airports (path: &Path)->Result<Vec<GeoFeature>> {
    let file = fs::File::open( path)?;
    read_airports( io::BufReader::new( file))
}

/// read medium and large airports from OurAirports CSV data. Rows that can't be parsed are skipped
pub fn read_airports (reader: impl io::Read)->Result<Vec<GeoFeature>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader( reader);

    let headers = csv_reader.headers()?.clone();
    for col in AIRPORT_COLUMNS {
        if !headers.iter().any( |h| h == col) {
            return Err( MapError::MissingColumn( col.to_string()))
        }
    }

    let mut airports = Vec::new();
    let mut n_skipped = 0;

    for res in csv_reader.deserialize::<RawAirport>() {
        match res {
            Ok(raw) => {
                if raw.is_relevant() {
                    let p = GeoPoint::from_lat_lon_degrees( raw.latitude_deg, raw.longitude_deg);
                    if p.is_valid() {
                        airports.push( GeoFeature::point( FeatureType::Airport, p, Some(raw.label())));
                    }
                }
            }
            Err(_) => n_skipped += 1
        }
    }

    if n_skipped > 0 { debug!("skipped {} malformed airport records", n_skipped) }
    Ok(airports)
}
