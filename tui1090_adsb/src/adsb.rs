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

use std::fmt;
use uom::si::{f64::{Length, Velocity}, length::foot, velocity::{foot_per_minute, knot}};
use tui1090_common::{angle::Angle360, datetime::EpochMillis, geo::GeoPoint};

use crate::Aircraft;

/// a decoded (partial) state update for a single aircraft. Each field that is `None` was not part of the
/// received message. Units are the ones used on the wire: feet, knots, degrees and feet per minute
#[derive(Debug,Clone,PartialEq,Default)]
pub struct PositionReport {
    pub icao24: String,
    pub callsign: Option<String>,
    pub position: Option<GeoPoint>,
    pub altitude: Option<i64>,
    pub groundspeed: Option<f64>,
    pub track: Option<f64>,
    pub heading: Option<f64>,
    pub vertical_rate: Option<i64>,
    pub timestamp: EpochMillis,
}

impl PositionReport {
    pub fn new (icao24: impl ToString, timestamp: EpochMillis)->Self {
        PositionReport { icao24: icao24.to_string(), timestamp, ..Default::default() }
    }

    // builder style setters, mostly used by tests and tools

    pub fn with_callsign (mut self, cs: &str)->Self { self.callsign = Some(cs.to_string()); self }
    pub fn with_position (mut self, lat: f64, lon: f64)->Self { self.position = Some( GeoPoint::from_lat_lon_degrees(lat,lon)); self }
    pub fn with_altitude (mut self, ft: i64)->Self { self.altitude = Some(ft); self }
    pub fn with_groundspeed (mut self, kts: f64)->Self { self.groundspeed = Some(kts); self }
    pub fn with_track (mut self, deg: f64)->Self { self.track = Some(deg); self }
    pub fn with_heading (mut self, deg: f64)->Self { self.heading = Some(deg); self }
    pub fn with_vertical_rate (mut self, fpm: i64)->Self { self.vertical_rate = Some(fpm); self }

    /// merge into an existing aircraft. A field only overwrites the stored value if it is present and not
    /// zero/empty. Zero is how SBS sources encode "not known" for most fields, hence an aircraft that really
    /// reports 0ft or a due north track keeps its previous value. Positions are taken as is unless they are
    /// out of range.
    /// The last update time is always set, which keeps the aircraft alive as long as we receive anything from it
    pub fn update (&self, ac: &mut Aircraft) {
        ac.last_update = self.timestamp;

        if let Some(cs) = non_empty( &self.callsign) { ac.callsign = Some(cs.to_string()) }
        if let Some(pos) = self.position.filter( GeoPoint::is_valid) { ac.position = Some(pos) }
        if let Some(alt) = non_zero_i64( self.altitude) { ac.altitude = Some( Length::new::<foot>( alt as f64)) }
        if let Some(gs) = non_zero_f64( self.groundspeed) { ac.groundspeed = Some( Velocity::new::<knot>( gs)) }
        if let Some(vr) = non_zero_i64( self.vertical_rate) { ac.vertical_rate = Some( Velocity::new::<foot_per_minute>( vr as f64)) }
        if let Some(trk) = non_zero_f64( self.track) { ac.track = Some( Angle360::from_degrees( trk)) }
        if let Some(hdg) = non_zero_f64( self.heading) { ac.hdg = Some( Angle360::from_degrees( hdg)) }
    }
}

impl fmt::Display for PositionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "PositionReport( icao24: {}", self.icao24)?;
        if let Some(cs) = &self.callsign { write!( f, ", cs: \"{cs}\"")?; }
        if let Some(p) = &self.position { write!( f, ", pos: {p}")?; }
        if let Some(alt) = self.altitude { write!( f, ", alt: {alt}")?; }
        if let Some(gs) = self.groundspeed { write!( f, ", spd: {gs:.0}")?; }
        if let Some(trk) = self.track { write!( f, ", trk: {trk:.0}")?; }
        if let Some(hdg) = self.heading { write!( f, ", hdg: {hdg:.0}")?; }
        if let Some(vr) = self.vertical_rate { write!( f, ", vr: {vr}")?; }
        write!( f, ", time: {})", self.timestamp)
    }
}

fn non_empty (s: &Option<String>)->Option<&str> {
    s.as_deref().map( str::trim).filter( |s| !s.is_empty())
}

fn non_zero_i64 (v: Option<i64>)->Option<i64> { v.filter( |v| *v != 0) }

fn non_zero_f64 (v: Option<f64>)->Option<f64> { v.filter( |v| *v != 0.0 && v.is_finite()) }
