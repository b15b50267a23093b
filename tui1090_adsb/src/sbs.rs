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

//! decoder for the SBS-1 (BaseStation) text format that is served by dump1090 on port 30003
//!
//! Message examples:
//! ```text
//!  MSG,1,111,11111,AA2BC2,111111,2016/03/11,13:07:16.663,2016/03/11,13:07:16.626,UAL814  ,,,,,,,,,,,0
//!  MSG,3,111,11111,A04424,111111,2016/03/11,13:07:05.343,2016/03/11,13:07:05.288,,11025,,,37.17274,-122.03935,,,,,,0
//!  MSG,4,111,11111,AC1FCC,111111,2016/03/11,13:07:07.777,2016/03/11,13:07:07.713,,,316,106,,,1536,,,,,0
//! ```
//!
//! relevant fields (zero based):
//! ```text
//!   0: message type (MSG, SEL, ID, AIR, STA, CLK) - we only process MSG
//!   1: transmission type (1-8)
//!   4: ICAO 24 bit address
//!  10: callsign
//!  11: mode-C altitude [ft]
//!  12: ground speed [kts]
//!  13: track over ground [deg]
//!  14: latitude [deg]
//!  15: longitude [deg]
//!  16: vertical rate [ft/min]
//! ```
//! Date/time fields are in the local timezone of the receiver. We don't rely on them and use the
//! time of reception instead.

use std::str::FromStr;
use tui1090_common::{datetime::EpochMillis, geo::GeoPoint};
use crate::{adsb::PositionReport, errors::{AdsbError,Result,parse_error}};

/// minimum number of comma separated fields of a valid MSG line
pub const SBS_FIELD_COUNT: usize = 22;

/// decode a single SBS line received at `timestamp`.
/// Returns `Ok(None)` for lines we ignore (empty or non-MSG), and an error for malformed MSG lines.
/// Unparsable values in optional fields are treated as absent
pub fn parse_msg (line: &str, timestamp: EpochMillis)->Result<Option<PositionReport>> {
    let line = line.trim();
    if line.is_empty() || !line.starts_with("MSG") {
        return Ok(None)
    }

    let fields = SbsFields::new( line);
    if fields.len() < SBS_FIELD_COUNT {
        return Err( parse_error!("insufficient number of fields ({}) in: {}", fields.len(), line))
    }
    if fields.raw(0) != "MSG" {
        return Ok(None)
    }

    let icao24 = fields.raw(4);
    if icao24.is_empty() {
        return Err( parse_error!("missing icao24 in: {}", line))
    }

    let mut report = PositionReport::new( icao24.to_uppercase(), timestamp);

    let cs = fields.raw(10);
    if !cs.is_empty() { report.callsign = Some(cs.to_string()) }

    // some decoders report fractional values for fields dump1090 sends as integers
    report.altitude = fields.value::<f64>(11).map( |v| v.round() as i64);
    report.groundspeed = fields.value::<f64>(12);

    // SBS only has track. We also use it as heading for sources that don't distinguish
    report.track = fields.value::<f64>(13);
    report.heading = report.track;

    if let (Some(lat), Some(lon)) = (fields.value::<f64>(14), fields.value::<f64>(15)) {
        report.position = Some( GeoPoint::from_lat_lon_degrees( lat, lon));
    }

    report.vertical_rate = fields.value::<f64>(16).map( |v| v.round() as i64);

    Ok( Some(report) )
}

struct SbsFields<'a> {
    fields: Vec<&'a str>
}

impl<'a> SbsFields<'a> {
    fn new (line: &'a str)->Self {
        SbsFields { fields: line.split(',').map( str::trim).collect() }
    }

    fn len (&self)->usize { self.fields.len() }

    fn raw (&self, idx: usize)->&'a str {
        self.fields.get(idx).copied().unwrap_or("")
    }

    fn value<T: FromStr> (&self, idx: usize)->Option<T> {
        let s = self.raw(idx);
        if s.is_empty() { None } else { s.parse::<T>().ok() }
    }
}
