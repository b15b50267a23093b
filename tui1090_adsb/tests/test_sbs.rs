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

use tui1090_common::datetime::EpochMillis;
use tui1090_adsb::{adsb::PositionReport, sbs::parse_msg};

//--- test data (dump1090 SBS output)

const MSG_1: &'static str = "MSG,1,111,11111,AA2BC2,111111,2016/03/11,13:07:16.663,2016/03/11,13:07:16.626,UAL814  ,,,,,,,,,,,0";
const MSG_3: &'static str = "MSG,3,111,11111,A04424,111111,2016/03/11,13:07:05.343,2016/03/11,13:07:05.288,,11025,,,37.17274,-122.03935,,,,,,0";
const MSG_4: &'static str = "MSG,4,111,11111,AC1FCC,111111,2016/03/11,13:07:07.777,2016/03/11,13:07:07.713,,,316,106,,,1536,,,,,0";
const MSG_5: &'static str = "MSG,5,111,11111,A12345,111111,2016/03/11,13:07:07.777,2016/03/11,13:07:07.713,,35000,,,,,,,0,,0,0";

const STA: &'static str = "STA,,5,179,400AE7,10103,2008/11/28,14:58:51.153,2008/11/28,14:58:51.153,RM";
const SHORT_MSG: &'static str = "MSG,3,111,11111,A04424,111111";
const NO_ICAO: &'static str = "MSG,3,111,11111,,111111,2016/03/11,13:07:05.343,2016/03/11,13:07:05.288,,11025,,,37.17274,-122.03935,,,,,,0";
const GARBAGE_FIELDS: &'static str = "MSG,4,111,11111,AC1FCC,111111,2016/03/11,13:07:07.777,2016/03/11,13:07:07.713,,,fast,north,,,up,,,,,0";

// run with "cargo test -p tui1090_adsb test_parse -- --nocapture"

#[test]
fn test_parse_identification() {
    let ts = EpochMillis::from_secs(1000);
    let report = parse_msg( MSG_1, ts).unwrap().unwrap();
    println!("{report}");

    assert_eq!( report.icao24, "AA2BC2");
    assert_eq!( report.callsign.as_deref(), Some("UAL814"));
    assert_eq!( report.timestamp, ts);
    assert!( report.position.is_none());
    assert!( report.altitude.is_none());
}

#[test]
fn test_parse_airborne_position() {
    let report = parse_msg( MSG_3, EpochMillis::now()).unwrap().unwrap();
    println!("{report}");

    assert_eq!( report.icao24, "A04424");
    assert_eq!( report.altitude, Some(11025));
    let pos = report.position.unwrap();
    assert_eq!( pos.latitude_degrees(), 37.17274);
    assert_eq!( pos.longitude_degrees(), -122.03935);
    assert!( report.callsign.is_none());
}

#[test]
fn test_parse_airborne_velocity() {
    let report = parse_msg( MSG_4, EpochMillis::now()).unwrap().unwrap();
    println!("{report}");

    assert_eq!( report.groundspeed, Some(316.0));
    assert_eq!( report.track, Some(106.0));
    assert_eq!( report.heading, Some(106.0));
    assert_eq!( report.vertical_rate, Some(1536));
    assert!( report.position.is_none());
}

#[test]
fn test_parse_surveillance_alt() {
    let report = parse_msg( MSG_5, EpochMillis::now()).unwrap().unwrap();
    assert_eq!( report.altitude, Some(35000));
    assert!( report.groundspeed.is_none());
}

#[test]
fn test_ignored_lines() {
    assert_eq!( parse_msg( "", EpochMillis::now()).unwrap(), None);
    assert_eq!( parse_msg( "   \r", EpochMillis::now()).unwrap(), None);
    assert_eq!( parse_msg( STA, EpochMillis::now()).unwrap(), None);
}

#[test]
fn test_malformed_lines() {
    let res = parse_msg( SHORT_MSG, EpochMillis::now());
    println!("{res:?}");
    assert!( res.is_err());

    assert!( parse_msg( NO_ICAO, EpochMillis::now()).is_err());
}

#[test]
fn test_unparsable_fields_are_absent() {
    let report = parse_msg( GARBAGE_FIELDS, EpochMillis::now()).unwrap().unwrap();
    assert_eq!( report.icao24, "AC1FCC");
    assert!( report.groundspeed.is_none());
    assert!( report.track.is_none());
    assert!( report.vertical_rate.is_none());
}

#[test]
fn test_crlf_line() {
    let line = format!("{MSG_3}\r\n");
    let report = parse_msg( &line, EpochMillis::now()).unwrap().unwrap();
    assert!( report.position.is_some());
}
