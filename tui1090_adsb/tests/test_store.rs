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

use std::{sync::Arc, thread, time::Duration};
use tui1090_common::{angle::CompassOctant, datetime::{EpochMillis, secs, millis}};
use tui1090_adsb::{Aircraft, AircraftStore, DEFAULT_DROP_AFTER, adsb::PositionReport};

// run with "cargo test -p tui1090_adsb test_store -- --nocapture"

// uom stores SI values, so converting back to knots/feet is not exact
fn is_close (v: Option<f64>, expected: f64)->bool {
    v.map( |v| (v - expected).abs() < 1e-6).unwrap_or(false)
}

#[test]
fn test_store_merge_scenario() {
    let store = AircraftStore::default();
    let t0 = EpochMillis::from_secs(1_700_000_000);

    store.upsert( &PositionReport::new("A", t0).with_callsign("X1").with_groundspeed(300.0));
    store.upsert( &PositionReport::new("A", t0 + secs(1)).with_position(37.0, -122.0));
    store.upsert( &PositionReport::new("A", t0 + secs(2)).with_groundspeed(0.0));

    let ac = store.get("A").unwrap();
    println!("{ac}");
    assert_eq!( ac.callsign.as_deref(), Some("X1"));
    assert!( is_close( ac.groundspeed_kts(), 300.0));
    assert!( ac.is_locked());
    assert_eq!( ac.position.unwrap().latitude_degrees(), 37.0);
    assert_eq!( ac.last_update, t0 + secs(2));
    assert_eq!( store.len(), 1);
}

#[test]
fn test_empty_key_is_noop() {
    let store = AircraftStore::default();
    assert!( !store.upsert( &PositionReport::new("", EpochMillis::now()).with_altitude(1000)));
    assert!( !store.upsert( &PositionReport::new("  ", EpochMillis::now()).with_altitude(1000)));
    assert!( store.is_empty());
}

#[test]
fn test_merge_idempotence() {
    let t0 = EpochMillis::from_secs(1000);
    let r = PositionReport::new("ABC123", t0)
        .with_callsign("SWA1").with_position(36.0, -120.0).with_altitude(12000)
        .with_groundspeed(250.0).with_track(90.0).with_vertical_rate(-500);

    let once = AircraftStore::default();
    once.upsert( &r);

    let twice = AircraftStore::default();
    twice.upsert( &r);
    twice.upsert( &r);

    assert_eq!( once.snapshot(), twice.snapshot());
}

#[test]
fn test_last_non_null_wins() {
    let store = AircraftStore::default();
    let t0 = EpochMillis::from_secs(1000);

    store.upsert( &PositionReport::new("A1", t0).with_altitude(10000).with_track(45.0).with_callsign("N123"));
    store.upsert( &PositionReport::new("A1", t0 + secs(1)).with_altitude(0).with_track(0.0).with_callsign(""));
    store.upsert( &PositionReport::new("A1", t0 + secs(2)).with_altitude(11000));

    let ac = store.get("A1").unwrap();
    assert!( is_close( ac.altitude_ft(), 11000.0));
    assert_eq!( ac.flight_level(), 110);
    assert_eq!( ac.track.unwrap().degrees(), 45.0);
    assert_eq!( ac.callsign.as_deref(), Some("N123"));
}

#[test]
fn test_invalid_position_ignored() {
    let store = AircraftStore::default();
    store.upsert( &PositionReport::new("B1", EpochMillis::now()).with_position(95.0, 10.0));
    assert!( !store.get("B1").unwrap().is_locked());
}

#[test]
fn test_eviction_boundary() {
    let store = AircraftStore::new( DEFAULT_DROP_AFTER);
    let t = EpochMillis::from_secs(5000);
    store.upsert( &PositionReport::new("C1", t).with_position(40.0, -100.0));

    assert_eq!( store.evict_stale( t + secs(59)), 0);
    assert!( store.get("C1").is_some());

    // the threshold itself is already stale
    assert_eq!( store.evict_stale( t + secs(60)), 1);
    assert!( store.get("C1").is_none());

    store.upsert( &PositionReport::new("C2", t));
    assert_eq!( store.evict_stale( t + secs(61)), 1);
    assert!( store.is_empty());
}

#[test]
fn test_eviction_only_removes_stale() {
    let store = AircraftStore::new( secs(60));
    let t = EpochMillis::from_secs(5000);
    store.upsert( &PositionReport::new("OLD", t));
    store.upsert( &PositionReport::new("NEW", t + secs(30)));

    assert_eq!( store.evict_stale( t + secs(70)), 1);
    let remaining: Vec<String> = store.snapshot().iter().map( |ac| ac.icao24.to_string()).collect();
    assert_eq!( remaining, vec!["NEW".to_string()]);
}

#[test]
fn test_snapshot_order_and_first_locked() {
    let store = AircraftStore::default();
    let t = EpochMillis::now();
    store.upsert( &PositionReport::new("C00001", t).with_position(35.0, -118.0));
    store.upsert( &PositionReport::new("A00001", t).with_callsign("NOPOS"));
    store.upsert( &PositionReport::new("B00001", t).with_position(36.0, -119.0));

    let keys: Vec<String> = store.snapshot().iter().map( |ac| ac.icao24.to_string()).collect();
    assert_eq!( keys, vec!["A00001", "B00001", "C00001"]);

    let first = store.first_locked().unwrap();
    assert_eq!( first.icao24.as_str(), "B00001");

    store.clear();
    assert!( store.first_locked().is_none());
}

#[test]
fn test_aircraft_helpers() {
    let t = EpochMillis::from_secs(100);
    let mut ac = Aircraft::new( "ABCDEF".to_string(), t);
    assert_eq!( ac.display_name(), "ABCDEF");
    assert_eq!( ac.octant(), None);
    assert_eq!( ac.position_string(), "Position Unknown");
    assert_eq!( ac.list_display(), "( ) ABCDEF  FL0     0kts");

    PositionReport::new("ABCDEF", t)
        .with_callsign("UAL123").with_altitude(35000).with_groundspeed(450.4)
        .with_heading(270.0).with_position(37.7749, -122.4194)
        .update( &mut ac);

    println!("{ac}");
    assert_eq!( ac.display_name(), "UAL123");
    assert_eq!( ac.list_display(), "(+) UAL123  FL350 450kts");
    assert_eq!( ac.position_string(), "37.7749*N, 122.4194*W");
    assert_eq!( ac.octant(), Some(CompassOctant::W));

    // track has precedence over heading
    PositionReport::new("ABCDEF", t).with_track(10.0).update( &mut ac);
    assert_eq!( ac.octant(), Some(CompassOctant::N));

    assert_eq!( ac.secs_since_update( t + secs(42)), 42);
}

#[test]
fn test_concurrent_upserts() {
    let store = Arc::new( AircraftStore::default());
    let t0 = EpochMillis::now();

    let writers: Vec<_> = (0..4).map( |w| {
        let store = store.clone();
        thread::spawn( move || {
            for i in 0..500 {
                let icao24 = format!("{:06X}", i % 50);
                let r = PositionReport::new( icao24, t0 + millis(i as u64))
                    .with_altitude( 1000 + (w * 1000) as i64)
                    .with_position( 30.0 + w as f64, -100.0);
                store.upsert( &r);
            }
        })
    }).collect();

    let reader = {
        let store = store.clone();
        thread::spawn( move || {
            for _ in 0..200 {
                for ac in store.snapshot() {
                    // every visible entry is fully formed
                    assert!( ac.is_locked());
                    assert!( ac.altitude.is_some());
                }
            }
        })
    };

    for w in writers { w.join().unwrap(); }
    reader.join().unwrap();

    assert_eq!( store.len(), 50);
}

#[tokio::test]
async fn test_eviction_task() {
    use tokio_util::sync::CancellationToken;

    let store = Arc::new( AircraftStore::new( millis(50)));
    store.upsert( &PositionReport::new("D1", EpochMillis::now() - secs(1)));
    assert_eq!( store.len(), 1);

    let cancel = CancellationToken::new();
    let task = store.spawn_eviction_task( millis(20), cancel.clone());

    tokio::time::sleep( millis(150)).await;
    assert!( store.is_empty());

    cancel.cancel();
    task.await.unwrap();
}

#[test]
fn test_position_speed_scenario() {
    let store = AircraftStore::default();
    let t0 = EpochMillis::now();

    store.upsert( &PositionReport::new("A1", t0).with_position(40.0, -100.0));
    store.upsert( &PositionReport::new("A1", t0 + millis(100)).with_groundspeed(300.0));
    store.upsert( &PositionReport::new("A1", t0 + millis(200)).with_position(40.1, -100.1));

    let snap = store.snapshot();
    assert_eq!( snap.len(), 1);
    let ac = &snap[0];
    println!("{ac}");
    assert_eq!( ac.icao24.as_str(), "A1");
    assert_eq!( ac.position.unwrap().latitude_degrees(), 40.1);
    assert_eq!( ac.position.unwrap().longitude_degrees(), -100.1);
    assert!( is_close( ac.groundspeed_kts(), 300.0));
}

#[test]
fn test_zero_speed_keeps_previous() {
    let store = AircraftStore::default();
    let t0 = EpochMillis::now();
    store.upsert( &PositionReport::new("S1", t0).with_groundspeed(200.0));
    store.upsert( &PositionReport::new("S1", t0).with_groundspeed(0.0));
    assert!( is_close( store.get("S1").unwrap().groundspeed_kts(), 200.0));
}
