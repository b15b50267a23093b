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

use std::{collections::BTreeMap, fmt, sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard}, time::Duration};
use uom::si::{length::foot, velocity::{knot,foot_per_minute}, f64::{Length,Velocity}};
use tokio::{task::JoinHandle, time::{interval, MissedTickBehavior}};
use tokio_util::sync::CancellationToken;
use tracing::{debug,info};
use tui1090_common::{angle::{Angle360,CompassOctant}, datetime::{self,EpochMillis}, geo::GeoPoint};

pub mod errors;

pub mod adsb;
use adsb::PositionReport;

pub mod sbs;
pub mod connector;

/// age after which an aircraft without updates is considered stale
pub const DEFAULT_DROP_AFTER: Duration = Duration::from_secs(60);

/// interval in which the background task sweeps stale aircraft
pub const DEFAULT_EVICT_INTERVAL: Duration = Duration::from_secs(10);

/// the concurrently accessed aircraft map keyed by ICAO 24 bit address.
/// The connector task is the (only) writer, the UI and the eviction task read and remove.
/// All accessors return owned copies so that no caller holds the lock while rendering.
pub struct AircraftStore {
    aircraft: RwLock<BTreeMap<String,Aircraft>>,
    drop_after: Duration,
}

impl AircraftStore {
    pub fn new (drop_after: Duration)->Self {
        AircraftStore { aircraft: RwLock::new( BTreeMap::new()), drop_after }
    }

    pub fn drop_after (&self)->Duration { self.drop_after }

    // a panicking writer can at most leave a partially merged (but valid) record behind
    fn read_lock (&self)->RwLockReadGuard<'_,BTreeMap<String,Aircraft>> {
        self.aircraft.read().unwrap_or_else( PoisonError::into_inner)
    }

    fn write_lock (&self)->RwLockWriteGuard<'_,BTreeMap<String,Aircraft>> {
        self.aircraft.write().unwrap_or_else( PoisonError::into_inner)
    }

    /// merge a position report into the store, creating the entry if this is the first report for its address.
    /// Reports without an ICAO address are ignored. Returns true if the report was applied
    pub fn upsert (&self, report: &PositionReport)->bool {
        let icao24 = report.icao24.trim();
        if icao24.is_empty() {
            return false
        }

        let mut map = self.write_lock();
        if let Some(ac) = map.get_mut( icao24) {
            report.update( ac);
        } else {
            let mut ac = Aircraft::new( icao24.to_string(), report.timestamp);
            report.update( &mut ac);
            map.insert( icao24.to_string(), ac);
        }
        true
    }

    /// consistent point-in-time copy of all tracked aircraft, ordered by ascending ICAO address
    pub fn snapshot (&self)->Vec<Aircraft> {
        self.read_lock().values().cloned().collect()
    }

    pub fn get (&self, icao24: &str)->Option<Aircraft> {
        self.read_lock().get( icao24).cloned()
    }

    /// the aircraft with the lowest ICAO address that has a known position
    pub fn first_locked (&self)->Option<Aircraft> {
        self.read_lock().values().find( |ac| ac.is_locked()).cloned()
    }

    pub fn len (&self)->usize { self.read_lock().len() }

    pub fn is_empty (&self)->bool { self.read_lock().is_empty() }

    pub fn clear (&self) { self.write_lock().clear() }

    /// remove all aircraft whose last update is at least `drop_after` old at `now`. Returns the number of removed entries.
    /// This is the only place where entries get removed (short of `clear`)
    pub fn evict_stale (&self, now: EpochMillis)->usize {
        let mut map = self.write_lock();
        let n_before = map.len();
        map.retain( |_,ac| ac.last_update.elapsed_at( now) < self.drop_after);
        n_before - map.len()
    }

    /// periodically call `evict_stale` until the token gets cancelled
    pub fn spawn_eviction_task (self: &Arc<Self>, evict_interval: Duration, cancel: CancellationToken)->JoinHandle<()> {
        let store = self.clone();

        tokio::spawn( async move {
            let mut ticker = interval( evict_interval);
            ticker.set_missed_tick_behavior( MissedTickBehavior::Delay);
            ticker.tick().await; // first tick completes immediately

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        let n = store.evict_stale( EpochMillis::now());
                        if n > 0 { debug!("evicted {} stale aircraft, {} remaining", n, store.len()) }
                    }
                }
            }
            debug!("eviction task terminated");
        })
    }
}

impl Default for AircraftStore {
    fn default()->Self { AircraftStore::new( DEFAULT_DROP_AFTER) }
}

impl fmt::Debug for AircraftStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "AircraftStore( n_aircraft: {}, drop_after: {:?})", self.len(), self.drop_after)
    }
}

//--- the aircraft record

/// the merged state of a tracked aircraft. Fields are `None` until a report provided a (non-zero) value
#[derive(Debug,Clone,PartialEq)]
pub struct Aircraft {
    pub icao24: Arc<String>, // we keep that in an Arc so that snapshot clones don't allocate
    pub callsign: Option<String>,
    pub position: Option<GeoPoint>,
    pub altitude: Option<Length>, // mode-C (pressure) altitude
    pub groundspeed: Option<Velocity>,
    pub vertical_rate: Option<Velocity>,
    pub track: Option<Angle360>,
    pub hdg: Option<Angle360>,

    pub last_update: EpochMillis,
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Aircraft( icao24: {}", self.icao24)?;
        if let Some(cs) = &self.callsign { write!( f, ", cs: \"{cs}\"")?; }
        if let Some(p) = &self.position { write!( f, ", pos: {p}")?; }
        if let Some(alt) = self.altitude { write!( f, ", alt: {:.0}", alt.get::<foot>())?; }
        if let Some(gs) = self.groundspeed { write!( f, ", spd: {:.0}", gs.get::<knot>())?; }
        if let Some(vr) = self.vertical_rate { write!( f, ", vr: {:.0}", vr.get::<foot_per_minute>())?; }
        if let Some(trk) = self.track { write!( f, ", trk: {:.0}", trk.degrees())?; }
        if let Some(hdg) = self.hdg { write!( f, ", hdg: {:.0}", hdg.degrees())?; }
        write!( f, ", time: {})", self.last_update)
    }
}

impl Aircraft {
    pub fn new (icao24: String, last_update: EpochMillis)->Self {
        Aircraft {
            icao24: Arc::new(icao24),
            callsign: None,
            position: None,
            altitude: None,
            groundspeed: None,
            vertical_rate: None,
            track: None,
            hdg: None,
            last_update
        }
    }

    /// do we have a position fix for this aircraft
    pub fn is_locked (&self)->bool { self.position.is_some() }

    /// callsign if known, ICAO address otherwise
    pub fn display_name (&self)->&str {
        match &self.callsign {
            Some(cs) => cs.as_str(),
            None => self.icao24.as_str()
        }
    }

    pub fn altitude_ft (&self)->Option<f64> { self.altitude.map( |a| a.get::<foot>()) }
    pub fn groundspeed_kts (&self)->Option<f64> { self.groundspeed.map( |v| v.get::<knot>()) }
    pub fn vertical_rate_fpm (&self)->Option<f64> { self.vertical_rate.map( |v| v.get::<foot_per_minute>()) }

    /// altitude in hundreds of feet, 0 if unknown
    pub fn flight_level (&self)->i64 {
        self.altitude_ft().map( |ft| (ft.round() as i64) / 100).unwrap_or(0)
    }

    /// the compass octant of the direction of travel. Track over ground has precedence over heading.
    /// `None` means the direction is unknown, which is distinct from due north
    pub fn octant (&self)->Option<CompassOctant> {
        self.track.or( self.hdg).map( |a| a.octant())
    }

    pub fn position_string (&self)->String {
        match &self.position {
            Some(p) => p.to_hemisphere_string(),
            None => "Position Unknown".to_string()
        }
    }

    /// the one-line list representation, e.g. "(+) UAL123  FL350 450kts"
    pub fn list_display (&self)->String {
        let indicator = if self.is_locked() { "(+)" } else { "( )" };
        let kts = self.groundspeed_kts().map( |v| v.round() as i64).unwrap_or(0);
        format!("{} {:<7} FL{:<3} {:>3}kts", indicator, self.display_name(), self.flight_level(), kts)
    }

    pub fn secs_since_update (&self, now: EpochMillis)->u64 {
        self.last_update.elapsed_at( now).as_secs()
    }
}
