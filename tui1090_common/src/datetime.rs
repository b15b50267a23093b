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

use std::{fmt, time::Duration};
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// milliseconds since the unix epoch. This is our timestamp type for everything that is compared
/// against wall clock time (e.g. to find out if a tracked object went stale)
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Default)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now ()->Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis:i64)->Self { EpochMillis(millis) }

    pub fn from_secs (secs: i64)->Self { EpochMillis(secs*1000) }

    pub fn millis (&self)->i64 { self.0 }

    /// elapsed time between `self` and a later `now` - saturates at zero if `now` is earlier
    pub fn elapsed_at (&self, now: EpochMillis)->Duration {
        if now.0 > self.0 { Duration::from_millis( (now.0 - self.0) as u64) } else { Duration::ZERO }
    }

    pub fn to_utc (&self)->Option<DateTime<Utc>> { DateTime::<Utc>::from_timestamp_millis(self.0) }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "EpochMillis({})", self.0)
        }
    }
}

impl<Tz: chrono::TimeZone> From<DateTime<Tz>> for EpochMillis {
    fn from (date: DateTime<Tz>)->Self { EpochMillis( date.timestamp_millis()) }
}

impl std::ops::Add<Duration> for EpochMillis {
    type Output = EpochMillis;
    fn add (self, d: Duration)->EpochMillis { EpochMillis( self.0 + d.as_millis() as i64) }
}

impl std::ops::Sub<Duration> for EpochMillis {
    type Output = EpochMillis;
    fn sub (self, d: Duration)->EpochMillis { EpochMillis( self.0 - d.as_millis() as i64) }
}

// simple Duration ctors to keep call sites readable
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
