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

use std::{fmt, cmp};
use serde::{Serialize, Deserialize, Serializer, Deserializer, de::Error as DeError};

/// map any angle (including negatives and multiples of 360) into [0,360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    let x = if x < 0.0 { 360.0 + x } else { x };
    if x >= 360.0 { 0.0 } else { x } // -1e-20 % 360 + 360 rounds up to 360
}

/// an angle in degrees that is always normalized to [0,360), e.g. used for track or heading
#[derive(Clone,Copy,Default)]
pub struct Angle360(f64);

impl Angle360 {
    #[inline] pub fn from_degrees (deg: f64)->Self { Angle360( normalize_360(deg)) }

    #[inline] pub fn degrees (&self)->f64 { self.0 }

    /// zero is also what sources report if they don't know the direction
    #[inline] pub fn is_zero (&self)->bool { self.0 == 0.0 }

    /// the 45° wide compass sector this angle falls into. Sector boundaries are at 22.5° + k*45°, i.e.
    /// each sector is centered on its cardinal or intercardinal direction
    pub fn octant (&self)->CompassOctant {
        let idx = ((self.0 + 22.5) / 45.0).floor() as usize % 8;
        CompassOctant::ALL[idx]
    }
}

impl fmt::Display for Angle360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:.0}°", self.0) }
}

impl fmt::Debug for Angle360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Angle360({})", self.0) }
}

impl From<Angle360> for f64 {
    fn from (a: Angle360)->Self { a.0 }
}

impl cmp::PartialEq for Angle360 {
    fn eq (&self, other: &Self)->bool { self.0 == other.0 }
}

impl cmp::PartialOrd for Angle360 {
    fn partial_cmp (&self, other: &Self)->Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

impl Serialize for Angle360 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Angle360 {
    fn deserialize<D>(deserializer: D) -> Result<Angle360, D::Error> where D: Deserializer<'de> {
        let deg = f64::deserialize(deserializer)?;
        if deg.is_finite() {
            Ok( Angle360::from_degrees(deg))
        } else {
            Err( D::Error::custom( format!("not a finite angle: {deg}")))
        }
    }
}

/// the 8 cardinal and intercardinal compass directions, in clockwise order starting at north
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum CompassOctant { N, NE, E, SE, S, SW, W, NW }

impl CompassOctant {
    pub const ALL: [CompassOctant;8] = [
        CompassOctant::N, CompassOctant::NE, CompassOctant::E, CompassOctant::SE,
        CompassOctant::S, CompassOctant::SW, CompassOctant::W, CompassOctant::NW
    ];

    /// the direction the sector is centered on
    pub fn center_degrees (&self)->f64 { (*self as usize) as f64 * 45.0 }

    pub fn abbrev (&self)->&'static str {
        match self {
            CompassOctant::N => "N",  CompassOctant::NE => "NE",
            CompassOctant::E => "E",  CompassOctant::SE => "SE",
            CompassOctant::S => "S",  CompassOctant::SW => "SW",
            CompassOctant::W => "W",  CompassOctant::NW => "NW",
        }
    }
}

impl fmt::Display for CompassOctant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str( self.abbrev()) }
}
