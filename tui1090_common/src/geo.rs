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

/// this module provides the (flat) lat/lon geometry we need for map display. We wrap the
/// [geo_types](https://docs.rs/geo-types) primitives with the new type pattern so that the
/// lat/lon semantics (x = longitude, y = latitude, both in degrees) cannot get mixed up.
/// Note that we deliberately do not deal with ellipsoid surfaces here - distances are
/// approximated with a constant number of statute miles per degree of latitude

use std::fmt;
use serde::{Serialize,Deserialize};
use geo_types::{Coord, Point, Rect};

/// statute miles per degree of latitude (and per degree of longitude at the equator)
pub const MILES_PER_DEGREE: f64 = 69.0;

/// miles per degree of longitude at the given latitude
#[inline]
pub fn miles_per_degree_lon (lat_deg: f64)->f64 {
    MILES_PER_DEGREE * lat_deg.to_radians().cos()
}

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo_types::Point that uses geodetic degrees stored as f64
#[derive(Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from="LatLonDegrees", into="LatLonDegrees")]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lat_lon_degrees (lat: f64, lon: f64)->Self { GeoPoint( Point::new( lon, lat)) }

    #[inline] pub fn latitude_degrees (&self)->f64 { self.0.y() }
    #[inline] pub fn longitude_degrees (&self)->f64 { self.0.x() }

    pub fn point (&self)->&Point { &self.0 }

    /// both coordinates are finite and within the valid lat/lon ranges
    pub fn is_valid (&self)->bool {
        let lat = self.0.y();
        let lon = self.0.x();
        lat.is_finite() && lon.is_finite() && lat.abs() <= 90.0 && lon.abs() <= 180.0
    }

    /// format as "37.7749*N, 122.4194*W" (used for display in detail views)
    pub fn to_hemisphere_string (&self)->String {
        let lat = self.latitude_degrees();
        let lon = self.longitude_degrees();
        let lat_dir = if lat < 0.0 { 'S' } else { 'N' };
        let lon_dir = if lon < 0.0 { 'W' } else { 'E' };
        format!("{:.4}*{}, {:.4}*{}", lat.abs(), lat_dir, lon.abs(), lon_dir)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5},{:.5})", self.latitude_degrees(), self.longitude_degrees())
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint(lat: {}, lon: {})", self.latitude_degrees(), self.longitude_degrees())
    }
}

/// serde representation of GeoPoint, with the aliases we find in configs
#[derive(Serialize,Deserialize)]
struct LatLonDegrees {
    #[serde(alias="latitude")] lat: f64,
    #[serde(alias="longitude")] lon: f64,
}

impl From<LatLonDegrees> for GeoPoint {
    fn from (ll: LatLonDegrees)->Self { GeoPoint::from_lat_lon_degrees( ll.lat, ll.lon) }
}

impl From<GeoPoint> for LatLonDegrees {
    fn from (p: GeoPoint)->Self { LatLonDegrees { lat: p.latitude_degrees(), lon: p.longitude_degrees() } }
}

/* #endregion GeoPoint */

/* #region GeoBounds **********************************************************************************************/

/// an axis aligned lat/lon rectangle. All `contains` checks are inclusive at the edges.
/// Note this does not handle rectangles that cross the antimeridian
#[derive(Clone,Copy,PartialEq)]
pub struct GeoBounds(Rect);

impl GeoBounds {
    /// the constructor normalizes min/max so arguments can be given in any order
    pub fn from_min_max (min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64)->Self {
        GeoBounds( Rect::new( Coord{ x: min_lon, y: min_lat }, Coord{ x: max_lon, y: max_lat }))
    }

    /// the enclosing rectangle of a circle with `radius_miles` around `center`
    pub fn from_center_radius (center: &GeoPoint, radius_miles: f64)->Self {
        let lat = center.latitude_degrees();
        let lon = center.longitude_degrees();
        let dlat = radius_miles / MILES_PER_DEGREE;
        let dlon = radius_miles / miles_per_degree_lon(lat);

        GeoBounds::from_min_max( lat - dlat, lon - dlon, lat + dlat, lon + dlon)
    }

    /// the enclosing rectangle of a non-empty point set
    pub fn enclosing<I> (points: I)->Option<Self> where I: IntoIterator<Item=GeoPoint> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (mut min_lat, mut min_lon) = (first.latitude_degrees(), first.longitude_degrees());
        let (mut max_lat, mut max_lon) = (min_lat, min_lon);

        for p in it {
            min_lat = min_lat.min( p.latitude_degrees());
            max_lat = max_lat.max( p.latitude_degrees());
            min_lon = min_lon.min( p.longitude_degrees());
            max_lon = max_lon.max( p.longitude_degrees());
        }
        Some( GeoBounds::from_min_max( min_lat, min_lon, max_lat, max_lon))
    }

    #[inline] pub fn min_lat (&self)->f64 { self.0.min().y }
    #[inline] pub fn max_lat (&self)->f64 { self.0.max().y }
    #[inline] pub fn min_lon (&self)->f64 { self.0.min().x }
    #[inline] pub fn max_lon (&self)->f64 { self.0.max().x }

    pub fn contains_lat_lon (&self, lat: f64, lon: f64)->bool {
        lat >= self.min_lat() && lat <= self.max_lat() && lon >= self.min_lon() && lon <= self.max_lon()
    }

    pub fn contains (&self, p: &GeoPoint)->bool {
        self.contains_lat_lon( p.latitude_degrees(), p.longitude_degrees())
    }

    pub fn center (&self)->GeoPoint {
        let c = self.0.center();
        GeoPoint::from_lat_lon_degrees( c.y, c.x)
    }

    pub fn rect (&self)->&Rect { &self.0 }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat[{:.2} to {:.2}] lon[{:.2} to {:.2}]", self.min_lat(), self.max_lat(), self.min_lon(), self.max_lon())
    }
}

impl fmt::Debug for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoBounds({self})")
    }
}

/* #endregion GeoBounds */
