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
use serde::{Serialize,Deserialize};
use tui1090_common::geo::{GeoBounds, GeoPoint, MILES_PER_DEGREE, miles_per_degree_lon};
use crate::errors::{MapError, Result, config_error};

/// radius multiplier for one zoom-in step
pub const ZOOM_IN_FACTOR: f64 = 0.75;

/// radius multiplier for one zoom-out step
pub const ZOOM_OUT_FACTOR: f64 = 1.33;

/// the geographic center of the contiguous US, used until we have a first aircraft position
pub const DEFAULT_CENTER: (f64,f64) = (39.8283, -98.5795);

/// everything that determines the mapping between lat/lon and grid cells
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct ProjectionConfig {
    pub center: GeoPoint,
    pub radius_miles: f64,
    pub width: u16,  // grid columns
    pub height: u16, // grid rows
    pub aspect: f64, // height:width of a single character cell
}

impl ProjectionConfig {
    pub fn validate (&self)->Result<()> {
        if !self.center.is_valid() {
            return Err( config_error!("center out of range: {}", self.center))
        }
        if !(self.radius_miles.is_finite() && self.radius_miles > 0.0) {
            return Err( config_error!("radius must be positive: {}", self.radius_miles))
        }
        if self.width == 0 || self.height == 0 {
            return Err( config_error!("grid dimensions must be positive: {}x{}", self.width, self.height))
        }
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err( config_error!("cell aspect ratio must be positive: {}", self.aspect))
        }
        Ok(())
    }
}

/// the range a zoom operation can change the radius in
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct ZoomLimits {
    pub min_radius_miles: f64,
    pub max_radius_miles: f64,
}

impl ZoomLimits {
    pub fn validate (&self)->Result<()> {
        if self.min_radius_miles > 0.0 && self.min_radius_miles <= self.max_radius_miles {
            Ok(())
        } else {
            Err( config_error!("invalid zoom range [{}, {}]", self.min_radius_miles, self.max_radius_miles))
        }
    }
}

impl Default for ZoomLimits {
    fn default()->Self { ZoomLimits { min_radius_miles: 10.0, max_radius_miles: 1000.0 } }
}

/// equirectangular projection of a circle with `radius_miles` around `center` onto a character grid.
///
/// We compute in (local) miles: longitude differences are scaled by the length of a longitude degree at the
/// center latitude, latitude differences by the constant length of a latitude degree. Each axis then gets its own
/// cells-per-mile scale, with the row scale being the column scale divided by the cell aspect ratio. That keeps
/// the circle round on screen. The scale is the largest one that still fits the circle into both grid axes, so
/// the other axis shows some margin beyond the radius.
///
/// A center close to the poles degenerates the longitude scale, which is a known limitation of this projection
#[derive(Clone)]
pub struct Projection {
    config: ProjectionConfig,
    miles_per_deg_lon: f64,
    cols_per_mile: f64,
    rows_per_mile: f64,
}

impl Projection {
    pub fn new (config: ProjectionConfig)->Result<Self> {
        config.validate()?;

        let mut proj = Projection { config, miles_per_deg_lon: 0.0, cols_per_mile: 0.0, rows_per_mile: 0.0 };
        proj.compute_scale();
        Ok(proj)
    }

    fn compute_scale (&mut self) {
        let c = &self.config;
        let diameter = 2.0 * c.radius_miles;

        let cols_fit = c.width as f64 / diameter;
        let rows_fit = c.height as f64 / diameter;

        if cols_fit < rows_fit * c.aspect {
            self.cols_per_mile = cols_fit;
            self.rows_per_mile = cols_fit / c.aspect;
        } else {
            self.rows_per_mile = rows_fit;
            self.cols_per_mile = rows_fit * c.aspect;
        }

        self.miles_per_deg_lon = miles_per_degree_lon( c.center.latitude_degrees());
    }

    pub fn config (&self)->&ProjectionConfig { &self.config }
    pub fn center (&self)->GeoPoint { self.config.center }
    pub fn radius_miles (&self)->f64 { self.config.radius_miles }
    pub fn width (&self)->u16 { self.config.width }
    pub fn height (&self)->u16 { self.config.height }
    pub fn aspect (&self)->f64 { self.config.aspect }

    pub fn cols_per_mile (&self)->f64 { self.cols_per_mile }
    pub fn rows_per_mile (&self)->f64 { self.rows_per_mile }

    /// fractional grid coordinates (col,row) with the origin at the top left of the grid
    pub fn forward_f64 (&self, lat: f64, lon: f64)->(f64,f64) {
        let c = &self.config;
        let dx_miles = (lon - c.center.longitude_degrees()) * self.miles_per_deg_lon;
        let dy_miles = (lat - c.center.latitude_degrees()) * MILES_PER_DEGREE;

        let col = c.width as f64 / 2.0 + dx_miles * self.cols_per_mile;
        let row = c.height as f64 / 2.0 - dy_miles * self.rows_per_mile;
        (col, row)
    }

    /// the grid cell (col,row) that contains the given location. The cell can be outside the grid
    pub fn forward (&self, lat: f64, lon: f64)->(i32,i32) {
        let (col,row) = self.forward_f64( lat, lon);
        (col.floor() as i32, row.floor() as i32)
    }

    pub fn project (&self, p: &GeoPoint)->(i32,i32) {
        self.forward( p.latitude_degrees(), p.longitude_degrees())
    }

    /// exact inverse of `forward_f64`
    pub fn inverse (&self, col: f64, row: f64)->GeoPoint {
        let c = &self.config;
        let dx_miles = (col - c.width as f64 / 2.0) / self.cols_per_mile;
        let dy_miles = (c.height as f64 / 2.0 - row) / self.rows_per_mile;

        let lat = c.center.latitude_degrees() + dy_miles / MILES_PER_DEGREE;
        let lon = c.center.longitude_degrees() + dx_miles / self.miles_per_deg_lon;
        GeoPoint::from_lat_lon_degrees( lat, lon)
    }

    /// the location at the center of a grid cell
    pub fn inverse_cell (&self, col: i32, row: i32)->GeoPoint {
        self.inverse( col as f64 + 0.5, row as f64 + 0.5)
    }

    /// angular size (lat_deg, lon_deg) of a single grid cell
    pub fn cell_resolution (&self)->(f64,f64) {
        ( 1.0 / (self.rows_per_mile * MILES_PER_DEGREE), 1.0 / (self.cols_per_mile * self.miles_per_deg_lon) )
    }

    /// the lat/lon rectangle enclosing the four grid corners. This is computed from the current config on each call
    pub fn visible_bounds (&self)->GeoBounds {
        let w = self.config.width as f64;
        let h = self.config.height as f64;
        let corners = [ self.inverse( 0.0, 0.0), self.inverse( w, 0.0), self.inverse( 0.0, h), self.inverse( w, h) ];

        // four corners are never empty
        GeoBounds::enclosing( corners).unwrap_or_else( || GeoBounds::from_center_radius( &self.config.center, self.config.radius_miles))
    }

    /// validate and apply a new config. If validation fails the previous config stays in effect
    pub fn reconfigure (&mut self, config: ProjectionConfig)->Result<()> {
        config.validate()?;
        self.config = config;
        self.compute_scale();
        Ok(())
    }

    pub fn recenter (&mut self, lat: f64, lon: f64)->Result<()> {
        self.reconfigure( ProjectionConfig { center: GeoPoint::from_lat_lon_degrees( lat, lon), ..self.config })
    }

    pub fn resize (&mut self, width: u16, height: u16)->Result<()> {
        self.reconfigure( ProjectionConfig { width, height, ..self.config })
    }

    pub fn set_radius (&mut self, radius_miles: f64)->Result<()> {
        self.reconfigure( ProjectionConfig { radius_miles, ..self.config })
    }

    /// multiply the radius by `factor`, clamped to `limits`. Returns the resulting radius
    pub fn zoom (&mut self, factor: f64, limits: &ZoomLimits)->Result<f64> {
        limits.validate()?;
        let radius = (self.config.radius_miles * factor).clamp( limits.min_radius_miles, limits.max_radius_miles);
        self.set_radius( radius)?;
        Ok(radius)
    }

    pub fn zoom_in (&mut self, limits: &ZoomLimits)->Result<f64> { self.zoom( ZOOM_IN_FACTOR, limits) }
    pub fn zoom_out (&mut self, limits: &ZoomLimits)->Result<f64> { self.zoom( ZOOM_OUT_FACTOR, limits) }
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Projection( center: {}, radius: {:.1}mi, grid: {}x{}, aspect: {:.2}, scale: {:.4}/{:.4} cells/mi)",
            self.config.center, self.config.radius_miles, self.config.width, self.config.height, self.config.aspect,
            self.cols_per_mile, self.rows_per_mile)
    }
}
