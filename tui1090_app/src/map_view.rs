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

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::{debug, info, warn};
use tui1090_common::geo::GeoPoint;
use tui1090_adsb::Aircraft;
use tui1090_map::{
    Canvas, FeatureIndex, Projection, ProjectionConfig, RenderPipeline, ZoomLimits, Result,
    projection::DEFAULT_CENTER,
    render::Frame as MapFrame,
};

/// the map panel: projection, the canvas it is rendered into, and the centering state.
/// The map starts at `DEFAULT_CENTER` and centers once on the first aircraft with a position,
/// after that only explicit selection changes move it
pub struct MapView {
    projection: Projection,
    canvas: Canvas,
    pipeline: RenderPipeline,
    zoom_limits: ZoomLimits,
    centered: bool,
}

impl MapView {
    pub fn new (width: u16, height: u16, radius_miles: f64, aspect: f64, zoom_limits: ZoomLimits)->Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        let center = GeoPoint::from_lat_lon_degrees( DEFAULT_CENTER.0, DEFAULT_CENTER.1);
        let projection = Projection::new( ProjectionConfig { center, radius_miles, width, height, aspect })?;
        zoom_limits.validate()?;

        Ok( MapView {
            projection,
            canvas: Canvas::new( width, height),
            pipeline: RenderPipeline::default(),
            zoom_limits,
            centered: false,
        })
    }

    pub fn projection (&self)->&Projection { &self.projection }
    pub fn canvas (&self)->&Canvas { &self.canvas }
    pub fn is_centered (&self)->bool { self.centered }
    pub fn radius_miles (&self)->f64 { self.projection.radius_miles() }

    /// center on `ac` if the map was not centered yet. Returns true if we did
    pub fn center_initially (&mut self, ac: &Aircraft)->bool {
        if !self.centered && self.center_on( ac) {
            info!("map centered on {} at {}", ac.icao24, self.projection.center());
            debug!("visible bounds: {}", self.projection.visible_bounds());
            true
        } else {
            false
        }
    }

    /// center on an aircraft, which has to have a position
    pub fn center_on (&mut self, ac: &Aircraft)->bool {
        let Some(p) = &ac.position else { return false };

        match self.projection.recenter( p.latitude_degrees(), p.longitude_degrees()) {
            Ok(()) => {
                self.centered = true;
                debug!("map re-centered on {} at {}", ac.icao24, p);
                true
            }
            Err(e) => {
                warn!("cannot center map on {}: {}", ac.icao24, e);
                false
            }
        }
    }

    pub fn zoom_in (&mut self) { self.zoom( true) }
    pub fn zoom_out (&mut self) { self.zoom( false) }

    fn zoom (&mut self, zoom_in: bool) {
        let res = if zoom_in { self.projection.zoom_in( &self.zoom_limits) } else { self.projection.zoom_out( &self.zoom_limits) };
        match res {
            Ok(radius) => debug!("map radius changed to {:.0} miles", radius),
            Err(e) => warn!("zoom failed: {e}")
        }
    }

    /// adapt projection and canvas to the area we get. Both keep their dimensions if the area is empty
    pub fn fit (&mut self, width: u16, height: u16) {
        if width != self.projection.width() || height != self.projection.height() {
            match self.projection.resize( width, height) {
                Ok(()) => {
                    self.canvas.resize( width, height);
                    debug!("map resized to {}x{}", width, height);
                }
                Err(e) => debug!("ignoring map resize: {e}")
            }
        }
    }

    /// render a new frame into our canvas
    pub fn draw_frame (&mut self, features: &FeatureIndex, aircraft: &[Aircraft], selected: Option<&str>) {
        let frame = MapFrame { projection: &self.projection, features, aircraft, selected };
        self.pipeline.render( &mut self.canvas, &frame);
    }
}

impl Widget for &MapView {
    fn render (self, area: Rect, buf: &mut Buffer) {
        (&self.canvas).render( area, buf);
    }
}
