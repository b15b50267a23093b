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

use ratatui::style::Style;
use tracing::trace;
use tui1090_common::{angle::CompassOctant, geo::GeoBounds};
use tui1090_adsb::Aircraft;
use crate::{
    canvas::Canvas,
    features::{FeatureIndex, FeatureType, GeoFeature, FeatureGeometry},
    projection::Projection,
    theme::{MapTheme, MAP_THEME, feature_symbol},
};

/// the layers of a frame, drawn in this order. Later layers overwrite earlier ones
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum RenderLayer {
    Lines(FeatureType),
    PlacesAndAirports,
    Aircraft,
}

pub const DRAW_ORDER: [RenderLayer;6] = [
    RenderLayer::Lines(FeatureType::Coastline),
    RenderLayer::Lines(FeatureType::River),
    RenderLayer::Lines(FeatureType::StateBorder),
    RenderLayer::Lines(FeatureType::Highway),
    RenderLayer::PlacesAndAirports,
    RenderLayer::Aircraft,
];

/// glyph for an aircraft without known direction of travel. This is the same as for north,
/// i.e. on the map the two cases can't be told apart
pub const UNKNOWN_DIRECTION_SYMBOL: char = '^';

pub fn octant_symbol (octant: Option<CompassOctant>)->char {
    match octant {
        Some(CompassOctant::N) => '^',
        Some(CompassOctant::NE) => '┐',
        Some(CompassOctant::E) => '>',
        Some(CompassOctant::SE) => '┘',
        Some(CompassOctant::S) => 'v',
        Some(CompassOctant::SW) => '└',
        Some(CompassOctant::W) => '<',
        Some(CompassOctant::NW) => '┌',
        None => UNKNOWN_DIRECTION_SYMBOL,
    }
}

// city labels within these distances (in cells) of an airport are suppressed
const SAME_ROW_MAX_DCOL: i32 = 5;
const ADJACENT_ROW_MAX_DCOL: i32 = 3;

/// would a city label at grid position `place` collide with an airport at `airport`
pub fn label_collides (place: (i32,i32), airport: (i32,i32))->bool {
    let dcol = (place.0 - airport.0).abs();
    let drow = (place.1 - airport.1).abs();
    (drow == 0 && dcol <= SAME_ROW_MAX_DCOL) || (drow <= 1 && dcol <= ADJACENT_ROW_MAX_DCOL)
}

/// the per-frame inputs from the view controller
pub struct Frame<'a> {
    pub projection: &'a Projection,
    pub features: &'a FeatureIndex,
    pub aircraft: &'a [Aircraft],
    pub selected: Option<&'a str>,
}

/// draws complete map frames (static features plus aircraft) into a canvas
pub struct RenderPipeline {
    theme: &'static MapTheme,
}

impl Default for RenderPipeline {
    fn default()->Self { RenderPipeline { theme: &MAP_THEME } }
}

impl RenderPipeline {
    pub fn new (theme: &'static MapTheme)->Self { RenderPipeline { theme } }

    pub fn theme (&self)->&MapTheme { self.theme }

    /// clear the canvas and draw all layers. The canvas has to have the same dimensions as the projection
    pub fn render (&self, canvas: &mut Canvas, frame: &Frame) {
        canvas.clear();
        let bounds = frame.projection.visible_bounds();

        for layer in DRAW_ORDER {
            match layer {
                RenderLayer::Lines(ftype) => self.render_lines( canvas, frame, ftype, &bounds),
                RenderLayer::PlacesAndAirports => self.render_places_and_airports( canvas, frame, &bounds),
                RenderLayer::Aircraft => self.render_aircraft( canvas, frame),
            }
        }
    }

    fn render_lines (&self, canvas: &mut Canvas, frame: &Frame, ftype: FeatureType, bounds: &GeoBounds) {
        let style = self.theme.feature_style( ftype);
        let symbol = feature_symbol( ftype);
        let visible = frame.features.visible( ftype, bounds);
        trace!("rendering {} of {} {} features", visible.len(), frame.features.features(ftype).len(), ftype);

        for f in visible {
            if let Some((first,rest)) = f.points().split_first() {
                let mut last = frame.projection.project( first);
                for p in rest {
                    let next = frame.projection.project( p);
                    if segment_overlaps_grid( last, next, canvas) {
                        canvas.draw_line( last, next, symbol, style);
                    }
                    last = next;
                }
            }
        }
    }

    /// cities and airports are rendered together so that airport labels win over nearby city labels
    fn render_places_and_airports (&self, canvas: &mut Canvas, frame: &Frame, bounds: &GeoBounds) {
        let airports: Vec<((i32,i32),&GeoFeature)> = frame.features.visible( FeatureType::Airport, bounds).into_iter()
            .filter_map( |f| f.points().first().map( |p| (frame.projection.project( p), f)))
            .collect();

        let city_style = self.theme.feature_style( FeatureType::City);
        let city_symbol = feature_symbol( FeatureType::City);

        for city in frame.features.visible( FeatureType::City, bounds) {
            let Some(p) = city.points().first() else { continue };
            let pos = frame.projection.project( p);
            canvas.set( pos.0, pos.1, city_symbol, city_style);

            if let Some(label) = city.label() {
                if !airports.iter().any( |(ap,_)| label_collides( pos, *ap)) {
                    self.draw_label( canvas, pos, label);
                }
            }
        }

        let airport_style = self.theme.feature_style( FeatureType::Airport);
        let airport_symbol = feature_symbol( FeatureType::Airport);

        for (pos,airport) in &airports {
            canvas.set( pos.0, pos.1, airport_symbol, airport_style);
            if let Some(label) = airport.label() {
                self.draw_label( canvas, *pos, label);
            }
        }
    }

    // labels go right of the symbol, and only if they fit completely
    fn draw_label (&self, canvas: &mut Canvas, pos: (i32,i32), label: &str) {
        let len = label.chars().count() as i32;
        if pos.0 < canvas.width() as i32 - len - 1 {
            canvas.draw_text( pos.0 + 1, pos.1, label, self.theme.label);
        }
    }

    /// aircraft without position are not drawn. The selected aircraft is drawn last so that it stays on top
    fn render_aircraft (&self, canvas: &mut Canvas, frame: &Frame) {
        let mut selected: Option<&Aircraft> = None;

        for ac in frame.aircraft {
            if Some(ac.icao24.as_str()) == frame.selected {
                selected = Some(ac);
            } else {
                self.draw_aircraft( canvas, frame.projection, ac, self.theme.aircraft);
            }
        }

        if let Some(ac) = selected {
            self.draw_aircraft( canvas, frame.projection, ac, self.theme.selected_aircraft);
        }
    }

    fn draw_aircraft (&self, canvas: &mut Canvas, projection: &Projection, ac: &Aircraft, style: Style) {
        if let Some(p) = &ac.position {
            let (col,row) = projection.project( p);
            canvas.set( col, row, octant_symbol( ac.octant()), style);
        }
    }
}

// trivial reject of segments whose bounding box is completely outside the grid
fn segment_overlaps_grid (p0: (i32,i32), p1: (i32,i32), canvas: &Canvas)->bool {
    let (w,h) = (canvas.width() as i32, canvas.height() as i32);
    !( (p0.0 < 0 && p1.0 < 0) || (p0.1 < 0 && p1.1 < 0) || (p0.0 >= w && p1.0 >= w) || (p0.1 >= h && p1.1 >= h) )
}
