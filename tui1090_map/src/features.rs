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

use std::{collections::BTreeMap, fmt};
use serde::{Serialize,Deserialize};
use tui1090_common::geo::{GeoBounds, GeoPoint};

/// the closed set of static map feature categories
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
pub enum FeatureType {
    Coastline,
    River,
    StateBorder,
    Highway,
    City,
    Airport,
}

impl FeatureType {
    pub const ALL: [FeatureType;6] = [
        FeatureType::Coastline, FeatureType::River, FeatureType::StateBorder,
        FeatureType::Highway, FeatureType::City, FeatureType::Airport
    ];

    pub fn name (&self)->&'static str {
        match self {
            FeatureType::Coastline => "coastline",
            FeatureType::River => "river",
            FeatureType::StateBorder => "state border",
            FeatureType::Highway => "highway",
            FeatureType::City => "city",
            FeatureType::Airport => "airport",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!( f, "{}", self.name()) }
}

#[derive(Debug,Clone,PartialEq)]
pub enum FeatureGeometry {
    /// open sequence of at least two vertices, rendered as connected segments
    Polyline(Vec<GeoPoint>),
    Point(GeoPoint),
}

/// an immutable static map feature
#[derive(Debug,Clone,PartialEq)]
pub struct GeoFeature {
    pub ftype: FeatureType,
    pub geometry: FeatureGeometry,
    pub label: Option<String>,
}

impl GeoFeature {
    /// a line feature. Returns `None` if there are less than two vertices
    pub fn polyline (ftype: FeatureType, points: Vec<GeoPoint>)->Option<Self> {
        if points.len() > 1 {
            Some( GeoFeature { ftype, geometry: FeatureGeometry::Polyline(points), label: None } )
        } else {
            None
        }
    }

    pub fn point (ftype: FeatureType, point: GeoPoint, label: Option<String>)->Self {
        let label = label.map( |s| s.trim().to_string()).filter( |s| !s.is_empty());
        GeoFeature { ftype, geometry: FeatureGeometry::Point(point), label }
    }

    pub fn is_point (&self)->bool { matches!( self.geometry, FeatureGeometry::Point(_)) }
    pub fn is_line (&self)->bool { matches!( self.geometry, FeatureGeometry::Polyline(_)) }

    pub fn label (&self)->Option<&str> { self.label.as_deref() }

    pub fn points (&self)->&[GeoPoint] {
        match &self.geometry {
            FeatureGeometry::Polyline(pts) => pts.as_slice(),
            FeatureGeometry::Point(p) => std::slice::from_ref(p),
        }
    }

    /// culling test: a point has to be inside of the bounds, a polyline needs at least one vertex inside.
    /// Polylines that only cross the bounds between two outside vertices are dropped (known approximation)
    pub fn intersects (&self, bounds: &GeoBounds)->bool {
        self.points().iter().any( |p| bounds.contains(p))
    }
}

pub fn filter_by_bounds<'a> (features: &'a [GeoFeature], bounds: &GeoBounds)->Vec<&'a GeoFeature> {
    features.iter().filter( |f| f.intersects( bounds)).collect()
}

/// the static feature set, one (possibly empty) list per feature type.
/// This is created once by the dataset loader and not modified afterwards
#[derive(Debug,Clone,Default)]
pub struct FeatureIndex {
    layers: BTreeMap<FeatureType,Vec<GeoFeature>>,
}

impl FeatureIndex {
    pub fn new ()->Self { FeatureIndex::default() }

    /// builder style layer setter. Features of other types than `ftype` are dropped
    pub fn with_layer (mut self, ftype: FeatureType, features: Vec<GeoFeature>)->Self {
        let features: Vec<GeoFeature> = features.into_iter().filter( |f| f.ftype == ftype).collect();
        self.layers.insert( ftype, features);
        self
    }

    /// all features of a type, empty if the layer is missing
    pub fn features (&self, ftype: FeatureType)->&[GeoFeature] {
        self.layers.get( &ftype).map( |v| v.as_slice()).unwrap_or(&[])
    }

    pub fn visible (&self, ftype: FeatureType, bounds: &GeoBounds)->Vec<&GeoFeature> {
        filter_by_bounds( self.features( ftype), bounds)
    }

    pub fn len (&self)->usize { self.layers.values().map( |v| v.len()).sum() }
    pub fn is_empty (&self)->bool { self.len() == 0 }

    pub fn layer_counts (&self)->Vec<(FeatureType,usize)> {
        FeatureType::ALL.iter().map( |t| (*t, self.features(*t).len())).collect()
    }
}
