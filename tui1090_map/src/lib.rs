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

//! the static map side of tui1090: projecting lat/lon onto a character grid, the grid itself,
//! map features with their loaders and the local data cache, and the pipeline that renders
//! features and aircraft into a grid

pub mod errors;
pub mod projection;
pub mod canvas;
pub mod features;
pub mod loader;
pub mod cache;
pub mod theme;
pub mod render;

pub use errors::{MapError, Result};
pub use projection::{Projection, ProjectionConfig, ZoomLimits};
pub use canvas::{Canvas, Cell};
pub use features::{FeatureIndex, FeatureType, GeoFeature, filter_by_bounds};
pub use render::{Frame, RenderPipeline};
