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

//! the tui1090 terminal application: configuration, the view controller with its panels, and the
//! run loop that ties the aircraft store, the SBS connector and the map renderer together

use ratatui::layout::Rect;

pub mod config;
pub mod theme;
pub mod map_view;
pub mod list_view;
pub mod detail_view;
pub mod status;
pub mod app;

pub use config::{AppConfig, CliArgs};
pub use app::{App, KeyAction, ViewMode, run};

/// a `width` x `height` rect in the lower left corner of `area`, clipped to `area`
pub fn lower_left (area: Rect, width: u16, height: u16)->Rect {
    let w = width.min( area.width);
    let h = height.min( area.height);
    Rect::new( area.x, area.y + area.height - h, w, h)
}
