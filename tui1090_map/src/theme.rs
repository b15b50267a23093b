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
use ratatui::style::{Color, Modifier, Style};
use crate::features::FeatureType;

/// styles of the map layers
pub struct MapTheme {
    pub coastline: Style,
    pub river: Style,
    pub state_border: Style,
    pub highway: Style,
    pub city: Style,
    pub airport: Style,
    pub label: Style,
    pub aircraft: Style,
    pub selected_aircraft: Style,
}

pub const MAP_THEME: MapTheme = MapTheme {
    coastline: Style::new().fg(Palette::DARK_BLUE),
    river: Style::new().fg(Palette::DARK_CYAN),
    state_border: Style::new().fg(Palette::DARK_GRAY),
    highway: Style::new().fg(Palette::YELLOW),
    city: Style::new().fg(Palette::WHITE),
    airport: Style::new().fg(Palette::ORANGE),
    label: Style::new().fg(Palette::WHITE),
    aircraft: Style::new()
        .fg(Palette::GREEN)
        .add_modifier(Modifier::BOLD),
    selected_aircraft: Style::new()
        .fg(Palette::GREEN)
        .add_modifier(Modifier::BOLD)
        .add_modifier(Modifier::REVERSED),
};

impl MapTheme {
    pub fn feature_style (&self, ftype: FeatureType)->Style {
        match ftype {
            FeatureType::Coastline => self.coastline,
            FeatureType::River => self.river,
            FeatureType::StateBorder => self.state_border,
            FeatureType::Highway => self.highway,
            FeatureType::City => self.city,
            FeatureType::Airport => self.airport,
        }
    }
}

/// the glyph we draw features with
pub fn feature_symbol (ftype: FeatureType)->char {
    match ftype {
        FeatureType::Coastline => '-',
        FeatureType::River => '~',
        FeatureType::StateBorder => '-',
        FeatureType::Highway => '=',
        FeatureType::City => '●',
        FeatureType::Airport => '@',
    }
}

pub struct Palette;
impl Palette {
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const DARK_GRAY: Color = Color::Rgb(169, 169, 169);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const GREEN: Color = Color::Rgb(0, 200, 0);
    pub const DARK_CYAN: Color = Color::Rgb(0, 139, 139);
    pub const DARK_BLUE: Color = Color::Rgb(0, 0, 139);
}
