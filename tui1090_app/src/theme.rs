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

/// styles of the panels drawn over the map
pub struct Theme {
    pub panel: Style,
    pub panel_border: Style,
    pub panel_title: Style,
    pub list: AircraftList,
    pub detail: AircraftDetail,
    pub status_bar: StatusBar,
}

pub struct AircraftList {
    pub item: Style,
    pub selected: Style,
    pub scroll_hint: Style,
}

pub struct AircraftDetail {
    pub field: Style,
    pub hint: Style,
    pub empty: Style,
}

pub struct StatusBar {
    pub bar: Style,
    pub connected: Style,
    pub terminated: Style,
}

pub const THEME: Theme = Theme {
    panel: Style::new().bg(Palette::BLACK),
    panel_border: Style::new().fg(Palette::WHITE).bg(Palette::BLACK),
    panel_title: Style::new()
        .fg(Palette::WHITE)
        .add_modifier(Modifier::BOLD),
    list: AircraftList {
        item: Style::new().fg(Palette::LIGHT_GRAY),
        selected: Style::new()
            .fg(Palette::WHITE)
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED),
        scroll_hint: Style::new().fg(Palette::WHITE),
    },
    detail: AircraftDetail {
        field: Style::new().fg(Palette::WHITE),
        hint: Style::new()
            .fg(Palette::MID_GRAY)
            .add_modifier(Modifier::DIM),
        empty: Style::new().fg(Palette::MID_GRAY),
    },
    status_bar: StatusBar {
        bar: Style::new().fg(Palette::LIGHT_GRAY).bg(Palette::DARK_GRAY),
        connected: Style::new().fg(Palette::GREEN).bg(Palette::DARK_GRAY),
        terminated: Style::new()
            .fg(Palette::RED)
            .bg(Palette::DARK_GRAY)
            .add_modifier(Modifier::BOLD),
    },
};

struct Palette;
impl Palette {
    const BLACK: Color = Color::Rgb(0, 0, 0);
    const DARK_GRAY: Color = Color::Rgb(48, 48, 48);
    const MID_GRAY: Color = Color::Rgb(128, 128, 128);
    const LIGHT_GRAY: Color = Color::Rgb(200, 200, 200);
    const WHITE: Color = Color::Rgb(255, 255, 255);
    const GREEN: Color = Color::Rgb(0, 200, 0);
    const RED: Color = Color::Rgb(220, 50, 47);
}
