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

use ratatui::{prelude::*, widgets::*};
use tui1090_common::datetime::EpochMillis;
use tui1090_adsb::Aircraft;
use crate::theme::THEME;

pub const DETAIL_WIDTH: u16 = 50;
pub const DETAIL_HEIGHT: u16 = 15;

const NO_SELECTION: &str = "No aircraft selected";
const RETURN_HINT: &str = " Press ESC to return ";

/// the detail panel for the selected aircraft. This is created per frame
pub struct DetailView<'a> {
    aircraft: Option<&'a Aircraft>,
    now: EpochMillis,
}

impl<'a> DetailView<'a> {
    pub fn new (aircraft: Option<&'a Aircraft>, now: EpochMillis)->Self {
        DetailView { aircraft, now }
    }

    /// the text lines of the panel, empty if there is no aircraft
    pub fn lines (&self)->Vec<String> {
        let Some(ac) = self.aircraft else { return Vec::new() };

        let altitude = match ac.altitude_ft() {
            Some(ft) => format!("{:.0} ft (FL{})", ft, ac.flight_level()),
            None => "unknown".to_string()
        };

        vec![
            format!("ICAO:          {}", ac.icao24),
            format!("Flight:        {}", ac.display_name()),
            format!("Position:      {}", ac.position_string()),
            format!("Altitude:      {altitude}"),
            format!("Speed:         {:.0} kts", ac.groundspeed_kts().unwrap_or(0.0)),
            format!("Heading:       {:.0}*", ac.hdg.map( |a| a.degrees()).unwrap_or(0.0)),
            format!("Track:         {:.0}*", ac.track.map( |a| a.degrees()).unwrap_or(0.0)),
            format!("Vertical Rate: {:+.0} ft/min", ac.vertical_rate_fpm().unwrap_or(0.0)),
            format!("Last Seen:     {} seconds ago", ac.secs_since_update( self.now)),
        ]
    }
}

impl Widget for &DetailView<'_> {
    fn render (self, area: Rect, buf: &mut Buffer) {
        Clear.render( area, buf);

        let mut block = Block::bordered()
            .style( THEME.panel)
            .border_style( THEME.panel_border)
            .title( Line::styled(" Aircraft Details ", THEME.panel_title).centered());

        if self.aircraft.is_none() {
            let inner = block.inner( area);
            block.render( area, buf);

            let [_,mid,_] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)]).areas( inner);
            Line::styled( NO_SELECTION, THEME.detail.empty).centered().render( mid, buf);
            return
        }

        block = block.title_bottom( Line::styled( RETURN_HINT, THEME.detail.hint).centered());
        let inner = block.inner( area).inner( Margin { vertical: 0, horizontal: 1 });
        block.render( area, buf);

        let text: Vec<Line> = self.lines().into_iter().map( |s| Line::styled( s, THEME.detail.field)).collect();
        Paragraph::new( text).render( inner, buf);
    }
}
