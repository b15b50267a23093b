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
use ratatui::{prelude::*, widgets::*};
use tui1090_adsb::connector::{ConnectorEvent, SbsSource};
use crate::theme::THEME;

const KEY_HELP: &str = "q:quit  ↑↓:select  Enter:details  +/-:zoom";

/// what we know about the SBS source
#[derive(Debug,Clone,PartialEq)]
pub enum ConnectionStatus {
    Connecting(String),
    Connected(String),
    Terminated(String),
}

impl ConnectionStatus {
    pub fn connecting (source: &SbsSource)->Self { ConnectionStatus::Connecting( source.to_string()) }

    pub fn from_event (event: ConnectorEvent)->Self {
        match event {
            ConnectorEvent::Connected(src) => ConnectionStatus::Connected(src),
            ConnectorEvent::Terminated(reason) => ConnectionStatus::Terminated(reason),
        }
    }

    pub fn is_terminated (&self)->bool { matches!( self, ConnectionStatus::Terminated(_)) }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Connecting(src) => write!( f, "connecting to {src}"),
            ConnectionStatus::Connected(src) => write!( f, "connected to {src}"),
            ConnectionStatus::Terminated(reason) => write!( f, "source terminated: {reason}"),
        }
    }
}

/// the bottom line of the screen
pub struct StatusLine<'a> {
    pub n_aircraft: usize,
    pub radius_miles: f64,
    pub status: &'a ConnectionStatus,
}

impl StatusLine<'_> {
    pub fn summary (&self)->String {
        format!(" {} aircraft | radius {:.0} mi | ", self.n_aircraft, self.radius_miles)
    }
}

impl Widget for &StatusLine<'_> {
    fn render (self, area: Rect, buf: &mut Buffer) {
        let status_style = match self.status {
            ConnectionStatus::Terminated(_) => THEME.status_bar.terminated,
            _ => THEME.status_bar.connected,
        };

        let line = Line::from( vec![
            Span::styled( self.summary(), THEME.status_bar.bar),
            Span::styled( self.status.to_string(), status_style),
        ]).style( THEME.status_bar.bar);

        // key help only if it fits next to the status
        let help_width = KEY_HELP.chars().count() as u16 + 1;
        let status_width = line.width() as u16;
        line.render( area, buf);

        if status_width + help_width <= area.width {
            let help_area = Rect::new( area.x + area.width - help_width, area.y, help_width, 1);
            Line::styled( KEY_HELP, THEME.status_bar.bar).right_aligned().render( help_area, buf);
        }
    }
}
