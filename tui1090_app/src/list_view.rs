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
use tui1090_adsb::Aircraft;
use crate::theme::THEME;

pub const LIST_WIDTH: u16 = 30;
pub const LIST_HEIGHT: u16 = 12;

const SCROLL_HINT: &str = "↕";

/// the aircraft list panel. The selection follows the ICAO address of the selected aircraft, i.e. it
/// stays on the same aircraft if others are added or evicted. If the selected aircraft goes away
/// the selection moves to the entry that now has its list position
pub struct ListView {
    aircraft: Vec<Aircraft>,
    selected: Option<String>,
    selected_index: usize,
    scroll_offset: usize,
    max_visible: usize,
}

impl ListView {
    pub fn new ()->Self {
        ListView {
            aircraft: Vec::new(),
            selected: None,
            selected_index: 0,
            scroll_offset: 0,
            max_visible: visible_rows( LIST_HEIGHT),
        }
    }

    /// replace the list with a new store snapshot
    pub fn update (&mut self, aircraft: Vec<Aircraft>) {
        self.aircraft = aircraft;

        if self.aircraft.is_empty() {
            self.selected = None;
            self.selected_index = 0;
            self.scroll_offset = 0;
        } else {
            let idx = self.selected.as_deref()
                .and_then( |key| self.aircraft.iter().position( |ac| ac.icao24.as_str() == key))
                .unwrap_or( self.selected_index.min( self.aircraft.len() - 1));
            self.select_index( idx);
        }
    }

    fn select_index (&mut self, idx: usize) {
        if let Some(ac) = self.aircraft.get( idx) {
            self.selected_index = idx;
            self.selected = Some( ac.icao24.to_string());
            self.adjust_scroll();
        }
    }

    /// move the selection down. Returns true if it changed
    pub fn select_next (&mut self)->bool {
        if self.selected_index + 1 < self.aircraft.len() {
            self.select_index( self.selected_index + 1);
            true
        } else {
            false
        }
    }

    /// move the selection up. Returns true if it changed
    pub fn select_prev (&mut self)->bool {
        if self.selected_index > 0 && !self.aircraft.is_empty() {
            self.select_index( self.selected_index - 1);
            true
        } else {
            false
        }
    }

    fn adjust_scroll (&mut self) {
        if self.selected_index >= self.scroll_offset + self.max_visible {
            self.scroll_offset = self.selected_index + 1 - self.max_visible;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
    }

    pub fn selected (&self)->Option<&Aircraft> {
        if self.selected.is_some() { self.aircraft.get( self.selected_index) } else { None }
    }

    pub fn selected_key (&self)->Option<&str> { self.selected.as_deref() }

    /// the last snapshot, in store order
    pub fn aircraft (&self)->&[Aircraft] { &self.aircraft }

    pub fn len (&self)->usize { self.aircraft.len() }
    pub fn is_empty (&self)->bool { self.aircraft.is_empty() }

    pub fn scroll_offset (&self)->usize { self.scroll_offset }
    pub fn max_visible (&self)->usize { self.max_visible }

    /// the aircraft that fit into the panel
    pub fn visible (&self)->&[Aircraft] {
        let end = (self.scroll_offset + self.max_visible).min( self.aircraft.len());
        &self.aircraft[self.scroll_offset.min(end)..end]
    }

    /// adapt to the (possibly clipped) panel height
    pub fn set_height (&mut self, height: u16) {
        self.max_visible = visible_rows( height);
        self.adjust_scroll();
    }
}

impl Default for ListView {
    fn default()->Self { ListView::new() }
}

// rows inside the border, at least one
fn visible_rows (height: u16)->usize {
    (height.saturating_sub(2) as usize).max(1)
}

impl Widget for &ListView {
    fn render (self, area: Rect, buf: &mut Buffer) {
        Clear.render( area, buf);

        let mut block = Block::bordered()
            .style( THEME.panel)
            .border_style( THEME.panel_border)
            .title( Line::styled(" Aircraft ", THEME.panel_title).centered());
        if self.aircraft.len() > self.max_visible {
            block = block.title( Line::styled( SCROLL_HINT, THEME.list.scroll_hint).right_aligned());
        }
        let inner = block.inner( area);
        block.render( area, buf);

        let items: Vec<ListItem> = self.visible().iter().map( |ac| ListItem::new( ac.list_display())).collect();
        let list = List::new( items)
            .style( THEME.list.item)
            .highlight_style( THEME.list.selected);

        let selected = self.selected.as_ref().map( |_| self.selected_index - self.scroll_offset);
        let mut state = ListState::default().with_selected( selected);
        StatefulWidget::render( list, inner, buf, &mut state);
    }
}
