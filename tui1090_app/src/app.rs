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

use std::{io, panic, sync::Arc};
use futures::StreamExt;
use tokio::{select, time::{interval, MissedTickBehavior}};
use tokio_util::sync::CancellationToken;
use crossterm::{
    event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Frame};
use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use tui1090_common::datetime::EpochMillis;
use tui1090_adsb::{AircraftStore, connector::{ConnectorEvent, SbsConnector}};
use tui1090_map::FeatureIndex;

use crate::{
    config::AppConfig,
    list_view::{ListView, LIST_WIDTH, LIST_HEIGHT},
    detail_view::{DetailView, DETAIL_WIDTH, DETAIL_HEIGHT},
    map_view::MapView,
    status::{ConnectionStatus, StatusLine},
    lower_left,
};

/// the map dimensions we start with, until we know the terminal area
const INITIAL_MAP_SIZE: (u16,u16) = (80, 24);

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ViewMode {
    Map,    // map with aircraft list
    Detail, // map with detail panel of the selected aircraft
}

/// what the event loop has to do after we processed a key
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum KeyAction {
    Draw,
    Redraw, // clear the terminal first
    Quit,
}

/// the view controller. This is only accessed from the render loop, the only state it shares with
/// the background tasks is the aircraft store
pub struct App {
    store: Arc<AircraftStore>,
    features: FeatureIndex,
    map: MapView,
    list: ListView,
    mode: ViewMode,
    status: ConnectionStatus,
}

impl App {
    pub fn new (config: &AppConfig, store: Arc<AircraftStore>, features: FeatureIndex)->Result<Self> {
        let map = MapView::new( INITIAL_MAP_SIZE.0, INITIAL_MAP_SIZE.1, config.radius_miles, config.aspect, config.zoom_limits)
            .context("invalid map configuration")?;

        Ok( App {
            store,
            features,
            map,
            list: ListView::new(),
            mode: ViewMode::Map,
            status: ConnectionStatus::connecting( &config.source),
        })
    }

    pub fn mode (&self)->ViewMode { self.mode }
    pub fn map (&self)->&MapView { &self.map }
    pub fn list (&self)->&ListView { &self.list }
    pub fn status (&self)->&ConnectionStatus { &self.status }

    /// per tick: take a new store snapshot and center the map if this is the first aircraft with position
    pub fn update (&mut self) {
        if !self.map.is_centered() {
            if let Some(ac) = self.store.first_locked() {
                self.map.center_initially( &ac);
            }
        }

        self.list.update( self.store.snapshot());
    }

    pub fn handle_key (&mut self, key: KeyEvent)->KeyAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains( KeyModifiers::CONTROL) => return KeyAction::Quit,

            KeyCode::Esc => {
                if self.mode == ViewMode::Detail {
                    self.mode = ViewMode::Map;
                } else {
                    return KeyAction::Quit
                }
            }
            KeyCode::Enter => {
                if self.mode == ViewMode::Map { self.mode = ViewMode::Detail }
            }
            KeyCode::Up => {
                if self.mode == ViewMode::Map && self.list.select_prev() { self.center_on_selected() }
            }
            KeyCode::Down => {
                if self.mode == ViewMode::Map && self.list.select_next() { self.center_on_selected() }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.map.zoom_in(),
            KeyCode::Char('-') | KeyCode::Char('_') => self.map.zoom_out(),
            KeyCode::Char('r') | KeyCode::Char('R') => return KeyAction::Redraw,
            _ => {}
        }
        KeyAction::Draw
    }

    fn center_on_selected (&mut self) {
        if let Some(ac) = self.list.selected() {
            self.map.center_on( ac);
        }
    }

    pub fn handle_connector_event (&mut self, event: ConnectorEvent) {
        match &event {
            ConnectorEvent::Connected(src) => info!("connected to {src}"),
            ConnectorEvent::Terminated(reason) => warn!("SBS source terminated: {reason}"),
        }
        self.status = ConnectionStatus::from_event( event);
    }

    /// render everything into the terminal frame. This also adapts the map to the frame size
    pub fn render (&mut self, frame: &mut Frame) {
        let [map_area, status_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas( frame.area());

        self.map.fit( map_area.width, map_area.height);
        self.map.draw_frame( &self.features, self.list.aircraft(), self.list.selected_key());
        frame.render_widget( &self.map, map_area);

        match self.mode {
            ViewMode::Map => {
                let area = lower_left( map_area, LIST_WIDTH, LIST_HEIGHT);
                self.list.set_height( area.height);
                frame.render_widget( &self.list, area);
            }
            ViewMode::Detail => {
                let area = lower_left( map_area, DETAIL_WIDTH, DETAIL_HEIGHT);
                let detail = DetailView::new( self.list.selected(), EpochMillis::now());
                frame.render_widget( &detail, area);
            }
        }

        let status = StatusLine { n_aircraft: self.list.len(), radius_miles: self.map.radius_miles(), status: &self.status };
        frame.render_widget( &status, status_area);
    }
}

//--- terminal handling

/// enter raw mode and the alternate screen. This also installs a panic hook that restores the terminal
pub fn init_terminal ()->io::Result<Terminal<impl Backend>> {
    let backend = CrosstermBackend::new( io::stderr());
    let mut terminal = Terminal::new( backend)?;

    terminal::enable_raw_mode()?;
    crossterm::execute!( io::stderr(), EnterAlternateScreen)?;

    let panic_hook = panic::take_hook();
    panic::set_hook( Box::new( move |panic| {
        if let Err(e) = restore_terminal() { eprintln!("failed to reset the terminal: {e}") }
        panic_hook( panic);
    }));

    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore_terminal ()->io::Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!( io::stderr(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}

//--- the application run loop

/// start the background tasks, run the UI until the user quits, then shut down in order:
/// connector (which closes the source) first, then eviction, then the terminal
pub async fn run (config: AppConfig, features: FeatureIndex)->Result<()> {
    let store = Arc::new( AircraftStore::new( config.drop_after));
    let mut app = App::new( &config, store.clone(), features)?;

    let cancel = CancellationToken::new();
    let eviction = store.spawn_eviction_task( config.evict_interval, cancel.clone());
    let mut connector = SbsConnector::start( config.source.clone(), store.clone());
    info!("started SBS connector for {}", config.source);

    let res = match init_terminal() {
        Ok(mut terminal) => {
            let res = run_loop( &mut terminal, &mut app, &mut connector, &config).await;
            if let Err(e) = restore_terminal() { error!("failed to restore terminal: {e}") }
            res
        }
        Err(e) => Err( e).context("failed to initialize terminal")
    };

    if let Some(stats) = connector.shutdown().await {
        info!("SBS connector terminated: {} lines, {} reports, {} ignored, {} errors",
              stats.n_lines, stats.n_reports, stats.n_ignored, stats.n_errors);
    }
    cancel.cancel();
    if let Err(e) = eviction.await { warn!("eviction task failed: {e}") }

    res
}

async fn run_loop (terminal: &mut Terminal<impl Backend>, app: &mut App, connector: &mut SbsConnector, config: &AppConfig)->Result<()> {
    let mut events = EventStream::new();
    let mut ticker = interval( config.tick_interval);
    ticker.set_missed_tick_behavior( MissedTickBehavior::Skip);

    loop {
        select! {
            biased;

            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        match app.handle_key( key) {
                            KeyAction::Quit => break,
                            KeyAction::Redraw => { terminal.clear()?; }
                            KeyAction::Draw => {}
                        }
                        terminal.draw( |frame| app.render( frame))?;
                    }
                    Some(Ok(CrosstermEvent::Resize(w,h))) => {
                        debug!("terminal resized to {w}x{h}");
                        terminal.autoresize()?;
                        terminal.draw( |frame| app.render( frame))?;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err( e).context("terminal event error"),
                    None => break
                }
            }

            Some(event) = connector.next_event() => {
                app.handle_connector_event( event);
            }

            _ = ticker.tick() => {
                app.update();
                terminal.draw( |frame| app.render( frame))?;
            }
        }
    }

    Ok(())
}
