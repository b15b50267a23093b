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

use std::sync::Arc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use tui1090_common::datetime::{EpochMillis, secs};
use tui1090_adsb::{Aircraft, AircraftStore, adsb::PositionReport, connector::ConnectorEvent};
use tui1090_map::FeatureIndex;
use tui1090_app::{
    App, AppConfig, KeyAction, ViewMode, lower_left,
    config::DEFAULT_RADIUS_MILES,
    detail_view::DetailView,
    map_view::MapView,
    list_view::{ListView, LIST_HEIGHT},
    status::ConnectionStatus,
};

fn aircraft (icao24: &str)->Aircraft { Aircraft::new( icao24.to_string(), EpochMillis::now()) }

fn aircraft_list (keys: &[&str])->Vec<Aircraft> { keys.iter().map( |k| aircraft(k)).collect() }

fn key (code: KeyCode)->KeyEvent { KeyEvent::new( code, KeyModifiers::NONE) }

fn buffer_text (buf: &Buffer)->String {
    let area = buf.area;
    let mut s = String::new();
    for y in 0..area.height {
        for x in 0..area.width { s.push_str( buf[(x,y)].symbol()) }
        s.push('\n');
    }
    s
}

// run with "cargo test -p tui1090_app test_views -- --nocapture"

#[test]
fn test_list_selection_is_stable() {
    let mut list = ListView::new();
    assert!( list.selected().is_none());

    list.update( aircraft_list( &["A00001", "B00002", "C00003"]));
    assert_eq!( list.selected_key(), Some("A00001"));
    assert!( !list.select_prev());

    assert!( list.select_next());
    assert_eq!( list.selected_key(), Some("B00002"));

    // new aircraft before the selected one: the selection stays on B
    list.update( aircraft_list( &["000000", "A00001", "B00002", "C00003"]));
    assert_eq!( list.selected_key(), Some("B00002"));
    assert_eq!( list.selected().map( |ac| ac.icao24.as_str()), Some("B00002"));

    // the selected aircraft got evicted: we select what is now at its position
    list.update( aircraft_list( &["000000", "A00001", "C00003"]));
    assert_eq!( list.selected_key(), Some("C00003"));

    list.update( aircraft_list( &["000000"]));
    assert_eq!( list.selected_key(), Some("000000"));
    assert!( !list.select_next());

    list.update( Vec::new());
    assert!( list.selected().is_none());
    assert!( list.selected_key().is_none());
}

#[test]
fn test_list_scrolling() {
    let keys: Vec<String> = (0..15).map( |i| format!("AC{i:04}")).collect();
    let mut list = ListView::new();
    list.update( keys.iter().map( |k| aircraft(k)).collect());

    let max_visible = (LIST_HEIGHT - 2) as usize;
    assert_eq!( list.max_visible(), max_visible);

    for _ in 0..12 { list.select_next(); }
    assert_eq!( list.selected_key(), Some("AC0012"));
    assert_eq!( list.scroll_offset(), 12 + 1 - max_visible);
    assert_eq!( list.visible().len(), max_visible);
    assert_eq!( list.visible()[0].icao24.as_str(), "AC0003");

    for _ in 0..12 { list.select_prev(); }
    assert_eq!( list.selected_key(), Some("AC0000"));
    assert_eq!( list.scroll_offset(), 0);

    for _ in 0..12 { list.select_next(); }
    list.set_height( 5); // clipped panel
    assert_eq!( list.max_visible(), 3);
    assert_eq!( list.scroll_offset(), 10);
    assert_eq!( list.visible().last().map( |ac| ac.icao24.as_str()), Some("AC0012"));
}

#[test]
fn test_detail_lines() {
    let t0 = EpochMillis::from_secs( 1_700_000_000);
    let store = AircraftStore::default();
    store.upsert( &PositionReport::new( "A1B2C3", t0)
        .with_callsign("UAL123")
        .with_position( 37.7749, -122.4194)
        .with_altitude( 35000)
        .with_groundspeed( 450.0)
        .with_track( 90.0)
        .with_heading( 95.0)
        .with_vertical_rate( 1200));
    let ac = store.get("A1B2C3").unwrap();

    let lines = DetailView::new( Some(&ac), t0 + secs(5)).lines();
    for line in &lines { println!("{line}") }

    assert_eq!( lines, vec![
        "ICAO:          A1B2C3",
        "Flight:        UAL123",
        "Position:      37.7749*N, 122.4194*W",
        "Altitude:      35000 ft (FL350)",
        "Speed:         450 kts",
        "Heading:       95*",
        "Track:         90*",
        "Vertical Rate: +1200 ft/min",
        "Last Seen:     5 seconds ago",
    ]);

    let ac = aircraft("FFFFFF");
    let lines = DetailView::new( Some(&ac), ac.last_update).lines();
    assert_eq!( lines[1], "Flight:        FFFFFF");
    assert_eq!( lines[2], "Position:      Position Unknown");
    assert_eq!( lines[3], "Altitude:      unknown");

    assert!( DetailView::new( None, t0).lines().is_empty());
}

#[test]
fn test_lower_left() {
    let area = Rect::new( 0, 0, 100, 40);
    assert_eq!( lower_left( area, 30, 12), Rect::new( 0, 28, 30, 12));

    let small = Rect::new( 0, 0, 20, 8);
    assert_eq!( lower_left( small, 30, 12), Rect::new( 0, 0, 20, 8));
}

#[test]
fn test_map_view_draw_frame() {
    let mut map = MapView::new( 40, 20, DEFAULT_RADIUS_MILES, 2.0, Default::default()).unwrap();
    let ac = {
        let store = AircraftStore::default();
        store.upsert( &PositionReport::new( "ABCDEF", EpochMillis::now()).with_position( 45.0, -110.0).with_track( 180.0));
        store.snapshot()
    };
    assert!( map.center_initially( &ac[0]));
    assert!( !map.center_initially( &ac[0])); // only once

    map.draw_frame( &FeatureIndex::new(), &ac, None);
    assert_eq!( map.canvas().count_symbol('v'), 1);

    // the widget copies the canvas into the buffer
    let mut buf = Buffer::empty( Rect::new( 0, 0, 40, 20));
    ratatui::widgets::Widget::render( &map, buf.area, &mut buf);
    let text = buffer_text( &buf);
    assert_eq!( text.matches('v').count(), 1);
}

fn test_app ()->(App, Arc<AircraftStore>) {
    let store = Arc::new( AircraftStore::default());
    let now = EpochMillis::now();
    store.upsert( &PositionReport::new( "AAAAAA", now).with_callsign("NOPOS"));
    store.upsert( &PositionReport::new( "BBBBBB", now).with_position( 41.0, -101.0).with_track( 45.0));
    store.upsert( &PositionReport::new( "CCCCCC", now).with_position( 35.0, -90.0).with_groundspeed( 300.0));

    let app = App::new( &AppConfig::default(), store.clone(), FeatureIndex::new()).unwrap();
    (app, store)
}

#[test]
fn test_initial_centering() {
    let (mut app, store) = test_app();
    assert!( !app.map().is_centered());

    app.update();
    assert!( app.map().is_centered());
    assert_eq!( app.list().len(), 3);

    let center = app.map().projection().center();
    assert_eq!( (center.latitude_degrees(), center.longitude_degrees()), (41.0, -101.0));

    // later aircraft don't move the map anymore
    store.upsert( &PositionReport::new( "000000", EpochMillis::now()).with_position( 30.0, -80.0));
    app.update();
    assert_eq!( app.map().projection().center().latitude_degrees(), 41.0);
}

#[test]
fn test_key_handling() {
    let (mut app, _store) = test_app();
    app.update();
    assert_eq!( app.list().selected_key(), Some("AAAAAA"));

    assert_eq!( app.handle_key( key( KeyCode::Down)), KeyAction::Draw);
    assert_eq!( app.handle_key( key( KeyCode::Down)), KeyAction::Draw);
    assert_eq!( app.list().selected_key(), Some("CCCCCC"));
    assert_eq!( app.map().projection().center().latitude_degrees(), 35.0); // selection re-centers

    app.handle_key( key( KeyCode::Up));
    assert_eq!( app.list().selected_key(), Some("BBBBBB"));
    assert_eq!( app.map().projection().center().latitude_degrees(), 41.0);

    // selecting an aircraft without position keeps the center
    app.handle_key( key( KeyCode::Up));
    assert_eq!( app.list().selected_key(), Some("AAAAAA"));
    assert_eq!( app.map().projection().center().latitude_degrees(), 41.0);

    app.handle_key( key( KeyCode::Char('+')));
    assert!( (app.map().radius_miles() - 112.5).abs() < 1e-9);
    app.handle_key( key( KeyCode::Char('-')));
    assert!( (app.map().radius_miles() - 112.5 * 1.33).abs() < 1e-9);
    for _ in 0..30 { app.handle_key( key( KeyCode::Char('_'))); }
    assert_eq!( app.map().radius_miles(), 1000.0);

    assert_eq!( app.handle_key( key( KeyCode::Enter)), KeyAction::Draw);
    assert_eq!( app.mode(), ViewMode::Detail);
    app.handle_key( key( KeyCode::Down)); // no list navigation in detail mode
    assert_eq!( app.list().selected_key(), Some("AAAAAA"));

    assert_eq!( app.handle_key( key( KeyCode::Esc)), KeyAction::Draw);
    assert_eq!( app.mode(), ViewMode::Map);

    assert_eq!( app.handle_key( key( KeyCode::Char('r'))), KeyAction::Redraw);
    assert_eq!( app.handle_key( key( KeyCode::Esc)), KeyAction::Quit);
    assert_eq!( app.handle_key( key( KeyCode::Char('Q'))), KeyAction::Quit);
    assert_eq!( app.handle_key( KeyEvent::new( KeyCode::Char('c'), KeyModifiers::CONTROL)), KeyAction::Quit);
}

#[test]
fn test_connector_status() {
    let (mut app, _store) = test_app();
    assert!( matches!( app.status(), ConnectionStatus::Connecting(_)));

    app.handle_connector_event( ConnectorEvent::Connected("localhost:30003".into()));
    assert_eq!( app.status(), &ConnectionStatus::Connected("localhost:30003".into()));

    app.handle_connector_event( ConnectorEvent::Terminated("connection closed".into()));
    assert!( app.status().is_terminated());
    assert_eq!( app.status().to_string(), "source terminated: connection closed");
}

#[test]
fn test_render_frame() {
    let (mut app, _store) = test_app();
    app.update();

    let mut terminal = Terminal::new( TestBackend::new( 100, 30)).unwrap();
    terminal.draw( |frame| app.render( frame)).unwrap();

    // the map gets everything but the status line
    assert_eq!( app.map().projection().width(), 100);
    assert_eq!( app.map().projection().height(), 29);

    // the centered aircraft (track 45) ended up on the map canvas
    assert_eq!( app.map().canvas().count_symbol('┐'), 1);

    let text = buffer_text( terminal.backend().buffer());
    println!("{text}");
    assert!( text.contains("Aircraft"));
    assert!( text.contains("NOPOS"));
    assert!( text.contains("3 aircraft"));
    assert!( text.contains("connecting to local dump1090"));

    app.handle_key( key( KeyCode::Enter));
    terminal.draw( |frame| app.render( frame)).unwrap();
    let text = buffer_text( terminal.backend().buffer());
    assert!( text.contains("Aircraft Details"));
    assert!( text.contains("ICAO:          AAAAAA"));

    // smaller terminal
    terminal.backend_mut().resize( 60, 20);
    terminal.draw( |frame| app.render( frame)).unwrap();
    assert_eq!( app.map().projection().width(), 60);
    assert_eq!( app.map().projection().height(), 19);
}
