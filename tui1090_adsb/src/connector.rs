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

use std::{fmt, process::Stdio, sync::Arc, time::Duration};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader},
    net::TcpStream,
    process::{Child, Command},
    sync::mpsc,
    task::JoinHandle,
    time::{sleep, timeout},
};
use tokio_util::sync::CancellationToken;
use serde::{Serialize,Deserialize};
use tracing::{debug, info, warn};
use tui1090_common::datetime::EpochMillis;

use crate::{AircraftStore, errors::{AdsbError, Result, connect_error}, sbs::parse_msg};

/// the default SBS port of dump1090
pub const SBS_PORT: u16 = 30003;

pub const LOCAL_CONNECT_ATTEMPTS: usize = 10;
pub const LOCAL_CONNECT_DELAY: Duration = Duration::from_millis(500);

/// longest line we accept. SBS lines are about 100 bytes, anything beyond this is not from a decoder
pub const MAX_LINE_LEN: usize = 1024;

const EVENT_QUEUE_LEN: usize = 16;

/// where we get SBS messages from
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum SbsSource {
    /// connect to an already running decoder at "host:port"
    Network(String),
    /// spawn a local decoder process and connect to its SBS port on localhost
    Local { command: String, args: Vec<String>, port: u16 },
}

impl SbsSource {
    /// the default local source, which runs `dump1090 --net --quiet`
    pub fn local_dump1090 ()->Self {
        SbsSource::Local {
            command: "dump1090".to_string(),
            args: vec!["--net".to_string(), "--quiet".to_string()],
            port: SBS_PORT
        }
    }
}

impl fmt::Display for SbsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SbsSource::Network(addr) => write!( f, "{addr}"),
            SbsSource::Local{command,port,..} => write!( f, "local {command} (port {port})")
        }
    }
}

/// state changes of the connector that are reported to the controlling task
#[derive(Debug,Clone,PartialEq)]
pub enum ConnectorEvent {
    Connected(String),
    /// the source is gone, the string holds the reason. The connector does not reconnect
    Terminated(String),
}

/// counts of processed input lines
#[derive(Debug,Clone,Copy,Default,PartialEq)]
pub struct ConnectorStats {
    pub n_lines: u64,
    pub n_reports: u64,
    pub n_ignored: u64,
    pub n_errors: u64,
}

/// runs a background task that reads SBS lines from a source, decodes them and merges the resulting
/// reports into a shared `AircraftStore`.
///
/// The connector owns both the reader task and the receiving end of its event queue. `shutdown` first stops
/// and joins the task (which closes the socket and kills a spawned decoder process) and only then drops the queue
pub struct SbsConnector {
    source: SbsSource,
    cancel: CancellationToken,
    task: Option<JoinHandle<ConnectorStats>>,
    rx: Option<mpsc::Receiver<ConnectorEvent>>,
}

impl SbsConnector {
    pub fn start (source: SbsSource, store: Arc<AircraftStore>)->Self {
        let (tx,rx) = mpsc::channel( EVENT_QUEUE_LEN);
        let cancel = CancellationToken::new();
        let task = tokio::spawn( run_connector( source.clone(), store, tx, cancel.clone()));

        SbsConnector { source, cancel, task: Some(task), rx: Some(rx) }
    }

    pub fn source (&self)->&SbsSource { &self.source }

    pub fn is_running (&self)->bool {
        self.task.as_ref().map( |t| !t.is_finished()).unwrap_or(false)
    }

    /// wait for the next state change. Returns `None` after shutdown or once the task is done and all
    /// events have been consumed. This is cancel safe and hence can be used in `select!` loops
    pub async fn next_event (&mut self)->Option<ConnectorEvent> {
        match &mut self.rx {
            Some(rx) => rx.recv().await,
            None => None
        }
    }

    /// stop the reader task and wait until it has released the source. Calling this more than once is a no-op.
    /// Returns the line statistics of the terminated task
    pub async fn shutdown (&mut self)->Option<ConnectorStats> {
        let task = self.task.take()?;
        self.cancel.cancel();

        let stats = match task.await {
            Ok(stats) => Some(stats),
            Err(e) => { warn!("SBS connector task failed: {e}"); None }
        };

        // only now it is safe to drop the queue
        self.rx = None;
        stats
    }
}

impl Drop for SbsConnector {
    fn drop (&mut self) {
        // we can't join here but the token still stops the task, which releases the source
        self.cancel.cancel();
    }
}

/// the connector task: connect, then read lines until the source closes or we get cancelled
async fn run_connector (source: SbsSource, store: Arc<AircraftStore>, tx: mpsc::Sender<ConnectorEvent>, cancel: CancellationToken)->ConnectorStats {
    let mut stats = ConnectorStats::default();

    let conn = tokio::select! {
        _ = cancel.cancelled() => { return stats }
        res = connect( &source) => res
    };

    match conn {
        Ok((stream, child)) => {
            info!("connected to SBS source {source}");
            send_event( &tx, ConnectorEvent::Connected( source.to_string()));

            let reason = read_lines( stream, &store, &cancel, &mut stats).await;

            if let Some(mut child) = child {
                if let Err(e) = child.kill().await {
                    warn!("failed to kill decoder process: {e}")
                }
            }

            info!("SBS connector terminated ({}): {:?}", reason.as_deref().unwrap_or("shutdown"), stats);
            if let Some(reason) = reason {
                send_event( &tx, ConnectorEvent::Terminated(reason));
            }
        }
        Err(e) => {
            warn!("failed to connect to SBS source {source}: {e}");
            send_event( &tx, ConnectorEvent::Terminated( e.to_string()));
        }
    }

    stats
}

// we never block the reader on a full queue. The controlling task might be busy shutting us down
fn send_event (tx: &mpsc::Sender<ConnectorEvent>, event: ConnectorEvent) {
    if let Err(e) = tx.try_send( event) {
        warn!("dropped connector event: {e}")
    }
}

/// read and process lines until the stream ends, fails or `cancel` is triggered.
/// Returns the termination reason, or `None` if we were cancelled
async fn read_lines<R> (stream: R, store: &AircraftStore, cancel: &CancellationToken, stats: &mut ConnectorStats)->Option<String>
    where R: AsyncRead + Unpin
{
    let mut reader = BufReader::with_capacity( 8192, stream);
    let mut buf: Vec<u8> = Vec::with_capacity(256);
    let mut skipping = false; // inside the remainder of an overlong line

    loop {
        buf.clear();
        let mut limited = (&mut reader).take( MAX_LINE_LEN as u64 + 1);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return None,
            res = limited.read_until( b'\n', &mut buf) => match res {
                Ok(0) => return Some("connection closed by source".to_string()),
                Ok(_) => {
                    let complete = buf.last() == Some(&b'\n');
                    if skipping {
                        if complete { skipping = false }
                    } else if !complete && buf.len() > MAX_LINE_LEN {
                        stats.n_lines += 1;
                        stats.n_errors += 1;
                        debug!("dropping SBS line exceeding {MAX_LINE_LEN} bytes");
                        skipping = true;
                    } else {
                        let line = String::from_utf8_lossy( &buf);
                        process_line( &line, store, stats);
                    }
                }
                Err(e) => return Some( format!("error reading SBS source: {e}"))
            }
        }
    }
}

fn process_line (line: &str, store: &AircraftStore, stats: &mut ConnectorStats) {
    stats.n_lines += 1;

    match parse_msg( line, EpochMillis::now()) {
        Ok(Some(report)) => {
            if store.upsert( &report) { stats.n_reports += 1 } else { stats.n_ignored += 1 }
        }
        Ok(None) => stats.n_ignored += 1,
        Err(e) => {
            stats.n_errors += 1;
            debug!("{e}");
        }
    }
}

/// establish the stream for a source. For local sources this spawns the decoder process and retries
/// connecting to its port while it starts up
async fn connect (source: &SbsSource)->Result<(TcpStream,Option<Child>)> {
    match source {
        SbsSource::Network(addr) => {
            let stream = TcpStream::connect( addr.as_str()).await
                .map_err( |e| connect_error!("failed to connect to {}: {}", addr, e))?;
            Ok( (stream, None) )
        }

        SbsSource::Local{ command, args, port } => {
            let mut child = Command::new( command)
                .args( args)
                .stdin( Stdio::null())
                .stdout( Stdio::null())
                .stderr( Stdio::piped())
                .kill_on_drop( true)
                .spawn()
                .map_err( |e| connect_error!("failed to start {}: {}", command, e))?;
            debug!("spawned {command} {}", args.join(" "));

            let mut last_err = String::new();
            for attempt in 1..=LOCAL_CONNECT_ATTEMPTS {
                sleep( LOCAL_CONNECT_DELAY).await;
                match TcpStream::connect( ("localhost", *port)).await {
                    Ok(stream) => return Ok( (stream, Some(child)) ),
                    Err(e) => {
                        debug!("connect attempt {attempt} to port {port} failed: {e}");
                        last_err = e.to_string();
                    }
                }
            }

            let stderr = read_stderr( &mut child).await;
            if let Err(e) = child.kill().await { warn!("failed to kill {command}: {e}") }

            Err( connect_error!("failed to connect to {} SBS port {} after {} attempts: {}\n{} stderr: {}",
                                command, port, LOCAL_CONNECT_ATTEMPTS, last_err, command, stderr))
        }
    }
}

// whatever the process has written so far, without waiting for more
async fn read_stderr (child: &mut Child)->String {
    let mut buf = vec![0u8; 1024];
    if let Some(stderr) = child.stderr.as_mut() {
        if let Ok(Ok(n)) = timeout( Duration::from_millis(100), stderr.read( &mut buf)).await {
            return String::from_utf8_lossy( &buf[..n]).trim().to_string()
        }
    }
    String::new()
}
