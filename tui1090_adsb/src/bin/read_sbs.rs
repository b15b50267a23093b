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

use tokio::{self, net::TcpStream, io::{BufReader, AsyncBufReadExt}};
use anyhow::Result;
use clap::Parser;
use tui1090_common::datetime::EpochMillis;
use tui1090_adsb::{sbs::parse_msg, connector::SBS_PORT};

/// SBS socket monitoring tool that prints the decoded position reports
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// only show messages that cannot be decoded
    #[arg(short, long)]
    errors_only: bool,

    /// address ("host:port") from where to read SBS messages
    #[arg(default_value_t = format!("localhost:{SBS_PORT}"))]
    addr: String,
}

#[tokio::main]
async fn main ()->Result<()> {
    let args = Args::parse();

    let stream = TcpStream::connect( &args.addr).await?;
    let mut lines = BufReader::with_capacity( 4096, stream).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_msg( &line, EpochMillis::now()) {
            Ok(Some(report)) => if !args.errors_only { println!("{report}") }
            Ok(None) => {}
            Err(e) => println!("PARSE ERROR: {e}")
        }
    }
    Ok(())
}
