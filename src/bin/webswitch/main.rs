// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `webswitch` - command-line access to a `WebSwitch` device.

mod cli;
mod error;

use std::time::Duration;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use webswitch_lib::{DeviceClient, HttpTransport, TemperatureSensorCollection};

use cli::{Cli, Commands};
use error::{CliError, exit_codes};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> error::Result<()> {
    let client = build_client(&cli)?;

    match cli.command.unwrap_or_default() {
        Commands::Temps { indices } => {
            let sensors = client.get_temperatures(&indices, None).await?;
            print_temperatures(&sensors, cli.json)?;
        }
        Commands::Temp { sensor } => {
            let id = cli::sensor_id(&sensor);
            let value = client.get_temperature(id.clone(), None).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&json!({ "sensor": id, "value": value }))?);
            } else {
                println!("{value}");
            }
        }
        Commands::RelaySet { index, state } => {
            client.set_relay(index, state.is_on(), None).await?;
            print_relay(index, state.is_on(), cli.json)?;
        }
        Commands::RelayGet { index } => {
            let on = client.get_relay_state(index, None).await?;
            print_relay(index, on, cli.json)?;
        }
    }

    Ok(())
}

fn build_client(cli: &Cli) -> error::Result<DeviceClient<HttpTransport>> {
    let mut builder =
        DeviceClient::builder(&cli.url).with_timeout(Duration::from_millis(cli.timeout));
    if let (Some(user), Some(password)) = (&cli.user, &cli.password) {
        builder = builder.with_credentials(user, password);
    }
    Ok(builder.build()?)
}

fn print_temperatures(sensors: &TemperatureSensorCollection, as_json: bool) -> error::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(sensors)?);
        return Ok(());
    }

    for sensor in sensors {
        println!("{sensor}");
    }
    if sensors.has_failures() {
        println!(
            "Unable to read the sensors with the following requested indexes: {}",
            sensors.failed_indices_csv()
        );
    }
    Ok(())
}

fn print_relay(index: u8, on: bool, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&json!({ "relay": index, "on": on }))?);
    } else {
        println!("Relay {index}: {}", if on { "on" } else { "off" });
    }
    Ok(())
}
