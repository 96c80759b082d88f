// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod report;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use hydraform_fields::{FormField, FormPayload, fields_from_json};
use hydraform_hydra::ApiListResponse;
use std::path::PathBuf;
use tracing::info;

/// hydraform - inspect form field records and Hydra collection pages
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a JSON array of field records and print the form and its payload
    Form {
        /// Path to the field records
        file: PathBuf,
    },
    /// Decode one page of a Hydra collection and print its summary
    Collection {
        /// Path to the collection page
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Form { file } => {
            info!("Reading field records from {}", file.display());
            let input: String = std::fs::read_to_string(&file)?;
            let fields: Vec<FormField> = fields_from_json(&input)?;
            let payload: FormPayload = FormPayload::from_fields(&fields)?;
            print!("{}", report::render_form(&fields, &payload)?);
        }
        Command::Collection { file } => {
            info!("Reading collection page from {}", file.display());
            let input: String = std::fs::read_to_string(&file)?;
            let page: ApiListResponse = ApiListResponse::from_json(&input)?;
            print!("{}", report::render_collection(&page));
        }
    }

    Ok(())
}
