// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - hydraform workspace automation
//!
//! `cargo xtask ci` lints, builds and tests the workspace, then feeds the
//! fixtures under `demos/` through the `hydraform` binary and checks that
//! each report has the section it should.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// A fixture under `demos/` and a line its report must contain.
struct Demo {
    subcommand: &'static str,
    path: &'static str,
    expected: &'static str,
}

const DEMOS: [Demo; 2] = [
    Demo {
        subcommand: "form",
        path: "demos/form.json",
        expected: "payload:",
    },
    Demo {
        subcommand: "collection",
        path: "demos/books.json",
        expected: "members: 2 on this page, 3 in total",
    },
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Lint, build, test, then run the demo fixtures
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Run the hydraform binary against the demo fixtures
    #[command(visible_alias = "dm")]
    Demo,

    /// Run clippy, the formatting check and typos
    #[command(visible_alias = "l")]
    Lint,

    /// Rewrite sources with rustfmt
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run unit and doc tests
    #[command(visible_alias = "t")]
    Test,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Demo => demo(),
            Self::Lint => lint(),
            Self::FixFormatting => run_cargo(&["fmt", "--all"]),
            Self::Test => test(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    demo()
}

fn build() -> Result<()> {
    run_cargo(&["build", "--all-targets"])
}

fn lint() -> Result<()> {
    run_cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])?;
    run_cargo(&["fmt", "--all", "--check"])?;
    cmd!("typos").run_with_trace()?;
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test", "--all-targets"])?;
    run_cargo(&["test", "--doc"])
}

fn demo() -> Result<()> {
    for demo in &DEMOS {
        let report: String = cmd!(
            "cargo",
            "run",
            "--quiet",
            "--package",
            "hydraform-cli",
            "--",
            demo.subcommand,
            demo.path
        )
        .read_with_trace()
        .wrap_err_with(|| format!("demo fixture {} failed", demo.path))?;

        if !report.lines().any(|line| line.contains(demo.expected)) {
            return Err(eyre!(
                "report for {} lacks '{}':\n{report}",
                demo.path,
                demo.expected
            ));
        }
        tracing::info!("{} ok", demo.path);
    }
    Ok(())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
    fn read_with_trace(&self) -> io::Result<String>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }

    fn read_with_trace(&self) -> io::Result<String> {
        tracing::info!("running command: {:?}", self);
        self.read().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
