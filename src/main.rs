// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nxqa CLI entrypoint.
//!
//! Runs the interactive query panel against an NXLink QA backend. Use
//! `--demo` to run against the built-in FAQ corpus without a backend.

use std::error::Error;
use std::sync::Arc;

use nxqa::client::{DemoQueryService, HttpQueryService, QueryService};

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:12023";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<endpoint>] [--log-file <path>]\n  {program} --demo [--log-file <path>]\n\n<endpoint> is the base URL of the NXLink QA service (default {DEFAULT_ENDPOINT}).\nThe panel submits queries to `POST <endpoint>/NXLinkQA/query`.\n\n--demo answers from a built-in FAQ corpus and cannot be combined with an endpoint.\n--log-file writes diagnostic traces to a file instead of stderr.\nTrace filtering follows RUST_LOG (default `nxqa=info`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    endpoint: Option<String>,
    log_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_file = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.endpoint.is_some() {
                    return Err(());
                }
                options.endpoint = Some(arg);
            }
        }
    }

    if options.demo && options.endpoint.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_tracing(log_file: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nxqa=info"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            // Stderr stays hidden behind the alternate screen while the TUI
            // runs and is flushed to the terminal on exit.
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "nxqa".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing(options.log_file.as_deref())?;

        let service: Arc<dyn QueryService> = if options.demo {
            Arc::new(DemoQueryService::new())
        } else {
            let endpoint = options.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
            Arc::new(HttpQueryService::new(endpoint))
        };

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let handle = runtime.handle().clone();

        runtime.block_on(async move {
            let tui_join = tokio::task::spawn_blocking(move || {
                nxqa::tui::run(service, handle).map_err(|err| err.to_string())
            })
            .await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(std::io::Error::new(std::io::ErrorKind::Other, err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("nxqa: {err}");
        std::process::exit(1);
    }
}
