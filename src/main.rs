//! `downloader [URL]` - fetch one URL and print the status and body.

use anyhow::Result;
use clap::Parser;
use downloader::{Curl, Request, download};
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_URL: &str = "http://example.org";

#[derive(Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// URL to fetch
    url: Option<String>,
}

fn is_option(arg: &str) -> bool {
    arg.starts_with('-')
}

/// Parse the arguments after the program name. `None` means usage should be printed.
///
/// Flag-like tokens are rejected before clap sees them, since clap would take `--` as its
/// end-of-options marker.
fn parse_args<I>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.len() > 1 || args.iter().any(|arg| is_option(arg)) {
        return None;
    }
    Cli::try_parse_from(std::iter::once("downloader".to_string()).chain(args)).ok()
}

fn exe_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg| {
            Path::new(&arg)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "<exe>".to_string())
}

fn print_usage() -> ExitCode {
    eprintln!("Usage: {} [URL]", exe_name());
    ExitCode::FAILURE
}

fn run() -> Result<ExitCode> {
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    let Some(cli) = parse_args(args) else {
        return Ok(print_usage());
    };

    let request = Request::new(cli.url.unwrap_or_else(|| DEFAULT_URL.to_string()));

    println!("downloader {}", downloader::VERSION);
    println!("downloading: {}...", request.url);

    let _curl = Curl::new()?;
    match download(&request) {
        Ok(response) => {
            println!("success ({})\n{}", response.code, response.text());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("error ({}): {}", err.code, err.text);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match std::panic::catch_unwind(run) {
        Ok(Ok(code)) => code,
        Ok(Err(err)) => {
            eprintln!("PANIC: {err:#}");
            ExitCode::FAILURE
        }
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned());
            match message {
                Some(message) => eprintln!("PANIC: {message}"),
                None => eprintln!("PANIC!"),
            }
            ExitCode::FAILURE
        }
    }
}
