//! Shellwords command-line entry point.

use shellwords::command::execute;
use shellwords::config::Config;
use shellwords::input::Request;
use shellwords::logging::init_tracing;
use shellwords::output::format_response;

use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cwd = std::env::current_dir().ok();
    let config = match Config::load(cwd.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::from(2);
        }
    };
    init_tracing(config.log.as_deref());

    let mut input_str = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_str) {
        eprintln!("Failed to read stdin: {}", e);
        return ExitCode::from(2);
    }

    let request = match Request::parse(&input_str) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid request: {}", e);
            return ExitCode::from(2);
        }
    };

    let response = match execute(&request) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let rendered = match format_response(&response, config.output_format(), config.is_pretty()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to render response: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut stdout = io::stdout().lock();
    if stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .is_err()
    {
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
