//! Small command-line tool exercising the `declopt` parser.
//!
//! Prints every resolved option as `name = value`, one per line, in
//! declaration order. Set `RUST_LOG=declopt=trace` to watch the matcher.

mod arguments;
mod error;

use std::io::Write;

use log::info;

use crate::arguments::Invocation;
use crate::error::DemoError;

fn run() -> Result<i32, DemoError> {
    let parser = arguments::build_parser()?;

    let (opts, cmdline) = match arguments::parse_args(&parser, std::env::args()) {
        Ok(Invocation::Run(opts, cmdline)) => (opts, cmdline),
        Ok(Invocation::Help) => {
            let _ = parser.write_usage(&mut std::io::stdout());
            return Ok(0);
        }
        Err(e) => {
            eprintln!("{}: {}", parser.name(), e);
            let _ = parser.write_usage(&mut std::io::stderr());
            return Ok(e.exit_code());
        }
    };

    info!(
        "greeting {} x{} at level {:?}",
        cmdline.name, cmdline.count, cmdline.level
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (name, slot) in opts.iter() {
        let _ = write!(out, "{} = {}\n", name, slot);
    }

    if cmdline.verbose {
        let given = opts.iter().filter(|(n, _)| opts.is_present(n)).count();
        eprintln!("{}: {} option(s) given", parser.name(), given);
    }

    opts.release();
    Ok(0)
}

fn main() {
    env_logger::init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("declopt-demo: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
