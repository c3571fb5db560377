use std::io::{self, BufRead};
use std::process::ExitCode;

use log::LevelFilter;
use warna::{Printer, Result, WarnaError, init_logger};

const USAGE: &str = "\
usage: warna [--log FILE] [-v] [--sep SEP] [-n] [TEXT ...]

Translate brace color directives like {RED(B)} into ANSI escapes.
With TEXT, print the arguments; otherwise translate stdin line by line.

options:
  --log FILE   append log output to FILE (default: $WARNA_LOG)
  -v           log at trace level, including directives left as text
  --sep SEP    separator between TEXT arguments (default: ' ')
  -n           do not print the trailing newline
  -h, --help   show this help";

#[derive(Debug, PartialEq)]
struct Config {
    log: Option<String>,
    verbose: bool,
    sep: String,
    newline: bool,
    help: bool,
    text: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: None,
            verbose: false,
            sep: " ".to_string(),
            newline: true,
            help: false,
            text: Vec::new(),
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>, env_log: Option<String>) -> Result<Config> {
    let mut config = Config {
        log: env_log.filter(|path| !path.is_empty()),
        ..Default::default()
    };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--log" => {
                let path = args
                    .next()
                    .ok_or_else(|| WarnaError::Usage("--log needs a file".to_string()))?;
                config.log = Some(path);
            }
            "--sep" => {
                config.sep = args
                    .next()
                    .ok_or_else(|| WarnaError::Usage("--sep needs a value".to_string()))?;
            }
            "-v" | "--verbose" => config.verbose = true,
            "-n" => config.newline = false,
            "-h" | "--help" => config.help = true,
            "--" => {
                config.text.extend(args.by_ref());
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(WarnaError::Usage(format!("unknown option {}", flag)));
            }
            _ => config.text.push(arg),
        }
    }

    Ok(config)
}

fn run(config: Config) -> Result<()> {
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    if let Some(path) = &config.log {
        let level = if config.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Debug
        };
        init_logger(path, level)?;
    }

    let end = if config.newline { "\n" } else { "" };
    let mut printer = Printer::stdout().sep(config.sep.as_str()).end(end);

    if !config.text.is_empty() {
        let args: Vec<&dyn warna::PrintArg> = config
            .text
            .iter()
            .map(|text| text as &dyn warna::PrintArg)
            .collect();
        return printer.print(&args);
    }

    log::debug!("translating stdin");
    for line in io::stdin().lock().lines() {
        let line = line?;
        printer.print(&[&line])?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match parse_args(std::env::args().skip(1), std::env::var("WARNA_LOG").ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warna: {}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("warna: {}", e);
            ExitCode::FAILURE
        }
    }
}
