use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use log::{LevelFilter, debug, error};

static USAGE: &str = r#"
usage: binconv [INPUT]

Converts text ending in "!" to binary character codes, or binary
groups ending in "!" back to text. Without INPUT, each line read from
stdin is converted on its own.

examples:
    binconv 'hi!'
    binconv '1101000 1101001!'
"#;

fn init_logger() {
  env_logger::Builder::new()
    .filter_level(LevelFilter::Warn)
    .parse_default_env()
    .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
    .init();
}

/// Convert every stdin line, returning how many of them failed.
fn run_lines() -> io::Result<usize> {
  let stdin = io::stdin();
  let mut stdout = io::stdout().lock();
  let mut failures = 0;

  for (lineno, line) in stdin.lock().lines().enumerate() {
    match binconv::compile(&line?) {
      Ok(output) => writeln!(stdout, "{output}")?,
      Err(err) => {
        debug!("line {} failed: {}", lineno + 1, err.message());
        eprintln!("{err}");
        failures += 1;
      }
    }
  }

  Ok(failures)
}

fn main() {
  init_logger();

  let args: Vec<String> = env::args().skip(1).collect();
  match args.as_slice() {
    [] => match run_lines() {
      Ok(0) => {}
      Ok(failures) => {
        debug!("{failures} submission(s) failed");
        process::exit(1);
      }
      Err(err) => {
        error!("reading stdin: {err}");
        process::exit(1);
      }
    },
    [flag] if flag == "-h" || flag == "--help" => println!("{USAGE}"),
    [flag] if flag.starts_with('-') && !flag.ends_with('!') => {
      eprintln!("unknown option: {flag}{USAGE}");
      // FreeBSD EX_USAGE (64)
      process::exit(64);
    }
    [input] => match binconv::compile(input) {
      Ok(output) => println!("{output}"),
      Err(err) => {
        eprintln!("{err}");
        process::exit(1);
      }
    },
    _ => {
      eprintln!("{USAGE}");
      process::exit(64);
    }
  }
}
