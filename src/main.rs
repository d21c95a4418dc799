use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use conference_schedule::schedule::Schedule;

fn read_input_path() -> Result<PathBuf, anyhow::Error> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "Schedule file: ")?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(PathBuf::from(line))
}

fn run() -> Result<(), anyhow::Error> {
    let input = read_input_path()?;
    let schedule = Schedule::new(input);
    schedule.report(&mut std::io::stdout().lock())
}

pub fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run() {
        log::error!("{:#}", e);
    }
}
