pub mod error;
pub mod process;
mod system;
pub mod wait;

use crate::commands::{self, Command};
use crate::config;
use crate::process::TerminationOutcome;
use error::Result;
use log::{debug, warn};
use nix::sys::signal::{kill, Signal};
use wait::{Supervisor, WaitOptions};

pub fn run(config: &config::Config, args: &[String], literal: bool) -> ! {
    match run_impl(config, args, literal) {
        Ok(outcome) => {
            println!("{}", outcome);
            std::process::exit(0)
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1)
        }
    }
}

fn run_impl(config: &config::Config, args: &[String], literal: bool) -> Result<TerminationOutcome> {
    let default = Command::new(config.default_command.clone())?;
    let command = commands::resolve(args, literal, &default);
    debug!("resolved command: {}", command);

    let handle = process::spawn(command)?;
    let pid = handle.pid();

    let supervisor = Supervisor::new(WaitOptions {
        observe_stops: config.observe_stops,
    });
    let outcome = supervisor.wait_for(handle)?;

    // A stopped child would stay suspended once we exit. Let it run on; it is
    // reparented and reaped by init.
    if let TerminationOutcome::StoppedBySignal { .. } = outcome {
        if let Err(err) = kill(pid, Signal::SIGCONT) {
            warn!("cannot resume stopped pid {}: {}", pid, err);
        }
    }

    Ok(outcome)
}
