use std::fmt;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

mod error;
mod mac;
mod progress;
mod signals;
mod target;
mod wol;

use error::WakeError;
use mac::MacAddr;
use progress::{Countdown, Render};
use target::Target;
use wol::MagicPacket;

const DEFAULT_WAIT_SECS: u64 = 20;

#[derive(Parser, Debug)]
#[command(about = "Send a wake up signal to a sleeping computer on the local network", long_about = None)]
struct Args {
    /// MAC address of the computer to wake (required), colon- or
    /// hyphen-delimited hex.
    // optional at the clap layer so -v/--version works without it
    #[arg(short, long)]
    mac: Option<String>,

    /// IPv4 address of the computer, can not be used with -H.
    #[arg(short, long)]
    ip: Option<String>,

    /// DNS hostname of the computer, can not be used with -i.
    #[arg(short = 'H', long)]
    hostname: Option<String>,

    /// UDP port the wake up signal is sent to.
    #[arg(short, long, default_value_t = wol::WAKE_PORT)]
    port: u16,

    /// How many seconds to wait for the computer to wake up.
    #[arg(short, long, default_value_t = DEFAULT_WAIT_SECS)]
    wait: u64,

    /// Show a spinner during the wait instead of the seconds counter.
    #[arg(short, long)]
    spinner: bool,

    /// Print the resolved target and packet details before waiting.
    #[arg(short, long)]
    debug: bool,

    /// Print the version and license banner, then exit.
    #[arg(short = 'v', long)]
    version: bool,
}

/// Program identity, built once at startup.
struct Banner {
    program: &'static str,
    version: &'static str,
    license: &'static str,
}

impl Banner {
    fn current() -> Self {
        Banner {
            program: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            license: "License MIT, https://opensource.org/licenses/MIT",
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            format!("{} (version {})", self.program, self.version).yellow()
        )?;
        write!(f, "{}", self.license.yellow())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.version {
        println!("{}", Banner::current());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, WakeError> {
    let stop = Arc::new(AtomicBool::new(false));
    signals::watch(Arc::clone(&stop)).map_err(WakeError::SignalSetup)?;

    // all validation happens before the socket is opened
    let mac: MacAddr = args
        .mac
        .as_deref()
        .ok_or(WakeError::InvalidArguments("the --mac option is required"))?
        .parse()?;
    let target = Target::resolve(args.ip.as_deref(), args.hostname.as_deref(), args.port)?;

    let packet = MagicPacket::new(&mac);
    let sent = packet.send(&target).map_err(WakeError::SendFailure)?;
    if args.debug {
        println!("{}", format!("\tTarget : {} ({})", target, target.addr()).blue());
        println!("{}", format!("\tMAC    : {mac}").blue());
        println!(
            "{}",
            format!("\tSent   : {sent} of {} payload bytes", packet.as_bytes().len()).blue()
        );
    }

    let render = if args.spinner {
        Render::Spinner
    } else {
        Render::Counter
    };
    let countdown = Countdown::new(args.wait)
        .message(format!("sleeping for {} seconds", args.wait))
        .render(render)
        .start(Arc::clone(&stop));
    let _ = countdown.join();

    if stop.load(Ordering::Relaxed) {
        return Ok(ExitCode::from(signals::SIGNAL_EXIT_CODE));
    }

    println!(
        "{}",
        format!(
            "The computer ({target}) with MAC address {mac} should be awake now."
        )
        .green()
    );
    Ok(ExitCode::SUCCESS)
}
