extern crate clap;

use crossbeam_channel::{bounded, Receiver};
use ctrlc;
use env_logger;
use log::{error, info, warn};

use scpu_core::disasm::ScpuDisasmIter;
use scpu_core::mem::{Register, RegisterSnapshot};
use scpu_core::{CpuError, ScpuCpu};
use scpu_periph::{ChannelObserver, ExecEvent, LogObserver, ObserverMsg, ScpuObserver};

use std::fs::File;
use std::io::Read;

const DEFAULT_DELAY_MS: &str = "500";

fn fetch_config<'a>() -> clap::ArgMatches<'a> {
    let about = "SCPU is a fetch-decode-execute emulator for a tiny 8-bit instruction set";
    let c = clap::App::new("Simple CPU (SCPU)")
        .version("0.1")
        .about(about)
        .setting(clap::AppSettings::SubcommandRequired)
        .arg(
            clap::Arg::with_name("delay")
                .long("delay")
                .takes_value(true)
                .value_name("MS")
                .default_value(DEFAULT_DELAY_MS)
                .help("Pause between instructions in milliseconds (0 disables)"),
        )
        .arg(
            clap::Arg::with_name("reg")
                .long("reg")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .value_name("NAME=VALUE")
                .help("Preload a register before the run, e.g. A=12 or B=0x0A"),
        )
        .arg(
            clap::Arg::with_name("log-events")
                .long("log-events")
                .help("Report executed instructions through the logger instead of stdout"),
        )
        .arg(
            clap::Arg::with_name("disasm")
                .long("disasm")
                .help("Print a listing of the program instead of running it"),
        )
        .subcommand(
            clap::SubCommand::with_name("sample")
                .about("Run the LOAD / ADD / OUT sample program"),
        )
        .subcommand(
            clap::SubCommand::with_name("mask")
                .about("Run the AND sample program"),
        )
        .subcommand(
            clap::SubCommand::with_name("wrap")
                .about("Run the 8-bit wraparound sample program"),
        )
        .subcommand(
            clap::SubCommand::with_name("file")
                .about("Run a raw program image from a file")
                .arg(
                    clap::Arg::with_name("filename")
                        .index(1)
                        .required(true)
                        .help("Filename of the program image to load"),
                ),
        );
    c.get_matches()
}

fn load_program_file(filename: &str) -> Option<Vec<u8>> {
    let mut f = match File::open(filename) {
        Ok(f) => f,
        Err(x) => {
            error!("Unable to open file: {:?}. {}", filename, x);
            return None;
        }
    };

    let mut program = Vec::new();
    match f.read_to_end(&mut program) {
        Ok(_) => Some(program),
        Err(x) => {
            error!("Unable to read file: {:?}. {}", filename, x);
            None
        }
    }
}

///
/// Parses a `NAME=VALUE` register preload. The value is decimal, or hex with
/// a `0x` prefix, and must fit in 8 bits.
///
fn parse_preload(arg: &str) -> Option<(Register, u8)> {
    let mut parts = arg.splitn(2, '=');
    let name = parts.next()?.trim();
    let value = parts.next()?.trim();

    let reg: Register = name.parse().ok()?;
    let value = if value.starts_with("0x") || value.starts_with("0X") {
        u8::from_str_radix(&value[2..], 16).ok()?
    } else {
        value.parse::<u8>().ok()?
    };
    Some((reg, value))
}

fn print_listing(program: &[u8]) {
    for (pc, inst) in ScpuDisasmIter::new(program) {
        match inst {
            Ok(i) => println!("{:02X}: {}", pc, i),
            Err(CpuError::UnknownOpcode(op)) => println!("{:02X}: DB 0x{:02X}", pc, op),
            Err(x) => error!("{:02X}: {}", pc, x),
        }
    }
}

fn print_registers(snapshot: &RegisterSnapshot) {
    println!("\nFinal Register State:");
    println!("{}", snapshot);
}

fn drain_events(rx: &Receiver<ObserverMsg>) {
    for msg in rx.try_iter() {
        match msg {
            ObserverMsg::Exec(event @ ExecEvent::Out { .. }) => println!("--> {}", event),
            ObserverMsg::Exec(event @ ExecEvent::UnknownOpcode { .. }) => println!("{}", event),
            ObserverMsg::Exec(event) => println!("EXEC: {}", event),
            ObserverMsg::Halt(snapshot) => print_registers(&snapshot),
        }
    }
}

fn main() {
    env_logger::init();

    // Register for a ctrlc handler which will push a signal to the application.
    // A second ctrlc before the loop picks up the first one exits right away.
    let (ctrlc_tx, ctrlc_rx) = bounded(1);
    let res = ctrlc::set_handler(move || {
        if ctrlc_tx.is_full() {
            std::process::exit(-1);
        }
        let _res = ctrlc_tx.send(());
    });

    if let Err(x) = res {
        error!("Unable to register signal handler. {:?}.", x);
        return;
    }

    let matches = fetch_config();
    let program = match matches.subcommand() {
        ("sample", _) => scpu_programs::SAMPLE_PROGRAM.to_vec(),
        ("mask", _) => scpu_programs::MASK_PROGRAM.to_vec(),
        ("wrap", _) => scpu_programs::WRAP_PROGRAM.to_vec(),
        ("file", Some(sub_matches)) => {
            let filename = sub_matches.value_of("filename").unwrap_or_default();
            match load_program_file(filename) {
                Some(p) => p,
                None => std::process::exit(1),
            }
        }
        _ => {
            error!("Invalid subcommand. Exiting");
            std::process::exit(1);
        }
    };

    if matches.is_present("disasm") {
        print_listing(&program);
        return;
    }

    let delay_arg = matches.value_of("delay").unwrap_or(DEFAULT_DELAY_MS);
    let delay = match delay_arg.parse::<u64>() {
        Ok(d) => std::time::Duration::from_millis(d),
        Err(_) => {
            error!("Invalid delay: {:?}", delay_arg);
            std::process::exit(1);
        }
    };

    let mut preloads = Vec::new();
    for arg in matches.values_of("reg").into_iter().flatten() {
        match parse_preload(arg) {
            Some(p) => preloads.push(p),
            None => {
                error!("Invalid register preload: {:?}", arg);
                std::process::exit(1);
            }
        }
    }

    let (mut channel_observer, events_rx) = ChannelObserver::new();
    let mut log_observer = LogObserver::new();
    let observer: &mut dyn ScpuObserver = if matches.is_present("log-events") {
        &mut log_observer
    } else {
        &mut channel_observer
    };
    let mut cpu = ScpuCpu::new(observer);

    cpu.load_program(&program);
    println!("Program loaded ({} bytes).", program.len());
    for (reg, value) in preloads.iter() {
        info!("Preloading {} = {}", reg, value);
        cpu.write_reg(*reg, *value);
    }

    cpu.start();
    println!("--- CPU START ---");

    let mut fault = None;
    while cpu.is_running() {
        // Check to see if we received a ctrlc signal. If we have, we need to
        // stop stepping and report what we have.
        if ctrlc_rx.len() > 0 {
            warn!("Interrupted. Stopping CPU");
            break;
        }

        if let Err(x) = cpu.step() {
            fault = Some(x);
            break;
        }
        drain_events(&events_rx);

        if cpu.is_running() && delay.as_millis() > 0 {
            std::thread::sleep(delay);
        }
    }
    drain_events(&events_rx);
    println!("--- CPU STOPPED ---");

    if cpu.is_running() {
        print_registers(&cpu.snapshot());
    }

    if let Some(x) = fault {
        error!("CPU fault after {} cycles: {}", cpu.total_cycles, x);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod main_tests {
    use super::parse_preload;
    use scpu_core::mem::Register;

    #[test]
    fn preload_parse_test() {
        let src = [
            ("A=12", Some((Register::A, 12))),
            ("b=0x0A", Some((Register::B, 10))),
            ("D = 255", Some((Register::D, 255))),
            ("C=0XFF", Some((Register::C, 0xFF))),
            ("C=256", None),
            ("E=1", None),
            ("A", None),
            ("A=", None),
            ("A=0xZZ", None),
        ];

        for (arg, expect) in src.iter() {
            assert_eq!(parse_preload(arg), *expect, "Failed parsing {:?}", arg);
        }
    }
}
