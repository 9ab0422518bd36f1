use std::fs;
use std::io::{self, Read};

use bt_dpi_core::{analyze, DpiConfig, FlowTuple};
use clap::Parser;

/// Replays a captured payload through the DPI core and prints the verdict.
///
/// Not part of the core's contract (the core is a library called from a
/// capture loop); this is a manual testing harness, the same role the
/// teacher crate's own `main.rs` plays over its library.
#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long, help = "path to a file containing the raw payload bytes; omit to read stdin")]
    file: Option<String>,
    #[clap(long, help = "treat the payload as a UDP datagram rather than a TCP stream")]
    udp: bool,
    #[clap(long, help = "destination IP, dotted-quad or colon-hex (only consulted by the LSD detector)")]
    dst_ip: Option<String>,
    #[clap(long, help = "destination port (only consulted by the LSD detector)")]
    dst_port: Option<u16>,
    #[clap(short, long, help = "path to a DpiConfig TOML file; defaults to the spec's built-in defaults")]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let payload = read_payload(args.file.as_deref())?;
    let config = match args.config {
        Some(path) => DpiConfig::from_file(&path)?,
        None => DpiConfig::default(),
    };
    let flow = FlowTuple::new(args.dst_ip, args.dst_port);

    let result = analyze(&payload, args.udp, &flow, &config);
    println!("{}", result);

    Ok(())
}

fn read_payload(file: Option<&str>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
