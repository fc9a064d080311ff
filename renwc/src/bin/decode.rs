use anyhow::{anyhow, Result};
use clap::Parser;
use libnwc_codec::stream::decode_stream;
use renwc::{open_input, open_output, parse_args, StreamArgs};

#[derive(Parser)]
#[command(name = "nwc-decode")]
#[command(version)]
#[command(about = "Decompress an nwc stream back into a 16-bit mono WAV recording")]
struct Cli {
    #[command(flatten)]
    io: StreamArgs,
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();

    let mut input = open_input(cli.io.input.as_deref())?;
    let mut output = open_output(cli.io.output.as_deref())?;

    let stats =
        decode_stream(&mut input, &mut output).map_err(|e| anyhow!("decoding failed: {e}"))?;

    if cli.io.is_file_mode() {
        println!("Decoded {} samples", stats.samples);
        println!("  Output: {} bytes of PCM data", stats.samples * 2);
    }

    Ok(())
}
