use anyhow::{anyhow, Result};
use clap::Parser;
use libnwc_codec::stream::encode_stream;
use renwc::{open_input, open_output, parse_args, StreamArgs};

#[derive(Parser)]
#[command(name = "nwc-encode")]
#[command(version)]
#[command(about = "Compress a 16-bit mono WAV neural recording into an nwc stream")]
struct Cli {
    #[command(flatten)]
    io: StreamArgs,
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();

    let mut input = open_input(cli.io.input.as_deref())?;
    let mut output = open_output(cli.io.output.as_deref())?;

    let stats =
        encode_stream(&mut input, &mut output).map_err(|e| anyhow!("encoding failed: {e}"))?;

    if cli.io.is_file_mode() {
        let raw_bytes = stats.samples * 2;
        let ratio = if stats.compressed_bytes() > 0 {
            raw_bytes as f64 / stats.compressed_bytes() as f64
        } else {
            0.0
        };
        println!("Encoded {} samples", stats.samples);
        println!(
            "  Payload: {} bytes ({:.2}x compression)",
            stats.compressed_bytes(),
            ratio
        );
    }

    Ok(())
}
