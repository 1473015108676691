//! Diagnostic tool: compress, decompress or reposition a payload read from stdin.
//!
//! Usage:
//!   lzcodec_diag compress [--format base64|uri|utf16]
//!   lzcodec_diag decompress [--format base64|uri|utf16]
//!   lzcodec_diag reposition <slide>
//!
//! Set RUST_LOG=debug to see which fields the patcher rewrote.

use std::io::{self, Read, Write};

use anyhow::{anyhow, bail, Context, Result};
use lzcodec::{Format, LzCodec, PatchOutcome, PayloadPatcher};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!("usage: lzcodec_diag <compress|decompress|reposition <slide>> [--format <name>]");
    };

    let format = match args.iter().position(|a| a == "--format") {
        Some(i) => args
            .get(i + 1)
            .ok_or_else(|| anyhow!("--format needs a value"))?
            .parse::<Format>()
            .map_err(|e| anyhow!(e))?,
        None => Format::Base64,
    };

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let codec = LzCodec::default().with_format(format);
    let output = match command.as_str() {
        "compress" => codec.compress(&input)?,
        "decompress" => codec
            .decompress(input.trim_end_matches(['\r', '\n']))
            .context("decompressing stdin")?,
        "reposition" => {
            let slide: u32 = args
                .get(1)
                .ok_or_else(|| anyhow!("reposition needs a slide number"))?
                .parse()
                .context("parsing slide number")?;
            let encoded = input.trim_end_matches(['\r', '\n']);
            match PayloadPatcher::default().reposition(encoded, slide)? {
                PatchOutcome::Repositioned { payload, report } => {
                    for rewrite in &report {
                        eprintln!("{rewrite}");
                    }
                    payload
                }
                PatchOutcome::Unchanged(report) => {
                    eprintln!("unchanged: {} field(s) already at slide {slide}", report.len());
                    encoded.to_string()
                }
            }
        }
        other => bail!("unknown command: {other}"),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
