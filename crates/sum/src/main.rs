// Copyright 2026 XC320 Project Developers

//! Command-line digesting utility for XC320.
//!
//! Digests a file, standard input or a literal string with the streaming
//! hasher, and verifies digests in check mode.

use std::{
	fs::File,
	io::{ErrorKind, Read},
	path::PathBuf,
	process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use digest::Digest;
use xc320_hash::{
	digest_eq, encode_digest, force_scalar, is_forced_scalar, parse_digest, Backend, Xc320,
	DIGEST_SIZE,
};

const READ_BUFFER_SIZE: usize = 16 * 1024;

/// Compute and check XC320 (320-bit) message digests.
#[derive(Debug, Parser)]
#[command(name = "xc320sum")]
struct Args {
	/// File to digest; standard input when omitted.
	#[arg(value_name = "FILE", conflicts_with = "input")]
	file: Option<PathBuf>,

	/// Digest the exact bytes of the given string.
	#[arg(short = 'i', value_name = "STRING")]
	input: Option<String>,

	/// Verify the computed digest against an 80-character hex digest;
	/// exits 0 on match, 1 on mismatch.
	#[arg(short = 'c', value_name = "HASH")]
	check: Option<String>,

	/// Force the scalar back-end.
	#[arg(short = 'f')]
	force_scalar: bool,

	/// Suppress normal output.
	#[arg(short = 'q')]
	quiet: bool,

	/// Print version and back-end information.
	#[arg(short = 'v')]
	version: bool,

	/// Report read progress on standard error.
	#[arg(short = 'V')]
	verbose: bool,
}

fn main() -> ExitCode {
	let args = Args::parse();
	match run(&args) {
		Ok(code) => code,
		Err(err) => {
			if !args.quiet {
				eprintln!("xc320sum: {err:#}");
			}
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> Result<ExitCode> {
	if args.force_scalar {
		force_scalar(true);
	}
	if args.version {
		print_version();
		return Ok(ExitCode::SUCCESS);
	}

	let progress = args.verbose && !args.quiet;
	let (digest, label) = match (&args.input, &args.file) {
		(Some(text), _) => {
			(hash_reader(&mut text.as_bytes(), text, progress)?, text.clone())
		}
		(None, Some(path)) => {
			let label = path.display().to_string();
			let mut file =
				File::open(path).with_context(|| format!("cannot open {label}"))?;
			(hash_reader(&mut file, &label, progress)?, label)
		}
		(None, None) => {
			let mut stdin = std::io::stdin().lock();
			(hash_reader(&mut stdin, "stdin", progress)?, "stdin".to_string())
		}
	};

	if let Some(check) = &args.check {
		let expected = parse_digest(check).context("invalid hash format")?;
		return if digest_eq(&expected, &digest) {
			if !args.quiet {
				println!("{label}: OK");
			}
			Ok(ExitCode::SUCCESS)
		} else {
			if !args.quiet {
				println!("{label}: FAILED");
			}
			Ok(ExitCode::FAILURE)
		};
	}

	if !args.quiet {
		print_digest(&digest, &label);
	}
	Ok(ExitCode::SUCCESS)
}

/// Stream a reader through the hasher in 16 KiB chunks.
fn hash_reader(
	reader: &mut dyn Read,
	label: &str,
	progress: bool,
) -> Result<[u8; DIGEST_SIZE]> {
	let mut hasher = Xc320::new();
	let mut buffer = [0u8; READ_BUFFER_SIZE];
	let mut total = 0u64;

	loop {
		let read = match reader.read(&mut buffer) {
			Ok(0) => break,
			Ok(read) => read,
			Err(err) if err.kind() == ErrorKind::Interrupted => continue,
			Err(err) => {
				return Err(err).with_context(|| format!("error reading {label}"));
			}
		};
		Digest::update(&mut hasher, &buffer[..read]);
		total += read as u64;
		if progress {
			eprint!("Read {total} bytes from {label}\r");
		}
	}
	if progress {
		eprintln!();
	}

	let mut digest = [0u8; DIGEST_SIZE];
	digest.copy_from_slice(&hasher.finalize());
	Ok(digest)
}

fn print_digest(digest: &[u8; DIGEST_SIZE], label: &str) {
	let hex = encode_digest(digest);
	if label == "stdin" {
		println!("{hex}");
	} else if label.contains('/') || label.contains('\\') {
		println!("{hex}  {label}");
	} else {
		println!("{hex}  \"{label}\"");
	}
}

fn print_version() {
	println!("xc320sum {} - 320-bit", env!("CARGO_PKG_VERSION"));
	println!("Platform: {} ({})", std::env::consts::OS, std::env::consts::ARCH);
	println!("Back-end: {:?}", Backend::detect());
	println!("Force scalar: {}", if is_forced_scalar() { "Yes" } else { "No" });
}
