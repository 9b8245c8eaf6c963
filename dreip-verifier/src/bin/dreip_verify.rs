//! dreip-verify: standalone cryptographic verifier for DRE-IP election
//! bulletin-board transcripts.

use std::process::ExitCode;

use clap::Parser;
use dreip_verifier::error::VerifierError;
use dreip_verifier::model;
use dreip_verifier::report;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "dreip-verify")]
#[command(about = "Verify a DRE-IP election bulletin-board transcript")]
struct Args {
    /// Path to the transcript JSON file.
    transcript: String,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress per-check progress output; print only the final verdict.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "dreip_verifier=debug" } else { "dreip_verifier=info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!("{err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, VerifierError> {
    let bytes = std::fs::read(&args.transcript)?;
    let transcript = model::parse_transcript(&bytes)?;

    info!(ballots = transcript.ballots.len(), options = transcript.options.len(), "loaded transcript");

    let report = report::evaluate(&transcript);

    if !args.quiet {
        print_family("signature", &report.signatures);
        print_family("vote proof", &report.vote_proofs);
        print_family("equality proof", &report.equality_proofs);
        print_family("tally", &report.tallies);
        print_family("audited ballot", &report.audited_ballots);
    }

    let accepted = report.accepted();
    if accepted {
        println!("ACCEPTED: transcript verifies");
    } else {
        println!("REJECTED: transcript failed verification");
        for failure in report.all().filter(|r| !r.passed) {
            warn!("failed: {}", failure.label);
        }
    }

    Ok(accepted)
}

fn print_family(name: &str, results: &[report::CheckResult]) {
    let passed = results.iter().filter(|r| r.passed).count();
    println!("{name}: {passed}/{} passed", results.len());
}
