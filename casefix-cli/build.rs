//! Build script for casefix-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! The command structure is rebuilt here by hand because a build script
//! cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/fix.rs.
fn build_cli() -> Command {
    Command::new("casefix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Correct the letter case of src/href references in HTML files")
        .long_about(
            "Walks a directory of HTML documents and rewrites every relative src/href \
             reference whose letter case differs from the file on disk",
        )
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .help("Directory to process")
                .default_value(".")
                .env("CASEFIX_ROOT"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Report changes without writing any file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .value_name("EXT")
                .help("Extension to treat as HTML (repeatable; replaces the defaults)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Summary output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("casefix.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
