//! Renders the `notify-reassembly(1)` man page from the clap definition.

use std::{env, fs, io, path::PathBuf};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

const MAN_DIR_ENV: &str = "NOTIFY_REASSEMBLY_MAN_DIR";

fn man_dir() -> PathBuf {
    env::var_os(MAN_DIR_ENV).map_or_else(|| PathBuf::from("target/generated-man"), PathBuf::from)
}

fn render(out_dir: &PathBuf) -> io::Result<()> {
    let cmd = cli::Cli::command();
    let page = out_dir.join(format!("{}.1", cmd.get_name()));
    let mut rendered = Vec::new();
    Man::new(cmd).render(&mut rendered)?;
    fs::write(page, rendered)
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed={MAN_DIR_ENV}");

    let out_dir = man_dir();
    fs::create_dir_all(&out_dir)?;
    render(&out_dir)
}
