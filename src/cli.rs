//! Command line interface for the `notify-reassembly` binary.
//!
//! Kept free of library imports so the build script can render a man page
//! from it.

use std::num::NonZeroUsize;

use clap::Parser;

/// Command line arguments for the `notify-reassembly` binary.
#[derive(Debug, Parser)]
#[command(
    name = "notify-reassembly",
    version,
    about = "Decode hex-encoded notification packets"
)]
pub struct Cli {
    /// Cap on the total declared attribute payload, in bytes.
    /// Defaults to 327675, five attributes of the largest encodable length.
    #[arg(long)]
    pub max_record_size: Option<NonZeroUsize>,

    /// Re-split the concatenated packets at this MTU before decoding.
    #[arg(long)]
    pub mtu: Option<NonZeroUsize>,

    /// Packets in transmission order, each as a hex string.
    #[arg(required = true, value_name = "HEX")]
    pub packets: Vec<String>,
}
