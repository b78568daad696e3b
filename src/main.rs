//! Command line decoder for captured notification packets.
//!
//! Parses hex packets from the command line, feeds them through a
//! [`NotificationDecoder`] and prints the resulting record.

mod cli;

use std::{num::NonZeroUsize, process::ExitCode};

use bytes::Bytes;
use clap::Parser;
use notify_reassembly::{
    DecodeError,
    DecoderConfig,
    Field,
    NotificationDecoder,
    NotificationRecord,
    encoder::packetize,
};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
enum RunError {
    #[error("packet {index} is not valid hex: {source}")]
    Hex {
        index: usize,
        source: hex::FromHexError,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

fn main() -> ExitCode {
    // Structured logging; RUST_LOG selects verbosity.
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    match run(&cli) {
        Ok(record) => {
            print_record(&record);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "failed to decode notification");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<NotificationRecord, RunError> {
    let packets = cli
        .packets
        .iter()
        .enumerate()
        .map(|(index, packet)| {
            hex::decode(packet.trim())
                .map(Bytes::from)
                .map_err(|source| RunError::Hex { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let packets = match cli.mtu {
        Some(mtu) => resplit(&packets, mtu),
        None => packets,
    };

    let config = cli
        .max_record_size
        .map_or_else(DecoderConfig::default, |limit| {
            DecoderConfig::default().with_max_record_size(limit)
        });
    let mut decoder = NotificationDecoder::with_config(config);
    for (index, packet) in packets.iter().enumerate() {
        let status = decoder.ingest(packet)?;
        debug!(index, len = packet.len(), ?status, "packet ingested");
    }
    decoder.end_of_input()?;
    Ok(decoder.take_record().unwrap_or_default())
}

fn resplit(packets: &[Bytes], mtu: NonZeroUsize) -> Vec<Bytes> {
    let joined: Vec<u8> = packets.iter().flat_map(|packet| packet.iter().copied()).collect();
    packetize(Bytes::from(joined), mtu).collect()
}

fn print_record(record: &NotificationRecord) {
    if let Some(uid) = record.uid() {
        println!("uid: {uid}");
    }
    for field in Field::ALL {
        println!("{field}: {}", record.field(field).unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex, PoisonError},
    };

    use clap::Parser;
    use tracing::Level;
    use tracing_subscriber::util::SubscriberInitExt;

    use super::{cli::Cli, run};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[test]
    fn each_event_reaches_the_subscriber_once() {
        let captured = Captured::default();
        let writer = captured.clone();
        // Same global install as `fmt::init`, including the `log` bridge.
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish()
            .try_init()
            .expect("no other global subscriber in this binary");

        let cli = Cli::parse_from([
            "notify-reassembly",
            "--mtu",
            "4",
            "0001020304000100",
            "41010000030000060000070000",
        ]);
        let record = run(&cli).expect("valid notification");
        assert_eq!(record.app_id(), Some("A"));

        let lines = captured.lines();
        let ingested = lines
            .iter()
            .filter(|line| line.contains("packet ingested"))
            .count();
        assert_eq!(ingested, 6, "packet events: {lines:?}");
        let decoded = lines
            .iter()
            .filter(|line| line.contains("notification decoded: uid=01020304"))
            .count();
        assert_eq!(decoded, 1, "library events: {lines:?}");
    }
}
