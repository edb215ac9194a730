use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::rules::RoundWinner;
use crate::session::{DealerReveal, RoundReport};

/// What kind of reveal a transcript line records.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Dealer card set explicitly
    Dealer,
    /// Dealer card inherited from the last player card
    Inherited,
    /// Player card compared against the dealer card
    Player,
}

/// One line of a game transcript (JSONL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Identifier in `YYYYMMDD-NNNNNN` format
    pub record_id: String,
    pub kind: RecordKind,
    /// The card revealed by this event
    pub card: Card,
    /// Round result, for player records only
    #[serde(default)]
    pub winner: Option<RoundWinner>,
    pub lower: f64,
    pub higher: f64,
    /// Cards left in the deck after the event
    pub remaining: usize,
    /// RFC3339 timestamp, filled in on write when missing
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_record_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`RoundRecord`]s to a JSONL file, one line per dealer or player reveal.
pub struct TranscriptWriter {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl TranscriptWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Writer that only numbers records; nothing is written.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_record_id(&self.date, self.seq)
    }

    pub fn record_dealer(&mut self, reveal: &DealerReveal) -> std::io::Result<RoundRecord> {
        let rec = RoundRecord {
            record_id: self.next_id(),
            kind: if reveal.inherited {
                RecordKind::Inherited
            } else {
                RecordKind::Dealer
            },
            card: reveal.dealer_card,
            winner: None,
            lower: reveal.odds.lower,
            higher: reveal.odds.higher,
            remaining: reveal.remaining,
            ts: None,
        };
        self.write(&rec)
    }

    pub fn record_round(&mut self, report: &RoundReport) -> std::io::Result<RoundRecord> {
        let rec = RoundRecord {
            record_id: self.next_id(),
            kind: RecordKind::Player,
            card: report.player_card,
            winner: Some(report.winner),
            lower: report.odds.lower,
            higher: report.odds.higher,
            remaining: report.remaining,
            ts: None,
        };
        self.write(&rec)
    }

    /// Writes one line and returns the record as written, `ts` included.
    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<RoundRecord> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(rec)
    }
}
