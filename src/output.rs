//! Tab-separated feature file rendering.
//!
//! Each record becomes one line: the surface form, then every present
//! sub-feature as `NAME=value` in canonical order, then (unless labels are
//! stripped) a trailing label field. Absent sub-features contribute no field
//! at all, so line width varies with sentence-boundary proximity. Each
//! boundary marker becomes one blank line.

use std::io::{self, Write};

use crate::features::{FeatureRecord, Neighbor};

/// Fixed sentinel rendered as `PREVIOUS_TAG` for every non-initial token.
const PREVIOUS_MARKER: &str = "@@";

const PREVIOUS_PREFIXES: [&str; 3] = ["PREVIOUS", "PREVIOUS_2", "PREVIOUS_3"];
const NEXT_PREFIXES: [&str; 3] = ["NEXT", "NEXT_2", "NEXT_3"];

fn push_neighbor(fields: &mut Vec<String>, prefix: &str, neighbor: &Option<Neighbor>) {
    if let Some(n) = neighbor {
        fields.push(format!("{}_POS={}", prefix, n.pos));
        fields.push(format!("{}_BIOTAG={}", prefix, n.biotag));
        fields.push(format!("{}_WORD={}", prefix, n.word));
        fields.push(format!("{}_STEM={}", prefix, n.stem));
    }
}

/// Renders one feature record as a tab-joined line (without newline).
///
/// The surface form and the label are positional fields, not `NAME=value`
/// pairs. With `strip_labels` the label field is omitted entirely; otherwise
/// an absent label still produces an empty trailing field.
pub fn render_record(record: &FeatureRecord, strip_labels: bool) -> String {
    let mut fields: Vec<String> = Vec::with_capacity(32);

    fields.push(record.word.clone());
    fields.push(format!("STEM={}", record.stem));
    fields.push(format!("POS={}", record.pos));
    fields.push(format!("BIOTAG={}", record.biotag));
    // Debug float formatting keeps a trailing .0 on whole values while
    // staying the shortest round-trip form elsewhere.
    fields.push(format!("POSITION={:?}", record.position));

    if record.has_previous {
        fields.push(format!("PREVIOUS_TAG={}", PREVIOUS_MARKER));
    }
    for (prefix, neighbor) in PREVIOUS_PREFIXES.iter().zip(&record.previous) {
        push_neighbor(&mut fields, prefix, neighbor);
    }
    for (prefix, neighbor) in NEXT_PREFIXES.iter().zip(&record.next) {
        push_neighbor(&mut fields, prefix, neighbor);
    }

    fields.push(format!("CAPITALIZED={}", record.capitalized));

    if !strip_labels {
        fields.push(record.label.clone().unwrap_or_default());
    }

    fields.join("\t")
}

/// Writes rendered feature lines and boundary blank lines to an output sink.
pub struct FeatureWriter<W: Write> {
    writer: W,
    strip_labels: bool,
}

impl<W: Write> FeatureWriter<W> {
    pub fn new(writer: W, strip_labels: bool) -> Self {
        FeatureWriter {
            writer,
            strip_labels,
        }
    }

    /// One blank line per boundary marker.
    pub fn write_boundary(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    pub fn write_sentence(&mut self, records: &[FeatureRecord]) -> io::Result<()> {
        for record in records {
            writeln!(self.writer, "{}", render_record(record, self.strip_labels))?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consumes the writer and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
