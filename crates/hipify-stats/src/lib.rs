//! Translation statistics for the hipify translator.
//!
//! One [`Stats`] value per translation job, owned by the job and threaded
//! through the rewrite engine by `&mut` — there is deliberately no global
//! "current file" selector, so nothing stands in the way of translating
//! files in parallel later.
//!
//! Counters are keyed by the CUDA source name and carry the conversion-type
//! and API-family tags of the rename entry that matched, plus whether the
//! entry was unsupported (counted, but never edited). On top of the
//! counters the job records which lines received an edit and how many bytes
//! the edits replace.

#![warn(missing_docs)]

use hipify_maps::{ApiType, ConvType};
use rustc_hash::{FxHashMap, FxHashSet};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Accumulated hit count for one CUDA source name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameCount {
    /// Conversion-type tag of the matching rename entry.
    pub conv: ConvType,
    /// API-family tag of the matching rename entry.
    pub api: ApiType,
    /// Whether the entry was unsupported.
    pub unsupported: bool,
    /// Number of times the name was counted.
    pub count: u64,
}

/// Per-file translation statistics.
#[derive(Debug)]
pub struct Stats {
    /// The file these counters describe (the original input path).
    pub file: String,
    by_name: FxHashMap<String, NameCount>,
    lines_touched: FxHashSet<u32>,
    /// Line totals folded in from other files; line identity is
    /// per-file, so an aggregate can only keep the sum.
    merged_lines: u64,
    bytes_changed: u64,
    conflicting_edits: u64,
    started: Instant,
    elapsed: Option<Duration>,
}

impl Stats {
    /// Create fresh counters for one file.
    #[must_use]
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            by_name: FxHashMap::default(),
            lines_touched: FxHashSet::default(),
            merged_lines: 0,
            bytes_changed: 0,
            conflicting_edits: 0,
            started: Instant::now(),
            elapsed: None,
        }
    }

    /// Count one occurrence of a rename-table hit.
    pub fn increment(&mut self, src_name: &str, conv: ConvType, api: ApiType, unsupported: bool) {
        self.by_name
            .entry(src_name.to_string())
            .or_insert(NameCount {
                conv,
                api,
                unsupported,
                count: 0,
            })
            .count += 1;
    }

    /// Record that an edit landed on the given 1-indexed line.
    pub fn line_touched(&mut self, line: u32) {
        self.lines_touched.insert(line);
    }

    /// Record the number of original bytes an edit replaces.
    pub fn bytes_changed(&mut self, bytes: u64) {
        self.bytes_changed += bytes;
    }

    /// Record an edit that was rejected for overlapping an existing one.
    pub fn conflicting_edit(&mut self) {
        self.conflicting_edits += 1;
    }

    /// Freeze the elapsed wall time for this file.
    pub fn mark_completion(&mut self) {
        self.elapsed = Some(self.started.elapsed());
    }

    /// Total count of supported (edited) references.
    #[must_use]
    pub fn supported_count(&self) -> u64 {
        self.by_name
            .values()
            .filter(|c| !c.unsupported)
            .map(|c| c.count)
            .sum()
    }

    /// Total count of unsupported (warned, unedited) references.
    #[must_use]
    pub fn unsupported_count(&self) -> u64 {
        self.by_name
            .values()
            .filter(|c| c.unsupported)
            .map(|c| c.count)
            .sum()
    }

    /// Number of distinct lines an edit landed on (summed across files
    /// for an aggregate).
    #[must_use]
    pub fn lines_touched(&self) -> u64 {
        self.lines_touched.len() as u64 + self.merged_lines
    }

    /// Number of rejected overlapping edits.
    #[must_use]
    pub fn conflicting_edits(&self) -> u64 {
        self.conflicting_edits
    }

    /// Fold another file's counters into this aggregate.
    pub fn merge(&mut self, other: &Stats) {
        for (name, counter) in &other.by_name {
            self.by_name
                .entry(name.clone())
                .or_insert(NameCount {
                    count: 0,
                    ..*counter
                })
                .count += counter.count;
        }
        self.merged_lines += other.lines_touched();
        self.bytes_changed += other.bytes_changed;
        self.conflicting_edits += other.conflicting_edits;
    }

    /// Counter rows sorted by source name, for deterministic output.
    fn sorted_rows(&self) -> Vec<(&str, &NameCount)> {
        let mut rows: Vec<_> = self
            .by_name
            .iter()
            .map(|(name, counter)| (name.as_str(), counter))
            .collect();
        rows.sort_by_key(|(name, _)| *name);
        rows
    }

    /// Totals per conversion type, sorted by tag.
    fn totals_by_conv(&self) -> Vec<(ConvType, u64)> {
        let mut totals: FxHashMap<ConvType, u64> = FxHashMap::default();
        for counter in self.by_name.values() {
            if !counter.unsupported {
                *totals.entry(counter.conv).or_default() += counter.count;
            }
        }
        let mut totals: Vec<_> = totals.into_iter().collect();
        totals.sort();
        totals
    }

    /// Totals per API family, sorted by tag.
    fn totals_by_api(&self) -> Vec<(ApiType, u64)> {
        let mut totals: FxHashMap<ApiType, u64> = FxHashMap::default();
        for counter in self.by_name.values() {
            if !counter.unsupported {
                *totals.entry(counter.api).or_default() += counter.count;
            }
        }
        let mut totals: Vec<_> = totals.into_iter().collect();
        totals.sort();
        totals
    }

    /// Write the human-readable summary.
    pub fn print(&self, w: &mut impl Write) -> io::Result<()> {
        let converted = self.supported_count();
        let unconverted = self.unsupported_count();
        let total = converted + unconverted;
        let percent = if total == 0 {
            100.0
        } else {
            converted as f64 * 100.0 / total as f64
        };

        writeln!(w, "[HIPIFY] info: file '{}' statistics:", self.file)?;
        writeln!(w, "  CONVERTED refs count: {converted}")?;
        writeln!(w, "  UNCONVERTED refs count: {unconverted}")?;
        writeln!(w, "  CONVERSION %: {percent:.0}")?;
        writeln!(w, "  REPLACED bytes: {}", self.bytes_changed)?;
        writeln!(w, "  CHANGED lines of code: {}", self.lines_touched())?;
        if self.conflicting_edits > 0 {
            writeln!(w, "  CONFLICTING edits (dropped): {}", self.conflicting_edits)?;
        }
        if let Some(elapsed) = self.elapsed {
            writeln!(w, "  TIME ELAPSED s: {:.2}", elapsed.as_secs_f64())?;
        }

        let by_conv = self.totals_by_conv();
        if !by_conv.is_empty() {
            writeln!(w, "[HIPIFY] info: CONVERTED refs by type:")?;
            for (conv, count) in by_conv {
                writeln!(w, "  {}: {count}", conv.label())?;
            }
        }
        let by_api = self.totals_by_api();
        if !by_api.is_empty() {
            writeln!(w, "[HIPIFY] info: CONVERTED refs by API:")?;
            for (api, count) in by_api {
                writeln!(w, "  {}: {count}", api.label())?;
            }
        }
        Ok(())
    }

    /// Write one CSV row per counted rename.
    ///
    /// Columns: `conv_type,api_family,src_name,hit_count,unsupported`.
    pub fn write_csv(&self, w: &mut impl Write) -> io::Result<()> {
        for (name, counter) in self.sorted_rows() {
            writeln!(
                w,
                "{},{},{},{},{}",
                counter.conv.label(),
                counter.api.label(),
                name,
                counter.count,
                counter.unsupported
            )?;
        }
        Ok(())
    }

    /// The CSV header line matching [`Stats::write_csv`].
    #[must_use]
    pub const fn csv_header() -> &'static str {
        "conv_type,api_family,src_name,hit_count,unsupported"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_and_totals() {
        let mut stats = Stats::new("a.cu");
        stats.increment("cudaMalloc", ConvType::Mem, ApiType::Runtime, false);
        stats.increment("cudaMalloc", ConvType::Mem, ApiType::Runtime, false);
        stats.increment("cudaMallocManaged", ConvType::Mem, ApiType::Runtime, true);

        assert_eq!(stats.supported_count(), 2);
        assert_eq!(stats.unsupported_count(), 1);
    }

    #[test]
    fn test_lines_and_bytes() {
        let mut stats = Stats::new("a.cu");
        stats.line_touched(3);
        stats.line_touched(3);
        stats.line_touched(7);
        stats.bytes_changed(10);
        stats.bytes_changed(4);

        assert_eq!(stats.lines_touched(), 2);
        let mut out = Vec::new();
        stats.print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("REPLACED bytes: 14"));
        assert!(text.contains("CHANGED lines of code: 2"));
    }

    #[test]
    fn test_merge_aggregates_counts() {
        let mut total = Stats::new("TOTAL");
        let mut a = Stats::new("a.cu");
        a.increment("cudaFree", ConvType::Mem, ApiType::Runtime, false);
        let mut b = Stats::new("b.cu");
        b.increment("cudaFree", ConvType::Mem, ApiType::Runtime, false);
        b.increment("cuInit", ConvType::Init, ApiType::Driver, false);

        total.merge(&a);
        total.merge(&b);
        assert_eq!(total.supported_count(), 3);
    }

    #[test]
    fn test_csv_rows() {
        let mut stats = Stats::new("a.cu");
        stats.increment("cudaMalloc", ConvType::Mem, ApiType::Runtime, false);
        stats.increment("cudaMallocManaged", ConvType::Mem, ApiType::Runtime, true);

        let mut out = Vec::new();
        stats.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "memory,CUDA RT API,cudaMalloc,1,false\n\
             memory,CUDA RT API,cudaMallocManaged,1,true\n"
        );
    }
}
