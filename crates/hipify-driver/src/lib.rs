//! Translation-job orchestration for the hipify translator.
//!
//! One [`TranslationJob`] per input file. The job never touches the input:
//! it copies the file to a `.hipify-tmp` working path, runs the rewrite
//! engine against the copy, applies the accumulated replacements, and only
//! then moves the result onto the destination (or deletes it under
//! `-no-output`). A failure part-way leaks the tmp file instead of
//! corrupting the input, on purpose.
//!
//! Front-end failures are counted but do not abort a job: whatever edits
//! the engine managed to produce are still applied, so a partially
//! rewritten file is available for inspection.

#![warn(missing_docs)]

use camino::{Utf8Path, Utf8PathBuf};
use hipify_span::SourceFile;
use hipify_stats::Stats;
use std::fs;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that stop a job outright (filesystem trouble, not translation
/// trouble).
#[derive(Debug, Error)]
pub enum DriverError {
    /// A file copy failed.
    #[error("failed to copy {from} to {to}")]
    Copy {
        /// Copy source.
        from: Utf8PathBuf,
        /// Copy destination.
        to: Utf8PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// The path that could not be read.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {path}")]
    Write {
        /// The path that could not be written.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The working file could not be moved onto the destination.
    #[error("failed to rename {from} to {to}")]
    Rename {
        /// Rename source.
        from: Utf8PathBuf,
        /// Rename destination.
        to: Utf8PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The working file could not be removed.
    #[error("failed to remove {path}")]
    Remove {
        /// The path that could not be removed.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Output-placement options shared by all jobs of one run.
#[derive(Clone, Debug, Default)]
pub struct TranslateOptions {
    /// Explicit output path (`-o`); only meaningful with a single input.
    pub output: Option<Utf8PathBuf>,
    /// Overwrite the input in place.
    pub inplace: bool,
    /// Skip the `.prehip` backup when overwriting in place.
    pub no_backup: bool,
    /// Discard translated output (analysis only).
    pub no_output: bool,
}

impl TranslateOptions {
    /// The destination path for one input.
    #[must_use]
    pub fn destination(&self, src: &Utf8Path) -> Utf8PathBuf {
        if let Some(ref out) = self.output {
            out.clone()
        } else if self.inplace {
            src.to_path_buf()
        } else {
            Utf8PathBuf::from(format!("{src}.hip"))
        }
    }
}

/// The outcome of one translation job.
#[derive(Debug)]
pub struct JobOutcome {
    /// Front-end failure count for this job (feeds the exit code).
    pub failures: u32,
    /// The per-file statistics, completion time marked.
    pub stats: Stats,
}

/// One per-input-file translation job.
#[derive(Debug)]
pub struct TranslationJob {
    src: Utf8PathBuf,
    tmp: Utf8PathBuf,
    dst: Utf8PathBuf,
    opts: TranslateOptions,
}

impl TranslationJob {
    /// Set up a job for one input file.
    #[must_use]
    pub fn new(src: Utf8PathBuf, opts: TranslateOptions) -> Self {
        let tmp = Utf8PathBuf::from(format!("{src}.hipify-tmp"));
        let dst = opts.destination(&src);
        Self {
            src,
            tmp,
            dst,
            opts,
        }
    }

    /// The working-copy path.
    #[must_use]
    pub fn tmp_path(&self) -> &Utf8Path {
        &self.tmp
    }

    /// Run the job: copy, translate, apply, place output, flush stats.
    ///
    /// Warnings and front-end error diagnostics go to stderr as they are
    /// produced, in order.
    pub fn run(self) -> DriverResult<JobOutcome> {
        info!(src = %self.src, dst = %self.dst, "translating");

        copy(&self.src, &self.tmp)?;
        let content = fs::read_to_string(&self.tmp).map_err(|source| DriverError::Read {
            path: self.tmp.clone(),
            source,
        })?;

        // Diagnostics cite the original input, not the working copy.
        let file = SourceFile::new(self.src.to_string(), content);
        let translation = hipify_translate::translate(&file);

        let mut stderr = io::stderr().lock();
        for warning in &translation.warnings {
            let _ = writeln!(stderr, "{warning}");
        }
        let mut failures = 0u32;
        for (err, span) in &translation.errors {
            let loc = file.lookup_line_col(span.lo);
            let _ = writeln!(
                stderr,
                "[HIPIFY] error: {}:{}:{}: {err}",
                self.src, loc.line, loc.col
            );
        }
        if !translation.errors.is_empty() {
            failures += 1;
        }
        drop(stderr);

        debug!(
            edits = translation.edits.len(),
            warnings = translation.warnings.len(),
            "front-end finished"
        );

        // Apply even after front-end failures: a partially rewritten file
        // is more useful than none.
        let rewritten = translation.edits.apply(&file.src);

        if self.opts.no_output {
            fs::remove_file(&self.tmp).map_err(|source| DriverError::Remove {
                path: self.tmp.clone(),
                source,
            })?;
        } else {
            fs::write(&self.tmp, &rewritten).map_err(|source| DriverError::Write {
                path: self.tmp.clone(),
                source,
            })?;
            if self.opts.inplace && !self.opts.no_backup {
                let backup = Utf8PathBuf::from(format!("{}.prehip", self.src));
                copy(&self.src, &backup)?;
            }
            fs::rename(&self.tmp, &self.dst).map_err(|source| DriverError::Rename {
                from: self.tmp.clone(),
                to: self.dst.clone(),
                source,
            })?;
            info!(dst = %self.dst, "wrote translated output");
        }

        let mut stats = translation.stats;
        stats.mark_completion();
        Ok(JobOutcome { failures, stats })
    }
}

fn copy(from: &Utf8Path, to: &Utf8Path) -> DriverResult<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|source| DriverError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
}
