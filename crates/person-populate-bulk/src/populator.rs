//! Two-phase bulk-file population.

use crate::error::BulkPopulatorError;
use person_core::{BulkPair, SeedProfile};
use person_generator::{generate_special_people, PersonGenerator, UniverseBuilder};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for bulk-file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Progress is logged every this many records.
const PROGRESS_INTERVAL: u64 = 10_000;

/// How pairs are split across physical output files.
///
/// Partitioning is purely a sink concern: it never changes a record's
/// content or the action-before-record ordering within a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionMode {
    /// One file holding every pair.
    Single,
    /// One file per bucket, named `{collection}_{bucket}.jsonl`.
    ByBucket,
    /// Files of at most `pairs_per_file` pairs, named
    /// `{collection}_{part:05}.jsonl`.
    ByBatch { pairs_per_file: usize },
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Number of lines written (two per record).
    pub lines_written: u64,
    /// Paths of the files produced.
    pub files: Vec<PathBuf>,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent in Phase-1 synthesis.
    pub generation_duration: Duration,
    /// Time spent in the Phase-2 linking pass.
    pub linking_duration: Duration,
    /// Time spent writing files.
    pub write_duration: Duration,
    /// Combined output size in bytes.
    pub bytes_written: u64,
}

impl PopulateMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Populator that generates a linked universe and writes it as bulk pairs.
pub struct BulkPopulator {
    generator: PersonGenerator,
}

impl BulkPopulator {
    /// Create a populator. The profile is validated here; a malformed
    /// configuration aborts before any record is produced.
    pub fn new(profile: SeedProfile, seed: u64) -> Result<Self, BulkPopulatorError> {
        let generator = PersonGenerator::new(profile, seed)?;
        Ok(Self { generator })
    }

    pub fn profile(&self) -> &SeedProfile {
        self.generator.profile()
    }

    /// Generate `count` records, link them, and write bulk pair files under
    /// `output_dir` according to `partition`.
    pub fn populate(
        &mut self,
        output_dir: impl AsRef<Path>,
        count: u64,
        partition: PartitionMode,
    ) -> Result<PopulateMetrics, BulkPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let output_dir = output_dir.as_ref();
        let collection = self.profile().collection.clone();

        info!(
            "Generating {count} records into '{}' for collection '{collection}'",
            output_dir.display()
        );

        // Phase 1: synthesize the full universe with empty link lists.
        let gen_start = Instant::now();
        let mut builder = UniverseBuilder::with_capacity(count as usize);
        let mut buckets = Vec::with_capacity(count as usize);
        for produced in 1..=count {
            let synthesized = self.generator.next_person()?;
            buckets.push(synthesized.bucket);
            builder.push(synthesized.person);
            if produced % PROGRESS_INTERVAL == 0 {
                debug!("Generated {produced} / {count}");
            }
        }
        let mut universe = builder.seal();
        metrics.generation_duration = gen_start.elapsed();

        // Phase 2: the universe is sealed, every id resolvable.
        let link_start = Instant::now();
        self.generator.link(&mut universe);
        metrics.linking_duration = link_start.elapsed();

        // Write pairs, preserving creation order within each destination.
        let write_start = Instant::now();
        let mut writers = PartitionedWriters::new(output_dir, &collection);
        for (seq, (person, bucket)) in universe
            .into_people()
            .into_iter()
            .zip(buckets.into_iter())
            .enumerate()
        {
            let writer = writers.for_record(partition, &bucket, seq)?;
            let pair = BulkPair::new(&collection, person);
            write_pair(writer, &pair)?;
            metrics.records_written += 1;
            metrics.lines_written += 2;
        }
        let (files, bytes) = writers.finish()?;
        metrics.files = files;
        metrics.bytes_written = bytes;
        metrics.write_duration = write_start.elapsed();

        metrics.total_duration = start_time.elapsed();
        info!(
            "Bulk generation complete: {} records, {} files, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.files.len(),
            metrics.bytes_written,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }

    /// Generate curated special-name records (no linking pass) into a single
    /// bulk file against `{collection}_special`.
    pub fn populate_special(
        &mut self,
        output_dir: impl AsRef<Path>,
        per_set: usize,
    ) -> Result<PopulateMetrics, BulkPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let collection = format!("{}_special", self.profile().collection);
        let path = output_dir
            .as_ref()
            .join(format!("{collection}_all.jsonl"));

        let gen_start = Instant::now();
        let people = generate_special_people(&mut self.generator, per_set)?;
        metrics.generation_duration = gen_start.elapsed();

        let write_start = Instant::now();
        let file = File::create(&path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        for person in people {
            let pair = BulkPair::new(&collection, person);
            write_pair(&mut writer, &pair)?;
            metrics.records_written += 1;
            metrics.lines_written += 2;
        }
        writer.flush()?;
        drop(writer);
        metrics.bytes_written = std::fs::metadata(&path)?.len();
        metrics.files = vec![path];
        metrics.write_duration = write_start.elapsed();
        metrics.total_duration = start_time.elapsed();

        info!(
            "Special generation complete: {} records in {:?}",
            metrics.records_written, metrics.total_duration
        );
        Ok(metrics)
    }
}

/// Write one pair: the action line immediately followed by the record line.
fn write_pair<W: Write>(writer: &mut W, pair: &BulkPair) -> Result<(), BulkPopulatorError> {
    serde_json::to_writer(&mut *writer, &pair.action)?;
    writeln!(writer)?;
    serde_json::to_writer(&mut *writer, &pair.document)?;
    writeln!(writer)?;
    Ok(())
}

/// Lazily-opened buffered writers keyed by output file name.
struct PartitionedWriters<'a> {
    output_dir: &'a Path,
    collection: &'a str,
    writers: HashMap<PathBuf, BufWriter<File>>,
}

impl<'a> PartitionedWriters<'a> {
    fn new(output_dir: &'a Path, collection: &'a str) -> Self {
        Self {
            output_dir,
            collection,
            writers: HashMap::new(),
        }
    }

    /// Resolve the writer for the `seq`-th record of the given bucket.
    fn for_record(
        &mut self,
        partition: PartitionMode,
        bucket: &str,
        seq: usize,
    ) -> Result<&mut BufWriter<File>, BulkPopulatorError> {
        let file_name = match partition {
            PartitionMode::Single => format!("{}.jsonl", self.collection),
            PartitionMode::ByBucket => format!("{}_{bucket}.jsonl", self.collection),
            PartitionMode::ByBatch { pairs_per_file } => {
                let part = if pairs_per_file == 0 {
                    0
                } else {
                    seq / pairs_per_file
                };
                format!("{}_{part:05}.jsonl", self.collection)
            }
        };
        let path = self.output_dir.join(file_name);
        let writer = match self.writers.entry(path) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let file = File::create(entry.key())?;
                entry.insert(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
            }
        };
        Ok(writer)
    }

    /// Flush everything and report the files written with their total size.
    fn finish(mut self) -> Result<(Vec<PathBuf>, u64), BulkPopulatorError> {
        let mut files: Vec<PathBuf> = Vec::with_capacity(self.writers.len());
        let mut bytes = 0u64;
        for (path, writer) in self.writers.iter_mut() {
            writer.flush()?;
            files.push(path.clone());
        }
        drop(self.writers);
        files.sort();
        for path in &files {
            bytes += std::fs::metadata(path)?.len();
        }
        Ok((files, bytes))
    }
}
