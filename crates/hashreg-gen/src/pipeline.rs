//! Generation run: config → walk → aggregate → render → write.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use hashreg_core::config::{HashregConfig, OutputFormat};
use hashreg_core::errors::GenerateError;
use hashreg_core::types::Registry;

use crate::aggregate::RegistryAggregator;
use crate::output::ArtifactWriter;
use crate::render;
use crate::scanner::{SourceWalker, WalkOptions};

/// A rendered registry that has not been written yet.
#[derive(Debug, Clone)]
pub struct Generation {
    pub registry: Registry,
    pub artifact: String,
    pub format: OutputFormat,
    pub files_scanned: usize,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub files_scanned: usize,
    pub entries: usize,
    pub format: OutputFormat,
    /// Destination written to; `None` for dry runs.
    pub output: Option<PathBuf>,
    pub duration: Duration,
}

/// Runs one generation end to end. Every failure is fatal and leaves the
/// destination untouched.
#[derive(Debug, Clone)]
pub struct Generator {
    config: HashregConfig,
    aggregator: RegistryAggregator,
}

impl Generator {
    pub fn new(config: HashregConfig) -> Self {
        Self::with_aggregator(config, RegistryAggregator::default())
    }

    pub fn with_aggregator(config: HashregConfig, aggregator: RegistryAggregator) -> Self {
        Self { config, aggregator }
    }

    /// Walk the sources and build the registry.
    ///
    /// Configuration is validated before traversal starts.
    pub fn build_registry(&self) -> Result<(Registry, usize), GenerateError> {
        HashregConfig::validate(&self.config)?;
        let root = self.config.source_root()?;

        tracing::info!(root = %root.display(), "scanning module sources");
        let walker = SourceWalker::new(root, WalkOptions::from_config(&self.config))?;

        let mut files_scanned = 0usize;
        let units = walker.inspect(|unit| {
            if unit.is_ok() {
                files_scanned += 1;
            }
        });
        let registry = self.aggregator.try_build::<_, GenerateError>(
            units.map(|unit| unit.map_err(GenerateError::from)),
        )?;

        Ok((registry, files_scanned))
    }

    /// Build and render the registry without writing anything.
    pub fn generate(&self) -> Result<Generation, GenerateError> {
        let (registry, files_scanned) = self.build_registry()?;
        let format = self.config.output.effective_format();
        let artifact = render::render(&registry, format)?;

        Ok(Generation {
            registry,
            artifact,
            format,
            files_scanned,
        })
    }

    /// Build, render and write the artifact to the configured destination.
    pub fn run(&self) -> Result<GenerateReport, GenerateError> {
        let start = Instant::now();
        let generation = self.generate()?;

        let destination = self.config.output.effective_path();
        ArtifactWriter::new(&destination).write(&generation.artifact)?;

        let report = GenerateReport {
            files_scanned: generation.files_scanned,
            entries: generation.registry.len(),
            format: generation.format,
            output: Some(destination),
            duration: start.elapsed(),
        };
        tracing::info!(
            files = report.files_scanned,
            entries = report.entries,
            format = %report.format,
            duration_ms = report.duration.as_millis() as u64,
            "registry generated"
        );
        Ok(report)
    }

    /// Build and render, returning the artifact instead of writing it.
    pub fn dry_run(&self) -> Result<(String, GenerateReport), GenerateError> {
        let start = Instant::now();
        let generation = self.generate()?;
        let report = GenerateReport {
            files_scanned: generation.files_scanned,
            entries: generation.registry.len(),
            format: generation.format,
            output: None,
            duration: start.elapsed(),
        };
        Ok((generation.artifact, report))
    }
}
