//! Command implementations.

use crate::config::Config;
use anyhow::Context;
use schemakind_core::{SchemaKind, TypeClassifier, TypeDescriptor, TypeTable};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output format for classification results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `descriptor<TAB>kind`, one per line.
    #[default]
    Text,
    /// JSON array of `{"descriptor", "type"}` objects.
    Json,
}

/// Inputs to `schemakind classify`.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub descriptors: Vec<String>,
    pub types: Vec<PathBuf>,
    pub no_jdk: bool,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Classified<'a> {
    descriptor: &'a TypeDescriptor,
    #[serde(rename = "type")]
    kind: SchemaKind,
}

/// Assemble the type table: JDK entries, then config tables, then `extra`.
/// Later tables override earlier ones.
pub fn build_table(config: &Config, extra: &[PathBuf], no_jdk: bool) -> anyhow::Result<TypeTable> {
    let mut table = if config.jdk && !no_jdk {
        TypeTable::jdk()
    } else {
        TypeTable::new()
    };
    for path in config.types.iter().chain(extra) {
        let loaded =
            TypeTable::load(path).with_context(|| format!("loading {}", path.display()))?;
        table.extend(loaded);
    }
    tracing::debug!(types = table.len(), "type table ready");
    Ok(table)
}

/// Render classification results.
pub fn render(
    results: &[(&TypeDescriptor, SchemaKind)],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .map(|(d, kind)| format!("{}\t{}\n", d, kind))
            .collect()),
        OutputFormat::Json => {
            let rows: Vec<_> = results
                .iter()
                .map(|&(descriptor, kind)| Classified { descriptor, kind })
                .collect();
            let mut out = serde_json::to_string_pretty(&rows)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Run `classify`, returning the rendered output.
pub fn classify(options: &ClassifyOptions, cwd: &Path) -> anyhow::Result<String> {
    let config = Config::discover(options.config.as_deref(), cwd)?;
    let table = build_table(&config, &options.types, options.no_jdk)?;
    let classifier = TypeClassifier::new(&table);

    let descriptors: Vec<TypeDescriptor> = options
        .descriptors
        .iter()
        .map(|d| TypeDescriptor::new(d.as_str()))
        .collect();
    let results = classifier.classify_all(&descriptors);
    render(&results, options.format)
}
