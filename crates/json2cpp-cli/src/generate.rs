//! The generate run: load, render, report, write, verify

use crate::config::GeneratorConfig;
use crate::verify;
use anyhow::{Context, Result};
use json2cpp_codegen::{ArtifactNames, GenerationReport, generate};
use json2cpp_core::Schema;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Run one generation with fully resolved settings.
///
/// Nothing is written unless the schema loads and, in strict mode, every
/// attribute is handled.
pub fn run(schema_path: &Path, config: &GeneratorConfig) -> Result<()> {
    println!("Reading schema: {}", schema_path.display());

    let schema = Schema::load(schema_path)
        .with_context(|| format!("Failed to load schema: {}", schema_path.display()))?;

    info!(
        enums = schema.enums.len(),
        classes = schema.classes.len(),
        types = schema.type_count(),
        "Schema loaded"
    );

    let source_name = schema_path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let names = ArtifactNames::new(config.header_file_name(), source_name);
    let files = generate(&schema, &names);

    report_diagnostics(&files.report);
    if config.generation.strict && !files.report.is_clean() {
        anyhow::bail!(
            "{} attribute(s) are not fully handled; nothing was written (strict mode)",
            files.report.unhandled.len()
        );
    }

    prepare_output_dir(&config.output.header_dir, config.output.create_dirs)?;
    prepare_output_dir(&config.output.source_dir, config.output.create_dirs)?;

    let header_path = config.header_path();
    let source_path = config.source_path();

    write_atomic(&header_path, &files.header)?;
    println!("Generated header: {}", header_path.display());

    write_atomic(&source_path, &files.source)?;
    println!("Generated source: {}", source_path.display());

    if config.generation.verify {
        verify::verify_source(
            &source_path,
            &config.output.header_dir,
            &config.generation.include_dirs,
        )?;
    }

    Ok(())
}

fn report_diagnostics(report: &GenerationReport) {
    for entry in &report.unhandled {
        warn!("{entry}");
    }

    for group in &report.cycles {
        match group.as_slice() {
            [single] => info!("{single} references itself through a shared handle"),
            _ => info!("{} reference each other through shared handles", group.join(", ")),
        }
    }
}

/// Make sure `dir` exists, creating it when allowed.
fn prepare_output_dir(dir: &Path, create: bool) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    if dir.exists() {
        anyhow::bail!("Output path is not a directory: {}", dir.display());
    }

    if !create {
        anyhow::bail!(
            "Output directory does not exist: {} (enable --create-dir to create it)",
            dir.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    info!(dir = %dir.display(), "Created output directory");

    Ok(())
}

/// Write `contents` to a temporary file next to `path` and rename it into
/// place, so readers never observe a partial artifact.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    // Temporary files are created owner-only; artifacts get regular source permissions.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    file.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
