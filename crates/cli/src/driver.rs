//! Batch conversion of the help center source directories.
//!
//! Standalone documents and fragments live in separate source directories
//! and are written to separate output directories; the output tree is wiped
//! before each run so stale pages never survive a rename.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use walkdir::WalkDir;

use helpmdx_core::{ConversionMode, FsResolver, Pipeline, convert_document};

use crate::batch::BatchStats;
use crate::config::DriverConfig;
use crate::error::DriverError;

/// Removes the output directory and recreates it with its fragment subdirectory.
pub fn reset_output_dirs(config: &DriverConfig) -> Result<(), DriverError> {
    match std::fs::remove_dir_all(&config.output_dir) {
        Ok(()) => log::debug!("removed {}", config.output_dir.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(DriverError::output_dir(&config.output_dir, err)),
    }

    let include_dir = config.include_output_dir();
    std::fs::create_dir_all(&include_dir).map_err(|err| DriverError::output_dir(&include_dir, err))
}

/// Lists the `.md` files directly inside `dir`, sorted by name.
///
/// Returned paths are file names relative to `dir`. Excluded names and
/// names that are not valid UTF-8 are skipped.
pub fn collect_sources(dir: &Path, config: &DriverConfig) -> Result<Vec<PathBuf>, DriverError> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| DriverError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            log::warn!("skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if !name.ends_with(".md") {
            continue;
        }
        if config.is_excluded(name) {
            log::debug!("skipping excluded {}", name);
            continue;
        }
        sources.push(PathBuf::from(name));
    }
    Ok(sources)
}

/// Output path for a converted source file.
///
/// `foo.md` becomes `<output>/foo.mdx` for standalone documents and
/// `<output>/<include>/_foo.mdx` for fragments.
pub fn output_path(config: &DriverConfig, mode: ConversionMode, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    match mode {
        ConversionMode::Standalone => config.output_dir.join(format!("{stem}.mdx")),
        ConversionMode::Fragment => config.include_output_dir().join(format!("_{stem}.mdx")),
    }
}

/// Converts every source document and writes the results.
///
/// Stops at the first failure; files written before the failure are left
/// in place but the run as a whole is reported as failed.
pub fn run(config: &DriverConfig) -> Result<BatchStats, DriverError> {
    let start = Instant::now();

    let standalone_sources = collect_sources(&config.docs_dir, config)?;
    let fragment_sources = collect_sources(&config.include_dir, config)?;
    reset_output_dirs(config)?;

    let pool = match config.max_threads {
        Some(threads) => Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?,
        ),
        None => None,
    };

    let converted = AtomicUsize::new(0);
    let work = || -> Result<(usize, usize), DriverError> {
        let standalone = convert_dir(
            config,
            ConversionMode::Standalone,
            &config.docs_dir,
            &standalone_sources,
            &converted,
        )?;
        let fragments = convert_dir(
            config,
            ConversionMode::Fragment,
            &config.include_dir,
            &fragment_sources,
            &converted,
        )?;
        Ok((standalone, fragments))
    };

    let (standalone, fragments) = match &pool {
        Some(pool) => pool.install(work)?,
        None => work()?,
    };

    let stats = BatchStats {
        standalone,
        fragments,
        total: converted.load(Ordering::Relaxed),
        processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    log::info!(
        "converted {} files ({} standalone, {} fragments)",
        stats.total,
        stats.standalone,
        stats.fragments
    );
    Ok(stats)
}

fn convert_dir(
    config: &DriverConfig,
    mode: ConversionMode,
    source_dir: &Path,
    sources: &[PathBuf],
    converted: &AtomicUsize,
) -> Result<usize, DriverError> {
    let resolver = FsResolver::new(source_dir);
    let pipeline = Pipeline::for_mode(mode, &config.convert);

    sources.par_iter().try_for_each(|source| {
        let text = convert_document(&resolver, source, &pipeline)?;
        let target = output_path(config, mode, source);
        std::fs::write(&target, text).map_err(|err| DriverError::Write {
            path: target.clone(),
            source: err,
        })?;
        let count = converted.fetch_add(1, Ordering::Relaxed) + 1;
        log::info!("converted {} ({}): {}", count, mode, target.display());
        Ok::<(), DriverError>(())
    })?;

    Ok(sources.len())
}
