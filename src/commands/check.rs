use std::fmt::Write;
use std::path::PathBuf;

use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::editorconfig::EditorConfigResolver;
use crate::output::{CheckProgress, ColorMode, Logger, display_path};
use crate::scanner::{DirectoryScanner, GlobFilter, collect_files};
use crate::validation::{
    FileReport, FileValidator, process_validation, process_validation_parallel,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

use super::context::{load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    let logger = Logger::new(cli.color.into(), cli.verbose, cli.quiet);
    match run_check_impl(args, cli, &logger) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            logger.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli, logger: &Logger) -> crate::Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    match &loaded.source {
        Some(path) => logger.verbose(&format!("Using config {}", path.display())),
        None => logger.verbose("No config file found, using defaults"),
    }
    let mut config = loaded.config;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Collect files
    let filter = GlobFilter::new(&config.effective_excludes())?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.gitignore);
    let files = collect_files(&args.paths, &scanner)?;
    logger.verbose(&format!("Found {} file(s) to check", files.len()));

    if args.dry_run {
        let mut listing = String::new();
        for file in &files {
            writeln!(listing, "{}", display_path(file)).ok();
        }
        write_output(args.output.as_deref(), &listing, false)?;
        return Ok(EXIT_SUCCESS);
    }

    // 4. Validate
    let check_config = config.check_config();
    let resolver = EditorConfigResolver::new();
    let validator = FileValidator::new(&check_config, &resolver);
    let reports = run_validation(&files, &validator, &config, args.jobs, cli.quiet)?;

    for report in reports.iter().filter(|r| !r.is_clean()) {
        logger.debug(&format!(
            "{}: {} error(s)",
            display_path(&report.path),
            report.error_count()
        ));
    }

    // 5. Report
    let color = if args.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let output = config.format.formatter(color).format(&reports)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if reports.iter().all(FileReport::is_clean) {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS)
    }
}

fn run_validation(
    files: &[PathBuf],
    validator: &FileValidator<'_>,
    config: &Config,
    jobs: Option<usize>,
    quiet: bool,
) -> crate::Result<Vec<FileReport>> {
    if !config.parallel {
        return Ok(process_validation(files, validator));
    }

    let progress = CheckProgress::new(files.len(), quiet);
    match jobs {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            Ok(pool.install(|| process_validation_parallel(files, validator, Some(&progress))))
        }
        None => Ok(process_validation_parallel(files, validator, Some(&progress))),
    }
}

/// Fold command-line flags into the loaded configuration. Flags only ever
/// add exclusions or switch things off.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    config.exclude.extend(args.exclude.iter().cloned());

    if args.ignore_defaults {
        config.ignore_defaults = true;
    }
    if args.no_gitignore {
        config.gitignore = false;
    }
    if args.spaces_after_tabs {
        config.spaces_after_tabs = true;
    }
    if args.no_parallel {
        config.parallel = false;
    }
    if let Some(format) = args.format {
        config.format = format;
    }

    let disable = &mut config.disable;
    disable.trim_trailing_whitespace |= args.disable_trim_trailing_whitespace;
    disable.end_of_line |= args.disable_end_of_line;
    disable.insert_final_newline |= args.disable_insert_final_newline;
    disable.indentation |= args.disable_indentation;
    disable.indent_size |= args.disable_indent_size;
    disable.max_line_length |= args.disable_max_line_length;
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
