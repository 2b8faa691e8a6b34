use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use trendlog::acquisition::build_source;
use trendlog::config::{load_or_default, workspace_root, WorkspacePaths};
use trendlog::store::DATE_FORMAT;
use trendlog::telemetry::{init_tracing, DEFAULT_DIRECTIVE};
use trendlog::Pipeline;

fn main() -> Result<()> {
    init_tracing(DEFAULT_DIRECTIVE);
    let args = CliArgs::parse()?;

    let root = match args.root {
        Some(root) => root,
        None => workspace_root()?,
    };
    let config = load_or_default(args.config.as_deref(), &root)?;
    let paths = WorkspacePaths::new(&root, &config.storage);
    let pipeline = Pipeline::new(&paths, &config);

    if args.rebuild_archives {
        let count = pipeline.rebuild_archives()?;
        println!(
            "Rebuilt {count} archive entries under {}",
            paths.archives_dir.display()
        );
        return Ok(());
    }

    let source = build_source(&config.source).context("Unable to set up the term source")?;
    let today = Local::now().date_naive();
    let summary = pipeline.run(source.as_ref(), today)?;
    println!(
        "Recorded {} new of {} fetched terms for {} ({} total). Process completed successfully!",
        summary.added,
        summary.fetched,
        summary.date.format(DATE_FORMAT),
        summary.total
    );
    Ok(())
}

struct CliArgs {
    root: Option<PathBuf>,
    config: Option<PathBuf>,
    rebuild_archives: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut root = None;
        let mut config = None;
        let mut rebuild_archives = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--root" => {
                    let value = args.next().context("Expected a directory after --root")?;
                    root = Some(PathBuf::from(value));
                }
                "--config" => {
                    let value = args.next().context("Expected a file path after --config")?;
                    config = Some(PathBuf::from(value));
                }
                "--rebuild-archives" => rebuild_archives = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            root,
            config,
            rebuild_archives,
        })
    }
}

fn print_usage() {
    println!("trendlog: accumulate today's trending searches and refresh the reports");
    println!("Usage: trendlog [options]");
    println!("Options:");
    println!("  --root <dir>          Storage root (default: $TRENDLOG_HOME or the current directory)");
    println!("  --config <file>       Config file (default: $TRENDLOG_CONFIG, <root>/trendlog.toml)");
    println!("  --rebuild-archives    Re-render every archive entry from stored day files");
    println!("  -h, --help            Show this message");
}
