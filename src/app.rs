use std::io::Write;
use std::path::PathBuf;

use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::dataset::Dataset;
use crate::directory::{Directory, DirectoryError, SortField};
use crate::output::{self, OutputFormat, View};
use crate::session;

const DEFAULT_TITLE: &str = "Employee Directory";

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .try_init();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Search {
    FirstName { first: String, last: String },
    LastName(String),
}

#[derive(Clone, Debug)]
struct RunConfig {
    data: Option<PathBuf>,
    output: Option<String>,
    output_format: OutputFormat,
    title: String,
    no_color: bool,
    sort: Option<SortField>,
    department: Option<String>,
    role: Option<String>,
    search: Option<Search>,
    interactive: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let data = args
        .data
        .or(cfg.data)
        .filter(|p| !p.trim().is_empty())
        .map(|p| config::expand_tilde(&p));
    // interactive mode never writes a file, so config output settings don't apply
    let (cfg_output, cfg_output_format) = if args.interactive {
        if cfg.output.is_some() || cfg.output_format.is_some() {
            tracing::warn!(
                output = cfg.output.as_deref().unwrap_or(""),
                output_format = cfg.output_format.as_deref().unwrap_or(""),
                "ignoring config output settings in interactive mode"
            );
        }
        (None, None)
    } else {
        (cfg.output, cfg.output_format)
    };
    let output_path = args
        .output
        .or(cfg_output)
        .filter(|p| !p.trim().is_empty());

    let output_format = match args.output_format.or(cfg_output_format) {
        Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| {
            format!("invalid output_format '{raw}', expected text, json, or html")
        })?,
        None => output_path
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    let title = args
        .title
        .or(cfg.title)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let sort = args.sort.or(cfg.sort).map(|s| SortField::from_label(&s));

    let search = match (args.first_name, args.last_name) {
        (Some(first), last) => Some(Search::FirstName {
            first,
            last: last.unwrap_or_default(),
        }),
        (None, Some(last)) => Some(Search::LastName(last)),
        (None, None) => None,
    };

    Ok(RunConfig {
        data,
        output: output_path,
        output_format,
        title,
        no_color,
        sort,
        department: args.department,
        role: args.role,
        search,
        interactive: args.interactive,
    })
}

fn load_dataset(run: &RunConfig) -> Result<Dataset, String> {
    match run.data.as_ref() {
        Some(path) => Dataset::load(path).map_err(|e| e.to_string()),
        None => {
            let dataset = Dataset::embedded().map_err(|e| e.to_string())?;
            tracing::info!(employees = dataset.len(), "using bundled dataset");
            Ok(dataset)
        }
    }
}

fn apply_view(dir: &mut Directory<'_>, run: &RunConfig) -> Option<DirectoryError> {
    if let Some(department) = run.department.as_deref() {
        dir.filter_department(department);
    }
    if let Some(role) = run.role.as_deref() {
        dir.filter_role(role);
    }
    let missed = match run.search.as_ref() {
        Some(Search::FirstName { first, last }) => {
            dir.set_first_name(first.as_str());
            dir.set_last_name(last.as_str());
            dir.search_first_name().err()
        }
        Some(Search::LastName(last)) => {
            dir.set_last_name(last.as_str());
            dir.search_last_name().err()
        }
        None => None,
    };
    if let Some(field) = run.sort {
        dir.sort_by(field);
    }
    missed
}

fn run_interactive(run: &RunConfig, dataset: &Dataset) -> Result<(), String> {
    let mut dir = Directory::new(dataset);
    if let Some(e) = apply_view(&mut dir, run) {
        println!("{}", e.to_string().yellow());
    }

    format_kv_line("Directory", &run.title);
    format_kv_line("Employees", &dataset.len().to_string());
    format_kv_line("Help", "type 'help' for commands");
    println!();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session::run(&mut dir, stdin.lock(), &mut stdout, !run.no_color)
        .map_err(|e| format!("interactive session failed: {e}"))
}

fn run_once(run: &RunConfig, dataset: &Dataset) -> Result<(), String> {
    let mut dir = Directory::new(dataset);
    if let Some(e) = apply_view(&mut dir, run) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }

    let view = View {
        title: &run.title,
        dataset,
        display: dir.display(),
    };

    match run.output.as_deref() {
        Some(path) => {
            let rendered = output::render(run.output_format, &view, false);
            std::fs::write(path, rendered)
                .map_err(|e| format!("failed to write output file '{path}': {e}"))?;
            tracing::info!(path, shown = dir.display().len(), "wrote directory");
        }
        None => {
            let styled = !run.no_color && run.output_format == OutputFormat::Text;
            let rendered = output::render(run.output_format, &view, styled);
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&rendered)
                .and_then(|_| stdout.flush())
                .map_err(|e| format!("failed to write to stdout: {e}"))?;
        }
    }
    Ok(())
}

fn run_directory(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    let dataset = load_dataset(&run)?;
    if run.interactive {
        run_interactive(&run, &dataset)
    } else {
        run_once(&run, &dataset)
    }
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", CliArgs::command().render_long_help());
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                let cmd = CliArgs::command();
                print!("{}", cmd.render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    init_tracing(args.verbose);

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    let config_path = user_config_path.clone().or_else(config::default_config_path);

    if args.init_config {
        let path = config_path.ok_or_else(|| "cannot locate a home directory".to_string())?;
        config::ensure_default_config_file(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let cfg = match (user_config_path.as_ref(), config_path.as_ref()) {
        (Some(path), _) => config::load_config(path, false)?,
        (None, Some(path)) => config::load_config(path, true)?,
        (None, None) => ConfigFile::default(),
    };

    let run = build_run_config(args, cfg)?;
    run_directory(run)
}
