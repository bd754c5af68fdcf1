use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use imc_site_core::animation::{StepSink, TypingTiming};
use imc_site_core::catalog::{CategoryFilter, PluginRecord, SortKey};
use imc_site_core::config::Config;
use imc_site_core::format::format_downloads;
use imc_site_core::render::{default_code_lines, typing_sequence, CodeLine};
use imc_site_core::site::import_terms;
use imc_site_core::{BuildOptions, Result, Site, SiteError};

mod args;
use args::{Cli, Commands, ConfigAction, Shell, TermsAction};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let project_dir = cli.dir.unwrap_or_else(|| PathBuf::from("."));

    let result = match cli.command {
        Some(Commands::Build { out, force }) => handle_build(&project_dir, out, force),
        Some(Commands::List {
            filter,
            search,
            sort,
            json,
        }) => handle_list(&project_dir, &filter, &search, &sort, json),
        Some(Commands::Show { id }) => handle_show(&project_dir, &id),
        Some(Commands::Stats) => handle_stats(&project_dir),
        Some(Commands::Compatible { version }) => handle_compatible(&project_dir, &version),
        Some(Commands::Terms { action }) => handle_terms(action, &project_dir),
        Some(Commands::Preview) => handle_preview(&project_dir),
        Some(Commands::Config { action }) => handle_config(action, &project_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Logs go to stderr; RUST_LOG overrides the flag-derived level
fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "imc-site", &mut io::stdout());
}

fn load_site(project_dir: &Path) -> Result<Site> {
    let config = Config::load(project_dir)?;
    Site::from_config(project_dir, config)
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn handle_build(project_dir: &Path, out: Option<PathBuf>, force: bool) -> Result<()> {
    let mut site = load_site(project_dir)?;

    let mut options = BuildOptions::new(today());
    options.out_dir = out;
    options.force = force;

    let report = site.build(&options)?;

    println!();
    for page in &report.pages {
        let shown = if page.filter.is_some() {
            format!("({} plugins)", page.plugin_ids.len())
        } else {
            String::new()
        };
        println!("  {} {}", page.path.cyan(), shown.dimmed());
    }
    println!();
    for path in &report.written {
        println!("{} {}", "[OK]".green(), path);
    }
    for path in &report.unchanged {
        println!("{} {} (unchanged)", "[SKIP]".yellow(), path);
    }
    for path in &report.removed {
        println!("{} {}", "[DEL]".red(), path);
    }
    for path in &report.excluded_assets {
        println!("{} {} (excluded)", "[SKIP]".yellow(), path);
    }

    println!();
    println!(
        "{} {} written, {} unchanged, {} removed -> {}",
        "Build complete:".green(),
        report.written.len(),
        report.unchanged.len(),
        report.removed.len(),
        report.out_dir.display()
    );
    Ok(())
}

fn handle_list(
    project_dir: &Path,
    filter: &str,
    search: &str,
    sort: &str,
    json: bool,
) -> Result<()> {
    let filter: CategoryFilter = filter.parse()?;
    let sort: SortKey = sort.parse()?;

    let site = load_site(project_dir)?;
    let mut store = site.store().clone();
    store.set_filter(filter);
    store.set_search(search);
    store.set_sort(sort);

    let plugins = store.current_view();

    if json {
        println!("{}", serde_json::to_string_pretty(&plugins)?);
        return Ok(());
    }

    if plugins.is_empty() {
        println!("No plugins found");
        println!("{}", "Try adjusting your filter criteria.".dimmed());
        return Ok(());
    }

    println!();
    for plugin in plugins {
        print_summary(plugin);
    }
    println!();
    Ok(())
}

fn print_summary(plugin: &PluginRecord) {
    let category = if plugin.is_archived() {
        plugin.category.as_str().yellow()
    } else {
        plugin.category.as_str().green()
    };
    println!(
        "  {:<14} {:<24} {:<10} {:>8}  {}",
        plugin.id.cyan(),
        plugin.name,
        plugin.version,
        format_downloads(plugin.downloads),
        category
    );
}

fn handle_show(project_dir: &Path, id: &str) -> Result<()> {
    let site = load_site(project_dir)?;
    let plugin = site
        .store()
        .find_by_id(id)
        .ok_or_else(|| SiteError::PluginNotFound { id: id.to_string() })?;

    println!();
    println!("{} {}", plugin.name.cyan().bold(), plugin.version.dimmed());
    println!("  {:<12} {}", "Id:", plugin.id);
    println!("  {:<12} {}", "Category:", plugin.category.label());
    println!("  {:<12} {}", "Downloads:", format_downloads(plugin.downloads));
    println!("  {:<12} {}", "Versions:", plugin.supported_versions.join(", "));
    println!("  {:<12} {}", "Tags:", plugin.tags.join(", "));
    println!("  {:<12} {}", "Download:", plugin.download_url);
    println!("  {:<12} {}", "Docs:", plugin.documentation_url);
    println!();
    println!("{}", plugin.description);
    println!();
    Ok(())
}

fn handle_stats(project_dir: &Path) -> Result<()> {
    let site = load_site(project_dir)?;
    let store = site.store();
    let stats = store.statistics();

    println!();
    println!("{}", "Catalog:".cyan().bold());
    println!("  {:<18} {}", "Plugins:", stats.total_plugins);
    println!(
        "  {:<18} {} ({})",
        "Downloads:",
        format_downloads(stats.total_downloads),
        stats.total_downloads
    );
    for (category, count) in &stats.category_counts {
        println!("  {:<18} {}", format!("{}:", category.label()), count);
    }
    if let Some(top) = stats.most_downloaded {
        println!(
            "  {:<18} {} ({})",
            "Most downloaded:",
            top.name,
            format_downloads(top.downloads)
        );
    }

    println!();
    println!("{}", "Filters:".cyan().bold());
    for entry in store.filter_counts() {
        println!("  {:<18} {}", format!("{}:", entry.label), entry.count);
    }
    println!();
    Ok(())
}

fn handle_compatible(project_dir: &Path, version: &str) -> Result<()> {
    let site = load_site(project_dir)?;
    let plugins = site.store().compatible_plugins(version);

    if plugins.is_empty() {
        println!("No plugins support Minecraft {}", version);
        return Ok(());
    }

    println!();
    println!("{} {}", "Compatible with".cyan(), version.cyan().bold());
    for plugin in plugins {
        print_summary(plugin);
    }
    println!();
    Ok(())
}

fn handle_terms(action: TermsAction, project_dir: &Path) -> Result<()> {
    match action {
        TermsAction::Show => {
            let site = load_site(project_dir)?;
            let terms = site.terms();
            let config = Config::load(project_dir)?;

            println!();
            println!("{} {}", terms.meta.title.cyan().bold(), terms.meta.version.dimmed());
            println!("  Last updated: {}", terms.formatted_last_updated()?);
            if terms.is_recently_updated(config.terms.recent_days, today())? {
                println!("  {}", "Recently updated".yellow());
            }
            println!();
            for (index, section) in terms.sections.iter().enumerate() {
                println!("  {:>2}. {} {}", index + 1, section.key.cyan(), section.title);
            }
            println!();
        }
        TermsAction::Export => {
            let site = load_site(project_dir)?;
            println!("{}", site.terms().export_json()?);
        }
        TermsAction::Import { file } => {
            let (dest, terms) = import_terms(project_dir, &file)?;
            println!(
                "{} {} ({} sections)",
                "Imported:".green(),
                dest.display(),
                terms.sections.len()
            );
        }
        TermsAction::Section { key } => {
            let site = load_site(project_dir)?;
            let section = site
                .terms()
                .section(&key)
                .ok_or(SiteError::SectionNotFound { key: key.clone() })?;

            println!();
            println!("{}", section.title.cyan().bold());
            println!();
            for paragraph in &section.content {
                println!("{}", paragraph);
            }
            println!();
        }
    }

    Ok(())
}

/// Prints preview lines as the typing sequence delivers them
struct TerminalSink;

impl StepSink<&CodeLine> for TerminalSink {
    fn on_step(&mut self, _index: usize, line: &&CodeLine) {
        let value = if line.muted {
            line.value.dimmed()
        } else {
            line.value.green()
        };
        println!("  {}: {}", line.key.blue(), value);
        io::stdout().flush().ok();
    }
}

fn handle_preview(project_dir: &Path) -> Result<()> {
    let config = Config::load(project_dir)?;
    let lines = default_code_lines(&config.site.title);
    let sequence = typing_sequence(&lines, TypingTiming::default());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    println!();
    println!("{}", "plugin.yml".dimmed());
    let shown = runtime.block_on(sequence.play(&mut TerminalSink));
    println!();
    tracing::debug!(lines = shown, "preview finished");
    Ok(())
}

fn handle_config(action: ConfigAction, project_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(project_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(SiteError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(project_dir)?;
            config.set(&key, &value)?;
            config.save(project_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(project_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(project_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(project_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
