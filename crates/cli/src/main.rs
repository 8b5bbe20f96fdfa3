use std::{
    fs::OpenOptions,
    io::Write,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sidenav_tui::NavbarOptions;
use sidenav_tui::ui::components::side_navbar::NavEntry;
use sidenav_tui::ui::viewport::ViewportSignal;
use sidenav_types::Viewport;
use sidenav_util::NavbarSettings;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Collapsible side navigation bar for the terminal.
#[derive(Debug, Parser)]
#[command(name = "sidenav", version, about)]
struct Cli {
    #[command(flatten)]
    navbar: NavbarArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default)
    Run,
    /// Print the navbar markup for a viewport width without a terminal
    Render {
        /// Viewport width in pixels
        #[arg(long)]
        width: u32,
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Default, Args)]
struct NavbarArgs {
    /// Settings file (defaults to $SIDENAV_CONFIG_PATH or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,
    /// Navigation entry label; repeat to replace the default list
    #[arg(long = "item", global = true, value_name = "LABEL")]
    items: Vec<String>,
    /// Initially selected entry
    #[arg(long, global = true, value_name = "LABEL")]
    selected: Option<String>,
    /// Keep the navbar visible below the mobile breakpoint
    #[arg(long, global = true)]
    show_on_mobile: bool,
    /// Theme id or alias
    #[arg(long, global = true, value_name = "NAME")]
    theme: Option<String>,
}

impl NavbarArgs {
    /// Only flags the user actually passed become options, so the settings
    /// file still fills the rest.
    fn options(&self) -> NavbarOptions {
        NavbarOptions {
            hide_on_mobile: self.show_on_mobile.then_some(false),
            nav_items: (!self.items.is_empty()).then(|| self.items.clone()),
            selected_item: self.selected.clone(),
            theme: self.theme.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Run) => {
            init_tracing(LogTarget::Tui)?;
            let settings = Arc::new(NavbarSettings::open_or_ephemeral(cli.navbar.config.as_deref()));
            sidenav_tui::run(cli.navbar.options(), settings).await
        }
        Some(Command::Render { width, json }) => {
            init_tracing(LogTarget::Stderr)?;
            let settings = NavbarSettings::open_or_ephemeral(cli.navbar.config.as_deref());
            let entries = render_entries(&cli.navbar.options(), &settings, width);
            let mut stdout = std::io::stdout().lock();
            write_entries(&mut stdout, entries.as_deref(), json)
        }
    }
}

enum LogTarget {
    Tui,
    Stderr,
}

/// Installs the subscriber. The TUI owns the terminal, so its logs go to
/// `SIDENAV_LOG` when set and are discarded otherwise.
fn init_tracing(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let log_path = std::env::var("SIDENAV_LOG").ok().filter(|path| !path.is_empty());

    let _ = match (target, log_path) {
        (_, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {path}"))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (LogTarget::Tui, None) => builder.with_writer(std::io::sink).try_init(),
        (LogTarget::Stderr, None) => builder.with_writer(std::io::stderr).try_init(),
    };
    Ok(())
}

/// Builds the navbar, attaches it to a viewport of `width_px`, and returns
/// its markup (`None` when hidden).
fn render_entries(options: &NavbarOptions, settings: &NavbarSettings, width_px: u32) -> Option<Vec<NavEntry>> {
    let signal = ViewportSignal::new(Viewport::new(width_px, 0));
    let mut state = options.resolve_state(settings);
    state.attach(&signal);
    let entries = state.markup();
    state.detach();
    debug!(width_px, hidden = entries.is_none(), "rendered navbar headless");
    entries
}

fn write_entries(out: &mut impl Write, entries: Option<&[NavEntry]>, json: bool) -> Result<()> {
    let Some(entries) = entries else {
        return Ok(());
    };
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
    } else {
        for entry in entries {
            let marker = if entry.selected { '*' } else { ' ' };
            writeln!(out, "{marker} {}", entry.label)?;
        }
    }
    Ok(())
}
