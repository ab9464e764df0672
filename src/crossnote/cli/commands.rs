use super::render::{print_listing, print_messages};
use super::setup::{split_config_arg, Cli, Commands};
use clap::Parser;
use crossnote::api::{CrossnoteApi, RecordFilter};
use crossnote::config::StoreConfig;
use crossnote::error::Result;
use crossnote::layout::style::Palette;
use crossnote::layout::{Layout, TerminalInfo};
use crossnote::store::fs::FileStore;
use std::path::Path;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CrossnoteApi<FileStore>,
    layout: Layout,
}

pub fn run() -> Result<()> {
    let (leading_config, args) = split_config_arg(std::env::args_os().collect());
    let cli = Cli::parse_from(args);

    if cli.verbose {
        init_tracing();
    }

    let config_path = cli.config.clone().or(leading_config);
    let config = load_config(config_path.as_deref());
    let mut ctx = init_context(&config)?;

    match cli.command {
        Commands::Create { priority, text } => handle_create(&mut ctx, priority, text),
        Commands::Cross { id } => handle_cross(&mut ctx, id),
        Commands::Delete { id } => handle_delete(&mut ctx, id),
        Commands::List { sort } => handle_list(&ctx, RecordFilter::All, sort),
        Commands::ListNoCross { sort } => handle_list(&ctx, RecordFilter::Open, sort),
        Commands::ListCross { sort } => handle_list(&ctx, RecordFilter::Closed, sort),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("crossnote=debug"))
        .with_writer(std::io::stderr)
        .init();
}

/// A missing or unreadable config falls back to the built-in defaults.
fn load_config(path: Option<&Path>) -> StoreConfig {
    let Some(path) = path else {
        return StoreConfig::default();
    };
    match StoreConfig::load(path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "using default config");
            StoreConfig::default()
        }
    }
}

fn init_context(config: &StoreConfig) -> Result<AppContext> {
    let store = FileStore::new(config.file_path()).with_separators(config.separators());
    tracing::debug!(file = %store.path().display(), "opening record file");
    let api = CrossnoteApi::new(store)?;

    let layout = Layout::new(TerminalInfo::detect(), Palette::from_config(config))
        .with_color(console::colors_enabled());

    Ok(AppContext { api, layout })
}

fn handle_create(ctx: &mut AppContext, priority: u64, text: Vec<String>) -> Result<()> {
    let text = text.join(" ");
    let result = ctx.api.create_record(priority, &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cross(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.cross_record(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete_record(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: RecordFilter, sort: Option<String>) -> Result<()> {
    let result = ctx.api.list_records(filter, sort.as_deref())?;
    print_listing(&ctx.layout, &result);
    print_messages(&result.messages);
    Ok(())
}
