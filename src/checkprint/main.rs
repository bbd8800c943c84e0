use checkprint::api::{CheckprintApi, CmdMessage, ConfigAction, MessageLevel};
use checkprint::config::{PrintConfig, CONFIG_KEYS};
use checkprint::error::{CheckprintError, Result};
use checkprint::layout::{Clock, FixedClock, SystemClock};
use checkprint::logging;
use checkprint::printer::AnyPrinter;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use log::warn;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, LayoutArgs};

/// Overrides the platform config directory.
const HOME_ENV: &str = "CHECKPRINT_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CheckprintApi<AnyPrinter>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logging(logging::level_for(cli.verbose)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Render { file, layout }) => handle_render(&ctx, file, layout),
        Some(Commands::Print { file, layout }) => handle_print(&mut ctx, file, layout),
        Some(Commands::Demo { layout }) => handle_demo(&ctx, layout),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_demo(&ctx, LayoutArgs::default()),
    }
}

fn init_context() -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = match PrintConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(
                "event=config_load status=fallback path={} error={}",
                config_dir.display(),
                e
            );
            PrintConfig::default()
        }
    };

    let printer = AnyPrinter::from_config(&config, &config_dir);
    Ok(AppContext {
        api: CheckprintApi::new(printer, config, config_dir),
    })
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "checkprint", "checkprint")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CheckprintError::Api("Could not determine config dir".into()))
}

fn clock_for(layout: &LayoutArgs) -> Result<Box<dyn Clock>> {
    match &layout.printed_at {
        Some(ts) => Ok(Box::new(FixedClock::parse(ts)?)),
        None => Ok(Box::new(SystemClock)),
    }
}

fn handle_render(ctx: &AppContext, file: PathBuf, layout: LayoutArgs) -> Result<()> {
    let clock = clock_for(&layout)?;
    let checklist = ctx.api.load_checklist(&file)?;
    let result = ctx.api.render_checklist(&checklist, layout.width, &*clock)?;
    if let Some(doc) = &result.document {
        print!("{}", doc);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_print(ctx: &mut AppContext, file: PathBuf, layout: LayoutArgs) -> Result<()> {
    let clock = clock_for(&layout)?;
    let checklist = ctx.api.load_checklist(&file)?;
    let result = ctx.api.print_checklist(&checklist, layout.width, &*clock)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_demo(ctx: &AppContext, layout: LayoutArgs) -> Result<()> {
    let clock = clock_for(&layout)?;
    let result = ctx.api.demo(layout.width, &*clock)?;
    if let Some(doc) = &result.document {
        print!("{}", doc);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in CONFIG_KEYS {
                if let Some(val) = config.get(key) {
                    println!("{} = {}", key, val);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

// Warnings and errors go to stderr, keeping stdout for the document
fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
