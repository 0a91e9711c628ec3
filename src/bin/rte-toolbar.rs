//! Command-line interface for rte-toolbar
//! Normalizes toolbar strings and assembles editor toolbar configuration.
//!
//! Usage:
//!   rte-toolbar normalize `<toolbar>` [-x `<tool>`]... [--json]               - Normalize a toolbar string
//!   rte-toolbar preset `<name>` [-x `<tool>`]...                              - Normalize a built-in preset
//!   rte-toolbar mobile `<name>` [-x `<tool>`]...                              - Derive the mobile "more" toolbar
//!   rte-toolbar config [`<name>`] [-x `<tool>`]... [--image-tool `<tool>`]... - Print the editor configuration
//!   rte-toolbar presets                                                     - List the built-in presets
//!
//! Global options: `--config <file>`, `--strategy <strategy>`,
//! `--fallback <preset>` and `-v`. The last two override the settings file.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rte_toolbar::settings::{Loader, ToolbarSettings};
use rte_toolbar::toolbar::editor_config::{EditorConfigBuilder, ToolbarOptions};
use rte_toolbar::toolbar::formats::to_json;
use rte_toolbar::toolbar::image::ImageToolItem;
use rte_toolbar::toolbar::mobile::MobileToolbar;
use rte_toolbar::toolbar::parsing::parse;
use rte_toolbar::{ExclusionSet, Normalizer, Preset, ToolbarError};
use std::io::Read;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn exclude_arg() -> Arg {
    Arg::new("exclude")
        .long("exclude")
        .short('x')
        .help("Tool to remove (repeatable)")
        .action(ArgAction::Append)
}

fn preset_arg(required: bool) -> Arg {
    Arg::new("preset")
        .help("Preset name (BASIC, STANDARD, FULL, MINIMAL)")
        .required(required)
        .index(1)
}

fn main() {
    let matches = Command::new("rte-toolbar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for rich-text-editor toolbar strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Settings file layered over the built-in defaults")
                .global(true),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .short('s')
                .help("Exclusion strategy ('structural' or 'textual')")
                .global(true),
        )
        .arg(
            Arg::new("fallback")
                .long("fallback")
                .help("Preset used when every tool is excluded")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase logging verbosity")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("normalize")
                .about("Normalize a toolbar string")
                .arg(
                    Arg::new("toolbar")
                        .help("Toolbar string, or '-' to read it from stdin")
                        .required(true)
                        .index(1),
                )
                .arg(exclude_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the parsed structure of the result as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preset")
                .about("Normalize a built-in preset")
                .arg(preset_arg(true))
                .arg(exclude_arg()),
        )
        .subcommand(
            Command::new("mobile")
                .about("Derive the mobile \"more\" toolbar from a preset")
                .arg(preset_arg(true))
                .arg(exclude_arg()),
        )
        .subcommand(
            Command::new("config")
                .about("Print the toolbar keys of the editor configuration")
                .arg(preset_arg(false))
                .arg(exclude_arg())
                .arg(
                    Arg::new("image-tool")
                        .long("image-tool")
                        .short('i')
                        .help("Image control bar tool, '/' for a row break (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'yaml')")
                        .value_parser(["json", "yaml"])
                        .default_value("json"),
                ),
        )
        .subcommand(Command::new("presets").about("List the built-in presets"))
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), ToolbarError> {
    let settings = load_settings(matches)?;

    match matches.subcommand() {
        Some(("normalize", sub)) => handle_normalize_command(&settings, sub),
        Some(("preset", sub)) => handle_preset_command(&settings, sub),
        Some(("mobile", sub)) => handle_mobile_command(&settings, sub),
        Some(("config", sub)) => handle_config_command(&settings, sub),
        Some(("presets", _)) => {
            handle_presets_command();
            Ok(())
        }
        _ => unreachable!(),
    }
}

fn load_settings(matches: &ArgMatches) -> Result<ToolbarSettings, ToolbarError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(strategy) = matches.get_one::<String>("strategy") {
        loader = loader.with_strategy(strategy.parse()?)?;
    }
    if let Some(fallback) = matches.get_one::<String>("fallback") {
        loader = loader.with_fallback_preset(fallback.parse()?)?;
    }
    loader.build()
}

fn exclusions(matches: &ArgMatches) -> ExclusionSet {
    matches
        .get_many::<String>("exclude")
        .into_iter()
        .flatten()
        .collect()
}

fn preset(matches: &ArgMatches) -> Result<Option<Preset>, ToolbarError> {
    matches
        .get_one::<String>("preset")
        .map(|name| name.parse())
        .transpose()
}

fn required_preset(matches: &ArgMatches) -> Result<Preset, ToolbarError> {
    preset(matches)?.ok_or_else(|| ToolbarError::UnknownPreset(String::new()))
}

/// Handle the normalize command
fn handle_normalize_command(settings: &ToolbarSettings, matches: &ArgMatches) -> Result<(), ToolbarError> {
    let normalizer = Normalizer::from_settings(&settings.normalize);

    let toolbar = match matches.get_one::<String>("toolbar").map(String::as_str) {
        Some("-") | None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            source
        }
        Some(toolbar) => toolbar.to_string(),
    };

    let output = normalizer.normalize(&toolbar, &exclusions(matches));
    if matches.get_flag("json") {
        println!("{}", to_json(&parse(&output))?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Handle the preset command
fn handle_preset_command(settings: &ToolbarSettings, matches: &ArgMatches) -> Result<(), ToolbarError> {
    let preset = required_preset(matches)?;
    let normalizer = Normalizer::from_settings(&settings.normalize);

    println!(
        "{}",
        normalizer.normalize_or_fallback(preset.toolbar(), &exclusions(matches))
    );
    Ok(())
}

/// Handle the mobile command
fn handle_mobile_command(settings: &ToolbarSettings, matches: &ArgMatches) -> Result<(), ToolbarError> {
    let preset = required_preset(matches)?;
    let normalizer = Normalizer::from_settings(&settings.normalize);
    let mobile = MobileToolbar::from_settings(&settings.mobile);

    println!(
        "{}",
        mobile.derive(&normalizer, Some(preset), &exclusions(matches))
    );
    Ok(())
}

/// Handle the config command
fn handle_config_command(settings: &ToolbarSettings, matches: &ArgMatches) -> Result<(), ToolbarError> {
    let image_tools = matches
        .get_many::<String>("image-tool")
        .map(|tools| {
            tools
                .map(|tool| tool.parse())
                .collect::<Result<Vec<ImageToolItem>, _>>()
        })
        .transpose()?;

    let options = ToolbarOptions {
        preset: preset(matches)?,
        excluded: matches
            .get_many::<String>("exclude")
            .into_iter()
            .flatten()
            .cloned()
            .collect(),
        image_tools,
    };
    let config = EditorConfigBuilder::from_settings(settings).build(&options);

    let output = match matches.get_one::<String>("format").map(String::as_str) {
        Some("yaml") => serde_yaml::to_string(&config)?,
        _ => serde_json::to_string_pretty(&config)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the presets command
fn handle_presets_command() {
    println!("Available presets:\n");

    for preset in Preset::ALL {
        println!("  {}", preset);
        println!("    {}", preset.toolbar());
        println!();
    }
}
