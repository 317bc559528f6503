// Command-line interface for supercharged callouts
//
// The callouts binary drives the callout-codec library over files: it turns document
// JSON into callout markdown (and preview HTML), decorates HTML rendered by a note host,
// and manages the user's settings file (custom callouts, column colors, global style).
//
// Usage:
//  callouts generate <doc.json> [--to markdown|html|decorated] [-o <file>]
//  callouts decorate <page.html> [-o <file>]
//  callouts scaffold [--columns N] [--style <style>] [--nested N] [--kind <kind>]
//  callouts css
//  callouts callout add|edit|remove|list ...
//  callouts color add|edit|remove|list ...
//  callouts style [<name>]
//  callouts import <file.json>
//  callouts export [-o <file>]
//
// Configuration comes from the embedded defaults, ./callouts.toml when present, then
// --config. --store overrides the settings file path.
//
// Errors are printed to stderr and exit with status 1. Notices from settings operations
// (the host's transient notifications) go to stderr too, so stdout stays pipeable.

mod definitions;
mod scaffold;

use callout_codec::{
    body_class, decorate_html, generate, generate_css, render_preview, CalloutStyle, Document,
    PreviewOptions, Settings, SettingsFile, TemporaryStyles,
};
use callout_config::{CalloutsConfig, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const OUTPUT_FORMATS: &[&str] = &["markdown", "html", "decorated"];
const COLUMN_STYLES: &[&str] = &["colored-underline", "simple-box", "component-in-column"];
const COMPONENT_KINDS: &[&str] = &["callout", "color-block"];
const STYLE_NAMES: &[&str] = &["default", "clean-inbox", "borderless"];

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("callouts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Author supercharged callouts: generate markdown, decorate HTML, manage settings")
        .long_about(
            "callouts builds nested and multi-column callout markdown for note hosts and\n\
            decodes the presentation modifiers back into HTML classes and styles.\n\n\
            Examples:\n  \
            callouts scaffold --nested 2 > doc.json       # Starter document\n  \
            callouts generate doc.json                    # Callout markdown\n  \
            callouts generate doc.json --to html -o p.html # Standalone preview\n  \
            callouts callout add project --icon rocket --color '#3498db'\n  \
            callouts css > callouts.css                   # Stylesheet for the host",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a callouts.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("PATH")
                .help("Settings file to read and write (overrides store.path)")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate callout markdown or preview HTML from a document JSON file")
                .arg(
                    Arg::new("input")
                        .help("Document JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format")
                        .default_value("markdown")
                        .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("decorate")
                .about("Apply callout modifiers to HTML rendered by a note host")
                .arg(
                    Arg::new("input")
                        .help("HTML file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("scaffold")
                .about("Print a starter document built the way the callout builder does")
                .arg(
                    Arg::new("columns")
                        .long("columns")
                        .help("Build a multi-column document with this many columns")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .help("Multi-column style")
                        .default_value("colored-underline")
                        .value_parser(clap::builder::PossibleValuesParser::new(COLUMN_STYLES)),
                )
                .arg(
                    Arg::new("nested")
                        .long("nested")
                        .help("Number of nested blocks under the parent")
                        .default_value("0")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .help("What added blocks are")
                        .default_value("callout")
                        .value_parser(clap::builder::PossibleValuesParser::new(COMPONENT_KINDS)),
                )
                .arg(
                    Arg::new("widths")
                        .long("widths")
                        .help("Relative column widths, e.g. \"2 1\"")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("markdown")
                        .long("markdown")
                        .help("Print the generated markdown instead of the document JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("css").about("Print the stylesheet for custom callouts and column colors"),
        )
        .subcommand(
            Command::new("callout")
                .about("Manage custom callout types")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Create a custom callout")
                        .arg(Arg::new("name").required(true).index(1))
                        .arg(Arg::new("icon").long("icon").required(true))
                        .arg(Arg::new("color").long("color").required(true)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Change a custom callout")
                        .arg(
                            Arg::new("target")
                                .help("Name or 1-based position")
                                .required(true)
                                .index(1),
                        )
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("icon").long("icon"))
                        .arg(Arg::new("color").long("color")),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Delete a custom callout")
                        .arg(
                            Arg::new("target")
                                .help("Name or 1-based position")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(Command::new("list").about("List custom callouts")),
        )
        .subcommand(
            Command::new("color")
                .about("Manage custom column colors")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Create a column color")
                        .arg(Arg::new("name").required(true).index(1))
                        .arg(Arg::new("color").required(true).index(2)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Change a column color")
                        .arg(
                            Arg::new("target")
                                .help("Name (with or without col-) or 1-based position")
                                .required(true)
                                .index(1),
                        )
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("color").long("color")),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Delete a column color")
                        .arg(
                            Arg::new("target")
                                .help("Name (with or without col-) or 1-based position")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(Command::new("list").about("List column colors")),
        )
        .subcommand(
            Command::new("style")
                .about("Show or set the global callout style")
                .arg(
                    Arg::new("name")
                        .index(1)
                        .value_parser(clap::builder::PossibleValuesParser::new(STYLE_NAMES)),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Merge custom callouts from a JSON file")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write custom callouts as JSON")
                .arg(output_arg()),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("store").map(|s| s.as_str()),
    );
    init_logging(&config.logging.level);
    debug!(store = %config.store.path.display(), "configuration loaded");

    match matches.subcommand() {
        Some(("generate", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .expect("to has a default");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_generate_command(input, to, output, &config);
        }
        Some(("decorate", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_decorate_command(input, output);
        }
        Some(("scaffold", sub_matches)) => {
            let settings = load_settings(&config);
            let palette = config.palette.palette(&settings.custom_callouts);
            let text = scaffold::run(sub_matches, &palette).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            print!("{text}");
        }
        Some(("css", _)) => {
            let settings = load_settings(&config);
            print!("{}", generate_css(&settings, &TemporaryStyles::new()));
        }
        Some(("callout", sub_matches)) => {
            with_settings(&config, |settings| {
                definitions::handle_callout_command(sub_matches, settings)
            });
        }
        Some(("color", sub_matches)) => {
            with_settings(&config, |settings| {
                definitions::handle_color_command(sub_matches, settings)
            });
        }
        Some(("style", sub_matches)) => {
            handle_style_command(sub_matches, &config);
        }
        Some(("import", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_import_command(input, &config);
        }
        Some(("export", sub_matches)) => {
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_export_command(output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the generate command
fn handle_generate_command(input: &str, to: &str, output: Option<&str>, config: &CalloutsConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let doc: Document = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Invalid document '{input}': {e}");
        std::process::exit(1);
    });

    let settings = load_settings(config);
    let palette = config.palette.palette(&settings.custom_callouts);
    let mut styles = TemporaryStyles::new();
    let markdown = generate(&doc, &palette, &mut styles);

    let text = match to {
        "markdown" => markdown,
        "html" | "decorated" => {
            let mut options = PreviewOptions::standalone()
                .with_title(input)
                .with_body_class(body_class(settings.callout_style));
            if config.preview.embed_stylesheet {
                options = options.with_stylesheet(generate_css(&settings, &styles));
            }
            let html = render_preview(&markdown, &options).unwrap_or_else(|e| {
                eprintln!("Render error: {e}");
                std::process::exit(1);
            });
            if to == "decorated" {
                decorate_html(&html).unwrap_or_else(|e| {
                    eprintln!("Render error: {e}");
                    std::process::exit(1);
                })
            } else {
                html
            }
        }
        other => {
            eprintln!("Error: unknown output format '{other}'");
            std::process::exit(1);
        }
    };

    write_output(output, &text);
}

/// Handle the decorate command
fn handle_decorate_command(input: &str, output: Option<&str>) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    let html = decorate_html(&source).unwrap_or_else(|e| {
        eprintln!("Render error: {e}");
        std::process::exit(1);
    });
    write_output(output, &html);
}

/// Handle the style command: print the styles, or set one
fn handle_style_command(sub_matches: &ArgMatches, config: &CalloutsConfig) {
    match sub_matches.get_one::<String>("name") {
        Some(name) => {
            let Some(style) = CalloutStyle::parse(name) else {
                eprintln!("Error: unknown callout style '{name}'");
                std::process::exit(1);
            };
            with_settings(config, |settings| {
                settings.set_style(style);
                eprintln!("Callout style set to {}.", style.label());
                true
            });
        }
        None => {
            let settings = load_settings(config);
            for style in CalloutStyle::ALL {
                let marker = if style == settings.callout_style { "*" } else { " " };
                println!("{marker} {:<12} {}", style.as_str(), style.label());
            }
        }
    }
}

/// Handle the import command
fn handle_import_command(input: &str, config: &CalloutsConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    with_settings(config, |settings| match settings.import_callouts(&source) {
        Ok(summary) => {
            eprintln!("{}", summary.message());
            true
        }
        Err(e) => {
            eprintln!("Import failed: {e}");
            false
        }
    });
}

/// Handle the export command. `-o` may name a directory, which gets the configured file name.
fn handle_export_command(output: Option<&str>, config: &CalloutsConfig) {
    let settings = load_settings(config);
    let json = settings.export_callouts().unwrap_or_else(|e| {
        eprintln!("Export failed: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) if fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false) => {
            let target = std::path::Path::new(path).join(&config.export.file_name);
            write_output(target.to_str(), &json);
        }
        other => write_output(other, &json),
    }
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

fn load_settings(config: &CalloutsConfig) -> Settings {
    SettingsFile::new(&config.store.path)
        .load()
        .unwrap_or_else(|e| {
            eprintln!(
                "Error reading settings '{}': {e}",
                config.store.path.display()
            );
            std::process::exit(1);
        })
}

/// Load the settings, apply `mutate`, and save when it reports success.
///
/// A failed mutation exits with status 1 and leaves the file untouched.
fn with_settings(config: &CalloutsConfig, mutate: impl FnOnce(&mut Settings) -> bool) {
    let file = SettingsFile::new(&config.store.path);
    let mut settings = load_settings(config);

    if !mutate(&mut settings) {
        std::process::exit(1);
    }

    file.save(&settings).unwrap_or_else(|e| {
        eprintln!(
            "Error writing settings '{}': {e}",
            config.store.path.display()
        );
        std::process::exit(1);
    });
}

fn load_cli_config(explicit_path: Option<&str>, store: Option<&str>) -> CalloutsConfig {
    let loader = Loader::new().with_optional_file("callouts.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = match store {
        Some(path) => loader.set_override("store.path", path).unwrap_or_else(|err| {
            eprintln!("Invalid --store value: {err}");
            std::process::exit(1);
        }),
        None => loader,
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
