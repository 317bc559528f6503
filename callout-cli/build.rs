use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the value lists in src/main.rs
// Build scripts can't reach src/ modules, so they are duplicated here
const OUTPUT_FORMATS: &[&str] = &["markdown", "html", "decorated"];
const COLUMN_STYLES: &[&str] = &["colored-underline", "simple-box", "component-in-column"];
const COMPONENT_KINDS: &[&str] = &["callout", "color-block"];
const STYLE_NAMES: &[&str] = &["default", "clean-inbox", "borderless"];

fn definition_commands(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .subcommand(Command::new("add").arg(Arg::new("name").index(1)))
        .subcommand(Command::new("edit").arg(Arg::new("target").index(1)))
        .subcommand(Command::new("remove").arg(Arg::new("target").index(1)))
        .subcommand(Command::new("list"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("callouts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Author supercharged callouts")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("generate")
                .arg(
                    Arg::new("input")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("decorate").arg(
                Arg::new("input")
                    .index(1)
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(
            Command::new("scaffold")
                .arg(Arg::new("columns").long("columns"))
                .arg(
                    Arg::new("style")
                        .long("style")
                        .value_parser(clap::builder::PossibleValuesParser::new(COLUMN_STYLES)),
                )
                .arg(Arg::new("nested").long("nested"))
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_parser(clap::builder::PossibleValuesParser::new(COMPONENT_KINDS)),
                )
                .arg(Arg::new("widths").long("widths"))
                .arg(
                    Arg::new("markdown")
                        .long("markdown")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("css"))
        .subcommand(definition_commands("callout", "Manage custom callout types"))
        .subcommand(definition_commands("color", "Manage custom column colors"))
        .subcommand(
            Command::new("style").arg(
                Arg::new("name")
                    .index(1)
                    .value_parser(clap::builder::PossibleValuesParser::new(STYLE_NAMES)),
            ),
        )
        .subcommand(
            Command::new("import").arg(
                Arg::new("input")
                    .index(1)
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(Command::new("export"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "callouts", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "callouts", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "callouts", &outdir)?;

    Ok(())
}
