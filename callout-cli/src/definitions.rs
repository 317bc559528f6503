//! `callout` and `color` subcommands
//!
//! Each command drives the same creator/list components the settings panel uses, so
//! the notices printed here are the ones the panel shows.

use callout_codec::settings::{
    column_type_name, normalize_name, Definition, DefinitionEditor, DefinitionList, Notifier,
};
use callout_codec::{ColumnColorDefinition, CustomCalloutDefinition, Settings};
use clap::ArgMatches;

/// Prints notices to stderr
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Returns whether the settings changed and should be saved
pub fn handle_callout_command(matches: &ArgMatches, settings: &mut Settings) -> bool {
    let mut notifier = StderrNotifier;
    match matches.subcommand() {
        Some(("add", args)) => {
            let mut editor = DefinitionEditor::<CustomCalloutDefinition>::new();
            *editor.draft_mut() = CustomCalloutDefinition::new(
                arg(args, "name"),
                arg(args, "icon"),
                arg(args, "color"),
            );
            editor.submit(settings, &mut notifier).is_ok()
        }
        Some(("edit", args)) => {
            let Some(index) = find::<CustomCalloutDefinition>(settings, &arg(args, "target"))
            else {
                return false;
            };
            edit_at(settings, index, &mut notifier, |draft: &mut CustomCalloutDefinition| {
                if let Some(name) = args.get_one::<String>("name") {
                    draft.name = name.clone();
                }
                if let Some(icon) = args.get_one::<String>("icon") {
                    draft.icon = icon.clone();
                }
                if let Some(color) = args.get_one::<String>("color") {
                    draft.color = color.clone();
                }
            })
        }
        Some(("remove", args)) => {
            remove::<CustomCalloutDefinition>(settings, &arg(args, "target"), &mut notifier)
        }
        Some(("list", _)) => {
            list::<CustomCalloutDefinition>(settings, |item| {
                format!("{:<20} {:<16} {}", item.name, item.icon, item.color)
            });
            false
        }
        _ => false,
    }
}

/// Returns whether the settings changed and should be saved
pub fn handle_color_command(matches: &ArgMatches, settings: &mut Settings) -> bool {
    let mut notifier = StderrNotifier;
    match matches.subcommand() {
        Some(("add", args)) => {
            let mut editor = DefinitionEditor::<ColumnColorDefinition>::new();
            *editor.draft_mut() = ColumnColorDefinition::new(arg(args, "name"), arg(args, "color"));
            editor.submit(settings, &mut notifier).is_ok()
        }
        Some(("edit", args)) => {
            let Some(index) = find::<ColumnColorDefinition>(settings, &arg(args, "target")) else {
                return false;
            };
            edit_at(settings, index, &mut notifier, |draft: &mut ColumnColorDefinition| {
                if let Some(name) = args.get_one::<String>("name") {
                    draft.name = name.clone();
                }
                if let Some(color) = args.get_one::<String>("color") {
                    draft.color = color.clone();
                }
            })
        }
        Some(("remove", args)) => {
            remove::<ColumnColorDefinition>(settings, &arg(args, "target"), &mut notifier)
        }
        Some(("list", _)) => {
            list::<ColumnColorDefinition>(settings, |item| {
                format!("{:<20} {}", item.name, item.color)
            });
            false
        }
        _ => false,
    }
}

fn arg(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// How a typed name matches stored names of each list
trait Lookup: Definition {
    fn lookup_key(input: &str) -> String;
}

impl Lookup for CustomCalloutDefinition {
    fn lookup_key(input: &str) -> String {
        normalize_name(input)
    }
}

impl Lookup for ColumnColorDefinition {
    fn lookup_key(input: &str) -> String {
        column_type_name(&normalize_name(input))
    }
}

/// Index of the item named `target`, or at 1-based position `target`
fn find<T: Lookup>(settings: &Settings, target: &str) -> Option<usize> {
    let items = T::items(settings);
    let key = T::lookup_key(target);
    let found = items.iter().position(|item| item.name() == key).or_else(|| {
        target
            .parse::<usize>()
            .ok()
            .filter(|position| (1..=items.len()).contains(position))
            .map(|position| position - 1)
    });

    if found.is_none() {
        eprintln!("Error: no custom {} named '{target}'.", T::ENTITY);
    }
    found
}

/// Load item `index` through the list into an editor, change the draft, save it
fn edit_at<T: Definition>(
    settings: &mut Settings,
    index: usize,
    notifier: &mut dyn Notifier,
    change: impl FnOnce(&mut T),
) -> bool {
    let mut editor = DefinitionEditor::<T>::new();
    let mut list = DefinitionList::new();
    list.link(&mut editor);
    if list.request_edit(settings, index, notifier).is_err() {
        return false;
    }

    change(editor.draft_mut());
    editor.submit(settings, notifier).is_ok()
}

fn remove<T: Lookup>(settings: &mut Settings, target: &str, notifier: &mut dyn Notifier) -> bool {
    let Some(index) = find::<T>(settings, target) else {
        return false;
    };
    DefinitionList::<T>::new()
        .delete(settings, index, notifier)
        .is_ok()
}

fn list<T: Definition>(settings: &Settings, row: impl Fn(&T) -> String) {
    let list = DefinitionList::<T>::new();
    let items = list.items(settings);
    println!("{}", list.heading());
    if items.is_empty() {
        println!("  {}", list.empty_message());
    }
    for (position, item) in items.iter().enumerate() {
        println!("{:>3}. {}", position + 1, row(item));
    }
}
