//! Creator and list components for the definition lists
//!
//! The settings panel shows, for each list, a creator form and the list itself with
//! edit and delete buttons. These types are that panel minus the widgets: a
//! [`DefinitionEditor`] holds the form draft and knows whether it is adding or
//! editing, a [`DefinitionList`] hands items to its linked editor. Outcomes are
//! reported through a [`Notifier`].

use super::{ColumnColorDefinition, CustomCalloutDefinition, Settings};
use crate::error::{CodecError, Result};

/// Transient user-facing messages
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// A definition list the components can work on
pub trait Definition: Clone + std::fmt::Debug {
    const ENTITY: &'static str;
    const ENTITY_PLURAL: &'static str;

    /// Draft shown by an empty creator form
    fn initial() -> Self;

    fn name(&self) -> &str;

    /// Draft for editing an existing item
    fn to_draft(&self) -> Self {
        self.clone()
    }

    fn items(settings: &Settings) -> &[Self];
    fn add(settings: &mut Settings, item: Self) -> Result<()>;
    fn update(settings: &mut Settings, index: usize, item: Self) -> Result<()>;
    fn remove(settings: &mut Settings, index: usize) -> Result<Self>;
}

impl Definition for CustomCalloutDefinition {
    const ENTITY: &'static str = "callout";
    const ENTITY_PLURAL: &'static str = "callouts";

    fn initial() -> Self {
        CustomCalloutDefinition::new("new-callout", "star", "#7f8c8d")
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn items(settings: &Settings) -> &[Self] {
        &settings.custom_callouts
    }

    fn add(settings: &mut Settings, item: Self) -> Result<()> {
        settings.add_callout(item)
    }

    fn update(settings: &mut Settings, index: usize, item: Self) -> Result<()> {
        settings.update_callout(index, item)
    }

    fn remove(settings: &mut Settings, index: usize) -> Result<Self> {
        settings.remove_callout(index)
    }
}

impl Definition for ColumnColorDefinition {
    const ENTITY: &'static str = "column color";
    const ENTITY_PLURAL: &'static str = "column colors";

    fn initial() -> Self {
        ColumnColorDefinition::new("new-color", "#3498db")
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// The prefix is stripped for editing and added back on save
    fn to_draft(&self) -> Self {
        ColumnColorDefinition::new(self.editable_name(), self.color.clone())
    }

    fn items(settings: &Settings) -> &[Self] {
        &settings.custom_column_colors
    }

    fn add(settings: &mut Settings, item: Self) -> Result<()> {
        settings.add_column_color(item)
    }

    fn update(settings: &mut Settings, index: usize, item: Self) -> Result<()> {
        settings.update_column_color(index, item)
    }

    fn remove(settings: &mut Settings, index: usize) -> Result<Self> {
        settings.remove_column_color(index)
    }
}

/// Creator form state: a draft plus the index being edited, if any
#[derive(Debug, Clone)]
pub struct DefinitionEditor<T: Definition> {
    draft: T,
    editing: Option<usize>,
}

impl<T: Definition> Default for DefinitionEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Definition> DefinitionEditor<T> {
    pub fn new() -> Self {
        Self {
            draft: T::initial(),
            editing: None,
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    pub fn heading(&self) -> String {
        match self.editing {
            Some(_) => format!("Edit {}", T::ENTITY),
            None => format!("Create new {}", T::ENTITY),
        }
    }

    /// Load an existing item into the form
    pub fn edit(&mut self, item: &T, index: usize) {
        self.draft = item.to_draft();
        self.editing = Some(index);
    }

    pub fn cancel(&mut self) {
        self.draft = T::initial();
        self.editing = None;
    }

    /// Add the draft, or save it over the edited item.
    ///
    /// Failures are reported and returned; the form keeps its draft so the user can
    /// fix it. Success resets the form.
    pub fn submit(&mut self, settings: &mut Settings, notifier: &mut dyn Notifier) -> Result<()> {
        let outcome = match self.editing {
            Some(index) => T::update(settings, index, self.draft.clone())
                .map(|()| format!("Updated {}: {}", T::ENTITY, T::items(settings)[index].name())),
            None => T::add(settings, self.draft.clone()).map(|()| {
                let name = T::items(settings).last().map(T::name).unwrap_or_default();
                format!("Added new {}: {name}", T::ENTITY)
            }),
        };

        match outcome {
            Ok(message) => {
                notifier.notify(&message);
                self.cancel();
                Ok(())
            }
            Err(err) => {
                notifier.notify(&err.to_string());
                Err(err)
            }
        }
    }
}

/// List component; edits go to the linked editor
#[derive(Debug)]
pub struct DefinitionList<'e, T: Definition> {
    editor: Option<&'e mut DefinitionEditor<T>>,
}

impl<T: Definition> Default for DefinitionList<'_, T> {
    fn default() -> Self {
        Self { editor: None }
    }
}

impl<'e, T: Definition> DefinitionList<'e, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(&mut self, editor: &'e mut DefinitionEditor<T>) {
        self.editor = Some(editor);
    }

    pub fn heading(&self) -> String {
        format!("Your custom {}", T::ENTITY_PLURAL)
    }

    pub fn empty_message(&self) -> String {
        format!("No custom {} created yet.", T::ENTITY_PLURAL)
    }

    pub fn items<'s>(&self, settings: &'s Settings) -> &'s [T] {
        T::items(settings)
    }

    /// The edit button: load item `index` into the linked editor
    pub fn request_edit(
        &mut self,
        settings: &Settings,
        index: usize,
        notifier: &mut dyn Notifier,
    ) -> Result<()> {
        let items = T::items(settings);
        let result = match (self.editor.as_deref_mut(), items.get(index)) {
            (None, _) => Err(CodecError::EditorNotLinked),
            (Some(_), None) => Err(CodecError::IndexOutOfRange {
                entity: T::ENTITY,
                index,
                len: items.len(),
            }),
            (Some(editor), Some(item)) => {
                editor.edit(item, index);
                Ok(())
            }
        };

        if let Err(err) = &result {
            notifier.notify(&format!("Error: {err}."));
        }
        result
    }

    /// The delete button
    pub fn delete(
        &mut self,
        settings: &mut Settings,
        index: usize,
        notifier: &mut dyn Notifier,
    ) -> Result<T> {
        match T::remove(settings, index) {
            Ok(removed) => {
                notifier.notify(&format!("Deleted {}.", removed.name()));
                Ok(removed)
            }
            Err(err) => {
                notifier.notify(&err.to_string());
                Err(err)
            }
        }
    }
}
