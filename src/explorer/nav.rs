use tracing::{debug, trace};

use super::normalize::strip_wrappers;
use super::page::{self, Page};
use crate::schema::{FieldDef, SchemaIndex, TypeDef};

/// Back-link label shown when the previous page is the start page.
pub const START_PAGE_LABEL: &str = "Main Page";

/// One visited page on the navigation stack: either a type or a field
/// viewed as a call. The two are mutually exclusive.
#[derive(Debug, Clone, Copy)]
pub enum NavEntry<'a> {
    Type(&'a TypeDef),
    Call {
        declaring: &'a TypeDef,
        field: &'a FieldDef,
    },
}

impl<'a> NavEntry<'a> {
    /// Display name of the visited page, used for back-link labels.
    pub fn name(&self) -> &'a str {
        match self {
            NavEntry::Type(type_def) => &type_def.name,
            NavEntry::Call { field, .. } => &field.name,
        }
    }
}

/// The navigation engine of the documentation explorer.
///
/// Owns the visited-page stack and visibility flag for one session; the
/// schema is borrowed read-only and may be shared across sessions. The
/// currently inspected node is always the stack top, so the two can
/// never disagree. All transitions are synchronous and total: unknown
/// names and empty-stack pops are absorbed as no-ops, never surfaced.
pub struct Explorer<'a> {
    schema: &'a SchemaIndex,
    /// Built once per schema binding; the start page does not depend on
    /// navigation state.
    start_page: Page,
    expanded: bool,
    stack: Vec<NavEntry<'a>>,
}

impl<'a> Explorer<'a> {
    /// Create a collapsed explorer with an empty history.
    pub fn new(schema: &'a SchemaIndex) -> Self {
        Self {
            schema,
            start_page: page::start_page(schema),
            expanded: false,
            stack: Vec::new(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Show or hide the explorer. The history stack is kept either way.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Open the page for a type, looked up under the normalized name.
    /// Forces the explorer visible on a hit; a miss changes nothing.
    pub fn open_type(&mut self, raw_name: &str) {
        let name = strip_wrappers(raw_name);
        match self.schema.type_by_name(name) {
            Some(type_def) => {
                debug!(name = %type_def.name, "opening type page");
                self.stack.push(NavEntry::Type(type_def));
                self.expanded = true;
            }
            None => trace!(raw_name, "ignoring link to unknown type"),
        }
    }

    /// Open a field of `type_name` as a call page. The declaring type
    /// name is matched exactly; declaring names are always bare.
    pub fn open_call(&mut self, type_name: &str, field_name: &str) {
        let Some(declaring) = self.schema.type_by_name(type_name) else {
            trace!(type_name, "ignoring call link with unknown declaring type");
            return;
        };
        match declaring.field(field_name) {
            Some(field) => {
                debug!(declaring = %declaring.name, field = %field.name, "opening call page");
                self.stack.push(NavEntry::Call { declaring, field });
                self.expanded = true;
            }
            None => trace!(type_name, field_name, "ignoring link to unknown field"),
        }
    }

    /// Leave the current page, returning to the previous one or to the
    /// start page. No-op when already on the start page.
    pub fn go_back(&mut self) {
        self.stack.pop();
    }

    /// Return to the start page, forgetting the whole trail. Visibility
    /// is unchanged.
    pub fn reset_to_start(&mut self) {
        self.stack.clear();
    }

    /// The entry being inspected, i.e. the stack top.
    pub fn current_entry(&self) -> Option<NavEntry<'a>> {
        self.stack.last().copied()
    }

    /// Content to display right now: `None` while collapsed, otherwise
    /// the page for the inspected node. Type and call pages are rebuilt
    /// fresh on every call; only the start page is cached.
    pub fn current_page(&self) -> Option<Page> {
        if !self.expanded {
            return None;
        }
        Some(match self.stack.last() {
            Some(NavEntry::Type(type_def)) => page::type_page(type_def),
            Some(NavEntry::Call { declaring, field }) => page::call_page(declaring, field),
            None => self.start_page.clone(),
        })
    }

    /// Label for the back link: the page one would return to. `None`
    /// when there is nothing to go back from.
    pub fn back_label(&self) -> Option<&str> {
        match self.stack.len() {
            0 => None,
            1 => Some(START_PAGE_LABEL),
            n => Some(self.stack[n - 2].name()),
        }
    }

    /// Number of visited pages on the trail.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
