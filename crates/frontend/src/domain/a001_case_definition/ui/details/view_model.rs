use crate::domain::a001_case_definition::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::pending_changes::PendingChanges;
use contracts::domain::a001_case_definition::CaseDefinition;
use leptos::prelude::*;

/// Sections of the definition details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionSection {
    General,
    Columns,
    SearchFields,
    Tabs,
    Statuses,
    Widgets,
}

impl DefinitionSection {
    pub const ALL: [DefinitionSection; 6] = [
        DefinitionSection::General,
        DefinitionSection::Columns,
        DefinitionSection::SearchFields,
        DefinitionSection::Tabs,
        DefinitionSection::Statuses,
        DefinitionSection::Widgets,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DefinitionSection::General => "General",
            DefinitionSection::Columns => "List columns",
            DefinitionSection::SearchFields => "Search fields",
            DefinitionSection::Tabs => "Tabs",
            DefinitionSection::Statuses => "Statuses",
            DefinitionSection::Widgets => "Widgets",
        }
    }
}

/// ViewModel for the case definition details screen
#[derive(Clone, Copy)]
pub struct CaseDefinitionDetailsViewModel {
    pub name: StoredValue<String>,
    pub definition: RwSignal<Option<CaseDefinition>>,
    pub section: RwSignal<DefinitionSection>,
    pub pending: RwSignal<PendingChanges<DefinitionSection>>,
    pub error: RwSignal<Option<String>>,
    tab_key: StoredValue<String>,
    tabs_store: AppGlobalContext,
}

impl CaseDefinitionDetailsViewModel {
    pub fn new(name: String, tab_key: String, tabs_store: AppGlobalContext) -> Self {
        Self {
            name: StoredValue::new(name),
            definition: RwSignal::new(None),
            section: RwSignal::new(DefinitionSection::General),
            pending: RwSignal::new(PendingChanges::new()),
            error: RwSignal::new(None),
            tab_key: StoredValue::new(tab_key),
            tabs_store,
        }
    }

    pub fn load(&self) {
        let this = *self;
        let name = self.name.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_definition(&name).await {
                Ok(definition) => {
                    this.tabs_store.update_tab_title(
                        &this.tab_key.get_value(),
                        &detail_tab_label("Definition", definition.display_name()),
                    );
                    this.definition.set(Some(definition));
                    this.error.set(None);
                }
                Err(e) => this.error.set(Some(format!("Failed to load definition: {}", e))),
            }
        });
    }

    /// Editors of the current section report whether they hold unsaved
    /// changes; the app tab mirrors the flag.
    pub fn set_dirty(&self, dirty: bool) {
        let was_dirty = self.pending.with_untracked(|p| p.is_dirty());
        if dirty == was_dirty {
            return;
        }
        self.pending.update(|p| {
            if dirty {
                p.mark_dirty()
            } else {
                p.mark_saved()
            }
        });
        self.tabs_store.set_dirty(&self.tab_key.get_value(), dirty);
    }

    /// Switches the section, asking first when the current one has unsaved
    /// changes.
    pub fn request_section(&self, target: DefinitionSection, modal_stack: ModalStackService) {
        if self.section.get_untracked() == target {
            return;
        }
        let next = self
            .pending
            .try_update(|p| p.request_navigation(target))
            .flatten();
        match next {
            Some(section) => self.section.set(section),
            None => {
                let this = *self;
                modal_stack.confirm(
                    "Unsaved changes",
                    &format!(
                        "The order in \"{}\" was changed but not saved. Leave the section and discard the changes?",
                        self.section.get_untracked().label()
                    ),
                    "Discard changes",
                    Callback::new(move |_| this.confirm_switch()),
                    Callback::new(move |_| this.cancel_switch()),
                );
            }
        }
    }

    fn confirm_switch(&self) {
        if let Some(section) = self.pending.try_update(|p| p.confirm()).flatten() {
            log::debug!("Discarding unsaved changes, switching to {:?}", section);
            self.tabs_store.set_dirty(&self.tab_key.get_value(), false);
            self.section.set(section);
        }
    }

    fn cancel_switch(&self) {
        self.pending.update(|p| p.cancel());
    }
}
