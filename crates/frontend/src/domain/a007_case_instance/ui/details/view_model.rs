use crate::domain::a006_case_status;
use crate::domain::a007_case_instance::api;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_case_definition::CaseSettings;
use contracts::domain::a004_case_tab::{default_tabs, effective_tabs, CaseTab};
use contracts::domain::a006_case_status::InternalCaseStatus;
use contracts::domain::a007_case_instance::CaseInstance;
use leptos::prelude::*;
use uuid::Uuid;

/// State of one open case
#[derive(Clone, Copy)]
pub struct CaseDetailsViewModel {
    pub id: Uuid,
    pub definition_name: StoredValue<String>,
    pub case: RwSignal<Option<CaseInstance>>,
    pub tabs: RwSignal<Vec<CaseTab>>,
    pub active_tab: RwSignal<Option<String>>,
    pub statuses: RwSignal<Vec<InternalCaseStatus>>,
    pub settings: RwSignal<CaseSettings>,
    pub error: RwSignal<Option<String>>,
    pub tab_key: StoredValue<String>,
    pub tabs_store: AppGlobalContext,
}

impl CaseDetailsViewModel {
    pub fn new(definition_name: String, id: Uuid, tab_key: String, tabs_store: AppGlobalContext) -> Self {
        Self {
            id,
            definition_name: StoredValue::new(definition_name),
            case: RwSignal::new(None),
            tabs: RwSignal::new(Vec::new()),
            active_tab: RwSignal::new(None),
            statuses: RwSignal::new(Vec::new()),
            settings: RwSignal::new(CaseSettings::default()),
            error: RwSignal::new(None),
            tab_key: StoredValue::new(tab_key),
            tabs_store,
        }
    }

    /// Fetches the case and renames the app tab after its reference.
    pub fn reload_case(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_case(this.id).await {
                Ok(case) => {
                    this.tabs_store
                        .update_tab_title(&this.tab_key.get_value(), &case.reference());
                    this.case.set(Some(case));
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load case {}: {}", this.id, e);
                    this.error.set(Some(e));
                }
            }
        });
    }

    pub fn load(&self) {
        self.reload_case();
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let name = this.definition_name.get_value();
            let tabs = match api::fetch_case_tabs(&name).await {
                Ok(configured) => effective_tabs(configured),
                Err(e) => {
                    log::warn!("Tabs of '{}' unavailable, using defaults: {}", name, e);
                    default_tabs()
                }
            };
            this.active_tab.set(tabs.first().map(|t| t.key.clone()));
            this.tabs.set(tabs);

            match a006_case_status::api::fetch_case_statuses(&name).await {
                Ok(statuses) => this.statuses.set(statuses),
                Err(e) => log::warn!("Statuses of '{}' unavailable: {}", name, e),
            }
            match api::fetch_case_settings(&name).await {
                Ok(settings) => this.settings.set(settings),
                Err(e) => log::warn!("Settings of '{}' unavailable: {}", name, e),
            }
        });
    }

    pub fn active(&self) -> Option<CaseTab> {
        let key = self.active_tab.get()?;
        self.tabs.with(|tabs| tabs.iter().find(|t| t.key == key).cloned())
    }
}
