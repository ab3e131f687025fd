//! Generic tabbed entity panel.
//!
//! Every dashboard is a set of tabs, each with an optional form schema.
//! [`EntityPanelSpec`] describes that shape once per entity and
//! [`EntityPanel`] carries the live state: active tab, one form per tab,
//! the fetched rows, the loading flag and the cancellation token of
//! in-flight requests. Commands reach the panel through [`PanelHandle`], so
//! they run the same against a signal in the browser and a `RefCell` in
//! tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use leptos::prelude::*;

use serde::de::DeserializeOwned;

use super::cancel::CancelToken;
use super::forms::{FormSchema, FormState};
use super::orchestrator::{Action, LoadingSink, Orchestrator, RequestError};

pub trait EntityPanelSpec: 'static {
    type Tab: Copy + Eq + Hash + Debug + Send + Sync + 'static;
    /// Entity cached by the panel's list view
    type Row: Clone + Send + Sync + 'static;

    /// Tabs in display order
    const TABS: &'static [Self::Tab];

    fn label(tab: Self::Tab) -> &'static str;

    fn is_enabled(_tab: Self::Tab) -> bool {
        true
    }

    /// Form shown on the tab; `None` for list/report tabs
    fn schema(tab: Self::Tab) -> Option<&'static FormSchema>;

    /// Identity fields that survive a form reset
    fn preserved_fields() -> &'static [&'static str] {
        &[]
    }
}

pub struct EntityPanel<S: EntityPanelSpec> {
    active: S::Tab,
    forms: HashMap<S::Tab, FormState>,
    rows: Vec<S::Row>,
    loading: bool,
    cancel: CancelToken,
}

impl<S: EntityPanelSpec> EntityPanel<S> {
    /// Starts on the first enabled tab.
    ///
    /// # Panics
    /// If `S::TABS` is empty.
    pub fn new() -> Self {
        let active = S::TABS
            .iter()
            .copied()
            .find(|t| S::is_enabled(*t))
            .unwrap_or(S::TABS[0]);
        let forms = S::TABS
            .iter()
            .filter_map(|t| S::schema(*t).map(|s| (*t, FormState::from_schema(s))))
            .collect();
        Self {
            active,
            forms,
            rows: Vec::new(),
            loading: false,
            cancel: CancelToken::new(),
        }
    }

    pub fn active(&self) -> S::Tab {
        self.active
    }

    pub fn active_index(&self) -> usize {
        S::TABS
            .iter()
            .position(|t| *t == self.active)
            .unwrap_or_default()
    }

    pub fn tab_at(index: usize) -> Option<S::Tab> {
        S::TABS.get(index).copied()
    }

    /// Switch tabs. Disabled tabs and re-selecting the active tab are
    /// ignored. A real switch cancels requests issued from the old tab.
    pub fn select(&mut self, tab: S::Tab) -> bool {
        if tab == self.active || !S::is_enabled(tab) || !S::TABS.contains(&tab) {
            return false;
        }
        self.cancel.cancel();
        self.cancel = CancelToken::new();
        self.active = tab;
        self.loading = false;
        true
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// View teardown: abort whatever is still running
    pub fn teardown(&mut self) {
        self.cancel.cancel();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn rows(&self) -> &[S::Row] {
        &self.rows
    }

    pub fn set_rows(&mut self, rows: Vec<S::Row>) {
        self.rows = rows;
    }

    pub fn form(&self, tab: S::Tab) -> Option<&FormState> {
        self.forms.get(&tab)
    }

    pub fn field(&self, tab: S::Tab, name: &str) -> String {
        self.form(tab)
            .map(|f| f.get(name).to_string())
            .unwrap_or_default()
    }

    pub fn set_field(&mut self, tab: S::Tab, name: &str, value: impl Into<String>) {
        if let Some(form) = self.forms.get_mut(&tab) {
            form.set(name, value);
        }
    }

    /// Write a value into every form that has the field (identity pre-fill)
    pub fn prefill(&mut self, name: &str, value: &str) {
        for form in self.forms.values_mut() {
            form.set(name, value);
        }
    }

    pub fn reset_form(&mut self, tab: S::Tab) {
        if let (Some(schema), Some(form)) = (S::schema(tab), self.forms.get_mut(&tab)) {
            form.reset(schema, S::preserved_fields());
        }
    }
}

impl<S: EntityPanelSpec> Default for EntityPanel<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared access to a live panel from async commands
pub trait PanelHandle<S: EntityPanelSpec>: LoadingSink {
    /// `None` once the panel is gone
    fn inspect<R>(&self, f: impl FnOnce(&EntityPanel<S>) -> R) -> Option<R>;
    fn modify(&self, f: impl FnOnce(&mut EntityPanel<S>));

    /// Form and token for a submit from `tab`
    fn snapshot(&self, tab: S::Tab) -> Option<(FormState, CancelToken)> {
        self.inspect(|p| {
            p.form(tab)
                .cloned()
                .map(|form| (form, p.cancel_token()))
        })
        .flatten()
    }
}

impl<S: EntityPanelSpec> LoadingSink for RwSignal<EntityPanel<S>> {
    fn set_loading(&self, loading: bool) {
        self.try_update(|p| p.set_loading(loading));
    }
}

impl<S: EntityPanelSpec> PanelHandle<S> for RwSignal<EntityPanel<S>> {
    fn inspect<R>(&self, f: impl FnOnce(&EntityPanel<S>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn modify(&self, f: impl FnOnce(&mut EntityPanel<S>)) {
        self.try_update(f);
    }
}

impl<S: EntityPanelSpec> LoadingSink for RefCell<EntityPanel<S>> {
    fn set_loading(&self, loading: bool) {
        self.borrow_mut().set_loading(loading);
    }
}

impl<S: EntityPanelSpec> PanelHandle<S> for RefCell<EntityPanel<S>> {
    fn inspect<R>(&self, f: impl FnOnce(&EntityPanel<S>) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn modify(&self, f: impl FnOnce(&mut EntityPanel<S>)) {
        f(&mut self.borrow_mut());
    }
}

/// Run the action built from `tab`'s form under the panel's loading flag
/// and current cancel token
pub async fn submit_form<S, R>(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<S>,
    tab: S::Tab,
    build: impl FnOnce(&FormState) -> Action<R>,
) -> Result<R, RequestError>
where
    S: EntityPanelSpec,
    R: DeserializeOwned,
{
    let (form, cancel) = panel.snapshot(tab).ok_or(RequestError::Cancelled)?;
    orchestrator.run(build(&form), panel, &cancel).await
}

/// Run a form-less action (list fetch, row action) for the panel
pub async fn run_action<S, R>(
    orchestrator: &Orchestrator,
    panel: &impl PanelHandle<S>,
    action: Action<R>,
) -> Result<R, RequestError>
where
    S: EntityPanelSpec,
    R: DeserializeOwned,
{
    let cancel = panel
        .inspect(|p| p.cancel_token())
        .ok_or(RequestError::Cancelled)?;
    orchestrator.run(action, panel, &cancel).await
}
