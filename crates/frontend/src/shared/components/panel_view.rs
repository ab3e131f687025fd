//! Rendering helpers binding an [`EntityPanel`] signal to the tab bar and
//! the form renderer. Plain generic functions rather than components, since
//! the panel type parameter cannot be inferred from props.

use leptos::prelude::*;
use thaw::*;

use super::form_view::FormView;
use super::tab_bar::{tab_items, TabBar};
use crate::shared::forms::FormState;
use crate::shared::panel::{EntityPanel, EntityPanelSpec};

/// Select the tab at `index` of the bar; out-of-range and disabled tabs are
/// ignored
pub fn select_index<S: EntityPanelSpec>(panel: &mut EntityPanel<S>, index: usize) -> bool {
    EntityPanel::<S>::tab_at(index).is_some_and(|tab| panel.select(tab))
}

pub fn panel_tab_bar<S: EntityPanelSpec>(
    panel: RwSignal<EntityPanel<S>>,
    vertical: bool,
) -> impl IntoView {
    let items = tab_items::<S>();
    let active = Signal::derive(move || panel.with(|p| p.active_index()));
    let on_select = Callback::new(move |index: usize| {
        panel.update(|p| {
            select_index(p, index);
        });
    });

    view! { <TabBar items=items active=active on_select=on_select vertical=vertical /> }
}

/// Submit button labels: idle and in flight
#[derive(Debug, Clone, Copy)]
pub struct SubmitLabels {
    pub idle: &'static str,
    pub busy: &'static str,
}

/// Form of `tab` with its submit button.
///
/// `on_change` fires after the edited value is stored in the panel.
pub fn panel_form<S: EntityPanelSpec>(
    panel: RwSignal<EntityPanel<S>>,
    tab: S::Tab,
    labels: SubmitLabels,
    on_submit: Callback<()>,
    on_change: Option<Callback<(&'static str, String)>>,
    options: Signal<Vec<(String, String)>>,
) -> AnyView {
    let Some(schema) = S::schema(tab) else {
        return ().into_any();
    };

    let values = Signal::derive(move || {
        panel.with(|p| p.form(tab).cloned().unwrap_or_else(FormState::default))
    });
    let loading = Signal::derive(move || panel.with(|p| p.is_loading()));
    let on_input = Callback::new(move |(name, value): (&'static str, String)| {
        panel.update(|p| p.set_field(tab, name, value.clone()));
        if let Some(on_change) = on_change {
            on_change.run((name, value));
        }
    });

    view! {
        <form
            class="panel-form"
            novalidate
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <FormView
                schema=schema
                values=values
                on_input=on_input
                options=options
                disabled=loading
            />
            <Button
                appearance=ButtonAppearance::Primary
                button_type=ButtonType::Submit
                disabled=loading
            >
                {move || if loading.get() { labels.busy } else { labels.idle }}
            </Button>
        </form>
    }
    .into_any()
}
