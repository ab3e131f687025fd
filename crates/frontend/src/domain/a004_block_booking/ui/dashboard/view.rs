use leptos::prelude::*;

use super::model::{TravelPanel, TravelTab};
use super::view_model::TravelDashboardVm;
use crate::shared::components::{panel_form, panel_tab_bar, LoadingOverlay, SubmitLabels};
use crate::shared::panel::EntityPanelSpec;

#[component]
pub fn TravelDashboard() -> impl IntoView {
    let vm = TravelDashboardVm::new();
    let panel = vm.panel;
    let active = vm.active;
    let loading = vm.loading();

    on_cleanup({
        let vm = vm.clone();
        move || vm.teardown()
    });
    let on_submit = Callback::new({
        let vm = vm.clone();
        move |_| vm.submit_command()
    });

    view! {
        <div class="dashboard travel-dashboard">
            <LoadingOverlay active=loading />
            <aside class="dashboard__sidebar">
                <h2>"Travel Management"</h2>
                {panel_tab_bar(panel, true)}
            </aside>

            <section class="dashboard__content">
                <h2>{move || TravelPanel::label(active.get())}</h2>
                {move || {
                    let tab = active.get();
                    if tab == TravelTab::CreateBooking {
                        panel_form(
                            panel,
                            tab,
                            SubmitLabels { idle: "Create Block Booking", busy: "Creating..." },
                            on_submit,
                            None,
                            Signal::stored(Vec::new()),
                        )
                    } else {
                        let message = format!("{} is not available at this time.", TravelPanel::label(tab));
                        view! { <p class="panel-empty">{message}</p> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
