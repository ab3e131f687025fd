use contracts::domain::a002_reservation::aggregate::Reservation;
use leptos::prelude::*;
use thaw::*;

use super::model::{ReservationTab, RowAction};
use super::view_model::ReservationDashboardVm;
use crate::shared::components::{panel_form, panel_tab_bar, LoadingOverlay, SubmitLabels};

fn row_actions(reservation: &Reservation, on_action: Callback<RowAction>) -> AnyView {
    let status = reservation.status();
    let id = reservation.id;

    if status.can_cancel() {
        view! {
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| on_action.run(RowAction::Cancel(id))
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    disabled=!status.can_check_in()
                    on_click=move |_| on_action.run(RowAction::CheckIn(id))
                >
                    "Check In"
                </Button>
            </Flex>
        }
        .into_any()
    } else if status.can_check_out() {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                size=ButtonSize::Small
                on_click=move |_| on_action.run(RowAction::CheckOut(id))
            >
                "Check Out"
            </Button>
        }
        .into_any()
    } else {
        ().into_any()
    }
}

#[component]
fn ReservationsTable(
    #[prop(into)] reservations: Signal<Vec<Reservation>>,
    on_action: Callback<RowAction>,
) -> impl IntoView {
    view! {
        <h3>"Your Reservations"</h3>
        <Show
            when=move || !reservations.with(|r| r.is_empty())
            fallback=|| view! { <p class="panel-empty">"No reservations found."</p> }
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Room Number"</TableHeaderCell>
                        <TableHeaderCell>"Check-In"</TableHeaderCell>
                        <TableHeaderCell>"Check-Out"</TableHeaderCell>
                        <TableHeaderCell>"Occupants"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || reservations.get()
                        key=|r| (r.id, r.reservation_status.clone())
                        children=move |r| {
                            let actions = row_actions(&r, on_action);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{r.id}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.room_id}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.check_in_date.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.check_out_date.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.occupants}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{r.reservation_status.clone()}</TableCellLayout></TableCell>
                                    <TableCell>{actions}</TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}

/// Customer reservations: create, update and the status-gated row actions
#[component]
pub fn ReservationDashboard() -> impl IntoView {
    let vm = ReservationDashboardVm::new();
    let panel = vm.panel;
    let active = vm.active;
    let loading = vm.loading();
    let options = vm.room_options();

    vm.init_command();
    Effect::new({
        let vm = vm.clone();
        move |previous: Option<ReservationTab>| {
            let tab = active.get();
            if previous.is_some_and(|p| p != tab) {
                vm.tab_command(tab);
            }
            tab
        }
    });
    on_cleanup({
        let vm = vm.clone();
        move || vm.teardown()
    });

    let on_submit = Callback::new({
        let vm = vm.clone();
        move |_| vm.submit_command()
    });
    let on_change = Callback::new({
        let vm = vm.clone();
        move |(name, value): (&'static str, String)| {
            if name == "roomType" {
                vm.room_type_changed(value);
            }
        }
    });
    let on_action = Callback::new({
        let vm = vm.clone();
        move |action: RowAction| vm.row_command(action)
    });
    let reservations = Signal::derive(move || panel.with(|p| p.rows().to_vec()));

    view! {
        <div class="dashboard reservation-dashboard">
            <LoadingOverlay active=loading />
            <aside class="dashboard__sidebar">
                <h2>"Reservation Management"</h2>
                {panel_tab_bar(panel, true)}
            </aside>

            <section class="dashboard__content">
                {move || {
                    let tab = active.get();
                    match tab {
                        ReservationTab::Create => view! {
                            <h2>"Create Reservation"</h2>
                            {panel_form(
                                panel,
                                tab,
                                SubmitLabels { idle: "Create Reservation", busy: "Creating..." },
                                on_submit,
                                Some(on_change),
                                options,
                            )}
                        }
                        .into_any(),
                        ReservationTab::Update => view! {
                            <h2>"Update Reservation"</h2>
                            {panel_form(
                                panel,
                                tab,
                                SubmitLabels { idle: "Update Reservation", busy: "Updating..." },
                                on_submit,
                                Some(on_change),
                                options,
                            )}
                        }
                        .into_any(),
                        ReservationTab::View => view! {
                            <h2>"View Reservations"</h2>
                            <ReservationsTable reservations=reservations on_action=on_action />
                        }
                        .into_any(),
                    }
                }}
            </section>
        </div>
    }
}
