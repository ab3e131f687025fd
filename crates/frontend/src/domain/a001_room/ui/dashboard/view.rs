use contracts::domain::a001_room::aggregate::{room_type_label, Room};
use leptos::prelude::*;
use thaw::*;

use super::model::RoomTab;
use super::view_model::RoomDashboardVm;
use crate::shared::components::{panel_form, panel_tab_bar, LoadingOverlay, SubmitLabels};
use crate::shared::date_utils::format_money;

fn submit_labels(tab: RoomTab) -> SubmitLabels {
    let (idle, busy) = match tab {
        RoomTab::Add => ("Add Room", "Adding..."),
        RoomTab::Update => ("Update Room", "Updating..."),
        RoomTab::Delete => ("Delete Room", "Deleting..."),
        RoomTab::View => ("Fetch Rooms", "Fetching..."),
        RoomTab::Available => ("Check Availability", "Checking..."),
    };
    SubmitLabels { idle, busy }
}

#[component]
fn RoomsTable(#[prop(into)] rooms: Signal<Vec<Room>>) -> impl IntoView {
    view! {
        <Show
            when=move || !rooms.with(|r| r.is_empty())
            fallback=|| view! { <p class="panel-empty">"No rooms to display."</p> }
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Room Number"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Price / Night"</TableHeaderCell>
                        <TableHeaderCell>"Max Occupants"</TableHeaderCell>
                        <TableHeaderCell>"Available"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rooms.get()
                        key=|room| (room.id, room.room_number.clone())
                        children=move |room| {
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{room.id}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{room.room_number.clone()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>{room_type_label(&room.room_type)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format!("${}", format_money(room.price_per_night))}</TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{room.max_occupants}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>{if room.is_available { "Yes" } else { "No" }}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}

/// Room management: add, update, delete, browse and availability search
#[component]
pub fn RoomDashboard() -> impl IntoView {
    let vm = RoomDashboardVm::new();
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
    let rooms = Signal::derive(move || panel.with(|p| p.rows().to_vec()));

    view! {
        <div class="dashboard room-dashboard">
            <h2 class="dashboard__title">"Room Dashboard"</h2>
            {panel_tab_bar(panel, false)}

            <div class="dashboard__panel">
                <LoadingOverlay active=loading />
                {move || {
                    let tab = active.get();
                    panel_form(panel, tab, submit_labels(tab), on_submit, None, Signal::stored(Vec::new()))
                }}
            </div>

            <Show when=move || matches!(active.get(), RoomTab::View | RoomTab::Available)>
                <RoomsTable rooms=rooms />
            </Show>
        </div>
    }
}
