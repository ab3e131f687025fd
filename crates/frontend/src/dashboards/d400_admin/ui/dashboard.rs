use leptos::prelude::*;

use crate::dashboards::d401_customer::ui::CustomerDashboard;
use crate::domain::a001_room::ui::dashboard::RoomDashboard;
use crate::projections::p900_occupancy_report::ui::Reports;
use crate::shared::components::{panel_tab_bar, PageHeader};
use crate::shared::forms::FormSchema;
use crate::shared::panel::{EntityPanel, EntityPanelSpec};
use crate::system::auth::context::{use_auth, use_logout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminTab {
    Customers,
    Rooms,
    Reports,
}

/// Navigation-only panel: each tab embeds a whole dashboard
pub struct AdminPanel;

impl EntityPanelSpec for AdminPanel {
    type Tab = AdminTab;
    type Row = ();

    const TABS: &'static [AdminTab] = &[AdminTab::Customers, AdminTab::Rooms, AdminTab::Reports];

    fn label(tab: AdminTab) -> &'static str {
        match tab {
            AdminTab::Customers => "Customer Dashboard",
            AdminTab::Rooms => "Room Dashboard",
            AdminTab::Reports => "Reports",
        }
    }

    fn schema(_tab: AdminTab) -> Option<&'static FormSchema> {
        None
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let (_, auth) = use_auth();
    let on_logout = use_logout();
    let panel = RwSignal::new(EntityPanel::<AdminPanel>::new());
    let active = Memo::new(move |_| panel.with(|p| p.active()));
    on_cleanup(move || {
        panel.try_update_untracked(|p| p.teardown());
    });

    let user_name = Signal::derive(move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.user.display_name().to_string()))
    });

    view! {
        <div class="admin-dashboard">
            <PageHeader title="Admin Dashboard" subtitle=user_name on_logout=on_logout />
            {panel_tab_bar(panel, false)}
            <div class="admin-dashboard__content">
                {move || match active.get() {
                    AdminTab::Customers => view! { <CustomerDashboard /> }.into_any(),
                    AdminTab::Rooms => view! { <RoomDashboard /> }.into_any(),
                    AdminTab::Reports => view! { <Reports /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_tabs_start_on_customers() {
        let mut panel = EntityPanel::<AdminPanel>::new();
        assert_eq!(panel.active(), AdminTab::Customers);
        assert!(panel.form(AdminTab::Rooms).is_none());

        let before = panel.cancel_token();
        panel.select(AdminTab::Reports);
        assert_eq!(panel.active_index(), 2);
        assert!(before.is_cancelled());
    }
}
