use leptos::prelude::*;

use super::navigator::{use_router, AppRoute};
use crate::dashboards::{AdminDashboard, CustomerDashboard};
use crate::domain::a001_room::ui::dashboard::RoomDashboard;
use crate::domain::a002_reservation::ui::dashboard::ReservationDashboard;
use crate::domain::a004_block_booking::ui::dashboard::TravelDashboard;
use crate::projections::p900_occupancy_report::ui::Reports;
use crate::shared::components::PageHeader;
use crate::system::auth::context::{use_auth, use_logout};
use crate::system::auth::guard::{AccessPolicy, RequireRole};
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

/// Header with the signed-in user and logout, for pages reached directly
#[component]
fn StandalonePage(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let (_, auth) = use_auth();
    let on_logout = use_logout();
    let user_name = Signal::derive(move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.user.display_name().to_string()))
    });

    view! {
        <div class="standalone-page">
            <PageHeader title=title subtitle=user_name on_logout=on_logout />
            {children()}
        </div>
    }
}

fn page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login | AppRoute::NotFound => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboard /> }.into_any(),
        AppRoute::CustomerDashboard => view! {
            <StandalonePage title="Customer Dashboard">
                <CustomerDashboard />
            </StandalonePage>
        }
        .into_any(),
        AppRoute::RoomDashboard => view! {
            <StandalonePage title="Room Dashboard">
                <RoomDashboard />
            </StandalonePage>
        }
        .into_any(),
        AppRoute::ReservationDashboard => view! {
            <StandalonePage title="Reservation Dashboard">
                <ReservationDashboard />
            </StandalonePage>
        }
        .into_any(),
        AppRoute::TravelCompanyDashboard => view! {
            <StandalonePage title="Travel Company Dashboard">
                <TravelDashboard />
            </StandalonePage>
        }
        .into_any(),
        AppRoute::Reports => view! {
            <StandalonePage title="Reports">
                <Reports />
            </StandalonePage>
        }
        .into_any(),
    }
}

/// Renders the page of the current route, behind its role gate
#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = use_router();

    move || {
        let route = router.current.get();
        match AccessPolicy::for_route(route) {
            Some(policy) => view! {
                <RequireRole policy=policy>
                    {move || page(route)}
                </RequireRole>
            }
            .into_any(),
            None => page(route),
        }
    }
}
