use leptos::prelude::*;

/// Customer management placeholder embedded in the admin dashboard
#[component]
pub fn CustomerDashboard() -> impl IntoView {
    view! {
        <div class="dashboard customer-dashboard">
            <h3>"Customer Dashboard"</h3>
            <p>"This is where you can manage customer information."</p>
        </div>
    }
}
