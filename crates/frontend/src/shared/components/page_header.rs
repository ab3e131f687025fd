use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Dashboard header: title, signed-in user and an optional logout button
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Display name of the signed-in user
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Shows the logout button when set
    #[prop(optional)]
    on_logout: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {on_logout.map(|logout| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| logout.run(())
                    >
                        {icon("logout")}
                        " Logout"
                    </Button>
                })}
            </div>
        </div>
    }
}
