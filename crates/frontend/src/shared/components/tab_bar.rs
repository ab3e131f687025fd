use leptos::prelude::*;
use thaw::*;

use crate::shared::panel::EntityPanelSpec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabItem {
    pub label: &'static str,
    pub enabled: bool,
}

/// Tab descriptors of a panel, in display order
pub fn tab_items<S: EntityPanelSpec>() -> Vec<TabItem> {
    S::TABS
        .iter()
        .map(|t| TabItem {
            label: S::label(*t),
            enabled: S::is_enabled(*t),
        })
        .collect()
}

/// Tab bar using THAW buttons. Tabs are addressed by index so the bar stays
/// independent of the panel's tab type.
#[component]
pub fn TabBar(
    items: Vec<TabItem>,
    #[prop(into)] active: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
    /// Stack vertically (sidebar layout)
    #[prop(optional)]
    vertical: bool,
) -> impl IntoView {
    view! {
        <Flex
            vertical=vertical
            gap=FlexGap::Small
            class="tab-bar"
        >
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    view! {
                        <Button
                            appearance=Signal::derive(move || {
                                if active.get() == index {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            size=ButtonSize::Small
                            disabled=!item.enabled
                            attr:title=(!item.enabled).then_some("Feature not available")
                            on_click=move |_| on_select.run(index)
                        >
                            {item.label}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
    }
}
