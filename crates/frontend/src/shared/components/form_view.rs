use leptos::prelude::*;

use crate::shared::date_utils::{iso_date, today};
use crate::shared::forms::{FieldKind, FieldSpec, FormSchema, FormState};

/// Renders every field of a schema bound to one [`FormState`].
///
/// Values flow in through `values`; edits go out through `on_input` as
/// `(field name, raw value)`. Checkboxes report `"true"`/`"false"`.
#[component]
pub fn FormView(
    schema: &'static FormSchema,
    #[prop(into)] values: Signal<FormState>,
    #[prop(into)] on_input: Callback<(&'static str, String)>,
    /// Options of `DynamicSelect` fields as `(value, label)`
    #[prop(optional, into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    schema
        .fields
        .iter()
        .map(|field| field_view(field, values, on_input, options, disabled))
        .collect_view()
}

fn field_view(
    field: &'static FieldSpec,
    values: Signal<FormState>,
    on_input: Callback<(&'static str, String)>,
    options: Signal<Vec<(String, String)>>,
    disabled: Signal<bool>,
) -> AnyView {
    let name = field.name;
    let value = move || values.with(|f| f.get(name).to_string());
    let is_disabled = move || disabled.get() || field.readonly;
    let required = field.required.is_some();

    let control = match field.kind {
        FieldKind::Checkbox => view! {
            <input
                id=name
                name=name
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || values.with(|f| f.parse_bool(name))
                disabled=is_disabled
                on:change=move |ev| on_input.run((name, event_target_checked(&ev).to_string()))
            />
        }
        .into_any(),
        FieldKind::Select(choices) => {
            let choices: Vec<(String, String)> = choices
                .iter()
                .map(|(v, l)| (v.to_string(), l.to_string()))
                .collect();
            select_view(field, value, Signal::stored(choices), on_input, is_disabled)
        }
        FieldKind::DynamicSelect => select_view(field, value, options, on_input, is_disabled),
        FieldKind::Number { min, step } => view! {
            <input
                id=name
                name=name
                type="number"
                class="form__input"
                min=min.map(|m| m.to_string())
                step=step
                placeholder=field.placeholder
                prop:value=value
                required=required
                disabled=is_disabled
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            />
        }
        .into_any(),
        // past dates are not selectable
        FieldKind::Date => view! {
            <input
                id=name
                name=name
                type="date"
                class="form__input"
                min=iso_date(today())
                prop:value=value
                required=required
                disabled=is_disabled
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            />
        }
        .into_any(),
        _ => view! {
            <input
                id=name
                name=name
                type=field.input_type()
                class="form__input"
                placeholder=field.placeholder
                prop:value=value
                required=required
                disabled=is_disabled
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=name>{field.label}</label>
            {control}
        </div>
    }
    .into_any()
}

fn select_view(
    field: &'static FieldSpec,
    value: impl Fn() -> String + Copy + Send + Sync + 'static,
    choices: Signal<Vec<(String, String)>>,
    on_input: Callback<(&'static str, String)>,
    is_disabled: impl Fn() -> bool + Send + Sync + 'static,
) -> AnyView {
    let name = field.name;
    view! {
        <select
            id=name
            name=name
            class="form__select"
            required=field.required.is_some()
            disabled=is_disabled
            on:change=move |ev| on_input.run((name, event_target_value(&ev)))
        >
            {(!field.placeholder.is_empty()).then(|| view! {
                <option value="" selected=move || value().is_empty()>{field.placeholder}</option>
            })}
            <For
                each=move || choices.get()
                key=|(v, _)| v.clone()
                children=move |(v, label)| {
                    let current = v.clone();
                    view! {
                        <option value=v selected=move || value() == current>{label}</option>
                    }
                }
            />
        </select>
    }
    .into_any()
}
