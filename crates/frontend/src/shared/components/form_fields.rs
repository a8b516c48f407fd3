use leptos::prelude::*;

use crate::shared::list::dialog::CrudDialog;
use crate::shared::list::form::{has_key, toggle_key, FieldAccess, FieldKind, FormField};

/// Inputs of an edit form bound to a dialog
#[component]
pub fn FormFields<F>(fields: Vec<FormField<F>>, dialog: RwSignal<CrudDialog<F>>) -> impl IntoView
where
    F: Clone + Default + Send + Sync + 'static,
{
    view! {
        <div class="form">
            {fields.into_iter().map(|field| render_field(field, dialog)).collect_view()}
        </div>
    }
}

fn render_field<F>(field: FormField<F>, dialog: RwSignal<CrudDialog<F>>) -> AnyView
where
    F: Clone + Default + Send + Sync + 'static,
{
    let disabled = move || dialog.with(CrudDialog::is_submitting);
    let id = format!("field-{}", field.key);
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    match (field.access, field.kind) {
        (FieldAccess::Flag { get, set }, _) => view! {
            <div class="form__group form__group--checkbox">
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        id=id
                        prop:checked=move || dialog.with(|d| get(d.form()))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            dialog.update(|d| d.edit_form(|f| set(f, checked)));
                        }
                        disabled=disabled
                    />
                    <span>{label}</span>
                </label>
            </div>
        }
        .into_any(),
        (FieldAccess::Text { get, set }, FieldKind::Select(options)) => {
            let current = move || dialog.with(|d| get(d.form()));
            view! {
                <div class="form__group">
                    <label class="form__label" for=id.clone()>{label}</label>
                    <select
                        class="form__select"
                        id=id
                        prop:value=current
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            dialog.update(|d| d.edit_form(|f| set(f, value)));
                        }
                        disabled=disabled
                    >
                        <option value="">"Selecione..."</option>
                        {move || {
                            options()
                                .into_iter()
                                .map(|(value, text)| {
                                    let selected = current() == value;
                                    view! { <option value=value selected=selected>{text}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            }
            .into_any()
        }
        (FieldAccess::Text { get, set }, FieldKind::MultiSelect(options)) => view! {
            <div class="form__group">
                <span class="form__label">{label}</span>
                <div class="form__chips" id=id>
                    {move || {
                        options()
                            .into_iter()
                            .map(|(value, text)| {
                                let for_check = value.clone();
                                view! {
                                    <label class="filter-chip">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || dialog.with(|d| has_key(&get(d.form()), &for_check))
                                            on:change=move |_| {
                                                dialog.update(|d| d.edit_form(|f| {
                                                    let next = toggle_key(&get(f), &value);
                                                    set(f, next)
                                                }))
                                            }
                                            disabled=disabled
                                        />
                                        <span>{text}</span>
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        }
        .into_any(),
        (FieldAccess::Text { get, set }, FieldKind::TextArea) => view! {
            <div class="form__group">
                <label class="form__label" for=id.clone()>{label}</label>
                <textarea
                    class="form__textarea"
                    id=id
                    rows="3"
                    prop:value=move || dialog.with(|d| get(d.form()))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        dialog.update(|d| d.edit_form(|f| set(f, value)));
                    }
                    disabled=disabled
                ></textarea>
            </div>
        }
        .into_any(),
        (FieldAccess::Text { get, set }, kind) => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <div class="form__group">
                    <label class="form__label" for=id.clone()>{label}</label>
                    <input
                        type=input_type
                        class="form__input"
                        id=id
                        step=if input_type == "number" { Some("any") } else { None }
                        prop:value=move || dialog.with(|d| get(d.form()))
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dialog.update(|d| d.edit_form(|f| set(f, value)));
                        }
                        disabled=disabled
                    />
                </div>
            }
            .into_any()
        }
    }
}
