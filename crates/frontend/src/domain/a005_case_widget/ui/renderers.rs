use crate::domain::a007_case_instance::ui::render_custom_component;
use contracts::domain::a005_case_widget::{widget_rows, CaseWidget, CaseWidgetType, WidgetField};
use leptos::prelude::*;
use serde_json::Value;
use uuid::Uuid;

/// Body of one widget for the resolved `data`.
pub fn render_widget(widget: &CaseWidget, data: &Value, case_id: Uuid) -> AnyView {
    match widget.widget_type {
        CaseWidgetType::Fields => render_fields(widget, data),
        CaseWidgetType::Table => render_table(widget, data),
        CaseWidgetType::Collection => render_collection(widget, data),
        CaseWidgetType::Custom => match widget.component_key() {
            Some(key) => render_custom_component(key, case_id),
            None => view! { <p class="form-hint">"No component configured"</p> }.into_any(),
        },
        CaseWidgetType::Form => {
            let form = widget.form_definition_name().unwrap_or_default().to_string();
            view! {
                <p class="form-hint">{format!("Form '{}' opens in the form viewer", form)}</p>
            }
            .into_any()
        }
    }
}

fn field_list(fields: Vec<WidgetField>, data: &Value) -> AnyView {
    fields
        .into_iter()
        .map(|field| {
            let text = field.render(data);
            view! {
                <div class="widget-field">
                    <dt class="widget-field__title">{field.title}</dt>
                    <dd class="widget-field__value">{text}</dd>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

fn render_fields(widget: &CaseWidget, data: &Value) -> AnyView {
    let columns = widget.field_columns();
    let style = format!("grid-template-columns: repeat({}, 1fr);", columns.len().max(1));
    view! {
        <div class="widget-fields" style=style>
            {columns
                .into_iter()
                .map(|column| view! { <dl class="widget-fields__column">{field_list(column, data)}</dl> })
                .collect_view()}
        </div>
    }
    .into_any()
}

fn render_table(widget: &CaseWidget, data: &Value) -> AnyView {
    let columns = StoredValue::new(widget.table_columns());
    let rows = StoredValue::new(widget_rows(data).to_vec());
    let page_size = widget.default_page_size() as usize;
    let page = RwSignal::new(0usize);
    let page_count = rows.with_value(|r| r.len().div_ceil(page_size).max(1));

    view! {
        <table class="table widget-table">
            <thead>
                <tr>
                    {columns.with_value(|cols| {
                        cols.iter()
                            .map(|c| view! { <th class="table__header-cell">{c.title.clone()}</th> })
                            .collect_view()
                    })}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let start = page.get() * page_size;
                    rows.with_value(|rows| {
                        rows.iter()
                            .skip(start)
                            .take(page_size)
                            .map(|row| view! {
                                <tr class="table__row">
                                    {columns.with_value(|cols| {
                                        cols.iter()
                                            .map(|c| view! { <td class="table__cell">{c.render(row)}</td> })
                                            .collect_view()
                                    })}
                                </tr>
                            })
                            .collect_view()
                    })
                }}
            </tbody>
        </table>
        <Show when=move || { page_count > 1 }>
            <div class="widget-table__pager">
                <button
                    class="button button--ghost button--smallall"
                    disabled=move || page.get() == 0
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                >
                    "‹"
                </button>
                <span>{move || format!("{} / {}", page.get() + 1, page_count)}</span>
                <button
                    class="button button--ghost button--smallall"
                    disabled=move || page.get() + 1 >= page_count
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "›"
                </button>
            </div>
        </Show>
    }
    .into_any()
}

fn render_collection(widget: &CaseWidget, data: &Value) -> AnyView {
    let fields = widget.table_columns();
    let rows = widget_rows(data);
    if rows.is_empty() {
        return view! { <p class="form-hint">"Empty"</p> }.into_any();
    }
    rows.iter()
        .map(|row| {
            let cells = fields
                .iter()
                .map(|field| {
                    let style = format!("grid-column: span {};", field.width.unwrap_or(1).max(1));
                    let text = field.render(row);
                    view! {
                        <div class="widget-field" style=style>
                            <div class="widget-field__title">{field.title.clone()}</div>
                            <div class="widget-field__value">{text}</div>
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="widget-collection__card">{cells}</div> }
        })
        .collect_view()
        .into_any()
}
