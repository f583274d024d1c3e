use contracts::domain::a001_customer::aggregate::{format_phone, CustomerForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Text field bound to one `CustomerForm` member
#[component]
fn FormField(
    label: &'static str,
    field: &'static str,
    form: RwSignal<CustomerForm>,
    errors: RwSignal<FieldErrors>,
    get: fn(&CustomerForm) -> String,
    set: fn(&mut CustomerForm, String),
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                placeholder=label
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
            {move || errors
                .with(|e| e.get(field).map(str::to_string))
                .map(|m| view! { <span class="form__error">{m}</span> })}
        </div>
    }
}

/// Every editable customer field, shared by the create dialog and the detail page
#[component]
pub fn CustomerFields(form: RwSignal<CustomerForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    view! {
        <div class="details-form">
            <FormField label="Nome" field="name" form=form errors=errors
                get=|f| f.name.clone() set=|f, v| f.name = v />
            <FormField label="Email" field="email" form=form errors=errors input_type="email"
                get=|f| f.email.clone() set=|f, v| f.email = v />
            <FormField label="Telefone" field="phone" form=form errors=errors input_type="tel"
                get=|f| f.phone.clone() set=|f, v| f.phone = format_phone(&v) />
            <FormField label="Rua" field="street" form=form errors=errors
                get=|f| f.street.clone() set=|f, v| f.street = v />
            <FormField label="Número" field="number" form=form errors=errors
                get=|f| f.number.clone() set=|f, v| f.number = v />
            <FormField label="Bairro" field="district" form=form errors=errors
                get=|f| f.district.clone() set=|f, v| f.district = v />
            <FormField label="Cidade" field="city" form=form errors=errors
                get=|f| f.city.clone() set=|f, v| f.city = v />
            <FormField label="Estado" field="state" form=form errors=errors
                get=|f| f.state.clone() set=|f, v| f.state = v />
        </div>
    }
}
