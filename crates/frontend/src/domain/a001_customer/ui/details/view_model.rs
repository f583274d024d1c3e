use contracts::domain::a001_customer::aggregate::{Customer, CustomerForm};
use contracts::shared::validation::{validate_fields, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_customer::api;
use crate::shared::toast::ToastService;

/// State and commands of the customer detail page
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub customer: RwSignal<Option<Customer>>,
    pub form: RwSignal<CustomerForm>,
    pub errors: RwSignal<FieldErrors>,
    pub load_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub deleting: RwSignal<bool>,
    toast: ToastService,
}

impl CustomerDetailsViewModel {
    pub fn new(toast: ToastService) -> Self {
        Self {
            customer: RwSignal::new(None),
            form: RwSignal::new(CustomerForm::default()),
            errors: RwSignal::new(FieldErrors::default()),
            load_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            deleting: RwSignal::new(false),
            toast,
        }
    }

    pub fn load(&self, id: String) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(customer) => {
                    this.form.set(customer.to_form());
                    this.customer.set(Some(customer));
                    this.load_error.set(None);
                }
                Err(e) => {
                    this.toast.error(e.to_string());
                    this.load_error.set(Some(e.to_string()));
                }
            }
        });
    }

    /// PATCHes the form and runs `on_done` on success
    pub fn save_command(&self, id: String, on_done: Callback<()>) {
        let current = self.form.get_untracked().trimmed();
        if let Err(e) = validate_fields(&current) {
            self.errors.set(e);
            return;
        }
        self.errors.set(FieldErrors::default());
        self.saving.set(true);
        let this = *self;
        let request = current.to_update_request();
        spawn_local(async move {
            match api::update(&id, &request).await {
                Ok(()) => {
                    this.toast.success("Cliente atualizado com sucesso");
                    on_done.run(());
                }
                Err(e) => this.toast.error(e.to_string()),
            }
            this.saving.set(false);
        });
    }

    pub fn delete_command(&self, id: String, on_done: Callback<()>) {
        self.deleting.set(true);
        let this = *self;
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    this.toast.success("Cliente excluído com sucesso");
                    on_done.run(());
                }
                Err(e) => this.toast.error(e.to_string()),
            }
            this.deleting.set(false);
        });
    }
}
