use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

const CONTRACT_PDF: &str = "/Contrato_de_Comodato_Botijao_Gas.pdf";

/// Loan (comodato) contract, embedded as a PDF
#[component]
pub fn ContractPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_contract--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Contrato de comodato"</h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--secondary" href=CONTRACT_PDF download="">"Baixar"</a>
                </div>
            </div>
            <div class="page__content">
                <iframe class="contract-viewer" src=CONTRACT_PDF title="Contrato"></iframe>
            </div>
        </PageFrame>
    }
}
