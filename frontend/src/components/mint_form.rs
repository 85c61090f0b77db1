//! Prescription form with Reset and Mint actions.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::{DEFAULT_MINT_AMOUNT, MODULE_ADDRESS};
use crate::format::truncate_address;
use crate::mint::{
    apply_outcome, submit_mint, AttachedDocument, FormField, MintOutcome, MintRequest,
    MintStatus, PrescriptionForm,
};
use crate::services::{AptosClient, AptosWallet};
use crate::types::{CollectionData, WalletInfo};

#[component]
pub fn MintForm(
    wallet: ReadSignal<Option<WalletInfo>>,
    data: Signal<CollectionData>,
    status: Signal<MintStatus>,
    set_refresh: WriteSignal<u32>,
) -> impl IntoView {
    let (form, set_form) = create_signal(PrescriptionForm::default());
    let (last_hash, set_last_hash) = create_signal(None::<String>);
    let file_input = create_node_ref::<html::Input>();

    // The browser keeps the picked file unless the input is cleared too
    let clear_file_input = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };
    let reset = move || {
        set_form.update(PrescriptionForm::reset);
        clear_file_input();
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let document = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| AttachedDocument {
                name: file.name(),
                size: file.size() as u64,
                mime_type: file.type_(),
            });
        if let Some(doc) = &document {
            log::debug!("📎 Attached {} ({} bytes)", doc.name, doc.size);
        }
        set_form.update(|f| f.attach(document));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let snapshot = form.get_untracked();
        if !snapshot.is_complete() {
            log::warn!("⚠️ Missing fields: {}", snapshot.missing_fields().join(", "));
            return;
        }
        let account = wallet.get_untracked().map(|w| w.address);
        let collection_id = data.with_untracked(|d| d.collection_id().map(str::to_string));

        spawn_local(async move {
            let request = MintRequest {
                account: account.as_deref(),
                collection_id: collection_id.as_deref(),
                module_address: MODULE_ADDRESS,
                amount: DEFAULT_MINT_AMOUNT,
                form: &snapshot,
            };

            let result = submit_mint(request, &AptosWallet, &AptosClient::default()).await;

            let mut next_form = form.get_untracked();
            let mut bumps = 0u32;
            if apply_outcome(&result, &mut next_form, &mut bumps) {
                set_form.set(next_form);
                set_refresh.update(|n| *n = n.wrapping_add(bumps));
                clear_file_input();
            }
            if let Ok(MintOutcome::Confirmed { hash }) = result {
                set_last_hash.set(Some(hash));
            }
        });
    };

    let text_row = move |field: FormField| {
        view! {
            <div class="form-row">
                <label class="form-label">{field.label()}</label>
                {text_input(field, form, set_form)}
            </div>
        }
    };

    view! {
        <form class="mint-form" on:submit=on_submit>
            {text_row(FormField::PatientAddress)}
            {text_row(FormField::MedicationName)}
            {text_row(FormField::Dosage)}
            {text_row(FormField::DosageUnit)}
            {text_row(FormField::NumPills)}

            <div class="form-row">
                <label class="form-label">{FormField::DateFilled.label()}</label>
                <div class="form-date-range">
                    {text_input(FormField::DateFilled, form, set_form)}
                    <label class="form-label-inline">{FormField::ExpirationTime.label()}</label>
                    {text_input(FormField::ExpirationTime, form, set_form)}
                </div>
            </div>

            <div class="form-row">
                <label class="form-label">"Prescription Document"</label>
                <input
                    type="file"
                    name="prescription_file"
                    class="input"
                    required=true
                    node_ref=file_input
                    on:change=on_file_change
                />
            </div>

            <div class="form-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| reset()>
                    "Reset ↺"
                </button>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || status.with(MintStatus::submit_disabled)
                >
                    "Mint 💊"
                </button>
            </div>

            {move || last_hash.get().map(|hash| view! {
                <p class="body-sm mint-success">"✅ Minted in transaction " {truncate_address(&hash)}</p>
            })}
        </form>
    }
}

fn text_input(
    field: FormField,
    form: ReadSignal<PrescriptionForm>,
    set_form: WriteSignal<PrescriptionForm>,
) -> impl IntoView {
    view! {
        <input
            type=field.input_type()
            name=field.name()
            placeholder=field.placeholder()
            class="input"
            required=true
            prop:value=move || form.with(|f| f.get(field).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                set_form.update(|f| f.set(field, value));
            }
        />
    }
}
