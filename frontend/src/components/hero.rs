//! Mint section: collection header, form, supply progress and mint status.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::components::MintForm;
use crate::config::{Network, SiteConfig, COPY_FEEDBACK_MS};
use crate::format::{clamp_number, format_date, minted_progress, truncate_address};
use crate::mint::MintStatus;
use crate::services::copy_to_clipboard;
use crate::types::{CollectionData, WalletInfo};

#[component]
pub fn HeroSection(
    config: SiteConfig,
    wallet: ReadSignal<Option<WalletInfo>>,
    collection: Resource<u32, CollectionData>,
    set_refresh: WriteSignal<u32>,
) -> impl IntoView {
    let data = Signal::derive(move || collection.get().unwrap_or_default());
    let status = Signal::derive(move || data.with(|d| MintStatus::evaluate(d, Utc::now())));

    let default_collection = config.default_collection.clone();
    let fallback_name = default_collection.as_ref().map(|c| c.name.clone()).unwrap_or_default();
    let fallback_description = default_collection.map(|c| c.description).unwrap_or_default();

    let title = move || {
        data.with(|d| d.collection.as_ref().map(|c| c.collection_name.clone()))
            .unwrap_or_else(|| fallback_name.clone())
    };
    let description = move || {
        data.with(|d| d.collection.as_ref().map(|c| c.description.clone()))
            .unwrap_or_else(|| fallback_description.clone())
    };
    let collection_address = Signal::derive(move || {
        data.with(|d| d.collection_id().map(str::to_string).unwrap_or_default())
    });

    let total_minted = move || data.with(|d| d.total_minted.unwrap_or(0));
    let max_supply = move || data.with(|d| d.max_supply.unwrap_or(1));

    view! {
        <section class="hero-container">
            <h1 class="title-md">{title}</h1>
            <p class="body-sm">{description}</p>

            <div class="card">
                <div class="form-details">
                    <p class="heading-sm">{config.form_details.name}</p>
                    <p class="body-sm secondary-text">{config.form_details.description}</p>
                </div>

                <MintForm wallet=wallet data=data status=status set_refresh=set_refresh/>

                <div class="minted-progress">
                    <p class="label-sm secondary-text">
                        {move || clamp_number(total_minted())} " / " {move || clamp_number(max_supply())} " Minted"
                    </p>
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            style=move || format!("width: {:.1}%;", minted_progress(total_minted(), max_supply()))
                        ></div>
                    </div>
                </div>
            </div>

            <div class="collection-address">
                <p class="body-sm-semibold">"Collection Address"</p>
                <div class="collection-address-actions">
                    <AddressButton address=collection_address/>
                    <a
                        class="btn-link"
                        target="_blank"
                        href=move || Network::current().explorer_account_url(&collection_address.get())
                    >
                        "View on Explorer ↗"
                    </a>
                </div>
            </div>

            <MintStatusNotes status=status/>
        </section>
    }
}

/// "Minting starts / ends / has ended" notes.
#[component]
fn MintStatusNotes(status: Signal<MintStatus>) -> impl IntoView {
    view! {
        <div class="mint-status">
            {move || status.with(|s| s.starts_at).map(|start| view! {
                <div class="mint-note">
                    <p class="body-sm-semibold">"Minting starts"</p>
                    <p class="body-sm">{format_date(&start)}</p>
                </div>
            })}
            {move || status.with(|s| s.ends_at).map(|end| view! {
                <div class="mint-note">
                    <p class="body-sm-semibold">"Minting ends"</p>
                    <p class="body-sm">{format_date(&end)}</p>
                </div>
            })}
            <Show when=move || status.with(|s| s.ended) fallback=|| view! {}>
                <p class="body-sm-semibold">"Minting has ended"</p>
            </Show>
        </div>
    }
}

/// Truncated address that copies the full address on click.
#[component]
fn AddressButton(address: Signal<String>) -> impl IntoView {
    let (copied, set_copied) = create_signal(false);

    let on_copy = move |_| {
        if copied.get_untracked() {
            return;
        }
        let text = address.get_untracked();
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    set_copied.set(false);
                }
                Err(e) => log::warn!("Copy failed: {}", e),
            }
        });
    };

    view! {
        <button type="button" class="btn-link" on:click=on_copy>
            {move || if copied.get() {
                "Copied!".to_string()
            } else {
                format!("{} 📋", truncate_address(&address.get()))
            }}
        </button>
    }
}
