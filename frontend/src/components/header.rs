//! Navigation bar with wallet connection.

use leptos::*;

use crate::config::{Network, APP_NAME};
use crate::format::truncate_address;
use crate::services::wallet::AptosWallet;
use crate::types::WalletInfo;

#[component]
pub fn Header(
    wallet: ReadSignal<Option<WalletInfo>>,
    set_wallet: WriteSignal<Option<WalletInfo>>,
) -> impl IntoView {
    let network = Network::current();

    let on_wallet_click = move |_| {
        if wallet.get_untracked().is_some() {
            spawn_local(async move {
                if let Err(e) = AptosWallet::disconnect().await {
                    log::warn!("Could not disconnect cleanly: {}", e);
                }
                set_wallet.set(None);
            });
            return;
        }

        log::info!("🔑 Attempting to connect wallet...");
        spawn_local(async move {
            match AptosWallet::connect().await {
                Ok(info) => set_wallet.set(Some(info)),
                Err(e) => log::error!("❌ Wallet connection failed: {}", e),
            }
        });
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
                <span class="badge">{network.as_str()}</span>
            </div>
            <div class="header-right">
                <div
                    class="wallet-status"
                    class:connected=move || wallet.with(Option::is_some)
                    on:click=on_wallet_click
                    style="cursor: pointer;"
                >
                    <span class="wallet-dot" class:connected=move || wallet.with(Option::is_some)></span>
                    <span id="walletText">
                        {move || match wallet.get() {
                            Some(info) => truncate_address(&info.address),
                            None => "Connect Wallet".to_string(),
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
