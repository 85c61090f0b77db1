//! Prescription Mint - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for minting NFT-represented prescriptions on Aptos.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (wallet connection)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── BannerSection                                           │
//! │  ├── HeroSection (collection, MintForm, status)              │
//! │  ├── OurStorySection                                         │
//! │  ├── OurTeamSection                                          │
//! │  └── FaqSection                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (CollectionData, WalletInfo, AppError)
//! - [`config`] - Network constants and page content
//! - [`mint`] - Mint window, form state, payload and submission
//! - [`format`] - Display helpers
//! - [`components`] - UI components
//! - [`services`] - Wallet, Aptos client and clipboard

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod format;
pub mod mint;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Collection
    Collection, CollectionData,
    // Wallet
    WalletInfo,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

/// Fetch collection data, logging failures and degrading to empty data.
async fn load_collection(collection_id: Option<String>) -> CollectionData {
    let Some(id) = collection_id else {
        return CollectionData::default();
    };

    match AptosClient::default().get_collection_data(&id).await {
        Ok(data) => data,
        Err(e) => {
            log::error!("❌ Failed to load collection {}: {}", id, e);
            CollectionData::default()
        }
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let site = SiteConfig::load();

    // Global state for the application
    let (wallet, set_wallet) = create_signal(None::<WalletInfo>);
    // Bumped after a confirmed mint to refetch collection data
    let (refresh, set_refresh) = create_signal(0u32);

    let collection_id = site.collection_id().map(str::to_string);
    let collection = create_local_resource(
        move || refresh.get(),
        move |_| load_collection(collection_id.clone()),
    );

    view! {
        <Header wallet=wallet set_wallet=set_wallet/>

        <div class="container">
            <BannerSection images=site.nft_banner.clone()/>
            <HeroSection
                config=site.clone()
                wallet=wallet
                collection=collection
                set_refresh=set_refresh
            />
            <OurStorySection story=site.our_story.clone()/>
            <OurTeamSection team=site.our_team.clone()/>
            <FaqSection faqs=site.faqs.clone()/>
        </div>

        <Footer socials=site.socials.clone()/>
    }
}
