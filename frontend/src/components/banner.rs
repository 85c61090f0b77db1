//! Image strip used above the mint section and in "Our Story".

use leptos::*;

#[component]
pub fn TriImageBanner(
    images: Vec<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("tri-image-banner {}", class)>
            {images
                .into_iter()
                .take(3)
                .map(|src| view! { <img src=src class="banner-image" alt=""/> })
                .collect_view()}
        </div>
    }
}

/// NFT banner at the top of the page.
#[component]
pub fn BannerSection(images: Option<Vec<String>>) -> impl IntoView {
    images
        .filter(|imgs| !imgs.is_empty())
        .map(|images| view! {
            <section class="banner-container">
                <TriImageBanner images=images/>
            </section>
        })
}
