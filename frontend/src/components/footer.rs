//! Footer component

use leptos::*;

use crate::components::SocialLinks;
use crate::config::{Socials, APP_NAME};

#[component]
pub fn Footer(socials: Option<Socials>) -> impl IntoView {
    view! {
        <footer>
            <div>{APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <SocialLinks socials=socials/>
        </footer>
    }
}
