use leptos::*;

use crate::config::Socials;

/// Row of social links; renders nothing when no link is configured.
#[component]
pub fn SocialLinks(socials: Option<Socials>) -> impl IntoView {
    let links = socials.map(|s| s.links()).unwrap_or_default();
    if links.is_empty() {
        return None;
    }

    Some(view! {
        <div class="footer-links">
            {links
                .into_iter()
                .map(|(label, url)| view! {
                    <a href=url class="footer-link" target="_blank">{label}</a>
                })
                .collect_view()}
        </div>
    })
}
