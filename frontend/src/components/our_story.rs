//! "Our Story" section

use leptos::*;

use crate::components::TriImageBanner;
use crate::config::OurStory;

#[component]
pub fn OurStorySection(story: Option<OurStory>) -> impl IntoView {
    story.map(|story| {
        let banner = (!story.images.is_empty())
            .then(|| view! { <TriImageBanner images=story.images.clone() class="our-story-images"/> });
        view! {
            <section class="our-story-container">
                <div class="our-story-text">
                    <p class="label-sm">{story.sub_title}</p>
                    <p class="heading-md">{story.title}</p>
                    // Paragraph per line break in the configured text
                    {story
                        .description
                        .lines()
                        .map(|line| view! { <p class="body-sm">{line.trim().to_string()}</p> })
                        .collect_view()}
                    <a href=story.discord_link class="btn btn-secondary" target="_blank">"Learn more"</a>
                </div>
                {banner}
            </section>
        }
    })
}
