//! Team member cards

use leptos::*;

use crate::components::SocialLinks;
use crate::config::{OurTeam, TeamMember};

#[component]
pub fn OurTeamSection(team: Option<OurTeam>) -> impl IntoView {
    team.filter(|t| !t.members.is_empty()).map(|team| {
        view! {
            <section class="our-team-container">
                <h2 class="heading-md">{team.title}</h2>
                <div class="team-grid">
                    {team.members.into_iter().map(|member| view! { <TeamMemberCard member=member/> }).collect_view()}
                </div>
            </section>
        }
    })
}

#[component]
fn TeamMemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="team-card">
            <img src=member.img class="team-avatar" alt=member.name.clone()/>
            <p class="body-md-semibold">{member.name}</p>
            <p class="body-sm">{member.role}</p>
            <p class="body-sm secondary-text">{member.desc}</p>
            <SocialLinks socials=member.socials/>
        </div>
    }
}
