//! UI Components for the Prescription Mint page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with wallet connection
//! - [`Footer`] - Page footer with social links
//!
//! # Content Sections
//! - [`BannerSection`] - NFT image strip
//! - [`HeroSection`] - Collection info, mint form, supply and mint status
//! - [`OurStorySection`] - "Our Story" copy
//! - [`OurTeamSection`] - Team member cards
//! - [`FaqSection`] - Expandable F.A.Q.
//!
//! # Building Blocks
//! - [`MintForm`] - Prescription form and submission
//! - [`TriImageBanner`] - Up to three images side by side
//! - [`SocialLinks`] - Configured social links

mod header;
mod banner;
mod hero;
mod mint_form;
mod our_story;
mod our_team;
mod faq;
mod socials;
mod footer;

pub use header::*;
pub use banner::*;
pub use hero::*;
pub use mint_form::*;
pub use our_story::*;
pub use our_team::*;
pub use faq::*;
pub use socials::*;
pub use footer::*;
