//! The Lyvora landing page.
//!
//! Static marketing sections layered over the particle field:
//! - Header with in-page navigation and a splash overlay on first load
//! - Hero, FAQ, features, how-it-works and roadmap sections
//! - Waitlist form with client-side validation
//! - Reveal-on-scroll entrance animations and a scroll-to-top button

pub mod content;
pub mod icons;
mod loading;
pub mod scroll;
mod sections;
pub mod visibility;
pub mod waitlist;

use leptos::prelude::*;

use loading::LoadingOverlay;
use scroll::ScrollTopButton;
use sections::{
	FaqSection, FeaturesSection, Footer, GlobalSection, Header, Hero, HowItWorksSection,
	NoticeSection, RoadmapSection, SystemSection, WaitlistSection,
};
use visibility::use_section_visibility;

/// Every section of the page, in order, above whatever background the
/// caller renders.
#[component]
pub fn LandingPage() -> impl IntoView {
	let sections = use_section_visibility();

	view! {
		<LoadingOverlay />
		<div class="page-content">
			<Header />
			<main>
				<Hero sections=sections />
				<FaqSection sections=sections />
				<FeaturesSection sections=sections />
				<HowItWorksSection sections=sections />
				<NoticeSection sections=sections />
				<GlobalSection sections=sections />
				<SystemSection sections=sections />
				<RoadmapSection sections=sections />
				<WaitlistSection sections=sections />
			</main>
			<Footer sections=sections />
			<ScrollTopButton />
		</div>
	}
}
