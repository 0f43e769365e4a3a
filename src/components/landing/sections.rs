//! Page sections, top to bottom.
//!
//! Each section with a `data-animate` marker takes the shared
//! [`VisibleSections`] signal and swaps in its entrance animation once it
//! has been scrolled into view.

use leptos::prelude::*;

use super::content::{
	FAQS, FEATURES, Feature, GRIEVANCES, NAV_LINKS, ROADMAP, RoadmapPhase, SOCIAL_LINKS, STATS,
	WORK_STEPS, WorkStep, stagger_delay,
};
use super::icons::{Icon, IconKind};
use super::scroll::scroll_to_section;
use super::visibility::{VisibleSections, reveal, reveal_class};
use super::waitlist::WaitlistForm;

type Sections = ReadSignal<VisibleSections>;

fn animation_delay(delay: &str) -> String {
	format!("animation-delay: {delay}")
}

/// Brand mark used in the header and footer.
#[component]
fn Logo() -> impl IntoView {
	view! {
		<div class="logo">
			<div class="logo-mark"><span>"L"</span></div>
			<span class="logo-text gradient-text">"Lyvora"</span>
		</div>
	}
}

#[component]
pub fn Header() -> impl IntoView {
	view! {
		<header class="site-header animate-slide-down">
			<div class="container header-row">
				<Logo />
				<div class="header-actions">
					<nav class="site-nav">
						{NAV_LINKS
							.iter()
							.enumerate()
							.map(|(i, link)| {
								let class = format!("nav-link animate-fade-in-delay-{}", i + 1);
								view! { <a href=link.href class=class>{link.label}</a> }
							})
							.collect_view()}
					</nav>
					<button class="btn btn-primary animate-pulse-glow" on:click=move |_| scroll_to_section("waitlist")>
						"Join Waitlist"
					</button>
				</div>
			</div>
		</header>
	}
}

#[component]
pub fn Hero(sections: Sections) -> impl IntoView {
	view! {
		<section class="section hero" data-animate="" id="hero">
			<div class="container text-center">
				<span class=reveal(sections, "hero", "badge hero-badge animate-float", "animate-fade-in-up")>
					<Icon kind=IconKind::Rocket class="icon icon-sm animate-rocket" />
					"Real Commerce. On-Chain. Borderless."
				</span>

				<h1 class=reveal(sections, "hero", "hero-title gradient-text", "animate-title-reveal")>
					"A New Era."
					<br />
					"A New Marketplace."
				</h1>

				<p class=reveal(sections, "hero", "hero-pitch", "animate-fade-in-up-delay")>
					"Break free from centralized platforms. Trade real-world products with crypto payments, smart contracts, and transparent reputation. Only 2.5% fee. No borders. No limits."
				</p>

				<div class=reveal(sections, "hero", "hero-actions", "animate-buttons-appear")>
					<button class="btn btn-primary btn-lg animate-pulse-glow" on:click=move |_| scroll_to_section("waitlist")>
						"Join the Revolution"
						<Icon kind=IconKind::ArrowRight class="icon animate-arrow-move" />
					</button>
					<button class="btn btn-outline btn-lg">
						<Icon kind=IconKind::FileText class="icon" />
						"View Pitch"
					</button>
				</div>

				<div class=reveal(sections, "hero", "hero-stats", "animate-stats-counter")>
					{STATS
						.iter()
						.enumerate()
						.map(|(i, stat)| {
							view! {
								<div class="stat animate-stat-item" style=animation_delay(&stagger_delay(0.0, i, 0.2))>
									<div class="stat-value animate-number-count">{stat.value}</div>
									<div class="stat-label">{stat.label}</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str, delay: String) -> impl IntoView {
	let (is_open, set_is_open) = signal(false);

	view! {
		<div class="card faq-card" style=animation_delay(&delay)>
			<button
				class="faq-trigger"
				on:click=move |_| set_is_open.update(|v| *v = !*v)
				aria-expanded=move || is_open.get().to_string()
			>
				<span class="card-title">{question}</span>
				{move || {
					let kind = if is_open.get() { IconKind::ChevronUp } else { IconKind::ChevronDown };
					view! { <Icon kind=kind class="icon faq-chevron" /> }
				}}
			</button>
			<Show when=move || is_open.get()>
				<div class="faq-answer">
					<p>{answer}</p>
				</div>
			</Show>
		</div>
	}
}

#[component]
pub fn FaqSection(sections: Sections) -> impl IntoView {
	view! {
		<section class="section" data-animate="" id="faq">
			<div class="container narrow">
				<div class=reveal(sections, "faq", "stack", "animate-stagger-in")>
					{FAQS
						.iter()
						.enumerate()
						.map(|(i, faq)| {
							view! {
								<FaqItem
									question=faq.question
									answer=faq.answer
									delay=stagger_delay(0.0, i, 0.2)
								/>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
fn FeatureCard(feature: &'static Feature, delay: f64) -> impl IntoView {
	view! {
		<div class=format!("card feature-card {}", feature.accent.classes()) style=animation_delay(&stagger_delay(delay, 0, 0.0))>
			<div class="card-header">
				<div class="card-heading">
					<div class="icon-badge">
						<Icon kind=feature.icon class="icon" />
					</div>
					<h3 class="card-title">{feature.title}</h3>
				</div>
				<p class="card-description">{feature.description}</p>
			</div>
			<ul class="checklist">
				{feature
					.bullets
					.iter()
					.enumerate()
					.map(|(i, bullet)| {
						view! {
							<li class="animate-slide-in-left" style=animation_delay(&stagger_delay(delay, i, 0.1))>
								<Icon kind=IconKind::Check class="icon icon-sm check" />
								<span>{*bullet}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}

#[component]
pub fn FeaturesSection(sections: Sections) -> impl IntoView {
	view! {
		<section class="section" data-animate="" id="features">
			<div class="container">
				<h2 class=reveal(sections, "features", "section-title gradient-text", "animate-title-reveal")>
					"Revolutionary Features"
				</h2>
				<div class=reveal(sections, "features", "card-grid", "animate-grid-appear")>
					{FEATURES
						.iter()
						.enumerate()
						.map(|(i, feature)| view! { <FeatureCard feature=feature delay={i as f64 * 0.1} /> })
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
fn WorkCard(step: &'static WorkStep, delay: String) -> impl IntoView {
	view! {
		<div class=format!("card work-card {}", step.accent.classes()) style=animation_delay(&delay)>
			<div class="card-header">
				<div class="card-heading">
					<div class="icon-badge">
						<Icon kind=step.icon class="icon" />
					</div>
					<h3 class="card-title">{step.title}</h3>
				</div>
			</div>
			<p class="card-description">{step.description}</p>
			<p class="card-highlight">{step.highlight}</p>
		</div>
	}
}

#[component]
pub fn HowItWorksSection(sections: Sections) -> impl IntoView {
	let (first, rest) = WORK_STEPS.split_at(4);

	view! {
		<section class="section" data-animate="" id="how-it-works">
			<div class="container">
				<h2 class=reveal(sections, "how-it-works", "section-title gradient-text", "animate-title-reveal")>
					"How Lyvora Works"
				</h2>
				<div class=reveal(sections, "how-it-works", "card-grid card-grid-2", "animate-work-cards")>
					{first
						.iter()
						.enumerate()
						.map(|(i, step)| view! { <WorkCard step=step delay=stagger_delay(0.0, i, 0.2) /> })
						.collect_view()}
				</div>
				<div class=reveal(sections, "how-it-works", "card-grid card-grid-2", "animate-work-cards-delayed")>
					{rest
						.iter()
						.enumerate()
						.map(|(i, step)| view! { <WorkCard step=step delay=stagger_delay(0.8, i, 0.2) /> })
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn NoticeSection(sections: Sections) -> impl IntoView {
	view! {
		<section class="section notice" data-animate="" id="notice">
			<div class="container narrow text-center">
				<div class=reveal(sections, "notice", "statement-heading", "animate-warning-pulse")>
					<Icon kind=IconKind::AlertTriangle class="icon icon-lg warn" />
					<h3>"Important: Full Protection Only Inside Lyvora"</h3>
				</div>
				<p class=reveal(sections, "notice", "", "animate-fade-in-up")>
					"All payments, negotiations, and deals happen inside the platform."
				</p>
				<p class=reveal(sections, "notice", "warn", "animate-fade-in-up-delay")>
					"If you pay outside Lyvora, you are not protected."
				</p>
				<p class=reveal(sections, "notice", "", "animate-fade-in-up-delay-2")>"Only Lyvora offers escrow, dispute resolution, on-chain reputation, and real security."</p>
			</div>
		</section>
	}
}

#[component]
pub fn GlobalSection(sections: Sections) -> impl IntoView {
	view! {
		<section class="section" data-animate="" id="global">
			<div class="container narrow text-center">
				<div class=reveal(sections, "global", "statement-heading", "animate-global-appear")>
					<Icon kind=IconKind::Globe class="icon icon-lg animate-spin-slow" />
					<h2 class="gradient-text">"Global Since Day One"</h2>
				</div>
				<p class=reveal(sections, "global", "lead", "animate-fade-in-up")>
					"No borders. No restrictions. No bureaucracy."
				</p>
				<p class=reveal(sections, "global", "", "animate-fade-in-up-delay")>
					"If you have a wallet, you have a store. You have a business. You have freedom."
				</p>
				<p class=reveal(sections, "global", "accent-text", "animate-fade-in-up-delay-2")>"This is the future of commerce."</p>
			</div>
		</section>
	}
}

#[component]
pub fn SystemSection(sections: Sections) -> impl IntoView {
	view! {
		<section class="section" data-animate="" id="system">
			<div class="container narrow text-center">
				<div class=reveal(sections, "system", "statement-heading", "animate-flame-appear")>
					<Icon kind=IconKind::Flame class="icon icon-lg flame" />
					<h2 class="gradient-text">"The System They've Always Taken From You Ends Here."</h2>
				</div>
				<p class=reveal(sections, "system", "lead", "animate-fade-in-up")>"You work. You sell. You create. And yet:"</p>
				<div class=reveal(sections, "system", "grievances", "animate-list-appear")>
					{GRIEVANCES
						.iter()
						.enumerate()
						.map(|(i, text)| {
							view! {
								<div class="grievance animate-slide-in-left" style=animation_delay(&stagger_delay(0.0, i, 0.2))>
									<div class="grievance-dot"></div>
									<p>{*text}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
				<p class=reveal(sections, "system", "lead accent-text", "animate-fade-in-up-delay")>"Enough. The future is decentralized. The future is Lyvora."</p>
				<button
					class=reveal(sections, "system", "btn btn-primary btn-lg animate-pulse-glow", "animate-button-emerge")
					on:click=move |_| scroll_to_section("waitlist")
				>
					"Break Free Now"
					<Icon kind=IconKind::ArrowRight class="icon animate-arrow-move" />
				</button>
			</div>
		</section>
	}
}

#[component]
fn RoadmapItem(phase: &'static RoadmapPhase, delay: f64, sections: Sections) -> impl IntoView {
	let visible = move || sections.with(|s| s.contains("roadmap"));
	let dot_class = move || format!("roadmap-dot {}", reveal_class(visible(), "animate-dot-pop"));
	let card_class = move || format!("roadmap-content {}", reveal_class(visible(), "animate-fade-in-up"));

	view! {
		<div class=phase.side.class()>
			<div class=dot_class style=animation_delay(&stagger_delay(delay, 0, 0.0))>
				<div class="roadmap-dot-core"></div>
				<div class="roadmap-dot-ping"></div>
			</div>
			<div class=card_class style=animation_delay(&stagger_delay(delay, 0, 0.0))>
				<div class="card roadmap-card">
					<span class="badge" style=animation_delay(&stagger_delay(delay + 0.2, 0, 0.0))>{phase.phase}</span>
					<h3 class="card-title" style=animation_delay(&stagger_delay(delay + 0.3, 0, 0.0))>{phase.title}</h3>
					<ul class="checklist">
						{phase
							.items
							.iter()
							.enumerate()
							.map(|(i, item)| {
								view! {
									<li class="animate-slide-in-left" style=animation_delay(&stagger_delay(delay + 0.4, i, 0.1))>
										<Icon kind=IconKind::Check class="icon icon-sm check" />
										<span>{*item}</span>
									</li>
								}
							})
							.collect_view()}
					</ul>
				</div>
			</div>
		</div>
	}
}

#[component]
pub fn RoadmapSection(sections: Sections) -> impl IntoView {
	view! {
		<section class="section" data-animate="" id="roadmap">
			<div class="container">
				<h2 class=reveal(sections, "roadmap", "section-title gradient-text", "animate-title-reveal")>
					"Roadmap"
				</h2>
				<div class="roadmap">
					<div class="roadmap-line">
						<div class="roadmap-line-glow"></div>
					</div>
					<div class="roadmap-sparks" aria-hidden="true">
						<span></span>
						<span></span>
						<span></span>
					</div>
					<div class="roadmap-items">
						{ROADMAP
							.iter()
							.enumerate()
							.map(|(i, phase)| view! { <RoadmapItem phase=phase delay={i as f64 * 0.3} sections=sections /> })
							.collect_view()}
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn WaitlistSection(sections: Sections) -> impl IntoView {
	view! {
		<section class="section" data-animate="" id="waitlist">
			<div class="container narrow text-center">
				<h2 class=reveal(sections, "waitlist", "section-title gradient-text", "animate-title-reveal")>
					"Join Our Waitlist"
				</h2>
				<p class=reveal(sections, "waitlist", "lead", "animate-fade-in-up")>
					"Be among the first to experience the future of decentralized commerce."
				</p>
				<div class=reveal(sections, "waitlist", "", "animate-form-appear")>
					<WaitlistForm />
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn Footer(sections: Sections) -> impl IntoView {
	view! {
		<footer class="site-footer" data-animate="" id="footer">
			<div class=reveal(sections, "footer", "container footer-row", "animate-footer-appear")>
				<Logo />
				<div class="footer-links">
					{SOCIAL_LINKS
						.iter()
						.map(|name| view! { <a href="#" class="footer-link">{*name}</a> })
						.collect_view()}
				</div>
			</div>
			<div class=reveal(sections, "footer", "container footer-note", "animate-fade-in-up-delay")>
				<p>"© 2024 Lyvora. The future of decentralized commerce."</p>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	const SOURCE: &str = include_str!("sections.rs");
	const STYLESHEET: &str = include_str!("../../../style/main.css");

	/// Entrance animations passed as the last argument of `reveal(..)`.
	fn reveal_animations() -> Vec<&'static str> {
		let views = SOURCE.split("#[cfg(test)]").next().unwrap_or_default();
		views
			.split("reveal(sections, ")
			.skip(1)
			.filter_map(|call| {
				let args = &call[..call.find(')')?];
				let last = args.rsplit(", ").next()?;
				Some(last.trim_matches('"'))
			})
			.collect()
	}

	#[test]
	fn every_reveal_animation_has_a_rule() {
		let animations = reveal_animations();
		assert!(animations.len() > 20);
		for class in animations {
			assert!(
				STYLESHEET.contains(&format!(".{class} {{"))
					|| STYLESHEET.contains(&format!(".{class} > * {{")),
				"no rule for {class}"
			);
		}
	}

	#[test]
	fn sections_keep_their_own_entrance() {
		let animations = reveal_animations();
		for class in [
			"animate-title-reveal",
			"animate-grid-appear",
			"animate-work-cards",
			"animate-work-cards-delayed",
			"animate-warning-pulse",
			"animate-global-appear",
			"animate-flame-appear",
			"animate-list-appear",
			"animate-button-emerge",
			"animate-form-appear",
			"animate-footer-appear",
		] {
			assert!(animations.contains(&class), "{class} unused");
		}
		assert_eq!(animations.iter().filter(|c| **c == "animate-title-reveal").count(), 5);
	}
}
