//! Static page copy.
//!
//! Everything the sections render lives here as typed tables, so the
//! components stay pure layout.

use super::icons::IconKind;

/// Accent colour of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
	Red,
	Green,
	Blue,
	Yellow,
	Purple,
	Pink,
}

impl Accent {
	/// CSS classes for the card border and the icon gradient.
	pub fn classes(self) -> &'static str {
		match self {
			Self::Red => "accent accent-red",
			Self::Green => "accent accent-green",
			Self::Blue => "accent accent-blue",
			Self::Yellow => "accent accent-yellow",
			Self::Purple => "accent accent-purple",
			Self::Pink => "accent accent-pink",
		}
	}
}

/// Which side of the roadmap line a phase card sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	Left,
	Right,
}

impl Side {
	pub fn class(self) -> &'static str {
		match self {
			Self::Left => "roadmap-item roadmap-left",
			Self::Right => "roadmap-item roadmap-right",
		}
	}
}

/// CSS `animation-delay` value for the `index`-th item of a staggered group.
pub fn stagger_delay(base: f64, index: usize, step: f64) -> String {
	let secs = base + index as f64 * step;
	format!("{}s", (secs * 100.0).round() / 100.0)
}

pub struct NavLink {
	pub href: &'static str,
	pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 3] = [
	NavLink {
		href: "#features",
		label: "Features",
	},
	NavLink {
		href: "#how-it-works",
		label: "How It Works",
	},
	NavLink {
		href: "#roadmap",
		label: "Roadmap",
	},
];

pub struct Stat {
	pub value: &'static str,
	pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
	Stat {
		value: "2.5%",
		label: "Transaction Fee",
	},
	Stat {
		value: "100%",
		label: "Crypto Payments",
	},
	Stat {
		value: "0",
		label: "Borders",
	},
];

pub struct Faq {
	pub question: &'static str,
	pub answer: &'static str,
}

pub static FAQS: [Faq; 3] = [
	Faq {
		question: "How Lyvora Makes Money",
		answer: "Lyvora charges a transparent 2.5% transaction fee. No subscriptions. No withdrawal fees. No hidden costs. This model is sustainable, fair, and designed to grow with the community, keeping more value with users.",
	},
	Faq {
		question: "Why Lyvora?",
		answer: "Traditional marketplaces control your business, charge excessive fees, block accounts, and hold your money. Lyvora puts power back into the hands of users with crypto payments, smart contracts, and global borderless commerce. No middlemen. No restrictions. Full transparency on-chain.",
	},
	Faq {
		question: "Security & Trust",
		answer: "Funds are secured through smart contract escrow. Payments are only released when the buyer confirms delivery. On-chain reputation protects both buyers and sellers with transparent history and no possibility of censorship, account freezing, or scams. No centralized entity can hold your money hostage. Trust is built with code, not with intermediaries.",
	},
];

pub struct Feature {
	pub icon: IconKind,
	pub title: &'static str,
	pub description: &'static str,
	pub bullets: [&'static str; 3],
	pub accent: Accent,
}

pub static FEATURES: [Feature; 6] = [
	Feature {
		icon: IconKind::Shield,
		title: "Protection Against Mistakes",
		description: "No accidental clicks. No rushed confirmations. Multiple confirmations required for releasing funds or opening disputes.",
		bullets: [
			"Checkboxes for confirmation",
			"Clear warnings for final actions",
			"Protection from pressure and scams",
		],
		accent: Accent::Red,
	},
	Feature {
		icon: IconKind::Globe,
		title: "Buyer Freedom: You Choose Who You Buy From",
		description: "Buy locally (faster delivery, no import taxes) or globally (accept possible import fees and shipping times). Total freedom. You decide.",
		bullets: [
			"Local and global options",
			"Transparent shipping costs",
			"Complete buyer control",
		],
		accent: Accent::Green,
	},
	Feature {
		icon: IconKind::MessageSquare,
		title: "In-App Chat: Everything Happens Inside Lyvora",
		description: "All communication happens inside the platform. No external apps needed. Chats are encrypted and stored on-chain.",
		bullets: [
			"Encrypted communications",
			"On-chain storage",
			"Dispute evidence ready",
		],
		accent: Accent::Blue,
	},
	Feature {
		icon: IconKind::Coins,
		title: "100% Crypto Payments, 100% On-Chain",
		description: "Payments happen only inside Lyvora, using crypto. Funds stay locked in smart contracts until delivery confirmation.",
		bullets: [
			"No external wallets needed",
			"Smart contract protection",
			"Automatic escrow system",
		],
		accent: Accent::Yellow,
	},
	Feature {
		icon: IconKind::Zap,
		title: "Gas Fees Explained",
		description: "Every blockchain transaction has a gas fee that goes to validators/miners, not Lyvora. A small price for freedom.",
		bullets: [
			"Transparent fee structure",
			"Network security costs",
			"No hidden charges",
		],
		accent: Accent::Purple,
	},
	Feature {
		icon: IconKind::BookOpen,
		title: "Education Hub: Learn Everything",
		description: "Full Education Hub with multilingual courses covering everything from buying to dispute resolution.",
		bullets: [
			"How to buy and sell",
			"Wallet and crypto guides",
			"Multi-language support",
		],
		accent: Accent::Pink,
	},
];

pub struct WorkStep {
	pub icon: IconKind,
	pub title: &'static str,
	pub description: &'static str,
	pub highlight: &'static str,
	pub accent: Accent,
}

pub static WORK_STEPS: [WorkStep; 6] = [
	WorkStep {
		icon: IconKind::Target,
		title: "A Decentralized Marketplace. No Middlemen. No Banks. No Borders. No Censorship.",
		description: "Lyvora is a decentralized marketplace for real-world products. You buy and sell using cryptocurrencies. Your payments are protected by smart contract escrow. Your reputation is public, immutable, and fully on-chain.",
		highlight: "The control is not in the hands of companies, banks, or governments. It's in YOUR hands.",
		accent: Accent::Purple,
	},
	WorkStep {
		icon: IconKind::Lock,
		title: "Security & Escrow: Protected by Code",
		description: "Every transaction is protected by smart contract escrow. When a purchase is made, funds are locked in the contract. No one can touch the funds: not the seller, not the platform, not even the buyer.",
		highlight: "Funds are released only when the buyer confirms the product was received as agreed.",
		accent: Accent::Yellow,
	},
	WorkStep {
		icon: IconKind::Scale,
		title: "Fast Dispute System: No Bureaucracy, No Delays",
		description: "Disputes are resolved in hours, maximum 1 day. Both buyer and seller submit evidence. Funds stay locked until dispute is resolved.",
		highlight: "All processes are transparent, public, and fully on-chain.",
		accent: Accent::Blue,
	},
	WorkStep {
		icon: IconKind::AlertTriangle,
		title: "Fraud Prevention: It Simply Doesn't Pay",
		description: "Tried to scam as a seller? You lose the dispute, don't get paid, and get a permanent on-chain negative reputation. Tried to scam as a buyer? Funds go to the seller and you get flagged.",
		highlight: "At Lyvora, fraud is simply not worth it.",
		accent: Accent::Red,
	},
	WorkStep {
		icon: IconKind::Eye,
		title: "Transparent Security: Trust Code, Not People",
		description: "All Lyvora smart contracts are open-source, public, and auditable. Anyone can verify the code. Code doesn't lie, freeze, censor, or steal.",
		highlight: "It just executes. Fairly, transparently, immutably.",
		accent: Accent::Green,
	},
	WorkStep {
		icon: IconKind::Rocket,
		title: "Roadmap & Future",
		description: "DAO Launch for decentralized governance. Token Launch for staking and incentives. NFT-Based Reputation system. Built-in DEX for crypto swapping.",
		highlight: "Continuous improvements to the dispute system: smarter, faster, fully automated.",
		accent: Accent::Pink,
	},
];

/// The "system" section's list of complaints.
pub static GRIEVANCES: [&str; 4] = [
	"Platforms take absurd fees, control your business, freeze your money, and block your account.",
	"Banks charge you for everything, hold your money, and decide what you can do with it.",
	"Governments create borders, impose restrictions, and limit your freedom to trade.",
	"Payment processors take their cut, delay your money, and can shut you down anytime.",
];

pub struct RoadmapPhase {
	pub phase: &'static str,
	pub title: &'static str,
	pub items: [&'static str; 4],
	pub side: Side,
}

pub static ROADMAP: [RoadmapPhase; 4] = [
	RoadmapPhase {
		phase: "Phase 1: Q3 2024",
		title: "Platform Launch",
		items: [
			"Beta marketplace release",
			"Initial smart contract deployment",
			"Basic escrow functionality",
			"Waitlist onboarding",
		],
		side: Side::Left,
	},
	RoadmapPhase {
		phase: "Phase 2: Q4 2024",
		title: "DAO Launch",
		items: [
			"Decentralized governance implementation",
			"Community voting system",
			"Enhanced dispute resolution",
			"Multi-chain support",
		],
		side: Side::Right,
	},
	RoadmapPhase {
		phase: "Phase 3: Q1 2025",
		title: "Token Launch",
		items: [
			"LYVR token for staking and governance",
			"Cashback and rewards program",
			"Liquidity mining incentives",
			"DAO treasury establishment",
		],
		side: Side::Left,
	},
	RoadmapPhase {
		phase: "Phase 4: Q2 2025",
		title: "Advanced Features",
		items: [
			"NFT-based reputation system",
			"Built-in DEX for crypto swapping",
			"Mobile app release",
			"Cross-chain interoperability",
		],
		side: Side::Right,
	},
];

pub static SOCIAL_LINKS: [&str; 4] = ["Twitter", "Discord", "Telegram", "GitHub"];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_card_has_distinct_accent() {
		let mut seen: Vec<&str> = FEATURES.iter().map(|f| f.accent.classes()).collect();
		seen.sort_unstable();
		seen.dedup();
		assert_eq!(seen.len(), FEATURES.len());
	}

	#[test]
	fn stagger_delays_are_rounded() {
		assert_eq!(stagger_delay(0.0, 0, 0.1), "0s");
		assert_eq!(stagger_delay(0.0, 3, 0.1), "0.3s");
		assert_eq!(stagger_delay(0.9, 3, 0.1), "1.2s");
		assert_eq!(stagger_delay(0.0, 5, 0.2), "1s");
	}

	#[test]
	fn roadmap_alternates_sides() {
		for pair in ROADMAP.windows(2) {
			assert_ne!(pair[0].side, pair[1].side);
		}
	}
}
