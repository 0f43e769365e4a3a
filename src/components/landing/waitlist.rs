//! Waitlist sign-up form.
//!
//! There is no submission endpoint: a valid entry is serialized to JSON and
//! written to the log.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

/// How the visitor expects to use the marketplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
	Buyer,
	Seller,
	Both,
	Investor,
	Developer,
}

impl Profile {
	pub const ALL: [Profile; 5] = [
		Self::Buyer,
		Self::Seller,
		Self::Both,
		Self::Investor,
		Self::Developer,
	];

	pub fn code(self) -> &'static str {
		match self {
			Self::Buyer => "buyer",
			Self::Seller => "seller",
			Self::Both => "both",
			Self::Investor => "investor",
			Self::Developer => "developer",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Buyer => "Buyer",
			Self::Seller => "Seller",
			Self::Both => "Both Buyer & Seller",
			Self::Investor => "Investor",
			Self::Developer => "Developer",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|p| p.code() == code)
	}
}

/// Country select options as `(code, label)`.
pub const COUNTRIES: [(&str, &str); 6] = [
	("us", "United States"),
	("uk", "United Kingdom"),
	("ca", "Canada"),
	("de", "Germany"),
	("fr", "France"),
	(OTHER_COUNTRY, "Other"),
];

/// Country code that switches on the free-text country field.
pub const OTHER_COUNTRY: &str = "other";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WaitlistError {
	#[error("Please enter your email.")]
	MissingEmail,
	#[error("\"{0}\" is not a valid email address.")]
	InvalidEmail(String),
	#[error("Please write your country.")]
	MissingCountryName,
	#[error("Unknown profile \"{0}\".")]
	UnknownProfile(String),
	#[error("Unknown country \"{0}\".")]
	UnknownCountry(String),
}

/// Raw form state, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistDraft {
	/// Profile code, empty when nothing was selected.
	pub profile: String,
	/// Country code, empty when nothing was selected.
	pub country: String,
	/// Free-text country, only read when `country` is [`OTHER_COUNTRY`].
	pub country_other: String,
	pub expectations: String,
	pub email: String,
}

/// A validated sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
	pub profile: Option<Profile>,
	/// Country code, or the typed name for "other".
	pub country: Option<String>,
	pub expectations: Option<String>,
	pub email: String,
}

/// Loose `local@domain.tld` check, about what `<input type="email">` accepts.
fn looks_like_email(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	!local.is_empty()
		&& !domain.contains('@')
		&& domain.contains('.')
		&& !domain.starts_with('.')
		&& !domain.ends_with('.')
		&& !email.chars().any(char::is_whitespace)
}

fn non_empty(s: &str) -> Option<String> {
	let s = s.trim();
	(!s.is_empty()).then(|| s.to_string())
}

impl WaitlistDraft {
	/// Validates the draft into an entry.
	pub fn submit(&self) -> Result<WaitlistEntry, WaitlistError> {
		let email = self.email.trim();
		if email.is_empty() {
			return Err(WaitlistError::MissingEmail);
		}
		if !looks_like_email(email) {
			return Err(WaitlistError::InvalidEmail(email.to_string()));
		}

		let profile = match self.profile.trim() {
			"" => None,
			code => Some(
				Profile::from_code(code)
					.ok_or_else(|| WaitlistError::UnknownProfile(code.to_string()))?,
			),
		};

		let country = match self.country.trim() {
			"" => None,
			OTHER_COUNTRY => Some(
				non_empty(&self.country_other).ok_or(WaitlistError::MissingCountryName)?,
			),
			code if COUNTRIES.iter().any(|(c, _)| *c == code) => Some(code.to_string()),
			code => return Err(WaitlistError::UnknownCountry(code.to_string())),
		};

		Ok(WaitlistEntry {
			profile,
			country,
			expectations: non_empty(&self.expectations),
			email: email.to_string(),
		})
	}
}

/// Outcome shown under the form after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Feedback {
	Joined,
	Rejected(String),
}

#[component]
pub fn WaitlistForm() -> impl IntoView {
	let draft = RwSignal::new(WaitlistDraft::default());
	let (feedback, set_feedback) = signal(None::<Feedback>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		match draft.with_untracked(WaitlistDraft::submit) {
			Ok(entry) => {
				match serde_json::to_string(&entry) {
					Ok(json) => info!("waitlist: {}", json),
					Err(e) => warn!("waitlist: could not serialize entry: {}", e),
				}
				draft.set(WaitlistDraft::default());
				set_feedback.set(Some(Feedback::Joined));
			}
			Err(e) => {
				warn!("waitlist: rejected submission: {}", e);
				set_feedback.set(Some(Feedback::Rejected(e.to_string())));
			}
		}
	};

	let is_other = move || draft.with(|d| d.country == OTHER_COUNTRY);
	let other_name = move || {
		draft.with(|d| {
			if d.country == OTHER_COUNTRY {
				d.country_other.clone()
			} else {
				String::new()
			}
		})
	};

	view! {
		<form class="waitlist-form" on:submit=on_submit novalidate=true>
			<select
				class="field"
				prop:value=move || draft.with(|d| d.profile.clone())
				on:change=move |ev| draft.update(|d| d.profile = event_target_value(&ev))
			>
				<option value="" disabled=true>"Select your profile"</option>
				{Profile::ALL
					.into_iter()
					.map(|p| view! { <option value=p.code()>{p.label()}</option> })
					.collect_view()}
			</select>

			<select
				class="field"
				prop:value=move || draft.with(|d| d.country.clone())
				on:change=move |ev| draft.update(|d| d.country = event_target_value(&ev))
			>
				<option value="" disabled=true>"Select your country"</option>
				{COUNTRIES
					.into_iter()
					.map(|(code, label)| view! { <option value=code>{label}</option> })
					.collect_view()}
			</select>

			<input
				class="field"
				type="text"
				placeholder="If 'Other', write your country"
				disabled=move || !is_other()
				prop:value=other_name
				on:input=move |ev| draft.update(|d| d.country_other = event_target_value(&ev))
			/>

			<textarea
				class="field field-area"
				placeholder="What do you expect from Lyvora?"
				prop:value=move || draft.with(|d| d.expectations.clone())
				on:input=move |ev| draft.update(|d| d.expectations = event_target_value(&ev))
			></textarea>

			<input
				class="field"
				type="email"
				placeholder="Your email"
				required=true
				prop:value=move || draft.with(|d| d.email.clone())
				on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
			/>

			<button type="submit" class="btn btn-primary btn-lg btn-block">"Join Waitlist"</button>

			{move || feedback.get().map(|f| match f {
				Feedback::Joined => view! {
					<p class="form-feedback form-success">"You're on the list. Welcome to Lyvora."</p>
				}.into_any(),
				Feedback::Rejected(msg) => view! {
					<p class="form-feedback form-error" role="alert">{msg}</p>
				}.into_any(),
			})}
		</form>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn draft(email: &str) -> WaitlistDraft {
		WaitlistDraft {
			email: email.to_string(),
			..WaitlistDraft::default()
		}
	}

	#[test]
	fn email_is_required() {
		assert_eq!(draft("").submit(), Err(WaitlistError::MissingEmail));
		assert_eq!(draft("   ").submit(), Err(WaitlistError::MissingEmail));
	}

	#[test]
	fn malformed_emails_are_rejected() {
		for bad in ["alice", "@lyvora.io", "alice@", "alice@lyvora", "a@b@c.io", "al ice@x.io", "a@.io"] {
			assert_eq!(
				draft(bad).submit(),
				Err(WaitlistError::InvalidEmail(bad.to_string())),
				"{bad}"
			);
		}
	}

	#[test]
	fn minimal_entry() {
		let entry = draft("  alice@lyvora.io ").submit().unwrap();
		assert_eq!(
			entry,
			WaitlistEntry {
				profile: None,
				country: None,
				expectations: None,
				email: "alice@lyvora.io".to_string(),
			}
		);
	}

	#[test]
	fn full_entry() {
		let d = WaitlistDraft {
			profile: "both".into(),
			country: "de".into(),
			country_other: "ignored".into(),
			expectations: "  low fees  ".into(),
			email: "bob@example.com".into(),
		};
		let entry = d.submit().unwrap();
		assert_eq!(entry.profile, Some(Profile::Both));
		assert_eq!(entry.country.as_deref(), Some("de"));
		assert_eq!(entry.expectations.as_deref(), Some("low fees"));
	}

	#[test]
	fn other_country_uses_free_text() {
		let mut d = draft("c@d.org");
		d.country = OTHER_COUNTRY.into();
		assert_eq!(d.submit(), Err(WaitlistError::MissingCountryName));

		d.country_other = " Portugal ".into();
		assert_eq!(d.submit().unwrap().country.as_deref(), Some("Portugal"));
	}

	#[test]
	fn unknown_codes_are_rejected() {
		let mut d = draft("c@d.org");
		d.profile = "whale".into();
		assert_eq!(d.submit(), Err(WaitlistError::UnknownProfile("whale".into())));

		d.profile.clear();
		d.country = "xx".into();
		assert_eq!(d.submit(), Err(WaitlistError::UnknownCountry("xx".into())));
	}

	#[test]
	fn entry_serializes_with_lowercase_profile() {
		let mut d = draft("e@f.net");
		d.profile = "investor".into();
		let json = serde_json::to_value(d.submit().unwrap()).unwrap();
		assert_eq!(json["profile"], "investor");
		assert_eq!(json["email"], "e@f.net");
		assert!(json["country"].is_null());
	}

	#[test]
	fn profile_codes_round_trip() {
		for p in Profile::ALL {
			assert_eq!(Profile::from_code(p.code()), Some(p));
		}
		assert_eq!(Profile::from_code("Buyer"), None);
	}

	#[test]
	fn error_messages_are_readable() {
		assert_eq!(WaitlistError::MissingEmail.to_string(), "Please enter your email.");
		assert_eq!(
			WaitlistError::InvalidEmail("x".into()).to_string(),
			"\"x\" is not a valid email address."
		);
	}
}
