//! Colour handling for the particle field.

/// HSL colour, the form the canvas receives particle and line colours in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	/// Hue in degrees.
	pub h: f64,
	/// Saturation in percent (0..=100).
	pub s: u8,
	/// Lightness in percent (0..=100).
	pub l: u8,
}

impl Hsl {
	/// Builds a colour from hue degrees and percentages.
	pub const fn new(h: f64, s: u8, l: u8) -> Self {
		Self { h, s, l }
	}

	/// CSS `hsl()` string accepted by the canvas fill and stroke styles.
	pub fn to_css(self) -> String {
		format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_format() {
		assert_eq!(Hsl::new(300.0, 70, 60).to_css(), "hsl(300, 70%, 60%)");
		assert_eq!(Hsl::new(281.5, 70, 60).to_css(), "hsl(281.5, 70%, 60%)");
	}
}
