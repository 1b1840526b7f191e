//! Product showcase that cycles through the product cards on a timer.

use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};

use super::reveal::Reveal;

/// How long each product stays active before the next one is shown.
pub const ROTATE_EVERY: Duration = Duration::from_secs(5);

/// One product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
	/// Card title.
	pub name: &'static str,
	/// One-paragraph pitch shown under the title.
	pub description: &'static str,
	/// Sustainable development goals the product targets.
	pub goals: &'static [&'static str],
}

/// The products shown on the landing page.
pub const PRODUCTS: &[Product] = &[
	Product {
		name: "Climate Intelligence",
		description: "AI-powered analytics platform for monitoring, predicting, and managing climate change impacts across sectors.",
		goals: &["Climate Action", "Life Below Water", "Life On Land", "Sustainable Cities"],
	},
	Product {
		name: "HealthAI Access",
		description: "Making healthcare accessible through AI diagnostics, patient monitoring, and treatment recommendations for underserved communities.",
		goals: &[
			"Good Health & Well-being",
			"Reduced Inequalities",
			"Gender Equality",
			"Quality Education",
		],
	},
	Product {
		name: "ResourceOptimize",
		description: "Intelligent resource management system for water, energy, and food sustainability utilizing predictive modeling.",
		goals: &[
			"Clean Water & Sanitation",
			"Affordable & Clean Energy",
			"Responsible Consumption",
			"Zero Hunger",
		],
	},
];

/// Which of `len` cards is active. Wraps around; an empty set stays at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
	active: usize,
	len: usize,
}

impl Rotation {
	/// Starts on the first card.
	pub fn new(len: usize) -> Self {
		Self { active: 0, len }
	}

	/// Index of the active card.
	pub fn active(self) -> usize {
		self.active
	}

	/// Move to the next card, wrapping after the last.
	pub fn advance(&mut self) {
		if self.len > 0 {
			self.active = (self.active + 1) % self.len;
		}
	}

	/// Make card `index` active. Out-of-range indices are ignored.
	pub fn select(&mut self, index: usize) {
		if index < self.len {
			self.active = index;
		}
	}
}

/// Product cards with one highlighted at a time.
///
/// The highlight advances every [`ROTATE_EVERY`]. Clicking a card
/// highlights it right away; the timer keeps running.
#[component]
pub fn ProductShowcase(#[prop(default = PRODUCTS)] products: &'static [Product]) -> impl IntoView {
	let rotation = RwSignal::new(Rotation::new(products.len()));

	match set_interval_with_handle(move || rotation.update(Rotation::advance), ROTATE_EVERY) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("yali: showcase will not rotate: {e:?}"),
	}

	let cards = products
		.iter()
		.enumerate()
		.map(|(index, product)| {
			let class = move || {
				if rotation.get().active() == index {
					"product-card interactive is-active"
				} else {
					"product-card interactive"
				}
			};
			let pick = move |_| {
				rotation.update(|r| r.select(index));
				debug!("yali: showcase picked {}", product.name);
			};
			view! {
				<button class=class on:click=pick>
					<h3>{product.name}</h3>
					<p>{product.description}</p>
					<ul class="product-goals">
						{product.goals.iter().map(|goal| view! { <li>{*goal}</li> }).collect_view()}
					</ul>
				</button>
			}
		})
		.collect_view();

	view! {
		<Reveal id="products" class="products">
			<h2>"Our products"</h2>
			<div class="product-cards">{cards}</div>
		</Reveal>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn advance_wraps_around() {
		let mut r = Rotation::new(3);
		r.advance();
		r.advance();
		assert_eq!(r.active(), 2);
		r.advance();
		assert_eq!(r.active(), 0);
	}

	#[test]
	fn empty_rotation_stays_put() {
		let mut r = Rotation::new(0);
		r.advance();
		assert_eq!(r.active(), 0);
		r.select(1);
		assert_eq!(r.active(), 0);
	}

	#[test]
	fn select_then_continue_from_there() {
		let mut r = Rotation::new(PRODUCTS.len());
		r.select(1);
		assert_eq!(r.active(), 1);
		r.select(7);
		assert_eq!(r.active(), 1);
		r.advance();
		assert_eq!(r.active(), 2);
	}

	#[test]
	fn products_are_listed() {
		assert_eq!(PRODUCTS.len(), 3);
		assert!(PRODUCTS.iter().all(|p| !p.goals.is_empty()));
	}
}
