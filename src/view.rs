//! Plain-text rendering of page states for the terminal.

use crate::controller::RenderState;
use crate::models::{group_thousands, Listing};
use crate::pages::{AdminOverview, DetailState, Gallery};
use std::fmt::Write;

pub const RETRY_HINT: &str = "Retry with --retries N.";
pub const EMPTY_HINT: &str = "No listings found. Try adjusting or resetting the filters.";

pub fn render_listing_state(state: &RenderState) -> String {
    match state {
        RenderState::Idle => String::new(),
        RenderState::Loading => "Loading listings...\n".to_string(),
        RenderState::Error(message) => format!("❌ {}\n{}\n", message, RETRY_HINT),
        RenderState::Success { items, .. } if items.is_empty() => format!("🔍 {}\n", EMPTY_HINT),
        RenderState::Success { items, total_count } => {
            let mut out = String::new();
            if *total_count > 0 {
                let _ = writeln!(out, "{} listings available\n", total_count);
            }
            for (i, listing) in items.iter().enumerate() {
                out.push_str(&render_card(i + 1, listing));
                out.push('\n');
            }
            out
        }
    }
}

pub fn render_card(position: usize, listing: &Listing) -> String {
    let mut out = String::new();
    let badge = listing.transaction().map(|t| t.badge()).unwrap_or("");
    let featured = if listing.featured { " ⭐" } else { "" };

    let _ = writeln!(out, "{}. {} [{}]{}", position, listing.title, badge, featured);
    let _ = writeln!(out, "   📍 {} ({})", listing.city, listing.zip_code);
    let _ = writeln!(
        out,
        "   {} ch. · {} sdb · {} m²",
        listing.bedrooms, listing.bathrooms, listing.surface
    );
    let _ = writeln!(out, "   {} · {}", listing.formatted_price(), listing.status);
    let _ = writeln!(out, "   ID: {}  Image: {}", listing.id, listing.card_image_url());
    out
}

pub fn render_detail(state: &DetailState, gallery: Option<&Gallery>) -> String {
    let listing = match state {
        DetailState::NotFound => return "Listing not found.\n".to_string(),
        DetailState::Error(message) => return format!("❌ {}\n", message),
        DetailState::Loaded(listing) => listing,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", listing.title);
    let _ = writeln!(
        out,
        "📍 {}, {} ({})",
        listing.address, listing.city, listing.zip_code
    );
    let _ = writeln!(out, "{}", listing.formatted_price());
    if let Some(per_sqm) = listing.price_per_sqm() {
        let _ = writeln!(out, "{} €/m²", group_thousands(per_sqm));
    }
    let _ = writeln!(
        out,
        "{} · {} m² · {} ch. · {} sdb",
        listing.property_type, listing.surface, listing.bedrooms, listing.bathrooms
    );
    if !listing.description.is_empty() {
        let _ = writeln!(out, "\n{}", listing.description);
    }
    if let Some(gallery) = gallery {
        if let Some(image) = gallery.current_image() {
            let _ = writeln!(out, "\n🖼  {} ({})", image, gallery.counter());
        }
    }
    out
}

pub fn render_admin(overview: &AdminOverview) -> String {
    let stats = &overview.stats;
    let mut out = String::new();
    let _ = writeln!(out, "Properties: {}", stats.total_properties);
    let _ = writeln!(
        out,
        "For sale: {}  For rent: {}  Featured: {}",
        stats.for_sale, stats.for_rent, stats.featured
    );
    for listing in &overview.listings {
        let _ = writeln!(
            out,
            "  #{} {} · {} · {}",
            listing.id,
            listing.title,
            listing.city,
            listing.formatted_price()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::LOAD_ERROR_MESSAGE;
    use crate::models::fixtures::listing;

    #[test]
    fn test_error_offers_retry() {
        let text = render_listing_state(&RenderState::Error(LOAD_ERROR_MESSAGE.into()));
        assert!(text.contains(LOAD_ERROR_MESSAGE));
        assert!(text.contains(RETRY_HINT));
    }

    #[test]
    fn test_empty_success_is_not_an_error_banner() {
        let text = render_listing_state(&RenderState::Success {
            items: Vec::new(),
            total_count: 0,
        });
        assert!(text.contains(EMPTY_HINT));
        assert!(!text.contains('❌'));
    }

    #[test]
    fn test_cards_are_numbered() {
        let text = render_listing_state(&RenderState::Success {
            items: vec![listing(1, "Studio Paris", "Paris"), listing(2, "Loft", "Lyon")],
            total_count: 2,
        });
        assert!(text.starts_with("2 listings available"));
        assert!(text.contains("1. Studio Paris [À Vendre]"));
        assert!(text.contains("2. Loft [À Vendre]"));
    }

    #[test]
    fn test_detail_shows_gallery_position() {
        let item = listing(4, "Villa", "Nice");
        let mut gallery = Gallery::for_listing(&item);
        gallery.next();

        let text = render_detail(&DetailState::Loaded(Box::new(item)), Some(&gallery));
        assert!(text.contains("https://picsum.photos/seed/4-1/800/600 (2 / 6)"));
        assert!(text.contains("€/m²"));
    }

    #[test]
    fn test_detail_not_found() {
        assert_eq!(render_detail(&DetailState::NotFound, None), "Listing not found.\n");
    }
}
