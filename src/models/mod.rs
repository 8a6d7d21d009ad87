use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier assigned to a listing by the remote API
pub type ListingId = u64;

/// Cities offered by the filter controls
pub const KNOWN_CITIES: [&str; 5] = ["Paris", "Monaco", "Nice", "Lyon", "Marseille"];

/// Number of gallery images derived for a listing detail page
pub const GALLERY_SIZE: usize = 6;

const IMAGE_HOST: &str = "https://picsum.photos/seed";

// Narrow no-break space, as used by French number formatting.
const THOUSANDS_SEPARATOR: char = '\u{202f}';

/// Whether a listing is for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "vente")]
    Sale,
    #[serde(rename = "location")]
    Rental,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Sale, TransactionType::Rental];

    /// Wire value used by the API and the URL query string
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "vente",
            TransactionType::Rental => "location",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn badge(&self) -> &'static str {
        match self {
            TransactionType::Sale => "À Vendre",
            TransactionType::Rental => "À Louer",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    #[serde(rename = "appartement")]
    Apartment,
    #[serde(rename = "maison")]
    House,
    #[serde(rename = "studio")]
    Studio,
    #[serde(rename = "villa")]
    Villa,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Studio,
        PropertyType::Villa,
    ];

    /// Wire value used by the API and the URL query string
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "appartement",
            PropertyType::House => "maison",
            PropertyType::Studio => "studio",
            PropertyType::Villa => "villa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single real-estate listing as returned by the API.
///
/// The record is read-only on this side: fields are decoded leniently (nulls
/// become defaults, decimals may arrive as strings) and never validated.
/// Enumerated fields stay raw strings so unknown values still render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bathrooms: u32,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub surface: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl Listing {
    pub fn transaction(&self) -> Option<TransactionType> {
        TransactionType::parse(&self.transaction_type)
    }

    pub fn kind(&self) -> Option<PropertyType> {
        PropertyType::parse(&self.property_type)
    }

    /// Thumbnail used on listing cards, seeded by the listing id
    pub fn card_image_url(&self) -> String {
        format!("{}/{}/400/300", IMAGE_HOST, self.id)
    }

    /// Detail gallery images, one seed per index
    pub fn gallery_image_urls(&self) -> Vec<String> {
        (0..GALLERY_SIZE)
            .map(|i| format!("{}/{}-{}/800/600", IMAGE_HOST, self.id, i))
            .collect()
    }

    /// Rounded price per square metre; `None` when the surface is unknown
    pub fn price_per_sqm(&self) -> Option<i64> {
        if self.surface > 0.0 {
            Some((self.price / self.surface).round() as i64)
        } else {
            None
        }
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price, self.transaction())
    }
}

/// Formats a price the way the listing pages display it: French digit
/// grouping, euro sign, and a monthly suffix for rentals.
pub fn format_price(price: f64, transaction: Option<TransactionType>) -> String {
    let mut out = format!("{} €", group_thousands(price.round() as i64));
    if transaction == Some(TransactionType::Rental) {
        out.push_str("/mois");
    }
    out
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

/// Accepts `250000`, `250000.5` or `"250000.00"`
fn lenient_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Decimal>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Decimal::Number(n)) => Ok(n),
        Some(Decimal::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Decimal::Text(s)) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_listing() {
        let listing: Listing = serde_json::from_value(json!({
            "id": 1,
            "title": "Studio Paris",
            "price": 250000,
            "transaction_type": "vente",
            "city": "Paris",
            "zip_code": "75001",
            "bedrooms": 1,
            "bathrooms": 1,
            "surface": 28,
            "featured": false,
            "status": "disponible"
        }))
        .unwrap();

        assert_eq!(listing.id, 1);
        assert_eq!(listing.price, 250_000.0);
        assert_eq!(listing.transaction(), Some(TransactionType::Sale));
        assert_eq!(listing.kind(), None);
        assert_eq!(listing.address, "");
    }

    #[test]
    fn test_decode_tolerates_nulls_and_decimal_strings() {
        let listing: Listing = serde_json::from_value(json!({
            "id": 7,
            "title": null,
            "description": null,
            "price": "1200.00",
            "surface": "45.5",
            "bedrooms": null,
            "transaction_type": "location",
            "property_type": "appartement"
        }))
        .unwrap();

        assert_eq!(listing.title, "");
        assert_eq!(listing.price, 1200.0);
        assert_eq!(listing.surface, 45.5);
        assert_eq!(listing.bedrooms, 0);
        assert_eq!(listing.kind(), Some(PropertyType::Apartment));
    }

    #[test]
    fn test_decode_rejects_garbage_price() {
        let result: Result<Listing, _> = serde_json::from_value(json!({"id": 1, "price": "cheap"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(TransactionType::parse("vente"), Some(TransactionType::Sale));
        assert_eq!(TransactionType::parse("location"), Some(TransactionType::Rental));
        assert_eq!(TransactionType::parse("sale"), None);
        for kind in PropertyType::ALL {
            assert_eq!(PropertyType::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_image_urls_derive_from_id() {
        let listing = fixtures::listing(42, "Loft", "Lyon");
        assert_eq!(listing.card_image_url(), "https://picsum.photos/seed/42/400/300");

        let gallery = listing.gallery_image_urls();
        assert_eq!(gallery.len(), GALLERY_SIZE);
        assert_eq!(gallery[0], "https://picsum.photos/seed/42-0/800/600");
        assert_eq!(gallery[5], "https://picsum.photos/seed/42-5/800/600");
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(250_000), "250\u{202f}000");
        assert_eq!(group_thousands(1_250_000), "1\u{202f}250\u{202f}000");
        assert_eq!(group_thousands(-1200), "-1\u{202f}200");

        assert_eq!(format_price(250_000.0, Some(TransactionType::Sale)), "250\u{202f}000 €");
        assert_eq!(format_price(1200.0, Some(TransactionType::Rental)), "1\u{202f}200 €/mois");
    }

    #[test]
    fn test_price_per_sqm() {
        let mut listing = fixtures::listing(1, "Studio", "Paris");
        assert_eq!(listing.price_per_sqm(), Some(8929));

        listing.surface = 0.0;
        assert_eq!(listing.price_per_sqm(), None);
    }
}
