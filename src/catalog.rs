use serde::Deserialize;

/// A destination shown on the globe. The globe itself only cares about the
/// order of the list; every field here is for display.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: String,
    pub price: String,
    pub rating: f32,
}

fn destination(id: &str, name: &str, location: &str, seed: &str, price: &str, rating: f32) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        image: format!("https://picsum.photos/seed/{}/600/900", seed),
        price: price.to_string(),
        rating,
    }
}

pub fn base_destinations() -> Vec<Destination> {
    vec![
        destination("1", "The Ritz Paris", "Paris, France", "paris", "€2,400", 5.0),
        destination("2", "Hotel Adlon", "Berlin, Germany", "berlin", "€1,100", 4.9),
        destination("3", "Imperial Hotel", "Tokyo, Japan", "tokyo", "¥85,000", 4.9),
        destination("4", "Le Sirenuse", "Positano, Italy", "positano", "€3,200", 5.0),
        destination("5", "Burj Al Arab", "Dubai, UAE", "dubai", "AED 9,000", 5.0),
        destination("6", "The Plaza", "New York, USA", "nyc", "$1,800", 4.8),
        destination("7", "Claridge’s", "London, UK", "london", "£1,500", 4.9),
        destination("8", "Marina Bay", "Singapore", "singapore", "S$900", 4.7),
        destination("9", "The Savoy", "London, UK", "savoy", "£1,200", 4.8),
        destination("10", "La Mamounia", "Marrakech", "morocco", "MAD 8,000", 4.9),
        destination("11", "Amangiri", "Utah, USA", "utah", "$3,400", 5.0),
        destination("12", "Soneva Jani", "Maldives", "maldives", "$4,100", 5.0),
    ]
}

/// The built-in list, repeated once to make the sphere denser.
pub fn default_catalog() -> Vec<Destination> {
    let base = base_destinations();
    base.iter().cloned().chain(base.clone()).collect()
}

/// Parse a JSON array of destinations.
pub fn parse_catalog(json: &str) -> anyhow::Result<Vec<Destination>> {
    let items: Vec<Destination> = serde_json::from_str(json)?;
    Ok(items)
}

/// City part of a location, e.g. "Paris" for "Paris, France".
#[inline]
pub fn short_location(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

/// Rating as filled/empty stars out of five.
pub fn rating_stars(rating: f32) -> String {
    let filled = if rating.is_finite() {
        rating.round().clamp(0.0, 5.0) as usize
    } else {
        0
    };
    let mut out = "★".repeat(filled);
    out.push_str(&"☆".repeat(5 - filled));
    out
}
