use leptos::prelude::*;
use leptos_meta::Script;

pub const BUSINESS_NAME: &str = "Made by Kane";
pub const TITLE: &str = "Made by Kane | Website & Mobile App Development Atlanta | Local SEO";
pub const DESCRIPTION: &str = "Atlanta developer specializing in custom websites, mobile apps, business automation, and local SEO for small businesses in Atlanta and Athens, GA.";
pub const DEFAULT_BASE_URL: &str = "https://madebykane.com";
pub const OG_IMAGE_URL: &str = "https://madebykane.com/icon.png";

/// The schema.org description of the business, as a JSON-LD document.
fn local_business_json() -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": BUSINESS_NAME,
        "description": DESCRIPTION,
        "url": DEFAULT_BASE_URL,
        "telephone": "+1-703-713-5390",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Atlanta",
            "addressRegion": "GA",
            "postalCode": "30326",
            "addressCountry": "US"
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": "33.7490",
            "longitude": "-84.3880"
        },
        "areaServed": [
            { "@type": "City", "name": "Atlanta" },
            { "@type": "City", "name": "Athens" },
            { "@type": "City", "name": "Buckhead" },
            { "@type": "State", "name": "Georgia" }
        ],
        "priceRange": "$$",
        "serviceType": [
            "Web Development",
            "Mobile App Development",
            "Local SEO",
            "Business Automation"
        ]
    })
    .to_string()
}

/// Injects the structured-data document into `<head>`. Emitted once per
/// page; search engines are the only consumer.
#[component]
pub fn LocalBusinessSchema() -> impl IntoView {
    view! {
        <Script type_="application/ld+json">{local_business_json()}</Script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_data_is_valid_json_ld() {
        let document: serde_json::Value =
            serde_json::from_str(&local_business_json()).unwrap();
        assert_eq!("ProfessionalService", document["@type"]);
        assert_eq!(BUSINESS_NAME, document["name"]);
        assert_eq!(4, document["areaServed"].as_array().unwrap().len());
    }
}
