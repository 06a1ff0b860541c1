//! Fixed zodiac vocabulary: the 12 signs and their element grouping.
//!
//! Sign names are lowercase throughout ("aries".."pisces"), matching the
//! vocabulary the position-generation step upstream is contracted to use.

use serde::{Deserialize, Serialize};

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Canonical iteration order, used for deterministic tie-breaks.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignMeta {
    pub name: String,
    pub element: Element,
}

lazy_static::lazy_static! {
    /// The 12 signs in zodiac order with their elements.
    pub static ref SIGNS: Vec<SignMeta> = vec![
        SignMeta { name: "aries".to_string(), element: Element::Fire },
        SignMeta { name: "taurus".to_string(), element: Element::Earth },
        SignMeta { name: "gemini".to_string(), element: Element::Air },
        SignMeta { name: "cancer".to_string(), element: Element::Water },
        SignMeta { name: "leo".to_string(), element: Element::Fire },
        SignMeta { name: "virgo".to_string(), element: Element::Earth },
        SignMeta { name: "libra".to_string(), element: Element::Air },
        SignMeta { name: "scorpio".to_string(), element: Element::Water },
        SignMeta { name: "sagittarius".to_string(), element: Element::Fire },
        SignMeta { name: "capricorn".to_string(), element: Element::Earth },
        SignMeta { name: "aquarius".to_string(), element: Element::Air },
        SignMeta { name: "pisces".to_string(), element: Element::Water },
    ];
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}

/// Get sign index (0-11) from longitude.
pub fn sign_index(longitude: f64) -> usize {
    (normalize_degrees(longitude) / 30.0) as usize % 12
}

/// Get sign name from longitude.
pub fn sign_from_longitude(longitude: f64) -> &'static str {
    const SIGN_NAMES: &[&str] = &[
        "aries", "taurus", "gemini", "cancer",
        "leo", "virgo", "libra", "scorpio",
        "sagittarius", "capricorn", "aquarius", "pisces",
    ];
    SIGN_NAMES[sign_index(longitude)]
}

/// Element for a sign name, or `None` for an unknown sign.
pub fn element_of(sign: &str) -> Option<Element> {
    SIGNS.iter().find(|s| s.name == sign).map(|s| s.element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
    }

    #[test]
    fn test_sign_from_longitude() {
        assert_eq!(sign_from_longitude(0.0), "aries");
        assert_eq!(sign_from_longitude(29.999), "aries");
        assert_eq!(sign_from_longitude(30.0), "taurus");
        assert_eq!(sign_from_longitude(359.9), "pisces");
    }

    #[test]
    fn test_element_of() {
        assert_eq!(element_of("leo"), Some(Element::Fire));
        assert_eq!(element_of("capricorn"), Some(Element::Earth));
        assert_eq!(element_of("atlantis"), None);
    }
}
