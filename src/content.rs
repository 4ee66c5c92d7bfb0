//! Site copy, decoded once at start-up from the document compiled into the binary.

use serde::Deserialize;
use thiserror::Error;

use crate::components::icon::Icon;

const SITE_DOCUMENT: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content could not be decoded: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// In-page anchor targets.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Alhariss,
    Features,
    Contact,
}

impl SectionId {
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Alhariss => "alhariss",
            SectionId::Features => "features",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub product: ProductContent,
    pub features: CardGrid,
    pub benefits: CardGrid,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_DOCUMENT)
    }

    pub fn from_json(document: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(document)?)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub tagline: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavContent {
    pub links: Vec<NavLink>,
    pub cta: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub target: SectionId,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeroContent {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AboutContent {
    pub title: String,
    pub intro: String,
    pub mission_title: String,
    pub mission: String,
    pub pillars: Vec<Pillar>,
    pub why_title: String,
    pub reasons: Vec<Reason>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Pillar {
    pub icon: Icon,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Reason {
    pub title: String,
    pub detail: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProductContent {
    pub badge: String,
    pub title: String,
    pub intro: String,
    pub pitch_title: String,
    pub pitch: String,
    pub highlights: Vec<String>,
    pub spotlight: Card,
    pub deployment_title: String,
    pub deployment_modes: Vec<Card>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Card {
    pub icon: Icon,
    pub title: String,
    pub body: String,
}

/// Heading plus a grid of icon cards (features, benefits).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CardGrid {
    pub title: String,
    pub intro: String,
    pub items: Vec<Card>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactContent {
    pub title: String,
    pub intro: String,
    pub reach_title: String,
    pub channels: Vec<ContactChannel>,
    pub demo_title: String,
    pub demo_primary: String,
    pub demo_secondary: String,
    pub demo_note: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FooterContent {
    pub columns: Vec<FooterColumn>,
    pub copyright: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FooterColumn {
    pub title: String,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_decodes() {
        let content = SiteContent::load().expect("embedded content should decode");
        assert_eq!(content.brand.name, "Zeraatech");
        assert_eq!(content.hero.stats.len(), 3);
        assert_eq!(content.features.items.len(), 4);
        assert_eq!(content.benefits.items.len(), 4);
        assert_eq!(content.footer.columns.len(), 3);
    }

    #[test]
    fn nav_targets_every_anchored_section_in_order() {
        let content = SiteContent::load().unwrap();
        let hrefs: Vec<String> = content.nav.links.iter().map(|l| l.target.href()).collect();
        assert_eq!(hrefs, ["#home", "#about", "#alhariss", "#features", "#contact"]);
    }

    #[test]
    fn contact_details_are_present() {
        let content = SiteContent::load().unwrap();
        let labels: Vec<&str> = content.contact.channels.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Email", "Phone", "Address"]);
        assert_eq!(content.contact.channels[2].value, "Rabat, Morocco");
    }

    #[test]
    fn loading_twice_is_identical() {
        assert_eq!(SiteContent::load().unwrap(), SiteContent::load().unwrap());
    }

    #[test]
    fn missing_key_is_reported() {
        let mut document: serde_json::Value = serde_json::from_str(SITE_DOCUMENT).unwrap();
        document["hero"].as_object_mut().unwrap().remove("title");
        let err = SiteContent::from_json(&document.to_string()).unwrap_err();
        assert!(err.to_string().contains("title"), "{err}");
    }

    #[test]
    fn unknown_icon_is_reported() {
        let mut document: serde_json::Value = serde_json::from_str(SITE_DOCUMENT).unwrap();
        document["features"]["items"][0]["icon"] = "tractor".into();
        assert!(matches!(
            SiteContent::from_json(&document.to_string()),
            Err(ContentError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_section_is_reported() {
        let mut document: serde_json::Value = serde_json::from_str(SITE_DOCUMENT).unwrap();
        document["nav"]["links"][0]["target"] = "pricing".into();
        assert!(SiteContent::from_json(&document.to_string()).is_err());
    }

    #[test]
    fn garbage_is_reported() {
        assert!(SiteContent::from_json("not json").is_err());
    }
}
