//! Static copy for every page, embedded at build time.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate service id: {0}")]
    DuplicateService(String),
    #[error("feedback from {name} has {stars} stars, expected 1-5")]
    StarRating { name: String, stars: u8 },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub short_desc: String,
    pub full_desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feedback {
    pub title: String,
    pub message: String,
    pub name: String,
    pub role: String,
    pub stars: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AboutPage {
    pub id: String,
    pub label: String,
    pub title: String,
    pub description: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Founder {
    pub name: String,
    pub bio: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
    pub tagline: String,
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
    pub socials: Vec<String>,
    pub brands: Vec<String>,
    pub founder: Founder,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrivacySection {
    pub title: String,
    pub content: Option<String>,
    #[serde(default)]
    pub list: Vec<String>,
    /// Email address appended to `content` as a mailto link.
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyPolicy {
    pub last_updated: String,
    pub sections: Vec<PrivacySection>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    pub services: Vec<Service>,
    pub faqs: Vec<Faq>,
    pub feedback: Vec<Feedback>,
    pub about: Vec<AboutPage>,
    pub company: Company,
    pub privacy: PrivacyPolicy,
}

fn parse<'a, T: Deserialize<'a>>(file: &'static str, raw: &'a str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { file, source })
}

impl SiteContent {
    /// Parses and validates the embedded JSON files.
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            services: parse("services.json", include_str!("../data/services.json"))?,
            faqs: parse("faq.json", include_str!("../data/faq.json"))?,
            feedback: parse("feedback.json", include_str!("../data/feedback.json"))?,
            about: parse("about.json", include_str!("../data/about.json"))?,
            company: parse("company.json", include_str!("../data/company.json"))?,
            privacy: parse("privacy.json", include_str!("../data/privacy.json"))?,
        };
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if !seen.insert(service.id.as_str()) {
                return Err(ContentError::DuplicateService(service.id.clone()));
            }
        }

        if let Some(bad) = self.feedback.iter().find(|f| !(1..=5).contains(&f.stars)) {
            return Err(ContentError::StarRating {
                name: bad.name.clone(),
                stars: bad.stars,
            });
        }
        Ok(())
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Round-robin split used by the navbar dropdown: service `i` lands in
    /// column `i % columns`.
    pub fn service_columns(&self, columns: usize) -> Vec<Vec<&Service>> {
        let columns = columns.max(1);
        let mut out: Vec<Vec<&Service>> = vec![Vec::new(); columns];
        for (index, service) in self.services.iter().enumerate() {
            out[index % columns].push(service);
        }
        out
    }
}

static CONTENT: Lazy<Result<SiteContent, ContentError>> = Lazy::new(SiteContent::load);

pub fn site_content() -> Result<&'static SiteContent, &'static ContentError> {
    CONTENT.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = site_content().expect("embedded content should parse");
        assert!(!content.services.is_empty());
        assert_eq!(content.faqs.len(), 5);
        assert_eq!(content.about.len(), 3);
        assert_eq!(content.company.name, "Mordev Arcane");
        assert_eq!(content.company.founder.stats.len(), 3);
    }

    #[test]
    fn services_resolve_by_id() {
        let content = site_content().unwrap();
        let service = content.service("branding").unwrap();
        assert_eq!(service.title, "Branding");
        assert!(content.service("does-not-exist").is_none());
    }

    #[test]
    fn dropdown_columns_are_round_robin() {
        let content = site_content().unwrap();
        let columns = content.service_columns(3);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0][0].id, content.services[0].id);
        assert_eq!(columns[1][0].id, content.services[1].id);
        assert_eq!(columns[0][1].id, content.services[3].id);

        let total: usize = columns.iter().map(Vec::len).sum();
        assert_eq!(total, content.services.len());
    }

    #[test]
    fn privacy_sections_mix_text_lists_and_links() {
        let privacy = &site_content().unwrap().privacy;
        let usage = privacy
            .sections
            .iter()
            .find(|s| s.title == "How We Use Your Information")
            .unwrap();
        assert!(usage.content.is_none());
        assert_eq!(usage.list.len(), 4);
        assert!(privacy.sections.iter().any(|s| s.link.is_some()));
    }

    #[test]
    fn rejects_duplicate_services_and_bad_ratings() {
        let mut content = site_content().unwrap().clone();
        content.services.push(content.services[0].clone());
        assert!(matches!(content.validate(), Err(ContentError::DuplicateService(_))));

        let mut content = site_content().unwrap().clone();
        content.feedback[0].stars = 6;
        assert!(matches!(
            content.validate(),
            Err(ContentError::StarRating { stars: 6, .. })
        ));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = parse::<Vec<Faq>>("faq.json", "[{\"question\": 1}]").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse faq.json"));
    }
}
