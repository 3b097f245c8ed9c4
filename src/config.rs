use std::{sync::OnceLock, time::Duration};

use crate::{error::SiteError, motion::VisibilityPolicy};

/// One character of typed text per tick.
pub const TYPING_TICK: Duration = Duration::from_millis(50);
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);
/// The hero tagline starts typing after the hero has faded in.
pub const HERO_TAGLINE_DELAY: Duration = Duration::from_millis(500);

/// Navigation switches to its solid treatment past this offset.
pub const NAV_SCROLLED_PX: f64 = 50.0;

pub const SECTION_THRESHOLD: f64 = 0.2;
pub const PROJECTS_THRESHOLD: f64 = 0.1;
pub const SECTION_VISIBILITY: VisibilityPolicy = VisibilityPolicy::Live;

pub const SKILL_STAGGER: Duration = Duration::from_millis(100);
pub const PROJECT_STAGGER: Duration = Duration::from_millis(150);
pub const CERTIFICATION_STAGGER: Duration = Duration::from_millis(100);

pub const ANALYTICS_SRC_VAR: &str = "PORTFOLIO_ANALYTICS_SRC";

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Server-side settings read from the environment at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Script injected once into the document head for page analytics.
    pub analytics_src: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, SiteError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SiteError> {
        let analytics_src = match lookup(ANALYTICS_SRC_VAR).map(|s| s.trim().to_string()) {
            None => None,
            Some(s) if s.is_empty() => None,
            Some(s) if s.starts_with("https://") || (s.starts_with('/') && !s.starts_with("//")) => {
                Some(s)
            }
            Some(s) => return Err(SiteError::InvalidAnalyticsSource(s)),
        };
        Ok(Self { analytics_src })
    }

    /// Makes `self` the process-wide configuration. Only the first call wins.
    pub fn install(self) -> &'static SiteConfig {
        SITE_CONFIG.get_or_init(|| self)
    }

    /// The installed configuration, or defaults when nothing was installed (e.g. on the client).
    pub fn current() -> SiteConfig {
        SITE_CONFIG.get().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            assert_eq!(key, ANALYTICS_SRC_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn analytics_is_optional() {
        assert_eq!(SiteConfig::from_lookup(lookup(None)).ok(), Some(SiteConfig::default()));
        assert_eq!(
            SiteConfig::from_lookup(lookup(Some("  "))).ok(),
            Some(SiteConfig::default())
        );
    }

    #[test]
    fn accepts_https_and_root_relative() {
        let cfg = SiteConfig::from_lookup(lookup(Some("/_vercel/insights/script.js")))
            .expect("root-relative source");
        assert_eq!(cfg.analytics_src.as_deref(), Some("/_vercel/insights/script.js"));
        let cfg = SiteConfig::from_lookup(lookup(Some("https://cdn.example.com/a.js")))
            .expect("https source");
        assert!(cfg.analytics_src.is_some());
    }

    #[test]
    fn rejects_insecure_sources() {
        assert_matches!(
            SiteConfig::from_lookup(lookup(Some("http://tracker.example.com/a.js"))),
            Err(SiteError::InvalidAnalyticsSource(_))
        );
        assert_matches!(
            SiteConfig::from_lookup(lookup(Some("//tracker.example.com/a.js"))),
            Err(SiteError::InvalidAnalyticsSource(_))
        );
    }

    #[test]
    fn timings_are_consistent() {
        assert!(CURSOR_BLINK > TYPING_TICK);
        assert!(PROJECTS_THRESHOLD < SECTION_THRESHOLD);
        assert_eq!(SECTION_VISIBILITY, VisibilityPolicy::Live);
    }
}
