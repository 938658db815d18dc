//! Static copy for both pages, embedded at build time from
//! `content/site.json`, plus the reveal tuning that can ride along with it.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config;
use crate::error::{Result, SiteError};
use crate::nav::NavigationTarget;
use crate::reveal::{ObserveOptions, StaggerSchedule};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: f64,
    pub group_threshold: f64,
    pub root_margin_px: i32,
    pub trigger_once: bool,
    pub stagger_base_ms: u32,
    pub stagger_step_ms: u32,
    pub nav_offset_px: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: config::DEFAULT_THRESHOLD,
            group_threshold: config::DEFAULT_GROUP_THRESHOLD,
            root_margin_px: config::DEFAULT_ROOT_MARGIN_PX,
            trigger_once: true,
            stagger_base_ms: config::DEFAULT_STAGGER_BASE_MS,
            stagger_step_ms: config::DEFAULT_STAGGER_STEP_MS,
            nav_offset_px: config::NAV_SCROLL_OFFSET_PX,
        }
    }
}

impl RevealSettings {
    pub fn unit_options(&self) -> ObserveOptions {
        ObserveOptions {
            threshold: self.threshold,
            trigger_once: self.trigger_once,
            root_margin_px: self.root_margin_px,
        }
    }

    /// Containers use the looser threshold and no margin so a group starts
    /// as soon as its top edge shows.
    pub fn group_options(&self) -> ObserveOptions {
        ObserveOptions {
            threshold: self.group_threshold,
            trigger_once: self.trigger_once,
            root_margin_px: 0,
        }
    }

    pub fn schedule(&self) -> StaggerSchedule {
        StaggerSchedule::new(self.stagger_base_ms, self.stagger_step_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub reveal: RevealSettings,
    pub pages: Vec<PageContent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageContent {
    pub slug: String,
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    /// Doubles as the DOM id the category bar scrolls to.
    pub id: String,
    #[serde(default)]
    pub nav_label: Option<String>,
    #[serde(flatten)]
    pub kind: SectionKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionKind {
    Hero(Hero),
    FeatureGrid(FeatureGrid),
    Comparison(Comparison),
    Steps(Steps),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub headline: String,
    pub subheadline: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureGrid {
    pub heading: String,
    #[serde(default)]
    pub intro: Option<String>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comparison {
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<CellValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Flag(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Steps {
    pub heading: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    pub title: String,
    pub body: String,
}

impl SiteContent {
    /// The copy shipped with the binary.
    pub fn load() -> Result<Self> {
        Self::parse(SITE_JSON)
    }

    pub fn parse(json: &str) -> Result<Self> {
        let site: SiteContent = serde_json::from_str(json)?;
        for page in &site.pages {
            page.validate()?;
        }
        Ok(site)
    }

    pub fn page(&self, slug: &str) -> Option<&PageContent> {
        self.pages.iter().find(|p| p.slug == slug)
    }
}

impl PageContent {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(SiteError::DuplicateSection {
                    page: self.slug.clone(),
                    section: section.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// One target per labelled section, in document order.
    pub fn navigation_targets(&self, scroll_offset_px: f64) -> Vec<NavigationTarget> {
        self.sections
            .iter()
            .filter_map(|s| {
                s.nav_label.as_ref().map(|label| NavigationTarget {
                    section_id: s.id.clone(),
                    label: label.clone(),
                    scroll_offset_px,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "pages": [{
            "slug": "home",
            "title": "Home",
            "sections": [
                { "id": "top", "kind": "hero", "headline": "h", "subheadline": "s",
                  "cta_label": "Go", "cta_href": "/" },
                { "id": "how", "nav_label": "How", "kind": "steps", "heading": "Steps",
                  "steps": [{ "title": "One", "body": "b" }] },
                { "id": "compare", "nav_label": "Compare", "kind": "comparison", "heading": "C",
                  "columns": ["Us", "Spreadsheet"],
                  "rows": [{ "label": "Skill balancing", "values": [true, "manual"] }] }
            ]
        }]
    }"#;

    #[test]
    fn shipped_content_parses() {
        let site = SiteContent::load().unwrap();
        assert_eq!(site.pages.len(), 2);
        assert!(site.page("students").is_some());
        assert!(site.page("instructors").is_some());
    }

    #[test]
    fn missing_reveal_block_uses_defaults() {
        let site = SiteContent::parse(MINIMAL).unwrap();
        assert_eq!(site.reveal, RevealSettings::default());
        assert_eq!(site.reveal.schedule().step_ms, config::DEFAULT_STAGGER_STEP_MS);
    }

    #[test]
    fn partial_reveal_block_overrides_only_given_fields() {
        let json = MINIMAL.replacen("{", r#"{ "reveal": { "stagger_step_ms": 60, "trigger_once": false },"#, 1);
        let site = SiteContent::parse(&json).unwrap();
        assert_eq!(site.reveal.stagger_step_ms, 60);
        assert!(!site.reveal.unit_options().trigger_once);
        assert_eq!(site.reveal.threshold, config::DEFAULT_THRESHOLD);
    }

    #[test]
    fn sections_keep_document_order_and_kinds() {
        let site = SiteContent::parse(MINIMAL).unwrap();
        let page = site.page("home").unwrap();
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "how", "compare"]);
        assert!(matches!(page.sections[0].kind, SectionKind::Hero(_)));
        match &page.sections[2].kind {
            SectionKind::Comparison(c) => {
                assert_eq!(c.rows[0].values, vec![CellValue::Flag(true), CellValue::Text("manual".into())]);
            }
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn navigation_targets_skip_unlabelled_sections() {
        let site = SiteContent::parse(MINIMAL).unwrap();
        let targets = site.page("home").unwrap().navigation_targets(100.0);
        let ids: Vec<&str> = targets.iter().map(|t| t.section_id.as_str()).collect();
        assert_eq!(ids, vec!["how", "compare"]);
        assert!(targets.iter().all(|t| t.scroll_offset_px == 100.0));
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let json = MINIMAL.replace(r#""id": "compare""#, r#""id": "how""#);
        match SiteContent::parse(&json) {
            Err(SiteError::DuplicateSection { page, section }) => {
                assert_eq!(page, "home");
                assert_eq!(section, "how");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn repeated_row_labels_are_accepted() {
        let json = MINIMAL.replace(
            r#"[{ "label": "Skill balancing", "values": [true, "manual"] }]"#,
            r#"[{ "label": "Same", "values": [true, "a"] }, { "label": "Same", "values": [false, "b"] }]"#,
        );
        let site = SiteContent::parse(&json).unwrap();
        match &site.page("home").unwrap().sections[2].kind {
            SectionKind::Comparison(c) => assert_eq!(c.rows.len(), 2),
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn oversized_stagger_step_saturates() {
        let json = MINIMAL.replacen("{", r#"{ "reveal": { "stagger_step_ms": 4000000000 },"#, 1);
        let schedule = SiteContent::parse(&json).unwrap().reveal.schedule();
        assert_eq!(schedule.delay_for(1), 4_000_000_000);
        assert_eq!(schedule.delay_for(3), u32::MAX);
    }

    #[test]
    fn malformed_json_is_a_content_error() {
        assert!(matches!(SiteContent::parse("{ nope"), Err(SiteError::Content(_))));
    }
}
