//! Site document model: every editable content section of the website.
//!
//! Readers are tolerant: any missing key falls back to its default so that a
//! partially populated `siteData.json` still loads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level keys a complete site document carries.
pub const SECTION_KEYS: [&str; 7] = [
    "global",
    "home",
    "aboutMe",
    "projectProgress",
    "entrepreneurship",
    "growthNotes",
    "contact",
];

/// The whole persisted site document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteDocument {
    pub global: GlobalSettings,
    pub home: HomeContent,
    pub about_me: AboutMeContent,
    pub project_progress: ProjectProgressContent,
    pub entrepreneurship: EntrepreneurshipContent,
    pub growth_notes: GrowthNotesContent,
    pub contact: ContactSettings,
}

// ==================== SECTIONS ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub site_title: String,
    pub logo_text: String,
    pub is_flow_text_enabled: bool,
    pub contact_email: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            site_title: "Loading...".to_string(),
            logo_text: "Loading...".to_string(),
            is_flow_text_enabled: true,
            contact_email: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeContent {
    pub slogan: String,
    pub dynamic_update: String,
    pub cover_image: String,
    pub social_links: Vec<SocialLink>,
}

/// One entry of the about-me timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineItem {
    pub id: String,
    pub category: String,
    pub time: String,
    pub event: String,
    pub result: String,
    pub is_sticky: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutMeContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_on: Option<String>,
    pub ability_tags: Vec<String>,
    pub timeline: Vec<TimelineItem>,
    pub value_sentence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectModule {
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuturePlanItem {
    pub id: String,
    pub date: String,
    pub title: String,
}

/// Kind of a project timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectEntryKind {
    Brand,
    Module,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectTimelineItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProjectEntryKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectProgressContent {
    pub brand_name: String,
    pub brand_slogan: String,
    pub core_business: ProjectModule,
    pub future_plan: Vec<FuturePlanItem>,
    pub timeline: Vec<ProjectTimelineItem>,
}

/// An article in either article collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleItem {
    pub id: String,
    pub title: String,
    pub cover: String,
    pub summary: String,
    pub publish_date: String,
    pub views: u64,
    pub is_sticky: bool,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntrepreneurshipContent {
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub articles: Vec<ArticleItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthNotesContent {
    pub categories: Vec<String>,
    pub articles: Vec<ArticleItem>,
    /// No fixed shape yet; stored and returned untouched.
    pub review_section: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSettings {
    pub auto_reply_message: String,
    pub form_types: Vec<String>,
}

// ==================== PATCHES ====================
//
// Each patch names the fields to overwrite; `None` leaves the field as is.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalPatch {
    #[serde(default)]
    pub site_title: Option<String>,
    #[serde(default)]
    pub logo_text: Option<String>,
    #[serde(default)]
    pub is_flow_text_enabled: Option<bool>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePatch {
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub dynamic_update: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub social_links: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMePatch {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub expert_on: Option<String>,
    #[serde(default)]
    pub ability_tags: Option<Vec<String>>,
    #[serde(default)]
    pub timeline: Option<Vec<TimelineItem>>,
    #[serde(default)]
    pub value_sentence: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgressPatch {
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub brand_slogan: Option<String>,
    #[serde(default)]
    pub core_business: Option<ProjectModule>,
    #[serde(default)]
    pub future_plan: Option<Vec<FuturePlanItem>>,
    #[serde(default)]
    pub timeline: Option<Vec<ProjectTimelineItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrepreneurshipPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub articles: Option<Vec<ArticleItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthNotesPatch {
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub articles: Option<Vec<ArticleItem>>,
    #[serde(default)]
    pub review_section: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[serde(default)]
    pub auto_reply_message: Option<String>,
    #[serde(default)]
    pub form_types: Option<Vec<String>>,
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl GlobalSettings {
    pub fn apply(&mut self, patch: GlobalPatch) {
        merge(&mut self.site_title, patch.site_title);
        merge(&mut self.logo_text, patch.logo_text);
        merge(&mut self.is_flow_text_enabled, patch.is_flow_text_enabled);
        merge(&mut self.contact_email, patch.contact_email);
    }
}

impl HomeContent {
    pub fn apply(&mut self, patch: HomePatch) {
        merge(&mut self.slogan, patch.slogan);
        merge(&mut self.dynamic_update, patch.dynamic_update);
        merge(&mut self.cover_image, patch.cover_image);
        merge(&mut self.social_links, patch.social_links);
    }
}

impl AboutMeContent {
    pub fn apply(&mut self, patch: AboutMePatch) {
        if patch.location.is_some() {
            self.location = patch.location;
        }
        if patch.role.is_some() {
            self.role = patch.role;
        }
        if patch.expert_on.is_some() {
            self.expert_on = patch.expert_on;
        }
        merge(&mut self.ability_tags, patch.ability_tags);
        merge(&mut self.timeline, patch.timeline);
        merge(&mut self.value_sentence, patch.value_sentence);
    }
}

impl ProjectProgressContent {
    pub fn apply(&mut self, patch: ProjectProgressPatch) {
        merge(&mut self.brand_name, patch.brand_name);
        merge(&mut self.brand_slogan, patch.brand_slogan);
        merge(&mut self.core_business, patch.core_business);
        merge(&mut self.future_plan, patch.future_plan);
        merge(&mut self.timeline, patch.timeline);
    }
}

impl EntrepreneurshipContent {
    pub fn apply(&mut self, patch: EntrepreneurshipPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.categories, patch.categories);
        merge(&mut self.articles, patch.articles);
    }
}

impl GrowthNotesContent {
    pub fn apply(&mut self, patch: GrowthNotesPatch) {
        merge(&mut self.categories, patch.categories);
        merge(&mut self.articles, patch.articles);
        merge(&mut self.review_section, patch.review_section);
    }
}

impl ContactSettings {
    pub fn apply(&mut self, patch: ContactPatch) {
        merge(&mut self.auto_reply_message, patch.auto_reply_message);
        merge(&mut self.form_types, patch.form_types);
    }
}
