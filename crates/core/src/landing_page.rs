//! Landing-page configuration documents, their defaults, and partial updates.
//!
//! A [`LandingPage`] is the stored document. Editors submit a
//! [`LandingPagePatch`] in which every field is optional; the first patch for
//! an owner goes through [`apply_defaults`] to become a [`NewLandingPage`],
//! later ones are merged into the stored document section by section.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::personal_link::{validate_not_reserved, MAX_PERSONAL_LINK_LENGTH, PERSONAL_LINK_RE};
use crate::products::ProductList;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Theme applied when none has been chosen.
pub const DEFAULT_THEME: &str = "light";

/// Font applied when none has been chosen.
pub const DEFAULT_FONT: &str = "Lato";

/// Maximum length of the page title.
pub const MAX_TITLE_LENGTH: u64 = 200;

/// Maximum length of the page description and long content strings.
pub const MAX_TEXT_LENGTH: u64 = 2000;

/// Maximum length of a theme, font, or template identifier.
pub const MAX_STYLE_NAME_LENGTH: u64 = 64;

// ---------------------------------------------------------------------------
// Stored document
// ---------------------------------------------------------------------------

/// Styling hints passed through to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customizations {
    pub theme: String,
    pub font: String,
}

impl Default for Customizations {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            font: DEFAULT_FONT.to_string(),
        }
    }
}

impl Customizations {
    /// Overwrite the fields present in `patch`.
    pub fn merge(&mut self, patch: &CustomizationsPatch) {
        if let Some(theme) = &patch.theme {
            self.theme.clone_from(theme);
        }
        if let Some(font) = &patch.font {
            self.font.clone_from(font);
        }
    }
}

/// A free-form content block from the page constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Everything shown on the page besides styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageContent {
    pub main_headline: Option<String>,
    pub main_description: Option<String>,
    #[serde(alias = "emailInputValue")]
    pub input_field: Option<String>,
    #[serde(alias = "ctaButtonText")]
    pub cta_text: Option<String>,
    pub show_user_icon: bool,
    pub show_email_input: bool,
    #[serde(rename = "showCTAButton", alias = "showCtaButton")]
    pub show_cta_button: bool,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
    pub products: ProductList,
    #[serde(rename = "constructor")]
    pub sections: Vec<ContentBlock>,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            main_headline: None,
            main_description: None,
            input_field: None,
            cta_text: None,
            show_user_icon: true,
            show_email_input: true,
            show_cta_button: true,
            user_name: None,
            user_image: None,
            products: ProductList::default(),
            sections: Vec::new(),
        }
    }
}

impl PageContent {
    /// Overwrite the fields present in `patch`; a present product list or
    /// section list replaces the stored one wholesale.
    pub fn merge(&mut self, patch: &ContentPatch) {
        merge_opt(&mut self.main_headline, &patch.main_headline);
        merge_opt(&mut self.main_description, &patch.main_description);
        merge_opt(&mut self.input_field, &patch.input_field);
        merge_opt(&mut self.cta_text, &patch.cta_text);
        merge_opt(&mut self.user_name, &patch.user_name);
        merge_opt(&mut self.user_image, &patch.user_image);
        if let Some(v) = patch.show_user_icon {
            self.show_user_icon = v;
        }
        if let Some(v) = patch.show_email_input {
            self.show_email_input = v;
        }
        if let Some(v) = patch.show_cta_button {
            self.show_cta_button = v;
        }
        if let Some(products) = &patch.products {
            self.products = products.clone();
        }
        if let Some(sections) = &patch.sections {
            self.sections = sections.clone();
        }
    }
}

/// A stored landing-page configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub id: DbId,
    pub owner_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub customizations: Customizations,
    pub content: PageContent,
    pub personal_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub date_modified: Timestamp,
}

impl LandingPage {
    /// Return a copy with `patch` merged in. Identity and timestamps are
    /// left untouched; stores refresh `updated_at`/`date_modified` on write.
    pub fn merged(&self, patch: &LandingPagePatch) -> LandingPage {
        let mut page = self.clone();
        merge_opt(&mut page.title, &patch.title);
        merge_opt(&mut page.description, &patch.description);
        merge_opt(&mut page.template, &patch.template);
        merge_opt(&mut page.personal_link, &patch.personal_link);
        if let Some(c) = &patch.customizations {
            page.customizations.merge(c);
        }
        if let Some(c) = &patch.content {
            page.content.merge(c);
        }
        page
    }
}

/// A fully-defaulted document ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLandingPage {
    pub owner_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub customizations: Customizations,
    pub content: PageContent,
    pub personal_link: Option<String>,
}

impl NewLandingPage {
    /// Materialize an unsaved document (id `0`) for previews.
    pub fn into_unsaved(self, now: Timestamp) -> LandingPage {
        LandingPage {
            id: 0,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            template: self.template,
            customizations: self.customizations,
            content: self.content,
            personal_link: self.personal_link,
            created_at: now,
            updated_at: now,
            date_modified: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Patches (request payloads)
// ---------------------------------------------------------------------------

/// Partial update of [`Customizations`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_STYLE_NAME_LENGTH))]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = MAX_STYLE_NAME_LENGTH))]
    pub font: Option<String>,
}

/// Partial update of [`PageContent`].
///
/// Serializes to the same field names as [`PageContent`] with absent fields
/// omitted, so the JSON form can be merged key-by-key into a stored document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub main_headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub main_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "emailInputValue")]
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub input_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "ctaButtonText")]
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_user_icon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_email_input: Option<bool>,
    #[serde(
        rename = "showCTAButton",
        alias = "showCtaButton",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_cta_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub user_image: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::products::deserialize_submitted"
    )]
    #[validate(nested)]
    pub products: Option<ProductList>,
    #[serde(rename = "constructor", skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<ContentBlock>>,
}

/// Editor payload for create-or-update. Every field is optional; `ownerId`
/// comes from the authenticated identity, never from the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LandingPagePatch {
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,
    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = MAX_STYLE_NAME_LENGTH))]
    pub template: Option<String>,
    #[validate(
        length(min = 1, max = MAX_PERSONAL_LINK_LENGTH),
        regex(path = *PERSONAL_LINK_RE),
        custom(function = "validate_not_reserved")
    )]
    pub personal_link: Option<String>,
    #[validate(nested)]
    pub customizations: Option<CustomizationsPatch>,
    #[validate(nested)]
    pub content: Option<ContentPatch>,
}

impl LandingPagePatch {
    /// Run every field rule, mapping failures to [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Build the document inserted on an owner's first save: every field absent
/// from `patch` takes its default (`light`/`Lato`, visibility flags `true`,
/// no products).
pub fn apply_defaults(owner_id: &str, patch: LandingPagePatch) -> NewLandingPage {
    let mut customizations = Customizations::default();
    if let Some(c) = &patch.customizations {
        customizations.merge(c);
    }

    let mut content = PageContent::default();
    if let Some(c) = &patch.content {
        content.merge(c);
    }

    NewLandingPage {
        owner_id: owner_id.to_string(),
        title: patch.title,
        description: patch.description,
        template: patch.template,
        customizations,
        content,
        personal_link: patch.personal_link,
    }
}

fn merge_opt(target: &mut Option<String>, patch: &Option<String>) {
    if let Some(value) = patch {
        *target = Some(value.clone());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
