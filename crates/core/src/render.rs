//! Render mapper: stored document to display model.
//!
//! [`render`] decides which regions of the page are visible and what they
//! contain. It is pure and is shared by the public page and the editor
//! preview, so both always agree on what a visitor would see.

use serde::Serialize;

use crate::landing_page::{ContentBlock, LandingPage};
use crate::products::Product;

/// Placeholder shown in the email field when the owner has not set one.
pub const DEFAULT_EMAIL_PLACEHOLDER: &str = "example@gmail.com";

/// Everything the presentation layer needs to draw a landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    /// Document `<title>` and meta description.
    pub title: Option<String>,
    pub description: Option<String>,
    /// Styling hints, passed through verbatim.
    pub theme: String,
    pub font: String,
    pub template: Option<String>,
    pub headline: Option<String>,
    pub body: Option<String>,
    pub user_name: Option<String>,
    pub user_icon: Option<UserIcon>,
    pub email_capture: Option<EmailCapture>,
    pub products: Vec<ProductCard>,
    pub sections: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIcon {
    pub image_url: Option<String>,
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCapture {
    pub placeholder: String,
    pub cta_button: Option<CtaButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaButton {
    pub text: Option<String>,
}

/// A product card; `link` opens in a new tab when present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub stage: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        Self {
            name: p.product_name.clone(),
            description: p.product_description.clone(),
            link: p.product_url.clone(),
            stage: p.product_stage.clone(),
            price: p.product_price,
            image_url: p.product_image.clone(),
        }
    }
}

/// Map a stored page to its display model.
///
/// - user icon iff `showUserIcon`
/// - email capture iff `showEmailInput`, its CTA button iff `showCTAButton`
/// - product cards iff the product list is open and non-empty
pub fn render(page: &LandingPage) -> DisplayModel {
    let content = &page.content;

    let user_icon = content.show_user_icon.then(|| UserIcon {
        image_url: content.user_image.clone(),
        alt_text: format!(
            "{} profile picture",
            content.user_name.as_deref().unwrap_or_default()
        )
        .trim_start()
        .to_string(),
    });

    let email_capture = content.show_email_input.then(|| EmailCapture {
        placeholder: content
            .input_field
            .clone()
            .unwrap_or_else(|| DEFAULT_EMAIL_PLACEHOLDER.to_string()),
        cta_button: content.show_cta_button.then(|| CtaButton {
            text: content.cta_text.clone(),
        }),
    });

    let products = if content.products.is_visible() {
        content.products.items.iter().map(ProductCard::from).collect()
    } else {
        Vec::new()
    };

    DisplayModel {
        title: page.title.clone(),
        description: page.description.clone(),
        theme: page.customizations.theme.clone(),
        font: page.customizations.font.clone(),
        template: page.template.clone(),
        headline: content.main_headline.clone(),
        body: content.main_description.clone(),
        user_name: content.user_name.clone(),
        user_icon,
        email_capture,
        products,
        sections: content.sections.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
