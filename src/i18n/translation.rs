//! Typed translation records.
//!
//! Each language is one complete record. Every struct rejects unknown fields
//! and has no defaults, so a missing or misspelled key in `locales/*.json`
//! fails to parse instead of rendering an empty string.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Translation {
    pub name: String,
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub portfolio: Heading,
    pub prices: Prices,
    pub booking: Booking,
    pub blog: Blog,
    pub testimonials: Testimonials,
    pub contact: Contact,
    pub footer: Footer,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Nav {
    pub home: String,
    pub about: String,
    pub portfolio: String,
    pub prices: String,
    pub booking: String,
    pub testimonials: String,
    pub blog: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct About {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Prices {
    pub title: String,
    pub subtitle: String,
    pub packages: Packages,
    pub additional_info: AdditionalInfo,
    pub most_popular: String,
    pub book_now: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Packages {
    pub portrait: Package,
    pub family: Package,
    pub children: Package,
    pub wedding: Package,
    pub event: Package,
    pub studio: Package,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Package {
    pub title: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdditionalInfo {
    pub delivery: String,
    pub originals: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Booking {
    pub title: String,
    pub subtitle: String,
    pub form: BookingLabels,
    pub notices: Notices,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingLabels {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub message: String,
    pub submit: String,
    pub service_placeholder: String,
    pub time_placeholder: String,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub phone_placeholder: String,
    pub message_placeholder: String,
    pub agreement: String,
    pub validation: ValidationMessages,
    pub services: Services,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationMessages {
    pub name_required: String,
    pub name_too_short: String,
    pub email_required: String,
    pub email_invalid: String,
    pub service_required: String,
    pub date_required: String,
    pub date_in_past: String,
    pub date_invalid: String,
    pub time_required: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Services {
    pub portrait: String,
    pub family: String,
    pub children: String,
    pub wedding: String,
    pub event: String,
    pub studio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Notices {
    pub success_title: String,
    pub success: String,
    pub failure_title: String,
    pub failure: String,
    pub mailto: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Blog {
    pub title: String,
    pub subtitle: String,
    pub read_more: String,
    pub view_all_posts: String,
    pub filter_by: String,
    pub all_posts: String,
    pub previous: String,
    pub next: String,
    pub posts: Vec<FeaturedPost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeaturedPost {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Testimonials {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub social: Social,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Social {
    pub whatsapp: String,
    pub telegram: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Footer {
    pub copyright: String,
    pub back_to_top: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Meta {
    pub title: String,
    pub description: String,
}
