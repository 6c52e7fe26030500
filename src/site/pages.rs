use folio_contact::{Field, FieldErrors, FormFields};
use folio_viewport::{Point, Reveal, glow_background, header_elevated};
use strum::VariantArray;

use super::{Certification, Link, Page, Skill, social_links};
use crate::{
    config::{Config, SiteConfig},
    gallery::{Filter, Project, video_error_message},
    icon::Icon,
};

pub struct NavItem {
    pub label: String,
    pub href: &'static str,
    pub icon: String,
    pub active: bool,
}

/// Values shared by every page through `base.html`.
pub struct Layout<'a> {
    pub site: &'a SiteConfig,
    pub nav: Vec<NavItem>,
    pub socials: Vec<Link>,
    pub header_class: &'static str,
    pub reveal: &'static str,
    pub glow: String,
    pub pointer_throttle_ms: u64,
    pub reveal_threshold: f64,
    pub header_offset: f64,
}

impl<'a> Layout<'a> {
    pub fn new(config: &'a Config, active: Page) -> Self {
        let nav = Page::VARIANTS
            .iter()
            .map(|page| NavItem {
                label: page.to_string(),
                href: page.href(),
                icon: page.icon().render("nav-icon"),
                active: *page == active,
            })
            .collect();

        // Pages load scrolled to the top, with sections waiting to slide in.
        let header_class = if header_elevated(0.0, config.viewport.header_elevation_offset) {
            "elevated"
        } else {
            "resting"
        };

        Self {
            site: &config.site,
            nav,
            socials: social_links(&config.site),
            header_class,
            reveal: Reveal::new(config.viewport.reveal_threshold).variant(),
            glow: glow_background(Point::default()),
            pointer_throttle_ms: config.viewport.pointer_throttle_ms,
            reveal_threshold: config.viewport.reveal_threshold,
            header_offset: config.viewport.header_elevation_offset,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub layout: Layout<'a>,
    pub headline: &'static str,
    pub intro: &'static str,
    pub actions: Vec<Link>,
}

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub layout: Layout<'a>,
    pub paragraphs: &'static [&'static str],
    pub skills: &'static [Skill],
    pub certifications: &'static [Certification],
}

pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(askama::Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate<'a> {
    pub layout: Layout<'a>,
    pub filters: Vec<FilterLink>,
    pub projects: Vec<&'static Project>,
    pub source_icon: String,
    pub video_fallback: &'static str,
}

impl<'a> ProjectsTemplate<'a> {
    pub fn new(layout: Layout<'a>, active: Filter, projects: Vec<&'static Project>) -> Self {
        let filters = Filter::VARIANTS
            .iter()
            .map(|filter| FilterLink {
                label: filter.to_string(),
                href: format!("/projects/{}.html", filter.slug()),
                active: *filter == active,
            })
            .collect();

        Self {
            layout,
            filters,
            projects,
            source_icon: Icon::Github.render("link-icon"),
            video_fallback: video_error_message(None),
        }
    }
}

pub struct FieldView {
    pub key: String,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: String,
    pub multiline: bool,
    pub input_type: &'static str,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub layout: Layout<'a>,
    pub fields: Vec<FieldView>,
    pub mail_icon: String,
}

impl<'a> ContactTemplate<'a> {
    pub fn new(layout: Layout<'a>) -> Self {
        Self::with_state(layout, &FormFields::default(), &FieldErrors::default())
    }

    /// Form prefilled with values and inline errors.
    pub fn with_state(layout: Layout<'a>, values: &FormFields, errors: &FieldErrors) -> Self {
        let fields = Field::VARIANTS
            .iter()
            .map(|field| FieldView {
                key: field.to_string(),
                label: field.label(),
                placeholder: field.placeholder(),
                value: values.get(*field).to_owned(),
                error: errors.get(*field).to_owned(),
                multiline: *field == Field::Message,
                input_type: if *field == Field::Email { "email" } else { "text" },
            })
            .collect();

        Self {
            layout,
            fields,
            mail_icon: Icon::Mail.render("detail-icon"),
        }
    }
}
