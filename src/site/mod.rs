//! Static site: navigation, page content and the renderer writing every
//! page to the output directory.

mod content;
mod pages;

pub use content::*;
pub use pages::*;

use std::{
    fs,
    path::{Path, PathBuf},
};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{
    assets,
    config::{Config, SiteConfig},
    error::SiteError,
    gallery::{Filter, filter_projects},
    icon::Icon,
    template::render,
};

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    pub fn href(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about.html",
            Page::Projects => "/projects.html",
            Page::Contact => "/contact.html",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::About => "about.html",
            Page::Projects => "projects.html",
            Page::Contact => "contact.html",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Page::Home => Icon::Home,
            Page::About => Icon::Info,
            Page::Projects => Icon::Code,
            Page::Contact => Icon::Phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
    pub icon: Icon,
    pub external: bool,
}

impl Link {
    fn new(label: impl Into<String>, href: impl Into<String>, icon: Icon) -> Self {
        let href = href.into();
        let external = href.starts_with("http") || href.ends_with(".pdf");

        Self {
            label: label.into(),
            href,
            icon,
            external,
        }
    }
}

/// Social links shown in the hero, footer and contact sidebar. Empty URLs
/// are skipped.
pub fn social_links(site: &SiteConfig) -> Vec<Link> {
    [
        Link::new("GitHub", site.github_url.as_str(), Icon::Github),
        Link::new("LinkedIn", site.linkedin_url.as_str(), Icon::Linkedin),
        Link::new("Email", format!("mailto:{}", site.email), Icon::Mail),
    ]
    .into_iter()
    .filter(|link| !link.href.is_empty() && link.href != "mailto:")
    .collect()
}

/// Buttons under the home hero.
pub fn home_actions(site: &SiteConfig) -> Vec<Link> {
    [
        ("About Me", Page::About.href().to_owned()),
        ("Resume", site.resume_url.clone()),
        ("Portfolio", Page::Projects.href().to_owned()),
        ("Contact", Page::Contact.href().to_owned()),
    ]
    .into_iter()
    .filter(|(_, href)| !href.is_empty())
    .map(|(label, href)| Link::new(label, href, Icon::from_label(label)))
    .collect()
}

/// Files written by one build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
}

impl BuildReport {
    pub fn len(&self) -> usize {
        self.pages.len() + self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn write_page(output_dir: &Path, name: &str, html: &str) -> Result<PathBuf, SiteError> {
    let path = output_dir.join(name);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SiteError::io(parent, source))?;
    }

    fs::write(&path, html).map_err(|source| SiteError::io(&path, source))?;
    tracing::debug!(path = %path.display(), "page written");

    Ok(path)
}

/// Renders every page and copies the embedded assets into `output_dir`.
#[tracing::instrument(skip(config), fields(output_dir = %output_dir.display()))]
pub fn build(config: &Config, output_dir: &Path) -> Result<BuildReport, SiteError> {
    let mut report = BuildReport {
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    };

    let home = render(&HomeTemplate {
        layout: Layout::new(config, Page::Home),
        headline: HEADLINE,
        intro: HERO_INTRO,
        actions: home_actions(&config.site),
    })?;
    report
        .pages
        .push(write_page(output_dir, Page::Home.file_name(), &home)?);

    let about = render(&AboutTemplate {
        layout: Layout::new(config, Page::About),
        paragraphs: ABOUT,
        skills: SKILLS,
        certifications: CERTIFICATIONS,
    })?;
    report
        .pages
        .push(write_page(output_dir, Page::About.file_name(), &about)?);

    // One pre-rendered page per filter, plus the default listing.
    for filter in Filter::VARIANTS {
        let html = render(&ProjectsTemplate::new(
            Layout::new(config, Page::Projects),
            *filter,
            filter_projects(PROJECTS, *filter),
        ))?;

        if *filter == Filter::default() {
            report
                .pages
                .push(write_page(output_dir, Page::Projects.file_name(), &html)?);
        }

        let name = format!("projects/{}.html", filter.slug());
        report.pages.push(write_page(output_dir, &name, &html)?);
    }

    let contact = render(&ContactTemplate::new(Layout::new(config, Page::Contact)))?;
    report
        .pages
        .push(write_page(output_dir, Page::Contact.file_name(), &contact)?);

    report.assets = assets::write_assets(output_dir)?;

    tracing::info!(
        pages = report.pages.len(),
        assets = report.assets.len(),
        "site built"
    );

    Ok(report)
}
