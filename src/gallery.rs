//! Project gallery: category and tech filters, demo links and the video
//! preview modal.

use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub source: &'static str,
    pub demo: &'static str,
    pub deployed_url: &'static str,
    pub featured: bool,
    pub category: Category,
}

/// `#` and empty strings are placeholders for links that do not exist yet.
fn available(url: &str) -> Option<&str> {
    match url.trim() {
        "" | "#" => None,
        url => Some(url),
    }
}

impl Project {
    pub fn source_url(&self) -> Option<&str> {
        available(self.source)
    }

    pub fn demo_url(&self) -> Option<&str> {
        available(self.demo)
    }

    pub fn deployed(&self) -> Option<&str> {
        available(self.deployed_url)
    }

    /// Anchor id derived from the title, e.g. "genre-predictor-translator".
    pub fn slug(&self) -> String {
        self.title
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum Filter {
    #[default]
    All,
    Web,
    React,
    #[strum(serialize = "Node.js")]
    NodeJs,
    #[strum(serialize = "FastAPI")]
    FastApi,
    Flask,
    #[strum(serialize = "MySQL")]
    MySql,
}

impl Filter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Web => project.category == Category::Web,
            tech => project.tech.iter().any(|t| *t == tech.as_ref()),
        }
    }

    /// File stem of the pre-rendered page for this filter.
    pub fn slug(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Web => "web",
            Filter::React => "react",
            Filter::NodeJs => "nodejs",
            Filter::FastApi => "fastapi",
            Filter::Flask => "flask",
            Filter::MySql => "mysql",
        }
    }
}

pub fn filter_projects<'a>(projects: &'a [Project], filter: Filter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Message for a media error code reported by the video element.
pub fn video_error_message(code: Option<u16>) -> &'static str {
    match code {
        Some(1) => "Video loading was aborted.",
        Some(2) => "Network error occurred while loading the video.",
        Some(3) => "Video decoding error. The file may be corrupted.",
        Some(4) => "Video format not supported or file not found.",
        _ => "Failed to load video. Please check if the file exists or try again.",
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VideoModal {
    video_url: Option<String>,
    error: Option<&'static str>,
    open: bool,
}

impl VideoModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Opens the modal for a demo link; placeholder links are ignored.
    pub fn open_demo(&mut self, demo: &str) -> bool {
        let Some(url) = available(demo) else {
            return false;
        };

        tracing::debug!(url, "opening video");
        self.video_url = Some(url.to_owned());
        self.error = None;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn key_pressed(&mut self, key: &str) {
        if key == "Escape" {
            self.close();
        }
    }

    pub fn playback_failed(&mut self, code: Option<u16>) {
        tracing::error!(
            code = ?code,
            url = self.video_url.as_deref().unwrap_or_default(),
            "video playback error"
        );
        self.error = Some(video_error_message(code));
    }
}
