use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Known icon keys. Labels are matched case-insensitively, and anything
/// unknown resolves to [`Icon::Missing`].
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Icon {
    Github,
    Linkedin,
    Instagram,
    Mail,
    Home,
    Info,
    Code,
    Phone,
    FileText,
    Python,
    #[strum(to_string = "javascript", serialize = "js")]
    Javascript,
    Express,
    React,
    #[strum(to_string = "sqlite", serialize = "sql")]
    Sqlite,
    Git,
    #[strum(to_string = "tailwind", serialize = "tailwindcss")]
    Tailwind,
    #[strum(to_string = "html", serialize = "html5")]
    Html,
    #[strum(to_string = "css", serialize = "css3")]
    Css,
    #[strum(to_string = "cplusplus", serialize = "c++")]
    Cplusplus,
    #[strum(to_string = "mongodb", serialize = "nosql")]
    Mongodb,
    Pandas,
    Numpy,
    Selenium,
    Missing,
}

impl Icon {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label {
            // Skill labels that reuse another icon.
            "GitHub" => Icon::Git,
            "BeautifulSoup" => Icon::Python,
            "Portfolio" => Icon::Code,
            "Resume" => Icon::FileText,
            "About Me" => Icon::Info,
            "Contact" => Icon::Mail,
            _ => Icon::from_str(label).unwrap_or(Icon::Missing),
        }
    }

    pub fn is_missing(&self) -> bool {
        *self == Icon::Missing
    }

    /// Markup for the icon, referencing the embedded sprite sheet.
    pub fn render(&self, class: &str) -> String {
        match self {
            Icon::Missing => "<span>[Icon Missing]</span>".to_string(),
            icon => format!(
                r##"<svg class="icon {class}" aria-hidden="true"><use href="/static/icons.svg#{}"></use></svg>"##,
                icon.as_ref()
            ),
        }
    }
}
