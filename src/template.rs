use crate::error::SiteError;

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use std::sync::LazyLock;

        /// Configuration for HTML minification
        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_doctype: false,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });
    }
}

/// Renders a page template, minifying the markup in release builds.
pub fn render<T: askama::Template>(template: &T) -> Result<String, SiteError> {
    let html = template.render()?;

    #[cfg(not(debug_assertions))]
    let html = String::from_utf8_lossy(&minify_html::minify(html.as_bytes(), &MINIFY_CFG))
        .into_owned();

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(askama::Template)]
    #[template(source = "<p>{{ name }}</p>", ext = "html")]
    struct Greeting<'a> {
        name: &'a str,
    }

    #[test]
    fn render_escapes_values() {
        let html = render(&Greeting { name: "<b>Ann</b>" }).unwrap();

        assert!(html.contains("&#60;b&#62;Ann&#60;/b&#62;") || html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
