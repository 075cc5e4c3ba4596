//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;

/// Generate a CSS link tag
///
/// # Examples
/// ```ignore
/// css(&config, "home") // -> <link rel="stylesheet" href="/css/home.css">
/// ```
pub fn css(config: &SiteConfig, path: &str) -> String {
    let path =
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
            path.to_string()
        } else {
            let path = if path.ends_with(".css") {
                path.to_string()
            } else {
                format!("{}.css", path)
            };
            url_for(config, &format!("css/{}", path.trim_start_matches('/')))
        };

    format!(r#"<link rel="stylesheet" href="{}">"#, path)
}

/// Generate an anchor tag
///
/// External URLs pass through untouched and open in a new tab; internal
/// paths are resolved against the site root.
///
/// # Examples
/// ```ignore
/// link_to(&config, "/blog/", "Blog", None) // -> <a href="/blog/">Blog</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str, class: Option<&str>) -> String {
    let external = path.starts_with("http://") || path.starts_with("https://");
    let href = if external {
        path.to_string()
    } else {
        url_for(config, path)
    };

    let class_attr = class
        .filter(|c| !c.is_empty())
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    if external {
        format!(
            r#"<a{} href="{}" target="_blank" rel="noopener">{}</a>"#,
            class_attr, href, text
        )
    } else {
        format!(r#"<a{} href="{}">{}</a>"#, class_attr, href, text)
    }
}

/// Generate an image tag
///
/// # Examples
/// ```ignore
/// image_tag(&config, "/img/avatar.svg", Some("avatar"), None)
/// ```
pub fn image_tag(
    config: &SiteConfig,
    path: &str,
    alt: Option<&str>,
    class: Option<&str>,
) -> String {
    let src = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        url_for(config, path)
    };

    let alt = alt.unwrap_or("");
    let class_attr = class
        .filter(|c| !c.is_empty())
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        src,
        html_escape(alt),
        class_attr
    )
}

/// Generate a semantic heading block
///
/// Levels outside 1..=6 are clamped.
///
/// # Examples
/// ```ignore
/// heading(3, "关于本站", None) // -> <h3>关于本站</h3>
/// ```
pub fn heading(level: u8, text: &str, class: Option<&str>) -> String {
    let level = level.clamp(1, 6);
    let class_attr = class
        .filter(|c| !c.is_empty())
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    format!("<h{}{}>{}</h{}>", level, class_attr, text, level)
}

/// Generate Open Graph meta tags
pub fn open_graph(title: &str, description: &str, url: &str, site_name: &str) -> String {
    let mut tags = vec![
        r#"<meta property="og:type" content="website">"#.to_string(),
        format!(
            r#"<meta property="og:title" content="{}">"#,
            html_escape(title)
        ),
        format!(r#"<meta property="og:url" content="{}">"#, url),
        format!(
            r#"<meta property="og:site_name" content="{}">"#,
            html_escape(site_name)
        ),
    ];

    if !description.is_empty() {
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            html_escape(description)
        ));
    }

    tags.join("\n")
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="rainchill-rs {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.len()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            root: "/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_css() {
        let config = test_config();
        assert_eq!(css(&config, "home"), r#"<link rel="stylesheet" href="/css/home.css">"#);
    }

    #[test]
    fn test_link_to_internal() {
        let config = test_config();
        assert_eq!(
            link_to(&config, "/blog/", "前往博客 😄", None),
            r#"<a href="/blog/">前往博客 😄</a>"#
        );
    }

    #[test]
    fn test_link_to_external() {
        let config = test_config();
        let tag = link_to(&config, "https://github.com", "GitHub", Some("button"));
        assert!(tag.contains(r#"target="_blank""#));
        assert!(tag.contains(r#"class="button""#));
        assert!(tag.contains(r#"href="https://github.com""#));
    }

    #[test]
    fn test_image_tag() {
        let config = test_config();
        assert_eq!(
            image_tag(&config, "img/avatar.svg", Some("avatar"), Some("avatar")),
            r#"<img src="/img/avatar.svg" alt="avatar" class="avatar">"#
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(3, "关于本站", None), "<h3>关于本站</h3>");
        assert_eq!(
            heading(1, "RainChill", Some("hero-title")),
            r#"<h1 class="hero-title">RainChill</h1>"#
        );
        // Out-of-range levels clamp
        assert_eq!(heading(9, "x", None), "<h6>x</h6>");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }
}
