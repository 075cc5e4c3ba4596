//! The feature cards shown below the home page hero
//!
//! The list is fixed at build time. Order here is display order; records
//! are never looked up by key, only iterated.

use lazy_static::lazy_static;
use serde::Serialize;

/// One card in the feature section
///
/// `description` is a trusted HTML fragment and may embed inline links.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureRecord {
    pub title: String,
    pub description: String,
}

impl FeatureRecord {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

lazy_static! {
    static ref FEATURE_LIST: Vec<FeatureRecord> = vec![
        FeatureRecord::new(
            "关于本站",
            r#"基于<a href="https://github.com/facebook/docusaurus" target="_blank" rel="noopener">docusaurus</a><p>一个基于 React 的静态网站生成器，专注于文档和博客内容，支持国际化和插件扩展。</p>"#,
        ),
        FeatureRecord::new(
            "关于我",
            r#"热爱开发技术，喜欢钻研捣鼓，积极主动<p>目前专门学习前端中，希望能找到一份好工作... ...</p>"#,
        ),
        FeatureRecord::new(
            "联系我",
            r#"向我<a href="mailto:rainchill2022@foxmail.com">发送邮件</a>"#,
        ),
    ];
}

/// The fixed, ordered feature list
pub fn feature_list() -> &'static [FeatureRecord] {
    &FEATURE_LIST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_list_order() {
        let features = feature_list();
        assert_eq!(features.len(), 3);
        assert_eq!(features[0].title, "关于本站");
        assert_eq!(features[1].title, "关于我");
        assert_eq!(features[2].title, "联系我");
    }

    #[test]
    fn test_contact_card_has_mailto_link() {
        let contact = &feature_list()[2];
        assert!(contact
            .description
            .contains(r#"<a href="mailto:rainchill2022@foxmail.com">"#));
    }
}
