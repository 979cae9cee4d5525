//! 根据文档目录结构自动生成 series
//!
//! - 文档根目录下的每个一级目录 `D` 对应 key `/D/`
//! - `D` 下的页面依次成为路径条目（README 在前）
//! - `D` 下的每个子目录 `S` 成为一个可折叠分组，更深层的页面归入 `S`
//! - 根目录下的页面和首页不属于任何 series

use std::collections::BTreeMap;

use crate::domain::series::{
    PageRecord, SeriesChild, SeriesConfigObject, SeriesEntry, SeriesGroup,
};

#[derive(Default)]
struct Bucket {
    readme: Option<String>,
    pages: Vec<(String, String)>,
}

impl Bucket {
    /// `direct` 表示页面直接位于该目录下；只有直接位于目录下的 README 才排在最前
    fn push(&mut self, page: &PageRecord, direct: bool) {
        if direct && self.readme.is_none() && page.route_path.ends_with('/') {
            self.readme = Some(page.route_path.clone());
        } else {
            self.pages
                .push((page.relative_path.clone(), page.route_path.clone()));
        }
    }

    fn into_routes(mut self) -> Vec<String> {
        self.pages.sort();
        self.readme
            .into_iter()
            .chain(self.pages.into_iter().map(|(_, route)| route))
            .collect()
    }
}

#[derive(Default)]
struct Section {
    own: Bucket,
    groups: BTreeMap<String, Bucket>,
}

/// 由页面列表生成 series 映射
pub fn build_auto_series(pages: &[PageRecord]) -> SeriesConfigObject {
    let mut sections: BTreeMap<String, Section> = BTreeMap::new();

    for page in pages.iter().filter(|p| !p.frontmatter.home) {
        let segments: Vec<&str> = page.relative_path.split('/').collect();
        match segments.as_slice() {
            [_root_file] => continue,
            [dir, _file] => sections
                .entry(dir.to_string())
                .or_default()
                .own
                .push(page, true),
            [dir, group, rest @ ..] => sections
                .entry(dir.to_string())
                .or_default()
                .groups
                .entry(group.to_string())
                .or_default()
                .push(page, rest.len() == 1),
            [] => continue,
        }
    }

    sections
        .into_iter()
        .map(|(dir, section)| {
            let mut entries: Vec<SeriesEntry> = section
                .own
                .into_routes()
                .into_iter()
                .map(SeriesEntry::Path)
                .collect();

            entries.extend(section.groups.into_iter().map(|(name, bucket)| {
                SeriesEntry::Group(SeriesGroup {
                    text: name,
                    collapsible: Some(true),
                    aria_label: None,
                    link: None,
                    extra: Default::default(),
                    children: bucket
                        .into_routes()
                        .into_iter()
                        .map(SeriesChild::Path)
                        .collect(),
                })
            }));

            (format!("/{}/", dir), entries)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::PageFrontmatter;

    fn page(relative_path: &str, route_path: &str) -> PageRecord {
        PageRecord {
            route_path: route_path.into(),
            relative_path: relative_path.into(),
            title: relative_path.into(),
            frontmatter: PageFrontmatter::default(),
        }
    }

    #[test]
    fn test_groups_by_top_level_directory() {
        let pages = vec![
            page("README.md", "/"),
            page("guide/setup.md", "/guide/setup.html"),
            page("guide/README.md", "/guide/"),
            page("guide/intro.md", "/guide/intro.html"),
            page("api/overview.md", "/api/overview.html"),
        ];

        let auto = build_auto_series(&pages);

        assert_eq!(auto.len(), 2);
        assert_eq!(
            auto["/guide/"],
            vec![
                SeriesEntry::from("/guide/"),
                SeriesEntry::from("/guide/intro.html"),
                SeriesEntry::from("/guide/setup.html"),
            ]
        );
        assert_eq!(auto["/api/"], vec![SeriesEntry::from("/api/overview.html")]);
    }

    #[test]
    fn test_sub_directories_become_groups() {
        let pages = vec![
            page("guide/intro.md", "/guide/intro.html"),
            page("guide/advanced/b.md", "/guide/advanced/b.html"),
            page("guide/advanced/a.md", "/guide/advanced/a.html"),
            page("guide/advanced/deep/c.md", "/guide/advanced/deep/c.html"),
        ];

        let auto = build_auto_series(&pages);
        let entries = &auto["/guide/"];

        assert_eq!(entries.len(), 2);
        match &entries[1] {
            SeriesEntry::Group(group) => {
                assert_eq!(group.text, "advanced");
                assert_eq!(group.collapsible, Some(true));
                assert_eq!(
                    group.children,
                    vec![
                        SeriesChild::from("/guide/advanced/a.html"),
                        SeriesChild::from("/guide/advanced/b.html"),
                        SeriesChild::from("/guide/advanced/deep/c.html"),
                    ]
                );
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_readme_does_not_replace_group_readme() {
        let pages = vec![
            page("guide/advanced/README.md", "/guide/advanced/"),
            page("guide/advanced/a.md", "/guide/advanced/a.html"),
            page("guide/advanced/deep/README.md", "/guide/advanced/deep/"),
        ];

        let auto = build_auto_series(&pages);

        match &auto["/guide/"][0] {
            SeriesEntry::Group(group) => assert_eq!(
                group.children,
                vec![
                    SeriesChild::from("/guide/advanced/"),
                    SeriesChild::from("/guide/advanced/a.html"),
                    SeriesChild::from("/guide/advanced/deep/"),
                ]
            ),
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_home_pages_skipped() {
        let mut home = page("guide/README.md", "/guide/");
        home.frontmatter.home = true;

        let auto = build_auto_series(&[home]);
        assert!(auto.is_empty());
    }
}
