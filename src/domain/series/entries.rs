//! Series Context - 作者侧的 series 配置
//!
//! 主题配置中的 `series` 可以是数组，也可以是「路径前缀 -> 数组」的映射。
//! 这里用显式的枚举描述每一种形态，解析阶段只做模式匹配。

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::items::NavLink;

/// 配置中的分组
///
/// `children` 为必填；缺少 children 的分组在解析配置时即被拒绝。
/// 其余未识别的字段保存在 `extra` 中，解析后原样带到结果分组上
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesGroup {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub children: Vec<SeriesChild>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 分组内的子项：路径字符串，或任意其他值（视为已解析，不做检查，原样透传）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesChild {
    Path(String),
    Item(Value),
}

/// 顶层 series 条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesEntry {
    /// 相对或绝对路径
    Path(String),
    /// 分组（children 会被逐项解析）
    Group(SeriesGroup),
    /// 已解析的链接，原样透传
    Link(NavLink),
}

impl From<&str> for SeriesEntry {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<&str> for SeriesChild {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

/// 数组形式的配置
pub type SeriesConfigArray = Vec<SeriesEntry>;

/// 映射形式的配置：路径前缀 -> 数组
pub type SeriesConfigObject = BTreeMap<String, SeriesConfigArray>;

/// 主题级 `series` 设置的所有可能形态
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesConfig {
    Object(SeriesConfigObject),
    Array(SeriesConfigArray),
    /// 其他任何形态（数字、字符串、布尔……）
    Unsupported(serde_json::Value),
}

/// 按外形分派：映射和数组严格解析（条目不合法即报错），其余形态原样保留
impl<'de> Deserialize<'de> for SeriesConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(Self::Object)
                .map_err(de::Error::custom),
            serde_json::Value::Array(_) => serde_json::from_value(value)
                .map(Self::Array)
                .map_err(de::Error::custom),
            other => Ok(Self::Unsupported(other)),
        }
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self::Object(SeriesConfigObject::new())
    }
}

impl SeriesConfig {
    /// 以自动生成的映射为底，叠加主题显式配置
    ///
    /// 只有映射之间才做按 key 的浅合并（显式配置优先）。
    /// 显式配置为数组或其他形态时没有可合并的路径前缀，结果仍是自动映射。
    pub fn merge_over(
        auto_series: &SeriesConfigObject,
        explicit: Option<&SeriesConfig>,
    ) -> SeriesConfigObject {
        let mut merged = auto_series.clone();
        if let Some(Self::Object(explicit)) = explicit {
            merged.extend(explicit.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }

    pub fn as_object(&self) -> Option<&SeriesConfigObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_array() {
        let entries: SeriesConfigArray = serde_json::from_value(serde_json::json!([
            "/guide/intro",
            { "text": "Group", "children": ["/guide/a", { "text": "B", "link": "/guide/b.html" }] },
            { "text": "Ext", "link": "https://example.com" }
        ]))
        .unwrap();

        assert_eq!(entries[0], SeriesEntry::from("/guide/intro"));
        match &entries[1] {
            SeriesEntry::Group(group) => {
                assert_eq!(group.text, "Group");
                assert_eq!(group.children[0], SeriesChild::from("/guide/a"));
                assert_eq!(
                    group.children[1],
                    SeriesChild::Item(serde_json::json!({ "text": "B", "link": "/guide/b.html" }))
                );
            }
            other => panic!("expected group, got {:?}", other),
        }
        assert_eq!(entries[2], SeriesEntry::Link(NavLink::new("Ext", "https://example.com")));
    }

    #[test]
    fn test_parse_object_from_toml() {
        let config: SeriesConfig = toml::from_str::<BTreeMap<String, SeriesConfig>>(
            r#"
            [series]
            "/guide/" = ["intro", { text = "Advanced", collapsible = true, children = ["a", "b"] }]
            "/api/" = ["overview"]
            "#,
        )
        .unwrap()
        .remove("series")
        .unwrap();

        let object = config.as_object().expect("object form");
        assert_eq!(object.len(), 2);
        assert_eq!(object["/api/"], vec![SeriesEntry::from("overview")]);
    }

    #[test]
    fn test_non_object_shapes() {
        let array: SeriesConfig = serde_json::from_value(serde_json::json!(["a", "b"])).unwrap();
        assert!(matches!(array, SeriesConfig::Array(_)));

        let number: SeriesConfig = serde_json::from_value(serde_json::json!(42)).unwrap();
        assert!(matches!(number, SeriesConfig::Unsupported(_)));

        let flag: SeriesConfig = serde_json::from_value(serde_json::json!(true)).unwrap();
        assert!(matches!(flag, SeriesConfig::Unsupported(_)));
    }

    #[test]
    fn test_mapping_with_non_array_value_is_rejected() {
        let result: Result<SeriesConfig, _> =
            serde_json::from_value(serde_json::json!({ "/a/": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_group_without_children_is_rejected() {
        let entry: Result<SeriesEntry, _> =
            serde_json::from_value(serde_json::json!({ "text": "Broken" }));
        assert!(entry.is_err());

        let config: Result<SeriesConfig, _> = serde_json::from_value(serde_json::json!({
            "/guide/": [{ "text": "Broken" }]
        }));
        assert!(config.is_err());
    }

    #[test]
    fn test_merge_explicit_wins_per_key() {
        let mut auto = SeriesConfigObject::new();
        auto.insert("/guide/".into(), vec!["auto".into()]);
        auto.insert("/api/".into(), vec!["auto-api".into()]);

        let mut explicit = SeriesConfigObject::new();
        explicit.insert("/guide/".into(), vec!["explicit".into()]);

        let merged = SeriesConfig::merge_over(&auto, Some(&SeriesConfig::Object(explicit)));
        assert_eq!(merged["/guide/"], vec![SeriesEntry::from("explicit")]);
        assert_eq!(merged["/api/"], vec![SeriesEntry::from("auto-api")]);
    }

    #[test]
    fn test_merge_without_explicit_uses_auto() {
        let mut auto = SeriesConfigObject::new();
        auto.insert("/guide/".into(), vec!["a".into()]);
        assert_eq!(SeriesConfig::merge_over(&auto, None), auto);
    }

    #[test]
    fn test_merge_with_non_mapping_keeps_auto() {
        let mut auto = SeriesConfigObject::new();
        auto.insert("/guide/".into(), vec!["a".into()]);

        let array = SeriesConfig::Array(vec!["x".into()]);
        assert_eq!(SeriesConfig::merge_over(&auto, Some(&array)), auto);

        let scalar = SeriesConfig::Unsupported(serde_json::json!(42));
        assert_eq!(SeriesConfig::merge_over(&auto, Some(&scalar)), auto);
    }

    #[test]
    fn test_nested_group_child_is_kept_raw() {
        let config: SeriesConfig = serde_json::from_value(serde_json::json!({
            "/g/": [{ "text": "G", "children": [{ "text": "Sub", "children": ["x"] }] }]
        }))
        .unwrap();

        let object = config.as_object().expect("object form");
        match &object["/g/"][0] {
            SeriesEntry::Group(group) => assert_eq!(
                group.children,
                vec![SeriesChild::Item(serde_json::json!({ "text": "Sub", "children": ["x"] }))]
            ),
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_group_keeps_unknown_fields() {
        let entry: SeriesEntry = serde_json::from_value(serde_json::json!({
            "text": "G", "target": "_blank", "rel": "noopener", "icon": "book", "children": ["a"]
        }))
        .unwrap();

        match entry {
            SeriesEntry::Group(group) => {
                assert_eq!(group.extra.len(), 3);
                assert_eq!(group.extra["icon"], "book");
                assert_eq!(group.children, vec![SeriesChild::from("a")]);
            }
            other => panic!("expected group, got {:?}", other),
        }
    }
}
