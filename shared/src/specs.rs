//! 技术参数列表
//!
//! 后端以 JSON 对象存储 `label -> value`，前端需要可编辑且顺序稳定的结构，
//! 因此用有序键值列表表示，序列化时仍输出为 JSON 对象。

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecList(Vec<(String, String)>);

impl SpecList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入参数；标签已存在时覆盖其值并保持原位置
    ///
    /// 标签或值为空（去除空白后）时不做任何修改，返回 `false`。
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) -> bool {
        let label = label.into().trim().to_string();
        let value = value.into().trim().to_string();
        if label.is_empty() || value.is_empty() {
            return false;
        }

        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
        true
    }

    /// 按标签删除，返回被删除的值
    pub fn remove(&mut self, label: &str) -> Option<String> {
        let pos = self.0.iter().position(|(l, _)| l == label)?;
        Some(self.0.remove(pos).1)
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SpecList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = SpecList::new();
        for (label, value) in iter {
            list.insert(label, value);
        }
        list
    }
}

impl Serialize for SpecList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpecList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = SpecList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of specification labels to values")
            }

            // 旧数据中 specifications 可能为 null
            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(SpecList::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, String>()? {
                    entries.push((label, value));
                }
                Ok(SpecList(entries))
            }
        }

        deserializer.deserialize_any(SpecVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut specs = SpecList::new();
        assert!(specs.insert("Whiteness", "92%"));
        assert!(specs.insert("Mesh", "325"));
        assert!(specs.insert("Whiteness", "94%"));

        let entries: Vec<_> = specs.iter().collect();
        assert_eq!(entries, [("Whiteness", "94%"), ("Mesh", "325")]);
    }

    #[test]
    fn test_insert_rejects_blank_entries() {
        let mut specs = SpecList::new();
        assert!(!specs.insert("", "1"));
        assert!(!specs.insert("Mesh", "   "));
        assert!(specs.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut specs: SpecList = [("SiO2", "99.5%"), ("Fe2O3", "0.01%")].into_iter().collect();
        assert_eq!(specs.remove("SiO2").as_deref(), Some("99.5%"));
        assert_eq!(specs.remove("SiO2"), None);
        assert_eq!(specs.len(), 1);
    }

    #[test]
    fn test_serializes_as_object_in_document_order() {
        let specs: SpecList = serde_json::from_str(r#"{"Zeta":"1","Alpha":"2"}"#).unwrap();
        let labels: Vec<_> = specs.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Zeta", "Alpha"]);
        assert_eq!(
            serde_json::to_value(&specs).unwrap(),
            json!({ "Zeta": "1", "Alpha": "2" })
        );
    }

    #[test]
    fn test_null_decodes_to_empty() {
        let specs: SpecList = serde_json::from_value(json!(null)).unwrap();
        assert!(specs.is_empty());
    }
}
