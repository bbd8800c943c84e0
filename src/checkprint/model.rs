use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Self {
            text: text.into(),
            completed,
        }
    }

    pub fn open(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn done(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

impl<S: Into<String>> From<(S, bool)> for ChecklistItem {
    fn from((text, completed): (S, bool)) -> Self {
        Self::new(text, completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    // Order is the print order
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn new(name: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            items,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_defaults_to_false() {
        let item: ChecklistItem = serde_json::from_str(r#"{"text": "milk"}"#).unwrap();
        assert_eq!(item, ChecklistItem::open("milk"));
    }

    #[test]
    fn checklist_fills_missing_id_and_items() {
        let list: Checklist = serde_json::from_str(r#"{"name": "Groceries"}"#).unwrap();
        assert_eq!(list.name, "Groceries");
        assert!(list.items.is_empty());
        assert!(!list.id.is_nil());
    }

    #[test]
    fn items_keep_file_order() {
        let json = r#"{
            "name": "Trip",
            "items": [
                {"text": "passport", "completed": true},
                {"text": "tickets"},
                {"text": "charger", "completed": false}
            ]
        }"#;
        let list: Checklist = serde_json::from_str(json).unwrap();
        let texts: Vec<_> = list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["passport", "tickets", "charger"]);
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn builds_from_tuples() {
        let item: ChecklistItem = ("Item B", true).into();
        assert_eq!(item, ChecklistItem::done("Item B"));
    }
}
