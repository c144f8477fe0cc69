//! Checklist and item records.
//!
//! # Invariants
//! - Checklist name uniqueness is enforced by storage; any string is accepted.
//! - A freshly created item is unchecked.

use serde::Serialize;

/// Storage-assigned checklist identifier.
pub type ChecklistId = i64;

/// Storage-assigned item identifier, global across all checklists.
pub type ItemId = i64;

/// Checkable entry owned by a checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Owning checklist, by name.
    pub checklist_name: String,
    pub name: String,
    pub checked: bool,
}

impl Item {
    /// Projects the item onto its list-view shape.
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            name: self.name.clone(),
            checked: self.checked,
        }
    }
}

/// Item shape returned by `GET /lists/{name}/items`.
///
/// Field names are PascalCase on the wire (`Name`, `Checked`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemSummary {
    pub name: String,
    pub checked: bool,
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn item_summary_serializes_with_pascal_case_fields() {
        let item = Item {
            id: 7,
            checklist_name: "Groceries".to_string(),
            name: "Milk".to_string(),
            checked: true,
        };

        let json = serde_json::to_value(item.summary()).unwrap();
        assert_eq!(json, serde_json::json!({ "Name": "Milk", "Checked": true }));
    }
}
