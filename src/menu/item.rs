// Menu item model
// Contains the persisted MenuItem shape and the request-side shapes
// (creation payload without an id, partial patch for updates)

use serde::{Deserialize, Serialize};

/// Unique identifier for a menu item
pub type ItemId = u64;

/// A single priced entry on the menu
///
/// `id` is assigned by the service at creation time and never changes
/// afterwards. `cost` is a display string ("5 $") rather than a number,
/// matching the persisted format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Unique identifier, assigned sequentially by the service
    pub id: ItemId,
    /// Display name of the course
    pub title: String,
    /// Short description shown alongside the title
    pub description: String,
    /// String-formatted price, e.g. "5 $" (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

/// Creation payload: a menu item before it has an id
#[derive(Debug, Clone, Deserialize)]
pub struct NewMenuItem {
    /// Display name of the course
    pub title: String,
    /// Short description shown alongside the title
    pub description: String,
    /// String-formatted price (optional)
    pub cost: Option<String>,
}

impl NewMenuItem {
    /// Turn the payload into a stored item with the given id
    pub fn into_item(self, id: ItemId) -> MenuItem {
        MenuItem {
            id,
            title: self.title,
            description: self.description,
            cost: self.cost,
        }
    }
}

/// Partial update for an existing item
///
/// Only the fields present in the request body are applied. There is
/// deliberately no `id` field here: the id from the request path always
/// wins, so an id in the body is silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemPatch {
    /// New title, if changing
    pub title: Option<String>,
    /// New description, if changing
    pub description: Option<String>,
    /// New cost, if changing
    pub cost: Option<String>,
}

impl MenuItemPatch {
    /// Merge the provided fields onto an existing item in place
    ///
    /// The item's id is untouched.
    pub fn apply_to(self, item: &mut MenuItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(cost) = self.cost {
            item.cost = Some(cost);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup() -> MenuItem {
        MenuItem {
            id: 1,
            title: "Soup".to_string(),
            description: "Hot".to_string(),
            cost: Some("5 $".to_string()),
        }
    }

    #[test]
    fn test_patch_merges_only_provided_fields() {
        let mut item = soup();
        let patch = MenuItemPatch {
            cost: Some("6 $".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut item);

        assert_eq!(item.id, 1);
        assert_eq!(item.title, "Soup");
        assert_eq!(item.description, "Hot");
        assert_eq!(item.cost, Some("6 $".to_string()));
    }

    #[test]
    fn test_patch_body_id_is_ignored() {
        // An id in the request body must not reach the patch at all
        let json = r#"{"id": 999, "title": "Stew"}"#;
        let patch: MenuItemPatch = serde_json::from_str(json).unwrap();

        let mut item = soup();
        patch.apply_to(&mut item);

        assert_eq!(item.id, 1);
        assert_eq!(item.title, "Stew");
    }

    #[test]
    fn test_missing_cost_is_omitted_from_json() {
        let item = MenuItem {
            id: 2,
            title: "Salad".to_string(),
            description: "Fresh".to_string(),
            cost: None,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("cost"));
    }

    #[test]
    fn test_new_item_into_item() {
        let new = NewMenuItem {
            title: "Salad".to_string(),
            description: "Fresh".to_string(),
            cost: Some("4 $".to_string()),
        };

        let item = new.into_item(2);
        assert_eq!(item.id, 2);
        assert_eq!(item.title, "Salad");
    }
}
