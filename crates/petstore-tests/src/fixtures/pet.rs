//! Pet payloads.

use serde::Serialize;

/// Pet category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// Free-form pet tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// A pet as accepted by `POST /pet` and `PUT /pet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: u64,
    pub category: Category,
    pub name: String,
    pub photo_urls: Vec<String>,
    pub tags: Vec<Tag>,
    pub status: String,
}

impl Pet {
    /// The pet added by the add-pet scenario.
    pub fn seed() -> Self {
        Self {
            id: 1677799,
            category: Category {
                id: 898888,
                name: "category".to_string(),
            },
            name: "new_dog".to_string(),
            photo_urls: vec!["string".to_string()],
            tags: vec![Tag {
                id: 677,
                name: "someName".to_string(),
            }],
            status: "available".to_string(),
        }
    }

    /// The seed pet with the name and category label changed.
    pub fn seed_updated() -> Self {
        let mut pet = Self::seed();
        pet.category.name = "string".to_string();
        pet.name = "MyDogieNameUpdated".to_string();
        pet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_pet_matches_fixture_json() {
        let expected: serde_json::Value = serde_json::from_str(
            r#"{"id":1677799,"category":{"id":898888,"name":"category"},"name":"new_dog","photoUrls":["string"],"tags":[{"id":677,"name":"someName"}],"status":"available"}"#,
        )
        .unwrap();

        assert_eq!(serde_json::to_value(Pet::seed()).unwrap(), expected);
    }

    #[test]
    fn test_seed_updated_keeps_id() {
        let pet = Pet::seed_updated();

        assert_eq!(pet.id, Pet::seed().id);
        assert_eq!(pet.category.id, 898888);
        assert_eq!(pet.category.name, "string");
        assert_eq!(pet.name, "MyDogieNameUpdated");
    }
}
