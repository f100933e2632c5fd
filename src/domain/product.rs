use serde::{Deserialize, Serialize};

use crate::error::{require, require_non_empty, ValidationError};

/// A photo product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_description: Option<String>,
    pub likes: i64,
    pub urls: ProductUrls,
    pub links: ProductLinks,
    pub user: ProductUser,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUrls {
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
}

/// The photographer credited for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUser {
    pub id: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
}

impl Tag {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

/// Fields supplied by the caller when creating a product.
///
/// Required fields are `Option` here so that a missing value surfaces as a
/// [`ValidationError`] naming the field rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub urls: Option<ProductUrls>,
    #[serde(default)]
    pub links: Option<ProductLinks>,
    #[serde(default)]
    pub user: Option<ProductUser>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Allow-listed changes for [`Product`]. `None` leaves a field untouched; the
/// id is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub alt_description: Option<Option<String>>,
    pub likes: Option<i64>,
    pub urls: Option<ProductUrls>,
    pub links: Option<ProductLinks>,
    pub user: Option<ProductUser>,
    pub tags: Option<Vec<Tag>>,
}

/// Find filter for products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Exact match against any tag title
    pub tag: Option<String>,
}

impl Product {
    /// Builds a product from caller fields, enforcing required fields.
    pub fn from_fields(id: String, fields: NewProduct) -> Result<Self, ValidationError> {
        let product = Self {
            id,
            description: fields.description,
            alt_description: fields.alt_description,
            likes: require("likes", fields.likes)?,
            urls: require("urls", fields.urls)?,
            links: require("links", fields.links)?,
            user: require("user", fields.user)?,
            tags: fields.tags,
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks the nested required strings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("urls.regular", &self.urls.regular)?;
        require_non_empty("urls.small", &self.urls.small)?;
        require_non_empty("urls.thumb", &self.urls.thumb)?;
        require_non_empty("links.self", &self.links.self_link)?;
        require_non_empty("links.html", &self.links.html)?;
        require_non_empty("user.id", &self.user.id)?;
        require_non_empty("user.first_name", &self.user.first_name)?;
        require_non_empty("user.username", &self.user.username)?;
        for (index, tag) in self.tags.iter().enumerate() {
            require_non_empty(&format!("tags.{index}.title"), &tag.title)?;
        }
        Ok(())
    }

    /// Overwrites every field present in the patch, then re-validates.
    pub fn apply(&mut self, patch: ProductPatch) -> Result<(), ValidationError> {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(alt_description) = patch.alt_description {
            self.alt_description = alt_description;
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
        if let Some(urls) = patch.urls {
            self.urls = urls;
        }
        if let Some(links) = patch.links {
            self.links = links;
        }
        if let Some(user) = patch.user {
            self.user = user;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.validate()
    }

    pub fn has_tag(&self, title: &str) -> bool {
        self.tags.iter().any(|tag| tag.title == title)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn new_product(likes: i64, tags: &[&str]) -> NewProduct {
        NewProduct {
            description: Some("A quiet lake at dawn".to_string()),
            alt_description: None,
            likes: Some(likes),
            urls: Some(ProductUrls {
                regular: "https://images.example.com/lake?w=1080".to_string(),
                small: "https://images.example.com/lake?w=400".to_string(),
                thumb: "https://images.example.com/lake?w=200".to_string(),
            }),
            links: Some(ProductLinks {
                self_link: "https://api.example.com/photos/lake".to_string(),
                html: "https://example.com/photos/lake".to_string(),
            }),
            user: Some(ProductUser {
                id: "u-42".to_string(),
                first_name: "Ada".to_string(),
                last_name: None,
                portfolio_url: None,
                username: "ada".to_string(),
            }),
            tags: tags.iter().map(|title| Tag::new(*title)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::new_product;
    use super::*;

    #[test]
    fn test_from_fields_keeps_input() {
        let fields = new_product(7, &["nature", "water"]);
        let product = Product::from_fields("p1".to_string(), fields.clone()).unwrap();

        assert_eq!(product.id, "p1");
        assert_eq!(product.likes, 7);
        assert_eq!(product.description, fields.description);
        assert_eq!(Some(product.urls), fields.urls);
        assert_eq!(product.tags, vec![Tag::new("nature"), Tag::new("water")]);
    }

    #[test]
    fn test_missing_likes_is_rejected() {
        let fields = NewProduct { likes: None, ..new_product(1, &[]) };
        let err = Product::from_fields("p1".to_string(), fields).unwrap_err();
        assert_eq!(err.field, "likes");
    }

    #[test]
    fn test_empty_nested_string_is_rejected() {
        let mut fields = new_product(1, &[]);
        if let Some(user) = fields.user.as_mut() {
            user.username.clear();
        }
        let err = Product::from_fields("p1".to_string(), fields).unwrap_err();
        assert_eq!(err.field, "user.username");
    }

    #[test]
    fn test_empty_tag_title_is_rejected() {
        let fields = new_product(1, &["ok", ""]);
        let err = Product::from_fields("p1".to_string(), fields).unwrap_err();
        assert_eq!(err.field, "tags.1.title");
    }

    #[test]
    fn test_apply_changes_only_patched_fields() {
        let mut product = Product::from_fields("p1".to_string(), new_product(1, &["a"])).unwrap();
        let before = product.clone();

        product.apply(ProductPatch { likes: Some(5), ..Default::default() }).unwrap();

        assert_eq!(product.likes, 5);
        assert_eq!(Product { likes: before.likes, ..product }, before);
    }

    #[test]
    fn test_apply_can_clear_optional_text() {
        let mut product = Product::from_fields("p1".to_string(), new_product(1, &[])).unwrap();
        product
            .apply(ProductPatch { description: Some(None), ..Default::default() })
            .unwrap();
        assert!(product.description.is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_to_validation_error() {
        let fields: NewProduct = serde_json::from_value(serde_json::json!({
            "description": "no likes here",
            "tags": [{ "title": "x" }]
        }))
        .unwrap();
        let err = Product::from_fields("p1".to_string(), fields).unwrap_err();
        assert_eq!(err.field, "likes");
    }

    #[test]
    fn test_serializes_document_shape() {
        let product = Product::from_fields("p1".to_string(), new_product(3, &["sky"])).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["links"]["self"], "https://api.example.com/photos/lake");
        assert_eq!(json["user"]["first_name"], "Ada");
        assert_eq!(json["tags"][0]["title"], "sky");
        assert!(json.get("alt_description").is_none());
    }
}
