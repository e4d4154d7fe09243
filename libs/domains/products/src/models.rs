use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Product domain record.
///
/// Identity is absent until the store assigns it on insert and is never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub img_url: Option<String>,
    pub rating: Option<f64>,
    pub specifications: Option<String>,
}

impl Product {
    /// Overwrite the mutable fields from a transfer object, keeping identity
    pub fn apply(&mut self, dto: &ProductDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.price = dto.price;
        self.img_url = dto.img_url.clone();
        self.rating = dto.rating;
        self.specifications = dto.specifications.clone();
    }
}

// Identity-based equality: records without identity all compare equal;
// assigned identities compare by value regardless of the other fields.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Absent identity hashes to a constant
        self.id.unwrap_or(0).hash(state);
    }
}

/// Category domain record
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.unwrap_or(0).hash(state);
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Transfer object for products.
///
/// The identity is ignored on create (the store assigns it) and taken from
/// the path on update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductDto {
    /// Assigned by the store
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(
        length(min = 3, max = 80, message = "Name must have 3 to 80 characters"),
        custom(function = not_blank)
    )]
    pub name: String,
    #[validate(
        length(min = 10, message = "Description must have at least 10 characters"),
        custom(function = not_blank)
    )]
    pub description: String,
    /// Must be strictly positive when present
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: Option<f64>,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub specifications: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            img_url: product.img_url,
            rating: product.rating,
            specifications: product.specifications,
        }
    }
}

// Build a fresh record from client-supplied fields; identity stays absent
// until the store assigns it.
impl From<&ProductDto> for Product {
    fn from(dto: &ProductDto) -> Self {
        Self {
            id: None,
            name: dto.name.clone(),
            description: dto.description.clone(),
            price: dto.price,
            img_url: dto.img_url.clone(),
            rating: dto.rating,
            specifications: dto.specifications.clone(),
        }
    }
}

/// Transfer object for categories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: Option<i64>,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn product(id: Option<i64>, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price: Some(10.0),
            img_url: None,
            rating: Some(4.0),
            specifications: None,
        }
    }

    fn hash_of(product: &Product) -> u64 {
        let mut hasher = DefaultHasher::new();
        product.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_records_without_identity_are_equal() {
        let a = product(None, "A");
        let b = product(None, "B");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_follows_identity_only() {
        let a = product(Some(5), "PC");
        let b = product(Some(5), "Renamed PC");
        let c = product(Some(6), "PC");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_assigned_vs_absent_identity_differ() {
        assert_ne!(product(Some(1), "A"), product(None, "A"));
    }

    #[test]
    fn test_category_identity_equality() {
        let a = Category { id: None, name: "Books".to_string() };
        let b = Category { id: None, name: "Electronics".to_string() };
        assert_eq!(a, b);

        let c = Category { id: Some(10), name: "Books".to_string() };
        let d = Category { id: Some(10), name: "Books".to_string() };
        assert_eq!(c, d);
        assert_ne!(a, c);
    }

    #[test]
    fn test_apply_overwrites_mutable_fields_keeps_identity() {
        let mut record = product(Some(5), "Old");
        let dto = ProductDto {
            id: None,
            name: "Updated".to_string(),
            description: "Updated description".to_string(),
            price: Some(55.0),
            img_url: Some("http://img/u".to_string()),
            rating: Some(4.2),
            specifications: Some("specU".to_string()),
        };

        record.apply(&dto);

        assert_eq!(record.id, Some(5));
        assert_eq!(record.name, "Updated");
        assert_eq!(record.description, "Updated description");
        assert_eq!(record.price, Some(55.0));
    }

    #[test]
    fn test_valid_dto_passes_validation() {
        let dto = ProductDto {
            id: None,
            name: "Macbook Pro".to_string(),
            description: "Description long enough".to_string(),
            price: Some(1250.0),
            img_url: None,
            rating: None,
            specifications: None,
        };

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_short_name_fails_validation() {
        let dto = ProductDto {
            id: None,
            name: "A".to_string(),
            description: "Description long enough".to_string(),
            price: Some(10.0),
            img_url: None,
            rating: None,
            specifications: None,
        };

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let dto = ProductDto {
            id: None,
            name: "    ".to_string(),
            description: "Description long enough".to_string(),
            price: Some(10.0),
            img_url: None,
            rating: None,
            specifications: None,
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_short_description_fails_validation() {
        let dto = ProductDto {
            id: None,
            name: "Valid name".to_string(),
            description: "short".to_string(),
            price: Some(10.0),
            img_url: None,
            rating: None,
            specifications: None,
        };

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let dto = ProductDto {
            id: None,
            name: "Valid name".to_string(),
            description: "Description long enough".to_string(),
            price: Some(-5.0),
            img_url: None,
            rating: None,
            specifications: None,
        };

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_zero_price_fails_validation() {
        let dto = ProductDto {
            id: None,
            name: "Valid name".to_string(),
            description: "Description long enough".to_string(),
            price: Some(0.0),
            img_url: None,
            rating: None,
            specifications: None,
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_absent_price_passes_validation() {
        let dto = ProductDto {
            id: None,
            name: "Valid name".to_string(),
            description: "Description long enough".to_string(),
            price: None,
            img_url: None,
            rating: None,
            specifications: None,
        };

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_round_trip_preserves_fields() {
        let record = product(Some(3), "Macbook Pro");
        let dto = ProductDto::from(record.clone());

        assert_eq!(dto.id, Some(3));
        assert_eq!(dto.name, record.name);
        assert_eq!(dto.description, record.description);
        assert_eq!(dto.price, record.price);
    }

    #[test]
    fn test_record_from_dto_has_no_identity() {
        let dto = ProductDto {
            id: Some(99),
            name: "New".to_string(),
            description: "New description".to_string(),
            price: Some(99.99),
            img_url: Some("img".to_string()),
            rating: Some(4.5),
            specifications: Some("specs".to_string()),
        };

        let record = Product::from(&dto);
        assert_eq!(record.id, None);
        assert_eq!(record.name, "New");
    }
}
