use serde::{Serialize, Serializer};
use synckit::{ClientError, Draft};

use crate::contract::model::{Product, User};

/// Raw price input as typed into the form. An unparsable value is kept
/// verbatim (so the UI can echo it back) and blocks submit instead of
/// propagating a NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceInput {
    Value(f64),
    Invalid(String),
}

impl Default for PriceInput {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl PriceInput {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) => Self::Value(v),
            Err(_) => Self::Invalid(raw.to_string()),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Invalid(_) => None,
        }
    }
}

impl Serialize for PriceInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Invalid input never reaches the wire: validate() refuses
            // the submit first. Serializing it anyway is a bug.
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::Invalid(raw) => Err(serde::ser::Error::custom(format!(
                "unparsable price input: {raw:?}"
            ))),
        }
    }
}

/// Typed input-change event for the product form.
#[derive(Debug, Clone)]
pub enum ProductField {
    Name(String),
    Description(String),
    /// Raw text from the price input; parsed on apply.
    Price(String),
    Image(String),
}

/// Working copy of a product while the add/edit modal is open. Carries
/// no identity; the edit session tracks the target id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: PriceInput,
    pub image: String,
}

impl Draft<Product> for ProductDraft {
    type Field = ProductField;

    fn from_item(item: &Product) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: PriceInput::Value(item.price),
            image: item.image.clone(),
        }
    }

    fn apply(&mut self, field: ProductField) {
        match field {
            ProductField::Name(v) => self.name = v,
            ProductField::Description(v) => self.description = v,
            ProductField::Price(raw) => self.price = PriceInput::parse(&raw),
            ProductField::Image(v) => self.image = v,
        }
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::validation("product name must not be empty"));
        }
        match &self.price {
            PriceInput::Invalid(raw) => Err(ClientError::validation(format!(
                "price is not a number: {raw:?}"
            ))),
            PriceInput::Value(v) if !v.is_finite() || *v < 0.0 => Err(ClientError::validation(
                "price must be a non-negative finite number",
            )),
            PriceInput::Value(_) => Ok(()),
        }
    }
}

/// Typed input-change event for the user form.
#[derive(Debug, Clone)]
pub enum UserField {
    Name(String),
    Email(String),
}

/// Working copy of a user while the edit modal is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl Draft<User> for UserDraft {
    type Field = UserField;

    fn from_item(item: &User) -> Self {
        Self {
            name: item.name.clone(),
            email: item.email.clone(),
        }
    }

    fn apply(&mut self, field: UserField) {
        match field {
            UserField::Name(v) => self.name = v,
            UserField::Email(v) => self.email = v,
        }
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::validation("user name must not be empty"));
        }
        if !is_email(&self.email) {
            return Err(ClientError::validation(format!(
                "not an email address: {:?}",
                self.email
            )));
        }
        Ok(())
    }
}

/// Syntactic check only: one `@`, non-empty parts, no whitespace.
/// Deliverability is the backend's problem.
fn is_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_keystrokes_parse_or_mark_invalid() {
        assert_eq!(PriceInput::parse("7.50"), PriceInput::Value(7.5));
        assert_eq!(PriceInput::parse(" 12 "), PriceInput::Value(12.0));
        assert_eq!(
            PriceInput::parse("7,50"),
            PriceInput::Invalid("7,50".to_string())
        );
    }

    #[test]
    fn unparsable_price_blocks_submit_without_crashing() {
        let mut draft = ProductDraft::default();
        draft.apply(ProductField::Name("Aspirin".to_string()));
        draft.apply(ProductField::Price("abc".to_string()));
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, ClientError::Validation { .. }));
    }

    #[test]
    fn negative_price_is_refused() {
        let mut draft = ProductDraft::default();
        draft.apply(ProductField::Name("Aspirin".to_string()));
        draft.apply(ProductField::Price("-1".to_string()));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn non_finite_price_is_refused() {
        let mut draft = ProductDraft::default();
        draft.apply(ProductField::Name("Aspirin".to_string()));
        draft.apply(ProductField::Price("inf".to_string()));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn valid_product_draft_passes() {
        let mut draft = ProductDraft::default();
        draft.apply(ProductField::Name("Aspirin".to_string()));
        draft.apply(ProductField::Price("5.00".to_string()));
        draft.apply(ProductField::Description("painkiller".to_string()));
        draft.apply(ProductField::Image("https://cdn/aspirin.png".to_string()));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn product_draft_deep_copies_the_item() {
        let item = Product {
            id: 1,
            name: "Paracetamol".to_string(),
            description: "".to_string(),
            price: 5.0,
            image: "".to_string(),
        };
        let mut draft = ProductDraft::from_item(&item);
        draft.apply(ProductField::Price("7.50".to_string()));
        // The source item is untouched by draft edits.
        assert_eq!(item.price, 5.0);
        assert_eq!(draft.price, PriceInput::Value(7.5));
    }

    #[test]
    fn draft_serializes_price_as_a_number() {
        let mut draft = ProductDraft::default();
        draft.apply(ProductField::Name("Aspirin".to_string()));
        draft.apply(ProductField::Price("5.5".to_string()));
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["price"], serde_json::json!(5.5));
        assert!(json.get("id").is_none());
    }

    #[test]
    fn email_syntax_check() {
        assert!(is_email("ana@example.com"));
        assert!(!is_email("ana"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("ana@"));
        assert!(!is_email("ana maria@example.com"));
        assert!(!is_email("ana@@example.com"));
    }

    #[test]
    fn user_draft_validates_email() {
        let mut draft = UserDraft::default();
        draft.apply(UserField::Name("Ana".to_string()));
        draft.apply(UserField::Email("not-an-email".to_string()));
        assert!(draft.validate().is_err());
        draft.apply(UserField::Email("ana@example.com".to_string()));
        assert!(draft.validate().is_ok());
    }
}
