use std::fmt;

use super::form::{Field, ProductForm};

/// Filters for listing products.
///
/// Rendered (via [`fmt::Display`]) as the query string of
/// `GET /api/products?…`: `name`, `category`, then `available`, each term
/// only when present, joined by `&`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl SearchQuery {
    /// Reads the name, category and available inputs; every other field is ignored.
    ///
    /// Blank text filters are dropped. `available` is kept only when it is
    /// literally `"true"` or `"false"`.
    pub fn from_form(form: &ProductForm) -> Self {
        let non_empty = |field: Field| {
            let value = form.value(field);
            (!value.is_empty()).then(|| value.to_string())
        };
        let available = match form.value(Field::Available) {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
        Self {
            name: non_empty(Field::Name),
            category: non_empty(Field::Category),
            available,
        }
    }

    /// Returns `true` when no filter is set and the request lists everything.
    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.available.is_none()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<String> = Vec::with_capacity(3);
        if let Some(name) = &self.name {
            terms.push(format!("name={}", urlencoding::encode(name)));
        }
        if let Some(category) = &self.category {
            terms.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(available) = self.available {
            terms.push(format!("available={available}"));
        }
        f.write_str(&terms.join("&"))
    }
}
