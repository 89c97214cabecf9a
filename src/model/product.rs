use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::form::Field;

/// A product as returned by the service.
///
/// The service is loose about scalar types (ids and prices arrive as
/// numbers, `like` may be `null`, `disable` may be missing), so every
/// scalar is decoded into the text the form displays. Only `id` is
/// required, and the body must be a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub inventory: String,
    pub available: bool,
    pub created_date: String,
    pub modified_date: String,
    pub like: String,
    pub disable: bool,
}

impl TryFrom<Map<String, Value>> for ProductRecord {
    type Error = String;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = object
            .remove("id")
            .ok_or_else(|| "missing field `id`".to_string())?;
        let mut take = |key: &str| object.remove(key).unwrap_or(Value::Null);

        Ok(Self {
            id: text("id", id)?,
            name: text("name", take("name"))?,
            price: text("price", take("price"))?,
            category: text("category", take("category"))?,
            inventory: text("inventory", take("inventory"))?,
            available: flag(take("available")),
            created_date: text("created_date", take("created_date"))?,
            modified_date: text("modified_date", take("modified_date"))?,
            like: text("like", take("like"))?,
            disable: flag(take("disable")),
        })
    }
}

impl ProductRecord {
    /// Returns the value for one form field.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.clone(),
            Field::Name => self.name.clone(),
            Field::Price => self.price.clone(),
            Field::Category => self.category.clone(),
            Field::Inventory => self.inventory.clone(),
            Field::Available => self.available.to_string(),
            Field::CreatedDate => self.created_date.clone(),
            Field::ModifiedDate => self.modified_date.clone(),
            Field::Like => self.like.clone(),
            Field::Disable => self.disable.to_string(),
        }
    }

    /// Returns every field's display text in [`Field::ALL`] order.
    pub fn to_values(&self) -> [String; Field::COUNT] {
        Field::ALL.map(|field| self.value(field))
    }
}

/// JSON body for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductBody {
    pub name: String,
    pub price: String,
    pub category: String,
    pub inventory: String,
    pub available: bool,
    pub created_date: String,
    pub modified_date: String,
    pub like: String,
    pub disable: bool,
}

/// Failure body returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Largest magnitude below which every integral `f64` is exact.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Converts any JSON scalar into its display text. `null` becomes empty.
///
/// Integral floats drop the fraction (`12.0` shows as `12`).
fn text(key: &str, value: Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < EXACT_INTEGER_LIMIT => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        }),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!(
            "field `{key}`: expected a scalar value, found {other}"
        )),
    }
}

/// Loose equality with `true`: `true`, `1` and `"1"` are set, anything else is not.
fn flag(value: Value) -> bool {
    match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s.trim().parse::<f64>().ok() == Some(1.0),
        _ => false,
    }
}
