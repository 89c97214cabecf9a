use super::product::{ProductBody, ProductRecord};

/// One input of the product form.
///
/// Variants are declared in display order, which is also the column order
/// of the search results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Price,
    Category,
    Inventory,
    Available,
    CreatedDate,
    ModifiedDate,
    Like,
    Disable,
}

impl Field {
    /// Number of form fields.
    pub const COUNT: usize = 10;

    /// All fields in display order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Id,
        Field::Name,
        Field::Price,
        Field::Category,
        Field::Inventory,
        Field::Available,
        Field::CreatedDate,
        Field::ModifiedDate,
        Field::Like,
        Field::Disable,
    ];

    /// Position of this field in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the field at `index` in display order, if any.
    pub fn from_index(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }

    /// Label shown next to the input and used as the results column header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Price => "Price",
            Self::Category => "Category",
            Self::Inventory => "Inventory",
            Self::Available => "Available",
            Self::CreatedDate => "Created_date",
            Self::ModifiedDate => "Modified_date",
            Self::Like => "like",
            Self::Disable => "disable",
        }
    }

    /// Stable element identifier of the input (`product_<name>`).
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Id => "product_id",
            Self::Name => "product_name",
            Self::Price => "product_price",
            Self::Category => "product_category",
            Self::Inventory => "product_inventory",
            Self::Available => "product_available",
            Self::CreatedDate => "product_created_date",
            Self::ModifiedDate => "product_modified_date",
            Self::Like => "product_like",
            Self::Disable => "product_disable",
        }
    }

    /// Whether the field holds a `"true"`/`"false"` flag.
    pub fn is_flag(self) -> bool {
        matches!(self, Self::Available | Self::Disable)
    }
}

/// Transient projection of a product onto the visible inputs.
///
/// Every value is kept as text exactly as typed or as received. Flag
/// fields hold `"true"`, `"false"`, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    values: [String; Field::COUNT],
}

impl ProductForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current text of `field`.
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Replaces the text of `field`.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Appends a character to `field`.
    pub fn push_char(&mut self, field: Field, ch: char) {
        self.values[field.index()].push(ch);
    }

    /// Removes the last character of `field`, if any.
    pub fn pop_char(&mut self, field: Field) {
        self.values[field.index()].pop();
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Returns `true` if every field is empty.
    pub fn is_cleared(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Overwrites every field (id included) from a server record.
    pub fn populate(&mut self, record: &ProductRecord) {
        self.values = record.to_values();
    }

    /// Returns all values in display order.
    pub fn values(&self) -> &[String; Field::COUNT] {
        &self.values
    }

    /// Returns the id field. Empty means no id was provided.
    pub fn id(&self) -> &str {
        self.value(Field::Id)
    }

    /// Builds the create/update request body from everything except the id.
    ///
    /// Flags are coerced to booleans by literal comparison with `"true"`.
    pub fn to_body(&self) -> ProductBody {
        ProductBody {
            name: self.value(Field::Name).to_string(),
            price: self.value(Field::Price).to_string(),
            category: self.value(Field::Category).to_string(),
            inventory: self.value(Field::Inventory).to_string(),
            available: self.value(Field::Available) == "true",
            created_date: self.value(Field::CreatedDate).to_string(),
            modified_date: self.value(Field::ModifiedDate).to_string(),
            like: self.value(Field::Like).to_string(),
            disable: self.value(Field::Disable) == "true",
        }
    }
}
