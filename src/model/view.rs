use super::form::ProductForm;
use super::product::ProductRecord;
use super::results::ResultsTable;

/// Everything the console shows: the form, the flash slot and the last
/// search results.
///
/// The controller reads and writes UI state only through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub form: ProductForm,
    flash: String,
    results: Option<ResultsTable>,
}

impl ViewState {
    /// Creates an empty view: cleared form, no message, no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the flash message; empty when nothing is shown.
    pub fn flash(&self) -> &str {
        &self.flash
    }

    /// Replaces the flash message.
    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = message.into();
    }

    /// Empties the flash slot.
    pub fn clear_flash(&mut self) {
        self.flash.clear();
    }

    /// Copies a record into the form.
    pub fn populate(&mut self, record: &ProductRecord) {
        self.form.populate(record);
    }

    /// Empties every form field.
    pub fn clear_form(&mut self) {
        self.form.clear();
    }

    /// Returns the last search results, if a search has succeeded.
    pub fn results(&self) -> Option<&ResultsTable> {
        self.results.as_ref()
    }

    /// Replaces the search results.
    pub fn show_results(&mut self, table: ResultsTable) {
        self.results = Some(table);
    }
}
