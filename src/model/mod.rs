mod form;
mod product;
mod results;
mod search;
mod view;

pub use form::{Field, ProductForm};
pub use product::{ErrorBody, ProductBody, ProductRecord};
pub use results::ResultsTable;
pub use search::SearchQuery;
pub use view::ViewState;
