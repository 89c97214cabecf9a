//! Form controller: one handler pair per button.
//!
//! [`begin`] runs when a button is pressed. It reads the form, applies any
//! purely local outcome, and returns the request to send (if any).
//! [`complete`] runs when that request finishes and writes the outcome
//! back. Both work only on the [`ViewState`] they are given; neither does
//! I/O.

mod operation;

pub use operation::Operation;

use crate::api::{ApiError, ApiRequest, Reply};
use crate::model::{Field, ProductRecord, ResultsTable, SearchQuery, ViewState};

/// Flash shown after a successful create or update.
pub const MSG_SUCCESS: &str = "Success";
/// Flash shown after a successful like.
pub const MSG_LIKED: &str = "Success like a product";
/// Flash shown after a successful disable.
pub const MSG_DISABLED: &str = "Success disable a product";
/// Flash shown after a successful retrieve.
pub const MSG_RETRIEVED: &str = "Success retrieve the product";
/// Flash shown after a successful delete.
pub const MSG_DELETED: &str = "Success delete the product";
/// Flash shown after an unfiltered search.
pub const MSG_LISTED_ALL: &str = "Success list all products";
/// Flash shown when retrieve is pressed with no id.
pub const MSG_RETRIEVE_NO_ID: &str = "Fail retrieve the product (product id is not provided)";
/// Flash shown when delete is pressed with no id.
pub const MSG_DELETE_NO_ID: &str = "Fail delete the product (product id is not provided)";

/// Flash shown when a retrieve fails.
pub fn retrieve_failed(id: &str) -> String {
    format!("Fail retrieve the product (product {id} does not exist)")
}

/// Flash shown when a delete fails.
pub fn delete_failed(id: &str) -> String {
    format!("Fail delete the product (product {id} does not exist)")
}

/// Starts `op` against the current view.
///
/// Always clears the flash slot first. Returns `None` when the operation
/// finished locally: Clear, or Retrieve/Delete without an id.
pub fn begin(op: Operation, view: &mut ViewState) -> Option<ApiRequest> {
    if op == Operation::Clear {
        view.form.set_value(Field::Id, "");
    }
    view.clear_flash();

    let id = view.form.id().to_string();
    match op {
        Operation::Create => Some(ApiRequest::Create(view.form.to_body())),
        Operation::Update => Some(ApiRequest::Update {
            id,
            body: view.form.to_body(),
        }),
        Operation::Like => Some(ApiRequest::Like { id }),
        Operation::Disable => Some(ApiRequest::Disable { id }),
        Operation::Retrieve if id.is_empty() => {
            view.clear_form();
            view.set_flash(MSG_RETRIEVE_NO_ID);
            None
        }
        Operation::Retrieve => Some(ApiRequest::Retrieve { id }),
        Operation::Delete if id.is_empty() => {
            view.clear_form();
            view.set_flash(MSG_DELETE_NO_ID);
            None
        }
        Operation::Delete => Some(ApiRequest::Delete { id }),
        Operation::Clear => {
            view.clear_form();
            None
        }
        Operation::Search => Some(ApiRequest::Search(SearchQuery::from_form(&view.form))),
    }
}

/// Applies the outcome of `request` to the view.
pub fn complete(request: &ApiRequest, outcome: Result<Reply, ApiError>, view: &mut ViewState) {
    match request {
        ApiRequest::Create(_) | ApiRequest::Update { .. } => {
            show_product(expect_product(outcome), MSG_SUCCESS, view)
        }
        ApiRequest::Like { .. } => show_product(expect_product(outcome), MSG_LIKED, view),
        ApiRequest::Disable { .. } => show_product(expect_product(outcome), MSG_DISABLED, view),
        ApiRequest::Retrieve { id } => match expect_product(outcome) {
            Ok(record) => {
                view.populate(&record);
                view.set_flash(MSG_RETRIEVED);
            }
            Err(_) => {
                view.clear_form();
                view.set_flash(retrieve_failed(id));
            }
        },
        ApiRequest::Delete { id } => {
            view.clear_form();
            match outcome {
                Ok(_) => view.set_flash(MSG_DELETED),
                Err(_) => view.set_flash(delete_failed(id)),
            }
        }
        ApiRequest::Search(query) => match expect_products(outcome) {
            Ok(records) => {
                view.show_results(ResultsTable::from_records(&records));
                if let Some(first) = records.first() {
                    view.populate(first);
                }
                if query.is_unfiltered() {
                    view.set_flash(MSG_LISTED_ALL);
                } else {
                    view.set_flash(MSG_SUCCESS);
                }
            }
            Err(e) => view.set_flash(e.to_string()),
        },
    }
}

fn show_product(outcome: Result<ProductRecord, ApiError>, success: &str, view: &mut ViewState) {
    match outcome {
        Ok(record) => {
            view.populate(&record);
            view.set_flash(success);
        }
        Err(e) => view.set_flash(e.to_string()),
    }
}

fn expect_product(outcome: Result<Reply, ApiError>) -> Result<ProductRecord, ApiError> {
    match outcome? {
        Reply::Product(record) => Ok(record),
        other => Err(unexpected(&other, "a product")),
    }
}

fn expect_products(outcome: Result<Reply, ApiError>) -> Result<Vec<ProductRecord>, ApiError> {
    match outcome? {
        Reply::Products(records) => Ok(records),
        other => Err(unexpected(&other, "a product list")),
    }
}

fn unexpected(reply: &Reply, wanted: &str) -> ApiError {
    let found = match reply {
        Reply::Product(_) => "a product",
        Reply::Products(_) => "a product list",
        Reply::Deleted => "an empty body",
    };
    ApiError::Malformed {
        status: 200,
        detail: format!("expected {wanted}, found {found}"),
    }
}
