//! Built-in entity schemas. Field names follow the camelCase wire format.

use super::{Check, Field, Rule, Schema};

const CLIENT_STATUS: &[&str] = &["active", "inactive"];
const PROJECT_STATUS: &[&str] = &["active", "archived", "completed"];
const INVOICE_STATUS: &[&str] = &["draft", "sent", "paid", "overdue"];

const MIN_PASSWORD: usize = 6;
const MIN_USERNAME: usize = 3;

fn id() -> Field {
    Field::optional("id", vec![Rule::Integer, Rule::Positive])
}

fn reference(name: &'static str) -> Field {
    Field::required(name, vec![Rule::Integer, Rule::Positive])
}

fn required_text(name: &'static str) -> Field {
    Field::required(name, vec![Rule::MinLength(1)])
}

fn optional_text(name: &'static str) -> Field {
    Field::optional(name, vec![Rule::Text])
}

fn amount(name: &'static str) -> Field {
    Field::required(name, vec![Rule::Number])
}

fn non_negative(name: &'static str) -> Field {
    Field::required(name, vec![Rule::Number, Rule::Min(0.0)])
}

#[must_use]
pub fn client() -> Schema {
    Schema::new(
        "client",
        vec![
            id(),
            required_text("name"),
            Field::required("email", vec![Rule::Email]),
            optional_text("website"),
            optional_text("avatar"),
            optional_text("contactPerson"),
            optional_text("address"),
            required_text("currency"),
            Field::required("status", vec![Rule::OneOf(CLIENT_STATUS)]),
            optional_text("notes"),
        ],
    )
}

#[must_use]
pub fn project() -> Schema {
    Schema::new(
        "project",
        vec![
            id(),
            reference("clientId"),
            required_text("name"),
            optional_text("description"),
            non_negative("hourlyRate"),
            required_text("currency"),
            Field::required("status", vec![Rule::OneOf(PROJECT_STATUS)]),
            optional_text("deadline"),
            Field::required("tags", vec![Rule::Each(Box::new(Rule::Text))]),
        ],
    )
}

#[must_use]
pub fn time_entry() -> Schema {
    Schema::new(
        "time_entry",
        vec![
            id(),
            reference("projectId"),
            Field::required("date", vec![Rule::DateString]),
            optional_text("startTime"),
            optional_text("endTime"),
            Field::required("durationSeconds", vec![Rule::Positive]),
            required_text("description"),
            Field::required("invoiced", vec![Rule::Boolean]),
        ],
    )
}

/// Line item; `id` may be a temporary client-side number.
#[must_use]
pub fn invoice_item() -> Schema {
    Schema::new(
        "invoice_item",
        vec![
            amount("id"),
            required_text("description"),
            non_negative("quantity"),
            non_negative("unitPrice"),
            amount("amount"),
        ],
    )
}

#[must_use]
pub fn invoice() -> Schema {
    Schema::new(
        "invoice",
        vec![
            id(),
            reference("clientId"),
            required_text("number"),
            Field::required("issueDate", vec![Rule::DateString]),
            Field::required("dueDate", vec![Rule::DateString]),
            Field::required("items", vec![Rule::Items(invoice_item())]),
            amount("subtotal"),
            Field::required("taxRate", vec![Rule::Number, Rule::Min(0.0), Rule::Max(1.0)]),
            amount("taxAmount"),
            amount("total"),
            Field::required("status", vec![Rule::OneOf(INVOICE_STATUS)]),
        ],
    )
}

#[must_use]
pub fn login() -> Schema {
    Schema::new("login", vec![required_text("password")])
}

/// Username plus an email that may be left blank.
#[must_use]
pub fn register_profile() -> Schema {
    Schema::new(
        "register_profile",
        vec![
            Field::required("username", vec![Rule::MinLength(MIN_USERNAME)]),
            Field::optional("email", vec![Rule::EmptyOr(Box::new(Rule::Email))]),
        ],
    )
}

#[must_use]
pub fn register_password() -> Schema {
    Schema::new(
        "register_password",
        vec![
            Field::required("password", vec![Rule::MinLength(MIN_PASSWORD)]),
            Field::required("confirmPassword", vec![Rule::Text]),
        ],
    )
    .with_check(Check::Matches { field: "confirmPassword", other: "password" })
}

#[must_use]
pub fn register_preferences() -> Schema {
    Schema::new(
        "register_preferences",
        vec![
            Field::required("language", vec![Rule::Text]),
            Field::required("currency", vec![Rule::Text]),
            Field::required("timezone", vec![Rule::Text]),
        ],
    )
}
