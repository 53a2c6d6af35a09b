//! Contact Commands
//!
//! Frontend bindings for `/planner/contacts`.

use serde::Serialize;

use super::{fetch_json, record_path, submit, ApiRequest, CompletedArgs, Transport};
use crate::error::PlannerResult;
use crate::models::{Contact, RecordId};

pub const CONTACTS_PATH: &str = "/planner/contacts";

#[derive(Debug, Serialize)]
pub struct CreateContactArgs<'a> {
    pub name: &'a str,
    /// Free text; the form offers `Call`, `Email` and `Text`
    #[serde(rename = "type")]
    pub contact_type: &'a str,
    pub description: &'a str,
}

pub async fn list_contacts<T: Transport>(transport: &T) -> PlannerResult<Vec<Contact>> {
    fetch_json(transport, CONTACTS_PATH).await
}

pub async fn create_contact<T: Transport>(transport: &T, args: &CreateContactArgs<'_>) -> PlannerResult<()> {
    submit(transport, ApiRequest::post(CONTACTS_PATH, args)?).await
}

pub async fn update_contact<T: Transport>(transport: &T, id: &RecordId, completed: bool) -> PlannerResult<()> {
    submit(transport, ApiRequest::put(record_path(CONTACTS_PATH, id), &CompletedArgs { completed })?).await
}

pub async fn delete_contact<T: Transport>(transport: &T, id: &RecordId) -> PlannerResult<()> {
    submit(transport, ApiRequest::delete(record_path(CONTACTS_PATH, id))).await
}
