use serde::Serialize;

/// Course category management routes.
pub(crate) mod categories;

/// Course catalog routes.
pub(crate) mod courses;

/// Footer content routes, such as the privacy policy.
pub(crate) mod footer;

/// Instructor profile routes.
pub(crate) mod instructors;

/// Payment initiation and gateway callback routes.
pub(crate) mod payment;

/// Course review routes.
pub(crate) mod reviews;

/// Home page slider management routes.
pub(crate) mod sliders;

/// User and role management routes.
pub(crate) mod users;

/// Response body of record creation routes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InsertResponse {
    /// Created record identifier.
    pub inserted_id: Option<i64>,
}

/// Response body of record update routes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateResponse {
    /// Count of modified records.
    pub modified_count: u64,
}

/// Response body of record deletion routes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteResponse {
    /// Count of deleted records.
    pub deleted_count: u64,
}
