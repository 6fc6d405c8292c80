//! Wire shapes of the server endpoints the projector previews for. The
//! server owns the authoritative update rule; these types only describe
//! what gets sent.

use crate::{FactId, ProfileId, Rating};
use serde::{Deserialize, Serialize};

/// Body of `POST /facts/{fact_id}/review`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub rating: Rating,
    pub profile_id: ProfileId,
}

impl ReviewSubmission {
    pub fn new(rating: Rating, profile_id: ProfileId) -> Self {
        Self { rating, profile_id }
    }
}

pub fn review_endpoint(fact_id: FactId) -> String {
    format!("/facts/{fact_id}/review")
}

/// Path of `PATCH /profiles/{profile_id}/srs`; the body is an `SrsConfig`.
pub fn srs_endpoint(profile_id: ProfileId) -> String {
    format!("/profiles/{profile_id}/srs")
}
