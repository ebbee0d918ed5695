// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::client::{ApiClient, ApiError, ApiRequest};
use crate::models::CalendarData;

/// `/calendar/` endpoint: shifts and appointments for one ISO week.
pub struct CalendarApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CalendarApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Calendar for week `week_of_year`.
    pub async fn week(&self, week_of_year: u32) -> Result<CalendarData, ApiError> {
        let request = ApiRequest::get("/calendar/").query("week", week_of_year);
        self.client.get_json(request).await
    }
}
