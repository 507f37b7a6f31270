//! Client helper for the random user API. The endpoint takes a single
//! `results` query parameter; range validation happens before any network
//! I/O even though the view state already enforces it.

/// Builds the query for a batch of the given size, relative to the API base.
pub fn results_query(count: u8) -> String {
    format!("?results={count}")
}

/// Fetches a batch of freshly generated profiles.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_users(
    count: u8,
) -> Result<Vec<crate::features::users::types::User>, crate::app_lib::AppError> {
    use crate::app_lib::{AppError, api::get_json};
    use crate::features::users::state::{MAX_RESULTS, MIN_RESULTS};
    use crate::features::users::types::UsersResponse;

    if !(MIN_RESULTS..=MAX_RESULTS).contains(&count) {
        return Err(AppError::Config(format!(
            "Requested count must be between {MIN_RESULTS} and {MAX_RESULTS}."
        )));
    }

    let response: UsersResponse = get_json(&results_query(count)).await?;
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::results_query;
    use crate::app_lib::api::build_url_with_base;
    use crate::features::users::state::{MAX_RESULTS, MIN_RESULTS};

    #[test]
    fn results_query_carries_the_count() {
        assert_eq!(results_query(1), "?results=1");
        assert_eq!(results_query(5), "?results=5");
        assert_eq!(results_query(50), "?results=50");
    }

    #[test]
    fn every_valid_count_yields_a_distinct_request() {
        for count in MIN_RESULTS..=MAX_RESULTS {
            let url = build_url_with_base("https://randomuser.me/api", &results_query(count));
            assert_eq!(url, format!("https://randomuser.me/api/?results={count}"));
        }
    }
}
