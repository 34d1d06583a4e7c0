//! Statistics endpoints.

use crate::error::Error;
use crate::request::HttpRequests;
use crate::types::{IndexStats, Stats};

const STATS_PATH: &str = "stats";

/// Gets statistics about every index, database size and last update date.
pub(crate) async fn get_all_stats(http: &HttpRequests) -> Result<Stats, Error> {
    http.get(STATS_PATH).await
}

/// Gets statistics about one index.
pub(crate) async fn get_index_stats(http: &HttpRequests, uid: &str) -> Result<IndexStats, Error> {
    http.get(&format!("indexes/{}/{}", uid, STATS_PATH)).await
}
