//! Index lifecycle, document and search tests.

use meilisearch_client::{SearchQuery, UpdateState};
use meilisearch_tests::{create_test_client, unique_uid, wait_for_update};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Movie {
    id: u64,
    title: String,
}

#[tokio::test]
#[ignore = "requires a running MeiliSearch instance"]
async fn test_create_get_and_delete_index() {
    let client = create_test_client().expect("Failed to create client");
    let uid = unique_uid("movies");

    // Create index
    let created = client
        .create_index(&uid, Some("id"), None)
        .await
        .expect("Failed to create index");
    assert_eq!(created.uid(), uid);

    // Creating it again must be rejected by the service
    let duplicate = client.create_index(&uid, None, None).await;
    assert!(duplicate.is_err());

    // List indexes should include our new one
    let indexes = client.get_indexes().await.expect("Failed to list indexes");
    assert!(indexes.iter().any(|info| info.uid == uid));

    // Get index
    let fetched = client.get_index(&uid).await.expect("Failed to get index");
    assert_eq!(fetched.primary_key(), Some("id"));

    // Clean up
    fetched.delete().await.expect("Failed to delete index");

    let err = client.get_index(&uid).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore = "requires a running MeiliSearch instance"]
async fn test_documents_and_search() {
    let client = create_test_client().expect("Failed to create client");
    let uid = unique_uid("search");
    let index = client
        .create_index(&uid, Some("id"), None)
        .await
        .expect("Failed to create index");

    let movies = vec![
        Movie {
            id: 1,
            title: "Carol".to_string(),
        },
        Movie {
            id: 2,
            title: "Wonder Woman".to_string(),
        },
    ];
    let update = index
        .add_documents(&movies, None)
        .await
        .expect("Failed to add documents");
    let state = wait_for_update(&index, update.update_id)
        .await
        .expect("Failed to poll update");
    assert_eq!(state, UpdateState::Processed);

    let movie: Movie = index.get_document("1").await.expect("Failed to get document");
    assert_eq!(movie, movies[0]);

    let results = index
        .search::<Movie>(&SearchQuery::new("wonder"))
        .await
        .expect("Failed to search");
    assert_eq!(results.hits.len(), 1);
    assert_eq!(results.hits[0].id, 2);

    let stats = index.get_stats().await.expect("Failed to get stats");
    assert_eq!(stats.number_of_documents, 2);

    // Clean up
    index.delete().await.expect("Failed to delete index");
}
