//! Local search over a freshly built record file

use crate::common::{create_test_services, ContentTree};
use docsearch::core::search::{MatchLevel, QueryParams, SearchClient};
use docsearch::DocSearchError;

fn built_index() -> (ContentTree, docsearch::core::search::RecordIndex) {
    let tree = ContentTree::small();
    let services = create_test_services();
    let output = tree.path().join("search.json");

    services
        .create_pipeline(&services.config.content)
        .run(tree.path(), &output)
        .unwrap();

    let index = services.open_index(&output).unwrap();
    (tree, index)
}

#[test]
fn test_search_finds_heading_records() {
    let (_tree, index) = built_index();
    assert_eq!(index.len(), 7);

    let results = index.search(&QueryParams::new("getting started")).unwrap();

    assert_eq!(results.nb_hits, 1);
    let hit = &results.hits[0];
    assert_eq!(hit.record.slug, "/usage/cli#getting-started");
    assert_eq!(hit.highlight.title.value, "<em>Getting</em> <em>Started</em>");
    assert_eq!(hit.highlight.title.match_level, MatchLevel::Full);
}

#[test]
fn test_search_matches_across_fields_in_object_id_order() {
    let (_tree, index) = built_index();

    let results = index.search(&QueryParams::new("setup")).unwrap();

    let ids: Vec<u64> = results.hits.iter().map(|h| h.record.object_id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
    // Heading records match through their slug only
    assert_eq!(results.hits[1].highlight.title.match_level, MatchLevel::None);
}

#[test]
fn test_search_pagination() {
    let (_tree, index) = built_index();

    // Every slug contains a slash
    let params = QueryParams::new("/").with_hits_per_page(3);
    let first = index.search(&params).unwrap();
    let last = index.search(&params.clone().with_page(2)).unwrap();
    let beyond = index.search(&params.clone().with_page(5)).unwrap();

    assert_eq!(first.nb_hits, 7);
    assert_eq!(first.nb_pages, 3);
    assert_eq!(first.hits.len(), 3);
    assert_eq!(last.hits.len(), 1);
    assert_eq!(last.hits[0].record.object_id, 7);
    assert!(beyond.hits.is_empty());
    assert_eq!(beyond.nb_hits, 7);
}

#[test]
fn test_search_does_not_match_url_prefix() {
    let (_tree, index) = built_index();

    let results = index.search(&QueryParams::new("docs")).unwrap();
    assert_eq!(results.nb_hits, 0);
}

#[test]
fn test_search_json_shape() {
    let (_tree, index) = built_index();

    let results = index
        .search(&QueryParams::new("download").with_ranking_info(true))
        .unwrap();
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json["nbHits"], 1);
    assert_eq!(json["hitsPerPage"], 10);
    assert!(json["queryID"].is_string());
    let hit = &json["hits"][0];
    assert_eq!(hit["objectID"], 4);
    assert_eq!(hit["_highlightResult"]["title"]["matchLevel"], "full");
    assert_eq!(hit["_rankingInfo"]["words"], 1);
}

#[test]
fn test_search_rejects_empty_query() {
    let (_tree, index) = built_index();

    let result = index.search(&QueryParams::new("   "));
    assert!(matches!(result, Err(DocSearchError::InvalidQuery(_))));
}

#[test]
fn test_open_missing_index() {
    let services = create_test_services();
    let tree = ContentTree::with_files(&[]);

    let result = services.open_index(&tree.path().join("missing.json"));
    match result {
        Err(e) => assert!(e.is_not_found()),
        Ok(_) => panic!("Expected missing record file to fail"),
    }
}
