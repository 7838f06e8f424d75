//! Properties every build must hold, checked over a generated tree

use crate::common::{build_records, ContentTree};
use docsearch::core::config::Config;
use docsearch::core::indexer::IndexingPipeline;

/// A tree with many pages across every allow-listed folder
fn generated_tree() -> ContentTree {
    let folders = ["about", "configuration", "installation", "misc", "usage", "tools"];
    let mut tree = ContentTree::with_files(&[]);

    for (i, folder) in folders.iter().enumerate() {
        for j in 0..5 {
            let content = format!(
                "---\ntitle: Page {i}-{j}\n---\nSummary for page {j}. More text.\n\n\
                 ## Section A\nAlpha {j}.\n\n## Section B\n\n```sh\n# shell comment\necho hi\n```\n"
            );
            tree.add_file(&format!("{folder}/page-{j}.md"), &content);
        }
        tree.add_file(&format!("{folder}/404.md"), "# Excluded\n");
    }
    tree.add_file("hidden/secret.md", "# Secret\n");

    tree
}

#[test]
fn test_rerun_is_byte_identical() {
    let tree = generated_tree();
    let first = tree.path().join("first.json");
    let second = tree.path().join("second.json");
    let pipeline = IndexingPipeline::from_config(&Config::default());

    pipeline.run(tree.path(), &first).unwrap();
    pipeline.run(tree.path(), &second).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn test_object_ids_are_sequential_from_one() {
    let tree = generated_tree();
    let (records, stats) = build_records(tree.path());

    assert_eq!(stats.files_indexed, 30);
    assert_eq!(records.len(), 120);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.object_id, i as u64 + 1);
    }
}

#[test]
fn test_slug_and_url_shape() {
    let tree = generated_tree();
    let (records, _) = build_records(tree.path());

    for record in &records {
        assert!(record.slug.starts_with('/'), "slug {}", record.slug);
        assert_eq!(record.url, format!("/docs{}", record.slug));
        assert!(!record.slug.ends_with(".md"));
        assert!(!record.slug.contains('\\'));
        assert_eq!(record.tag, "Documentation");
        assert!(!record.slug.starts_with("/hidden"));
        assert!(!record.slug.contains("404"));
    }
}

#[test]
fn test_heading_records_follow_their_page() {
    let tree = generated_tree();
    let (records, _) = build_records(tree.path());

    let mut current_page: Option<&str> = None;
    for record in &records {
        match record.slug.split_once('#') {
            None => current_page = Some(&record.slug),
            Some((page, fragment)) => {
                assert_eq!(Some(page), current_page);
                assert!(
                    ["section-a", "section-b", "shell-comment"].contains(&fragment),
                    "unexpected fragment {fragment}"
                );
            }
        }
    }
}

#[test]
fn test_code_block_comment_starts_a_heading_record() {
    let tree = generated_tree();
    let (records, stats) = build_records(tree.path());

    assert_eq!(stats.heading_records, 90);
    let section_b = records
        .iter()
        .find(|r| r.slug.ends_with("#section-b"))
        .unwrap();
    assert_eq!(section_b.description, "```sh");

    let comment = records
        .iter()
        .find(|r| r.slug.ends_with("#shell-comment"))
        .unwrap();
    assert_eq!(comment.title, "shell comment");
    assert_eq!(comment.description, "echo hi");
}
