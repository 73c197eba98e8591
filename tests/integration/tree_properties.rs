use codac_core::tree::{build_tree, build_tree_with_report, count_nodes, DocumentRecord, TreeNode};
use proptest::prelude::*;

/// Records with ids `n0..nN`; parents point at any id, including ones that do not exist.
fn arb_records() -> impl Strategy<Value = Vec<DocumentRecord>> {
    prop::collection::vec(
        (
            any::<bool>(),
            "[a-dA-D]{0,3}",
            prop::option::of(0usize..40),
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (is_folder, title, parent))| {
                let id = format!("n{}", i);
                let record = if is_folder {
                    DocumentRecord::folder(id, title)
                } else {
                    DocumentRecord::document(id, title)
                };
                match parent {
                    Some(p) => record.with_parent(format!("n{}", p)),
                    None => record,
                }
            })
            .collect()
    })
}

fn check_sibling_order(nodes: &[TreeNode]) -> Result<(), TestCaseError> {
    for pair in nodes.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        prop_assert!(
            !(!a.is_folder() && b.is_folder()),
            "document {} before folder {}",
            a.id,
            b.id
        );
        if a.kind == b.kind {
            prop_assert!(a.title.to_lowercase() <= b.title.to_lowercase());
        }
    }
    for node in nodes {
        check_sibling_order(&node.children)?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn building_twice_is_deep_equal(records in arb_records()) {
        prop_assert_eq!(build_tree(&records), build_tree(&records));
    }

    #[test]
    fn no_record_is_lost(records in arb_records()) {
        prop_assert_eq!(count_nodes(&build_tree(&records)), records.len());
    }

    #[test]
    fn siblings_are_ordered(records in arb_records()) {
        check_sibling_order(&build_tree(&records))?;
    }

    #[test]
    fn every_orphan_is_a_root(records in arb_records()) {
        let build = build_tree_with_report(&records);
        for orphan in &build.orphans {
            prop_assert!(build.roots.iter().any(|r| r.id == orphan.id));
        }
    }
}

#[test]
fn dangling_parent_becomes_root() {
    let records = vec![DocumentRecord::document("a", "A").with_parent("missing")];
    let roots = build_tree(&records);
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, "a");
}

#[test]
fn store_json_builds_sidebar() {
    let json = r#"[
        {"id": "3", "title": "setup guide", "isFolder": false, "parentId": "1"},
        {"id": "1", "title": "Onboarding", "isFolder": true, "parentId": null},
        {"id": "2", "title": "Archive", "isFolder": true},
        {"id": "4", "title": "Checklists", "isFolder": true, "parentId": "1"},
        {"id": "5", "title": "About", "isFolder": false}
    ]"#;
    let records: Vec<DocumentRecord> = serde_json::from_str(json).unwrap();
    let roots = build_tree(&records);
    let root_titles: Vec<&str> = roots.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(root_titles, vec!["Archive", "Onboarding", "About"]);
    let onboarding: Vec<&str> = roots[1].children.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(onboarding, vec!["Checklists", "setup guide"]);
}
