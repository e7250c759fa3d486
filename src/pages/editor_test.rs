use super::*;

use crate::net::types::{Block, ReusableBlockRecord};

fn sample_bootstrap() -> EditorBootstrap {
    EditorBootstrap {
        template: Template {
            id: "t1".to_owned(),
            slug: "front-page".to_owned(),
            title: Some("Front Page".to_owned()),
            description: None,
            source: Some("theme".to_owned()),
        },
        blocks: vec![
            Block {
                id: "b1".to_owned(),
                name: "core/template-part".to_owned(),
                attributes: serde_json::json!({ "slug": "header" }),
                parent_id: None,
            },
            Block {
                id: "b2".to_owned(),
                name: "core/block".to_owned(),
                attributes: serde_json::json!({ "ref": "r1" }),
                parent_id: Some("b1".to_owned()),
            },
        ],
        reusable_blocks: vec![ReusableBlockRecord {
            id: "r1".to_owned(),
            title: Some("Promo".to_owned()),
            is_temporary: false,
        }],
        deletable_ids: vec!["r1".to_owned()],
    }
}

#[test]
fn apply_bootstrap_populates_both_stores() {
    let mut blocks = BlockEditorState::default();
    let mut entities = EntitiesState::default();
    let template = apply_bootstrap(&mut blocks, &mut entities, sample_bootstrap());

    assert_eq!(template.slug, "front-page");
    assert_eq!(blocks.blocks.len(), 2);
    assert!(blocks.get_block("b2").is_some());
    assert!(entities.reusable_block("r1").is_some());
    assert!(entities.can_delete_reusable_block("r1"));
}

#[test]
fn apply_bootstrap_leaves_selection_untouched() {
    let mut blocks = BlockEditorState::default();
    blocks.selected_block_id = Some("b9".to_owned());
    let mut entities = EntitiesState::default();
    apply_bootstrap(&mut blocks, &mut entities, sample_bootstrap());
    assert_eq!(blocks.selected_block_id.as_deref(), Some("b9"));
}

#[test]
fn block_row_class_marks_selection() {
    assert_eq!(block_row_class(false), "editor-page__block");
    assert!(block_row_class(true).contains("--selected"));
}
