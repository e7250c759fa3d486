use super::*;

fn block(id: &str, name: &str, parent: Option<&str>) -> Block {
    Block {
        id: id.to_owned(),
        name: name.to_owned(),
        attributes: serde_json::Value::Null,
        parent_id: parent.map(ToOwned::to_owned),
    }
}

fn state_with(blocks: Vec<Block>, selected: Option<&str>) -> BlockEditorState {
    let mut state = BlockEditorState::default();
    for b in blocks {
        state.insert_block(b);
    }
    state.selected_block_id = selected.map(ToOwned::to_owned);
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_no_blocks_or_selection() {
    let state = BlockEditorState::default();
    assert!(state.blocks.is_empty());
    assert!(state.selected_block_id.is_none());
}

// =============================================================
// active_block_id_by_names
// =============================================================

#[test]
fn active_block_none_without_selection() {
    let state = state_with(vec![block("b1", "core/template-part", None)], None);
    assert_eq!(state.active_block_id_by_names(ACTIVE_ENTITY_BLOCK_NAMES), None);
}

#[test]
fn active_block_matches_selected_block_itself() {
    let state = state_with(vec![block("b1", "core/template-part", None)], Some("b1"));
    assert_eq!(
        state.active_block_id_by_names(ACTIVE_ENTITY_BLOCK_NAMES),
        Some("b1".to_owned())
    );
}

#[test]
fn active_block_found_through_parent_chain() {
    let state = state_with(
        vec![
            block("part", "core/template-part", None),
            block("group", "core/group", Some("part")),
            block("leaf", "core/paragraph", Some("group")),
        ],
        Some("leaf"),
    );
    assert_eq!(
        state.active_block_id_by_names(ACTIVE_ENTITY_BLOCK_NAMES),
        Some("part".to_owned())
    );
}

#[test]
fn active_block_none_when_no_ancestor_matches() {
    let state = state_with(
        vec![
            block("root", "core/group", None),
            block("leaf", "core/paragraph", Some("root")),
        ],
        Some("leaf"),
    );
    assert_eq!(state.active_block_id_by_names(ACTIVE_ENTITY_BLOCK_NAMES), None);
}

#[test]
fn active_block_none_when_selection_is_dangling() {
    let state = state_with(vec![block("b1", "core/paragraph", None)], Some("missing"));
    assert_eq!(state.active_block_id_by_names(ACTIVE_ENTITY_BLOCK_NAMES), None);
}

#[test]
fn active_block_walk_terminates_on_parent_cycle() {
    let state = state_with(
        vec![
            block("a", "core/group", Some("b")),
            block("b", "core/group", Some("a")),
        ],
        Some("a"),
    );
    assert_eq!(state.active_block_id_by_names(ACTIVE_ENTITY_BLOCK_NAMES), None);
}

// =============================================================
// reusable_ref
// =============================================================

#[test]
fn reusable_ref_reads_string_reference() {
    let mut instance = block("b1", REUSABLE_BLOCK_NAME, None);
    instance.attributes = serde_json::json!({ "ref": "r7" });
    let state = state_with(vec![instance], None);
    assert_eq!(state.reusable_ref("b1"), Some("r7".to_owned()));
}

#[test]
fn reusable_ref_normalizes_numeric_reference() {
    let mut instance = block("b1", REUSABLE_BLOCK_NAME, None);
    instance.attributes = serde_json::json!({ "ref": 42 });
    let state = state_with(vec![instance], None);
    assert_eq!(state.reusable_ref("b1"), Some("42".to_owned()));
}

#[test]
fn reusable_ref_none_for_other_block_types() {
    let mut instance = block("b1", "core/paragraph", None);
    instance.attributes = serde_json::json!({ "ref": "r7" });
    let state = state_with(vec![instance], None);
    assert_eq!(state.reusable_ref("b1"), None);
}

#[test]
fn reusable_ref_none_for_missing_block_or_attribute() {
    let state = state_with(vec![block("b1", REUSABLE_BLOCK_NAME, None)], None);
    assert_eq!(state.reusable_ref("b1"), None);
    assert_eq!(state.reusable_ref("absent"), None);
}

#[test]
fn reusable_ref_none_for_empty_string_reference() {
    let mut instance = block("b1", REUSABLE_BLOCK_NAME, None);
    instance.attributes = serde_json::json!({ "ref": "" });
    let state = state_with(vec![instance], None);
    assert_eq!(state.reusable_ref("b1"), None);
}
