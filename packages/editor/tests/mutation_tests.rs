//! Structural mutation properties exercised through the session API.

use pagecraft_editor::{Capability, EditError, EditSession, EditorError, Registry, ROOT_ID};
use serde_json::json;

fn editor() -> EditSession {
    EditSession::new("test", Capability::Editor, Registry::builtin())
}

fn props(value: serde_json::Value) -> pagecraft_common::Props {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

#[test]
fn test_tree_stays_consistent_across_operation_sequences() {
    let mut session = editor();

    let container = session.insert(ROOT_ID, "Container", None, None).unwrap();
    let hero = session.insert(ROOT_ID, "HeroBanner", None, Some(0)).unwrap();
    let text = session.insert(&container, "TextBlock", None, None).unwrap();
    session.document().validate().unwrap();

    session.move_node(&text, ROOT_ID, 1).unwrap();
    session.document().validate().unwrap();

    session
        .set_props(&hero, props(json!({"title": "Admissions Open"})))
        .unwrap();
    session.delete(&container).unwrap();
    session.document().validate().unwrap();

    assert_eq!(
        session.document().root().children,
        vec![hero.clone(), text.clone()]
    );

    // Unwind everything; the tree must stay well-formed at each step.
    while session.undo().unwrap() {
        session.document().validate().unwrap();
    }
    assert_eq!(session.document().len(), 1);
}

#[test]
fn test_move_to_descendant_fails_and_elsewhere_succeeds() {
    let mut session = editor();
    let outer = session.insert(ROOT_ID, "Container", None, None).unwrap();
    let inner = session.insert(&outer, "Container", None, None).unwrap();
    let other = session.insert(ROOT_ID, "Container", None, None).unwrap();

    // Into a descendant: cycle.
    let result = session.move_node(&outer, &inner, 0);
    assert!(matches!(
        result,
        Err(EditorError::Edit(EditError::Cycle { .. }))
    ));

    // Into itself: cycle.
    let result = session.move_node(&outer, &outer, 0);
    assert!(matches!(
        result,
        Err(EditorError::Edit(EditError::Cycle { .. }))
    ));

    // Into an unrelated canvas: fine.
    session.move_node(&outer, &other, 0).unwrap();
    assert_eq!(session.document().get(&other).unwrap().children, vec![outer]);
    session.document().validate().unwrap();
}

#[test]
fn test_delete_root_always_fails() {
    let mut session = editor();
    for _ in 0..2 {
        let result = session.delete(ROOT_ID);
        assert!(matches!(
            result,
            Err(EditorError::Edit(EditError::RootImmutable))
        ));
    }
    assert!(session.document().contains(ROOT_ID));
}

#[test]
fn test_delete_removes_every_descendant() {
    let mut session = editor();
    let a = session.insert(ROOT_ID, "Container", None, None).unwrap();
    let b = session.insert(&a, "Container", None, None).unwrap();
    let c = session.insert(&b, "TextBlock", None, None).unwrap();
    let sibling = session.insert(ROOT_ID, "HeroBanner", None, None).unwrap();

    session.delete(&a).unwrap();

    for id in [&a, &b, &c] {
        assert!(!session.document().contains(id));
    }
    assert!(session.document().contains(&sibling));
    assert_eq!(session.document().len(), 2);
}

#[test]
fn test_insert_into_leaf_leaves_tree_unchanged() {
    let mut session = editor();
    let hero = session.insert(ROOT_ID, "HeroBanner", None, None).unwrap();
    let serialized_before = session.serialize().unwrap();

    let result = session.insert(&hero, "TextBlock", None, None);
    assert!(matches!(
        result,
        Err(EditorError::Edit(EditError::InvalidParent(p))) if p == hero
    ));
    assert_eq!(session.serialize().unwrap(), serialized_before);
}

#[test]
fn test_undo_after_single_insert_restores_exact_serialization() {
    let mut session = editor();
    let before = session.serialize().unwrap();

    session
        .insert(ROOT_ID, "HeroBanner", Some(props(json!({"title": "Welcome"}))), None)
        .unwrap();
    session.undo().unwrap();

    assert_eq!(session.serialize().unwrap(), before);
}

#[test]
fn test_undo_order_is_lifo() {
    let mut session = editor();
    let first = session.insert(ROOT_ID, "HeroBanner", None, None).unwrap();
    let second = session.insert(ROOT_ID, "TextBlock", None, None).unwrap();

    session.undo().unwrap();
    assert!(session.document().contains(&first));
    assert!(!session.document().contains(&second));

    session.undo().unwrap();
    assert!(!session.document().contains(&first));
}

#[test]
fn test_undo_restores_moved_node_position() {
    let mut session = editor();
    let container = session.insert(ROOT_ID, "Container", None, None).unwrap();
    let hero = session.insert(ROOT_ID, "HeroBanner", None, None).unwrap();
    let before = session.serialize().unwrap();

    session.move_node(&hero, &container, 0).unwrap();
    session.undo().unwrap();

    assert_eq!(session.serialize().unwrap(), before);
}

#[test]
fn test_undo_restores_props_exactly() {
    let mut session = editor();
    let hero = session.insert(ROOT_ID, "HeroBanner", None, None).unwrap();
    let before = session.serialize().unwrap();

    session
        .set_props(&hero, props(json!({"title": "Changed", "extra": 42})))
        .unwrap();
    session.undo().unwrap();

    assert_eq!(session.serialize().unwrap(), before);
}
