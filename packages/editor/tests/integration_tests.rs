//! End-to-end editing scenarios through EditSession

use pagecraft_editor::{EditSession, History, Mutation};
use pagecraft_model::{BlockKind, Direction, Document, IdGenerator, InstanceId};
use std::collections::HashSet;

fn kinds(doc: &Document) -> Vec<BlockKind> {
    doc.blocks().filter_map(|b| b.kind()).collect()
}

fn starter() -> EditSession {
    let mut session = EditSession::in_memory();
    session.insert(BlockKind::Navigation);
    session.insert(BlockKind::Hero);
    session
}

#[test]
fn test_insert_move_undo_redo_scenario() {
    let mut session = starter();

    let pricing = session.insert(BlockKind::Pricing).unwrap();
    assert_eq!(
        kinds(session.document()),
        vec![BlockKind::Navigation, BlockKind::Hero, BlockKind::Pricing]
    );

    session.move_block(&pricing, Direction::Up);
    assert_eq!(
        kinds(session.document()),
        vec![BlockKind::Navigation, BlockKind::Pricing, BlockKind::Hero]
    );

    session.undo();
    assert_eq!(
        kinds(session.document()),
        vec![BlockKind::Navigation, BlockKind::Hero, BlockKind::Pricing]
    );

    session.undo();
    assert_eq!(kinds(session.document()), vec![BlockKind::Navigation, BlockKind::Hero]);

    session.redo();
    assert_eq!(
        kinds(session.document()),
        vec![BlockKind::Navigation, BlockKind::Hero, BlockKind::Pricing]
    );
}

#[test]
fn test_instance_ids_stay_unique() {
    let mut session = EditSession::in_memory();

    for (step, kind) in BlockKind::ALL.iter().enumerate() {
        let id = session.insert(*kind).unwrap();
        if step % 3 == 0 {
            session.duplicate(&id);
        }
        if step % 4 == 0 {
            let first = session.document().blocks().next().unwrap().instance_id().clone();
            session.duplicate(&first);
        }
    }

    let doc = session.document();
    let unique: HashSet<&InstanceId> = doc.instance_ids().collect();
    assert_eq!(unique.len(), doc.len());
    assert!(doc.len() > BlockKind::ALL.len());
}

#[test]
fn test_move_round_trip_restores_order() {
    let mut session = starter();
    session.insert(BlockKind::Footer);

    let before = session.document().clone();
    for id in before.instance_ids().skip(1) {
        session.move_block(id, Direction::Up);
        session.move_block(id, Direction::Down);
        assert_eq!(session.document(), &before);
    }
}

#[test]
fn test_history_linearity() {
    let mut ids = IdGenerator::new("linear");
    let d0 = Document::new();
    let (d1, _) = d0.insert(BlockKind::Hero, &mut ids);
    let (d2, _) = d1.insert(BlockKind::Cta, &mut ids);

    let mut history = History::new(d0);
    history.commit(d1.clone());
    history.commit(d2);
    history.undo();
    history.undo();
    history.redo();

    assert_eq!(history.current(), &d1);
}

#[test]
fn test_redo_invalidated_by_commit() {
    let mut session = starter();

    session.insert(BlockKind::Faq);
    session.undo();
    assert!(session.can_redo());

    session.insert(BlockKind::Team);
    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(
        kinds(session.document()),
        vec![BlockKind::Navigation, BlockKind::Hero, BlockKind::Team]
    );
}

#[test]
fn test_mutations_replay_from_json() {
    let script = r#"[
        { "InsertBlock": { "kind": "hero" } },
        { "InsertBlock": { "kind": "faq" } }
    ]"#;

    let mutations: Vec<Mutation> = serde_json::from_str(script).unwrap();
    let mut session = EditSession::in_memory();
    for mutation in mutations {
        assert!(session.apply(mutation));
    }

    assert_eq!(kinds(session.document()), vec![BlockKind::Hero, BlockKind::Faq]);
    println!("{}", serde_json::to_string_pretty(&session.project()).unwrap());
}

#[test]
fn test_loaded_document_with_duplicate_ids_is_repaired() {
    let json = r#"{
        "document": {
            "blocks": [
                { "type": "text", "instanceId": "same" },
                { "type": "text", "instanceId": "same" },
                { "type": "divider" }
            ]
        }
    }"#;

    let project = pagecraft_editor::project::parse(json).unwrap();
    let session = EditSession::new(project, IdGenerator::new("repair"));

    let unique: HashSet<&InstanceId> = session.document().instance_ids().collect();
    assert_eq!(unique.len(), 3);
}
