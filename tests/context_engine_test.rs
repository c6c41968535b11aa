mod helpers;

use helpers::{insert_memory, test_db};
use neurodock::config::RankingConfig;
use neurodock::context::resolve_context;
use neurodock::store::types::MemoryType;
use neurodock::Error;

#[test]
fn repeated_calls_return_identical_results() {
    let conn = test_db();
    for content in ["deploy staging", "fix login bug", "deploy staging again"] {
        insert_memory(&conn, content, MemoryType::Normal);
    }

    let ranking = RankingConfig::default();
    let first = resolve_context(&conn, "deploy staging", 3, None, &ranking).unwrap();
    let second = resolve_context(&conn, "deploy staging", 3, None, &ranking).unwrap();

    // Byte-identical ordered output, scores included
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn output_is_bounded_by_max_memories() {
    let conn = test_db();
    for i in 0..6 {
        insert_memory(&conn, &format!("note number {i}"), MemoryType::Normal);
    }

    let ranking = RankingConfig::default();
    for k in 1..=6 {
        let results = resolve_context(&conn, "note", k, None, &ranking).unwrap();
        assert_eq!(results.len(), k as usize);
    }

    // Fewer candidates than the bound: return all, never pad, never error
    let results = resolve_context(&conn, "note", 50, None, &ranking).unwrap();
    assert_eq!(results.len(), 6);
}

#[test]
fn truncation_is_monotonic_as_the_bound_grows() {
    let conn = test_db();
    for content in [
        "deploy staging",
        "fix login bug",
        "deploy staging again",
        "review deploy checklist",
        "lunch notes",
    ] {
        insert_memory(&conn, content, MemoryType::Normal);
    }

    let ranking = RankingConfig::default();
    for k in 1..5 {
        let smaller = resolve_context(&conn, "deploy", k, None, &ranking).unwrap();
        let larger = resolve_context(&conn, "deploy", k + 1, None, &ranking).unwrap();

        let small_ids: Vec<&str> = smaller.iter().map(|s| s.memory.id.as_str()).collect();
        let large_ids: Vec<&str> = larger.iter().map(|s| s.memory.id.as_str()).collect();
        assert_eq!(small_ids[..], large_ids[..k as usize]);
    }
}

#[test]
fn identical_content_ranks_newer_first() {
    let conn = test_db();
    let older = insert_memory(&conn, "rotate the signing keys", MemoryType::Normal);
    let newer = insert_memory(&conn, "rotate the signing keys", MemoryType::Normal);

    let results =
        resolve_context(&conn, "signing keys", 2, None, &RankingConfig::default()).unwrap();

    assert_eq!(results[0].memory.id, newer.id);
    assert_eq!(results[1].memory.id, older.id);
}

#[test]
fn deploy_scenario_returns_matching_memories_most_recent_first() {
    let conn = test_db();
    insert_memory(&conn, "deploy staging", MemoryType::Normal);
    insert_memory(&conn, "fix login bug", MemoryType::Normal);
    insert_memory(&conn, "deploy staging again", MemoryType::Normal);

    let results = resolve_context(&conn, "deploy", 2, None, &RankingConfig::default()).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].memory.content, "deploy staging again");
    assert_eq!(results[1].memory.content, "deploy staging");
}

#[test]
fn zero_bound_is_a_validation_error() {
    let conn = test_db();
    insert_memory(&conn, "anything at all", MemoryType::Normal);

    let err = resolve_context(&conn, "anything", 0, None, &RankingConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Validation { field: "max_memories", .. }));
}

#[test]
fn empty_query_ranks_by_recency() {
    let conn = test_db();
    let a = insert_memory(&conn, "first note", MemoryType::Normal);
    let b = insert_memory(&conn, "second note", MemoryType::Normal);
    let c = insert_memory(&conn, "third note", MemoryType::Normal);

    let results = resolve_context(&conn, "", 3, None, &RankingConfig::default()).unwrap();

    let ids: Vec<&str> = results.iter().map(|s| s.memory.id.as_str()).collect();
    assert_eq!(ids, vec![c.id.as_str(), b.id.as_str(), a.id.as_str()]);
}

#[test]
fn decision_memories_outrank_equal_normal_ones() {
    let conn = test_db();
    // Older decision vs newer normal with the same content; recency pinned to
    // zero so the type weight is the only difference.
    let decision = insert_memory(&conn, "switch to the new queue", MemoryType::Decision);
    let normal = insert_memory(&conn, "switch to the new queue", MemoryType::Normal);

    let ranking = RankingConfig {
        recency_weight: 0.0,
        ..RankingConfig::default()
    };
    let results = resolve_context(&conn, "queue", 2, None, &ranking).unwrap();

    assert_eq!(results[0].memory.id, decision.id);
    assert_eq!(results[1].memory.id, normal.id);
}

#[test]
fn resolving_context_does_not_mutate_the_store() {
    let conn = test_db();
    insert_memory(&conn, "deploy staging", MemoryType::Normal);
    insert_memory(&conn, "fix login bug", MemoryType::Insight);

    let before = neurodock::store::memories::list(&conn).unwrap();
    resolve_context(&conn, "deploy", 1, None, &RankingConfig::default()).unwrap();
    let after = neurodock::store::memories::list(&conn).unwrap();

    assert_eq!(before, after);
}
