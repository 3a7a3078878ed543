//! Property tests for the transaction engine.

use nestkv_core::{CoreError, Session, Store};
use nestkv_testkit::prelude::*;
use proptest::prelude::*;

fn populated(entries: &[(String, String)]) -> Store {
    store_with(entries.iter().cloned())
}

proptest! {
    #[test]
    fn set_then_get_returns_value(
        entries in entries_strategy(),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        let mut store = populated(&entries);
        store.execute_set(key.as_str(), value.as_str());
        prop_assert_eq!(store.execute_get(&key), value);
    }

    #[test]
    fn unset_of_absent_key_changes_nothing(
        entries in entries_strategy(),
        key in key_strategy(),
    ) {
        let mut store = populated(&entries);
        store.execute_unset(&key);
        let before = snapshot(&store);

        store.begin();
        store.execute_unset(&key);

        prop_assert_eq!(snapshot(&store), before);
        prop_assert!(store.transactions().innermost().unwrap().is_empty());
    }

    #[test]
    fn rollback_restores_state_before_begin(
        entries in entries_strategy(),
        ops in rollback_only_strategy(40),
    ) {
        let mut store = populated(&entries);
        let before = snapshot(&store);

        store.begin();
        apply_ops(&mut store, &ops);
        while store.depth() > 0 {
            store.rollback().unwrap();
        }

        prop_assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn commit_leaves_same_state_as_no_transaction(
        entries in entries_strategy(),
        mutations in mutations_strategy(24),
    ) {
        let mut transacted = populated(&entries);
        transacted.begin();
        apply_ops(&mut transacted, &mutations);
        transacted.commit().unwrap();

        let mut direct = populated(&entries);
        apply_ops(&mut direct, &mutations);

        prop_assert_eq!(snapshot(&transacted), snapshot(&direct));
        prop_assert_eq!(transacted.depth(), 0);
    }

    #[test]
    fn num_equal_to_counts_current_values(
        entries in entries_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
        value in value_strategy(),
    ) {
        let mut store = populated(&entries);
        apply_ops(&mut store, &ops);

        let expected = count_in(&snapshot(&store), &value);
        prop_assert_eq!(store.execute_num_equal_to(&value), expected.to_string());
    }

    #[test]
    fn empty_stack_errors_leave_store_alone(entries in entries_strategy()) {
        let mut store = populated(&entries);
        let before = snapshot(&store);

        prop_assert_eq!(store.commit(), Err(CoreError::NoActiveTransaction));
        prop_assert_eq!(store.rollback(), Err(CoreError::NoActiveTransaction));
        prop_assert_eq!(snapshot(&store), before);
        prop_assert_eq!(store.depth(), 0);
    }

    #[test]
    fn session_lines_match_direct_calls(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut session = Session::new();
        for op in &ops {
            let _ = session.execute_line(&op.to_line());
        }

        let mut store = Store::new();
        apply_ops(&mut store, &ops);

        prop_assert_eq!(snapshot(session.store()), snapshot(&store));
        prop_assert_eq!(session.store().depth(), store.depth());
    }
}

#[test]
fn nested_rollback_unwinds_one_level_at_a_time() {
    let mut store = Store::new();
    store.begin();
    store.execute_set("k", "a");
    store.begin();
    store.execute_set("k", "b");

    store.rollback().unwrap();
    assert_eq!(store.execute_get("k"), "a");
    store.rollback().unwrap();
    assert_eq!(store.execute_get("k"), "NULL");
}

#[test]
fn outer_rollback_does_not_undo_committed_inner_scope() {
    let mut store = store_with([("a", "1")]);
    store.begin();
    store.execute_set("b", "2");
    store.begin();
    store.execute_set("c", "3");
    store.execute_unset("a");
    store.commit().unwrap();
    store.rollback().unwrap();

    let expected = snapshot(&store_with([("c", "3")]));
    assert_eq!(snapshot(&store), expected);
}
