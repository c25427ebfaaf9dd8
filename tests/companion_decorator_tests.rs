//! Integration tests for companion-file mirroring at the chain level.

mod common;

use asset_vcs::{
    CompanionFileDecorator, DataCarrier, FileStatus, InternedPath, LoopbackCommands, StatusDatabase,
    StatusLevel, VersionControlCommands, VersionControlStatus,
};
use common::fixtures::{init_logging, paths};
use std::sync::Arc;

fn companion_chain() -> (
    Arc<DataCarrier>,
    Arc<StatusDatabase>,
    CompanionFileDecorator<LoopbackCommands>,
) {
    let carrier = Arc::new(DataCarrier::default());
    let db = Arc::new(StatusDatabase::new());
    let chain = CompanionFileDecorator::with_defaults(LoopbackCommands::new(
        Arc::clone(&carrier),
        Arc::clone(&db),
    ));
    (carrier, db, chain)
}

fn failing_companion_chain(fail_path: &str) -> (Arc<DataCarrier>, CompanionFileDecorator<LoopbackCommands>) {
    let carrier = Arc::new(DataCarrier::default());
    let db = Arc::new(StatusDatabase::new());
    let terminal = LoopbackCommands::new(Arc::clone(&carrier), db).fail_on(fail_path);
    (carrier, CompanionFileDecorator::with_defaults(terminal))
}

#[test]
fn test_add_forwards_primary_before_companion() {
    init_logging();
    let (carrier, _db, chain) = companion_chain();

    assert!(chain.add(&paths(&["Assets/foo.cs"])));
    assert_eq!(
        carrier.recorded(),
        paths(&["Assets/foo.cs", "Assets/foo.cs.meta"])
    );
}

#[test]
fn test_add_of_companion_path_is_not_double_suffixed() {
    let (carrier, _db, chain) = companion_chain();

    assert!(chain.add(&paths(&["Assets/foo.cs.meta"])));
    assert_eq!(carrier.recorded(), paths(&["Assets/foo.cs.meta"]));
}

#[test]
fn test_move_issues_primary_then_companion_call() {
    let (carrier, _db, chain) = companion_chain();

    assert!(chain.move_asset(
        &InternedPath::new("Assets/a.cs"),
        &InternedPath::new("Assets/b.cs")
    ));
    assert_eq!(
        carrier.moves(),
        vec![
            (
                InternedPath::new("Assets/a.cs"),
                InternedPath::new("Assets/b.cs")
            ),
            (
                InternedPath::new("Assets/a.cs.meta"),
                InternedPath::new("Assets/b.cs.meta")
            ),
        ]
    );
}

#[test]
fn test_move_companion_failure_is_overall_failure() {
    init_logging();
    let (carrier, chain) = failing_companion_chain("Assets/b.cs.meta");

    // Primary inner move succeeds, companion move fails: overall false, and
    // both calls were issued (the primary effect already happened).
    assert!(!chain.move_asset(
        &InternedPath::new("Assets/a.cs"),
        &InternedPath::new("Assets/b.cs")
    ));
    assert_eq!(carrier.moves().len(), 2);
}

#[test]
fn test_move_primary_failure_skips_companion() {
    let (carrier, chain) = failing_companion_chain("Assets/b.cs");

    assert!(!chain.move_asset(
        &InternedPath::new("Assets/a.cs"),
        &InternedPath::new("Assets/b.cs")
    ));
    assert_eq!(carrier.moves().len(), 1);
}

#[test]
fn test_move_outside_root_is_single_call() {
    let (carrier, _db, chain) = companion_chain();

    assert!(chain.move_asset(
        &InternedPath::new("Packages/manifest.json"),
        &InternedPath::new("Packages/manifest2.json")
    ));
    assert_eq!(carrier.moves().len(), 1);
}

#[test]
fn test_filtered_assets_hide_companion_records() {
    let (_carrier, db, chain) = companion_chain();
    db.set(VersionControlStatus::local(
        "Assets/foo.cs",
        FileStatus::Modified,
    ));
    db.set(VersionControlStatus::local(
        "Assets/foo.cs.meta",
        FileStatus::Modified,
    ));

    let visible = chain.get_filtered_assets(&|_| true);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].asset_path.as_str(), "Assets/foo.cs");
}

#[test]
fn test_request_status_preserves_none_sentinel() {
    let (carrier, _db, chain) = companion_chain();

    assert!(chain.request_status(None, StatusLevel::Remote));
    assert!(chain.update(None));
    assert_eq!(carrier.scopes(), vec![None, None]);
}

#[test]
fn test_status_scope_gains_companions() {
    let (carrier, _db, chain) = companion_chain();

    assert!(chain.status(Some(&paths(&["Assets/foo.cs"])), StatusLevel::Local));
    assert_eq!(
        carrier.scopes(),
        vec![Some(paths(&["Assets/foo.cs", "Assets/foo.cs.meta"]))]
    );
}

#[test]
fn test_remove_from_database_evicts_companion_records() {
    let (_carrier, db, chain) = companion_chain();
    db.set(VersionControlStatus::local(
        "Assets/foo.cs",
        FileStatus::Normal,
    ));
    db.set(VersionControlStatus::local(
        "Assets/foo.cs.meta",
        FileStatus::Normal,
    ));

    chain.remove_from_database(&paths(&["Assets/foo.cs"]));
    assert!(db.is_empty());
}
