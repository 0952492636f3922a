//! Tests for BuilderRegistry membership rules
//! Entries are resolved through the world lazily, so these tests pay close
//! attention to players that disconnect without a leave notification.

use wedit_server::{BuilderRegistry, Demotion};
use wedit_test::TestWorld;

#[test]
fn admit_is_idempotent_by_identity() {
    let mut world = TestWorld::new();
    let steve = world.connect("steve", &["worldedit"]);
    let mut registry = BuilderRegistry::new();

    assert!(registry.admit(&steve));
    assert!(!registry.admit(&steve));
    assert!(!registry.admit(&steve));

    assert_eq!(registry.len(), 1);
    assert!(registry.is_active(&steve));
}

#[test]
fn demote_removes_every_entry_with_the_name() {
    let mut world = TestWorld::new();
    let old_steve = world.connect("steve", &["worldedit"]);
    let new_steve = world.connect("steve", &["worldedit"]);
    let alex = world.connect("alex", &["worldedit"]);

    let mut registry = BuilderRegistry::new();
    registry.admit(&old_steve);
    registry.admit(&alex);
    registry.admit(&new_steve);

    let demotion = registry.demote(&world, "steve");

    assert_eq!(demotion.named, vec![old_steve, new_steve]);
    assert!(demotion.stale.is_empty());
    assert!(!registry.is_active(&old_steve));
    assert!(!registry.is_active(&new_steve));
    assert!(registry.is_active(&alex));
    assert_eq!(registry.len(), 1);
}

#[test]
fn demote_sweeps_unreadable_entries_separately() {
    let mut world = TestWorld::new();
    let ghost = world.connect("ghost", &["worldedit"]);
    let alex = world.connect("alex", &["worldedit"]);

    let mut registry = BuilderRegistry::new();
    registry.admit(&ghost);
    registry.admit(&alex);

    world.disconnect(&ghost);
    let demotion = registry.demote(&world, "someone_else");

    assert_eq!(
        demotion,
        Demotion {
            named: Vec::new(),
            stale: vec![ghost],
        }
    );
    assert!(registry.is_active(&alex));
}

#[test]
fn demote_unknown_name_keeps_live_entries() {
    let mut world = TestWorld::new();
    let alex = world.connect("alex", &["worldedit"]);

    let mut registry = BuilderRegistry::new();
    registry.admit(&alex);

    assert_eq!(registry.demote(&world, "steve"), Demotion::default());
    assert_eq!(registry.len(), 1);
}

#[test]
fn remove_by_key_and_preserve_order() {
    let mut world = TestWorld::new();
    let first = world.connect("first", &[]);
    let second = world.connect("second", &[]);
    let third = world.connect("third", &[]);

    let mut registry = BuilderRegistry::new();
    registry.admit(&first);
    registry.admit(&second);
    registry.admit(&third);

    assert!(registry.remove(&second));
    assert!(!registry.remove(&second));

    let keys: Vec<_> = registry.keys().copied().collect();
    assert_eq!(keys, vec![first, third]);

    registry.clear();
    assert!(registry.is_empty());
}
