/// PROPERTY-BASED TESTS: Builder registry invariants
///
/// Drives a ready server through random sequences of joins, reconnects,
/// tag changes, silent disconnects and leaves.
///
/// Key invariants:
/// 1. No player key is ever registered twice
/// 2. Every builder has a session open under its name
/// 3. After a tick, a connected player is a builder exactly when it holds a
///    permission tag, and no disconnected player remains registered

use proptest::prelude::*;

use wedit_server::shared::{PlayerKey, WorldRefType};
use wedit_test::TestServer;

const TAG_SETS: [(&[&str], bool); 6] = [
    (&[], false),
    (&["member"], false),
    (&["worldedit"], true),
    (&["worldedit.builder"], true),
    (&["member", "worldedit.admin"], true),
    (&["WorldEdit"], false),
];

#[derive(Clone, Debug)]
enum Op {
    Join(usize),
    Reconnect(usize, usize),
    SetTags(usize, usize),
    Vanish(usize),
    Leave(usize),
    Loaded(usize),
    Tick,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..TAG_SETS.len()).prop_map(Op::Join),
        (0usize..8, 0..TAG_SETS.len()).prop_map(|(player, tags)| Op::Reconnect(player, tags)),
        (0usize..8, 0..TAG_SETS.len()).prop_map(|(player, tags)| Op::SetTags(player, tags)),
        (0usize..8).prop_map(Op::Vanish),
        (0usize..8).prop_map(Op::Leave),
        (0usize..8).prop_map(Op::Loaded),
        Just(Op::Tick),
        Just(Op::Tick),
    ]
}

// One entry per name ever joined; the key is the name's most recent connection
struct Roster {
    players: Vec<(String, PlayerKey, bool)>,
}

impl Roster {
    fn pick(&self, index: usize) -> Option<usize> {
        if self.players.is_empty() {
            None
        } else {
            Some(index % self.players.len())
        }
    }
}

fn apply(test: &mut TestServer, roster: &mut Roster, op: &Op) {
    match *op {
        Op::Join(tags) => {
            let (tag_set, eligible) = TAG_SETS[tags];
            let name = format!("player_{}", roster.players.len());
            let key = test.world.connect(&name, tag_set);
            roster.players.push((name, key, eligible));
        }
        Op::Reconnect(index, tags) => {
            let Some(index) = roster.pick(index) else { return };
            let (tag_set, eligible) = TAG_SETS[tags];
            let (name, old_key, _) = roster.players[index].clone();
            test.world.disconnect(&old_key);
            let key = test.world.connect(&name, tag_set);
            roster.players[index] = (name, key, eligible);
        }
        Op::SetTags(index, tags) => {
            let Some(index) = roster.pick(index) else { return };
            let (tag_set, eligible) = TAG_SETS[tags];
            let key = roster.players[index].1;
            if test.world.player(&key).connected {
                test.world.set_tags(&key, tag_set);
                roster.players[index].2 = eligible;
            }
        }
        Op::Vanish(index) => {
            let Some(index) = roster.pick(index) else { return };
            test.world.disconnect(&roster.players[index].1);
        }
        Op::Leave(index) => {
            let Some(index) = roster.pick(index) else { return };
            let (name, key, _) = roster.players[index].clone();
            test.world.disconnect(&key);
            test.server.player_leave(&test.world, &name);
        }
        Op::Loaded(index) => {
            let Some(index) = roster.pick(index) else { return };
            let key = roster.players[index].1;
            test.server.player_loaded(&mut test.world, &key);
        }
        Op::Tick => test.tick(),
    }
}

proptest! {
    #[test]
    fn prop_registry_matches_tags_after_every_tick(
        ops in prop::collection::vec(op_strategy(), 1..60)
    ) {
        let mut test = TestServer::default();
        let mut roster = Roster { players: Vec::new() };

        for op in &ops {
            apply(&mut test, &mut roster, op);

            let keys = test.server.builder_keys();
            let unique: std::collections::HashSet<_> = keys.iter().collect();
            prop_assert_eq!(unique.len(), keys.len(), "duplicate builders after {:?}", op);

            for key in &keys {
                if let Ok(name) = test.world.player_name(key) {
                    prop_assert!(test.server.sessions().has_session(&name));
                }
            }

            if !matches!(op, Op::Tick) {
                continue;
            }

            for key in &keys {
                prop_assert!(
                    test.world.player(key).connected,
                    "disconnected player {:?} is still a builder",
                    key
                );
            }
            for (name, key, eligible) in &roster.players {
                if !test.world.player(key).connected {
                    continue;
                }
                prop_assert_eq!(
                    test.server.is_builder(key),
                    *eligible,
                    "{} holds tags {:?}",
                    name,
                    &test.world.player(key).tags
                );
            }
        }
    }

    /// A player whose tags never change is told about its permission at most once
    #[test]
    fn prop_permission_notices_are_not_repeated(
        tags in 0..TAG_SETS.len(),
        ticks in 1usize..20,
    ) {
        let mut test = TestServer::default();
        let (tag_set, eligible) = TAG_SETS[tags];
        let key = test.world.connect("steve", tag_set);

        test.tick_n(ticks);

        prop_assert_eq!(test.server.is_builder(&key), eligible);
        prop_assert!(test.world.messages(&key).len() <= 1);
    }
}
