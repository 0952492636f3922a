/// Assert that no player key appears twice among the server's builders
#[macro_export]
macro_rules! assert_no_duplicate_builders {
    ($server:expr) => {
        let keys = $server.builder_keys();
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(
            unique.len(),
            keys.len(),
            "builder registry holds duplicate entries: {:?}",
            keys
        );
    };
}

/// Assert that every builder has an open session under its current name
#[macro_export]
macro_rules! assert_builders_have_sessions {
    ($server:expr, $world:expr) => {
        for key in $server.builder_keys() {
            if let Ok(name) = wedit_server::shared::WorldRefType::player_name(&$world, &key) {
                assert!(
                    $server.sessions().has_session(&name),
                    "builder {} ({:?}) has no open session",
                    name,
                    key
                );
            }
        }
    };
}
