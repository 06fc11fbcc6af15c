use std::sync::Arc;

use bingo_rooms::{EventDistributor, InMemoryStore, KeySpaceAdmin, KeyValueStore};

use super::mocks::FaultyStore;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    /// The backing store, for seeding and inspection
    pub memory: InMemoryStore,
    pub faulty: FaultyStore,
    pub keyspace: KeySpaceAdmin,
    pub distributor: EventDistributor,
}

impl TestSetup {
    /// Keys left under the given pattern
    pub async fn remaining(&self, pattern: &str) -> Vec<String> {
        self.memory.keys(pattern).await.unwrap()
    }
}

pub struct TestSetupBuilder {
    keys: Vec<String>,
    fail_del_prefix: Option<String>,
    fail_keys_pattern: Option<String>,
    fail_publish: bool,
    over_report_del: bool,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            keys: vec![],
            fail_del_prefix: None,
            fail_keys_pattern: None,
            fail_publish: false,
            over_report_del: false,
        }
    }

    pub fn with_keys(mut self, keys: Vec<&str>) -> Self {
        self.keys = keys.into_iter().map(|s| s.to_string()).collect();
        self
    }

    /// Two rooms plus one player, game and boards key
    pub fn with_sample_keys(self) -> Self {
        self.with_keys(vec!["room:1", "room:2", "player:9", "game:5", "boards:5"])
    }

    pub fn failing_del_on(mut self, prefix: &str) -> Self {
        self.fail_del_prefix = Some(prefix.to_string());
        self
    }

    pub fn failing_keys_on(mut self, pattern: &str) -> Self {
        self.fail_keys_pattern = Some(pattern.to_string());
        self
    }

    pub fn failing_publish(mut self) -> Self {
        self.fail_publish = true;
        self
    }

    pub fn over_reporting_del(mut self) -> Self {
        self.over_report_del = true;
        self
    }

    pub async fn build(self) -> TestSetup {
        let memory = InMemoryStore::new();
        for key in &self.keys {
            memory.set(key, "{}").await.unwrap();
        }

        let mut faulty = FaultyStore::new(memory.clone());
        if let Some(prefix) = &self.fail_del_prefix {
            faulty = faulty.failing_del_on(prefix);
        }
        if let Some(pattern) = &self.fail_keys_pattern {
            faulty = faulty.failing_keys_on(pattern);
        }
        if self.fail_publish {
            faulty = faulty.failing_publish();
        }
        if self.over_report_del {
            faulty = faulty.over_reporting_del();
        }

        let store: Arc<dyn KeyValueStore> = Arc::new(faulty.clone());

        TestSetup {
            memory,
            faulty,
            keyspace: KeySpaceAdmin::new(Arc::clone(&store)),
            distributor: EventDistributor::new(store),
        }
    }
}
