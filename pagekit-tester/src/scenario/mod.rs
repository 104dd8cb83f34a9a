use anyhow::Result;
use std::collections::HashSet;

pub mod mailto;
pub mod theme;

/// A named check run against the in-memory page.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub run: fn() -> Result<()>,
}

const CATALOG: &[Scenario] = &[
    Scenario {
        key: "default-idempotent",
        name: "Default scheme is stable across reloads",
        run: theme::default_idempotent,
    },
    Scenario {
        key: "round-trip",
        name: "Every scheme survives a reload",
        run: theme::round_trip,
    },
    Scenario {
        key: "last-write-wins",
        name: "Latest selection is the one persisted",
        run: theme::last_write_wins,
    },
    Scenario {
        key: "storage-failure",
        name: "Rejected storage writes are reported, not fatal",
        run: theme::storage_failure,
    },
    Scenario {
        key: "encoding",
        name: "Field values are percent-encoded",
        run: mailto::encoding,
    },
    Scenario {
        key: "missing-form",
        name: "Pages without a contact form are left alone",
        run: mailto::missing_form,
    },
    Scenario {
        key: "contact-e2e",
        name: "Contact form submission opens mail client",
        run: mailto::contact_e2e,
    },
    Scenario {
        key: "empty-form",
        name: "Empty form opens the bare action address",
        run: mailto::empty_form,
    },
    Scenario {
        key: "unreadable-fields",
        name: "Unreadable form fields never open the mail client",
        run: mailto::unreadable_fields,
    },
    Scenario {
        key: "raw-names",
        name: "Field names are sent unencoded",
        run: mailto::raw_names,
    },
];

/// Smoke set run when no scenarios are named.
pub const SMOKE: &[&str] = &["default-idempotent", "contact-e2e"];

pub fn get_scenario(key: &str) -> Option<Scenario> {
    let key = key.to_lowercase();
    CATALOG.iter().copied().find(|s| s.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.name)).collect()
}

/// Resolve the `--scenarios` list, expanding `all` and `smoke`.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut expanded = Vec::new();
    for item in requested {
        match item.as_str() {
            "all" => expanded.extend(CATALOG.iter().map(|s| s.key.to_string())),
            "smoke" => expanded.extend(SMOKE.iter().map(|s| (*s).to_string())),
            other => expanded.push(other.to_lowercase()),
        }
    }
    let mut seen = HashSet::new();
    expanded.retain(|key| seen.insert(key.clone()));
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_scenario_passes() {
        for scenario in CATALOG {
            (scenario.run)().unwrap_or_else(|e| panic!("{} failed: {e:#}", scenario.key));
        }
    }

    #[test]
    fn keys_are_unique_and_resolvable() {
        for (key, _) in list_scenarios() {
            assert_eq!(get_scenario(key).map(|s| s.key), Some(key));
        }
        let mut keys: Vec<_> = CATALOG.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(get_scenario("Contact-E2E").is_some());
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn all_expands_to_catalog() {
        let keys = expand_scenarios(&["all".to_string()]);
        assert_eq!(keys.len(), CATALOG.len());
        let smoke = expand_scenarios(&["smoke".to_string()]);
        assert_eq!(smoke, vec!["default-idempotent", "contact-e2e"]);
    }

    #[test]
    fn repeated_keys_run_once_in_first_seen_order() {
        let keys = expand_scenarios(&[
            "contact-e2e".to_string(),
            "all".to_string(),
            "Contact-E2E".to_string(),
        ]);
        assert_eq!(keys.len(), CATALOG.len());
        assert_eq!(keys[0], "contact-e2e");
        assert_eq!(keys.iter().filter(|k| *k == "contact-e2e").count(), 1);
    }
}
