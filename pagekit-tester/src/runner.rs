use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub key: String,
    pub scenario_name: String,
    pub passed: bool,
    pub failure: Option<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs_f64().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(secs))
    }
}

pub struct Runner {
    verbose: bool,
}

impl Runner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run(&self, scenario: &Scenario) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Running scenario: {}", scenario.name.bright_white());
        }
        let start = Instant::now();
        let outcome = (scenario.run)();
        let duration = start.elapsed();
        log::debug!("{} finished in {duration:?}", scenario.key);

        let failure = outcome.err().map(|e| format!("{e:#}"));
        if self.verbose {
            if let Some(reason) = &failure {
                println!("  ❌ {}", reason.clone().red());
            }
        }
        ScenarioResult {
            key: scenario.key.to_string(),
            scenario_name: scenario.name.to_string(),
            passed: failure.is_none(),
            failure,
            duration,
        }
    }
}
