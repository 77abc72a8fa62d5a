// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enumerate::{AdjacencyList, Degeneracy, Enumerator, Hybrid, Tomita};
use crate::error::{CliqueError, CliqueResult};

/// Below this many vertices in `P ∪ X` the hybrid strategy stops pivoting.
pub const DEFAULT_HYBRID_THRESHOLD: usize = 16;

/// Enumeration strategy, selected once before the search starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Pivoting search over the whole vertex set.
    Tomita,
    /// Plain branching over every candidate, no pivot.
    #[serde(rename = "adjlist")]
    AdjList,
    /// Pivoting search seeded vertex by vertex in degeneracy order.
    #[default]
    Degeneracy,
    /// Degeneracy seeding, dropping the pivot on small subproblems.
    Hybrid,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Tomita,
        Algorithm::AdjList,
        Algorithm::Degeneracy,
        Algorithm::Hybrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Tomita => "tomita",
            Algorithm::AdjList => "adjlist",
            Algorithm::Degeneracy => "degeneracy",
            Algorithm::Hybrid => "hybrid",
        }
    }

    /// Strategy with default settings.
    pub fn enumerator(self) -> Box<dyn Enumerator> {
        EnumerationConfig {
            algorithm: self,
            ..EnumerationConfig::default()
        }
        .enumerator()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CliqueError;

    fn from_str(name: &str) -> CliqueResult<Self> {
        match name {
            "tomita" => Ok(Algorithm::Tomita),
            "adjlist" => Ok(Algorithm::AdjList),
            "degeneracy" => Ok(Algorithm::Degeneracy),
            "hybrid" => Ok(Algorithm::Hybrid),
            other => Err(CliqueError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Settings for one enumeration run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnumerationConfig {
    pub algorithm: Algorithm,
    /// Size of `P ∪ X` under which [`Algorithm::Hybrid`] branches on every
    /// candidate. Ignored by the other strategies.
    pub hybrid_threshold: usize,
    /// Spread the degeneracy-ordered outer loop over the rayon pool when
    /// collecting all cliques. Output order is unchanged.
    pub parallel: bool,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        EnumerationConfig {
            algorithm: Algorithm::default(),
            hybrid_threshold: DEFAULT_HYBRID_THRESHOLD,
            parallel: false,
        }
    }
}

impl EnumerationConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        EnumerationConfig {
            algorithm,
            ..Self::default()
        }
    }

    /// Parses and validates a JSON document; missing fields take defaults.
    pub fn from_json_str(json: &str) -> CliqueResult<Self> {
        let config: EnumerationConfig =
            serde_json::from_str(json).map_err(|e| CliqueError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CliqueResult<()> {
        if self.hybrid_threshold == 0 {
            return Err(CliqueError::Config(
                "hybrid_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the strategy this configuration describes.
    pub fn enumerator(&self) -> Box<dyn Enumerator> {
        match self.algorithm {
            Algorithm::Tomita => Box::new(Tomita),
            Algorithm::AdjList => Box::new(AdjacencyList),
            Algorithm::Degeneracy => Box::new(Degeneracy {
                parallel: self.parallel,
            }),
            Algorithm::Hybrid => Box::new(Hybrid {
                threshold: self.hybrid_threshold,
                parallel: self.parallel,
            }),
        }
    }
}
