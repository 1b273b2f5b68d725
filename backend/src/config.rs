use serde::{Deserialize, Serialize};
use shared::ContentLength;
use shared::Channel;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Invalid config file {0}: {1}")]
    Yaml(PathBuf, #[source] serde_yaml::Error),
    #[error("Invalid value for {0}: {1}")]
    Env(&'static str, String),
    #[error("Invalid config file {0}: {1}")]
    Invalid(PathBuf, String),
}

const MAX_DELAY_MS: u64 = 10 * 60 * 1000;
const MAX_UPLOAD_BYTES: usize = 1024 * 1024 * 1024;

/// Process-level settings taken from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub simulation_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Env("PORT", e.to_string()))?,
            Err(_) => 8081,
        };
        let static_dir = std::env::var("STATIC_DIR").ok().map(PathBuf::from);
        let simulation_path = std::env::var("STUDIO_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_simulation_path());

        Ok(Self {
            host,
            port,
            static_dir,
            simulation_path,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_simulation_path() -> PathBuf {
    match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(manifest_dir) => Path::new(&manifest_dir).join("../config/simulation.yaml"),
        Err(_) => PathBuf::from("config/simulation.yaml"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub version: f32,
    pub latency: LatencyConfig,
    pub detection: DetectionDefaults,
    pub generation: GenerationDefaults,
    pub uploads: UploadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Multiplier applied to every simulated delay; 0 disables them.
    pub scale: f64,
    pub detection: LatencyRange,
    pub rethreshold: LatencyRange,
    pub text: LatencyRange,
    pub generation: LatencyRange,
    pub multimodal: LatencyRange,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionDefaults {
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    pub creativity: u8,
    pub length: ContentLength,
    /// Fall back to `story` for unknown content types instead of rejecting.
    pub lenient_content_type: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: usize,
    pub store_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            version: 1.0,
            latency: LatencyConfig::default(),
            detection: DetectionDefaults::default(),
            generation: GenerationDefaults::default(),
            uploads: UploadConfig::default(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            detection: LatencyRange::new(2000, 3000),
            rethreshold: LatencyRange::new(100, 100),
            text: LatencyRange::new(1500, 2500),
            generation: LatencyRange::new(2500, 4000),
            multimodal: LatencyRange::new(3000, 5000),
        }
    }
}

impl Default for DetectionDefaults {
    fn default() -> Self {
        Self {
            threshold: shared::detection::DEFAULT_THRESHOLD,
        }
    }
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            creativity: shared::generator::DEFAULT_CREATIVITY,
            length: ContentLength::Medium,
            lenient_content_type: false,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: 50 * 1024 * 1024,
            store_capacity: 256,
        }
    }
}

impl LatencyRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Uniform draw in `[min_ms, max_ms]`, scaled. Reversed bounds are swapped.
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R, scale: f64) -> Duration {
        let (lo, hi) = if self.min_ms <= self.max_ms {
            (self.min_ms, self.max_ms)
        } else {
            (self.max_ms, self.min_ms)
        };
        let millis = rng.random_range(lo..=hi) as f64 * scale.max(0.0);
        Duration::try_from_secs_f64(millis / 1000.0).unwrap_or_default()
    }

    fn upper_ms(&self) -> u64 {
        self.min_ms.max(self.max_ms)
    }
}

impl LatencyConfig {
    fn ranges(&self) -> [(&'static str, LatencyRange); 5] {
        [
            ("detection", self.detection),
            ("rethreshold", self.rethreshold),
            ("text", self.text),
            ("generation", self.generation),
            ("multimodal", self.multimodal),
        ]
    }

    /// Upper bound of any scaled delay.
    pub fn longest(&self) -> Duration {
        let max_ms = self
            .ranges()
            .iter()
            .map(|(_, range)| range.upper_ms())
            .max()
            .unwrap_or(0);
        Duration::try_from_secs_f64(max_ms as f64 * self.scale.max(0.0) / 1000.0)
            .unwrap_or(Duration::MAX)
    }

    pub fn range_for(&self, channel: Channel) -> LatencyRange {
        match channel {
            Channel::Detection => self.detection,
            Channel::Text => self.text,
            Channel::Generation => self.generation,
            Channel::MultiModal => self.multimodal,
        }
    }
}

impl SimulationConfig {
    /// Reads the YAML file at `path`. A missing file yields the defaults; a
    /// present but malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_str = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "Simulation config {} not found, using defaults",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(path.to_path_buf(), e)),
        };
        let config = Self::from_yaml(&config_str)
            .map_err(|e| ConfigError::Yaml(path.to_path_buf(), e))?;
        config
            .validate()
            .map_err(|reason| ConfigError::Invalid(path.to_path_buf(), reason))?;
        Ok(config)
    }

    /// Checks the values serde cannot: finite scale, bounded delays and sizes.
    pub fn validate(&self) -> Result<(), String> {
        let scale = self.latency.scale;
        if !scale.is_finite() || scale < 0.0 {
            return Err(format!("latency.scale must be a finite value >= 0, got {}", scale));
        }
        for (name, range) in self.latency.ranges() {
            if range.upper_ms() > MAX_DELAY_MS {
                return Err(format!(
                    "latency.{} must not exceed {} ms, got {}",
                    name,
                    MAX_DELAY_MS,
                    range.upper_ms()
                ));
            }
        }
        if self.latency.longest() > Duration::from_millis(MAX_DELAY_MS) {
            return Err(format!(
                "scaled delays must not exceed {} ms, got {:?}",
                MAX_DELAY_MS,
                self.latency.longest()
            ));
        }

        let threshold = self.detection.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(format!("detection.threshold must be in [0, 1], got {}", threshold));
        }
        let creativity = self.generation.creativity;
        if !(shared::generator::MIN_CREATIVITY..=shared::generator::MAX_CREATIVITY)
            .contains(&creativity)
        {
            return Err(format!("generation.creativity must be in 1..=10, got {}", creativity));
        }

        let max_bytes = self.uploads.max_bytes;
        if max_bytes == 0 || max_bytes > MAX_UPLOAD_BYTES {
            return Err(format!(
                "uploads.max_bytes must be in 1..={}, got {}",
                MAX_UPLOAD_BYTES, max_bytes
            ));
        }
        if self.uploads.store_capacity == 0 {
            return Err("uploads.store_capacity must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    /// Defaults with every delay disabled.
    pub fn instant() -> Self {
        let mut config = Self::default();
        config.latency.scale = 0.0;
        config
    }
}
