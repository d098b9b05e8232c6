use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "base_url")]
    pub url: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
    pub poll_interval: Option<DurationValue>,
    pub max_wait: Option<DurationValue>,
    pub timeout: Option<DurationValue>,
    pub page_size: Option<u64>,
    pub report: Option<String>,
}

/// Either whole seconds or a string such as `"250ms"` or `"2m"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
