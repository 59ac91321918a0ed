use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricMode {
    Ytd,
    Window,
    Lifetime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolMode {
    CurrentYear,
    FullHistory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub rows: Option<u64>,
    pub records: Option<u64>,
    pub dropped_rank: Option<u64>,
    pub dropped_date: Option<u64>,
    pub entities: Option<u64>,
    pub weeks: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMeta {
    pub top_n: u64,
    pub metric: MetricMode,
    pub pool: PoolMode,
    pub start_year: Option<i32>,
    pub carry_in_weeks: u32,
    pub boundary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameEntryV1 {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub value: u64,
    pub tie_rank: Option<u32>,
    pub ytd: u64,
    pub window: u64,
    pub lifetime: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameV1 {
    pub week: String,
    pub entries: Vec<FrameEntryV1>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartFramesV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub config: ConfigMeta,
    pub warnings: Vec<String>,
    pub frames: Vec<FrameV1>,
}

impl ChartFramesV1 {
    pub fn empty(
        tool_version: &str,
        top_n: usize,
        metric: MetricMode,
        pool: PoolMode,
        start_year: Option<i32>,
        carry_in_weeks: u32,
    ) -> Self {
        Self {
            tool: "rankframes".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                rows: None,
                records: None,
                dropped_rank: None,
                dropped_date: None,
                entities: None,
                weeks: None,
            },
            config: ConfigMeta {
                top_n: top_n as u64,
                metric,
                pool,
                start_year,
                carry_in_weeks,
                boundary: None,
            },
            warnings: Vec::new(),
            frames: Vec::new(),
        }
    }
}
