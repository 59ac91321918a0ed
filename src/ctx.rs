use std::path::PathBuf;

use chrono::NaiveDate;

use crate::aggregate::EntityAggregates;
use crate::frames::Frame;
use crate::io::rows::RawRow;
use crate::normalize::NormalizedRecord;
use crate::schema::v1::{ChartFramesV1, MetricMode, PoolMode};

#[derive(Debug, Clone, Default)]
pub struct InputMeta {
    pub rows: Option<u64>,
    pub records: Option<u64>,
    pub dropped_rank: Option<u64>,
    pub dropped_date: Option<u64>,
    pub entities: Option<u64>,
    pub weeks: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// Per-run state threaded through the pipeline stages. Built once per
/// invocation; nothing here outlives the run.
#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub top_n: usize,
    pub metric: MetricMode,
    pub pool: PoolMode,
    pub start_year: Option<i32>,
    pub carry_in_weeks: u32,
    pub write_json: bool,
    pub write_tsv: bool,
    pub rows: Vec<RawRow>,
    pub records: Vec<NormalizedRecord>,
    pub dropped_rank: usize,
    pub dropped_date: usize,
    pub boundary: Option<NaiveDate>,
    pub aggregates: Option<EntityAggregates>,
    pub timeline: Vec<NaiveDate>,
    pub frames: Vec<Frame>,
    pub warnings: Vec<String>,
    pub input_meta: InputMeta,
    pub output: OutputPaths,
    pub report: ChartFramesV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        top_n: usize,
        metric: MetricMode,
        pool: PoolMode,
        start_year: Option<i32>,
        carry_in_weeks: u32,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("frames.json");
        let tsv_path = out_dir.join("frames.tsv");
        let report = ChartFramesV1::empty(
            tool_version,
            top_n,
            metric,
            pool,
            start_year,
            carry_in_weeks,
        );
        Self {
            input,
            top_n,
            metric,
            pool,
            start_year,
            carry_in_weeks,
            write_json,
            write_tsv,
            rows: Vec::new(),
            records: Vec::new(),
            dropped_rank: 0,
            dropped_date: 0,
            boundary: None,
            aggregates: None,
            timeline: Vec::new(),
            frames: Vec::new(),
            warnings: Vec::new(),
            input_meta: InputMeta::default(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }
}
