//! Resume Screen Common Library
//!
//! CLIとテストで共有される型・プロンプト・パーサー

pub mod types;
pub mod layout;
pub mod error;
pub mod parser;
pub mod prompts;
#[cfg(feature = "excel")]
pub mod export;

pub use types::{CandidateFields, CandidateRecord, DemandSet, Qualification};
pub use layout::{ReportTable, COLUMN_ORDER, HEADER_ROWS, FIRST_DATA_ROW, row_index_for};
pub use error::{Error, Result};
pub use parser::{
    extract_json, parse_candidate_fields, parse_demand_set, parse_qualification,
    NOT_QUALIFIED_KEYWORDS,
};
pub use prompts::{
    build_demands_prompt, build_extraction_prompt, build_personality_prompt,
    build_qualification_prompt,
};
