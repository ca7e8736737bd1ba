//! Defect Inspector Common Library
//!
//! CLIとWeb(WASM)で共有される型・ビューモデル・アップロード制御

pub mod types;
pub mod error;
pub mod parser;
pub mod upload;
pub mod i18n;
pub mod view;
pub mod state;
pub mod controller;
pub mod endpoints;
pub mod settings;

pub use types::{Confidence, Defect, DetectionResult, ImageRecord, RegionResult, RegionStatus, UploadReply};
pub use error::{Error, Result};
pub use parser::{parse_detection_response, parse_upload_response};
pub use upload::UploadEvent;
pub use i18n::{Labels, Locale};
pub use view::{render_results, DefectLine, RegionView, ResultsView, StatusIcon, SvgShape};
pub use state::{Panel, UiState};
pub use controller::{inspect, InspectionApi, Inspection, UploadController};
pub use settings::ClientSettings;
