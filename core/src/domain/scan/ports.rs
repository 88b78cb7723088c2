use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::{
        entities::ConstraintSet,
        value_objects::{ScanOptions, ScanReport},
    },
};

pub trait ScanService: Send + Sync {
    /// Classifies a fresh snapshot of the menu. Never fails: an unreachable
    /// record store is reported through the report's status.
    fn scan(&self, constraints: ConstraintSet) -> impl Future<Output = ScanReport> + Send;

    fn scan_options(&self) -> impl Future<Output = Result<ScanOptions, CoreError>> + Send;
}
