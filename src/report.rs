use tokio::io::AsyncWriteExt;
use tracing::{error, info};

use crate::suite::SuiteReport;

pub(crate) fn print_summary(report: &SuiteReport) {
    info!("========== Test Summary ==========");
    for line in report.summary_lines() {
        println!("{}", line);
    }
    if report.success {
        info!("All end-to-end tests passed!");
    } else {
        error!("{} test(s) failed.", report.failed);
    }
}

pub(crate) async fn export_json(path: &str, report: &SuiteReport) -> Result<(), std::io::Error> {
    let json = serde_json::to_vec_pretty(report)?;
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(&json).await?;
    file.write_all(b"\n").await?;
    file.flush().await?;
    Ok(())
}
