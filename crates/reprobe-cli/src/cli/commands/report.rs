use crate::cli::args::ReportArgs;
use crate::exit_codes::{SETUP_ERROR, SUCCESS};
use reprobe_core::report::json::{
    read_analyzed, read_raw_results, write_report, ANALYZED_FILE, RAW_RESULTS_FILE, REPORT_FILE,
};
use reprobe_core::report::build_report;

pub(crate) fn run(args: ReportArgs) -> anyhow::Result<i32> {
    let results = match read_raw_results(&args.run_dir.join(RAW_RESULTS_FILE)) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("setup error: no raw results in {}: {e}", args.run_dir.display());
            return Ok(SETUP_ERROR);
        }
    };
    // A run interrupted before analysis still gets a report.
    let analyzed = match read_analyzed(&args.run_dir.join(ANALYZED_FILE)) {
        Ok(analyzed) => analyzed,
        Err(e) => {
            eprintln!("warning: no analyzed results, reporting raw only: {e}");
            Vec::new()
        }
    };

    let report = build_report(&args.run_dir, &results, &analyzed);
    let out = args
        .out
        .unwrap_or_else(|| args.run_dir.join(REPORT_FILE));
    write_report(&report, &out)?;
    eprintln!("wrote report for {} cases to {}", report.cases.len(), out.display());
    Ok(SUCCESS)
}
