use crate::cli::args::RankArgs;
use crate::exit_codes::{SETUP_ERROR, SUCCESS};
use reprobe_core::config::load_plan;
use reprobe_core::rank::rank;

pub(crate) fn run(args: RankArgs) -> anyhow::Result<i32> {
    let cases = match load_plan(&args.plan) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("setup error: {e}");
            return Ok(SETUP_ERROR);
        }
    };

    let scored = rank(cases);
    let top: Vec<_> = scored.iter().take(args.top_k).collect();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let v = serde_json::json!({ "top_k": top });
    std::fs::write(&args.out, serde_json::to_string_pretty(&v)?)?;
    eprintln!("wrote top {} to {}", top.len(), args.out.display());
    Ok(SUCCESS)
}
