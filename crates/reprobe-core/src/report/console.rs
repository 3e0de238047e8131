use crate::model::{AnalyzedCase, ExecutionResult, ReproClass, Verdict};

pub fn print_summary(results: &[ExecutionResult], analyzed: &[AnalyzedCase]) {
    let mut pass = 0;
    let mut fail = 0;
    let mut error = 0;
    for r in results {
        match r.verdict {
            Verdict::Pass => pass += 1,
            Verdict::Fail => fail += 1,
            Verdict::Error => error += 1,
        }
    }

    let mut deterministic = 0;
    let mut flaky = 0;
    let mut not_reproduced = 0;
    for a in analyzed {
        match a.repro.classification() {
            ReproClass::Deterministic => deterministic += 1,
            ReproClass::Flaky => flaky += 1,
            ReproClass::NotReproduced => not_reproduced += 1,
            ReproClass::NotRetried => {}
        }
    }

    eprintln!(
        "Results: pass={} fail={} error={}",
        pass, fail, error
    );
    if fail > 0 {
        eprintln!(
            "Failures: deterministic={} flaky={} not-reproduced={}",
            deterministic, flaky, not_reproduced
        );
    }
}
