use super::perf_stats::PerfStats;
use super::GameSession;

pub(super) fn enable_perf_metrics(session: &mut GameSession, enabled: bool) {
    session.perf_enabled = enabled;
    if !enabled {
        session.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(session: &GameSession) -> PerfStats {
    session.perf_stats.clone()
}
