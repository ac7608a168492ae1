//! Balance simulator for Neon Clicker.
//! Run with: cargo test simulate_optimal -- --nocapture

#[cfg(test)]
mod tests {
    use crate::game::logic;
    use crate::game::state::{BoostKind, GameState, CATALOG, TICKS_PER_SEC};

    /// Assumed sustained click rate for a human player.
    const CLICKS_PER_SEC: u32 = 5;

    /// Payback time in seconds for a boost: how long until the extra income
    /// covers the price. Click yield is valued at the assumed click rate.
    fn payback_seconds(spec_idx: usize) -> f64 {
        let spec = &CATALOG[spec_idx];
        let income_gain = match spec.kind {
            BoostKind::Click => spec.yield_delta * CLICKS_PER_SEC as u64,
            BoostKind::Auto => spec.yield_delta,
        };
        spec.cost as f64 / income_gain as f64
    }

    /// Pick the affordable unpurchased boost with the best payback.
    fn find_best_purchase(state: &GameState) -> Option<usize> {
        let mut best: Option<(f64, usize)> = None;
        for (idx, spec) in CATALOG.iter().enumerate() {
            if state.purchased[idx] || state.score < spec.cost {
                continue;
            }
            let payback = payback_seconds(idx);
            let dominated = best.as_ref().is_some_and(|(bp, _)| *bp <= payback);
            if !dominated {
                best = Some((payback, idx));
            }
        }
        best.map(|(_, idx)| idx)
    }

    fn report_stats(state: &GameState, seconds: u32, purchases: u32) {
        let minutes = seconds / 60;
        let secs = seconds % 60;

        eprintln!("┌─── {}分{}秒 ─────────────────────────", minutes, secs);
        eprintln!(
            "│ スコア: {}  クリック+{}  毎秒+{}  購入: {}",
            logic::format_number(state.score),
            logic::format_number(state.per_click_yield),
            logic::format_number(state.auto_yield),
            purchases
        );
        let owned: Vec<&str> = CATALOG
            .iter()
            .zip(&state.purchased)
            .filter(|(_, p)| **p)
            .map(|(spec, _)| spec.name)
            .collect();
        eprintln!("│ 購入済: {:?}", owned);
        if let Some(idx) = find_best_purchase(state) {
            eprintln!(
                "│ 次の購入候補: {} ({}pt)",
                CATALOG[idx].name,
                logic::format_number(CATALOG[idx].cost)
            );
        }
        eprintln!("└────────────────────────────────────");
    }

    /// Simulate greedy optimal play for `total_seconds`. Returns the state.
    fn simulate(total_seconds: u32) -> GameState {
        let mut state = GameState::new();
        let mut total_purchases: u32 = 0;
        let mut last_purchase_time: u32 = 0;
        let mut max_idle_gap: u32 = 0;

        let report_times: Vec<u32> = vec![30, 60, 120, 300, 600, 1200, 1800];
        let mut next_report_idx = 0;

        eprintln!("\n========================================");
        eprintln!("  Neon Clicker バランスシミュレーター");
        eprintln!("  プレイ時間: {}分  クリック速度: {}/秒", total_seconds / 60, CLICKS_PER_SEC);
        eprintln!("========================================\n");

        for second in 1..=total_seconds {
            for _ in 0..CLICKS_PER_SEC {
                logic::click(&mut state);
            }
            logic::tick(&mut state, TICKS_PER_SEC);

            // Greedy: keep buying the best payback until nothing is affordable
            let mut bought = false;
            while let Some(idx) = find_best_purchase(&state) {
                if logic::buy_boost(&mut state, CATALOG[idx].id).is_err() {
                    break;
                }
                bought = true;
                total_purchases += 1;
            }
            if bought {
                let gap = second - last_purchase_time;
                if gap > max_idle_gap {
                    max_idle_gap = gap;
                }
                last_purchase_time = second;
            }

            if next_report_idx < report_times.len() && second >= report_times[next_report_idx] {
                report_stats(&state, second, total_purchases);
                next_report_idx += 1;
            }
        }

        eprintln!("\n======== 最終サマリー ========");
        report_stats(&state, total_seconds, total_purchases);
        eprintln!("最大待ち時間: {}秒", max_idle_gap);
        eprintln!("==============================\n");

        state
    }

    #[test]
    fn simulate_optimal_30min() {
        let state = simulate(1800);
        // The whole catalog should be reachable well inside a half-hour session
        assert_eq!(
            state.purchased_count(),
            CATALOG.len(),
            "catalog not exhausted: {} of {}",
            state.purchased_count(),
            CATALOG.len()
        );
    }

    #[test]
    fn simulate_optimal_2min_progression() {
        let state = simulate(120);
        // Two minutes of active play should clear several of the basic boosts
        assert!(
            state.purchased_count() >= 3,
            "too slow: only {} boosts in 2 minutes",
            state.purchased_count()
        );
    }
}
