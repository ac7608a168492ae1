//! Neon Clicker game logic — pure functions, fully testable.

use super::state::{
    find_boost, BoostKind, BoostSpec, GameState, Particle, ParticleStyle, ToastKind,
    SAVE_DEBOUNCE_TICKS, TICKS_PER_SEC,
};

/// Outcome of a successful boost purchase.
#[derive(Debug)]
pub struct Applied {
    pub spec: &'static BoostSpec,
    /// The cumulative yield of the boost's kind after the purchase.
    pub new_yield: u64,
}

/// Why a boost purchase was refused. Checked in this order; the first
/// failing precondition wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejected {
    NotFound,
    AlreadyPurchased,
    InsufficientFunds,
}

impl Rejected {
    /// Stable machine-readable reason string.
    #[allow(dead_code)]
    pub fn reason(&self) -> &'static str {
        match self {
            Rejected::NotFound => "not_found",
            Rejected::AlreadyPurchased => "already_purchased",
            Rejected::InsufficientFunds => "insufficient_funds",
        }
    }
}

/// Advance the game by `delta_ticks` ticks (at 10 ticks/sec).
///
/// The caller clamps frame deltas (see `GameTime`), so at most a handful of
/// ticks arrive per frame and auto yield can never pile up a backlog after
/// the tab was throttled.
pub fn tick(state: &mut GameState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);

    if state.click_flash > 0 {
        state.click_flash = state.click_flash.saturating_sub(delta_ticks);
    }
    if state.purchase_flash > 0 {
        state.purchase_flash = state.purchase_flash.saturating_sub(delta_ticks);
    }

    // Update particles
    for p in &mut state.particles {
        p.life = p.life.saturating_sub(delta_ticks);
    }
    state.particles.retain(|p| p.life > 0);

    // Expire toast
    if let Some(toast) = &mut state.toast {
        toast.ticks_left = toast.ticks_left.saturating_sub(delta_ticks);
        if toast.ticks_left == 0 {
            state.toast = None;
        }
    }

    // Auto yield fires once per accumulated whole second
    state.auto_carry += delta_ticks;
    while state.auto_carry >= TICKS_PER_SEC {
        state.auto_carry -= TICKS_PER_SEC;
        auto_tick(state);
    }

    // Debounced save countdown
    if state.save_countdown > 0 {
        state.save_countdown = state.save_countdown.saturating_sub(delta_ticks);
        if state.save_countdown == 0 {
            state.save_due = true;
        }
    }
}

/// Manual click: add `per_click_yield` to the score and spawn feedback.
/// Returns the delta applied.
pub fn click(state: &mut GameState) -> u64 {
    let power = state.per_click_yield;
    state.score += power;
    state.total_clicks += 1;
    state.click_flash = 3;
    spawn_particle(state, power, ParticleStyle::Click);
    mark_dirty(state);
    power
}

/// One whole-second automatic yield application.
/// No-op returning `None` while no auto boosts are owned.
pub fn auto_tick(state: &mut GameState) -> Option<u64> {
    if state.auto_yield == 0 {
        return None;
    }
    let amount = state.auto_yield;
    state.score += amount;
    spawn_particle(state, amount, ParticleStyle::Auto);
    mark_dirty(state);
    Some(amount)
}

/// Try to buy a boost by catalog id.
///
/// Validates fully before mutating anything: either every effect of the
/// purchase is applied, or the state is untouched and a typed rejection
/// comes back. Buying an already-owned boost always rejects, it never
/// applies twice.
pub fn buy_boost(state: &mut GameState, id: &str) -> Result<Applied, Rejected> {
    let (idx, spec) = match find_boost(id) {
        Some(found) => found,
        None => {
            state.push_toast("ブーストが見つかりません", ToastKind::Error);
            return Err(Rejected::NotFound);
        }
    };
    if state.purchased[idx] {
        state.push_toast("すでに購入済みです", ToastKind::Error);
        return Err(Rejected::AlreadyPurchased);
    }
    if state.score < spec.cost {
        state.push_toast("ポイントが足りません", ToastKind::Error);
        return Err(Rejected::InsufficientFunds);
    }

    state.score -= spec.cost;
    match spec.kind {
        BoostKind::Click => state.per_click_yield += spec.yield_delta,
        BoostKind::Auto => state.auto_yield += spec.yield_delta,
    }
    state.purchased[idx] = true;
    state.purchase_flash = 8;

    let applied = Applied {
        spec,
        new_yield: state.yield_for(spec.kind),
    };
    let unit = match spec.kind {
        BoostKind::Click => "クリック",
        BoostKind::Auto => "毎秒",
    };
    state.push_toast(
        format!("「{}」を購入！{} +{}", applied.spec.name, unit, applied.new_yield),
        ToastKind::Success,
    );
    state.add_log(
        &format!(
            "✦ {} を購入！({}pt) {} +{} に",
            applied.spec.name,
            format_number(applied.spec.cost),
            unit,
            format_number(applied.new_yield)
        ),
        true,
    );
    mark_dirty(state);

    Ok(applied)
}

/// Reset the session to a fresh game. The catalog itself is untouched.
pub fn reset(state: &mut GameState) {
    state.score = 0;
    state.per_click_yield = 1;
    state.auto_yield = 0;
    for p in &mut state.purchased {
        *p = false;
    }
    state.total_clicks = 0;
    state.particles.clear();
    state.click_flash = 0;
    state.purchase_flash = 0;
    state.auto_carry = 0;
    state.push_toast("ゲームをリセットしました", ToastKind::Info);
    state.add_log("ゲームをリセットしました。", true);
    mark_dirty(state);
}

/// Schedule the debounced save after a state mutation.
fn mark_dirty(state: &mut GameState) {
    state.save_countdown = SAVE_DEBOUNCE_TICKS;
}

fn spawn_particle(state: &mut GameState, amount: u64, style: ParticleStyle) {
    let col_offset = (state.next_random() % 13) as i16 - 6; // -6..+6
    let life = 8 + (state.next_random() % 5); // 8-12 ticks
    state.particles.push(Particle {
        text: format!("+{}", format_number(amount)),
        col_offset,
        life,
        max_life: life,
        style,
    });
    // Cap particles to avoid unbounded growth under rapid clicking
    if state.particles.len() > 20 {
        state.particles.remove(0);
    }
}

/// Format a number with commas (e.g. 1234567 → "1,234,567").
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
