/// Neon Clicker game state definitions.

/// Game ticks per real-time second (drives animations and the auto yield).
pub const TICKS_PER_SEC: u32 = 10;

/// Ticks to wait after the last mutation before the debounced save fires.
pub const SAVE_DEBOUNCE_TICKS: u32 = 10;

/// How long a toast stays on screen, in ticks.
pub const TOAST_TICKS: u32 = 25;

/// What a boost strengthens when purchased.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoostKind {
    /// Adds to the points gained per manual click.
    Click,
    /// Adds to the points gained automatically every second.
    Auto,
}

/// Store display grouping. Purely cosmetic; the purchase rules ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Basic,
    Premium,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Basic => "ベーシック",
            Tier::Premium => "プレミアム",
        }
    }
}

/// One catalog entry. The catalog is compiled-in configuration and never
/// changes at runtime; only the per-slot purchased flag is mutable state.
#[derive(Debug)]
pub struct BoostSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub yield_delta: u64,
    pub kind: BoostKind,
    pub tier: Tier,
}

/// The full boost catalog, ordered by cost.
pub const CATALOG: &[BoostSpec] = &[
    BoostSpec {
        id: "boost1",
        name: "イビルスマイル",
        description: "クリック +5",
        cost: 100,
        yield_delta: 5,
        kind: BoostKind::Click,
        tier: Tier::Basic,
    },
    BoostSpec {
        id: "boost2",
        name: "ネオンゴースト",
        description: "クリック +10",
        cost: 500,
        yield_delta: 10,
        kind: BoostKind::Click,
        tier: Tier::Basic,
    },
    BoostSpec {
        id: "boost3",
        name: "ダークスピリット",
        description: "クリック +50",
        cost: 1_500,
        yield_delta: 50,
        kind: BoostKind::Click,
        tier: Tier::Basic,
    },
    BoostSpec {
        id: "boost4",
        name: "オートクリッカー・見習い",
        description: "毎秒 +1",
        cost: 2_000,
        yield_delta: 1,
        kind: BoostKind::Auto,
        tier: Tier::Premium,
    },
    BoostSpec {
        id: "boost5",
        name: "ナイトメア",
        description: "クリック +100",
        cost: 5_000,
        yield_delta: 100,
        kind: BoostKind::Click,
        tier: Tier::Premium,
    },
    BoostSpec {
        id: "boost6",
        name: "オートクリッカー・スタンダード",
        description: "毎秒 +5",
        cost: 10_000,
        yield_delta: 5,
        kind: BoostKind::Auto,
        tier: Tier::Premium,
    },
    BoostSpec {
        id: "boost7",
        name: "エーテルテラー",
        description: "クリック +500",
        cost: 15_000,
        yield_delta: 500,
        kind: BoostKind::Click,
        tier: Tier::Premium,
    },
    BoostSpec {
        id: "boost8",
        name: "オートクリッカー・プロ",
        description: "毎秒 +10",
        cost: 50_000,
        yield_delta: 10,
        kind: BoostKind::Auto,
        tier: Tier::Premium,
    },
    BoostSpec {
        id: "boost9",
        name: "オートクリッカー・エキスパート",
        description: "毎秒 +25",
        cost: 100_000,
        yield_delta: 25,
        kind: BoostKind::Auto,
        tier: Tier::Premium,
    },
    BoostSpec {
        id: "boost10",
        name: "オートクリッカー・レジェンド",
        description: "毎秒 +50",
        cost: 500_000,
        yield_delta: 50,
        kind: BoostKind::Auto,
        tier: Tier::Premium,
    },
];

/// Look up a catalog entry by its stable id.
pub fn find_boost(id: &str) -> Option<(usize, &'static BoostSpec)> {
    CATALOG.iter().enumerate().find(|(_, b)| b.id == id)
}

/// Indices of the catalog entries belonging to a tier, in catalog order.
pub fn tier_indices(tier: Tier) -> impl Iterator<Item = usize> {
    CATALOG
        .iter()
        .enumerate()
        .filter(move |(_, b)| b.tier == tier)
        .map(|(i, _)| i)
}

/// A floating text particle ("+N" rising from the click area).
#[derive(Clone, Debug)]
pub struct Particle {
    pub text: String,
    /// Column offset from the center of the orb display.
    pub col_offset: i16,
    /// Remaining lifetime in ticks (counts down).
    pub life: u32,
    /// Maximum lifetime (for computing vertical position).
    pub max_life: u32,
    pub style: ParticleStyle,
}

/// Visual flavor of a particle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticleStyle {
    Click,
    Auto,
}

/// Transient notification shown over the UI.
#[derive(Clone, Debug)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub ticks_left: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Message log entry.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of a Neon Clicker session.
pub struct GameState {
    /// Spendable points.
    pub score: u64,
    /// Points per manual click (base 1, never below 1).
    pub per_click_yield: u64,
    /// Points added automatically per second (base 0).
    pub auto_yield: u64,
    /// Purchased flag per catalog entry, parallel to [`CATALOG`].
    pub purchased: Vec<bool>,
    /// Manual click count.
    pub total_clicks: u64,

    // Overlays
    pub show_store: bool,
    pub store_tab: Tier,
    pub show_settings: bool,

    // Feedback
    pub log: Vec<LogEntry>,
    pub toast: Option<Toast>,
    pub particles: Vec<Particle>,
    pub anim_frame: u32,
    pub click_flash: u32,
    pub purchase_flash: u32,
    /// Simple RNG state for particle spread.
    pub rng_state: u32,

    // Timing
    /// Sub-ticks accumulated toward the next whole-second auto tick.
    pub auto_carry: u32,
    /// Ticks until the debounced save fires; 0 means nothing pending.
    pub save_countdown: u32,
    /// Set when the debounce expires; consumed by the host loop.
    pub save_due: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            per_click_yield: 1,
            auto_yield: 0,
            purchased: vec![false; CATALOG.len()],
            total_clicks: 0,
            show_store: false,
            store_tab: Tier::Basic,
            show_settings: false,
            log: vec![LogEntry {
                text: "ネオンクリッカーへようこそ！".into(),
                is_important: true,
            }],
            toast: None,
            particles: Vec::new(),
            anim_frame: 0,
            click_flash: 0,
            purchase_flash: 0,
            rng_state: 42,
            auto_carry: 0,
            save_countdown: 0,
            save_due: false,
        }
    }

    /// Number of purchased boosts.
    pub fn purchased_count(&self) -> usize {
        self.purchased.iter().filter(|p| **p).count()
    }

    /// The cumulative yield the given kind currently produces.
    pub fn yield_for(&self, kind: BoostKind) -> u64 {
        match kind {
            BoostKind::Click => self.per_click_yield,
            BoostKind::Auto => self.auto_yield,
        }
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }

    pub fn push_toast(&mut self, text: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast {
            text: text.into(),
            kind,
            ticks_left: TOAST_TICKS,
        });
    }

    /// Xorshift step for cosmetic randomness (particle spread).
    pub fn next_random(&mut self) -> u32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng_state = x;
        x
    }
}
