//! Simulation constants and tuning parameters.

// --- Combat stats ---

/// Minimum value for any combat stat.
pub const STAT_MIN: u8 = 1;

/// Maximum combat stat under normal play.
pub const STAT_MAX: u8 = 100;

/// Extended stat ceiling for fusion results.
pub const FUSED_STAT_MAX: u8 = 150;

// --- Rarity classification (stat-sum thresholds) ---

/// Stat total above which a cat classifies as Epic.
pub const EPIC_STAT_TOTAL: u16 = 240;

/// Stat total above which a cat classifies as Rare.
pub const RARE_STAT_TOTAL: u16 = 200;

/// Stat total above which a cat classifies as Uncommon.
pub const UNCOMMON_STAT_TOTAL: u16 = 160;

// --- Trait palettes ---

/// Number of body color palette entries.
pub const BODY_COLOR_COUNT: u8 = 8;

/// Number of eye color palette entries.
pub const EYE_COLOR_COUNT: u8 = 6;

/// Number of coat patterns.
pub const PATTERN_COUNT: u8 = 5;

/// Number of accessories (index 0 = none).
pub const ACCESSORY_COUNT: u8 = 4;

/// Number of backgrounds.
pub const BACKGROUND_COUNT: u8 = 3;

/// Body color palette (hex), indexed by `Cat::body_color`.
pub const BODY_COLORS: [&str; BODY_COLOR_COUNT as usize] = [
    "#FFB6C1", // light pink
    "#FFA07A", // light salmon
    "#DDA0DD", // plum
    "#87CEEB", // sky blue
    "#98FB98", // pale green
    "#FFDAB9", // peach puff
    "#E6E6FA", // lavender
    "#F0E68C", // khaki
];

/// Eye color palette (hex), indexed by `Cat::eye_color`.
pub const EYE_COLORS: [&str; EYE_COLOR_COUNT as usize] = [
    "#4169E1", // royal blue
    "#32CD32", // lime green
    "#FFD700", // gold
    "#FF69B4", // hot pink
    "#8A2BE2", // blue violet
    "#20B2AA", // light sea green
];

/// Coat pattern names, indexed by `Cat::pattern`.
pub const PATTERNS: [&str; PATTERN_COUNT as usize] =
    ["Solid", "Striped", "Spotted", "Tabby", "Calico"];

/// Accessory names, indexed by `Cat::accessory`.
pub const ACCESSORIES: [&str; ACCESSORY_COUNT as usize] = ["None", "Bow", "Crown", "Glasses"];

/// Background names, indexed by `Cat::background`.
pub const BACKGROUNDS: [&str; BACKGROUND_COUNT as usize] = ["Pastel", "Sunset", "Galaxy"];

// --- Battle ---

/// Starting (and maximum) health for both sides of an encounter.
pub const MAX_HEALTH: u32 = 100;

/// Probability that an attack misses entirely.
pub const MISS_CHANCE: f64 = 0.10;

/// Probability that a landed attack is critical.
pub const CRIT_CHANCE: f64 = 0.15;

/// Damage multiplier applied to critical hits.
pub const CRIT_MULTIPLIER: f64 = 1.5;

/// Floor for damage on any non-miss hit.
pub const MIN_HIT_DAMAGE: u32 = 5;

/// Attacker strength weight in the base damage formula.
pub const ATTACK_STRENGTH_WEIGHT: f64 = 0.8;

/// Attacker agility weight in the base damage formula.
pub const ATTACK_AGILITY_WEIGHT: f64 = 0.3;

/// Defender agility weight in the defense formula.
pub const DEFENSE_AGILITY_WEIGHT: f64 = 0.2;

/// Defender intelligence weight in the defense formula.
pub const DEFENSE_INTELLIGENCE_WEIGHT: f64 = 0.1;

/// Half-width of the uniform damage variance term.
pub const DAMAGE_VARIANCE: f64 = 5.0;

// --- Breeding ---

/// Mutation chance per trait dimension when breeding.
pub const BODY_MUTATION_CHANCE: f64 = 0.15;
pub const EYE_MUTATION_CHANCE: f64 = 0.10;
pub const PATTERN_MUTATION_CHANCE: f64 = 0.20;
pub const ACCESSORY_MUTATION_CHANCE: f64 = 0.25;
pub const BACKGROUND_MUTATION_CHANCE: f64 = 0.10;

/// Chance the special flag carries to offspring when either parent has it.
pub const SPECIAL_INHERIT_CHANCE: f64 = 0.30;

/// Half-width of the uniform stat inheritance variance.
pub const STAT_VARIANCE: f64 = 15.0;

/// Flat stat bonus per rarity tier index of the rolled offspring rarity.
pub const RARITY_STAT_BONUS: u8 = 5;

/// Breeding cooldown window (24 hours, milliseconds).
pub const BREEDING_COOLDOWN_MS: u64 = 24 * 60 * 60 * 1000;

/// Rarity roll thresholds, tested high to low. Each threshold is
/// `base + slope * avg(parent tier indices)` against one uniform roll.
pub const LEGENDARY_ROLL_BASE: f64 = 0.02;
pub const LEGENDARY_ROLL_SLOPE: f64 = 0.02;
pub const EPIC_ROLL_BASE: f64 = 0.08;
pub const EPIC_ROLL_SLOPE: f64 = 0.04;
pub const RARE_ROLL_BASE: f64 = 0.20;
pub const RARE_ROLL_SLOPE: f64 = 0.06;
pub const UNCOMMON_ROLL_BASE: f64 = 0.45;
pub const UNCOMMON_ROLL_SLOPE: f64 = 0.05;

/// Offspring id range for bred cats.
pub const OFFSPRING_ID_MIN: u64 = 1000;
pub const OFFSPRING_ID_MAX: u64 = 10_000;

// --- Breeding preview ---

/// Chance the stat-range preview shows a lucky bonus.
pub const PREVIEW_BONUS_CHANCE: f64 = 0.30;

/// Preview bonus range (inclusive).
pub const PREVIEW_BONUS_MIN: i32 = 5;
pub const PREVIEW_BONUS_MAX: i32 = 14;

/// Predicted stat range below/above the parent average.
pub const PREVIEW_RANGE_BELOW: i32 = 10;
pub const PREVIEW_RANGE_ABOVE: i32 = 15;

/// Base rarity distribution for the preview (percent), Common..Legendary.
pub const BASE_RARITY_CHANCES: [i32; 5] = [40, 30, 20, 8, 2];

// --- Fusion ---

/// Stat multiplier applied to the parent average in fusion.
pub const FUSION_STAT_MULTIPLIER: f64 = 1.5;

/// Background index hard-assigned to fusion results ("Galaxy").
pub const FUSION_BACKGROUND: u8 = 2;

/// Maximum number of fusion abilities drawn.
pub const MAX_FUSION_ABILITIES: usize = 3;
