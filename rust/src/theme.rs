//! Themed word collections used as raw material for key generation.

use serde::{Deserialize, Serialize};

/// Closed set of word-collection themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Haiku,
    Nocturnal,
    Sunny,
    Floreal,
    Oceanic,
    Crystalline,
    Mythic,
    Forest,
    Desert,
    Celestial,
    Library,
    Decay,
    Steampunk,
}

static HAIKU_WORDS: &[&str] = &[
    "moon", "blossom", "river", "stone", "whisper", "lantern", "petal", "mist", "shadow", "crane",
    "ember", "frost", "harbor", "autumn", "cloud", "willow",
];

static NOCTURNAL_WORDS: &[&str] = &[
    "owl", "moth", "dusk", "velvet", "midnight", "nebula", "shade", "raven", "lunar", "candle",
    "hush", "onyx", "lullaby", "gloom", "nightfall", "quiet",
];

static SUNNY_WORDS: &[&str] = &[
    "meadow", "daisy", "honey", "clover", "zephyr", "picnic", "amber", "sunbeam", "lemon", "bloom",
    "warmth", "robin", "golden", "breeze",
];

static FLOREAL_WORDS: &[&str] = &[
    "rose", "lily", "petal", "tulip", "orchid", "fern", "iris", "jasmine", "pollen", "garden",
    "violet", "stem", "thorn", "magnolia", "nectar",
];

static OCEANIC_WORDS: &[&str] = &[
    "wave", "coral", "tide", "pearl", "brine", "kelp", "lagoon", "foam", "current", "driftwood",
    "anchor", "siren", "abyss", "marina", "shell",
];

static CRYSTALLINE_WORDS: &[&str] = &[
    "quartz", "prism", "facet", "geode", "shard", "gleam", "lattice", "mineral", "opal", "crystal",
    "gem", "luster", "beryl", "jade",
];

static MYTHIC_WORDS: &[&str] = &[
    "oracle", "dragon", "wyrm", "titan", "rune", "sphinx", "legend", "phoenix", "griffin",
    "valkyrie", "saga", "relic", "chimera", "blade",
];

static FOREST_WORDS: &[&str] = &[
    "moss", "pine", "cedar", "thicket", "acorn", "bramble", "fox", "timber", "grove", "canopy",
    "root", "birch", "fawn", "trail", "hollow",
];

static DESERT_WORDS: &[&str] = &[
    "sand", "dune", "mirage", "cactus", "oasis", "scorpion", "sirocco", "mesa", "arroyo", "nomad",
    "sage", "ridge", "sunstone",
];

static CELESTIAL_WORDS: &[&str] = &[
    "nova", "galaxy", "eclipse", "star", "comet", "orbit", "zenith", "aurora", "meteor", "cosmos",
    "void", "quasar", "pulsar", "luna",
];

static LIBRARY_WORDS: &[&str] = &[
    "tome", "vellum", "quill", "archive", "folio", "ink", "margin", "scroll", "codex", "lexicon",
    "parchment", "shelf", "index", "preface",
];

static DECAY_WORDS: &[&str] = &[
    "rust", "ruin", "ash", "wither", "mold", "relic", "dust", "crumble", "fade", "rot", "tarnish",
    "husk", "erosion", "cobweb",
];

static STEAMPUNK_WORDS: &[&str] = &[
    "gear", "brass", "piston", "valve", "copper", "steam", "cog", "rivet", "boiler", "gauge",
    "flywheel", "turbine", "socket", "lever",
];

impl Theme {
    /// All themes, in declaration order.
    pub const ALL: [Theme; 13] = [
        Theme::Haiku,
        Theme::Nocturnal,
        Theme::Sunny,
        Theme::Floreal,
        Theme::Oceanic,
        Theme::Crystalline,
        Theme::Mythic,
        Theme::Forest,
        Theme::Desert,
        Theme::Celestial,
        Theme::Library,
        Theme::Decay,
        Theme::Steampunk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Haiku => "haiku",
            Self::Nocturnal => "nocturnal",
            Self::Sunny => "sunny",
            Self::Floreal => "floreal",
            Self::Oceanic => "oceanic",
            Self::Crystalline => "crystalline",
            Self::Mythic => "mythic",
            Self::Forest => "forest",
            Self::Desert => "desert",
            Self::Celestial => "celestial",
            Self::Library => "library",
            Self::Decay => "decay",
            Self::Steampunk => "steampunk",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "haiku" => Some(Self::Haiku),
            "nocturnal" => Some(Self::Nocturnal),
            "sunny" => Some(Self::Sunny),
            "floreal" => Some(Self::Floreal),
            "oceanic" => Some(Self::Oceanic),
            "crystalline" => Some(Self::Crystalline),
            "mythic" => Some(Self::Mythic),
            "forest" => Some(Self::Forest),
            "desert" => Some(Self::Desert),
            "celestial" => Some(Self::Celestial),
            "library" => Some(Self::Library),
            "decay" => Some(Self::Decay),
            "steampunk" => Some(Self::Steampunk),
            _ => None,
        }
    }

    /// The theme's word collection: non-empty, lowercase ASCII words.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Self::Haiku => HAIKU_WORDS,
            Self::Nocturnal => NOCTURNAL_WORDS,
            Self::Sunny => SUNNY_WORDS,
            Self::Floreal => FLOREAL_WORDS,
            Self::Oceanic => OCEANIC_WORDS,
            Self::Crystalline => CRYSTALLINE_WORDS,
            Self::Mythic => MYTHIC_WORDS,
            Self::Forest => FOREST_WORDS,
            Self::Desert => DESERT_WORDS,
            Self::Celestial => CELESTIAL_WORDS,
            Self::Library => LIBRARY_WORDS,
            Self::Decay => DECAY_WORDS,
            Self::Steampunk => STEAMPUNK_WORDS,
        }
    }
}
