//! Random CODEOWNERS document generation for benchmarking and testing.
//!
//! Builds documents through the model types, so every generated document
//! survives a write/parse cycle unchanged.

use crate::model::{CodeOwner, CodeownersFile, Entry, Rule};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating CODEOWNERS files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rule lines to generate.
    pub num_rules: usize,
    /// Number of section comments to generate.
    pub num_comments: usize,
    /// Maximum owners per rule, treated as at least 1. Rules may also be
    /// generated unowned.
    pub max_owners_per_rule: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_comments: 20,
            max_owners_per_rule: 4,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with specified rules and proportional comments.
    ///
    /// Comments are set to ~20% of rules.
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_comments: num_rules / 5,
            ..Default::default()
        }
    }

    /// Small fixture (~10 rules).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 rules).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 rules).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k rules).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Generate a file targeting approximately the given byte size.
    ///
    /// Actual size varies with pattern and owner lengths.
    pub fn target_bytes(bytes: usize) -> Self {
        // Average line is ~45 bytes
        Self::new(bytes.saturating_div(45).max(1))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Set the maximum owners per rule.
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_rule = max.max(1);
        self
    }
}

mod vocabulary {
    pub const PATTERN_TEMPLATES: &[&str] = &[
        "*.{ext}",
        "**/*.{ext}",
        "/{dir}/",
        "/{dir}/**",
        "/{dir}/*.{ext}",
        "/src/{dir}/",
        "/src/**/*.{ext}",
        "/{dir}/**/test_*.{ext}",
        "docs/**/*.md",
    ];

    pub const EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "go", "md", "yaml", "json", "toml"];
    pub const DIRECTORIES: &[&str] = &[
        "src", "lib", "tests", "docs", "config", "scripts", "api", "core",
    ];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer", "reviewer"];
    pub const ORGS: &[&str] = &["acme", "github", "myorg"];
    pub const TEAMS: &[&str] = &["core", "platform", "frontend", "backend", "infra", "docs"];
    pub const SECTION_NAMES: &[&str] = &["Frontend", "Backend", "Infrastructure", "Documentation"];
    pub const NOTES: &[&str] = &["needs two reviews", "legacy", "owned by on-call", "generated"];
}

/// Owner type distribution weights (must sum to 100).
const WEIGHT_USER: u32 = 50;
const WEIGHT_TEAM: u32 = 30;
// Remaining weight (20) goes to email

/// Probability of inserting a section comment (percentage).
const COMMENT_PROBABILITY: u32 = 20;

/// Probability of a rule carrying an inline comment (percentage).
const INLINE_COMMENT_PROBABILITY: u32 = 10;

/// Probability of a rule having no owners (percentage).
const UNOWNED_PROBABILITY: u32 = 5;

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn comment_entry(text: impl Into<String>) -> Entry {
    Entry::Comment { text: text.into() }
}

/// Generates a random CODEOWNERS document based on configuration.
///
/// Entries are assembled directly from the vocabulary, whose patterns,
/// owners and notes are all valid single-line tokens.
pub fn generate_file(config: &GeneratorConfig) -> CodeownersFile {
    use vocabulary::*;

    let max_owners = config.max_owners_per_rule.max(1);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut file = CodeownersFile::from_entries(Vec::with_capacity(
        config.num_rules + 2 * config.num_comments + 2,
    ));

    file.push(comment_entry("Auto-generated CODEOWNERS for benchmarking"));
    file.add_blank();

    let mut rules_added = 0;
    let mut comments_added = 0;

    while rules_added < config.num_rules {
        if comments_added < config.num_comments
            && rules_added > 0
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            file.add_blank();
            file.push(comment_entry(format!("{} section", pick(&mut rng, SECTION_NAMES))));
            comments_added += 1;
        }

        let pattern = pick(&mut rng, PATTERN_TEMPLATES)
            .replace("{ext}", pick(&mut rng, EXTENSIONS))
            .replace("{dir}", pick(&mut rng, DIRECTORIES));

        let owners: Vec<CodeOwner> = if rng.random_ratio(UNOWNED_PROBABILITY, 100) {
            Vec::new()
        } else {
            let num_owners = rng.random_range(1..=max_owners);
            (0..num_owners).map(|_| generate_owner(&mut rng)).collect()
        };

        let comment = rng
            .random_ratio(INLINE_COMMENT_PROBABILITY, 100)
            .then(|| pick(&mut rng, NOTES).to_owned());

        file.push(Entry::Rule(Rule {
            pattern,
            owners,
            comment,
        }));
        rules_added += 1;
    }

    file
}

/// Generate a random owner based on weighted distribution.
fn generate_owner(rng: &mut StdRng) -> CodeOwner {
    use vocabulary::*;

    let roll = rng.random_range(0..100);
    let text = if roll < WEIGHT_USER {
        format!("@{}", pick(rng, USERNAMES))
    } else if roll < WEIGHT_USER + WEIGHT_TEAM {
        format!("@{}/{}", pick(rng, ORGS), pick(rng, TEAMS))
    } else {
        format!("{}@example.com", pick(rng, USERNAMES))
    };
    CodeOwner::from_token(&text)
}

/// Generates a CODEOWNERS file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    generate_file(config).to_string()
}
