//! Core types: generator options, scoring inputs and strength labels.

/// Minimum password length accepted by the generator controls.
pub const MIN_LENGTH: usize = 6;

/// Maximum password length accepted by the generator controls.
pub const MAX_LENGTH: usize = 32;

/// Default password length at session start.
pub const DEFAULT_LENGTH: usize = 8;

/// Ordered label table indexed by the raw score.
/// A score past the end of the table falls back to `VeryWeak`.
const LABELS: [PasswordStrength; 4] = [
    PasswordStrength::Weak,
    PasswordStrength::Medium,
    PasswordStrength::Strong,
    PasswordStrength::VeryStrong,
];

/// Clamps a requested length to the supported `[MIN_LENGTH, MAX_LENGTH]` range.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Options for a single password generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Target password length. The generator does not validate the range;
    /// callers clamp via [`clamp_length`].
    pub length: usize,
    /// Add the ten ASCII digits to the alphabet.
    pub include_digits: bool,
    /// Add the fixed symbol set to the alphabet.
    pub include_symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_digits: false,
            include_symbols: false,
        }
    }
}

/// Inputs to the strength scorer: the generated password's length plus the
/// inclusion flags that were active when it was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthInput {
    pub password_length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl StrengthInput {
    pub fn new(password_length: usize, include_digits: bool, include_symbols: bool) -> Self {
        Self {
            password_length,
            include_digits,
            include_symbols,
        }
    }
}

impl From<&GeneratorOptions> for StrengthInput {
    fn from(options: &GeneratorOptions) -> Self {
        Self::new(options.length, options.include_digits, options.include_symbols)
    }
}

/// Raw strength score: one point per satisfied criterion, range 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthScore(usize);

impl StrengthScore {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

/// Discrete strength label assigned to a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    /// Scoring was cancelled before completion.
    NotEvaluated,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
            PasswordStrength::NotEvaluated => "Not Evaluated",
        }
    }

    /// Coarse tier used by frontends to colour the label.
    pub fn tier(&self) -> StrengthTier {
        match self {
            PasswordStrength::Strong | PasswordStrength::VeryStrong => StrengthTier::High,
            PasswordStrength::Medium => StrengthTier::Moderate,
            _ => StrengthTier::Low,
        }
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display tier for a strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Low,
    Moderate,
    High,
}

/// Outcome of a scoring pass: the raw score (absent when scoring was
/// cancelled) and the reasons for every unsatisfied criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: Option<StrengthScore>,
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    /// Maps the raw score through the ordered label table.
    ///
    /// The table has four entries; a score of 4 overruns it and falls back
    /// to `VeryWeak`. A score of 0 is in bounds and yields `Weak`.
    pub fn strength(&self) -> PasswordStrength {
        match self.score {
            None => PasswordStrength::NotEvaluated,
            Some(score) => LABELS
                .get(score.value())
                .copied()
                .unwrap_or(PasswordStrength::VeryWeak),
        }
    }
}
