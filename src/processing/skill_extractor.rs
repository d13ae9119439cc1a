//! Skill and keyword extraction from unstructured resume/job-description text

use crate::error::{RelevanceError, Result};
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::BTreeSet;

/// Minimum length for a token to count as a skill.
pub const MIN_SKILL_LEN: usize = 3;

/// Tokens kept per contextual-cue capture.
const MAX_CUE_TOKENS: usize = 3;

/// Common filler words that survive tokenization but are never skills.
const STOP_WORDS: [&str; 12] = [
    "the", "and", "for", "with", "from", "this", "that", "have", "been", "will", "can", "may",
];

/// Entity fragments that mark a company name rather than a skill.
const LEGAL_SUFFIXES: [&str; 4] = ["inc", "ltd", "corp", "company"];

/// A set of normalized skill tokens extracted from one document.
///
/// Entries are lower-cased, trimmed, at least [`MIN_SKILL_LEN`] characters,
/// and deduplicated. Iteration order is sorted, so downstream consumers see
/// a deterministic enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a candidate skill, enforcing the set invariants. Candidates
    /// that trim to fewer than [`MIN_SKILL_LEN`] characters are dropped.
    pub fn insert(&mut self, raw: &str) {
        let skill = raw.trim().to_lowercase();
        if skill.len() >= MIN_SKILL_LEN {
            self.0.insert(skill);
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(&skill);
        }
        set
    }
}

/// Pluggable named-entity pass over a document.
///
/// The default is [`HeuristicEntityTagger`]; callers with a real NER backend
/// can supply their own. A tagger failure is logged and skipped, never fatal.
pub trait EntityTagger: Send + Sync {
    fn entities(&self, text: &str) -> Result<Vec<String>>;
}

/// Capitalized-phrase heuristic standing in for a statistical NER model.
///
/// Picks up runs of two or more capitalized words (organization and product
/// names such as "Google Cloud" or "Power BI").
pub struct HeuristicEntityTagger {
    phrase: Regex,
}

impl Default for HeuristicEntityTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicEntityTagger {
    pub fn new() -> Self {
        let phrase = Regex::new(r"\b[A-Z][A-Za-z0-9+#.]*(?:\s+[A-Z][A-Za-z0-9+#.]*)+")
            .expect("Invalid entity phrase regex");
        Self { phrase }
    }
}

impl EntityTagger for HeuristicEntityTagger {
    fn entities(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .phrase
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }
}

/// Extracts a [`SkillSet`] from a text blob using a regex catalog, a fixed
/// tool vocabulary, contextual cue phrases and an optional entity pass.
pub struct SkillExtractor {
    patterns: Vec<Regex>,
    tools: AhoCorasick,
    tool_terms: Vec<&'static str>,
    cue_patterns: Vec<Regex>,
    token: Regex,
    tagger: Option<Box<dyn EntityTagger>>,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        Self::with_entity_tagger(Some(Box::new(HeuristicEntityTagger::new())))
    }

    /// Build an extractor with a custom entity tagger, or none to skip the
    /// entity pass entirely.
    pub fn with_entity_tagger(tagger: Option<Box<dyn EntityTagger>>) -> Result<Self> {
        let patterns = Self::catalog_patterns()
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                RelevanceError::TextProcessing(format!("Failed to compile skill catalog: {}", e))
            })?;

        let tool_terms = Self::tool_terms();
        let tools = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&tool_terms)
            .map_err(|e| {
                RelevanceError::TextProcessing(format!("Failed to build tool matcher: {}", e))
            })?;

        let cue_patterns = Self::cue_phrases()
            .iter()
            .map(|cue| Regex::new(&format!(r"(?i)\b{}\s+([^.,:;\n]+)", cue)))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                RelevanceError::TextProcessing(format!("Failed to compile cue patterns: {}", e))
            })?;

        let token = Regex::new(r"[A-Za-z][A-Za-z0-9+#.]*").expect("Invalid token regex");

        Ok(Self {
            patterns,
            tools,
            tool_terms,
            cue_patterns,
            token,
            tagger,
        })
    }

    /// Extract all skill tokens from `text`. Returns an empty set for empty
    /// input and never fails; a broken entity tagger degrades silently.
    pub fn extract(&self, text: &str) -> SkillSet {
        let mut skills = SkillSet::new();
        if text.trim().is_empty() {
            return skills;
        }

        // Catalog pass over the pattern groups
        for pattern in &self.patterns {
            for m in pattern.find_iter(text) {
                self.add(&mut skills, m.as_str());
            }
        }

        // Fixed tool vocabulary, boundary-checked since the automaton
        // matches substrings
        for m in self.tools.find_iter(text) {
            if Self::on_word_boundary(text, m.start(), m.end()) {
                self.add(&mut skills, self.tool_terms[m.pattern().as_usize()]);
            }
        }

        // Contextual cue pass: tokens following "experience with", etc.
        for cue in &self.cue_patterns {
            for cap in cue.captures_iter(text) {
                if let Some(span) = cap.get(1) {
                    for tok in self.token.find_iter(span.as_str()).take(MAX_CUE_TOKENS) {
                        if tok.as_str().len() > 2 {
                            self.add(&mut skills, tok.as_str());
                        }
                    }
                }
            }
        }

        // Entity pass, skipped on tagger failure
        if let Some(tagger) = &self.tagger {
            match tagger.entities(text) {
                Ok(entities) => {
                    for entity in entities {
                        let lowered = entity.to_lowercase();
                        if !LEGAL_SUFFIXES.iter().any(|s| lowered.contains(s)) {
                            self.add(&mut skills, &entity);
                        }
                    }
                }
                Err(e) => {
                    log::warn!("Entity tagging failed, continuing without: {}", e);
                }
            }
        }

        skills
    }

    fn add(&self, skills: &mut SkillSet, raw: &str) {
        let candidate = raw.trim().to_lowercase();
        if !STOP_WORDS.contains(&candidate.as_str()) {
            skills.insert(&candidate);
        }
    }

    fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(|c| c.is_alphanumeric()) && !after.is_some_and(|c| c.is_alphanumeric())
    }

    /// Case-insensitive pattern groups covering the skill vocabulary.
    fn catalog_patterns() -> Vec<&'static str> {
        vec![
            // Programming languages
            r"(?i)\b(?:Python|Java|JavaScript|TypeScript|PHP|Ruby|Go|Rust|Swift|Kotlin|Scala|R|MATLAB|Perl|Shell|Bash)\b",
            // C++ and C# end in non-word characters, so no trailing boundary
            r"(?i)\bC\+\+|\bC#",
            // Web frameworks
            r"(?i)\b(?:React|Angular|Vue\.?js|Node\.?js|Express|Django|Flask|Spring|Laravel|Rails|ASP\.NET|jQuery|Bootstrap|HTML5?|CSS3?|SASS|LESS)\b",
            // Cloud and DevOps
            r"(?i)\b(?:AWS|Azure|GCP|Google Cloud|Docker|Kubernetes|Jenkins|Git|GitHub|GitLab|Linux|Ubuntu|CentOS|CI/CD|DevOps|Terraform|Ansible)\b",
            // Databases
            r"(?i)\b(?:SQL|MySQL|PostgreSQL|MongoDB|Redis|Elasticsearch|Oracle|SQLite|Cassandra|DynamoDB|Neo4j)\b",
            // Data science and AI
            r"(?i)\b(?:Machine Learning|Deep Learning|AI|Artificial Intelligence|Data Science|Analytics|Statistics|Pandas|NumPy|TensorFlow|PyTorch|Scikit-learn|Jupyter|Tableau|Power BI)\b",
            // Methodologies
            r"(?i)\b(?:Agile|Scrum|Kanban|Testing|QA|Unit Testing|Integration Testing|TDD|BDD|Microservices|REST|API|GraphQL)\b",
            // Soft skills
            r"(?i)\b(?:Project Management|Leadership|Communication|Problem Solving|Team Work|Collaboration|Presentation|Documentation|Requirements Analysis)\b",
            // Certifications and credentials
            r"(?i)\b(?:PMP|Certified|Certification|ISO|ITIL|Six Sigma|Lean|MBA|PhD|Masters|Bachelor)\b",
        ]
    }

    /// Fixed-literal tool names matched with the Aho-Corasick automaton.
    fn tool_terms() -> Vec<&'static str> {
        vec![
            "jira",
            "confluence",
            "slack",
            "microsoft office",
            "excel",
            "powerpoint",
            "photoshop",
            "figma",
            "sketch",
            "indesign",
            "autocad",
        ]
    }

    /// Cue phrases whose following words are likely skills.
    fn cue_phrases() -> Vec<&'static str> {
        vec![
            "experience with",
            "proficient in",
            "skilled in",
            "expertise in",
            "knowledge of",
            "familiar with",
            "worked with",
            "used",
            "implemented",
            "developed",
            "created",
            "built",
            "designed",
            "managed",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new().unwrap()
    }

    #[test]
    fn test_catalog_extraction() {
        let skills = extractor().extract("Senior Python developer using Docker, AWS and PostgreSQL.");

        assert!(skills.contains("python"));
        assert!(skills.contains("docker"));
        assert!(skills.contains("aws"));
        assert!(skills.contains("postgresql"));
    }

    #[test]
    fn test_case_insensitive_and_lowercased() {
        let skills = extractor().extract("KUBERNETES and TypeScript");

        assert!(skills.contains("kubernetes"));
        assert!(skills.contains("typescript"));
    }

    #[test]
    fn test_cue_phrase_extraction() {
        let skills = extractor().extract("Experience with Terraform and proficient in Elixir");

        assert!(skills.contains("terraform"));
        // "elixir" is not in the catalog; the cue pass picks it up
        assert!(skills.contains("elixir"));
    }

    #[test]
    fn test_cue_tokens_capped_at_three() {
        let skills = extractor().extract("worked with alpha bravo charlie delta");

        assert!(skills.contains("alpha"));
        assert!(skills.contains("bravo"));
        assert!(skills.contains("charlie"));
        assert!(!skills.contains("delta"));
    }

    #[test]
    fn test_short_tokens_dropped() {
        let skills = extractor().extract("Go and R are languages, experience with ml io");

        // Two-character matches never survive the length filter
        assert!(!skills.contains("go"));
        assert!(!skills.contains("r"));
        assert!(!skills.contains("ml"));
        assert!(!skills.contains("io"));
    }

    #[test]
    fn test_stop_words_filtered() {
        let skills = extractor().extract("worked with the team and have built things");

        assert!(!skills.contains("the"));
        assert!(!skills.contains("and"));
        assert!(!skills.contains("have"));
    }

    #[test]
    fn test_tool_vocabulary_respects_boundaries() {
        let skills = extractor().extract("Tracked work in Jira; exceller at nothing");

        assert!(skills.contains("jira"));
        // "excel" must not fire inside "exceller"
        assert!(!skills.contains("excel"));
    }

    #[test]
    fn test_entity_pass_filters_legal_suffixes() {
        let skills = extractor().extract("Worked at Initech Corp on Google Cloud migrations");

        assert!(skills.contains("google cloud"));
        assert!(!skills.iter().any(|s| s.contains("initech")));
    }

    #[test]
    fn test_empty_input() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor().extract("   \n  ").is_empty());
    }

    #[test]
    fn test_broken_tagger_degrades_silently() {
        struct FailingTagger;
        impl EntityTagger for FailingTagger {
            fn entities(&self, _text: &str) -> Result<Vec<String>> {
                Err(RelevanceError::TextProcessing("tagger offline".to_string()))
            }
        }

        let extractor = SkillExtractor::with_entity_tagger(Some(Box::new(FailingTagger))).unwrap();
        let skills = extractor.extract("Python and Docker experience");

        // Regex passes still run
        assert!(skills.contains("python"));
        assert!(skills.contains("docker"));
    }

    #[test]
    fn test_skill_set_invariants() {
        let mut set = SkillSet::new();
        set.insert("  Python  ");
        set.insert("python");
        set.insert("ab");
        set.insert("");

        assert_eq!(set.len(), 1);
        assert!(set.contains("python"));
    }

    #[test]
    fn test_skill_set_sorted_iteration() {
        let set: SkillSet = ["zookeeper", "ansible", "maven"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let ordered: Vec<&String> = set.iter().collect();
        assert_eq!(ordered, ["ansible", "maven", "zookeeper"]);
    }
}
