//! Exact and fuzzy skill matching between resume and job description

use crate::error::Result;
use crate::processing::skill_extractor::{SkillExtractor, SkillSet};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Match strength for a skill present verbatim in the resume set.
pub const EXACT_STRENGTH: f32 = 100.0;

/// Match strength for substring containment in either direction.
pub const SUBSTRING_STRENGTH: f32 = 85.0;

/// Minimum strength (0-100) for a job-description skill to count as matched.
pub const MATCH_THRESHOLD: f32 = 70.0;

/// Breadth bonus added per matched skill, capped at [`MATCH_BONUS_CAP`].
pub const MATCH_BONUS_PER_SKILL: f32 = 0.02;
pub const MATCH_BONUS_CAP: f32 = 0.2;

/// Pseudo-skill tokens taken from raw text when extraction finds nothing.
const FALLBACK_TOKEN_LIMIT: usize = 20;

/// Matched/missing entries kept in the returned result.
const RESULT_SKILL_LIMIT: usize = 10;

/// Outcome of one hard-match pass. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Coverage score in [0, 1], including the breadth bonus.
    pub score: f32,
    /// Resume-side skills that satisfied a job-description skill, at most 10.
    pub matched: Vec<String>,
    /// Job-description skills with no acceptable resume match, at most 10.
    pub missing: Vec<String>,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            score: 0.0,
            matched: Vec::new(),
            missing: Vec::new(),
        }
    }
}

/// Compares extracted skill sets using exact, fuzzy and substring matching.
pub struct HardMatcher {
    extractor: SkillExtractor,
    fallback_token: Regex,
}

impl HardMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new()?,
            fallback_token: Regex::new(r"\b[a-z][a-z0-9+#.]{2,}\b")
                .expect("Invalid fallback token regex"),
        })
    }

    /// Score how well the resume covers the job description's skills.
    /// Never fails; degenerate inputs produce a zero result.
    pub fn match_skills(&self, resume_text: &str, jd_text: &str) -> MatchResult {
        let resume_skills = self.extractor.extract(resume_text);
        let mut jd_skills = self.extractor.extract(jd_text);

        if jd_skills.is_empty() {
            jd_skills = self.fallback_tokens(jd_text);
            log::debug!(
                "No skills extracted from job description, falling back to {} raw tokens",
                jd_skills.len()
            );
        }
        if jd_skills.is_empty() {
            return MatchResult::empty();
        }

        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for jd_skill in jd_skills.iter() {
            match Self::best_match(jd_skill, &resume_skills) {
                Some(resume_skill) => matched.push(resume_skill),
                None => missing.push(jd_skill.clone()),
            }
        }

        let base_score = matched.len() as f32 / jd_skills.len() as f32;
        let bonus = (matched.len() as f32 * MATCH_BONUS_PER_SKILL).min(MATCH_BONUS_CAP);
        let score = (base_score + bonus).min(1.0);

        matched.truncate(RESULT_SKILL_LIMIT);
        missing.truncate(RESULT_SKILL_LIMIT);

        MatchResult {
            score,
            matched,
            missing,
        }
    }

    /// Find the resume skill that best satisfies `jd_skill`, if any reaches
    /// the acceptance threshold.
    fn best_match(jd_skill: &str, resume_skills: &SkillSet) -> Option<String> {
        if resume_skills.contains(jd_skill) {
            return Some(jd_skill.to_string());
        }

        let mut best_strength = 0.0_f32;
        let mut best: Option<&String> = None;

        for resume_skill in resume_skills.iter() {
            let ratio = strsim::normalized_levenshtein(jd_skill, resume_skill) as f32 * 100.0;
            if ratio >= MATCH_THRESHOLD && ratio > best_strength {
                best_strength = ratio;
                best = Some(resume_skill);
            }

            if (jd_skill.contains(resume_skill.as_str()) || resume_skill.contains(jd_skill))
                && SUBSTRING_STRENGTH > best_strength
            {
                best_strength = SUBSTRING_STRENGTH;
                best = Some(resume_skill);
            }
        }

        if best_strength >= MATCH_THRESHOLD {
            best.cloned()
        } else {
            None
        }
    }

    /// Take up to [`FALLBACK_TOKEN_LIMIT`] unique alphanumeric tokens from
    /// the raw text as a pseudo-skill-set, in first-occurrence order.
    fn fallback_tokens(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        let mut seen = Vec::new();

        for m in self.fallback_token.find_iter(&lowered) {
            let token = m.as_str().to_string();
            if !seen.contains(&token) {
                seen.push(token);
                if seen.len() == FALLBACK_TOKEN_LIMIT {
                    break;
                }
            }
        }

        seen.into_iter().collect()
    }
}
