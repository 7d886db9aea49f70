use crate::models::{CertificationMap, Toy, User};

/// Points awarded when the toy's age range equals the child's age range
pub const AGE_MATCH_POINTS: u32 = 50;

/// Points awarded per (certification, eco goal) match
pub const GOAL_MATCH_POINTS: u32 = 20;

/// Upper bound of the returned score
pub const MAX_SCORE: u32 = 100;

const AGE_MATCH_REASON: &str = "Perfect for your child's age.";

/// Certification slug -> eco goal phrases the certification satisfies
pub const GOAL_MAPPINGS: &[(&str, &[&str])] = &[
    ("fsc", &["Sustainable Wood", "Sustainable Materials", "Responsibly Sourced"]),
    ("gots", &["Organic Cotton", "Organic Materials", "Toxin-Free", "Plastic-Free"]),
    ("oeko-tex", &["Toxin-Free", "Safe Chemicals", "Safe for Kids"]),
    ("green-seal", &["Eco-Friendly", "Sustainable"]),
    ("certified-b-corp", &["Ethical Labor", "Social Responsibility"]),
];

/// Goal phrases satisfied by a certification slug (empty for unknown slugs)
pub fn goals_for_slug(slug: &str) -> &'static [&'static str] {
    GOAL_MAPPINGS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(slug))
        .map(|(_, goals)| *goals)
        .unwrap_or(&[])
}

/// Calculate a match score (0-100) and a human-readable reason for a toy
///
/// Scoring rules:
/// - +50 when the user's child age range equals the toy's age range
///   (exact, case-sensitive)
/// - +20 for every (toy certification, user goal) pair where the goal
///   case-insensitively equals a phrase the certification satisfies
///
/// Certification ids missing from `certifications` contribute nothing.
/// Duplicate certification ids on a toy are counted once per occurrence.
/// The score is capped at 100; the reason keeps every matched sentence.
pub fn calculate_match_score(
    toy: &Toy,
    user: &User,
    certifications: &CertificationMap,
) -> (u8, String) {
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // Age match
    if let Some(child_age_range) = user.child_age_range.as_deref() {
        if !child_age_range.is_empty() && toy.age_range == child_age_range {
            score += AGE_MATCH_POINTS;
            reasons.push(AGE_MATCH_REASON.to_string());
        }
    }

    // Eco goal match
    if !user.eco_goals.is_empty() {
        for cert_id in &toy.certification_ids {
            let Some(certification) = certifications.get(cert_id) else {
                continue;
            };
            let satisfied = goals_for_slug(&certification.slug);

            for goal in &user.eco_goals {
                if matches_goal(satisfied, goal) {
                    score += GOAL_MATCH_POINTS;
                    reasons.push(format!("Matches your goal: {}.", goal));
                }
            }
        }
    }

    let capped = score.min(MAX_SCORE) as u8;

    (capped, reasons.join(" "))
}

#[inline]
fn matches_goal(satisfied: &[&str], goal: &str) -> bool {
    let goal = goal.to_lowercase();
    satisfied.iter().any(|phrase| phrase.to_lowercase() == goal)
}
