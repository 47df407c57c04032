/// Canned study advice keyed by the primary learning style and primary cognitive
/// strength. Learning-style tips come first, then cognitive tips; duplicates are
/// not filtered. A missing or unmatched primary contributes nothing.
pub(crate) fn learning_tips(
    primary_learning_style: Option<&str>,
    primary_cognitive_strength: Option<&str>,
) -> Vec<String> {
    let mut tips = Vec::new();

    let style_tips: &[&str] = match primary_learning_style {
        Some("visual") => &[
            "Use diagrams, charts, and mind maps to visualize concepts",
            "Color-code notes and study materials",
            "Watch educational videos and demonstrations",
        ],
        Some("auditory") => &[
            "Record lectures and listen to them again",
            "Read material aloud or use text-to-speech",
            "Discuss concepts with others to reinforce understanding",
        ],
        Some("kinesthetic") => &[
            "Use hands-on activities and experiments",
            "Take breaks for physical movement during study sessions",
            "Create physical models or use manipulatives",
        ],
        Some("logical") => &[
            "Organize information in logical sequences or hierarchies",
            "Look for patterns and relationships between concepts",
            "Break complex problems into smaller, manageable steps",
        ],
        Some("social") => &[
            "Form or join study groups",
            "Teach concepts to others to reinforce understanding",
            "Engage in class discussions and collaborative projects",
        ],
        Some("solitary") => &[
            "Create a quiet, distraction-free study environment",
            "Set personal goals and track progress",
            "Use self-paced learning resources",
        ],
        _ => &[],
    };

    let cognitive_tips: &[&str] = match primary_cognitive_strength {
        Some("memory") => &[
            "Use spaced repetition techniques for memorization",
            "Create mnemonic devices for complex information",
        ],
        Some("attention") => &[
            "Use the Pomodoro technique (focused work with short breaks)",
            "Minimize distractions in your study environment",
        ],
        Some("problem_solving") => &[
            "Practice with a variety of problem types",
            "Analyze worked examples before attempting new problems",
        ],
        Some("creativity") => &[
            "Explore multiple approaches to assignments",
            "Connect concepts across different subjects",
        ],
        Some("critical_thinking") => &[
            "Question assumptions and evaluate evidence",
            "Compare and contrast different perspectives",
        ],
        _ => &[],
    };

    tips.extend(style_tips.iter().map(|tip| (*tip).to_string()));
    tips.extend(cognitive_tips.iter().map(|tip| (*tip).to_string()));
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_tips_precede_cognitive_tips() {
        let tips = learning_tips(Some("visual"), Some("memory"));
        assert_eq!(tips.len(), 5);
        assert!(tips[0].contains("diagrams"));
        assert!(tips[3].contains("spaced repetition"));
    }

    #[test]
    fn missing_primaries_yield_no_tips() {
        assert!(learning_tips(None, None).is_empty());
    }

    #[test]
    fn unmatched_cognitive_strength_contributes_nothing() {
        // spatial_reasoning is a valid catalog trait but has no canned tips
        let tips = learning_tips(Some("solitary"), Some("spatial_reasoning"));
        assert_eq!(tips.len(), 3);
    }
}
