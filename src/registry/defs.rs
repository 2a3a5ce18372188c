#[derive(Debug, Clone, Copy)]
pub struct TraitDef {
    pub code: &'static str,
    pub name: &'static str,
    pub questions: &'static [&'static str],
}

const SOCIAL_ORIENTATION: &[&str] = &[
    "Large social gatherings drain my energy, even when I enjoy them.",
    "In group settings I am usually the most observant person in the room.",
    "People describe me as an active listener.",
    "I need quiet time to reflect before I share an opinion.",
    "I am comfortable when I pitch ideas to people I have just met.",
    "I jump into conversations with strangers without hesitation.",
    "I enjoy being at the center of a lively discussion.",
];
const DECISION_MAKING: &[&str] = &[
    "I make timely decisions even when information is incomplete.",
    "I weigh the trade-offs of an option before committing to it.",
    "Once I make a decision, I follow through on it.",
];
const RELATIONSHIP_BUILDING: &[&str] = &[
    "I keep in touch with people in my network even when I need nothing from them.",
    "I find it easy to build trust with new contacts.",
    "I invest time in understanding what matters to the people I work with.",
];
const NEGOTIATION: &[&str] = &[
    "I look for outcomes where both sides feel they have gained something.",
    "I prepare my walk-away position before entering a negotiation.",
    "I stay calm when the other side makes demands I did not expect.",
];
const CRITICAL_THINKING: &[&str] = &[
    "I question assumptions before accepting a conclusion.",
    "I look for evidence that could prove my idea wrong.",
    "I can separate facts from opinions in a heated debate.",
];
const PROBLEM_SOLVING: &[&str] = &[
    "I break complex problems into smaller parts I can work on.",
    "When one approach fails, I quickly try another.",
    "I enjoy working on problems that have no obvious answer.",
];
const ACCOUNTABILITY: &[&str] = &[
    "I take ownership of my mistakes without blaming others.",
    "I deliver on the commitments I make to others.",
    "I hold myself to the same standards I expect from my team.",
];
const EMOTIONAL_INTELLIGENCE: &[&str] = &[
    "I notice how others are feeling even when they do not say it.",
    "I can manage my emotions under pressure.",
    "I adjust how I communicate based on the mood of the room.",
];
const CONFLICT_RESOLUTION: &[&str] = &[
    "I address disagreements directly instead of avoiding them.",
    "I help people in conflict understand each other's point of view.",
    "I can stay neutral when mediating between two colleagues.",
];
const TEAM_BUILDING: &[&str] = &[
    "I bring together people with complementary skills.",
    "I create an environment where team members feel they belong.",
    "I recognize and celebrate the contributions of others.",
];
const SERVANT_LEADERSHIP: &[&str] = &[
    "I put the needs of my team ahead of my own recognition.",
    "I help the people around me grow, even if they outgrow their role.",
    "I ask my team what they need from me to succeed.",
];
const ADAPTABILITY: &[&str] = &[
    "I adjust my plans quickly when circumstances change.",
    "I am comfortable working in ambiguous situations.",
    "I see unexpected change as an opportunity.",
];
const APPROACH_TO_FAILURE: &[&str] = &[
    "I treat failure as a source of learning.",
    "After a setback, I analyze what went wrong before trying again.",
    "Fear of failure rarely stops me from attempting something new.",
];
const RESILIENCE_AND_GRIT: &[&str] = &[
    "I keep going when progress is slow.",
    "I recover quickly from disappointments.",
    "I stay committed to long-term goals despite obstacles.",
];
const INNOVATION_ORIENTATION: &[&str] = &[
    "I regularly come up with new ways of doing things.",
    "I enjoy experimenting with untested ideas.",
    "I look for opportunities others have overlooked.",
];
const DRIVE_AND_AMBITION: &[&str] = &[
    "I set ambitious goals for myself.",
    "I am motivated to achieve more than what is expected.",
    "I push myself to improve even after reaching a goal.",
];
const RISK_TAKING: &[&str] = &[
    "I am willing to take calculated risks to pursue an opportunity.",
    "I can act even when the outcome is uncertain.",
    "I would leave a stable position to pursue a promising venture.",
];

const BUILTIN_TRAITS: &[TraitDef] = &[
    TraitDef {
        code: "IN",
        name: "Social Orientation",
        questions: SOCIAL_ORIENTATION,
    },
    TraitDef {
        code: "DM",
        name: "Decision Making",
        questions: DECISION_MAKING,
    },
    TraitDef {
        code: "RB",
        name: "Relationship-Building",
        questions: RELATIONSHIP_BUILDING,
    },
    TraitDef {
        code: "N",
        name: "Negotiation",
        questions: NEGOTIATION,
    },
    TraitDef {
        code: "CT",
        name: "Critical Thinking",
        questions: CRITICAL_THINKING,
    },
    TraitDef {
        code: "PS",
        name: "Problem Solving",
        questions: PROBLEM_SOLVING,
    },
    TraitDef {
        code: "A",
        name: "Accountability",
        questions: ACCOUNTABILITY,
    },
    TraitDef {
        code: "EI",
        name: "Emotional Intelligence",
        questions: EMOTIONAL_INTELLIGENCE,
    },
    TraitDef {
        code: "C",
        name: "Conflict Resolution",
        questions: CONFLICT_RESOLUTION,
    },
    TraitDef {
        code: "TB",
        name: "Team Building",
        questions: TEAM_BUILDING,
    },
    TraitDef {
        code: "SL",
        name: "Servant Leadership",
        questions: SERVANT_LEADERSHIP,
    },
    TraitDef {
        code: "AD",
        name: "Adaptability",
        questions: ADAPTABILITY,
    },
    TraitDef {
        code: "F",
        name: "Approach to Failure",
        questions: APPROACH_TO_FAILURE,
    },
    TraitDef {
        code: "RG",
        name: "Resilience and Grit",
        questions: RESILIENCE_AND_GRIT,
    },
    TraitDef {
        code: "IO",
        name: "Innovation Orientation",
        questions: INNOVATION_ORIENTATION,
    },
    TraitDef {
        code: "DA",
        name: "Drive and Ambition",
        questions: DRIVE_AND_AMBITION,
    },
    TraitDef {
        code: "RT",
        name: "Risk Taking",
        questions: RISK_TAKING,
    },
];

/// Column order of the correlation heatmap.
const DISPLAY_ORDER: &[&str] = &[
    "Social Orientation",
    "Resilience and Grit",
    "Servant Leadership",
    "Emotional Intelligence",
    "Decision Making",
    "Problem Solving",
    "Drive and Ambition",
    "Innovation Orientation",
    "Adaptability",
    "Critical Thinking",
    "Team Building",
    "Risk Taking",
    "Accountability",
    "Relationship-Building",
    "Negotiation",
    "Conflict Resolution",
    "Approach to Failure",
];

#[derive(Debug, Clone, Copy)]
pub struct LikertPoint {
    pub label: &'static str,
    pub value: f64,
}

const LIKERT_SCALE: &[LikertPoint] = &[
    LikertPoint {
        label: "strongly disagree",
        value: 0.0,
    },
    LikertPoint {
        label: "disagree",
        value: 0.25,
    },
    LikertPoint {
        label: "neutral",
        value: 0.5,
    },
    LikertPoint {
        label: "neither agree nor disagree",
        value: 0.5,
    },
    LikertPoint {
        label: "agree",
        value: 0.75,
    },
    LikertPoint {
        label: "strongly agree",
        value: 1.0,
    },
];

pub fn builtin_traits() -> &'static [TraitDef] {
    BUILTIN_TRAITS
}

pub fn display_order() -> &'static [&'static str] {
    DISPLAY_ORDER
}

pub fn likert_scale() -> &'static [LikertPoint] {
    LIKERT_SCALE
}
