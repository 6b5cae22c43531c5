// src/generation/fallback/quizzes.rs

use crate::models::{
    difficulty::{ByDifficulty, Difficulty},
    quiz::Question,
};

use super::CannedQuestion;

type QuizSet = ByDifficulty<[CannedQuestion; 5]>;

const fn q(
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
) -> CannedQuestion {
    CannedQuestion {
        question,
        options,
        correct,
        explanation,
    }
}

const PHOTOSYNTHESIS: QuizSet = ByDifficulty {
    easy: [
        q(
            "What are the three main inputs required for photosynthesis?",
            [
                "Sunlight, water, and carbon dioxide",
                "Oxygen, glucose, and nitrogen",
                "Chlorophyll, nitrogen, and phosphorus",
                "Heat, light, and soil nutrients",
            ],
            0,
            "Photosynthesis requires sunlight (light energy), water (H₂O), and carbon dioxide (CO₂) as inputs to produce glucose and oxygen.",
        ),
        q(
            "In which part of the plant does photosynthesis primarily occur?",
            ["Roots", "Stems", "Leaves", "Seeds"],
            2,
            "Photosynthesis primarily occurs in the leaves of plants, which contain chloroplasts with the pigment chlorophyll.",
        ),
        q(
            "What is the main product of photosynthesis that plants use for energy?",
            ["Oxygen", "Water", "Glucose", "Carbon dioxide"],
            2,
            "Glucose is the main product that plants create through photosynthesis and use as an energy source for growth and metabolism.",
        ),
        q(
            "Which gas do plants release as a byproduct of photosynthesis?",
            ["Carbon dioxide", "Nitrogen", "Oxygen", "Hydrogen"],
            2,
            "Plants release oxygen as a byproduct of photosynthesis, which is essential for life on Earth.",
        ),
        q(
            "In what organelle does photosynthesis take place?",
            ["Mitochondria", "Chloroplast", "Nucleus", "Ribosome"],
            1,
            "Photosynthesis occurs in chloroplasts, which contain thylakoids and stroma where the light and dark reactions take place.",
        ),
    ],
    medium: [
        q(
            "What is the primary function of the light-dependent reactions?",
            [
                "To fix carbon dioxide",
                "To produce ATP and NADPH",
                "To create glucose",
                "To break down glucose",
            ],
            1,
            "The light-dependent reactions capture light energy and convert it to chemical energy in the form of ATP and NADPH, which are then used in the Calvin cycle.",
        ),
        q(
            "Which pigment is primarily responsible for absorbing light energy in photosynthesis?",
            ["Carotenoid", "Chlorophyll a and b", "Xanthophyll", "Anthocyanin"],
            1,
            "Chlorophyll a and b are the primary photosynthetic pigments that absorb light energy, particularly in the blue and red wavelengths.",
        ),
        q(
            "What is the Calvin cycle also known as?",
            [
                "Light-dependent reactions",
                "Electron transport chain",
                "Light-independent reactions",
                "Krebs cycle",
            ],
            2,
            "The Calvin cycle is called the light-independent reactions because it doesn't directly require light energy, though it depends on ATP and NADPH produced by light reactions.",
        ),
        q(
            "In the thylakoid membrane, what is the role of the electron transport chain?",
            [
                "To produce glucose",
                "To create a proton gradient for ATP synthesis",
                "To absorb sunlight",
                "To break down water molecules",
            ],
            1,
            "The electron transport chain moves electrons and pumps protons across the thylakoid membrane, creating a gradient that drives ATP synthesis.",
        ),
        q(
            "How many carbon atoms does RuBP have, the compound that begins the Calvin cycle?",
            ["3 carbons", "5 carbons", "6 carbons", "7 carbons"],
            1,
            "RuBP (ribulose-1,5-bisphosphate) has 5 carbon atoms and is the compound that combines with CO₂ in the first step of the Calvin cycle.",
        ),
    ],
    hard: [
        q(
            "What is the quantum yield of photosynthesis, and what does it indicate?",
            [
                "The ratio of O₂ produced to light absorbed; near 100% efficiency",
                "The amount of ATP per glucose; typically 18",
                "The ratio of glucose to CO₂; always 1:6",
                "The electron transport rate; measured in mV",
            ],
            0,
            "Quantum yield approaches 100%, meaning nearly every photon absorbed by the light-harvesting complex contributes to the photochemical reactions.",
        ),
        q(
            "Explain the role of the Mn₄CaO₅ cluster in photosystem II.",
            [
                "It absorbs light energy",
                "It catalyzes water oxidation through the Kok cycle",
                "It transports electrons to PSII",
                "It produces NADPH",
            ],
            1,
            "The Mn₄CaO₅ cluster (water-oxidizing complex) catalyzes the stepwise oxidation of water to molecular oxygen through the Kok cycle in PSII.",
        ),
        q(
            "How does photorespiration affect photosynthetic efficiency?",
            [
                "It increases ATP production",
                "It reduces net CO₂ fixation by 20-50% in C3 plants",
                "It eliminates the need for the Calvin cycle",
                "It enhances oxygen production",
            ],
            1,
            "Photorespiration occurs when RuBisCO fixes O₂ instead of CO₂, reducing net photosynthetic efficiency by 20-50% in C3 plants, particularly at high temperatures.",
        ),
        q(
            "What is the chemiosmotic mechanism in photosynthesis?",
            [
                "Direct conversion of photons to ATP",
                "Proton gradient drives ATP synthesis through chemiosmosis",
                "Light directly phosphorylates ADP",
                "Electron transport directly produces NADPH",
            ],
            1,
            "Chemiosmosis couples the electron transport chain to proton pumping, establishing a gradient across the thylakoid membrane that drives ATP synthesis through ATP synthase.",
        ),
        q(
            "How do C4 and CAM plants differ from C3 plants in photosynthetic efficiency?",
            [
                "They have more chloroplasts",
                "They concentrate CO₂ to minimize photorespiration",
                "They have no thylakoids",
                "They don't use the Calvin cycle",
            ],
            1,
            "C4 and CAM plants have evolved mechanisms to concentrate CO₂ around RuBisCO, significantly reducing photorespiration and improving efficiency in hot or dry conditions.",
        ),
    ],
};

const GENERIC: QuizSet = ByDifficulty {
    easy: [
        q(
            "What is the primary purpose of studying {topic}?",
            [
                "To pass exams",
                "To understand fundamental concepts and build foundational knowledge",
                "To memorize facts",
                "For entertainment",
            ],
            1,
            "Understanding fundamental concepts in this topic provides the foundation for deeper learning and practical application.",
        ),
        q(
            "Which of the following is a key component of {topic}?",
            [
                "Advanced theory",
                "Basic definitions and foundational principles",
                "Complex mathematics",
                "Specialized equipment",
            ],
            1,
            "Basic definitions and foundational principles are essential starting points for understanding this topic.",
        ),
        q(
            "How is {topic} commonly applied in practice?",
            [
                "Only in theoretical contexts",
                "In real-world situations and practical applications",
                "Never applied",
                "Only by experts",
            ],
            1,
            "This topic has practical applications in many real-world scenarios that learners encounter.",
        ),
        q(
            "What should a beginner focus on when learning {topic}?",
            [
                "Advanced theories",
                "Basic concepts and key definitions",
                "Historical facts",
                "Mathematical proofs",
            ],
            1,
            "Beginners should focus on understanding basic concepts and key definitions before moving to advanced material.",
        ),
        q(
            "Why is {topic} important?",
            [
                "It's not important",
                "It provides essential knowledge and understanding in this field",
                "Only for specialists",
                "It was important historically",
            ],
            1,
            "This topic is important because it provides essential knowledge and understanding in its field of study.",
        ),
    ],
    medium: [
        q(
            "How do the main concepts of {topic} interconnect?",
            [
                "They don't relate",
                "They form an integrated framework with multiple interactions",
                "Only sequentially",
                "In circular patterns only",
            ],
            1,
            "The concepts in this topic are interconnected and form an integrated framework for understanding.",
        ),
        q(
            "What current developments are shaping {topic}?",
            [
                "None - the field is static",
                "New research and emerging technologies",
                "Only historical developments",
                "Political changes",
            ],
            1,
            "Contemporary research and emerging technologies continue to shape and advance this field.",
        ),
        q(
            "How do researchers approach problems in {topic}?",
            [
                "Through guessing",
                "Using systematic methodology and controlled approaches",
                "No standard method",
                "By intuition only",
            ],
            1,
            "Professional researchers use systematic and controlled methodological approaches.",
        ),
        q(
            "What are common misconceptions about {topic}?",
            [
                "There are none",
                "People often oversimplify complex interactions",
                "Everyone understands it correctly",
                "Misconceptions only exist in history",
            ],
            1,
            "Common misconceptions often arise from oversimplification of complex interactions in this topic.",
        ),
        q(
            "How has understanding of {topic} evolved?",
            [
                "It hasn't changed",
                "It has progressed with new discoveries and evidence",
                "It has declined",
                "Only dramatically in recent years",
            ],
            1,
            "Like all scientific fields, understanding has evolved as new evidence and research methods emerged.",
        ),
    ],
    hard: [
        q(
            "What theoretical frameworks compete in {topic}?",
            [
                "No frameworks exist",
                "Multiple competing frameworks with different assumptions",
                "Only one framework",
                "Frameworks from other fields",
            ],
            1,
            "Multiple theoretical frameworks with different foundational assumptions exist in this advanced topic.",
        ),
        q(
            "How do recent empirical findings challenge existing models in {topic}?",
            [
                "They don't",
                "New findings suggest limitations and necessary revisions",
                "Findings only confirm models",
                "Empirical study is irrelevant",
            ],
            1,
            "Current research regularly identifies limitations and suggests necessary model refinements.",
        ),
        q(
            "What mathematical or formal foundations underpin {topic}?",
            [
                "None are needed",
                "Complex mathematical frameworks and formal systems",
                "Simple arithmetic only",
                "Mathematics is contradictory",
            ],
            1,
            "Advanced understanding requires sophisticated mathematical and formal frameworks.",
        ),
        q(
            "How do multi-scale mechanisms operate in {topic}?",
            [
                "Only at one scale",
                "Multiple scales with emergent properties and complex causality",
                "Scales are independent",
                "Scale effects are negligible",
            ],
            1,
            "Advanced systems exhibit multi-scale interactions that create emergent properties.",
        ),
        q(
            "What unresolved questions drive current research in {topic}?",
            [
                "All questions are solved",
                "Major theoretical gaps continue to drive innovation",
                "Research has stalled",
                "Only trivial questions remain",
            ],
            1,
            "Active research areas focus on unresolved theoretical challenges and open questions.",
        ),
    ],
};

const QUIZZES: [(&str, QuizSet); 1] = [("photosynthesis", PHOTOSYNTHESIS)];

/// Five canned questions for `topic` at `difficulty`.
pub fn quiz(topic: &str, difficulty: Difficulty) -> Vec<Question> {
    let set = super::lookup(topic, &QUIZZES).unwrap_or(&GENERIC);
    set.get(difficulty).iter().map(|c| c.render(topic)).collect()
}
