// src/generation/fallback/summaries.rs

use crate::models::difficulty::{ByDifficulty, Difficulty};

const SUMMARIES: [(&str, ByDifficulty<&str>); 3] = [
    (
        "photosynthesis",
        ByDifficulty {
            easy: "Photosynthesis is the process by which plants use sunlight, water, and carbon dioxide to create oxygen and energy in the form of glucose. It occurs mainly in the leaves of plants. This process has two main parts: the light-dependent reactions that occur in sunlight, and the light-independent reactions (Calvin cycle) that don't require direct sunlight. Plants use the glucose they create as food for growth and energy. Photosynthesis is crucial for life on Earth because it produces the oxygen we breathe and forms the base of most food chains.",
            medium: "Photosynthesis is the metabolic process by which autotrophic organisms, primarily plants, convert light energy into chemical energy stored in glucose. The process occurs in two main stages: the light-dependent reactions in the thylakoid membranes of chloroplasts, where light energy excites electrons in photosystem II and I, driving the synthesis of ATP and NADPH; and the light-independent reactions (Calvin cycle) in the stroma, where CO₂ is fixed into organic molecules through the enzyme RuBisCO. The electron transport chain and proton gradient generation are critical for ATP synthesis via chemiosmosis. Photosynthesis is essential not only for producing oxygen and carbohydrates but also for global carbon cycling and energy flow through ecosystems.",
            hard: "Photosynthesis represents a complex series of photochemical and enzymatic reactions that convert photons into chemical energy with remarkable quantum efficiency (>90%). The process involves sophisticated light-harvesting complexes that utilize exciton transfer to funnel energy to reaction centers with nearly 100% quantum yield. In photosystem II, water oxidation at the Mn₄CaO₅ cluster generates electrons, protons, and molecular oxygen through a Kok cycle mechanism. The Z-scheme couples photosystems II and I through the cytochrome b₆f complex, establishing a proton gradient that drives ATP synthesis via chemiosmotic coupling. The Calvin-Benson cycle utilizes RuBisCO, the most abundant protein on Earth, with sophisticated allosteric regulation. Recent research has revealed the role of photorespiration, dynamic thylakoid organization, and linear/cyclic electron flows in optimizing photosynthetic efficiency under varying environmental conditions. The regulatory mechanisms involve reversible phosphorylation and the xanthophyll cycle for photoprotection.",
        },
    ),
    (
        "evolution",
        ByDifficulty {
            easy: "Evolution is the process by which living organisms change and develop over long periods of time. Charles Darwin's theory of evolution by natural selection explains how species adapt to their environments. Organisms that are better adapted to survive produce more offspring, passing their traits to the next generation. Over millions of years, small changes accumulate and lead to the formation of new species. Evolution is supported by evidence from fossils, DNA, and observations of living organisms. It helps us understand the diversity of life on Earth and our place in nature.",
            medium: "Evolution is the change in inheritable characteristics of populations over successive generations, driven primarily by natural selection. Variation within populations, combined with differential reproductive success based on fitness to environmental conditions, results in gradual change in allele frequencies. Speciation occurs through reproductive isolation when populations diverge sufficiently. Evidence for evolution includes fossil records showing transitional forms, comparative anatomy revealing homologous structures, and genetic data demonstrating common ancestry. Population genetics quantifies evolutionary change through allele frequency modifications. Mechanisms beyond natural selection include genetic drift, mutation, and gene flow, which collectively shape evolutionary trajectories.",
            hard: "Evolution is the descent with modification of lineages through mechanisms of variation and selection operating over ecological and evolutionary timescales. The Modern Evolutionary Synthesis integrates population genetics, ecology, and paleontology. Adaptive landscapes, fitness functions, and evolutionary game theory provide mathematical frameworks for understanding selection dynamics. Speciation involves reproductive isolation through geographic, temporal, or behavioral mechanisms, potentially driven by divergent selection or genetic drift. Molecular evolution, including rates of nucleotide substitution (Ka/Ks ratios), reveals both neutral evolution and adaptive selection at the genomic level. Recent advances include evolutionary developmental biology (evo-devo), which examines how changes in developmental gene regulation drive morphological evolution. Macroevolution, emerging from microevolutionary processes, shows punctuated equilibrium patterns in paleontological records, suggesting periods of rapid change followed by stasis.",
        },
    ),
    (
        "climate change",
        ByDifficulty {
            easy: "Climate change refers to long-term shifts in global temperatures and weather patterns, primarily caused by human activities. The burning of fossil fuels releases greenhouse gases like carbon dioxide and methane, which trap heat in the atmosphere. This causes global warming, leading to rising sea levels, melting ice caps, and changing weather patterns. Climate change affects agriculture, water resources, and wildlife habitats. Individuals and governments can take action by reducing emissions, using renewable energy, and protecting forests. Understanding climate change is important for creating a sustainable future for generations to come.",
            medium: "Climate change is a shift in global climate patterns driven predominantly by anthropogenic greenhouse gas emissions since the Industrial Revolution. The enhanced greenhouse effect occurs when atmospheric CO₂ concentrations increase from ~280 ppm to >420 ppm, increasing radiative forcing. Climate models project warming of 1.5-4.5°C depending on emission scenarios, with associated impacts including ocean acidification, sea-level rise from thermal expansion and ice sheet dynamics, altered precipitation patterns, and ecosystem disruption. Feedback mechanisms amplify warming, including ice-albedo feedback, water vapor feedback, and cloud-radiation interactions. Mitigation strategies include emissions reduction, carbon sequestration, and renewable energy transition. Adaptation measures address unavoidable impacts through resilience building and infrastructure modification.",
            hard: "Climate change involves complex interactions between the atmosphere, oceans, cryosphere, and biosphere, quantified through coupled climate models incorporating radiative transfer equations, fluid dynamics, and thermodynamics. Anthropogenic radiative forcing from greenhouse gases, aerosols, and land-use changes perturbs the climate system's radiative balance. Climate sensitivity (ΔT for 2xCO₂) represents uncertainty in feedback amplification, with estimates ranging from 1.5-4.5°C. Paleoclimate records provide context through ice core isotope records, marine sediment cores, and tree rings. Regional climate impacts involve teleconnections, monsoon dynamics, and jet stream behavior. The carbon cycle, including ocean uptake, terrestrial sinks, and permafrost dynamics, determines atmospheric CO₂ trajectories. Mitigation pathways consistent with Paris Agreement targets require net-zero emissions by 2050-2070, necessitating rapid energy system transformation and nature-based solutions.",
        },
    ),
];

const GENERIC: ByDifficulty<&str> = ByDifficulty {
    easy: "{topic} is an important topic in education and learning. It covers fundamental concepts and principles that are essential for understanding this subject area. Students typically learn about the basic definitions, key components, and practical applications. Mastering these fundamentals provides a strong foundation for more advanced study. Regular practice and engagement with this material helps build both knowledge and critical thinking skills.",
    medium: "{topic} is a multifaceted subject that requires understanding both theoretical foundations and practical applications. The topic encompasses several key concepts and principles that interconnect to form a comprehensive framework. Understanding the historical development, current research, and diverse perspectives on this topic is important for deeper learning. Professional practitioners in this field must grasp both the technical and conceptual aspects. Continued study and practical experience help develop expertise and nuanced understanding.",
    hard: "{topic} represents an advanced area of study that requires sophisticated understanding of theoretical frameworks, mathematical foundations, and contemporary research. The field involves complex interactions between multiple domains of knowledge and cutting-edge developments. Current research identifies several open questions and emerging paradigms that challenge existing understanding. Mastery of this topic requires not only comprehensive knowledge but also critical evaluation of sources, understanding of research methodology, and ability to contribute novel insights. The field continues to evolve with interdisciplinary approaches and novel technologies reshaping understanding.",
};

pub fn summary(topic: &str, difficulty: Difficulty) -> String {
    match super::lookup(topic, &SUMMARIES) {
        Some(levels) => levels.get(difficulty).to_string(),
        None => super::fill(GENERIC.get(difficulty), topic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_summary_matches_case_insensitively() {
        let text = summary("Photosynthesis in plants", Difficulty::Hard);
        assert_eq!(text, SUMMARIES[0].1.hard);
    }

    #[test]
    fn later_keys_are_reachable() {
        assert_eq!(summary("Climate change", Difficulty::Easy), SUMMARIES[2].1.easy);
        assert_eq!(summary("evolution", Difficulty::Medium), SUMMARIES[1].1.medium);
    }

    #[test]
    fn generic_summary_embeds_literal_topic() {
        let text = summary("Graph Theory", Difficulty::Easy);
        assert!(text.starts_with("Graph Theory is an important topic"));
        assert!(!text.contains("{topic}"));
    }

    #[test]
    fn unknown_difficulty_gets_medium() {
        let difficulty = Difficulty::lenient("impossible");
        assert_eq!(summary("evolution", difficulty), SUMMARIES[1].1.medium);
        assert!(summary("Graph Theory", difficulty).starts_with("Graph Theory is a multifaceted subject"));
    }
}
