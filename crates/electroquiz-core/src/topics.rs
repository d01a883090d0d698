//! Suggested study topics offered alongside the chat.

use serde::Serialize;

/// A named group of related topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicCategory {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

/// The full topic catalog as served by `GET /api/topics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicCatalog {
    pub popular: &'static [&'static str],
    pub categories: &'static [TopicCategory],
}

pub const POPULAR_TOPICS: &[&str] = &[
    "Ohm's Law",
    "Logic Gates",
    "Operational Amplifiers",
    "Microcontrollers",
    "Transistors",
    "Filters",
    "Digital Signal Processing",
    "PCB Design",
];

pub const TOPIC_CATEGORIES: &[TopicCategory] = &[
    TopicCategory {
        name: "Circuit Theory",
        topics: &[
            "Ohm's Law and Kirchhoff's Laws",
            "Thevenin and Norton Theorems",
            "RC and RL Circuits",
            "Resonance in RLC Circuits",
            "Network Analysis Techniques",
        ],
    },
    TopicCategory {
        name: "Digital Electronics",
        topics: &[
            "Boolean Algebra and Logic Gates",
            "Combinational Circuit Design",
            "Sequential Circuits and Flip-Flops",
            "Counters and Registers",
            "Digital-to-Analog Conversion",
        ],
    },
    TopicCategory {
        name: "Analog Electronics",
        topics: &[
            "Semiconductor Devices",
            "Transistor Biasing Techniques",
            "Operational Amplifier Applications",
            "Filter Design",
            "Oscillator Circuits",
        ],
    },
    TopicCategory {
        name: "Microprocessors",
        topics: &[
            "Microprocessor Architecture",
            "Assembly Language Programming",
            "Memory Interfacing",
            "I/O Interfacing",
            "Microcontroller Applications",
        ],
    },
    TopicCategory {
        name: "Communication Systems",
        topics: &[
            "Modulation Techniques",
            "Digital Communication",
            "Transmission Lines",
            "Antenna Theory",
            "Wireless Communication",
        ],
    },
    TopicCategory {
        name: "Power Electronics",
        topics: &[
            "Power Semiconductor Devices",
            "AC-DC Converters",
            "DC-DC Converters",
            "Inverters",
            "Motor Drives",
        ],
    },
];

/// The built-in catalog.
pub fn catalog() -> TopicCatalog {
    TopicCatalog {
        popular: POPULAR_TOPICS,
        categories: TOPIC_CATEGORIES,
    }
}

/// Chat prompt used when a student picks a topic.
pub fn topic_prompt(topic: &str) -> String {
    format!("Tell me about {}", topic)
}
