pub mod structure {
    use serde::{Deserialize, Serialize};

    /// Communicative intent of an input prompt.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PromptType {
        Creative,
        Analytical,
        #[default]
        Conversational,
        Instructional,
    }

    /// Requested shape of the downstream answer.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum OutputFormat {
        List,
        Table,
        #[default]
        Paragraph,
        BulletPoints,
        Code,
        Report,
    }

    /// Voice the downstream answer should take.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Tone {
        #[default]
        Professional,
        Friendly,
        Formal,
        Humorous,
        Concise,
        Detailed,
    }

    /// Raw extraction results for one input, before defaults and generated
    /// sections are attached.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PromptAnalysis {
        pub role: String,
        pub task: String,
        pub context: String,
        pub requirements: Vec<String>,
        pub format: OutputFormat,
        pub tone: Tone,
        pub prompt_type: PromptType,
    }

    /// Canonical structured prompt. Field order here is the serialization
    /// order of the JSON output.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PromptStructure {
        pub role: String,
        pub task: String,
        pub context: String,
        pub requirements: Vec<String>,
        pub format: OutputFormat,
        pub examples: Vec<String>,
        pub constraints: Vec<String>,
        pub tone: Tone,
        pub prompt_type: PromptType,
    }
}

pub mod optimizer;

pub use optimizer::{OptimizeError, PromptOptimizer};
pub use structure::{OutputFormat, PromptAnalysis, PromptStructure, PromptType, Tone};
