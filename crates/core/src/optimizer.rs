use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::structure::{OutputFormat, PromptAnalysis, PromptStructure, PromptType, Tone};

// All tables are ordered; the extractors take the first hit in declaration
// order, not the leftmost hit in the text.
const ROLE_KEYWORDS: [(&str, &str); 6] = [
    ("专家", "expert"),
    ("助手", "assistant"),
    ("老师", "teacher"),
    ("分析师", "analyst"),
    ("顾问", "consultant"),
    ("作家", "writer"),
];

const CONTEXT_INDICATORS: [&str; 4] = ["背景", "情况", "场景", "环境"];

const FORMAT_KEYWORDS: [(&str, OutputFormat); 6] = [
    ("列表", OutputFormat::List),
    ("表格", OutputFormat::Table),
    ("段落", OutputFormat::Paragraph),
    ("要点", OutputFormat::BulletPoints),
    ("代码", OutputFormat::Code),
    ("报告", OutputFormat::Report),
];

const TONE_KEYWORDS: [(&str, Tone); 6] = [
    ("专业", Tone::Professional),
    ("友好", Tone::Friendly),
    ("正式", Tone::Formal),
    ("幽默", Tone::Humorous),
    ("简洁", Tone::Concise),
    ("详细", Tone::Detailed),
];

const CREATIVE_KEYWORDS: [&str; 4] = ["创作", "想象", "创意", "故事"];
const ANALYTICAL_KEYWORDS: [&str; 4] = ["分析", "评估", "比较", "研究"];
const INSTRUCTIONAL_KEYWORDS: [&str; 4] = ["教", "解释", "指导", "步骤"];

const DEFAULT_ROLE: &str = "你是一位AI助手";
const DEFAULT_CONTEXT: &str = "用户需要专业的帮助";
const DEFAULT_REQUIREMENT: &str = "生成高质量的回答";

static TASK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        "帮我(.*?)(?:，|。|$)",
        "请(.*?)(?:，|。|$)",
        "需要(.*?)(?:，|。|$)",
        "想要(.*?)(?:，|。|$)",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

static REQUIREMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        "要求：(.*?)(?:，|。|$)",
        "需要(.*?)(?:，|。|$)",
        "必须(.*?)(?:，|。|$)",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded pattern")
}

const EXAMPLES: [(PromptType, &[&str]); 4] = [
    (PromptType::Creative, &["示例：创作一个关于未来科技的短故事"]),
    (PromptType::Analytical, &["示例：分析该策略的优缺点"]),
    (PromptType::Instructional, &["示例：步骤1: 准备材料; 步骤2: 开始操作"]),
    (PromptType::Conversational, &["示例：用户友好的对话方式回答"]),
];
const GENERIC_EXAMPLES: &[&str] = &["提供相关示例"];

const CONSTRAINTS: [(PromptType, &[&str]); 4] = [
    (PromptType::Creative, &["保持内容积极向上", "避免敏感话题"]),
    (PromptType::Analytical, &["基于事实和数据", "保持客观性"]),
    (PromptType::Instructional, &["步骤清晰明确", "易于理解和执行"]),
    (PromptType::Conversational, &["语言自然流畅", "回答简洁明了"]),
];
const GENERIC_CONSTRAINTS: &[&str] = &["遵循基本原则", "确保内容准确"];

/// Error raised while turning an input into serialized output. Extraction
/// itself is total; only serialization can fail.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Rule-based restructurer for informal Chinese prompts.
///
/// Holds its lookup tables as read-only configuration; never mutated after
/// construction, so a single instance is safe to share across threads.
pub struct PromptOptimizer {
    role_keywords: &'static [(&'static str, &'static str)],
    task_patterns: &'static [Regex],
    context_indicators: &'static [&'static str],
    requirement_patterns: &'static [Regex],
    format_keywords: &'static [(&'static str, OutputFormat)],
    tone_keywords: &'static [(&'static str, Tone)],
}

impl PromptOptimizer {
    pub fn new() -> Self {
        Self {
            role_keywords: &ROLE_KEYWORDS,
            task_patterns: TASK_PATTERNS.as_slice(),
            context_indicators: &CONTEXT_INDICATORS,
            requirement_patterns: REQUIREMENT_PATTERNS.as_slice(),
            format_keywords: &FORMAT_KEYWORDS,
            tone_keywords: &TONE_KEYWORDS,
        }
    }

    /// Run the seven extraction routines over one input.
    pub fn analyze(&self, prompt: &str) -> PromptAnalysis {
        PromptAnalysis {
            role: self.extract_role(prompt),
            task: self.extract_task(prompt),
            context: self.extract_context(prompt),
            requirements: self.extract_requirements(prompt),
            format: self.extract_format(prompt),
            tone: self.extract_tone(prompt),
            prompt_type: self.classify(prompt),
        }
    }

    /// Assemble the full structured record: analysis plus the context
    /// default and the sections derived from the classified type.
    pub fn restructure(&self, prompt: &str) -> PromptStructure {
        let analysis = self.analyze(prompt);
        let context = if analysis.context.is_empty() {
            DEFAULT_CONTEXT.to_string()
        } else {
            analysis.context
        };

        PromptStructure {
            role: analysis.role,
            task: analysis.task,
            context,
            requirements: analysis.requirements,
            format: analysis.format,
            examples: examples_for(analysis.prompt_type),
            constraints: constraints_for(analysis.prompt_type),
            tone: analysis.tone,
            prompt_type: analysis.prompt_type,
        }
    }

    /// Restructure and serialize to pretty JSON (2-space indentation,
    /// declaration-order keys, non-ASCII kept literal).
    pub fn optimize(&self, prompt: &str) -> Result<String, OptimizeError> {
        let structure = self.restructure(prompt);
        Ok(serde_json::to_string_pretty(&structure)?)
    }

    fn extract_role(&self, prompt: &str) -> String {
        for entry in self.role_keywords {
            if prompt.contains(entry.0) {
                return format!("你是一位{}", entry.0);
            }
        }
        DEFAULT_ROLE.to_string()
    }

    fn extract_task(&self, prompt: &str) -> String {
        for pattern in self.task_patterns {
            if let Some(caps) = pattern.captures(prompt) {
                return caps[1].trim().to_string();
            }
        }
        match prompt.split_once('。') {
            Some((head, _)) => head.to_string(),
            None => prompt.to_string(),
        }
    }

    fn extract_context(&self, prompt: &str) -> String {
        for indicator in self.context_indicators {
            if let Some(start) = prompt.find(indicator) {
                // The first indicator in table order decides; without a
                // closing 。 after it the context stays empty.
                return match prompt[start..].find('。') {
                    Some(offset) => {
                        let end = start + offset + '。'.len_utf8();
                        prompt[start..end].to_string()
                    }
                    None => String::new(),
                };
            }
        }
        String::new()
    }

    fn extract_requirements(&self, prompt: &str) -> Vec<String> {
        let mut requirements = Vec::new();
        for pattern in self.requirement_patterns {
            for caps in pattern.captures_iter(prompt) {
                requirements.push(caps[1].trim().to_string());
            }
        }
        if requirements.is_empty() {
            requirements.push(DEFAULT_REQUIREMENT.to_string());
        }
        requirements
    }

    fn extract_format(&self, prompt: &str) -> OutputFormat {
        self.format_keywords
            .iter()
            .find(|entry| prompt.contains(entry.0))
            .map(|entry| entry.1)
            .unwrap_or_default()
    }

    fn extract_tone(&self, prompt: &str) -> Tone {
        self.tone_keywords
            .iter()
            .find(|entry| prompt.contains(entry.0))
            .map(|entry| entry.1)
            .unwrap_or_default()
    }

    fn classify(&self, prompt: &str) -> PromptType {
        if contains_any(prompt, &CREATIVE_KEYWORDS) {
            PromptType::Creative
        } else if contains_any(prompt, &ANALYTICAL_KEYWORDS) {
            PromptType::Analytical
        } else if contains_any(prompt, &INSTRUCTIONAL_KEYWORDS) {
            PromptType::Instructional
        } else {
            PromptType::Conversational
        }
    }
}

impl Default for PromptOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(*keyword))
}

fn examples_for(prompt_type: PromptType) -> Vec<String> {
    pick(&EXAMPLES, prompt_type, GENERIC_EXAMPLES)
}

fn constraints_for(prompt_type: PromptType) -> Vec<String> {
    pick(&CONSTRAINTS, prompt_type, GENERIC_CONSTRAINTS)
}

fn pick(
    table: &[(PromptType, &[&str])],
    prompt_type: PromptType,
    fallback: &[&str],
) -> Vec<String> {
    table
        .iter()
        .find(|entry| entry.0 == prompt_type)
        .map_or(fallback, |entry| entry.1)
        .iter()
        .map(|line| line.to_string())
        .collect()
}
