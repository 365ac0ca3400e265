use pretty_assertions::assert_eq;
use promptcraft_core::{OutputFormat, PromptOptimizer, PromptStructure, PromptType, Tone};

const REPORT_PROMPT: &str = "请帮我写一个关于人工智能发展的专业分析报告，要求详细分析现状和趋势";

#[test]
fn report_prompt_is_fully_classified() {
    let optimizer = PromptOptimizer::new();
    let analysis = optimizer.analyze(REPORT_PROMPT);

    assert_eq!(analysis.role, "你是一位AI助手");
    assert_eq!(analysis.task, "写一个关于人工智能发展的专业分析报告");
    assert_eq!(analysis.context, "");
    assert_eq!(analysis.requirements, vec!["生成高质量的回答"]);
    assert_eq!(analysis.format, OutputFormat::Report);
    assert_eq!(analysis.tone, Tone::Professional);
    assert_eq!(analysis.prompt_type, PromptType::Analytical);
}

#[test]
fn restructure_substitutes_context_default_and_sections() {
    let optimizer = PromptOptimizer::new();
    let structure = optimizer.restructure(REPORT_PROMPT);

    assert_eq!(structure.context, "用户需要专业的帮助");
    assert_eq!(structure.examples, vec!["示例：分析该策略的优缺点"]);
    assert_eq!(structure.constraints, vec!["基于事实和数据", "保持客观性"]);
}

#[test]
fn optimize_is_deterministic() {
    let optimizer = PromptOptimizer::new();
    let first = optimizer.optimize(REPORT_PROMPT).unwrap();
    let second = optimizer.optimize(REPORT_PROMPT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn serialized_output_round_trips() {
    let optimizer = PromptOptimizer::new();
    let serialized = optimizer.optimize(REPORT_PROMPT).unwrap();
    let parsed: PromptStructure = serde_json::from_str(&serialized).unwrap();
    assert_eq!(parsed, optimizer.restructure(REPORT_PROMPT));
}

#[test]
fn serialized_output_keeps_key_order_and_indentation() {
    let optimizer = PromptOptimizer::new();
    let serialized = optimizer.optimize(REPORT_PROMPT).unwrap();

    let keys = [
        "\"role\"",
        "\"task\"",
        "\"context\"",
        "\"requirements\"",
        "\"format\"",
        "\"examples\"",
        "\"constraints\"",
        "\"tone\"",
        "\"prompt_type\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| serialized.find(key).expect("key present"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    assert!(serialized.starts_with("{\n  \"role\""));
    // Chinese text stays literal instead of \u escapes.
    assert!(serialized.contains("人工智能"));
    assert!(!serialized.contains("\\u"));
}

#[test]
fn enum_fields_serialize_as_fixed_tags() {
    let optimizer = PromptOptimizer::new();
    let serialized = optimizer.optimize("用要点教我做菜").unwrap();
    assert!(serialized.contains("\"format\": \"bullet_points\""));
    assert!(serialized.contains("\"prompt_type\": \"instructional\""));
    assert!(serialized.contains("\"tone\": \"professional\""));
}

#[test]
fn sequences_are_never_empty() {
    let optimizer = PromptOptimizer::new();
    for input in ["", "随便聊聊", REPORT_PROMPT, "quit 之后再说", "要求：准确"] {
        let structure = optimizer.restructure(input);
        assert!(!structure.requirements.is_empty(), "input: {input}");
        assert!(!structure.examples.is_empty(), "input: {input}");
        assert!(!structure.constraints.is_empty(), "input: {input}");
        assert!(!structure.role.is_empty(), "input: {input}");
    }
}
