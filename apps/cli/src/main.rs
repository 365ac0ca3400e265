use anyhow::Result;
use clap::Parser;
use console::style;
use promptcraft_core::PromptOptimizer;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};

const DEMO_PROMPT: &str = "请帮我写一个关于人工智能发展的专业分析报告，要求详细分析现状和趋势";

#[derive(Parser)]
#[command(name = "promptcraft")]
#[command(about = "把自然语言提示词整理成结构化 JSON", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let optimizer = PromptOptimizer::new();
    run_demo(&optimizer)?;
    run_loop(&optimizer)
}

fn run_demo(optimizer: &PromptOptimizer) -> Result<()> {
    println!("原始提示词：");
    println!("{DEMO_PROMPT}");
    println!("\n{}\n", separator());
    println!("优化后的JSON提示词：");
    println!("{}", optimizer.optimize(DEMO_PROMPT)?);
    Ok(())
}

fn run_loop(optimizer: &PromptOptimizer) -> Result<()> {
    println!("\n{}\n", separator());
    println!("{}", style("交互式提示词优化器").cyan().bold());

    let mut editor = Reedline::create();
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("请输入您的自然语言提示词（输入'quit'退出）".to_string()),
        DefaultPromptSegment::Empty,
    );

    loop {
        match editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if is_quit(line) {
                    break;
                }
                match optimizer.optimize(line) {
                    Ok(result) => {
                        println!("\n优化结果：");
                        println!("{result}");
                    }
                    Err(error) => {
                        eprintln!("{}{error}", style("处理错误：").red());
                    }
                }
            }
            Ok(Signal::CtrlC) => {
                println!("{}", style("输入 'quit' 或 Ctrl-D 退出").dim());
            }
            Ok(Signal::CtrlD) => break,
            // Editor faults count as one failed interaction, not a shutdown.
            Err(error) => {
                eprintln!("{}{error}", style("处理错误：").red());
            }
        }
    }

    println!("{}", style("再见！").dim());
    Ok(())
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit")
}

fn separator() -> String {
    "=".repeat(50)
}
