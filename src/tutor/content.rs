//! 静态内容：提示词和词汇课程目录

use serde::{Deserialize, Serialize};

/// 默认目标语言（孟加拉语）
pub const DEFAULT_TARGET_LANG: &str = "bn";

/// 发送给生成服务的提示词
pub mod prompts {
    /// 会话场景列表
    pub const SCENARIO_LIST: &str =
        "Suggest a list of common English conversation scenarios or English conversation cases.";

    /// 语法主题列表
    pub const GRAMMAR_LIST: &str =
        "Provide a list of essential English grammar topics for beginners.";

    /// 某个场景的英语会话
    pub fn scenario_conversation(scenario: &str) -> String {
        format!(
            "Provide an English conversation for the scenario: \"{}\".",
            scenario
        )
    }

    /// 某个语法主题的讲解
    pub fn grammar_explanation(topic: &str) -> String {
        format!(
            "Explain the English grammar topic: \"{}\". Provide examples.",
            topic
        )
    }
}

/// 词汇课程
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl Lesson {
    fn new(id: u32, title: &str, description: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// 课程正文
    pub fn content(&self) -> String {
        format!(
            "This is the content for the lesson: \"{}\". Here you will learn various aspects related to {}.",
            self.title,
            self.description.to_lowercase()
        )
    }
}

/// 课程目录（静态种子数据）
pub fn lesson_catalog() -> Vec<Lesson> {
    vec![
        Lesson::new(
            1,
            "Common Greetings",
            "Learn how to greet people in English.",
        ),
        Lesson::new(2, "Food Vocabulary", "Words related to food and dining."),
        Lesson::new(3, "Travel Phrases", "Useful phrases when traveling abroad."),
    ]
}
