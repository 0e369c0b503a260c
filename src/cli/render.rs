//! 终端渲染
//!
//! 所有函数只生成字符串，便于测试。

use std::fmt::Write;

use crate::tutor::{BilingualLine, LessonView, ListView, Message, Sender, TutorResult, View};

/// 渲染当前视图
pub fn render_view(view: &View, transcript: &[Message]) -> String {
    match view {
        View::Help(list) => render_list("10-Minute English Help", list),
        View::Grammar(list) => render_list("Grammar Basics", list),
        View::Vocabulary(lessons) => render_lessons(lessons),
        View::Chat => render_transcript(transcript),
    }
}

fn render_list(title: &str, list: &ListView) -> String {
    let mut out = format!("== {} ==\n", title);
    for (i, label) in list.loader.items().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, label);
    }
    if list.loader.is_empty() {
        out.push_str("  (nothing loaded)\n");
    }
    if list.loader.has_more() {
        out.push_str("  ... /more to load more\n");
    }

    if let Some(selection) = &list.selected {
        let _ = writeln!(out, "\n-- {} --", selection.label);
        out.push_str(&render_bilingual(&selection.lines));
    }
    out
}

fn render_lessons(lessons: &LessonView) -> String {
    let mut out = String::from("== Vocabulary Lessons ==\n");
    for (i, lesson) in lessons.loader.items().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} - {}", i + 1, lesson.title, lesson.description);
    }

    if let Some(detail) = &lessons.selected {
        let _ = writeln!(out, "\n-- {} --", detail.lesson.title);
        let _ = writeln!(out, "{}", detail.content);
        let _ = writeln!(out, "  > {}", translation_text(&detail.translated));
    }
    out
}

/// 渲染双语对，翻译失败的单元显示错误信息
pub fn render_bilingual(lines: &[BilingualLine]) -> String {
    let mut out = String::new();
    for line in lines {
        let _ = writeln!(out, "{}", line.source);
        let _ = writeln!(out, "  > {}", translation_text(&line.translated));
    }
    out
}

fn translation_text(translated: &TutorResult<String>) -> String {
    match translated {
        Ok(text) => text.clone(),
        Err(e) => format!("Translation unavailable: {}", e),
    }
}

/// 渲染聊天记录
pub fn render_transcript(transcript: &[Message]) -> String {
    let mut out = String::from("== Chat ==\n");
    for message in transcript {
        out.push_str(&render_message(message));
    }
    out
}

pub fn render_message(message: &Message) -> String {
    let speaker = match message.sender {
        Sender::User => "You",
        Sender::Bot => "Bot",
    };
    format!("{}: {}\n", speaker, message.text)
}
