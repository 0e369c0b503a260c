//! 辅导会话
//!
//! 四个互斥视图用一个带数据的枚举表示；切换视图即替换该枚举，
//! 其他视图的状态随之丢弃，无需逐项重置。聊天记录属于整个会话，不随视图切换清空。

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::tutor::content::{lesson_catalog, prompts, Lesson, DEFAULT_TARGET_LANG};
use crate::tutor::error::{TutorError, TutorResult};
use crate::tutor::formatter::{format_bilingual, BilingualLine, Segmentation};
use crate::tutor::loader::{ListLoader, PageOutcome};
use crate::tutor::provider::{Generator, Translator};

/// 消息发送方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// 聊天消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// 已选中的场景或语法主题及其双语内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub label: String,
    pub lines: Vec<BilingualLine>,
}

/// 场景 / 语法主题列表视图
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub loader: ListLoader<String>,
    pub selected: Option<Selection>,
}

/// 已选中的课程
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDetail {
    pub lesson: Lesson,
    pub content: String,
    pub translated: TutorResult<String>,
}

/// 词汇课程视图
#[derive(Debug, Clone, Default)]
pub struct LessonView {
    pub loader: ListLoader<Lesson>,
    pub selected: Option<LessonDetail>,
}

/// 当前视图
#[derive(Debug, Clone)]
pub enum View {
    Help(ListView),
    Grammar(ListView),
    Vocabulary(LessonView),
    Chat,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Help(_) => "help",
            View::Grammar(_) => "grammar",
            View::Vocabulary(_) => "vocabulary",
            View::Chat => "chat",
        }
    }
}

/// 会话配置
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// 翻译目标语言
    pub target_lang: String,
    /// 单批翻译的最大并发数，`None` 表示不限制
    pub max_concurrency: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target_lang: DEFAULT_TARGET_LANG.to_string(),
            max_concurrency: None,
        }
    }
}

/// 辅导会话
pub struct TutorSession {
    generator: Arc<dyn Generator>,
    translator: Arc<dyn Translator>,
    config: SessionConfig,
    view: View,
    transcript: Vec<Message>,
}

impl TutorSession {
    /// 创建会话，初始视图为场景列表（尚未加载）
    pub fn new(
        generator: Arc<dyn Generator>,
        translator: Arc<dyn Translator>,
        config: SessionConfig,
    ) -> Self {
        Self {
            generator,
            translator,
            config,
            view: View::Help(ListView::default()),
            transcript: Vec::new(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// 切换到场景视图并加载第一页
    pub async fn show_help(&mut self) -> PageOutcome {
        self.view = View::Help(ListView::default());
        self.load_more().await
    }

    /// 切换到语法视图并加载第一页
    pub async fn show_grammar(&mut self) -> PageOutcome {
        self.view = View::Grammar(ListView::default());
        self.load_more().await
    }

    /// 切换到词汇视图并加载课程目录
    pub async fn show_vocabulary(&mut self) -> PageOutcome {
        self.view = View::Vocabulary(LessonView::default());
        self.load_more().await
    }

    /// 切换到聊天视图
    pub fn show_chat(&mut self) {
        self.view = View::Chat;
    }

    /// 加载当前列表视图的下一页
    ///
    /// 加载失败只会关闭分页并记录日志，不向调用方报错。
    pub async fn load_more(&mut self) -> PageOutcome {
        let (list, prompt) = match &mut self.view {
            View::Help(list) => (list, prompts::SCENARIO_LIST),
            View::Grammar(list) => (list, prompts::GRAMMAR_LIST),
            View::Vocabulary(lessons) => {
                // 静态目录只有一页
                let outcome = lessons
                    .loader
                    .load_with(|| async { Ok::<_, TutorError>(lesson_catalog()) })
                    .await
                    .unwrap_or_else(|_| PageOutcome::exhausted());
                lessons.loader.mark_exhausted();
                return PageOutcome {
                    has_more: false,
                    ..outcome
                };
            }
            View::Chat => return PageOutcome::exhausted(),
        };

        match list.loader.load_from(self.generator.as_ref(), prompt).await {
            Ok(outcome) => {
                tracing::debug!(
                    "列表加载完成: 新增 {}, 共 {}, 还有更多: {}",
                    outcome.added,
                    list.loader.len(),
                    outcome.has_more
                );
                outcome
            }
            Err(e) => {
                tracing::warn!("列表加载失败，停止分页: {}", e);
                PageOutcome::exhausted()
            }
        }
    }

    /// 清空当前视图并重新加载
    pub async fn refresh(&mut self) -> PageOutcome {
        match self.view {
            View::Help(_) => self.show_help().await,
            View::Grammar(_) => self.show_grammar().await,
            View::Vocabulary(_) => self.show_vocabulary().await,
            View::Chat => PageOutcome::exhausted(),
        }
    }

    /// 按序号选择当前列表中的条目（从 0 开始）
    pub async fn select(&mut self, index: usize) -> TutorResult<()> {
        let missing = || TutorError::NotFound(format!("item #{}", index + 1));
        match &self.view {
            View::Help(list) => {
                let label = list.loader.get(index).cloned().ok_or_else(missing)?;
                self.select_scenario(&label).await
            }
            View::Grammar(list) => {
                let topic = list.loader.get(index).cloned().ok_or_else(missing)?;
                self.select_grammar(&topic).await
            }
            View::Vocabulary(lessons) => {
                let id = lessons.loader.get(index).map(|lesson| lesson.id).ok_or_else(missing)?;
                self.select_lesson(id).await
            }
            View::Chat => Err(TutorError::InvalidView {
                expected: "list",
                actual: self.view.name(),
            }),
        }
    }

    /// 生成某个场景的会话并逐行翻译
    ///
    /// 生成失败时返回错误，之前的选中内容保持不变。
    pub async fn select_scenario(&mut self, scenario: &str) -> TutorResult<()> {
        self.expect_view("help")?;
        let prompt = prompts::scenario_conversation(scenario);
        let lines = self.generate_bilingual(&prompt, Segmentation::Lines).await?;

        if let View::Help(list) = &mut self.view {
            list.selected = Some(Selection {
                label: scenario.to_string(),
                lines,
            });
        }
        Ok(())
    }

    /// 生成某个语法主题的讲解并逐段翻译
    pub async fn select_grammar(&mut self, topic: &str) -> TutorResult<()> {
        self.expect_view("grammar")?;
        let prompt = prompts::grammar_explanation(topic);
        let lines = self
            .generate_bilingual(&prompt, Segmentation::Paragraphs)
            .await?;

        if let View::Grammar(list) = &mut self.view {
            list.selected = Some(Selection {
                label: topic.to_string(),
                lines,
            });
        }
        Ok(())
    }

    /// 打开课程并翻译其正文
    pub async fn select_lesson(&mut self, id: u32) -> TutorResult<()> {
        self.expect_view("vocabulary")?;
        let lesson = match &self.view {
            View::Vocabulary(lessons) => lessons
                .loader
                .items()
                .iter()
                .find(|lesson| lesson.id == id)
                .cloned(),
            _ => None,
        }
        .ok_or_else(|| TutorError::NotFound(format!("lesson {}", id)))?;

        let content = lesson.content();
        let translated = self
            .translator
            .translate(&content, &self.config.target_lang)
            .await;
        if let Err(ref e) = translated {
            tracing::warn!("课程正文翻译失败: {}", e);
        }

        if let View::Vocabulary(lessons) = &mut self.view {
            lessons.selected = Some(LessonDetail {
                lesson,
                content,
                translated,
            });
        }
        Ok(())
    }

    /// 发送聊天消息
    ///
    /// 空白输入被忽略并返回 `None`；否则追加用户消息和机器人回复，并返回回复。
    pub async fn send_message(&mut self, input: &str) -> Option<&Message> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.transcript.push(Message::user(text));

        let prompt = prompts::scenario_conversation(text);
        let reply = match self.generator.generate(&prompt).await {
            Ok(response) => {
                match self
                    .translator
                    .translate(&response, &self.config.target_lang)
                    .await
                {
                    Ok(translated) => translated,
                    Err(e) => {
                        tracing::warn!("回复翻译失败，显示原文: {}", e);
                        format!("Translation unavailable: {}", response)
                    }
                }
            }
            Err(e) => {
                tracing::error!("获取回复失败: {}", e);
                format!("Error retrieving response: {}", e)
            }
        };

        self.transcript.push(Message::bot(reply));
        self.transcript.last()
    }

    async fn generate_bilingual(
        &self,
        prompt: &str,
        segmentation: Segmentation,
    ) -> TutorResult<Vec<BilingualLine>> {
        let text = self.generator.generate(prompt).await?;
        Ok(format_bilingual(
            self.translator.as_ref(),
            &text,
            segmentation,
            &self.config.target_lang,
            self.config.max_concurrency,
        )
        .await)
    }

    fn expect_view(&self, expected: &'static str) -> TutorResult<()> {
        if self.view.name() == expected {
            Ok(())
        } else {
            Err(TutorError::InvalidView {
                expected,
                actual: self.view.name(),
            })
        }
    }
}
