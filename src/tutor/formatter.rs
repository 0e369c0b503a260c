//! 双语格式化器
//!
//! 将生成的文本拆分为行（会话）或段落（语法讲解），对每个单元并发发起一次翻译请求，
//! 并按原始顺序组合成双语对。单个单元翻译失败不会影响整批结果。

use futures::future::join_all;
use futures::stream::{self, StreamExt};

use crate::tutor::error::TutorResult;
use crate::tutor::provider::Translator;

/// 文本拆分方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmentation {
    /// 按换行拆分（会话内容）
    Lines,
    /// 按空行拆分（语法讲解）
    Paragraphs,
}

impl Segmentation {
    fn delimiter(self) -> &'static str {
        match self {
            Segmentation::Lines => "\n",
            Segmentation::Paragraphs => "\n\n",
        }
    }
}

/// 一个原文单元及其翻译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualLine {
    pub source: String,
    pub translated: TutorResult<String>,
}

impl BilingualLine {
    pub fn is_translated(&self) -> bool {
        self.translated.is_ok()
    }
}

/// 按拆分方式切分文本，去除首尾空白并丢弃空单元
pub fn split_units(text: &str, segmentation: Segmentation) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split(segmentation.delimiter())
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_string)
        .collect()
}

/// 双语格式化
///
/// `max_concurrency` 为 `None` 时所有请求同时发出；否则同时进行的请求数不超过该值。
/// 两种方式都保持输入顺序。
pub async fn format_bilingual(
    translator: &dyn Translator,
    text: &str,
    segmentation: Segmentation,
    target_lang: &str,
    max_concurrency: Option<usize>,
) -> Vec<BilingualLine> {
    let units = split_units(text, segmentation);
    tracing::debug!("开始翻译 {} 个单元 ({:?})", units.len(), segmentation);

    let requests = units.into_iter().map(|source| async move {
        let translated = translator.translate(&source, target_lang).await;
        if let Err(ref e) = translated {
            tracing::warn!("单元翻译失败: {} ({})", source, e);
        }
        BilingualLine { source, translated }
    });

    match max_concurrency {
        Some(limit) => stream::iter(requests).buffered(limit.max(1)).collect().await,
        None => join_all(requests).await,
    }
}
