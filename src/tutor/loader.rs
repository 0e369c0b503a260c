//! 列表加载器
//!
//! 每次加载一页文本，合并到去重有序集合中。远端调用是无状态的，可能每次都返回
//! 相同内容，因此去重在本地完成；空页是唯一的终止信号。

use std::future::Future;
use std::hash::Hash;

use crate::tutor::error::{TutorError, TutorResult};
use crate::tutor::ordered_set::OrderedSet;
use crate::tutor::provider::Generator;

/// 单次加载的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOutcome {
    /// 本页新增（之前未出现过）的条目数
    pub added: usize,
    /// 是否还有更多内容
    pub has_more: bool,
}

impl PageOutcome {
    pub fn exhausted() -> Self {
        Self {
            added: 0,
            has_more: false,
        }
    }
}

/// 累积列表和"还有更多"标志
#[derive(Debug, Clone)]
pub struct ListLoader<T> {
    items: OrderedSet<T>,
    has_more: bool,
}

impl<T: Eq + Hash + Clone> ListLoader<T> {
    pub fn new() -> Self {
        Self {
            items: OrderedSet::new(),
            has_more: true,
        }
    }

    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// 合并一页数据；空页会关闭分页，无论之前已累积多少条目
    pub fn merge_page(&mut self, page: Vec<T>) -> PageOutcome {
        if page.is_empty() {
            self.has_more = false;
        }
        let added = self.items.extend_unique(page);
        PageOutcome {
            added,
            has_more: self.has_more,
        }
    }

    /// 标记数据源已耗尽
    pub fn mark_exhausted(&mut self) {
        self.has_more = false;
    }

    /// 清空列表并重新开启分页
    pub fn reset(&mut self) {
        self.items.clear();
        self.has_more = true;
    }

    /// 获取并合并下一页
    ///
    /// 分页已结束时不会调用 `fetch`。获取失败同样会关闭分页，错误返回给调用方。
    pub async fn load_with<F, Fut, E>(&mut self, fetch: F) -> Result<PageOutcome, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        if !self.has_more {
            return Ok(PageOutcome::exhausted());
        }

        match fetch().await {
            Ok(page) => Ok(self.merge_page(page)),
            Err(e) => {
                self.has_more = false;
                Err(e)
            }
        }
    }
}

impl<T: Eq + Hash + Clone> Default for ListLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl ListLoader<String> {
    /// 通过生成服务获取一页以换行分隔的标签
    pub async fn load_from(
        &mut self,
        generator: &dyn Generator,
        prompt: &str,
    ) -> TutorResult<PageOutcome> {
        self.load_with(|| async move {
            let text = generator.generate(prompt).await?;
            Ok::<_, TutorError>(parse_page(&text))
        })
        .await
    }
}

/// 将以换行分隔的文本拆分为标签，去除首尾空白并丢弃空行
pub fn parse_page(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
