//! Question listing: search filter, sort, and page slicing.
//!
//! This module is pure; handlers take a snapshot from the question store and
//! hand it to [`list_questions`].

use std::cmp::Ordering;

use common::{ListQuestionsQuery, PaginationDto, QuestionDto, QuestionListResponse};

use crate::config::CatalogConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortField {
    VoteCount,
    AnswerCount,
    ViewCount,
    #[default]
    CreatedAt,
}

impl SortField {
    /// Unknown names fall back to `CreatedAt`.
    pub fn from_param(value: &str) -> Self {
        match value {
            "voteCount" => SortField::VoteCount,
            "answerCount" => SortField::AnswerCount,
            "viewCount" => SortField::ViewCount,
            _ => SortField::CreatedAt,
        }
    }

    fn compare(self, a: &QuestionDto, b: &QuestionDto) -> Ordering {
        match self {
            SortField::VoteCount => a.vote_count.cmp(&b.vote_count),
            SortField::AnswerCount => a.answer_count.cmp(&b.answer_count),
            SortField::ViewCount => a.view_count.cmp(&b.view_count),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Only the exact string `desc` means descending.
    pub fn from_param(value: &str) -> Self {
        if value == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Effective listing parameters after defaults and clamping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub page: u64,
    pub limit: u64,
    pub search: String,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl ListParams {
    /// Applies defaults and clamps `page` and `limit` to at least 1. `limit`
    /// is only capped when `max_page_size` is configured.
    pub fn from_query(query: ListQuestionsQuery, config: &CatalogConfig) -> Self {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or_else(|| i64::try_from(config.default_page_size).unwrap_or(i64::MAX))
            .max(1);

        let limit = match config.max_page_size {
            Some(max) => limit.unsigned_abs().min(max.max(1)),
            None => limit.unsigned_abs(),
        };

        Self {
            page: page.unsigned_abs(),
            limit,
            search: query.search.unwrap_or_default(),
            sort_by: query
                .sort_by
                .as_deref()
                .map(SortField::from_param)
                .unwrap_or_default(),
            sort_order: query
                .sort_order
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or_default(),
        }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::from_query(ListQuestionsQuery::default(), &CatalogConfig::default())
    }
}

pub fn matches_search(question: &QuestionDto, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || question.title.to_lowercase().contains(needle_lower)
        || question.description.to_lowercase().contains(needle_lower)
}

/// Filters, sorts and slices `questions` (given in store order).
///
/// The sort is stable, so equal keys keep their store order in both
/// directions. A page past the end yields no items but still reports the
/// full filtered total.
pub fn list_questions(questions: Vec<QuestionDto>, params: &ListParams) -> QuestionListResponse {
    let needle = params.search.to_lowercase();
    let mut filtered: Vec<QuestionDto> = questions
        .into_iter()
        .filter(|q| matches_search(q, &needle))
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = params.sort_by.compare(a, b);
        match params.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let pagination = paginate(filtered.len() as u64, params.page, params.limit);

    let start = params.page.saturating_sub(1).saturating_mul(params.limit);
    let page_items = filtered
        .into_iter()
        .skip(usize::try_from(start).unwrap_or(usize::MAX))
        .take(usize::try_from(params.limit).unwrap_or(usize::MAX))
        .collect();

    QuestionListResponse {
        questions: page_items,
        pagination,
    }
}

/// Page metadata for `total` items. `limit` must be at least 1.
pub fn paginate(total: u64, page: u64, limit: u64) -> PaginationDto {
    let total_pages = total.div_ceil(limit.max(1));
    PaginationDto {
        page,
        limit,
        total,
        total_pages,
        has_prev: page > 1,
        has_next: page < total_pages,
    }
}
