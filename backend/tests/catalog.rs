use backend::catalog::{list_questions, paginate, ListParams, SortField, SortOrder};
use backend::config::CatalogConfig;
use backend::seed::demo_questions;
use common::{AuthorSnapshot, ListQuestionsQuery, QuestionDto};

fn question(id: i64, votes: i64, created_at: &str) -> QuestionDto {
    QuestionDto {
        id,
        title: format!("Question {id}"),
        description: "Body".to_string(),
        author: AuthorSnapshot {
            id: 1,
            name: "Tester".to_string(),
            reputation: 0,
        },
        tags: vec![],
        vote_count: votes,
        answer_count: 0,
        view_count: 0,
        is_resolved: false,
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
    }
}

fn params(sort_by: SortField, sort_order: SortOrder) -> ListParams {
    ListParams {
        sort_by,
        sort_order,
        ..ListParams::default()
    }
}

fn ids(questions: &[QuestionDto]) -> Vec<i64> {
    questions.iter().map(|q| q.id).collect()
}

#[test]
fn test_default_params() {
    let params = ListParams::default();
    assert_eq!(params.page, 1);
    assert_eq!(params.limit, 20);
    assert_eq!(params.search, "");
    assert_eq!(params.sort_by, SortField::CreatedAt);
    assert_eq!(params.sort_order, SortOrder::Desc);
}

#[test]
fn test_sort_parameter_parsing() {
    assert_eq!(SortField::from_param("voteCount"), SortField::VoteCount);
    assert_eq!(SortField::from_param("answerCount"), SortField::AnswerCount);
    assert_eq!(SortField::from_param("viewCount"), SortField::ViewCount);
    assert_eq!(SortField::from_param("title"), SortField::CreatedAt);
    assert_eq!(SortOrder::from_param("desc"), SortOrder::Desc);
    assert_eq!(SortOrder::from_param("asc"), SortOrder::Asc);
    assert_eq!(SortOrder::from_param("sideways"), SortOrder::Asc);
}

#[test]
fn test_query_clamping_respects_config() {
    let config = CatalogConfig {
        default_page_size: 5,
        max_page_size: Some(10),
    };

    let params = ListParams::from_query(ListQuestionsQuery::default(), &config);
    assert_eq!(params.limit, 5);

    let params = ListParams::from_query(
        ListQuestionsQuery {
            page: Some(-3),
            limit: Some(50),
            ..ListQuestionsQuery::default()
        },
        &config,
    );
    assert_eq!(params.page, 1);
    assert_eq!(params.limit, 10);
}

#[test]
fn test_limit_has_no_upper_bound_by_default() {
    let params = ListParams::from_query(
        ListQuestionsQuery {
            limit: Some(150),
            ..ListQuestionsQuery::default()
        },
        &CatalogConfig::default(),
    );
    assert_eq!(params.limit, 150);

    let questions: Vec<QuestionDto> = (1..=120)
        .map(|id| question(id, 0, "2024-01-01T00:00:00Z"))
        .collect();
    let result = list_questions(questions, &params);
    assert_eq!(result.questions.len(), 120);
    assert_eq!(result.pagination.limit, 150);
    assert_eq!(result.pagination.total_pages, 1);
}

#[test]
fn test_descending_order_holds_for_adjacent_pairs() {
    let result = list_questions(
        demo_questions(),
        &params(SortField::AnswerCount, SortOrder::Desc),
    );
    for pair in result.questions.windows(2) {
        assert!(pair[0].answer_count >= pair[1].answer_count);
    }
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let questions = vec![
        question(1, 5, "2024-01-01T00:00:00Z"),
        question(2, 9, "2024-01-02T00:00:00Z"),
        question(3, 5, "2024-01-03T00:00:00Z"),
        question(4, 5, "2024-01-04T00:00:00Z"),
    ];

    let desc = list_questions(
        questions.clone(),
        &params(SortField::VoteCount, SortOrder::Desc),
    );
    assert_eq!(ids(&desc.questions), vec![2, 1, 3, 4]);

    let asc = list_questions(questions, &params(SortField::VoteCount, SortOrder::Asc));
    assert_eq!(ids(&asc.questions), vec![1, 3, 4, 2]);
}

#[test]
fn test_created_at_sorts_as_text() {
    let questions = vec![
        question(1, 0, "2024-01-15T10:30:00Z"),
        question(2, 0, "2023-12-31T23:59:59Z"),
        question(3, 0, "2024-02-01T00:00:00Z"),
    ];

    let result = list_questions(questions, &params(SortField::CreatedAt, SortOrder::Asc));
    assert_eq!(ids(&result.questions), vec![2, 1, 3]);
}

#[test]
fn test_total_counts_filtered_set_not_page() {
    let questions: Vec<QuestionDto> = (1..=7)
        .map(|id| question(id, id, "2024-01-01T00:00:00Z"))
        .collect();

    let result = list_questions(
        questions,
        &ListParams {
            page: 2,
            limit: 3,
            search: "question".to_string(),
            ..ListParams::default()
        },
    );

    assert_eq!(result.questions.len(), 3);
    assert_eq!(result.pagination.total, 7);
    assert_eq!(result.pagination.total_pages, 3);
    assert!(result.pagination.has_prev);
    assert!(result.pagination.has_next);
}

#[test]
fn test_paginate_math() {
    let cases = [
        // (total, page, limit, total_pages, has_prev, has_next)
        (0, 1, 20, 0, false, false),
        (20, 1, 20, 1, false, false),
        (21, 1, 20, 2, false, true),
        (21, 2, 20, 2, true, false),
        (5, 9, 2, 3, true, false),
    ];

    for (total, page, limit, total_pages, has_prev, has_next) in cases {
        let pagination = paginate(total, page, limit);
        assert_eq!(pagination.total_pages, total_pages, "total={total} limit={limit}");
        assert_eq!(pagination.has_prev, has_prev);
        assert_eq!(pagination.has_next, has_next);
    }
}

#[test]
fn test_huge_page_does_not_overflow() {
    let result = list_questions(
        demo_questions(),
        &ListParams {
            page: u64::MAX,
            limit: 100,
            ..ListParams::default()
        },
    );

    assert!(result.questions.is_empty());
    assert_eq!(result.pagination.total, 3);
}
