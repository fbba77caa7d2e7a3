//! Demo records loaded at startup when `seed_demo_data` is on.

use common::{AuthorSnapshot, QuestionDto, TagDto};

use crate::store::UserRecord;

pub const DEMO_EMAIL: &str = "demo@stackit.com";
pub const DEMO_PASSWORD: &str = "demo123";

pub fn demo_users() -> Vec<UserRecord> {
    vec![UserRecord {
        id: 1,
        email: DEMO_EMAIL.to_string(),
        name: "Demo User".to_string(),
        password: DEMO_PASSWORD.to_string(),
        reputation: 1250,
        avatar: None,
    }]
}

fn author(id: i64, name: &str, reputation: i64) -> AuthorSnapshot {
    AuthorSnapshot {
        id,
        name: name.to_string(),
        reputation,
    }
}

fn tags(pairs: &[(i64, &str)]) -> Vec<TagDto> {
    pairs
        .iter()
        .map(|&(id, name)| TagDto {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn demo_questions() -> Vec<QuestionDto> {
    vec![
        QuestionDto {
            id: 1,
            title: "How to implement authentication in React?".to_string(),
            description: "I'm building a React application and need to implement user authentication. What are the best practices for handling login, logout, and protecting routes?".to_string(),
            author: author(1, "John Doe", 1250),
            tags: tags(&[(1, "react"), (2, "authentication")]),
            vote_count: 15,
            answer_count: 3,
            view_count: 245,
            is_resolved: true,
            created_at: "2024-01-15T10:30:00Z".to_string(),
            updated_at: "2024-01-16T14:20:00Z".to_string(),
        },
        QuestionDto {
            id: 2,
            title: "Best practices for Node.js API design".to_string(),
            description: "What are the recommended patterns and practices for designing RESTful APIs in Node.js? I'm particularly interested in error handling, validation, and security.".to_string(),
            author: author(2, "Jane Smith", 890),
            tags: tags(&[(3, "nodejs"), (4, "api"), (5, "rest")]),
            vote_count: 8,
            answer_count: 2,
            view_count: 156,
            is_resolved: false,
            created_at: "2024-01-14T16:45:00Z".to_string(),
            updated_at: "2024-01-14T16:45:00Z".to_string(),
        },
        QuestionDto {
            id: 3,
            title: "Database optimization techniques".to_string(),
            description: "My application is experiencing slow database queries. What are some effective techniques for optimizing database performance in a web application?".to_string(),
            author: author(3, "Mike Johnson", 2100),
            tags: tags(&[(6, "database"), (7, "optimization"), (8, "performance")]),
            vote_count: 22,
            answer_count: 5,
            view_count: 387,
            is_resolved: true,
            created_at: "2024-01-13T09:15:00Z".to_string(),
            updated_at: "2024-01-15T11:30:00Z".to_string(),
        },
    ]
}
