//! Static demo corpus for the front-end demo, tests, and benches.
//!
//! The first three rows are the records the StackIt front-end ships as mock
//! data; the rest pad the corpus enough for search, suggestion, and related-
//! question demos to have something to rank.

use chrono::{Duration, Utc};

use crate::models::Question;

/// A demo question row.
pub struct DemoQuestion {
    pub id: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub user: &'static str,
    pub answers: u32,
    pub votes: u32,
    pub views: u32,
    pub time_ago: &'static str,
    /// Relative offset in seconds from "now" (negative means in the past)
    pub offset: i64,
}

pub const DEMO_QUESTIONS: &[DemoQuestion] = &[
    DemoQuestion {
        id: 1,
        title: "How to join 2 columns in a data set to make a separate column in SQL",
        description: "I do not know the code for it as I am a beginner. As an example what I need to do is like there is a column 1 containing First name, and column 2 consists of last name I want a column to combine ...",
        tags: &["sql", "database"],
        user: "John Doe",
        answers: 5,
        votes: 12,
        views: 234,
        time_ago: "2 hours ago",
        offset: -2 * 60 * 60,
    },
    DemoQuestion {
        id: 2,
        title: "React useState not updating state immediately",
        description: "I'm having trouble with useState hook not updating the state immediately when I call the setter function. The component doesn't re-render with the new value...",
        tags: &["react", "javascript", "hooks"],
        user: "Jane Smith",
        answers: 3,
        votes: 8,
        views: 156,
        time_ago: "4 hours ago",
        offset: -4 * 60 * 60,
    },
    DemoQuestion {
        id: 3,
        title: "Python list comprehension with multiple conditions",
        description: "How can I create a list comprehension with multiple if conditions? I want to filter items based on multiple criteria...",
        tags: &["python", "list-comprehension"],
        user: "Mike Johnson",
        answers: 2,
        votes: 15,
        views: 89,
        time_ago: "1 day ago",
        offset: -24 * 60 * 60,
    },
    DemoQuestion {
        id: 4,
        title: "How to center a div horizontally and vertically in CSS",
        description: "I've tried margin auto and text-align center but the div never ends up in the middle of the page. Is flexbox the right tool for this?",
        tags: &["css", "flexbox"],
        user: "Sarah Lee",
        answers: 7,
        votes: 21,
        views: 512,
        time_ago: "2 days ago",
        offset: -2 * 24 * 60 * 60,
    },
    DemoQuestion {
        id: 5,
        title: "JavaScript async await inside forEach does not wait",
        description: "I'm calling an async function inside forEach but the loop finishes before any of the awaited promises resolve. Should I use a for...of loop instead?",
        tags: &["javascript", "async-await", "promises"],
        user: "Carlos Diaz",
        answers: 4,
        votes: 18,
        views: 301,
        time_ago: "3 days ago",
        offset: -3 * 24 * 60 * 60,
    },
    DemoQuestion {
        id: 6,
        title: "React useEffect cleanup function running on every render",
        description: "My useEffect cleanup runs after every render even though I passed a dependency array. The effect re-subscribes to the websocket each time...",
        tags: &["react", "hooks", "useeffect"],
        user: "Priya Patel",
        answers: 1,
        votes: 6,
        views: 97,
        time_ago: "5 days ago",
        offset: -5 * 24 * 60 * 60,
    },
    DemoQuestion {
        id: 7,
        title: "Best way to index a large SQL table for text search",
        description: "Queries with LIKE '%term%' on a table with millions of rows take seconds. What index types help for substring search in SQL databases?",
        tags: &["sql", "database", "indexing"],
        user: "Tom Becker",
        answers: 0,
        votes: 9,
        views: 143,
        time_ago: "1 week ago",
        offset: -7 * 24 * 60 * 60,
    },
    DemoQuestion {
        id: 8,
        title: "Python dictionary comprehension versus for loop performance",
        description: "Is a dictionary comprehension meaningfully faster than building the same dict in a for loop? I'm transforming a list of about a million records...",
        tags: &["python", "performance"],
        user: "Anna Kim",
        answers: 0,
        votes: 4,
        views: 61,
        time_ago: "1 week ago",
        offset: -8 * 24 * 60 * 60,
    },
];

/// Materialize the demo rows into caller-owned question records with real
/// `created_at` timestamps relative to now.
pub fn demo_questions() -> Vec<Question> {
    let now = Utc::now();
    DEMO_QUESTIONS
        .iter()
        .map(|row| Question {
            id: row.id,
            title: row.title.to_string(),
            description: Some(row.description.to_string()),
            tags: row.tags.iter().map(|t| t.to_string()).collect(),
            user: row.user.to_string(),
            votes: row.votes,
            answers: row.answers,
            views: row.views,
            time_ago: row.time_ago.to_string(),
            created_at: Some(now + Duration::seconds(row.offset)),
        })
        .collect()
}
